//! Single-slot debounce for bursty host events such as window resize.

/// Holds at most one pending timer. Scheduling a new one hands back the
/// previous handle so the host can cancel it.
#[derive(Debug)]
pub struct Debouncer<H> {
    delay_ms: f64,
    pending: Option<Pending<H>>,
}

#[derive(Debug)]
struct Pending<H> {
    handle: H,
    deadline_ms: f64,
}

impl<H> Debouncer<H> {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Install `handle` as the live timer, due `delay_ms` after `now_ms`.
    /// Returns the superseded handle, if any.
    pub fn schedule(&mut self, now_ms: f64, handle: H) -> Option<H> {
        let previous = self.pending.replace(Pending {
            handle,
            deadline_ms: now_ms + self.delay_ms,
        });
        previous.map(|p| p.handle)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline_ms(&self) -> Option<f64> {
        self.pending.as_ref().map(|p| p.deadline_ms)
    }

    /// Poll-driven hosts: fires (once) when the live timer's deadline has passed.
    pub fn due(&mut self, now_ms: f64) -> bool {
        match &self.pending {
            Some(p) if now_ms >= p.deadline_ms => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Fire the live timer if `is_live` recognises it as the one reporting in.
    pub fn complete_if<F>(&mut self, is_live: F) -> bool
    where
        F: FnOnce(&H) -> bool,
    {
        let live = self.pending.as_ref().is_some_and(|p| is_live(&p.handle));
        if live {
            self.pending = None;
        }
        live
    }

    /// Drop the live timer without firing it, returning its handle.
    pub fn cancel(&mut self) -> Option<H> {
        self.pending.take().map(|p| p.handle)
    }
}

impl<H: PartialEq> Debouncer<H> {
    /// Callback-driven hosts: a timer reports in when it elapses. Only the
    /// live timer fires; stale ones are ignored.
    pub fn complete(&mut self, handle: &H) -> bool {
        self.complete_if(|live| live == handle)
    }
}
