use mesh_core::Debouncer;

#[test]
fn burst_of_two_events_fires_once_after_quiet_period() {
    let mut deb: Debouncer<u32> = Debouncer::new(120.0);
    let mut fired_at = Vec::new();
    let mut next_handle = 0;
    for now in 0..=400 {
        let now = now as f64;
        if now == 0.0 || now == 50.0 {
            next_handle += 1;
            deb.schedule(now, next_handle);
        }
        if deb.due(now) {
            fired_at.push(now);
        }
    }
    assert_eq!(fired_at, vec![170.0]);
}

#[test]
fn scheduling_returns_superseded_handle() {
    let mut deb = Debouncer::new(120.0);
    assert_eq!(deb.schedule(0.0, 1), None);
    assert_eq!(deb.schedule(50.0, 2), Some(1));
    assert_eq!(deb.deadline_ms(), Some(170.0));
}

#[test]
fn only_live_handle_completes() {
    let mut deb = Debouncer::new(120.0);
    deb.schedule(0.0, 7);
    deb.schedule(10.0, 8);
    assert!(!deb.complete(&7));
    assert!(deb.is_pending());
    assert!(deb.complete(&8));
    assert!(!deb.complete(&8));
    assert!(!deb.is_pending());
}

#[test]
fn cancel_clears_slot() {
    let mut deb = Debouncer::new(120.0);
    deb.schedule(0.0, "resize");
    assert_eq!(deb.cancel(), Some("resize"));
    assert!(!deb.due(1_000.0));
}
