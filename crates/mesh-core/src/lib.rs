pub mod boundary;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod draw;
pub mod edges;
pub mod error;
pub mod field;
pub mod pulse;
pub mod rng;
pub mod scene;
pub mod surface;
pub mod timing;
pub mod viewport;

pub use boundary::*;
pub use config::*;
pub use constants::*;
pub use debounce::*;
pub use draw::*;
pub use edges::*;
pub use error::*;
pub use field::*;
pub use pulse::*;
pub use rng::*;
pub use scene::*;
pub use surface::*;
pub use timing::*;
pub use viewport::*;
