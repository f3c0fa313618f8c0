pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod annealer;
mod bounds;
pub mod callback;
mod error;
mod history;
mod objective;

pub use annealer::{Annealer, Run};
pub use bounds::Bounds;
pub use error::AnnealError;
pub use history::History;
pub use objective::{Maximize, Minimize, Objective};
