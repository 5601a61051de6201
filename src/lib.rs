pub mod cli;
pub mod core;
mod logging;
pub mod player;
pub mod prelude;

pub use crate::core::*;
pub use logging::init_logging;
pub use player::*;
