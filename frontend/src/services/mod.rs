pub mod fixtures;
pub mod logging;
