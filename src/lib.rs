pub mod config;
pub mod local;
pub mod logging;
pub mod prelude;

pub use wellops_core as core;
