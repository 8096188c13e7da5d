//! Built-in generic components.
//!
//! Implementations that don't depend on a remote store and can back tests,
//! local tooling and the command line.

mod memory;

pub use memory::EphemeralStore;
