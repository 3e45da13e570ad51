//! Configuration and dependency wiring.

mod dependencies;

pub use dependencies::{init_engine, Dependencies};
