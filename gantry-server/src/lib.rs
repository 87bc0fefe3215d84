//! Gantry server assembly
//!
//! Wires configuration, the stub storage layer and the REST application into
//! a runnable service. The binary in `main.rs` is a thin shell around
//! [`startup`].

pub mod startup;

pub use startup::{build_app, init_tracing};
