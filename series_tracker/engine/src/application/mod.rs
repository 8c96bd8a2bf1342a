//! Application Layer
//!
//! Wires the domain to a concrete store and exposes one method per operation.

pub mod registry;

pub use registry::Application;
