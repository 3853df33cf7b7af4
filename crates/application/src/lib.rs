//! Quad9 DoH Application Layer
pub mod ports;
pub mod services;

pub use services::Quad9Client;

/// Version of the adapter crates.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn license() -> &'static str {
    env!("CARGO_PKG_LICENSE")
}

pub fn authors() -> &'static str {
    env!("CARGO_PKG_AUTHORS")
}
