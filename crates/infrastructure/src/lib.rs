//! Quad9 DoH Infrastructure Layer
pub mod dns;
