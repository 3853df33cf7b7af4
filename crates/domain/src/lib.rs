//! Quad9 DoH Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_response;
pub mod errors;
pub mod provides;
pub mod record_type;
pub mod registry;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::{normalize_domain, normalize_subnet, DohQueryParams};
pub use dns_response::{DnsAnswer, DnsQuestion, DnsResponse};
pub use errors::DomainError;
pub use provides::ProvidesMode;
pub use registry::{EndpointRegistry, QUAD9_UPSTREAMS};
