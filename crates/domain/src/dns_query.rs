//! Per-query parameter construction and input normalization.

use crate::errors::DomainError;
use ipnetwork::IpNetwork;
use std::net::IpAddr;

pub const PARAM_NAME: &str = "name";
pub const PARAM_TYPE: &str = "type";
pub const PARAM_ECS: &str = "edns_client_subnet";

/// Normalized parameters of a single DoH JSON query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DohQueryParams {
    pub name: String,
    pub record_type: String,
    pub edns_client_subnet: Option<String>,
}

impl DohQueryParams {
    /// Builds the parameters for one query. An empty (or all-whitespace)
    /// `subnet` means no ECS hint is sent.
    pub fn new(domain: &str, record_type: &str, subnet: &str) -> Result<Self, DomainError> {
        let name = normalize_domain(domain)?;
        let record_type = record_type.trim().to_string();

        let subnet = subnet.trim();
        let edns_client_subnet = if subnet.is_empty() {
            None
        } else {
            Some(normalize_subnet(subnet)?)
        };

        Ok(Self {
            name,
            record_type,
            edns_client_subnet,
        })
    }

    /// Query string pairs in wire order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        pairs.push((PARAM_NAME, self.name.clone()));
        pairs.push((PARAM_TYPE, self.record_type.clone()));
        if let Some(ecs) = &self.edns_client_subnet {
            pairs.push((PARAM_ECS, ecs.clone()));
        }
        pairs
    }
}

/// Trims `domain` and converts it to its IDNA ASCII-compatible form.
pub fn normalize_domain(domain: &str) -> Result<String, DomainError> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(DomainError::NameEncoding("empty domain name".to_string()));
    }

    idna::domain_to_ascii(trimmed)
        .map_err(|e| DomainError::NameEncoding(format!("{}: {}", trimmed, e)))
}

/// Canonical CIDR form of an IP or IP/prefix string.
///
/// A bare address gets the full-length prefix (/32 or /128) and host bits are
/// cleared, so `10.1.2.3/8` becomes `10.0.0.0/8`.
pub fn normalize_subnet(subnet: &str) -> Result<String, DomainError> {
    let subnet = subnet.trim();
    let invalid = || DomainError::InvalidSubnet(subnet.to_string());

    let (addr, prefix) = match subnet.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (subnet, None),
    };

    let ip: IpAddr = addr.parse().map_err(|_| invalid())?;
    let prefix = match prefix {
        Some(p) => p.parse::<u8>().map_err(|_| invalid())?,
        None if ip.is_ipv4() => 32,
        None => 128,
    };

    let network = IpNetwork::new(ip, prefix).map_err(|_| invalid())?;
    let canonical = IpNetwork::new(network.network(), prefix).map_err(|_| invalid())?;

    Ok(canonical.to_string())
}
