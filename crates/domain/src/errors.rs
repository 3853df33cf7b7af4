use crate::dns_response::DnsResponse;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Unsupported provides mode: {0}")]
    UnsupportedProvides(String),

    #[error("Invalid domain name encoding: {0}")]
    NameEncoding(String),

    #[error("Invalid EDNS client subnet: {0}")]
    InvalidSubnet(String),

    #[error("Transport error talking to {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("Transport timeout talking to {url}")]
    TransportTimeout { url: String },

    #[error("Query to {url} was canceled")]
    TransportCanceled { url: String },

    #[error("Upstream {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to decode DoH response: {0}")]
    Decode(String),

    #[error("Upstream {} answered with status {code}", .response.provider)]
    UpstreamStatus {
        code: i32,
        response: Box<DnsResponse>,
    },
}

impl DomainError {
    /// True for every failure raised while talking to the upstream over HTTP,
    /// cancellation and timeout included.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. }
                | Self::TransportTimeout { .. }
                | Self::TransportCanceled { .. }
                | Self::HttpStatus { .. }
        )
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::TransportCanceled { .. })
    }

    /// The decoded answer that accompanies an `UpstreamStatus` failure.
    pub fn response(&self) -> Option<&DnsResponse> {
        match self {
            Self::UpstreamStatus { response, .. } => Some(response),
            _ => None,
        }
    }

    pub fn into_response(self) -> Option<DnsResponse> {
        match self {
            Self::UpstreamStatus { response, .. } => Some(*response),
            _ => None,
        }
    }
}
