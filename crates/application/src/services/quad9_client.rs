use async_trait::async_trait;
use quad9_doh_domain::{
    DnsResponse, DohQueryParams, DomainError, EndpointRegistry, ProvidesMode, QUAD9_UPSTREAMS,
};
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::ports::{DohProvider, HttpRequest, HttpTransport};

/// Tag stamped on every response produced by this adapter.
pub const PROVIDER_NAME: &str = "quad9";

/// Media type of JSON-encoded DoH answers.
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// DoH JSON client for the Quad9 resolvers.
///
/// Holds no per-query state: one instance can serve concurrent queries as long
/// as its transport can.
pub struct Quad9Client {
    provides: ProvidesMode,
    registry: Arc<EndpointRegistry>,
    transport: Box<dyn HttpTransport>,
}

impl Quad9Client {
    pub fn new(transport: impl HttpTransport + 'static) -> Self {
        Self::with_registry(transport, Arc::clone(&QUAD9_UPSTREAMS))
    }

    /// Client resolving endpoints through `registry` instead of the Quad9
    /// table.
    pub fn with_registry(
        transport: impl HttpTransport + 'static,
        registry: Arc<EndpointRegistry>,
    ) -> Self {
        Self {
            provides: ProvidesMode::default(),
            registry,
            transport: Box::new(transport),
        }
    }

    pub fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    pub fn provides(&self) -> ProvidesMode {
        self.provides
    }

    /// URL queries are currently sent to.
    pub fn endpoint(&self) -> Result<&str, DomainError> {
        self.registry.resolve(self.provides)
    }

    /// Switches the upstream variant. On error the active mode is unchanged.
    pub fn set_provides(&mut self, mode: ProvidesMode) -> Result<(), DomainError> {
        self.registry.resolve(mode)?;
        self.provides = mode;
        Ok(())
    }

    /// Switches the upstream variant by its numeric index.
    pub fn set_provides_index(&mut self, index: u8) -> Result<(), DomainError> {
        self.set_provides(ProvidesMode::from_index(index)?)
    }

    pub async fn query(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        record_type: &str,
    ) -> Result<DnsResponse, DomainError> {
        self.ecs_query(cancel, domain, record_type, "").await
    }

    /// Resolves `domain` with an optional EDNS client subnet hint.
    ///
    /// A decoded answer with a non-zero status comes back as
    /// [`DomainError::UpstreamStatus`], which still carries the response.
    #[instrument(skip(self, cancel), fields(provider = PROVIDER_NAME, provides = %self.provides))]
    pub async fn ecs_query(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        record_type: &str,
        subnet: &str,
    ) -> Result<DnsResponse, DomainError> {
        let params = DohQueryParams::new(domain, record_type, subnet)?;
        let url = self.endpoint()?;

        let request = HttpRequest::get(url)
            .with_query(params.to_pairs())
            .with_header("accept", DNS_JSON_CONTENT_TYPE);

        debug!(
            url,
            name = %params.name,
            record_type = %params.record_type,
            ecs = ?params.edns_client_subnet,
            "Sending DoH JSON query"
        );

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(canceled(url)),
            result = self.transport.get(&request, cancel) => result?,
        };

        let http_status = response.status();
        if !(200..300).contains(&http_status) {
            return Err(DomainError::HttpStatus {
                url: url.to_string(),
                status: http_status,
            });
        }

        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(canceled(url)),
            result = response.bytes() => result?,
        };

        let mut answer = DnsResponse::from_json(&body)?;
        answer.provider = PROVIDER_NAME.to_string();

        debug!(
            url,
            status = answer.status,
            answers = answer.answer.len(),
            "DoH JSON response decoded"
        );

        if answer.status != 0 {
            return Err(DomainError::UpstreamStatus {
                code: answer.status,
                response: Box::new(answer),
            });
        }

        Ok(answer)
    }
}

fn canceled(url: &str) -> DomainError {
    DomainError::TransportCanceled {
        url: url.to_string(),
    }
}

impl fmt::Display for Quad9Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PROVIDER_NAME)
    }
}

#[async_trait]
impl DohProvider for Quad9Client {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn provides(&self) -> ProvidesMode {
        self.provides
    }

    fn set_provides(&mut self, mode: ProvidesMode) -> Result<(), DomainError> {
        Quad9Client::set_provides(self, mode)
    }

    async fn ecs_query(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        record_type: &str,
        subnet: &str,
    ) -> Result<DnsResponse, DomainError> {
        Quad9Client::ecs_query(self, cancel, domain, record_type, subnet).await
    }
}
