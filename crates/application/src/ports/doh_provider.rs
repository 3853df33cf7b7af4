use async_trait::async_trait;
use quad9_doh_domain::{DnsResponse, DomainError, ProvidesMode};
use tokio_util::sync::CancellationToken;

/// A DoH JSON upstream adapter.
///
/// Lets a multi-provider resolver hold heterogeneous adapters behind one type.
#[async_trait]
pub trait DohProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn provides(&self) -> ProvidesMode;

    fn set_provides(&mut self, mode: ProvidesMode) -> Result<(), DomainError>;

    async fn query(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        record_type: &str,
    ) -> Result<DnsResponse, DomainError> {
        self.ecs_query(cancel, domain, record_type, "").await
    }

    async fn ecs_query(
        &self,
        cancel: &CancellationToken,
        domain: &str,
        record_type: &str,
        subnet: &str,
    ) -> Result<DnsResponse, DomainError>;
}
