use clap::Parser;
use quad9_doh_application::Quad9Client;
use quad9_doh_domain::{CliOverrides, ProvidesMode};
use quad9_doh_infrastructure::dns::transport::HttpsTransport;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

mod bootstrap;

#[derive(Parser)]
#[command(name = "quad9-doh")]
#[command(version)]
#[command(about = "Resolve names through the Quad9 DNS-over-HTTPS JSON API")]
struct Cli {
    /// Domain name to resolve (Unicode names are IDNA-encoded)
    domain: String,

    /// Record type (A, AAAA, MX, TXT, ...)
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: String,

    /// EDNS client subnet hint (IP or CIDR)
    #[arg(short = 's', long)]
    subnet: Option<String>,

    /// Upstream variant: default, secured, unsecured (or 0, 1, 2)
    #[arg(short = 'p', long)]
    provides: Option<ProvidesMode>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        provides: cli.provides,
        timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!(
        version = quad9_doh_application::version(),
        license = quad9_doh_application::license(),
        provides = %config.upstream.provides,
        "Starting quad9-doh"
    );

    let transport = HttpsTransport::from_config(&config.upstream)?;
    let mut client = Quad9Client::new(transport);
    client.set_provides(config.upstream.provides)?;

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, canceling query");
            ctrl_c.cancel();
        }
    });

    let subnet = cli.subnet.as_deref().unwrap_or("");
    let endpoint = client.endpoint()?;
    debug!(endpoint, domain = %cli.domain, record_type = %cli.record_type, "Resolving");

    match client
        .ecs_query(&cancel, &cli.domain, &cli.record_type, subnet)
        .await
    {
        Ok(response) => {
            bootstrap::print_response(&response)?;
            Ok(())
        }
        Err(e) => {
            if let Some(response) = e.response() {
                bootstrap::print_response(response)?;
            }
            Err(e.into())
        }
    }
}
