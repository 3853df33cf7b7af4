mod doh_provider;
mod http_transport;

pub use doh_provider::DohProvider;
pub use http_transport::{HttpRequest, HttpResponse, HttpTransport};
