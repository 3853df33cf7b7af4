mod quad9_client;

pub use quad9_client::{Quad9Client, DNS_JSON_CONTENT_TYPE, PROVIDER_NAME};
