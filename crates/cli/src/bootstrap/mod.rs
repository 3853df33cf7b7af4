mod config;
mod logging;
mod output;

pub use config::load_config;
pub use logging::init_logging;
pub use output::print_response;
