pub mod errors;
pub mod logging;
pub mod probe;
pub mod resolver;
pub mod root;
pub mod server_list;
pub mod speed;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use probe::ProbeConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server_list::{ReachableServerDocument, ServerListConfig, ServerListDocument};
pub use speed::SpeedConfig;
