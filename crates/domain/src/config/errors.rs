#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("probe.max_in_flight cannot be 0")]
    ZeroWorkerCap,

    #[error("Server list path {0} cannot be empty")]
    EmptyServerListPath(&'static str),

    #[error("servers.remote_url is not an http(s) URL: {0}")]
    InvalidRemoteUrl(String),
}
