use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Cap on concurrent probes. `None` probes every server at once.
    #[serde(default)]
    pub max_in_flight: Option<usize>,

    /// Connect timeout applied by every resolver-bound client, in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            max_in_flight: None,
            connect_timeout: default_connect_timeout(),
        }
    }
}

fn default_connect_timeout() -> u64 {
    10
}
