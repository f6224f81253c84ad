use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpeedConfig {
    /// Download budget per server, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Parent directory for per-run scratch downloads. Defaults to the
    /// system temp directory.
    #[serde(default)]
    pub scratch_dir: Option<String>,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            scratch_dir: None,
        }
    }
}

impl SpeedConfig {
    pub fn scratch_root(&self) -> std::path::PathBuf {
        self.scratch_dir
            .as_ref()
            .map(std::path::PathBuf::from)
            .unwrap_or_else(std::env::temp_dir)
    }
}

fn default_timeout() -> u64 {
    10
}
