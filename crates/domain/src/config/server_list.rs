use super::root::default_config_dir;
use crate::DnsServerAddress;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_LIST_URL: &str =
    "https://raw.githubusercontent.com/403unlocker/403Unlocker-cli/refs/heads/main/config/dns.yml";

/// Where server lists live on disk and where a fresh copy can be fetched.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerListConfig {
    #[serde(default = "default_candidates_file")]
    pub candidates_file: String,

    #[serde(default = "default_reachable_file")]
    pub reachable_file: String,

    #[serde(default = "default_remote_url")]
    pub remote_url: String,
}

impl Default for ServerListConfig {
    fn default() -> Self {
        Self {
            candidates_file: default_candidates_file(),
            reachable_file: default_reachable_file(),
            remote_url: default_remote_url(),
        }
    }
}

impl ServerListConfig {
    /// Re-roots both list files under `dir`, keeping their file names.
    pub fn relocate(&mut self, dir: &str) {
        let dir = std::path::Path::new(dir);
        self.candidates_file = dir.join("dns.yml").to_string_lossy().into_owned();
        self.reachable_file = dir.join("checked_dns.yml").to_string_lossy().into_owned();
    }
}

fn default_candidates_file() -> String {
    default_config_dir()
        .join("dns.yml")
        .to_string_lossy()
        .into_owned()
}

fn default_reachable_file() -> String {
    default_config_dir()
        .join("checked_dns.yml")
        .to_string_lossy()
        .into_owned()
}

fn default_remote_url() -> String {
    DEFAULT_SERVER_LIST_URL.to_string()
}

/// Candidate list file: `dnsServers: [..]`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServerListDocument {
    #[serde(rename = "dnsServers", default)]
    pub dns_servers: Vec<String>,
}

impl ServerListDocument {
    pub fn servers(&self) -> Vec<DnsServerAddress> {
        to_addresses(&self.dns_servers)
    }
}

/// Reachable-subset cache file: `validDNSServers: [..]`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ReachableServerDocument {
    #[serde(rename = "validDNSServers", default)]
    pub valid_dns_servers: Vec<String>,
}

impl ReachableServerDocument {
    pub fn from_servers(servers: &[DnsServerAddress]) -> Self {
        Self {
            valid_dns_servers: servers.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn servers(&self) -> Vec<DnsServerAddress> {
        to_addresses(&self.valid_dns_servers)
    }
}

fn to_addresses(raw: &[String]) -> Vec<DnsServerAddress> {
    raw.iter()
        .map(DnsServerAddress::new)
        .filter(|s| !s.is_empty())
        .collect()
}
