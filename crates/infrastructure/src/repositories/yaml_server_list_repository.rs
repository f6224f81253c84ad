use async_trait::async_trait;
use dns_unlocker_application::ports::ServerListRepository;
use dns_unlocker_domain::config::{
    ReachableServerDocument, ServerListConfig, ServerListDocument,
};
use dns_unlocker_domain::{DnsServerAddress, DomainError};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Server lists stored as single-key YAML files.
pub struct YamlServerListRepository {
    config: ServerListConfig,
    http: reqwest::Client,
}

impl YamlServerListRepository {
    pub fn new(config: ServerListConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { config, http })
    }

    async fn download(&self) -> Result<String, DomainError> {
        let url = &self.config.remote_url;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to download {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UnexpectedStatus(format!("{} from {}", status, url)));
        }

        response
            .text()
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to read {}: {}", url, e)))
    }
}

#[async_trait]
impl ServerListRepository for YamlServerListRepository {
    async fn load_candidates(&self) -> Result<Vec<DnsServerAddress>, DomainError> {
        let document: ServerListDocument = read_document(&self.config.candidates_file).await?;
        let servers = document.servers();
        debug!(file = %self.config.candidates_file, servers = servers.len(), "Candidate list loaded");
        Ok(servers)
    }

    async fn refresh_candidates(&self) -> Result<(), DomainError> {
        let contents = self.download().await?;

        // Never replace a local list with something unreadable.
        let document = parse_document::<ServerListDocument>(&contents, &self.config.remote_url)?;

        write_file(&self.config.candidates_file, &contents).await?;
        info!(
            url = %self.config.remote_url,
            file = %self.config.candidates_file,
            servers = document.dns_servers.len(),
            "Candidate list refreshed"
        );
        Ok(())
    }

    async fn save_reachable(&self, servers: &[DnsServerAddress]) -> Result<(), DomainError> {
        let document = ReachableServerDocument::from_servers(servers);
        let contents = serde_yaml::to_string(&document)
            .map_err(|e| DomainError::ConfigError(format!("Failed to encode server list: {}", e)))?;

        write_file(&self.config.reachable_file, &contents).await?;
        debug!(file = %self.config.reachable_file, servers = servers.len(), "Reachable list saved");
        Ok(())
    }
}

async fn read_document<T: DeserializeOwned>(path: &str) -> Result<T, DomainError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to read {}: {}", path, e)))?;
    parse_document(&contents, path)
}

fn parse_document<T: DeserializeOwned>(contents: &str, origin: &str) -> Result<T, DomainError> {
    serde_yaml::from_str(contents)
        .map_err(|e| DomainError::ConfigError(format!("Failed to parse {}: {}", origin, e)))
}

async fn write_file(path: &str, contents: &str) -> Result<(), DomainError> {
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            DomainError::IoError(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to write {}: {}", path, e)))
}
