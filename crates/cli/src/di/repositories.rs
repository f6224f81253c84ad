use dns_unlocker_domain::{Config, DomainError};
use dns_unlocker_infrastructure::http::ReqwestClientFactory;
use dns_unlocker_infrastructure::repositories::YamlServerListRepository;
use std::sync::Arc;
use std::time::Duration;

pub struct Repositories {
    pub server_lists: Arc<YamlServerListRepository>,
    pub clients: Arc<ReqwestClientFactory>,
}

impl Repositories {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        Ok(Self {
            server_lists: Arc::new(YamlServerListRepository::new(config.servers.clone())?),
            clients: Arc::new(ReqwestClientFactory::new(
                Duration::from_secs(config.probe.connect_timeout),
                Duration::from_millis(config.resolver.query_timeout_ms),
            )),
        })
    }
}
