use super::Repositories;
use dns_unlocker_application::ports::ProgressReporter;
use dns_unlocker_application::use_cases::{
    CheckServersUseCase, EvaluateSpeedsUseCase, FindBestServerUseCase, ProbeReachabilityUseCase,
};
use dns_unlocker_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub check_servers: Arc<CheckServersUseCase>,
    pub find_best_server: Arc<FindBestServerUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories, reporter: Arc<dyn ProgressReporter>) -> Self {
        let mut probe =
            ProbeReachabilityUseCase::new(repos.clients.clone()).with_reporter(reporter.clone());
        if let Some(limit) = config.probe.max_in_flight {
            probe = probe.with_max_in_flight(limit);
        }

        let check_servers = Arc::new(CheckServersUseCase::new(
            repos.server_lists.clone(),
            Arc::new(probe),
        ));

        let evaluate = EvaluateSpeedsUseCase::new(repos.clients.clone(), config.speed.scratch_root())
            .with_reporter(reporter);

        let find_best_server = Arc::new(FindBestServerUseCase::new(
            repos.server_lists.clone(),
            check_servers.clone(),
            Arc::new(evaluate),
        ));

        Self {
            check_servers,
            find_best_server,
        }
    }
}
