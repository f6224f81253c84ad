//! DNS Unlocker Domain Layer
pub mod config;
pub mod data_size;
pub mod dns_server;
pub mod errors;
pub mod probe;
pub mod speed;
pub mod target;

pub use config::{CliOverrides, Config};
pub use data_size::{format_data_size, Throughput};
pub use dns_server::{DnsServerAddress, DNS_PORT};
pub use errors::DomainError;
pub use probe::{ProbeOutcome, ProbeResult, StatusLine, UnreachableCause};
pub use speed::{select_best, BestServer, EvaluationRun, SpeedResult, TransferOutcome};
pub use target::{is_valid_domain, TargetUrl};
