#![allow(dead_code)]
#![allow(unused_imports)]

mod fake_transport;
mod mock_repositories;

pub use fake_transport::{FakeBehavior, FakeClientFactory, RecordingReporter};
pub use mock_repositories::MockServerListRepository;

use dns_unlocker_domain::DnsServerAddress;

pub fn servers(addrs: &[&str]) -> Vec<DnsServerAddress> {
    addrs.iter().map(|a| DnsServerAddress::new(a)).collect()
}
