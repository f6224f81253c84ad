pub mod forwarding;
pub mod transport;
pub mod upstream_resolver;

pub use upstream_resolver::UpstreamResolver;
