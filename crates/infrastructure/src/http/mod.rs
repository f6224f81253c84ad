pub mod client_factory;
pub mod reqwest_transport;

pub use client_factory::ReqwestClientFactory;
pub use reqwest_transport::ReqwestTransport;
