//! DNS Unlocker Infrastructure Layer
//!
//! Adapters behind the application ports: resolver-bound HTTP clients built
//! on `reqwest`, the UDP DNS stub that feeds them, and YAML server lists.
pub mod dns;
pub mod http;
pub mod repositories;
