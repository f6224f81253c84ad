//! DNS Unlocker Application Layer
//!
//! The evaluation engine: reachability probing and speed evaluation over a
//! candidate list of upstream DNS servers, plus the workflows that feed them
//! from persisted server lists.
pub mod ports;
pub mod use_cases;
