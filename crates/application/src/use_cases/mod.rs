pub mod probe;
pub mod servers;
pub mod speed;

pub use probe::{ProbeReachabilityUseCase, ProbeReport};
pub use servers::{CheckServersUseCase, FindBestServerUseCase, SpeedReport};
pub use speed::EvaluateSpeedsUseCase;
