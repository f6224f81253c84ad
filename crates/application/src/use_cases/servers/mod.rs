mod check_servers;
mod find_best_server;

pub use check_servers::CheckServersUseCase;
pub use find_best_server::{FindBestServerUseCase, SpeedReport};
