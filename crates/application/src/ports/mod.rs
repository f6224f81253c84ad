mod http_transport;
mod progress_reporter;
mod server_list_repository;

pub use http_transport::{BodyStream, HttpResponse, HttpTransport, ResolverBoundClientFactory};
pub use progress_reporter::{NoopProgressReporter, ProgressReporter};
pub use server_list_repository::ServerListRepository;
