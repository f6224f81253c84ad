use async_trait::async_trait;
use bytes::Bytes;
use dns_unlocker_application::ports::{
    BodyStream, HttpResponse, HttpTransport, ProgressReporter, ResolverBoundClientFactory,
};
use dns_unlocker_domain::{DnsServerAddress, DomainError, ProbeResult, SpeedResult, Throughput};
use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted behaviour of the transport bound to one server.
#[derive(Clone, Debug)]
pub enum FakeBehavior {
    /// Responds with the status line and an empty body.
    Status(&'static str),
    /// Responds `200 OK` with chunks of the given sizes, then ends.
    Body(Vec<usize>),
    /// Responds with the status line after a delay.
    Delayed(Duration, &'static str),
    /// Responds `200 OK` and streams `chunk` bytes every `interval`, forever.
    Endless { chunk: usize, interval: Duration },
    /// Streams the chunks, then fails mid-body.
    BrokenBody(Vec<usize>),
    /// The request itself fails.
    Fail(&'static str),
    /// Never produces a response.
    Hang,
    Panic,
}

#[derive(Default)]
struct Shared {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    requests: Mutex<Vec<String>>,
}

pub struct FakeClientFactory {
    behaviors: HashMap<String, FakeBehavior>,
    default: FakeBehavior,
    unbuildable: HashSet<String>,
    shared: Arc<Shared>,
}

impl FakeClientFactory {
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            default: FakeBehavior::Fail("no route"),
            unbuildable: HashSet::new(),
            shared: Arc::new(Shared::default()),
        }
    }

    pub fn with(mut self, server: &str, behavior: FakeBehavior) -> Self {
        self.behaviors.insert(server.to_string(), behavior);
        self
    }

    pub fn with_default(mut self, behavior: FakeBehavior) -> Self {
        self.default = behavior;
        self
    }

    pub fn unbuildable(mut self, server: &str) -> Self {
        self.unbuildable.insert(server.to_string());
        self
    }

    /// Servers in the order their requests were issued.
    pub fn requests(&self) -> Vec<String> {
        self.shared.requests.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.shared.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Default for FakeClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverBoundClientFactory for FakeClientFactory {
    fn make_client(&self, server: &DnsServerAddress) -> Result<Arc<dyn HttpTransport>, DomainError> {
        if self.unbuildable.contains(server.as_str()) {
            return Err(DomainError::TransportError {
                server: server.to_string(),
                reason: "client build failed".to_string(),
            });
        }
        let behavior = self
            .behaviors
            .get(server.as_str())
            .cloned()
            .unwrap_or_else(|| self.default.clone());
        Ok(Arc::new(FakeTransport {
            server: server.to_string(),
            behavior,
            shared: Arc::clone(&self.shared),
        }))
    }
}

struct FakeTransport {
    server: String,
    behavior: FakeBehavior,
    shared: Arc<Shared>,
}

struct InFlight<'a>(&'a Shared);

impl<'a> InFlight<'a> {
    fn enter(shared: &'a Shared) -> Self {
        let now = shared.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        shared.max_in_flight.fetch_max(now, Ordering::SeqCst);
        Self(shared)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

fn chunks(sizes: Vec<usize>) -> BodyStream {
    stream::iter(sizes.into_iter().map(|n| Ok(Bytes::from(vec![0u8; n])))).boxed()
}

fn ok(body: BodyStream) -> HttpResponse {
    HttpResponse::new("200 OK", body)
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, DomainError> {
        self.shared.requests.lock().unwrap().push(self.server.clone());
        let _guard = InFlight::enter(&self.shared);

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(DomainError::InvalidTargetUrl(url.to_string()));
        }

        match self.behavior.clone() {
            FakeBehavior::Status(line) => Ok(HttpResponse::new(line, chunks(vec![]))),
            FakeBehavior::Body(sizes) => Ok(ok(chunks(sizes))),
            FakeBehavior::Delayed(delay, line) => {
                tokio::time::sleep(delay).await;
                Ok(HttpResponse::new(line, chunks(vec![])))
            }
            FakeBehavior::Endless { chunk, interval } => {
                let body = stream::unfold((), move |_| async move {
                    tokio::time::sleep(interval).await;
                    Some((Ok(Bytes::from(vec![0u8; chunk])), ()))
                })
                .boxed();
                Ok(ok(body))
            }
            FakeBehavior::BrokenBody(sizes) => {
                let body = chunks(sizes)
                    .chain(stream::once(async {
                        Err(DomainError::IoError("connection reset".to_string()))
                    }))
                    .boxed();
                Ok(ok(body))
            }
            FakeBehavior::Fail(reason) => Err(DomainError::TransportError {
                server: self.server.clone(),
                reason: reason.to_string(),
            }),
            FakeBehavior::Hang => futures::future::pending().await,
            FakeBehavior::Panic => panic!("transport exploded for {}", self.server),
        }
    }
}

/// Captures everything sent over the progress side channel.
#[derive(Default)]
pub struct RecordingReporter {
    pub probes: Mutex<Vec<ProbeResult>>,
    pub speeds: Mutex<Vec<(SpeedResult, Throughput)>>,
}

impl RecordingReporter {
    pub fn probe_results(&self) -> Vec<ProbeResult> {
        self.probes.lock().unwrap().clone()
    }

    pub fn speed_results(&self) -> Vec<(SpeedResult, Throughput)> {
        self.speeds.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn probe_finished(&self, result: &ProbeResult) {
        self.probes.lock().unwrap().push(result.clone());
    }

    fn speed_measured(&self, result: &SpeedResult, throughput: Throughput) {
        self.speeds.lock().unwrap().push((result.clone(), throughput));
    }
}
