use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

const RCODE_NXDOMAIN: u8 = 3;

/// What the mock server puts in its answers.
#[derive(Clone, Copy, Debug)]
pub enum MockAnswer {
    /// A queries get one A record; AAAA queries get an empty NOERROR answer.
    Ipv4(Ipv4Addr),
    NxDomain,
    /// Receives queries and never answers.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds an ephemeral loopback port.
    pub async fn start(answer: MockAnswer) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let counter = Arc::clone(&queries);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = build_mock_response(&buf[..len], answer) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Echoes the question back with the configured answer. Expects a query
/// without additional records, so QTYPE is the second-to-last 16-bit word.
fn build_mock_response(query: &[u8], answer: MockAnswer) -> Option<Vec<u8>> {
    if query.len() < 16 {
        return None;
    }
    let qtype = u16::from_be_bytes([query[query.len() - 4], query[query.len() - 3]]);

    let record = match answer {
        MockAnswer::Silent => return None,
        MockAnswer::Ipv4(ip) if qtype == 1 => Some(ip),
        _ => None,
    };
    let rcode = match answer {
        MockAnswer::NxDomain => RCODE_NXDOMAIN,
        _ => 0,
    };

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]);
    // QR=1, RD=1 / RA=1 plus RCODE
    response.push(0x81);
    response.push(0x80 | rcode);
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&[0x00, u8::from(record.is_some())]);
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&query[12..]);

    if let Some(ip) = record {
        response.extend_from_slice(&[
            0xc0, 0x0c, // pointer to the question name
            0x00, 0x01, // A
            0x00, 0x01, // IN
            0x00, 0x00, 0x00, 0x3c, // TTL 60
            0x00, 0x04,
        ]);
        response.extend_from_slice(&ip.octets());
    }

    Some(response)
}
