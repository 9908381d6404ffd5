use std::fmt;
use std::io;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tracing::trace;

/// An open probe connection. Owns the socket; dropping it closes it.
pub struct Connection {
    peer: String,
    _socket: Box<dyn Send>,
}

impl Connection {
    pub fn new<S>(peer: impl Into<String>, socket: S) -> Self
    where
        S: Send + 'static,
    {
        Self {
            peer: peer.into(),
            _socket: Box::new(socket),
        }
    }

    pub fn peer(&self) -> &str {
        &self.peer
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("peer", &self.peer)
            .finish_non_exhaustive()
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        trace!(peer = %self.peer, "probe connection released");
    }
}

/// Capability to open a TCP connection to `host:port`.
///
/// Implementations need not bound their own duration;
/// [`probe_host`](super::probe_host) does.
#[async_trait]
pub trait Dial: Send + Sync {
    async fn dial(&self, host: &str, port: u16) -> io::Result<Connection>;
}

/// Plain TCP over tokio; resolves `host` with the system resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpDialer;

#[async_trait]
impl Dial for TcpDialer {
    async fn dial(&self, host: &str, port: u16) -> io::Result<Connection> {
        let stream = TcpStream::connect((host, port)).await?;
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| format!("{host}:{port}"));
        Ok(Connection::new(peer, stream))
    }
}
