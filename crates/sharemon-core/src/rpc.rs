//! Blocking client for the daemon's status RPC.
//!
//! The exchange is one newline-terminated JSON request answered by one
//! newline-terminated JSON object carrying either `result` (the share
//! snapshots) or `error` (a message). The daemon owns the protocol;
//! this client performs exactly one fetch per connection. No retries,
//! no timeouts at this layer.

use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpStream};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RemoteTarget;
use crate::models::ShareSnapshot;

/// Errors surfaced by one status round trip.
#[derive(Debug, Clone)]
pub enum RpcError {
    /// The daemon could not be reached.
    Connect(String),
    /// The connection failed mid-exchange.
    Io(String),
    /// The response did not match the expected envelope.
    Protocol(String),
    /// The daemon answered with an error payload.
    Daemon(String),
}

impl std::fmt::Display for RpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RpcError::Connect(msg) => write!(f, "failed to connect to daemon: {}", msg),
            RpcError::Io(msg) => write!(f, "connection error: {}", msg),
            RpcError::Protocol(msg) => write!(f, "unexpected daemon response: {}", msg),
            RpcError::Daemon(msg) => write!(f, "daemon reported an error: {}", msg),
        }
    }
}

impl std::error::Error for RpcError {}

#[derive(Serialize)]
struct StatusRequest<'a> {
    method: &'a str,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct StatusResponse {
    error: Option<String>,
    result: Option<Vec<ShareSnapshot>>,
}

/// One blocking connection to the daemon's RPC port.
pub struct DaemonClient {
    stream: TcpStream,
    reader: BufReader<TcpStream>,
}

impl DaemonClient {
    /// Opens a connection to the resolved daemon target.
    pub fn connect(target: &RemoteTarget) -> Result<Self, RpcError> {
        let stream = TcpStream::connect((target.host.as_str(), target.port))
            .map_err(|e| RpcError::Connect(format!("{}: {}", target, e)))?;
        let reader = stream
            .try_clone()
            .map(BufReader::new)
            .map_err(|e| RpcError::Io(e.to_string()))?;
        debug!("connected to daemon at {}", target);
        Ok(Self { stream, reader })
    }

    /// Issues the single `status` request and decodes the response.
    ///
    /// A response with `error` set never touches `result`; a response
    /// carrying neither is a protocol error.
    pub fn status(&mut self) -> Result<Vec<ShareSnapshot>, RpcError> {
        let request = serde_json::to_string(&StatusRequest { method: "status" })
            .map_err(|e| RpcError::Protocol(e.to_string()))?;
        self.stream.write_all(request.as_bytes()).map_err(io_err)?;
        self.stream.write_all(b"\n").map_err(io_err)?;
        self.stream.flush().map_err(io_err)?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(io_err)?;
        if read == 0 {
            return Err(RpcError::Protocol(
                "daemon closed the connection without answering".to_string(),
            ));
        }

        let response: StatusResponse =
            serde_json::from_str(line.trim_end()).map_err(|e| RpcError::Protocol(e.to_string()))?;
        if let Some(message) = response.error {
            return Err(RpcError::Daemon(message));
        }
        let shares = response.result.ok_or_else(|| {
            RpcError::Protocol("response carries neither result nor error".to_string())
        })?;
        debug!("daemon reported {} shares", shares.len());
        Ok(shares)
    }

    /// Shuts the connection down once the response has been consumed.
    /// Error paths release the stream on drop instead.
    pub fn close(self) -> Result<(), RpcError> {
        self.stream.shutdown(Shutdown::Both).map_err(io_err)
    }
}

fn io_err(e: std::io::Error) -> RpcError {
    RpcError::Io(e.to_string())
}
