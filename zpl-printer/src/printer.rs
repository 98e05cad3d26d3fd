//! Printer transport for sending ZPL documents
//!
//! Thermal label printers accept raw documents over TCP port 9100. Every
//! operation owns its socket for its own duration; nothing is pooled or
//! reused, and the stream is dropped (closed) on every exit path.

use crate::error::{PrintError, PrintResult};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{info, instrument, warn};

/// Standard raw-printing port for Zebra printers
pub const PRINTER_PORT: u16 = 9100;

/// Trait for printer adapters
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Send a raw document to the printer
    async fn print(&self, data: &[u8]) -> PrintResult<()>;

    /// Check if the printer is online/reachable
    async fn is_online(&self) -> bool;
}

/// Network label printer (TCP port 9100)
#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    addr: SocketAddr,
    connect_timeout: Duration,
    write_timeout: Duration,
    ping_timeout: Duration,
}

impl NetworkPrinter {
    /// Create a new network printer.
    ///
    /// `host` must be a literal IPv4 address; anything else is rejected with
    /// [`PrintError::InvalidAddress`] before any network use.
    pub fn new(host: &str, port: u16) -> PrintResult<Self> {
        let ip: Ipv4Addr = host
            .parse()
            .map_err(|_| PrintError::InvalidAddress(host.to_string()))?;

        Ok(Self {
            addr: SocketAddr::V4(SocketAddrV4::new(ip, port)),
            connect_timeout: Duration::from_secs(2),
            write_timeout: Duration::from_secs(3),
            ping_timeout: Duration::from_millis(500),
        })
    }

    /// Set the connect-phase timeout for [`print`](Printer::print)
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the write-phase timeout for [`print`](Printer::print)
    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Set the timeout for [`is_online`](Printer::is_online)
    pub fn with_ping_timeout(mut self, timeout: Duration) -> Self {
        self.ping_timeout = timeout;
        self
    }

    /// Get the printer address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Printer for NetworkPrinter {
    #[instrument(skip(data), fields(addr = %self.addr, data_len = data.len()))]
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        if data.is_empty() {
            return Err(PrintError::EmptyDocument);
        }

        info!("Connecting to printer");

        let mut stream = tokio::time::timeout(self.connect_timeout, TcpStream::connect(self.addr))
            .await
            .map_err(|_| PrintError::Timeout(format!("Connection timeout: {}", self.addr)))?
            .map_err(|e| PrintError::Connection(format!("{}: {}", self.addr, e)))?;

        info!("Connected, sending {} bytes", data.len());

        tokio::time::timeout(self.write_timeout, async {
            stream.write_all(data).await?;
            stream.flush().await
        })
        .await
        .map_err(|_| PrintError::Timeout(format!("Write timeout: {}", self.addr)))?
        .map_err(|e| {
            PrintError::Io(std::io::Error::new(
                e.kind(),
                format!("Write failed to {}: {}", self.addr, e),
            ))
        })?;

        info!("Label sent successfully");
        Ok(())
    }

    #[instrument(fields(addr = %self.addr))]
    async fn is_online(&self) -> bool {
        match tokio::time::timeout(self.ping_timeout, TcpStream::connect(self.addr)).await {
            Ok(Ok(_)) => {
                info!("Printer online");
                true
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Printer offline");
                false
            }
            Err(_) => {
                warn!("Printer check timeout");
                false
            }
        }
    }
}
