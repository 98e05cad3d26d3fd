//! Shared server state

use std::sync::Arc;

use zpl_printer::{LabelOptions, NetworkPrinter, PrintResult};

use crate::core::Config;

/// Shared state handed to every handler.
///
/// Holds only the resolved configuration; no entity outlives a single
/// request, so there is nothing else to share.
#[derive(Debug, Clone)]
pub struct ServerState {
    config: Arc<Config>,
}

impl ServerState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build a transport for the given device address with the configured
    /// timeouts. Fails with an address-format error for anything that is not
    /// a literal IPv4 address.
    pub fn printer(&self, ip: &str) -> PrintResult<NetworkPrinter> {
        Ok(NetworkPrinter::new(ip, self.config.printer_port)?
            .with_ping_timeout(self.config.ping_timeout)
            .with_connect_timeout(self.config.connect_timeout)
            .with_write_timeout(self.config.write_timeout))
    }

    /// Canvas and clamp settings for label generation
    pub fn label_options(&self) -> LabelOptions {
        LabelOptions {
            width: self.config.label_width,
            height: self.config.label_height,
            max_copies: self.config.max_copies,
        }
    }
}
