//! Server configuration

use std::time::Duration;

/// Server configuration - everything the formatter and transport need,
/// resolved once at startup.
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LABEL_SERVER_PORT | 8001 | HTTP listen port |
/// | LABEL_PING_TIMEOUT | 0.5 | Liveness probe timeout (seconds) |
/// | PRINT_CONNECT_TIMEOUT | 2.0 | Delivery connect timeout (seconds) |
/// | PRINT_WRITE_TIMEOUT | 3.0 | Delivery write timeout (seconds) |
/// | MAX_COPIES | 50 | Upper bound for the repeat count |
/// | LABEL_WIDTH | 400 | Label canvas width (dots) |
/// | LABEL_HEIGHT | 240 | Label canvas height (dots) |
/// | LABEL_LOG_DIR | logs | Rotating request log directory |
///
/// The printer TCP port is the Zebra standard 9100 and is not overridable.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port
    pub server_port: u16,
    /// Raw-printing TCP port on the devices
    pub printer_port: u16,
    /// Liveness probe timeout
    pub ping_timeout: Duration,
    /// Delivery connect-phase timeout
    pub connect_timeout: Duration,
    /// Delivery write-phase timeout
    pub write_timeout: Duration,
    /// Upper bound for the repeat count
    pub max_copies: u32,
    /// Label canvas width in dots
    pub label_width: u32,
    /// Label canvas height in dots
    pub label_height: u32,
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_secs(key: &str, default: f64) -> Duration {
    Duration::from_secs_f64(env_parse(key, default))
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults above
    pub fn from_env() -> Self {
        Self {
            server_port: env_parse("LABEL_SERVER_PORT", 8001),
            printer_port: zpl_printer::PRINTER_PORT,
            ping_timeout: env_secs("LABEL_PING_TIMEOUT", 0.5),
            connect_timeout: env_secs("PRINT_CONNECT_TIMEOUT", 2.0),
            write_timeout: env_secs("PRINT_WRITE_TIMEOUT", 3.0),
            max_copies: env_parse("MAX_COPIES", 50),
            label_width: env_parse("LABEL_WIDTH", 400),
            label_height: env_parse("LABEL_HEIGHT", 240),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
