//! Label Server - LAN print relay for Zebra label printers
//!
//! Accepts label-printing requests over HTTP from the ERP front-end and
//! relays generated ZPL to thermal printers via raw TCP (port 9100).
//!
//! # Module structure
//!
//! ```text
//! label-server/src/
//! ├── core/          # Configuration, state, server
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod core;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::logger::init_logger;
pub use crate::utils::{AppError, AppResult};

pub fn print_banner() {
    println!(
        r#"
   __        __       __
  / /  ___ _/ /  ___ / /
 / /__/ _ `/ _ \/ -_) /
/____/\_,_/_.__/\__/_/   server v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
