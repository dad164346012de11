//! DAISY Online Delivery Protocol client library for PMOMusic
//!
//! This crate provides a blocking Rust client for DAISY Online (DODP v1)
//! services: the SOAP web services used by talking-book libraries to lend
//! accessible publications to Reading Systems.
//!
//! # Features
//!
//! - **SOAP layer**: envelope construction and parsing, generic extraction
//!   of the response element, typed SOAP faults
//! - **Session**: cookie-based session carried by the client across calls
//! - **Transport**: gzip responses, per-request timeout, cancellation and
//!   deadlines through [`CallContext`]
//! - **Operations**: the 14 DODP v1 operations, from `logOn` to the
//!   bookmark operations
//!
//! # Example
//!
//! ```no_run
//! use pmodaisy::{DaisyClient, content_list};
//!
//! fn main() -> pmodaisy::Result<()> {
//!     let mut client = DaisyClient::new("https://daisy.example.org/service", None)?;
//!
//!     if !client.log_on("reader", "secret")? {
//!         eprintln!("logOn refused");
//!         return Ok(());
//!     }
//!
//!     let issued = client.get_content_list(content_list::ISSUED, 0, -1)?;
//!     for item in &issued.content_items {
//!         let resources = client.get_content_resources(&item.id)?;
//!         println!("{}: {} resources", item.id, resources.resources.len());
//!     }
//!
//!     client.log_off()?;
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every operation returns [`Result`]. A remote SOAP fault is
//! [`Error::Fault`], whose message is the service's `faultstring`:
//!
//! ```no_run
//! # use pmodaisy::DaisyClient;
//! # let client = DaisyClient::new("https://daisy.example.org/service", None).unwrap();
//! match client.log_on("reader", "wrong") {
//!     Ok(true) => println!("logged on"),
//!     Ok(false) => println!("refused"),
//!     Err(e) if e.fault().is_some() => println!("fault: {}", e),
//!     Err(e) => println!("transport or encoding error: {}", e),
//! }
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod messages;
pub mod models;
pub mod operations;
pub mod soap;

// Re-exports
pub use client::{ClientBuilder, DaisyClient};
pub use config::DaisyConfig;
pub use context::CallContext;
pub use error::{EncodingError, Error, Result, TransportError};
pub use models::*;
pub use soap::SoapFault;
