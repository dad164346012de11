//! Blocking SOAP client for DAISY Online services
//!
//! [`DaisyClient::call`] performs one complete exchange: envelope
//! construction, HTTP POST with the protocol headers, gzip decompression,
//! fault detection by HTTP status and extraction of the response element.
//! A cancelled [`CallContext`] interrupts the call while it waits for the
//! service.
//! The per-operation methods live in [`crate::operations`].
//!
//! # Example
//!
//! ```no_run
//! use pmodaisy::DaisyClient;
//! use std::time::Duration;
//!
//! fn main() -> pmodaisy::Result<()> {
//!     let mut client = DaisyClient::builder()
//!         .service_url("https://daisy.example.org/service")
//!         .timeout(Duration::from_secs(20))
//!         .build()?;
//!
//!     if client.log_on("reader", "secret")? {
//!         let attributes = client.get_service_attributes()?;
//!         println!("supports search: {}", attributes.supports_search);
//!         client.log_off()?;
//!     }
//!     Ok(())
//! }
//! ```

use crate::config::DaisyConfig;
use crate::context::CallContext;
use crate::error::{EncodingError, Error, Result, TransportError};
use crate::soap::{SoapFault, build_soap_envelope, parse_soap_envelope};
use crossbeam_channel::{RecvTimeoutError, bounded};
use flate2::read::GzDecoder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::io::{self, Read};
use std::thread;
use std::time::Duration;
use tracing::{debug, trace};
use ureq::typestate::WithBody;
use ureq::{Agent, RequestBuilder};
use url::Url;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "PMOMusic/0.3.10 (pmodaisy)";

/// Only status accepted as a successful response
const HTTP_OK: u16 = 200;

/// How often a waiting call checks its context
const CONTEXT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// DAISY Online client
///
/// One client is one logical session: the agent's cookie jar carries the
/// session token assigned by the service. Calls are blocking. A client may
/// be shared by reference, but concurrent callers must serialize their
/// calls or use one client each, since every call updates the session.
///
/// The client does not check the protocol call sequence (logOn first,
/// logOff last...): illegal sequences are reported by the service as
/// faults.
pub struct DaisyClient {
    agent: Agent,
    service_url: String,
    timeout: Option<Duration>,
    user_agent: String,
    context: CallContext,
}

impl DaisyClient {
    /// Create a client for `service_url`
    ///
    /// `timeout` bounds each HTTP request; `None` means no timeout.
    pub fn new(service_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        Self::builder()
            .service_url(service_url)
            .optional_timeout(timeout)
            .build()
    }

    /// Create a client whose calls observe `context`
    pub fn with_context(
        service_url: impl Into<String>,
        timeout: Option<Duration>,
        context: CallContext,
    ) -> Result<Self> {
        Self::builder()
            .service_url(service_url)
            .optional_timeout(timeout)
            .context(context)
            .build()
    }

    /// Create a client from a loaded configuration
    pub fn from_config(config: &DaisyConfig) -> Result<Self> {
        let mut builder = Self::builder()
            .service_url(config.service_url.clone())
            .optional_timeout(config.timeout());
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        builder.build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Get the service URL
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Get the per-request timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Get the call context (clone it to cancel calls from elsewhere)
    pub fn context(&self) -> &CallContext {
        &self.context
    }

    /// Forget the session cookies
    pub fn clear_session(&self) {
        self.agent.cookie_jar_lock().clear();
    }

    /// Drop idle pooled connections
    ///
    /// ureq cannot close idle connections of a live agent, so the agent is
    /// replaced. Its cookie jar goes with it: the session is over.
    pub fn release_connections(&mut self) {
        debug!("Releasing connections to {}", self.service_url);
        self.agent = new_agent();
    }

    /// Invoke the remote operation `action`
    ///
    /// `request` is serialized as the only element of the SOAP body. On a
    /// `200 OK` status the first element of the response body is decoded
    /// into `response`; an empty body leaves `response` untouched. On any
    /// other status the body is decoded as a [`SoapFault`] and returned as
    /// [`Error::Fault`].
    ///
    /// The exchange runs on a worker thread while the caller watches the
    /// [`CallContext`]: a cancellation or an expired deadline returns at
    /// once, and the abandoned exchange is left to finish in the
    /// background. No retry is attempted.
    pub fn call<Req, Resp>(&self, action: &str, request: &Req, response: &mut Resp) -> Result<()>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let timeout = self.context.effective_timeout(self.timeout)?;

        let envelope = build_soap_envelope(request)?;
        debug!("POST {} (SOAPAction: /{})", self.service_url, action);
        trace!("SOAP request: {}", envelope);

        let builder = self
            .agent
            .post(self.service_url.as_str())
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("Accept", "text/xml")
            .header("Accept-Encoding", "gzip")
            .header("User-Agent", self.user_agent.as_str())
            .header("SOAPAction", format!("/{}", action));

        let builder = match timeout {
            Some(timeout) => builder.config().timeout_global(Some(timeout)).build(),
            None => builder,
        };

        let exchange = self.exchange(action, builder, envelope)?;
        self.context.check()?;

        let payload = if exchange.gzip {
            gunzip(&exchange.body)?
        } else {
            exchange.body
        };

        debug!(
            "SOAP response for {}: HTTP {} ({} bytes{})",
            action,
            exchange.status,
            payload.len(),
            if exchange.gzip { ", gzip" } else { "" }
        );
        trace!("SOAP response: {}", String::from_utf8_lossy(&payload));

        let envelope = parse_soap_envelope(&payload)?;

        if exchange.status != HTTP_OK {
            let fault: SoapFault = envelope
                .body
                .decode_first()?
                .ok_or(EncodingError::MissingFault {
                    status: exchange.status,
                })?;
            debug!("SOAP fault for {}: {}", action, fault);
            return Err(Error::Fault(fault));
        }

        if !envelope.body.decode_into(response)? {
            debug!("Empty SOAP body for {}", action);
        }
        Ok(())
    }

    /// Run the HTTP exchange on a worker thread, watching the context
    fn exchange(
        &self,
        action: &str,
        builder: RequestBuilder<WithBody>,
        envelope: String,
    ) -> Result<Exchange> {
        let (sender, receiver) = bounded(1);
        let context = self.context.clone();

        thread::Builder::new()
            .name(format!("pmodaisy-{}", action))
            .spawn(move || {
                // the receiver is gone if the call was abandoned
                let _ = sender.send(post(builder, envelope, &context));
            })
            .map_err(TransportError::Io)?;

        loop {
            match receiver.recv_timeout(CONTEXT_POLL_INTERVAL) {
                Ok(result) => return result.map_err(|e| self.interrupted_or(e)),
                Err(RecvTimeoutError::Timeout) => self.context.check()?,
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(self.interrupted_or(TransportError::Io(io::Error::other(
                        "HTTP worker exited without a response",
                    ))));
                }
            }
        }
    }

    /// The context error if the context is done, `err` otherwise
    fn interrupted_or(&self, err: TransportError) -> Error {
        match self.context.check() {
            Err(interrupted) => interrupted.into(),
            Ok(()) => err.into(),
        }
    }
}

impl fmt::Debug for DaisyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DaisyClient")
            .field("service_url", &self.service_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Raw result of one HTTP exchange
struct Exchange {
    status: u16,
    gzip: bool,
    body: Vec<u8>,
}

/// Send the request and read the whole response body
fn post(
    builder: RequestBuilder<WithBody>,
    envelope: String,
    context: &CallContext,
) -> std::result::Result<Exchange, TransportError> {
    let mut response = builder.send(envelope)?;

    let status = response.status().as_u16();
    let gzip = response
        .headers()
        .get("Content-Encoding")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim().eq_ignore_ascii_case("gzip"));

    let mut body = Vec::new();
    context
        .reader(response.body_mut().as_reader())
        .read_to_end(&mut body)
        .map_err(TransportError::Io)?;

    Ok(Exchange { status, gzip, body })
}

fn new_agent() -> Agent {
    // 4xx/5xx must not become ureq errors: the body carries the SOAP fault
    let config = Agent::config_builder()
        .http_status_as_error(false)
        .build();
    config.into()
}

fn gunzip(raw: &[u8]) -> std::result::Result<Vec<u8>, EncodingError> {
    let mut decoded = Vec::with_capacity(raw.len() * 4);
    GzDecoder::new(raw)
        .read_to_end(&mut decoded)
        .map_err(EncodingError::Gzip)?;
    Ok(decoded)
}

/// Builder for configuring a DaisyClient
#[derive(Debug)]
pub struct ClientBuilder {
    service_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: String,
    context: CallContext,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            service_url: None,
            timeout: Some(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            context: CallContext::new(),
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service URL (required)
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disable the request timeout
    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    fn optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the call context (deadline / cancellation)
    pub fn context(mut self, context: CallContext) -> Self {
        self.context = context;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DaisyClient> {
        let service_url = self
            .service_url
            .ok_or_else(|| Error::config("missing service URL"))?;

        let parsed = Url::parse(&service_url)
            .map_err(|e| Error::config(format!("invalid service URL {}: {}", service_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "unsupported URL scheme: {}",
                parsed.scheme()
            )));
        }

        Ok(DaisyClient {
            agent: new_agent(),
            service_url,
            timeout: self.timeout.filter(|t| !t.is_zero()),
            user_agent: self.user_agent,
            context: self.context,
        })
    }
}
