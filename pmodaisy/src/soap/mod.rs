//! # Module SOAP - enveloppe des messages DAISY Online
//!
//! Ce module implémente la couche SOAP générique utilisée par le client :
//! construction de l'enveloppe autour d'une charge utile typée, et
//! extraction du premier élément du corps d'une réponse.
//!
//! ## Architecture
//!
//! - [`build_soap_envelope`] : sérialise une valeur dans `Envelope/Body`
//! - [`parse_soap_envelope`] : localise le `Body` d'un document reçu
//! - [`SoapBody`] : extracteur générique (le premier élément gagne)
//! - [`SoapFault`] : erreur SOAP renvoyée par le service
//!
//! ## Example
//!
//! ```
//! use pmodaisy::soap::{build_soap_envelope, parse_soap_envelope, SoapFault};
//!
//! let fault = SoapFault::new("s:Client", "Invalid credentials");
//! let xml = build_soap_envelope(&fault).unwrap();
//!
//! let envelope = parse_soap_envelope(xml.as_bytes()).unwrap();
//! let decoded: SoapFault = envelope.body.decode_first().unwrap().unwrap();
//! assert_eq!(decoded.message(), "Invalid credentials");
//! ```

mod body;
mod envelope;
mod fault;

pub use body::SoapBody;
pub use envelope::{SOAP_ENVELOPE_NS, SoapEnvelope, build_soap_envelope, parse_soap_envelope};
pub use fault::SoapFault;
