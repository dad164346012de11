//! Construction et lecture de l'enveloppe SOAP

use super::SoapBody;
use crate::error::EncodingError;
use quick_xml::Reader;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::io::Write;

/// Namespace SOAP 1.1
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Enveloppe SOAP reçue
///
/// Seul le `Body` est conservé ; un éventuel `Header` est ignoré.
#[derive(Debug, Clone, Copy)]
pub struct SoapEnvelope<'a> {
    /// Corps SOAP (contenu brut, non interprété)
    pub body: SoapBody<'a>,
}

/// Sérialise `payload` dans une enveloppe SOAP complète
///
/// Le nom de l'élément et son namespace sont ceux du type sérialisé :
/// l'enveloppe ne fait qu'encadrer le XML produit par `quick_xml::se`.
///
/// ```text
/// <?xml version="1.0" encoding="UTF-8"?>
/// <s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
///   <s:Body>PAYLOAD</s:Body>
/// </s:Envelope>
/// ```
pub fn build_soap_envelope<T: Serialize>(payload: &T) -> Result<String, EncodingError> {
    let content =
        quick_xml::se::to_string(payload).map_err(|e| EncodingError::Serialize(e.to_string()))?;

    let mut writer = Writer::new(Vec::with_capacity(content.len() + 160));
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut envelope = BytesStart::new("s:Envelope");
    envelope.push_attribute(("xmlns:s", SOAP_ENVELOPE_NS));
    writer.write_event(Event::Start(envelope))?;
    writer.write_event(Event::Start(BytesStart::new("s:Body")))?;

    // Already serialized and escaped by quick_xml::se
    writer.get_mut().write_all(content.as_bytes())?;

    writer.write_event(Event::End(BytesEnd::new("s:Body")))?;
    writer.write_event(Event::End(BytesEnd::new("s:Envelope")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| EncodingError::Utf8(e.utf8_error()))
}

/// Localise le `Body` d'un document SOAP
///
/// Les éléments sont reconnus par leur nom local (`Envelope`, `Header`,
/// `Body`) quel que soit leur préfixe. Les namespaces de la charge utile
/// ne sont pas validés.
pub fn parse_soap_envelope(xml: &[u8]) -> Result<SoapEnvelope<'_>, EncodingError> {
    let mut reader = Reader::from_reader(xml);

    let root = loop {
        match reader.read_event()? {
            Event::Start(start) => break start,
            Event::Empty(start) if start.local_name().as_ref() == b"Envelope" => {
                return Err(EncodingError::MissingBody);
            }
            Event::Empty(_) | Event::Eof => return Err(EncodingError::MissingEnvelope),
            _ => {}
        }
    };

    if root.local_name().as_ref() != b"Envelope" {
        return Err(EncodingError::MissingEnvelope);
    }

    loop {
        match reader.read_event()? {
            Event::Start(start) if start.local_name().as_ref() == b"Body" => {
                let span = reader.read_to_end(start.name())?;
                let raw = &xml[span.start as usize..span.end as usize];
                return Ok(SoapEnvelope {
                    body: SoapBody::new(raw),
                });
            }
            Event::Empty(start) if start.local_name().as_ref() == b"Body" => {
                return Ok(SoapEnvelope {
                    body: SoapBody::new(&[]),
                });
            }
            // Header, ou tout autre élément avant le Body
            Event::Start(start) => {
                reader.read_to_end(start.name())?;
            }
            Event::End(_) => return Err(EncodingError::MissingBody),
            Event::Eof => return Err(EncodingError::UnexpectedEof("Envelope")),
            _ => {}
        }
    }
}
