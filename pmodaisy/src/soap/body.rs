//! Extraction générique du contenu du corps SOAP

use crate::error::EncodingError;
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::de::DeserializeOwned;

/// Corps SOAP reçu
///
/// Contient le XML brut situé entre `<Body>` et `</Body>`. Seul le premier
/// élément est significatif : les éléments suivants (extensions,
/// diagnostics ajoutés par certains services) sont ignorés sans être lus.
#[derive(Debug, Clone, Copy)]
pub struct SoapBody<'a> {
    raw: &'a [u8],
}

impl<'a> SoapBody<'a> {
    pub fn new(raw: &'a [u8]) -> Self {
        Self { raw }
    }

    /// Contenu XML brut du corps
    pub fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }

    /// Retourne le XML du premier élément du corps, ou `None` si le corps
    /// ne contient aucun élément
    pub fn first_element(&self) -> Result<Option<String>, EncodingError> {
        let mut reader = Reader::from_reader(self.raw);

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let span = reader.read_to_end(start.name())?;
                    let inner = &self.raw[span.start as usize..span.end as usize];
                    let name = start.name();

                    let mut element =
                        Vec::with_capacity(start.len() + inner.len() + name.as_ref().len() + 5);
                    element.push(b'<');
                    element.extend_from_slice(&start);
                    element.push(b'>');
                    element.extend_from_slice(inner);
                    element.extend_from_slice(b"</");
                    element.extend_from_slice(name.as_ref());
                    element.push(b'>');

                    return into_string(element).map(Some);
                }
                Event::Empty(start) => {
                    let mut element = Vec::with_capacity(start.len() + 3);
                    element.push(b'<');
                    element.extend_from_slice(&start);
                    element.extend_from_slice(b"/>");

                    return into_string(element).map(Some);
                }
                Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }

    /// Désérialise le premier élément du corps dans `T`
    ///
    /// Retourne `Ok(None)` pour un corps vide.
    pub fn decode_first<T: DeserializeOwned>(&self) -> Result<Option<T>, EncodingError> {
        match self.first_element()? {
            Some(xml) => Ok(Some(quick_xml::de::from_str(&xml)?)),
            None => Ok(None),
        }
    }

    /// Désérialise le premier élément du corps dans `dest`
    ///
    /// Un corps vide laisse `dest` intact et retourne `false`.
    pub fn decode_into<T: DeserializeOwned>(&self, dest: &mut T) -> Result<bool, EncodingError> {
        match self.decode_first()? {
            Some(value) => {
                *dest = value;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn into_string(bytes: Vec<u8>) -> Result<String, EncodingError> {
    String::from_utf8(bytes).map_err(|e| EncodingError::Utf8(e.utf8_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct LogOnResponse {
        #[serde(rename = "logOnResult")]
        log_on_result: bool,
    }

    #[test]
    fn test_first_element_wins() {
        let raw = br#"
            <logOnResponse xmlns="http://www.daisy.org/ns/daisy-online/"><logOnResult>true</logOnResult></logOnResponse>
            <logOnResponse><logOnResult>false</logOnResult></logOnResponse>
            <diagnostics><elapsed>12ms</elapsed></diagnostics>
        "#;
        let body = SoapBody::new(raw);

        let decoded: LogOnResponse = body.decode_first().unwrap().unwrap();
        assert!(decoded.log_on_result);

        let xml = body.first_element().unwrap().unwrap();
        assert!(xml.starts_with("<logOnResponse xmlns=\"http://www.daisy.org/ns/daisy-online/\">"));
        assert!(xml.ends_with("</logOnResponse>"));
        assert!(!xml.contains("diagnostics"));
    }

    #[test]
    fn test_trailing_garbage_is_not_read() {
        let raw = b"<logOnResponse><logOnResult>true</logOnResult></logOnResponse><broken attr=";
        let decoded: LogOnResponse = SoapBody::new(raw).decode_first().unwrap().unwrap();
        assert!(decoded.log_on_result);
    }

    #[test]
    fn test_empty_element() {
        let raw = br#"<logOffResponse xmlns="http://www.daisy.org/ns/daisy-online/"/>"#;
        let xml = SoapBody::new(raw).first_element().unwrap().unwrap();
        assert_eq!(
            xml,
            r#"<logOffResponse xmlns="http://www.daisy.org/ns/daisy-online/"/>"#
        );
    }

    #[test]
    fn test_empty_body_leaves_destination_untouched() {
        let mut dest = LogOnResponse {
            log_on_result: true,
        };

        let decoded = SoapBody::new(b"  \n  ").decode_into(&mut dest).unwrap();
        assert!(!decoded);
        assert!(dest.log_on_result);

        let decoded = SoapBody::new(b"<!-- nothing here -->")
            .decode_into(&mut dest)
            .unwrap();
        assert!(!decoded);
        assert!(dest.log_on_result);
    }

    #[test]
    fn test_shape_mismatch_is_an_error() {
        let raw = b"<somethingElse><foo>1</foo></somethingElse>";
        let result: Result<Option<LogOnResponse>, _> = SoapBody::new(raw).decode_first();
        assert!(matches!(result, Err(EncodingError::Deserialize(_))));
    }
}
