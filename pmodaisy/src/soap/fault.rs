//! SOAP Faults renvoyés par un service DAISY Online

use serde::{Deserialize, Serialize};

/// Erreur SOAP (Fault)
///
/// Produite uniquement lors du décodage d'une réponse HTTP en échec.
/// Le message affiché est exactement le `faultstring` du service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename = "Fault")]
#[error("{fault_string}")]
pub struct SoapFault {
    /// Code du fault (ex: "s:Client", "s:Server")
    #[serde(rename = "faultcode", default, skip_serializing_if = "Option::is_none")]
    pub fault_code: Option<String>,

    /// Message d'erreur lisible
    #[serde(rename = "faultstring", default)]
    pub fault_string: String,
}

impl SoapFault {
    pub fn new(fault_code: impl Into<String>, fault_string: impl Into<String>) -> Self {
        Self {
            fault_code: Some(fault_code.into()),
            fault_string: fault_string.into(),
        }
    }

    /// Message d'erreur du service
    pub fn message(&self) -> &str {
        &self.fault_string
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soap::SoapBody;

    #[test]
    fn test_decode_fault_with_detail() {
        let raw = br#"<s:Fault xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <faultcode>s:Client</faultcode>
  <faultstring>No active session</faultstring>
  <detail><noActiveSession xmlns="http://www.daisy.org/ns/daisy-online/"/></detail>
</s:Fault>"#;

        let fault: SoapFault = SoapBody::new(raw).decode_first().unwrap().unwrap();
        assert_eq!(fault.fault_code.as_deref(), Some("s:Client"));
        assert_eq!(fault.message(), "No active session");
        assert_eq!(fault.to_string(), "No active session");
    }

    #[test]
    fn test_decode_minimal_fault() {
        let raw = b"<Fault><faultstring>Invalid credentials</faultstring></Fault>";
        let fault: SoapFault = SoapBody::new(raw).decode_first().unwrap().unwrap();
        assert_eq!(fault.fault_code, None);
        assert_eq!(fault.to_string(), "Invalid credentials");
    }
}
