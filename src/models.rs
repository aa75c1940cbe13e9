use serde::{Deserialize, Serialize};
use std::fmt;

/// Brazilian taxpayer document kind accepted by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "CPF")]
    Cpf,
    #[serde(rename = "CNPJ")]
    Cnpj,
}

impl DocumentType {
    /// Gateway-facing name of the document type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Cpf => "CPF",
            DocumentType::Cnpj => "CNPJ",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer taxpayer document. `value` holds digits only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub value: String,
}

/// Customer phone, already normalized: 2-digit area code plus an 8 or
/// 9 digit number without separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub area_code: String,
    pub number: String,
}

/// Customer address. The gateway does not document constraints for most
/// of these fields, so they are stored as given; `postal_code` is kept as
/// digits only and `state` as a 2-letter uppercase code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub number: Option<String>,
    pub district: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Customer block of the boleto payload.
///
/// Unset members serialize as JSON nulls; the gateway treats null and
/// absent the same way, and the required-field checks run before
/// submission anyway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub document: Option<Document>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Phone>,
    pub address: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_serializes_with_gateway_keys() {
        let doc = Document {
            document_type: DocumentType::Cpf,
            value: "52998224725".to_string(),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "CPF");
        assert_eq!(json["value"], "52998224725");
    }

    #[test]
    fn test_phone_serializes_camel_case() {
        let phone = Phone {
            area_code: "11".to_string(),
            number: "912345678".to_string(),
        };
        let json = serde_json::to_value(&phone).unwrap();
        assert_eq!(json["areaCode"], "11");
        assert_eq!(json["number"], "912345678");
    }

    #[test]
    fn test_empty_customer_serializes_nulls() {
        let customer = Customer::default();
        let json = serde_json::to_value(&customer).unwrap();
        assert!(json["document"].is_null());
        assert!(json["name"].is_null());
        assert!(json["address"]["postalCode"].is_null());
    }
}
