use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

use crate::error::Result;
use crate::model::{Document, DocumentFormat, DocumentType};

/// Body of the document-creation call.
///
/// The document itself travels base64-encoded in `product_document`;
/// format and type are separate envelope fields.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDocumentRequest {
    pub document_format: DocumentFormat,
    pub product_document: String,
    pub document_type: DocumentType,
    pub signature: String,
}

impl CreateDocumentRequest {
    pub fn from_document(document: &Document, signature: &str) -> Result<Self> {
        let doc_json = serde_json::to_vec(document)?;

        Ok(Self {
            document_format: document.doc_type.format(),
            product_document: STANDARD.encode(doc_json),
            document_type: document.doc_type,
            signature: signature.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Description, ProductionType};
    use chrono::NaiveDate;

    fn document() -> Document {
        Document {
            description: Description {
                participant_inn: "1111111111".into(),
            },
            doc_id: "123".into(),
            doc_status: "DRAFT".into(),
            doc_type: DocumentType::LpIntroduceGoods,
            import_request: false,
            owner_inn: "2222222222".into(),
            participant_inn: "1111111111".into(),
            producer_inn: "3333333333".into(),
            production_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            production_type: ProductionType::OwnProduction,
            products: vec![],
            reg_date: NaiveDate::from_ymd_opt(2025, 3, 30).unwrap(),
            reg_number: "123456".into(),
        }
    }

    #[test]
    fn format_and_type_are_distinct_fields() {
        let request = CreateDocumentRequest::from_document(&document(), "sig").unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["document_format"], "MANUAL");
        assert_eq!(value["document_type"], "LP_INTRODUCE_GOODS");
        assert_eq!(value["signature"], "sig");
        assert!(value["product_document"].is_string());
    }

    #[test]
    fn product_document_roundtrips_through_base64() {
        let request = CreateDocumentRequest::from_document(&document(), "sig").unwrap();

        let decoded = STANDARD.decode(&request.product_document).unwrap();
        let inner: serde_json::Value = serde_json::from_slice(&decoded).unwrap();

        assert_eq!(inner["doc_id"], "123");
        assert_eq!(inner["description"]["participantInn"], "1111111111");
    }
}
