use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentFormat {
    Manual,
    Xml,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    LpIntroduceGoods,
    LpIntroduceGoodsCsv,
    LpIntroduceGoodsXml,
}

impl DocumentType {
    /// Wire format implied by the document type.
    pub fn format(self) -> DocumentFormat {
        match self {
            DocumentType::LpIntroduceGoods => DocumentFormat::Manual,
            DocumentType::LpIntroduceGoodsCsv => DocumentFormat::Csv,
            DocumentType::LpIntroduceGoodsXml => DocumentFormat::Xml,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductionType {
    OwnProduction,
    ContractProduction,
}

/// Document for introducing goods produced in the RF into circulation.
///
/// Plain data as the registry expects it; the client does not interpret
/// these fields beyond serializing them into the submission payload.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub description: Description,
    pub doc_id: String,
    pub doc_status: String,
    pub doc_type: DocumentType,
    #[serde(rename = "importRequest")]
    pub import_request: bool,
    pub owner_inn: String,
    pub participant_inn: String,
    pub producer_inn: String,
    pub production_date: NaiveDate,
    pub production_type: ProductionType,
    pub products: Vec<Product>,
    pub reg_date: NaiveDate,
    pub reg_number: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Description {
    #[serde(rename = "participantInn")]
    pub participant_inn: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub certificate_document: String,
    pub certificate_document_date: NaiveDate,
    pub certificate_document_number: String,
    pub owner_inn: String,
    pub producer_inn: String,
    pub production_date: NaiveDate,
    pub tnved_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uit_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uitu_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_type_names_on_the_wire() {
        let json = serde_json::to_string(&DocumentType::LpIntroduceGoods).unwrap();
        assert_eq!(json, "\"LP_INTRODUCE_GOODS\"");
        let json = serde_json::to_string(&DocumentType::LpIntroduceGoodsCsv).unwrap();
        assert_eq!(json, "\"LP_INTRODUCE_GOODS_CSV\"");
    }

    #[test]
    fn format_follows_document_type() {
        assert_eq!(DocumentType::LpIntroduceGoods.format(), DocumentFormat::Manual);
        assert_eq!(DocumentType::LpIntroduceGoodsCsv.format(), DocumentFormat::Csv);
        assert_eq!(DocumentType::LpIntroduceGoodsXml.format(), DocumentFormat::Xml);
    }

    #[test]
    fn document_serializes_registry_field_names() {
        let document = Document {
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
        };

        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(value["description"]["participantInn"], "1111111111");
        assert_eq!(value["importRequest"], false);
        assert_eq!(value["doc_type"], "LP_INTRODUCE_GOODS");
        assert_eq!(value["production_type"], "OWN_PRODUCTION");
        assert_eq!(value["production_date"], "2025-03-01");
    }
}
