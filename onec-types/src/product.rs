use crate::settings::ProductField;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProductOption {
    pub title: String,
    pub values: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VariantOption {
    pub option: String,
    pub value: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProductVariant {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Same order as [`NormalizedProduct::options`].
    pub options: Vec<VariantOption>,
}

/// Product-level catalog attributes a classifier property can be bound to.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ProductFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid_code: Option<String>,
}

impl ProductFields {
    /// Numeric fields accept both `1.5` and `1,5`; an unparsable number leaves
    /// the field unset.
    pub fn set(&mut self, field: ProductField, raw: &str) {
        let raw = raw.trim();
        let number = || match raw.replace(',', ".").parse::<f64>() {
            Ok(n) => Some(n),
            Err(err) => {
                log::warn!("Unable to parse {field} value {raw:?}: {err}");
                None
            }
        };
        match field {
            ProductField::Weight => self.weight = number(),
            ProductField::Length => self.length = number(),
            ProductField::Height => self.height = number(),
            ProductField::Width => self.width = number(),
            ProductField::Material => self.material = Some(raw.to_string()),
            ProductField::OriginCountry => self.origin_country = Some(raw.to_string()),
            ProductField::HsCode => self.hs_code = Some(raw.to_string()),
            ProductField::MidCode => self.mid_code = Some(raw.to_string()),
        }
    }
}

/// Catalog-ready product built from one decoded `Товар`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NormalizedProduct {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub handle: String,
    pub external_id: String,
    pub variants: Vec<ProductVariant>,
    pub options: Vec<ProductOption>,
    pub metadata: BTreeMap<String, Value>,
    #[serde(flatten)]
    pub fields: ProductFields,
}
