use async_trait::async_trait;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    #[display("weight")]
    Weight,
    #[display("length")]
    Length,
    #[display("height")]
    Height,
    #[display("width")]
    Width,
    #[display("material")]
    Material,
    #[display("origin_country")]
    OriginCountry,
    #[display("hs_code")]
    HsCode,
    #[display("mid_code")]
    MidCode,
}

/// What a classifier property turns into on the catalog side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum PropertyRole {
    /// Customer-facing option; its dictionary values become option values.
    Option,
    /// Scalar entry in product metadata.
    Attribute,
    Field { field: ProductField },
    Ignore,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AttributeSetting {
    #[serde(flatten)]
    pub role: PropertyRole,
    #[serde(default)]
    pub title: Option<String>,
}

/// Role of properties that have no entry in [`ExchangeSettings::attributes`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedPolicy {
    #[default]
    Attribute,
    Ignore,
}

impl From<UnmappedPolicy> for PropertyRole {
    fn from(p: UnmappedPolicy) -> Self {
        match p {
            UnmappedPolicy::Attribute => Self::Attribute,
            UnmappedPolicy::Ignore => Self::Ignore,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ProductDefaults {
    pub option_title: String,
    pub option_value: String,
    pub variant_title: String,
}

impl Default for ProductDefaults {
    fn default() -> Self {
        Self {
            option_title: "Default Option".to_string(),
            option_value: "Default value".to_string(),
            variant_title: "Default variant".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeSettings {
    /// Keyed by classifier property id (`Ид`).
    #[serde(default)]
    pub attributes: HashMap<String, AttributeSetting>,
    #[serde(default)]
    pub unmapped: UnmappedPolicy,
    #[serde(default)]
    pub defaults: ProductDefaults,
}

impl ExchangeSettings {
    pub fn role_of(&self, property_id: &str) -> PropertyRole {
        self.attributes
            .get(property_id)
            .map(|a| a.role.clone())
            .unwrap_or_else(|| self.unmapped.into())
    }

    pub fn title_override(&self, property_id: &str) -> Option<&str> {
        self.attributes
            .get(property_id)
            .and_then(|a| a.title.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self) -> Result<ExchangeSettings, anyhow::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_roles_from_yaml() {
        let settings: ExchangeSettings = serde_yaml::from_str(
            "
unmapped: ignore
attributes:
  size:
    role: option
    title: Размер
  weight:
    role: field
    field: weight
  brand:
    role: attribute
",
        )
        .unwrap();
        assert_eq!(settings.role_of("size"), PropertyRole::Option);
        assert_eq!(settings.title_override("size"), Some("Размер"));
        assert_eq!(
            settings.role_of("weight"),
            PropertyRole::Field {
                field: ProductField::Weight
            }
        );
        assert_eq!(settings.role_of("brand"), PropertyRole::Attribute);
        assert_eq!(settings.title_override("brand"), None);
        assert_eq!(settings.role_of("unknown"), PropertyRole::Ignore);
        assert_eq!(settings.defaults, ProductDefaults::default());
    }

    #[test]
    fn unmapped_properties_are_attributes_by_default() {
        let settings = ExchangeSettings::default();
        assert_eq!(settings.role_of("anything"), PropertyRole::Attribute);
    }
}
