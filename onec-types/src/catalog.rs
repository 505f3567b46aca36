use derive_more::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ValueType {
    #[display("Справочник")]
    Dictionary,
    #[display("Строка")]
    Text,
    #[display("Число")]
    Number,
    #[display("{_0}")]
    Other(String),
}

impl From<&str> for ValueType {
    fn from(s: &str) -> Self {
        match s.trim() {
            "Справочник" => Self::Dictionary,
            "Строка" => Self::Text,
            "Число" => Self::Number,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One entry of a dictionary property (`ВариантыЗначений/Справочник`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryValue {
    pub id: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierProperty {
    pub id: String,
    pub name: String,
    pub value_type: Option<ValueType>,
    pub values: Vec<DictionaryValue>,
}

impl ClassifierProperty {
    pub fn candidate_values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.value.as_str())
    }

    /// Products reference dictionary values by `ИдЗначения`; anything that is
    /// not a known value id is already the value itself.
    pub fn display_value<'a>(&'a self, raw: &'a str) -> &'a str {
        self.values
            .iter()
            .find(|v| v.id.as_deref() == Some(raw))
            .map(|v| v.value.as_str())
            .unwrap_or(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierGroup {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyValue {
    pub id: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requisite {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub article: Option<String>,
    pub barcode: Option<String>,
    pub groups: Vec<String>,
    pub property_values: Vec<PropertyValue>,
    pub requisites: Vec<Requisite>,
    pub images: Vec<String>,
}

impl Product {
    pub fn values_of(&self, property_id: &str) -> Option<&[String]> {
        self.property_values
            .iter()
            .find(|v| v.id == property_id)
            .map(|v| v.values.as_slice())
    }
}

/// A record recognised by the catalog decoder, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRecord {
    Classifier(Classifier),
    Property(ClassifierProperty),
    Group(ClassifierGroup),
    Product(Product),
}

/// Everything decoded from one uploaded export file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeData {
    pub classifier: Option<Classifier>,
    pub properties: Vec<ClassifierProperty>,
    pub groups: Vec<ClassifierGroup>,
    pub products: Vec<Product>,
}
