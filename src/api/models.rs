use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer: most Standard Release payloads serve nutrient
/// amounts as strings ("3.15"), a few serve bare numbers. Normalize to
/// String so callers parse on demand.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a nutrient amount, got {}",
            other
        ))),
    }
}

// Food and nutrient list models (`list` endpoint)

#[derive(Debug, Deserialize, Clone)]
pub struct ListResponse {
    pub list: ListFragment,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListFragment {
    /// List type requested (`f` = foods, `n` = nutrients).
    pub lt: String,
    pub start: u32,
    pub end: u32,
    pub total: u32,
    /// Standard Release version the data was drawn from.
    pub sr: String,
    #[serde(default)]
    pub item: Vec<ListItem>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListItem {
    pub offset: u32,
    pub id: String,
    pub name: String,
}

// Search models (`search` endpoint)

#[derive(Debug, Deserialize, Clone)]
pub struct SearchResponse {
    pub list: SearchList,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchList {
    pub q: String,
    pub sr: String,
    pub start: u32,
    pub end: u32,
    pub total: u32,
    #[serde(default)]
    pub item: Vec<SearchItem>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchItem {
    pub offset: u32,
    /// Food group the item belongs to.
    pub group: String,
    pub name: String,
    /// NDB number identifying the food.
    pub ndbno: String,
    /// Data source (`BL` = branded, `SR` = standard release).
    pub ds: String,
}

// Food report models (`reports` endpoint)

#[derive(Debug, Deserialize, Clone)]
pub struct FoodReportResponse {
    pub report: FoodReport,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FoodReport {
    pub sr: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub food: Food,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Food {
    pub ndbno: String,
    pub name: String,
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Nutrient {
    pub nutrient_id: String,
    pub name: String,
    pub unit: String,
    /// Amount per 100 g of food.
    #[serde(deserialize_with = "deserialize_amount")]
    pub value: String,
    #[serde(default)]
    pub measures: Vec<Measure>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Measure {
    pub label: String,
    /// Equivalent weight in grams of one `qty` of this measure.
    pub eqv: f64,
    pub qty: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub value: String,
}

// Nutrient report models (`nutrients` endpoint)

#[derive(Debug, Deserialize, Clone)]
pub struct NutrientReportResponse {
    pub report: NutrientReport,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NutrientReport {
    pub sr: String,
    pub start: u32,
    pub end: u32,
    pub total: u32,
    #[serde(default)]
    pub foods: Vec<NutrientReportFood>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NutrientReportFood {
    pub ndbno: String,
    pub name: String,
    /// Weight in grams of the reported measure.
    pub weight: f64,
    pub measure: String,
    #[serde(default)]
    pub nutrients: Vec<NutrientValue>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NutrientValue {
    pub nutrient_id: String,
    pub nutrient: String,
    pub unit: String,
    /// Amount in the reported measure.
    #[serde(deserialize_with = "deserialize_amount")]
    pub value: String,
    /// Amount per 100 g edible portion.
    pub gm: f64,
}
