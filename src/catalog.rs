//! Display-ready pizza records built from raw API JSON

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::resolve::{display_text, is_truthy, Field, ImageResolver, Record};
use crate::{Error, Result};

/// Shown when a record carries no usable name
pub const MISSING_NAME: &str = "Név hiányzik";

/// Currency suffix appended to prices
pub const CURRENCY: &str = "Ft";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaView {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Only present when the upstream price is truthy
    pub price: Option<String>,
    pub image_url: String,
}

impl PizzaView {
    pub fn from_record(record: &Record, images: &ImageResolver) -> Self {
        let id = Field::Id
            .resolve(Some(record))
            .map(display_text)
            // Keyless records still need a stable identity
            .unwrap_or_else(|| Value::Object(record.clone()).to_string());

        let name = Field::Name
            .resolve(Some(record))
            .map(display_text)
            .unwrap_or_else(|| MISSING_NAME.to_string());

        let description = Field::Description
            .resolve(Some(record))
            .map(display_text)
            .unwrap_or_default();

        let price = Field::Price
            .resolve(Some(record))
            .filter(|value| is_truthy(value))
            .map(display_text);

        let image_url = images.resolve_value(Field::Image.resolve(Some(record)));

        Self {
            id,
            name,
            description,
            price,
            image_url,
        }
    }

    pub fn from_value(value: &Value, images: &ImageResolver) -> Result<Self> {
        match value {
            Value::Object(record) => Ok(Self::from_record(record, images)),
            other => Err(Error::Validation(format!(
                "Expected a pizza object, got {}",
                json_kind(other)
            ))),
        }
    }

    /// Price with currency, e.g. "1990 Ft"
    pub fn price_label(&self) -> Option<String> {
        self.price.as_ref().map(|p| format!("{p} {CURRENCY}"))
    }

    /// Route of the detail view for this pizza
    pub fn detail_path(&self) -> String {
        detail_path(&self.id)
    }
}

/// Normalize a list response. Anything that is not an array counts as empty.
pub fn normalize_list(value: &Value, images: &ImageResolver) -> Vec<PizzaView> {
    let Some(items) = value.as_array() else {
        debug!("List response is {}, treating as empty", json_kind(value));
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(record) => Some(PizzaView::from_record(record, images)),
            other => {
                debug!("Skipping non-object list entry ({})", json_kind(other));
                None
            }
        })
        .collect()
}

/// `/pizzas/<id>` with the id percent-encoded as a single path segment
pub fn detail_path(id: &str) -> String {
    format!("/pizzas/{}", urlencoding::encode(id))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
