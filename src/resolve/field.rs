use serde_json::{Map, Value};

/// One untyped item as returned by the upstream API
pub type Record = Map<String, Value>;

/// Return the value of the first candidate key that is present and not `null`.
///
/// Candidate order is precedence: callers list their preferred spelling first.
/// A missing record resolves to `None` just like a record with no matching key.
pub fn resolve_field<'a>(record: Option<&'a Record>, candidates: &[&str]) -> Option<&'a Value> {
    let record = record?;
    candidates
        .iter()
        .find_map(|key| record.get(*key).filter(|value| !value.is_null()))
}

/// Logical fields of a pizza record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Description,
    Price,
    Image,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Name,
        Field::Description,
        Field::Price,
        Field::Image,
    ];

    /// Accepted key spellings for this field, most preferred first
    pub const fn candidates(self) -> &'static [&'static str] {
        match self {
            Field::Id => &["id", "pizza_id", "_id", "pk"],
            Field::Name => &["name", "nev", "title"],
            Field::Description => &["description", "leiras", "desc"],
            Field::Price => &["price", "ar", "cost"],
            Field::Image => &["image", "imageUrl", "image_url", "kep", "img", "photo"],
        }
    }

    pub fn resolve(self, record: Option<&Record>) -> Option<&Value> {
        resolve_field(record, self.candidates())
    }
}

/// Render a resolved value as display text.
///
/// Strings are used verbatim; everything else uses its compact JSON form.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
