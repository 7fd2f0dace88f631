use serde::Deserialize;

/// Placeholder for a field the source file does not provide.
pub const UNKNOWN: &str = "Unknown";

fn unknown() -> String {
    UNKNOWN.to_string()
}

/// One address entry. All fields are kept as the raw text found in the file.
///
/// Missing CSV columns deserialize to [`UNKNOWN`], the same placeholder the
/// XML reader uses for missing attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Record {
    #[serde(default = "unknown")]
    pub city: String,
    #[serde(default = "unknown")]
    pub street: String,
    #[serde(default = "unknown")]
    pub house: String,
    #[serde(default = "unknown")]
    pub floor: String,
}

impl Record {
    #[must_use]
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        house: impl Into<String>,
        floor: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            house: house.into(),
            floor: floor.into(),
        }
    }
}
