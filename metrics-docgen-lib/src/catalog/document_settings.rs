use serde::{Deserialize, Serialize};

/// Front matter and introduction of the generated document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentSettings {
    pub title: String,
    pub link_title: String,
    pub weight: i64,
    pub description: String,

    /// Written as an HTML comment so readers know not to edit the file by hand
    #[serde(default)]
    pub notice: String,

    #[serde(default)]
    pub intro: String,
}
