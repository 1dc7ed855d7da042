use serde::{Deserialize, Serialize};

/// One testimonial or feedback unit as handed over by the record store.
/// Never mutated by the signal pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub body: Option<String>,
    /// Author-selected traits, most relevant first.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TextRecord {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, body: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            id: id.into(),
            body: Some(body.into()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// The body text, or `""` when absent.
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}
