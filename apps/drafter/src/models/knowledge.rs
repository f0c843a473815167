use serde::{Deserialize, Serialize};

/// Knowledge-base entry (case law, doctrine, model clauses, internal notes).
/// The host ranks entries by relevance; rendering keeps the given order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeEntry {
    pub title: String,
    pub entry_type: String,
    pub area: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub source: Option<String>,
    pub tags: Vec<String>,
}
