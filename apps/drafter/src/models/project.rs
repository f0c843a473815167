use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectContext {
    pub code: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub involved_value: Option<f64>,
    pub client_name: Option<String>,
    pub documents: Vec<ProjectDocument>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDocument {
    pub title: String,
    pub document_type: String,
}
