use serde::{Deserialize, Serialize};

use crate::models::case::CaseContext;
use crate::models::knowledge::KnowledgeEntry;
use crate::models::project::ProjectContext;

/// Writing tone selected by the requester.
///
/// Deserializes from any string: values outside the known set land in
/// `Other` and keep their raw label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    Combative,
    Conciliatory,
    Didactic,
    Other(String),
}

impl Tone {
    pub fn as_str(&self) -> &str {
        match self {
            Tone::Combative => "combativo",
            Tone::Conciliatory => "conciliador",
            Tone::Didactic => "didatico",
            Tone::Other(raw) => raw,
        }
    }
}

impl From<String> for Tone {
    fn from(value: String) -> Self {
        match value.as_str() {
            "combativo" => Tone::Combative,
            "conciliador" => Tone::Conciliatory,
            "didatico" => Tone::Didactic,
            _ => Tone::Other(value),
        }
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        tone.as_str().to_string()
    }
}

/// Target length of the generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Length {
    Concise,
    Exhaustive,
    Other(String),
}

impl Length {
    pub fn as_str(&self) -> &str {
        match self {
            Length::Concise => "conciso",
            Length::Exhaustive => "exaustivo",
            Length::Other(raw) => raw,
        }
    }
}

impl From<String> for Length {
    fn from(value: String) -> Self {
        match value.as_str() {
            "conciso" => Length::Concise,
            "exaustivo" => Length::Exhaustive,
            _ => Length::Other(value),
        }
    }
}

impl From<Length> for String {
    fn from(length: Length) -> Self {
        length.as_str().to_string()
    }
}

/// A document the requester attached as reference material.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceDocument {
    pub filename: String,
    pub label: Option<String>,
    pub text: String,
}

/// Everything the document-generation prompt is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Key into the document-type instruction table, e.g. "PETICAO_INICIAL".
    pub document_type: String,
    pub tone: Tone,
    pub length: Length,
    /// Who the document is addressed to, e.g. "Juízo da 1ª Vara Empresarial".
    pub audience: String,
    #[serde(default)]
    pub include_case_law: bool,
    #[serde(default)]
    pub include_doctrine: bool,
    #[serde(default)]
    pub user_instructions: Option<String>,
    /// Accepted from the host but not rendered into the prompt.
    #[serde(default)]
    pub reference_documents: Vec<ReferenceDocument>,
    #[serde(default)]
    pub case: Option<CaseContext>,
    #[serde(default)]
    pub project: Option<ProjectContext>,
    #[serde(default)]
    pub knowledge_entries: Vec<KnowledgeEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tones_parse_into_variants() {
        assert_eq!(Tone::from("combativo".to_string()), Tone::Combative);
        assert_eq!(Tone::from("conciliador".to_string()), Tone::Conciliatory);
        assert_eq!(Tone::from("didatico".to_string()), Tone::Didactic);
    }

    #[test]
    fn test_unknown_tone_keeps_raw_label() {
        let tone = Tone::from("neutro".to_string());
        assert_eq!(tone, Tone::Other("neutro".to_string()));
        assert_eq!(tone.as_str(), "neutro");
    }

    #[test]
    fn test_prompt_config_deserializes_with_minimal_fields() {
        let json = serde_json::json!({
            "document_type": "PARECER",
            "tone": "tecnico",
            "length": "medio",
            "audience": "Cliente"
        });
        let config: PromptConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.tone, Tone::Other("tecnico".to_string()));
        assert_eq!(config.length, Length::Other("medio".to_string()));
        assert!(!config.include_case_law);
        assert!(config.case.is_none());
        assert!(config.knowledge_entries.is_empty());
        assert!(config.reference_documents.is_empty());
    }

    #[test]
    fn test_tone_serializes_back_to_wire_key() {
        let json = serde_json::to_value(Tone::Conciliatory).unwrap();
        assert_eq!(json, serde_json::json!("conciliador"));
        let json = serde_json::to_value(Length::Other("medio".to_string())).unwrap();
        assert_eq!(json, serde_json::json!("medio"));
    }
}
