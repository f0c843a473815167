//! Draft job envelope: the one request the drafter accepts, tagged by mode.

use serde::{Deserialize, Serialize};

use crate::drafting::builder::{build_chat_prompt, build_document_prompt, build_review_prompt};
use crate::errors::AppError;
use crate::llm_client::prompts::{DOCUMENT_REQUEST, REVIEW_REQUEST};
use crate::llm_client::{ChatMessage, Role};
use crate::models::case::CaseContext;
use crate::models::knowledge::KnowledgeEntry;
use crate::models::project::ProjectContext;
use crate::models::prompt_config::PromptConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftMode {
    Chat,
    Document,
    Review,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DraftJob {
    Chat {
        #[serde(default)]
        case: Option<CaseContext>,
        #[serde(default)]
        project: Option<ProjectContext>,
        #[serde(default)]
        knowledge_entries: Vec<KnowledgeEntry>,
        messages: Vec<ChatMessage>,
    },
    Document {
        config: PromptConfig,
    },
    Review {
        review_type: String,
        document_text: String,
    },
}

impl DraftJob {
    pub fn mode(&self) -> DraftMode {
        match self {
            DraftJob::Chat { .. } => DraftMode::Chat,
            DraftJob::Document { .. } => DraftMode::Document,
            DraftJob::Review { .. } => DraftMode::Review,
        }
    }

    /// Checks the envelope; prompt inputs themselves are never rejected.
    pub fn validate(&self) -> Result<(), AppError> {
        match self {
            DraftJob::Chat { messages, .. } => match messages.last() {
                None => Err(AppError::Validation(
                    "messages cannot be empty".to_string(),
                )),
                Some(last) if last.role != Role::User => Err(AppError::Validation(
                    "the last message must come from the user".to_string(),
                )),
                Some(_) => Ok(()),
            },
            DraftJob::Review { document_text, .. } if document_text.trim().is_empty() => Err(
                AppError::Validation("document_text cannot be empty".to_string()),
            ),
            DraftJob::Document { .. } | DraftJob::Review { .. } => Ok(()),
        }
    }

    pub fn system_prompt(&self) -> String {
        match self {
            DraftJob::Chat {
                case,
                project,
                knowledge_entries,
                ..
            } => build_chat_prompt(case.as_ref(), project.as_ref(), knowledge_entries),
            DraftJob::Document { config } => build_document_prompt(config),
            DraftJob::Review {
                review_type,
                document_text,
            } => build_review_prompt(review_type, document_text),
        }
    }

    /// Conversation sent alongside the system prompt.
    pub fn messages(&self) -> Vec<ChatMessage> {
        match self {
            DraftJob::Chat { messages, .. } => messages.clone(),
            DraftJob::Document { .. } => vec![ChatMessage::user(DOCUMENT_REQUEST)],
            DraftJob::Review { .. } => vec![ChatMessage::user(REVIEW_REQUEST)],
        }
    }
}
