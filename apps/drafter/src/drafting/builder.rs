//! Prompt assembly for the three drafting modes: chat, document generation
//! and document review.
//!
//! Fragment order is fixed: identity → methodology → type instructions →
//! case → project → knowledge base → user configuration → requester
//! instructions. Fragments that do not apply are left out and never leave an
//! empty separator pair behind.

use tracing::debug;

use crate::drafting::context_format::{format_case, format_knowledge_entries, format_project};
use crate::drafting::document_types::DocumentKind;
use crate::drafting::prompts::{
    IDENTITY_AND_RULES, REVIEW_DOCUMENT_HEADING, REVIEW_MODE_HEADING, SEPARATOR,
    TYPE_INSTRUCTIONS_HEADING, USER_INSTRUCTIONS_HEADING, WRITING_METHODOLOGY,
};
use crate::drafting::review::review_directive;
use crate::drafting::tone::format_user_config;
use crate::models::case::CaseContext;
use crate::models::knowledge::KnowledgeEntry;
use crate::models::project::ProjectContext;
use crate::models::prompt_config::PromptConfig;

/// System prompt for conversational mode: identity plus whatever context
/// the host attached.
pub fn build_chat_prompt(
    case: Option<&CaseContext>,
    project: Option<&ProjectContext>,
    knowledge: &[KnowledgeEntry],
) -> String {
    let mut fragments = vec![IDENTITY_AND_RULES.to_string()];
    fragments.extend(context_fragments(case, project, knowledge));

    debug!("Assembled chat prompt from {} fragments", fragments.len());
    fragments.join(SEPARATOR)
}

/// Full prompt for document generation.
pub fn build_document_prompt(config: &PromptConfig) -> String {
    let mut fragments = vec![
        IDENTITY_AND_RULES.to_string(),
        WRITING_METHODOLOGY.to_string(),
    ];

    if let Some(kind) = DocumentKind::from_key(&config.document_type) {
        fragments.push(format!(
            "{TYPE_INSTRUCTIONS_HEADING}: {}\n\n{}",
            kind.label(),
            kind.instructions()
        ));
    }

    fragments.extend(context_fragments(
        config.case.as_ref(),
        config.project.as_ref(),
        &config.knowledge_entries,
    ));

    fragments.push(format_user_config(config));

    if let Some(instructions) = config
        .user_instructions
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
    {
        fragments.push(format!("{USER_INSTRUCTIONS_HEADING}\n\n{instructions}"));
    }

    debug!(
        "Assembled document prompt for {} from {} fragments ({} reference documents not rendered)",
        config.document_type,
        fragments.len(),
        config.reference_documents.len()
    );
    fragments.join(SEPARATOR)
}

/// Prompt for reviewing an existing document. `review_type` picks the focus
/// directive; unknown types fall back to the generic review instructions.
pub fn build_review_prompt(review_type: &str, document_text: &str) -> String {
    let mut review_mode = REVIEW_MODE_HEADING.to_string();
    for part in [
        DocumentKind::RevisaoIa.instructions(),
        review_directive(review_type),
    ] {
        if !part.is_empty() {
            review_mode.push_str("\n\n");
            review_mode.push_str(part);
        }
    }

    let fragments = [
        IDENTITY_AND_RULES.to_string(),
        review_mode,
        format!("{REVIEW_DOCUMENT_HEADING}\n\n{document_text}"),
    ];

    debug!(
        "Assembled review prompt (type={review_type}, {} chars of document)",
        document_text.chars().count()
    );
    fragments.join(SEPARATOR)
}

fn context_fragments(
    case: Option<&CaseContext>,
    project: Option<&ProjectContext>,
    knowledge: &[KnowledgeEntry],
) -> Vec<String> {
    let mut fragments = Vec::new();
    if let Some(case) = case {
        fragments.push(format_case(case));
    }
    if let Some(project) = project {
        fragments.push(format_project(project));
    }
    if !knowledge.is_empty() {
        fragments.push(format_knowledge_entries(knowledge));
    }
    fragments
}
