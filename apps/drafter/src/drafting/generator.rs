//! Drafting service: runs one draft job end to end.
//!
//! Flow: validate job → assemble system prompt → (optional) LLM call with
//! retry on blank output → DraftOutcome.
//!
//! Without a backend the job runs in prompt-only mode and the outcome carries
//! the assembled prompt with no completion.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::drafting::jobs::{DraftJob, DraftMode};
use crate::errors::AppError;
use crate::llm_client::prompts::RETRY_NUDGE;
use crate::llm_client::{ChatMessage, Completion, CompletionBackend, LlmError, Usage};

/// Extra attempts when the model returns blank text.
const MAX_BLANK_RETRIES: u32 = 2;

#[derive(Debug, Clone, Serialize)]
pub struct DraftOutcome {
    pub id: Uuid,
    pub mode: DraftMode,
    pub system_prompt: String,
    /// `None` in prompt-only mode.
    pub completion: Option<String>,
    pub usage: Option<Usage>,
    pub generated_at: DateTime<Utc>,
}

pub async fn run_job(
    backend: Option<&dyn CompletionBackend>,
    job: &DraftJob,
) -> Result<DraftOutcome, AppError> {
    job.validate()?;

    let system_prompt = job.system_prompt();
    debug!(
        "System prompt assembled: mode={:?}, {} chars",
        job.mode(),
        system_prompt.chars().count()
    );

    let (completion, usage) = match backend {
        Some(backend) => {
            let completion = complete_with_retry(backend, &system_prompt, job.messages()).await?;
            info!(
                "Draft completed: mode={:?}, input_tokens={}, output_tokens={}",
                job.mode(),
                completion.usage.input_tokens,
                completion.usage.output_tokens
            );
            (Some(completion.text), Some(completion.usage))
        }
        None => {
            info!("No LLM backend configured, returning assembled prompt only");
            (None, None)
        }
    };

    Ok(DraftOutcome {
        id: Uuid::new_v4(),
        mode: job.mode(),
        system_prompt,
        completion,
        usage,
        generated_at: Utc::now(),
    })
}

/// Calls the backend, retrying up to MAX_BLANK_RETRIES times when the model
/// answers with nothing. Any other error is returned immediately.
async fn complete_with_retry(
    backend: &dyn CompletionBackend,
    system_prompt: &str,
    mut messages: Vec<ChatMessage>,
) -> Result<Completion, AppError> {
    for attempt in 0..=MAX_BLANK_RETRIES {
        match backend.complete(system_prompt, &messages).await {
            Ok(completion) if !completion.text.trim().is_empty() => return Ok(completion),
            Ok(_) | Err(LlmError::EmptyContent) => {
                if attempt == MAX_BLANK_RETRIES {
                    warn!(
                        "Draft attempt {}/{} returned blank text, giving up",
                        attempt + 1,
                        MAX_BLANK_RETRIES + 1
                    );
                    break;
                }
                warn!(
                    "Draft attempt {}/{} returned blank text, retrying",
                    attempt + 1,
                    MAX_BLANK_RETRIES + 1
                );
                if attempt == 0 {
                    if let Some(last) = messages.last_mut() {
                        last.content = format!("{}\n\n{RETRY_NUDGE}", last.content);
                    }
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(AppError::Llm(LlmError::EmptyContent))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::drafting::prompts::{IDENTITY_AND_RULES, WRITING_METHODOLOGY};
    use crate::llm_client::prompts::DOCUMENT_REQUEST;
    use crate::models::prompt_config::{Length, PromptConfig, Tone};

    /// Replays scripted responses and records every call it receives.
    struct ScriptedBackend {
        responses: Mutex<VecDeque<Result<Completion, LlmError>>>,
        calls: Mutex<Vec<(String, Vec<ChatMessage>)>>,
    }

    impl ScriptedBackend {
        fn new(responses: Vec<Result<Completion, LlmError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(
            &self,
            system: &str,
            messages: &[ChatMessage],
        ) -> Result<Completion, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((system.to_string(), messages.to_vec()));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LlmError::EmptyContent))
        }
    }

    fn text(body: &str) -> Result<Completion, LlmError> {
        Ok(Completion {
            text: body.to_string(),
            usage: Usage {
                input_tokens: 1200,
                output_tokens: 800,
            },
        })
    }

    fn document_job() -> DraftJob {
        DraftJob::Document {
            config: PromptConfig {
                document_type: "PARECER".to_string(),
                tone: Tone::Didactic,
                length: Length::Exhaustive,
                audience: "Diretoria".to_string(),
                include_case_law: false,
                include_doctrine: true,
                user_instructions: Some("Responda ao quesito sobre a trava bancária.".to_string()),
                reference_documents: vec![],
                case: None,
                project: None,
                knowledge_entries: vec![],
            },
        }
    }

    #[tokio::test]
    async fn test_prompt_only_mode_returns_prompt_without_completion() {
        let outcome = run_job(None, &document_job()).await.unwrap();
        assert_eq!(outcome.mode, DraftMode::Document);
        assert!(outcome.completion.is_none());
        assert!(outcome.usage.is_none());
        assert!(outcome.system_prompt.starts_with(IDENTITY_AND_RULES));
        assert!(outcome.system_prompt.contains(WRITING_METHODOLOGY));
    }

    #[tokio::test]
    async fn test_backend_receives_system_prompt_and_document_request() {
        let backend = ScriptedBackend::new(vec![text("PARECER JURÍDICO\n\nEMENTA: ...")]);
        let outcome = run_job(Some(&backend), &document_job()).await.unwrap();

        assert_eq!(outcome.completion.as_deref(), Some("PARECER JURÍDICO\n\nEMENTA: ..."));
        assert_eq!(outcome.usage.unwrap().output_tokens, 800);

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, outcome.system_prompt);
        assert_eq!(calls[0].1, vec![ChatMessage::user(DOCUMENT_REQUEST)]);
    }

    #[tokio::test]
    async fn test_blank_output_is_retried_with_nudge() {
        let backend = ScriptedBackend::new(vec![
            text("   "),
            Err(LlmError::EmptyContent),
            text("Minuta final"),
        ]);
        let outcome = run_job(Some(&backend), &document_job()).await.unwrap();
        assert_eq!(outcome.completion.as_deref(), Some("Minuta final"));
        assert_eq!(backend.call_count(), 3);

        let calls = backend.calls.lock().unwrap();
        assert!(!calls[0].1[0].content.contains(RETRY_NUDGE));
        // nudge is added once, not stacked on every retry
        assert_eq!(calls[2].1[0].content.matches(RETRY_NUDGE).count(), 1);
    }

    #[tokio::test]
    async fn test_gives_up_after_repeated_blank_output() {
        let backend = ScriptedBackend::new(vec![text(""), text(""), text("")]);
        let err = run_job(Some(&backend), &document_job()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::EmptyContent)));
        assert_eq!(backend.call_count(), (MAX_BLANK_RETRIES + 1) as usize);

        // last attempt stops the loop instead of preparing another retry
        let calls = backend.calls.lock().unwrap();
        let last = calls.last().unwrap();
        assert_eq!(last.1[0].content.matches(RETRY_NUDGE).count(), 1);
    }

    #[tokio::test]
    async fn test_api_errors_are_not_retried_here() {
        let backend = ScriptedBackend::new(vec![Err(LlmError::Api {
            status: 400,
            message: "bad request".to_string(),
        })]);
        let err = run_job(Some(&backend), &document_job()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::Api { status: 400, .. })));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_job_never_reaches_backend() {
        let backend = ScriptedBackend::new(vec![text("não deveria ser chamado")]);
        let job = DraftJob::Review {
            review_type: "gramatical".to_string(),
            document_text: String::new(),
        };
        let err = run_job(Some(&backend), &job).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(backend.call_count(), 0);
    }

    #[test]
    fn test_outcome_serializes_mode_and_timestamp() {
        let outcome = DraftOutcome {
            id: Uuid::new_v4(),
            mode: DraftMode::Review,
            system_prompt: "p".to_string(),
            completion: None,
            usage: None,
            generated_at: Utc::now(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["mode"], "review");
        assert!(json["completion"].is_null());
        assert!(json["generated_at"].as_str().unwrap().contains('T'));
    }
}
