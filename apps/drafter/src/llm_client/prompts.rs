// User-turn messages paired with the assembled system prompts.
// The system prompt carries all context; these only trigger the task.

/// User turn sent with a document-generation system prompt.
pub const DOCUMENT_REQUEST: &str = "Redija o documento solicitado seguindo \
    rigorosamente as instruções, o contexto e as configurações fornecidas. \
    Responda apenas com o texto do documento, sem comentários introdutórios.";

/// User turn sent with a review system prompt.
pub const REVIEW_REQUEST: &str = "Revise o documento apresentado conforme o foco \
    e o formato de resposta indicados.";

/// Appended to the user turn when the previous attempt came back blank.
pub const RETRY_NUDGE: &str = "A resposta anterior veio vazia. Produza agora o \
    conteúdo completo solicitado.";
