//! Review focus table: maps the host's review-type key to one directive sentence.

/// Focus of a document review, selected by the host's review-type key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewFocus {
    Complete,
    Grammatical,
    LegalGrounding,
    Strategic,
    Risk,
    Contract,
}

impl ReviewFocus {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "completa" => Some(ReviewFocus::Complete),
            "gramatical" => Some(ReviewFocus::Grammatical),
            "fundamentacao" => Some(ReviewFocus::LegalGrounding),
            "estrategica" => Some(ReviewFocus::Strategic),
            "risco" => Some(ReviewFocus::Risk),
            "contratual" => Some(ReviewFocus::Contract),
            _ => None,
        }
    }

    pub fn directive(self) -> &'static str {
        match self {
            ReviewFocus::Complete => "Foco da revisão: faça uma revisão completa, cobrindo \
                linguagem, fundamentação jurídica, estratégia processual e riscos.",
            ReviewFocus::Grammatical => "Foco da revisão: concentre-se em gramática, \
                ortografia, pontuação, concordância e clareza da redação.",
            ReviewFocus::LegalGrounding => "Foco da revisão: verifique a fundamentação \
                jurídica, a vigência e a pertinência dos dispositivos legais e precedentes \
                citados.",
            ReviewFocus::Strategic => "Foco da revisão: avalie a estratégia argumentativa, \
                a ordem dos argumentos e as oportunidades de fortalecer a tese do cliente.",
            ReviewFocus::Risk => "Foco da revisão: identifique riscos processuais, \
                preclusões, prazos, nulidades e pontos expostos a contra-argumentação.",
            ReviewFocus::Contract => "Foco da revisão: analise as cláusulas contratuais \
                quanto a equilíbrio, exequibilidade, lacunas, ambiguidades e conformidade \
                legal.",
        }
    }
}

/// Directive sentence for a review-type key; empty when the key is unknown.
pub fn review_directive(review_type: &str) -> &'static str {
    ReviewFocus::from_key(review_type)
        .map(ReviewFocus::directive)
        .unwrap_or("")
}
