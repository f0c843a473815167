//! Tone and length calibration: renders the requester's document settings
//! into directives for the model.
//!
//! Only combativo, conciliador and didatico tones and the conciso and
//! exaustivo lengths carry extra guidance. Any other value is still listed in
//! the settings but adds no elaboration.

use crate::models::prompt_config::{Length, PromptConfig, Tone};

pub const USER_CONFIG_HEADING: &str = "## CONFIGURAÇÕES DO DOCUMENTO";

pub const COMBATIVE_GUIDANCE: &str = "Adote postura assertiva e enfática: rebata \
    cada argumento contrário de forma direta, destaque as falhas da tese adversa e \
    reforce a urgência e a gravidade dos fatos.";

pub const CONCILIATORY_GUIDANCE: &str = "Adote postura cordial e colaborativa: \
    reconheça pontos convergentes, evite adjetivações contra a parte contrária e deixe \
    aberta a possibilidade de composição amigável.";

pub const DIDACTIC_GUIDANCE: &str = "Adote linguagem didática e acessível: explique \
    os conceitos jurídicos utilizados, evite latinismos sem tradução e encadeie o \
    raciocínio passo a passo.";

pub const CONCISE_GUIDANCE: &str = "Seja conciso: limite-se aos argumentos essenciais, \
    sem repetições, com parágrafos curtos e fundamentação enxuta.";

pub const EXHAUSTIVE_GUIDANCE: &str = "Seja exaustivo: explore todos os argumentos \
    cabíveis, inclusive subsidiários, antecipe as objeções da parte contrária e \
    aprofunde a fundamentação em cada tópico.";

/// Extra guidance for a tone, if it has any.
/// `Other` holding a known key (built by hand, not through serde) is
/// normalized first, so it still gets the known guidance.
pub fn tone_guidance(tone: &Tone) -> Option<&'static str> {
    match Tone::from(tone.as_str().to_string()) {
        Tone::Combative => Some(COMBATIVE_GUIDANCE),
        Tone::Conciliatory => Some(CONCILIATORY_GUIDANCE),
        Tone::Didactic => Some(DIDACTIC_GUIDANCE),
        Tone::Other(_) => None,
    }
}

/// Extra guidance for a length, if it has any.
pub fn length_guidance(length: &Length) -> Option<&'static str> {
    match Length::from(length.as_str().to_string()) {
        Length::Concise => Some(CONCISE_GUIDANCE),
        Length::Exhaustive => Some(EXHAUSTIVE_GUIDANCE),
        Length::Other(_) => None,
    }
}

pub fn format_user_config(config: &PromptConfig) -> String {
    let mut lines = vec![
        USER_CONFIG_HEADING.to_string(),
        format!("- **Tom:** {}", config.tone.as_str()),
        format!("- **Extensão:** {}", config.length.as_str()),
        format!("- **Destinatário:** {}", config.audience),
        format!(
            "- **Incluir jurisprudência:** {}",
            yes_no(config.include_case_law)
        ),
        format!("- **Incluir doutrina:** {}", yes_no(config.include_doctrine)),
    ];

    if let Some(guidance) = tone_guidance(&config.tone) {
        lines.push(String::new());
        lines.push(guidance.to_string());
    }
    if let Some(guidance) = length_guidance(&config.length) {
        lines.push(String::new());
        lines.push(guidance.to_string());
    }

    lines.join("\n")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Sim"
    } else {
        "Não"
    }
}
