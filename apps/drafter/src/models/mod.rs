pub mod case;
pub mod knowledge;
pub mod project;
pub mod prompt_config;
