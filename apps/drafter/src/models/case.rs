use serde::{Deserialize, Serialize};

/// Case record as handed over by the practice-management host.
/// Every field is optional; absent fields are simply not rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseContext {
    pub number: Option<String>,
    pub case_type: Option<String>,
    pub status: Option<String>,
    pub phase: Option<String>,
    pub court: Option<String>,
    pub court_division: Option<String>,
    pub district: Option<String>,
    pub claim_value: Option<f64>,
    pub risk_value: Option<f64>,
    pub client: Option<ClientInfo>,
    pub judge: Option<JudgeInfo>,
    pub parties: Vec<Party>,
    pub creditors: Vec<Creditor>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientInfo {
    pub name: Option<String>,
    /// CPF or CNPJ.
    pub tax_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeInfo {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    pub name: String,
    /// Procedural role, e.g. "Autor", "Réu", "Administrador Judicial".
    pub role: String,
}

/// Creditor listed in a judicial recovery (recuperação judicial) case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Creditor {
    pub name: String,
    /// Credit class, e.g. "Classe I - Trabalhista".
    pub class: String,
    pub updated_value: Option<f64>,
}
