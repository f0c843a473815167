//! Renders host records (case, project, knowledge base) into Markdown
//! fragments for the prompt. Absent or blank fields are skipped outright.

use crate::drafting::currency::format_brl;
use crate::models::case::CaseContext;
use crate::models::knowledge::KnowledgeEntry;
use crate::models::project::ProjectContext;

/// Knowledge entry content is cut to this many characters.
pub const MAX_KNOWLEDGE_CONTENT_CHARS: usize = 1500;

/// Appended to knowledge entry content that was cut.
pub const TRUNCATION_MARKER: &str = "...";

pub const CASE_HEADING: &str = "## CONTEXTO DO CASO";
pub const PROJECT_HEADING: &str = "## CONTEXTO DO PROJETO";
pub const KNOWLEDGE_HEADING: &str = "## BASE DE CONHECIMENTO";

pub fn format_case(case: &CaseContext) -> String {
    let mut lines = vec![CASE_HEADING.to_string()];

    push_field(&mut lines, "Número do Processo", case.number.as_deref());
    push_field(&mut lines, "Tipo", case.case_type.as_deref());
    push_field(&mut lines, "Status", case.status.as_deref());
    push_field(&mut lines, "Fase Processual", case.phase.as_deref());
    push_field(&mut lines, "Tribunal", case.court.as_deref());
    push_field(&mut lines, "Vara", case.court_division.as_deref());
    push_field(&mut lines, "Comarca", case.district.as_deref());
    push_money(&mut lines, "Valor da Causa", case.claim_value);
    push_money(&mut lines, "Valor de Risco", case.risk_value);

    if let Some(client) = &case.client {
        let name = non_blank(client.name.as_deref());
        let tax_id = non_blank(client.tax_id.as_deref());
        if name.is_some() || tax_id.is_some() {
            lines.push(String::new());
            lines.push("### Cliente".to_string());
            push_field(&mut lines, "Nome", name);
            push_field(&mut lines, "CPF/CNPJ", tax_id);
        }
    }

    if let Some(judge) = case.judge.as_ref().and_then(|j| non_blank(j.name.as_deref())) {
        lines.push(String::new());
        lines.push("### Juiz".to_string());
        lines.push(format!("- {judge}"));
    }

    let parties: Vec<String> = case
        .parties
        .iter()
        .filter_map(|party| {
            let name = non_blank(Some(party.name.as_str()))?;
            Some(match non_blank(Some(party.role.as_str())) {
                Some(role) => format!("- **{role}:** {name}"),
                None => format!("- {name}"),
            })
        })
        .collect();
    push_subsection(&mut lines, "### Partes", parties);

    let creditors: Vec<String> = case
        .creditors
        .iter()
        .filter_map(|creditor| {
            let mut line = format!("- {}", non_blank(Some(creditor.name.as_str()))?);
            if let Some(class) = non_blank(Some(creditor.class.as_str())) {
                line.push_str(&format!(" ({class})"));
            }
            if let Some(value) = creditor.updated_value {
                line.push_str(&format!(": {}", format_brl(value)));
            }
            Some(line)
        })
        .collect();
    push_subsection(&mut lines, "### Credores", creditors);

    let tags = join_non_blank(&case.tags);
    if !tags.is_empty() {
        lines.push(String::new());
        lines.push(format!("**Tags:** {tags}"));
    }

    lines.join("\n")
}

pub fn format_project(project: &ProjectContext) -> String {
    let mut lines = vec![PROJECT_HEADING.to_string()];

    push_field(&mut lines, "Código", project.code.as_deref());
    push_field(&mut lines, "Título", project.title.as_deref());
    push_field(&mut lines, "Categoria", project.category.as_deref());
    push_field(&mut lines, "Status", project.status.as_deref());
    push_field(&mut lines, "Descrição", project.description.as_deref());
    push_money(&mut lines, "Valor Envolvido", project.involved_value);
    push_field(&mut lines, "Cliente", project.client_name.as_deref());

    let documents: Vec<String> = project
        .documents
        .iter()
        .filter_map(|doc| {
            let title = non_blank(Some(doc.title.as_str()))?;
            Some(match non_blank(Some(doc.document_type.as_str())) {
                Some(kind) => format!("- {title} ({kind})"),
                None => format!("- {title}"),
            })
        })
        .collect();
    push_subsection(&mut lines, "### Documentos", documents);

    lines.join("\n")
}

/// Numbered reference list, in the order the host ranked the entries.
pub fn format_knowledge_entries(entries: &[KnowledgeEntry]) -> String {
    let mut blocks = vec![KNOWLEDGE_HEADING.to_string()];

    for (index, entry) in entries.iter().enumerate() {
        let mut heading = format!("### {}. {}", index + 1, entry.title);
        if let Some(entry_type) = non_blank(Some(entry.entry_type.as_str())) {
            heading.push_str(&format!(" [{entry_type}]"));
        }
        if let Some(area) = non_blank(entry.area.as_deref()) {
            heading.push_str(&format!(" ({area})"));
        }

        let mut lines = vec![heading];
        if let Some(summary) = non_blank(entry.summary.as_deref()) {
            lines.push(format!("**Resumo:** {summary}"));
        }
        if let Some(content) = non_blank(entry.content.as_deref()) {
            lines.push(format!("**Conteúdo:** {}", truncate_content(content)));
        }
        if let Some(source) = non_blank(entry.source.as_deref()) {
            lines.push(format!("**Fonte:** {source}"));
        }
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}

/// Keeps the first `MAX_KNOWLEDGE_CONTENT_CHARS` characters (not bytes) and
/// marks the cut.
fn truncate_content(content: &str) -> String {
    match content.char_indices().nth(MAX_KNOWLEDGE_CONTENT_CHARS) {
        Some((byte_index, _)) => format!("{}{TRUNCATION_MARKER}", &content[..byte_index]),
        None => content.to_string(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn push_field(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(value) = non_blank(value) {
        lines.push(format!("- **{label}:** {value}"));
    }
}

fn push_money(lines: &mut Vec<String>, label: &str, value: Option<f64>) {
    if let Some(value) = value {
        lines.push(format!("- **{label}:** {}", format_brl(value)));
    }
}

fn push_subsection(lines: &mut Vec<String>, heading: &str, items: Vec<String>) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(heading.to_string());
    lines.extend(items);
}

fn join_non_blank(values: &[String]) -> String {
    values
        .iter()
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
