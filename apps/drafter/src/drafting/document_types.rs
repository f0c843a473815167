//! Layer 3: per-document-type drafting instructions.
//!
//! Lookup is an exact match on the uppercase key sent by the host. A key with
//! no entry yields `None` and the layer is left out of the prompt.

/// Document kinds that carry their own drafting instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PeticaoInicial,
    Contestacao,
    RecursoApelacao,
    AgravoInstrumento,
    Manifestacao,
    HabilitacaoCredito,
    ImpugnacaoCredito,
    Contrato,
    Notificacao,
    Parecer,
    Procuracao,
    RevisaoIa,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 12] = [
        DocumentKind::PeticaoInicial,
        DocumentKind::Contestacao,
        DocumentKind::RecursoApelacao,
        DocumentKind::AgravoInstrumento,
        DocumentKind::Manifestacao,
        DocumentKind::HabilitacaoCredito,
        DocumentKind::ImpugnacaoCredito,
        DocumentKind::Contrato,
        DocumentKind::Notificacao,
        DocumentKind::Parecer,
        DocumentKind::Procuracao,
        DocumentKind::RevisaoIa,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            DocumentKind::PeticaoInicial => "PETICAO_INICIAL",
            DocumentKind::Contestacao => "CONTESTACAO",
            DocumentKind::RecursoApelacao => "RECURSO_APELACAO",
            DocumentKind::AgravoInstrumento => "AGRAVO_INSTRUMENTO",
            DocumentKind::Manifestacao => "MANIFESTACAO",
            DocumentKind::HabilitacaoCredito => "HABILITACAO_CREDITO",
            DocumentKind::ImpugnacaoCredito => "IMPUGNACAO_CREDITO",
            DocumentKind::Contrato => "CONTRATO",
            DocumentKind::Notificacao => "NOTIFICACAO",
            DocumentKind::Parecer => "PARECER",
            DocumentKind::Procuracao => "PROCURACAO",
            DocumentKind::RevisaoIa => "REVISAO_IA",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::PeticaoInicial => "Petição Inicial",
            DocumentKind::Contestacao => "Contestação",
            DocumentKind::RecursoApelacao => "Recurso de Apelação",
            DocumentKind::AgravoInstrumento => "Agravo de Instrumento",
            DocumentKind::Manifestacao => "Manifestação",
            DocumentKind::HabilitacaoCredito => "Habilitação de Crédito",
            DocumentKind::ImpugnacaoCredito => "Impugnação de Crédito",
            DocumentKind::Contrato => "Contrato",
            DocumentKind::Notificacao => "Notificação Extrajudicial",
            DocumentKind::Parecer => "Parecer Jurídico",
            DocumentKind::Procuracao => "Procuração",
            DocumentKind::RevisaoIa => "Revisão de Documento",
        }
    }

    pub fn instructions(self) -> &'static str {
        match self {
            DocumentKind::PeticaoInicial => PETICAO_INICIAL,
            DocumentKind::Contestacao => CONTESTACAO,
            DocumentKind::RecursoApelacao => RECURSO_APELACAO,
            DocumentKind::AgravoInstrumento => AGRAVO_INSTRUMENTO,
            DocumentKind::Manifestacao => MANIFESTACAO,
            DocumentKind::HabilitacaoCredito => HABILITACAO_CREDITO,
            DocumentKind::ImpugnacaoCredito => IMPUGNACAO_CREDITO,
            DocumentKind::Contrato => CONTRATO,
            DocumentKind::Notificacao => NOTIFICACAO,
            DocumentKind::Parecer => PARECER,
            DocumentKind::Procuracao => PROCURACAO,
            DocumentKind::RevisaoIa => REVISAO_IA,
        }
    }
}

const PETICAO_INICIAL: &str = "Redija uma petição inicial observando os requisitos do art. 319 do CPC: \
juízo a que é dirigida, qualificação das partes, fatos e fundamentos jurídicos do pedido, pedido com \
suas especificações, valor da causa, provas com que o autor pretende demonstrar a verdade dos fatos e \
opção pela realização ou não de audiência de conciliação ou de mediação. Havendo urgência, formule o \
pedido de tutela provisória em tópico próprio, demonstrando a probabilidade do direito e o perigo de dano.";

const CONTESTACAO: &str = "Redija uma contestação concentrando toda a matéria de defesa (art. 336 do CPC). \
Antes do mérito, examine as preliminares cabíveis do art. 337 do CPC. No mérito, impugne especificamente \
cada fato alegado pelo autor, sob pena de presunção de veracidade (art. 341 do CPC), e indique as provas \
que pretende produzir. Avalie o cabimento de reconvenção e sinalize-o ao final como observação ao advogado.";

const RECURSO_APELACAO: &str = "Redija um recurso de apelação com petição de interposição dirigida ao juízo \
de primeiro grau e razões dirigidas ao tribunal. Demonstre tempestividade e preparo, exponha os fatos e o \
direito, as razões do pedido de reforma ou de invalidação da sentença e o pedido de nova decisão (art. 1.010 \
do CPC). Ataque especificamente os fundamentos da sentença, em atenção ao princípio da dialeticidade.";

const AGRAVO_INSTRUMENTO: &str = "Redija um agravo de instrumento dirigido diretamente ao tribunal. Confirme \
o cabimento à luz do rol do art. 1.015 do CPC ou da taxatividade mitigada, indique as peças obrigatórias \
do art. 1.017 e, havendo risco de dano grave, requeira efeito suspensivo ou antecipação da tutela recursal \
(art. 1.019, I, do CPC).";

const MANIFESTACAO: &str = "Redija uma manifestação processual objetiva, respondendo exclusivamente ao ponto \
determinado pelo juízo ou suscitado pela parte contrária. Identifique no primeiro parágrafo o despacho ou a \
petição a que se responde e encerre com requerimento claro.";

const HABILITACAO_CREDITO: &str = "Redija uma habilitação ou divergência de crédito no âmbito de recuperação \
judicial ou falência, observando o art. 9º da Lei 11.101/2005: nome, endereço e qualificação do credor, \
valor do crédito atualizado até a data do pedido de recuperação ou da decretação da falência, origem e \
classificação do crédito, documentos comprobatórios e eventual garantia. Demonstre o cálculo de atualização \
e a classe pretendida (art. 41 da Lei 11.101/2005).";

const IMPUGNACAO_CREDITO: &str = "Redija uma impugnação à relação de credores nos termos dos arts. 8º e 13 da \
Lei 11.101/2005, apontando a ausência de crédito, a ilegitimidade, a importância ou a classificação impugnada. \
Instrua com os documentos disponíveis e indique as provas a produzir.";

const CONTRATO: &str = "Redija um contrato com preâmbulo de qualificação das partes, considerandos quando \
úteis, cláusulas numeradas e agrupadas por tema (objeto, preço e pagamento, prazo, obrigações, garantias, \
confidencialidade, rescisão e penalidades, proteção de dados, foro) e fechamento com local, data, assinaturas \
e testemunhas. Redija cláusulas inequívocas e sinalize entre colchetes condições comerciais não informadas.";

const NOTIFICACAO: &str = "Redija uma notificação extrajudicial com identificação do notificante e do \
notificado, exposição sucinta dos fatos, fundamento contratual ou legal, providência exigida com prazo \
determinado para cumprimento e consequências do descumprimento. Mantenha tom firme e profissional.";

const PARECER: &str = "Redija um parecer jurídico com ementa, relatório da consulta, fundamentação com análise \
da legislação, da jurisprudência e da doutrina aplicáveis, e conclusão respondendo de forma objetiva a cada \
quesito formulado. Aponte riscos e alternativas quando houver divergência de entendimento.";

const PROCURACAO: &str = "Redija um instrumento de procuração com qualificação completa do outorgante e dos \
outorgados, poderes da cláusula ad judicia e, somente quando expressamente solicitado, poderes especiais \
(art. 105 do CPC), com indicação da finalidade e do prazo de validade se houver.";

const REVISAO_IA: &str = "Revise o documento apresentado como um advogado sênior revisaria a minuta de um \
colega. Organize a resposta em: (1) avaliação geral em até três frases; (2) problemas encontrados, cada um \
com o trecho original entre aspas, a explicação do problema e a redação sugerida; (3) pontos fortes que \
devem ser preservados. Classifique cada problema como CRÍTICO, IMPORTANTE ou SUGESTÃO. Não reescreva o \
documento inteiro.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_round_trips_through_its_key() {
        for kind in DocumentKind::ALL {
            assert_eq!(DocumentKind::from_key(kind.key()), Some(kind));
        }
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert_eq!(DocumentKind::from_key("CONTRATO"), Some(DocumentKind::Contrato));
        assert_eq!(DocumentKind::from_key("contrato"), None);
        assert_eq!(DocumentKind::from_key(" CONTRATO"), None);
        assert_eq!(DocumentKind::from_key("CONTRAT"), None);
    }

    #[test]
    fn test_unknown_key_yields_no_instructions() {
        assert!(DocumentKind::from_key("NON_EXISTENT_KEY").is_none());
        assert!(DocumentKind::from_key("").is_none());
    }

    #[test]
    fn test_instruction_blocks_are_distinct_and_non_empty() {
        let blocks: Vec<&str> = DocumentKind::ALL.iter().map(|k| k.instructions()).collect();
        for (i, block) in blocks.iter().enumerate() {
            assert!(!block.trim().is_empty());
            assert!(
                !blocks[i + 1..].contains(block),
                "duplicate instructions for {:?}",
                DocumentKind::ALL[i]
            );
        }
    }
}
