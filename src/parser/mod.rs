//! # Parser de Comparação — Texto Livre para Registro Estruturado
//!
//! Este módulo é o coração do sistema: transforma uma frase em linguagem
//! natural pedindo uma comparação (ex: "what's the difference between
//! whole and term life insurance") em um [`ComparisonRecord`] completo.
//!
//! ## Fluxo de Processamento
//!
//! ```text
//! Texto do usuário
//!   ├── 1. NFC normalize (Unicode) + lowercase + trim
//!   ├── 2. Detecção de padrão (tabela ordenada, primeiro match vence)
//!   │   ├── "difference between"  → divide restante em "and"
//!   │   ├── "differences between" → idem
//!   │   ├── "difference in"       → idem
//!   │   └── "comparing"           → captura regex
//!   ├── 3. Validação dos segmentos (exatamente dois, não vazios)
//!   ├── 4. Normalização dos sujeitos (inicial maiúscula)
//!   └── 5. Expansão via template (seguros de vida ou genérico)
//! ```
//!
//! Qualquer falha em qualquer etapa vira `None` — a função é **total**:
//! definida para toda string, nunca entra em pânico, nunca produz um
//! registro parcial.
//!
//! ## Concorrência
//!
//! O parser é imutável (`&self`) após criação e não tem estado
//! compartilhado nem I/O — seguro para chamadas concorrentes sem
//! nenhuma coordenação. Debounce de chamadas redundantes é
//! responsabilidade da superfície de entrada, não deste componente.
//!
//! ## Sub-módulos
//!
//! | Módulo | Responsabilidade |
//! |--------|-----------------|
//! | [`patterns`] | Tabela ordenada de padrões de frase + extração de sujeitos |
//! | [`template`] | Seleção e expansão dos templates de aspectos |
//! | [`structured`] | Formato estruturado linha a linha (entrada alternativa) |

/// Sub-módulo da tabela de padrões de frase e extração de sujeitos.
pub mod patterns;

/// Sub-módulo do formato estruturado de entrada.
pub mod structured;

/// Sub-módulo dos templates de expansão de aspectos.
pub mod template;

use unicode_normalization::UnicodeNormalization;

use crate::core::ComparisonRecord;

use patterns::SubjectExtractor;
use structured::StructuredParser;

/// Parser de comparação — frase livre (ou formato estruturado) para
/// [`ComparisonRecord`].
///
/// As expressões regulares dos extratores são compiladas uma única vez
/// na construção e reutilizadas em todas as chamadas.
///
/// ## Exemplo de Uso
///
/// ```rust
/// use crate::parser::ComparisonParser;
///
/// let parser = ComparisonParser::new();
/// let record = parser.parse("comparing python and rust").unwrap();
/// assert_eq!(record.subject_a, "Python");
/// assert_eq!(record.subject_b, "Rust");
/// assert!(parser.parse("tell me about cats").is_none());
/// ```
pub struct ComparisonParser {
    /// Extrator dos dois sujeitos a partir dos padrões de frase.
    extractor: SubjectExtractor,
    /// Parser do formato estruturado (fallback de [`parse_any()`](Self::parse_any)).
    structured: StructuredParser,
}

impl ComparisonParser {
    /// Cria um novo parser com os extratores compilados.
    pub fn new() -> Self {
        Self {
            extractor: SubjectExtractor::new(),
            structured: StructuredParser::new(),
        }
    }

    /// Interpreta uma frase em linguagem natural como pedido de comparação.
    ///
    /// Retorna `Some(record)` — sempre bem formado — quando um dos padrões
    /// reconhecidos casa e produz dois sujeitos válidos; `None` em
    /// qualquer outro caso (entrada vazia, nenhum padrão, segmentos
    /// degenerados).
    ///
    /// A prioridade dos padrões é fixa e literal: o primeiro da tabela
    /// cujo cue aparece no texto vence, mesmo que outro padrão também
    /// pudesse casar. Se o padrão vencedor falha na extração, o resultado
    /// é `None` — não há tentativa com os padrões seguintes.
    pub fn parse(&self, text: &str) -> Option<ComparisonRecord> {
        // Normalização Unicode NFC — caracteres acentuados em forma
        // canônica antes de qualquer comparação de substring
        let text: String = text.nfc().collect();
        let lowered = text.to_lowercase();
        let normalized = lowered.trim();
        if normalized.is_empty() {
            return None;
        }

        // Primeiro padrão cujo cue aparece no texto vence
        let pattern = patterns::PHRASE_PATTERNS
            .iter()
            .find(|p| normalized.contains(p.cue))?;

        let (raw_a, raw_b) = self.extractor.extract(pattern, normalized)?;

        // Apenas a inicial é capitalizada — sujeitos multi-palavra não
        // recebem title-case
        let subject_a = capitalize_first(&raw_a);
        let subject_b = capitalize_first(&raw_b);

        let kind = template::select_template(&subject_a, &subject_b);
        Some(template::expand_template(kind, subject_a, subject_b))
    }

    /// Tenta os padrões de linguagem natural e, se nenhum casar, o
    /// formato estruturado linha a linha.
    ///
    /// É o ponto de entrada usado pela superfície web.
    pub fn parse_any(&self, text: &str) -> Option<ComparisonRecord> {
        self.parse(text).or_else(|| self.structured.parse(text))
    }
}

/// Capitaliza apenas o primeiro caractere, preservando o resto.
///
/// `"term life insurance"` → `"Term life insurance"`. Unicode-aware:
/// usa `char::to_uppercase` (que pode expandir para mais de um char).
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> ComparisonParser {
        ComparisonParser::new()
    }

    // ─── cenários de referência ────────────────────────────────

    #[test]
    fn whole_vs_term_life_insurance() {
        let record = parser()
            .parse("what's the difference between whole and term life insurance")
            .unwrap();
        assert_eq!(record.subject_a, "Whole");
        assert_eq!(record.subject_b, "Term life insurance");
        assert!(record.is_well_formed());
        // "Term life insurance" contém "life" → template de seguros
        assert!(record.descriptions["Whole"].contains("permanent life insurance policy"));
        assert!(record.descriptions.contains_key("Term life insurance"));
        assert_eq!(record.aspects.len(), 3);
        for aspect in &record.aspects {
            assert!(aspect.values.contains_key("Whole"));
            assert!(aspect.values.contains_key("Term life insurance"));
        }
    }

    #[test]
    fn comparing_python_and_rust() {
        let record = parser().parse("comparing python and rust").unwrap();
        assert_eq!(record.subject_a, "Python");
        assert_eq!(record.subject_b, "Rust");
        assert_eq!(
            record.descriptions["Python"],
            "Key characteristics and features of python"
        );
        assert_eq!(
            record.descriptions["Rust"],
            "Key characteristics and features of rust"
        );
    }

    #[test]
    fn unrecognized_text_yields_none() {
        assert!(parser().parse("tell me about cats").is_none());
    }

    #[test]
    fn empty_and_whitespace_yield_none() {
        assert!(parser().parse("").is_none());
        assert!(parser().parse("   \n\t  ").is_none());
    }

    // ─── totalidade ────────────────────────────────────────────

    #[test]
    fn long_input_terminates_without_panic() {
        let long = "x".repeat(50_000);
        assert!(parser().parse(&long).is_none());

        let long_with_cue = format!("difference between {}", "a ".repeat(10_000));
        // Sem "and" no restante → None, sem pânico
        assert!(parser().parse(&long_with_cue).is_none());
    }

    #[test]
    fn accented_input_is_handled() {
        let record = parser().parse("comparing café and chá").unwrap();
        assert_eq!(record.subject_a, "Café");
        assert_eq!(record.subject_b, "Chá");
    }

    // ─── prioridade e variantes de padrão ──────────────────────

    #[test]
    fn difference_between_takes_precedence_over_comparing() {
        // Ambos os cues presentes — "difference between" vence
        let record = parser()
            .parse("comparing the difference between cats and dogs")
            .unwrap();
        assert_eq!(record.subject_a, "Cats");
        assert_eq!(record.subject_b, "Dogs");
    }

    #[test]
    fn differences_between_variant() {
        let record = parser().parse("differences between tea and coffee").unwrap();
        assert_eq!(record.subject_a, "Tea");
        assert_eq!(record.subject_b, "Coffee");
    }

    #[test]
    fn difference_in_variant() {
        let record = parser().parse("difference in cost and value").unwrap();
        assert_eq!(record.subject_a, "Cost");
        assert_eq!(record.subject_b, "Value");
    }

    #[test]
    fn single_char_subjects_are_capitalized() {
        let record = parser().parse("comparing x and y").unwrap();
        assert_eq!(record.subject_a, "X");
        assert_eq!(record.subject_b, "Y");
    }

    // ─── limitação conhecida: "and" dentro de sujeito ──────────

    #[test]
    fn subject_containing_and_yields_none() {
        let result = parser().parse("difference between profit and loss and balance sheet");
        assert!(result.is_none());
    }

    // ─── roteamento de template ────────────────────────────────

    #[test]
    fn life_subjects_route_to_insurance_template() {
        let record = parser()
            .parse("difference between whole life and universal")
            .unwrap();
        assert!(record.descriptions["Whole life"].contains("permanent life insurance policy"));
    }

    #[test]
    fn non_life_subjects_route_to_generic_template() {
        let record = parser().parse("difference between cats and dogs").unwrap();
        assert_eq!(
            record.descriptions["Cats"],
            "Key characteristics and features of cats"
        );
    }

    // ─── parse_any ─────────────────────────────────────────────

    #[test]
    fn parse_any_falls_back_to_structured_format() {
        let text = "python: a scripting language\nrust: a systems language\n- Typing: dynamic vs static";
        let record = parser().parse_any(text).unwrap();
        assert_eq!(record.subject_a, "Python");
        assert_eq!(record.aspects[0].title, "Typing");
    }

    #[test]
    fn parse_any_prefers_natural_language() {
        let record = parser().parse_any("comparing python and rust").unwrap();
        // Veio do template genérico, não do formato estruturado
        assert_eq!(record.aspects.len(), 3);
    }

    // ─── helpers ───────────────────────────────────────────────

    #[test]
    fn capitalize_first_basic() {
        assert_eq!(capitalize_first("term life insurance"), "Term life insurance");
        assert_eq!(capitalize_first("x"), "X");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("érico"), "Érico");
    }
}
