//! # Formato Estruturado — Entrada Linha a Linha
//!
//! Além das frases em linguagem natural, a superfície de entrada aceita
//! um formato estruturado explícito, uma declaração por linha:
//!
//! ```text
//! Subject1: description
//! Subject2: description
//! - Aspect: value1 vs value2
//! ```
//!
//! ## Regras
//!
//! - Linhas sem `-` inicial definem os sujeitos, **em ordem** — exatamente
//!   dois são exigidos, com nomes distintos.
//! - Linhas iniciadas por `-` definem aspectos, em ordem de exibição —
//!   pelo menos um é exigido. Os dois valores são separados pela palavra
//!   ` vs ` (primeira ocorrência) e chaveados posicionalmente ao primeiro
//!   e segundo sujeito.
//! - Linhas vazias são ignoradas; qualquer outra linha que não case com a
//!   gramática invalida a entrada inteira.
//!
//! Como no parser de linguagem natural, toda falha é `None` — nunca um
//! registro parcial.

use regex::Regex;

use crate::core::ComparisonRecord;

use super::capitalize_first;

/// Parser do formato estruturado linha a linha.
///
/// As regexes são compiladas uma única vez na construção e reutilizadas
/// em todas as chamadas a [`parse()`](StructuredParser::parse).
pub struct StructuredParser {
    /// Casa uma entrada `nome: valor` (usada para sujeitos e, após
    /// remover o `-`, para aspectos).
    entry: Regex,
    /// Separador dos dois valores de um aspecto — a palavra `vs` isolada.
    vs_split: Regex,
}

impl StructuredParser {
    /// Cria um novo parser com as regexes compiladas.
    pub fn new() -> Self {
        Self {
            entry: Regex::new(r"^([^:]+):\s*(.+)$").unwrap(),
            vs_split: Regex::new(r"\s+vs\s+").unwrap(),
        }
    }

    /// Interpreta o texto como formato estruturado.
    ///
    /// Retorna `Some(record)` apenas quando o texto inteiro obedece à
    /// gramática e o resultado satisfaz o invariante de boa formação:
    /// dois sujeitos distintos com descrição e pelo menos um aspecto com
    /// ambos os valores.
    pub fn parse(&self, text: &str) -> Option<ComparisonRecord> {
        let mut subjects: Vec<(String, String)> = Vec::new();
        let mut aspects: Vec<(String, String, String)> = Vec::new();

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(rest) = line.strip_prefix('-') {
                // Linha de aspecto: "- Title: value1 vs value2"
                let caps = self.entry.captures(rest.trim())?;
                let title = caps.get(1)?.as_str().trim();
                let value = caps.get(2)?.as_str();

                let parts: Vec<&str> = self.vs_split.splitn(value, 2).collect();
                if parts.len() != 2 {
                    return None;
                }
                let first = parts[0].trim();
                let second = parts[1].trim();
                if title.is_empty() || first.is_empty() || second.is_empty() {
                    return None;
                }
                aspects.push((title.to_string(), first.to_string(), second.to_string()));
            } else {
                // Linha de sujeito: "Name: description"
                let caps = self.entry.captures(line)?;
                let name = capitalize_first(caps.get(1)?.as_str().trim());
                let description = caps.get(2)?.as_str().trim().to_string();
                if name.is_empty() || description.is_empty() {
                    return None;
                }
                if subjects.len() == 2 {
                    // Terceiro sujeito — fora do modelo de dois sujeitos
                    return None;
                }
                subjects.push((name, description));
            }
        }

        if subjects.len() != 2 || aspects.is_empty() {
            return None;
        }
        // Nomes iguais colapsariam os mapas chaveados por sujeito
        if subjects[0].0 == subjects[1].0 {
            return None;
        }

        let (subject_a, description_a) = subjects.remove(0);
        let (subject_b, description_b) = subjects.remove(0);
        let mut record = ComparisonRecord::new(subject_a, subject_b, description_a, description_b);
        for (title, first, second) in aspects {
            record.push_aspect(&title, first, second);
        }
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> StructuredParser {
        StructuredParser::new()
    }

    const SAMPLE: &str = "\
python: a dynamic scripting language
rust: a systems programming language
- Typing: dynamic vs static
- Memory: garbage collected vs ownership";

    #[test]
    fn parses_two_subjects_and_aspects_in_order() {
        let record = parser().parse(SAMPLE).unwrap();
        assert_eq!(record.subject_a, "Python");
        assert_eq!(record.subject_b, "Rust");
        assert_eq!(
            record.descriptions["Python"],
            "a dynamic scripting language"
        );
        let titles: Vec<&str> = record.aspects.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Typing", "Memory"]);
        assert_eq!(record.aspects[0].values["Python"], "dynamic");
        assert_eq!(record.aspects[0].values["Rust"], "static");
        assert!(record.is_well_formed());
    }

    #[test]
    fn blank_lines_are_ignored() {
        let text = "a: one\n\nb: two\n\n- X: 1 vs 2\n";
        assert!(parser().parse(text).is_some());
    }

    #[test]
    fn single_subject_is_rejected() {
        let text = "a: one\n- X: 1 vs 2";
        assert_eq!(parser().parse(text), None);
    }

    #[test]
    fn third_subject_is_rejected() {
        let text = "a: one\nb: two\nc: three\n- X: 1 vs 2";
        assert_eq!(parser().parse(text), None);
    }

    #[test]
    fn duplicate_subject_names_are_rejected() {
        let text = "a: one\na: two\n- X: 1 vs 2";
        assert_eq!(parser().parse(text), None);
    }

    #[test]
    fn missing_aspects_are_rejected() {
        let text = "a: one\nb: two";
        assert_eq!(parser().parse(text), None);
    }

    #[test]
    fn aspect_without_vs_is_rejected() {
        let text = "a: one\nb: two\n- X: only one value";
        assert_eq!(parser().parse(text), None);
    }

    #[test]
    fn line_without_colon_is_rejected() {
        let text = "a: one\nnot a valid line\nb: two\n- X: 1 vs 2";
        assert_eq!(parser().parse(text), None);
    }
}
