//! # Padrões de Frase — Detecção e Extração de Sujeitos
//!
//! Tabela ordenada de **padrões de frase** reconhecidos pelo parser e o
//! extrator que transforma um match em dois sujeitos brutos.
//!
//! ## A Tabela de Padrões
//!
//! Cada padrão é um par `(predicado, estratégia de extração)`, avaliado em
//! **ordem fixa de prioridade** — o primeiro cujo fragmento (cue) aparece
//! no texto vence, e os demais nem são considerados:
//!
//! | Prioridade | Cue | Estratégia |
//! |-----------|-----|------------|
//! | 1 | `difference between` | divide o restante na palavra `and` |
//! | 2 | `differences between` | idem |
//! | 3 | `difference in` | idem |
//! | 4 | `comparing` | captura regex `comparing <a> and <b>` |
//!
//! ## Limitação Conhecida
//!
//! A divisão na palavra `and` não sobrevive a sujeitos que contêm a
//! própria palavra "and" (ex: "profit and loss" vs "balance sheet") — a
//! divisão produz mais de dois segmentos e a extração retorna `None`.
//! Essa é uma limitação herdada dos padrões de superfície originais;
//! generalizá-la exigiria heurísticas que os padrões nunca tiveram.

use regex::Regex;

/// Estratégia de extração dos dois sujeitos após o cue casar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractStrategy {
    /// Divide o texto no cue, pega o restante e o divide na palavra `and`
    /// (fronteira de palavra). Exige exatamente dois segmentos não vazios.
    SplitRemainderOnAnd,
    /// Captura `comparing <sujeito1> and <sujeito2>` via regex — sujeito1 é
    /// o menor trecho antes de ` and `, sujeito2 um único token em seguida.
    ComparingCapture,
}

/// Um padrão de frase reconhecido: predicado de substring + estratégia.
#[derive(Clone, Copy, Debug)]
pub struct PhrasePattern {
    /// Fragmento que ativa o padrão (verificado com `contains` sobre o
    /// texto já normalizado em lowercase).
    pub cue: &'static str,
    /// Estratégia de extração aplicada quando o cue casa.
    pub strategy: ExtractStrategy,
}

/// Tabela de padrões em ordem de prioridade. A ordem é parte do contrato:
/// o primeiro match vence, sem tentativa de escolher o "melhor" padrão.
pub const PHRASE_PATTERNS: &[PhrasePattern] = &[
    PhrasePattern {
        cue: "difference between",
        strategy: ExtractStrategy::SplitRemainderOnAnd,
    },
    PhrasePattern {
        cue: "differences between",
        strategy: ExtractStrategy::SplitRemainderOnAnd,
    },
    PhrasePattern {
        cue: "difference in",
        strategy: ExtractStrategy::SplitRemainderOnAnd,
    },
    PhrasePattern {
        cue: "comparing",
        strategy: ExtractStrategy::ComparingCapture,
    },
];

/// Extrator de sujeitos baseado nas estratégias da tabela de padrões.
///
/// Usa duas expressões regulares compiladas uma única vez e reutilizadas:
///
/// - `and_word` — divide na palavra `and` isolada (fronteiras `\b`), sem
///   quebrar palavras que apenas contêm "and" ("sand", "band")
/// - `comparing` — captura lazy de `comparing <a> and <b>`
pub struct SubjectExtractor {
    /// Regex de divisão na palavra `and` isolada.
    and_word: Regex,
    /// Regex de captura do padrão `comparing <a> and <b>`.
    comparing: Regex,
}

impl SubjectExtractor {
    /// Cria um novo extrator com as regexes compiladas.
    pub fn new() -> Self {
        Self {
            and_word: Regex::new(r"\band\b").unwrap(),
            // Captura lazy: sujeito1 é o menor trecho possível antes do
            // primeiro " and "; sujeito2 é um único token não-branco
            comparing: Regex::new(r"comparing\s+(.+?)\s+and\s+(\S+)").unwrap(),
        }
    }

    /// Aplica a estratégia do padrão ao texto normalizado.
    ///
    /// Retorna os dois sujeitos brutos (lowercase, já trimados) ou `None`
    /// quando a extração degenera — segmento vazio, número de segmentos
    /// diferente de dois, regex sem match.
    pub fn extract(&self, pattern: &PhrasePattern, text: &str) -> Option<(String, String)> {
        match pattern.strategy {
            ExtractStrategy::SplitRemainderOnAnd => self.split_remainder_on_and(text, pattern.cue),
            ExtractStrategy::ComparingCapture => self.comparing_capture(text),
        }
    }

    /// Divide o texto no cue e o restante na palavra `and`.
    ///
    /// ```text
    /// "what's the difference between whole and term life insurance"
    ///   cue = "difference between"
    ///   restante = " whole and term life insurance"
    ///   divisão  = ["whole", "term life insurance"]
    /// ```
    ///
    /// Exige **exatamente dois** segmentos não vazios — mais de um `and`
    /// no restante (sujeitos contendo a palavra "and") produz três ou
    /// mais segmentos e resulta em `None`.
    fn split_remainder_on_and(&self, text: &str, cue: &str) -> Option<(String, String)> {
        let idx = text.find(cue)?;
        let remainder = &text[idx + cue.len()..];

        let segments: Vec<&str> = self.and_word.split(remainder).collect();
        if segments.len() != 2 {
            return None;
        }

        let first = segments[0].trim();
        let second = segments[1].trim();
        if first.is_empty() || second.is_empty() {
            return None;
        }
        Some((first.to_string(), second.to_string()))
    }

    /// Captura `comparing <sujeito1> and <sujeito2>` via regex.
    ///
    /// ```text
    /// "comparing python and rust" → ("python", "rust")
    /// ```
    fn comparing_capture(&self, text: &str) -> Option<(String, String)> {
        let caps = self.comparing.captures(text)?;
        let first = caps.get(1)?.as_str().trim();
        let second = caps.get(2)?.as_str().trim();
        if first.is_empty() || second.is_empty() {
            return None;
        }
        Some((first.to_string(), second.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> SubjectExtractor {
        SubjectExtractor::new()
    }

    fn pattern(cue: &'static str, strategy: ExtractStrategy) -> PhrasePattern {
        PhrasePattern { cue, strategy }
    }

    // ─── split na palavra "and" ────────────────────────────────

    #[test]
    fn split_two_segments() {
        let p = pattern("difference between", ExtractStrategy::SplitRemainderOnAnd);
        let result = extractor().extract(&p, "the difference between cats and dogs");
        assert_eq!(result, Some(("cats".to_string(), "dogs".to_string())));
    }

    #[test]
    fn split_keeps_multiword_second_subject() {
        let p = pattern("difference between", ExtractStrategy::SplitRemainderOnAnd);
        let result = extractor().extract(
            &p,
            "what's the difference between whole and term life insurance",
        );
        assert_eq!(
            result,
            Some(("whole".to_string(), "term life insurance".to_string()))
        );
    }

    #[test]
    fn split_respects_word_boundaries() {
        // "sand" e "band" contêm "and" mas não são divididos
        let p = pattern("difference between", ExtractStrategy::SplitRemainderOnAnd);
        let result = extractor().extract(&p, "difference between sand and band");
        assert_eq!(result, Some(("sand".to_string(), "band".to_string())));
    }

    #[test]
    fn split_three_segments_is_rejected() {
        // Sujeito contendo a palavra "and" → três segmentos → None
        let p = pattern("difference between", ExtractStrategy::SplitRemainderOnAnd);
        let result = extractor().extract(&p, "difference between profit and loss and balance sheet");
        assert_eq!(result, None);
    }

    #[test]
    fn split_empty_segment_is_rejected() {
        let p = pattern("difference between", ExtractStrategy::SplitRemainderOnAnd);
        assert_eq!(extractor().extract(&p, "difference between and dogs"), None);
        assert_eq!(extractor().extract(&p, "difference between cats and"), None);
    }

    #[test]
    fn split_without_and_is_rejected() {
        let p = pattern("difference between", ExtractStrategy::SplitRemainderOnAnd);
        assert_eq!(extractor().extract(&p, "difference between cats dogs"), None);
    }

    // ─── captura "comparing" ───────────────────────────────────

    #[test]
    fn comparing_captures_both_subjects() {
        let p = pattern("comparing", ExtractStrategy::ComparingCapture);
        let result = extractor().extract(&p, "comparing python and rust");
        assert_eq!(result, Some(("python".to_string(), "rust".to_string())));
    }

    #[test]
    fn comparing_second_subject_is_single_token() {
        let p = pattern("comparing", ExtractStrategy::ComparingCapture);
        let result = extractor().extract(&p, "comparing python and rust in detail");
        assert_eq!(result, Some(("python".to_string(), "rust".to_string())));
    }

    #[test]
    fn comparing_without_and_is_rejected() {
        let p = pattern("comparing", ExtractStrategy::ComparingCapture);
        assert_eq!(extractor().extract(&p, "comparing python with rust"), None);
    }
}
