//! # ComparisonRecord — Registro Estruturado de Comparação
//!
//! Um [`ComparisonRecord`] é o produto final do parser: a comparação entre
//! **exatamente dois sujeitos**, com uma descrição por sujeito e uma
//! sequência ordenada de aspectos nomeados.
//!
//! ## Campos Principais
//!
//! | Campo | Tipo | Descrição |
//! |-------|------|-----------|
//! | `subject_a` | String | Primeiro sujeito, normalizado com inicial maiúscula |
//! | `subject_b` | String | Segundo sujeito, normalizado com inicial maiúscula |
//! | `descriptions` | HashMap | Uma descrição por sujeito, chaveada pelo nome |
//! | `aspects` | Vec<[Aspect]> | Dimensões de comparação, em ordem de exibição |
//!
//! ## Invariante de Boa Formação
//!
//! Um registro ou é **completamente bem formado** ou não existe — o parser
//! retorna `None` em vez de um registro parcial. Bem formado significa:
//!
//! - ambos os sujeitos não vazios
//! - uma entrada em `descriptions` para cada sujeito
//! - pelo menos um aspecto
//! - cada aspecto com título não vazio e um valor para cada sujeito
//!
//! A verificação está em [`ComparisonRecord::is_well_formed()`] — usada
//! pelos testes e por quem restaura registros persistidos antes de
//! entregá-los à camada de renderização.
//!
//! ## Ciclo de Vida
//!
//! O registro é construído do zero a cada chamada de parse e é imutável
//! depois de retornado. A posse transfere-se inteiramente ao consumidor
//! (camada de renderização), que lê mas nunca devolve mutações ao parser.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::ComparisonRecord;
//!
//! let mut record = ComparisonRecord::new(
//!     "Python".to_string(),
//!     "Rust".to_string(),
//!     "Key characteristics and features of python".to_string(),
//!     "Key characteristics and features of rust".to_string(),
//! );
//! record.push_aspect("Definition", "...".to_string(), "...".to_string());
//! assert!(record.is_well_formed());
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Uma dimensão nomeada de comparação (ex: "Definition", "Cost").
///
/// Cada aspecto carrega **um valor por sujeito**, chaveado pelo nome do
/// sujeito exatamente como aparece em `subject_a`/`subject_b` do registro
/// que o possui. A ordem dos aspectos dentro do registro é a ordem de
/// exibição e sobrevive à serialização (backing `Vec`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    /// Rótulo da dimensão — nunca vazio em um registro bem formado.
    pub title: String,

    /// Valor da dimensão para cada sujeito, chaveado pelo nome do sujeito.
    pub values: HashMap<String, String>,
}

/// Registro estruturado de comparação entre dois sujeitos.
///
/// Produzido pelo parser ([`crate::parser::ComparisonParser`]) e consumido
/// como dado opaco pela camada de renderização externa. A serialização
/// JSON (serde) preserva a ordem de `aspects`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Primeiro sujeito da comparação, com inicial maiúscula.
    pub subject_a: String,

    /// Segundo sujeito da comparação, com inicial maiúscula.
    pub subject_b: String,

    /// Descrição de cada sujeito, chaveada pelos valores de
    /// `subject_a`/`subject_b`. Exatamente uma entrada por sujeito.
    pub descriptions: HashMap<String, String>,

    /// Aspectos de comparação em ordem de exibição. Não vazio.
    pub aspects: Vec<Aspect>,
}

impl ComparisonRecord {
    /// Cria um registro com os dois sujeitos e suas descrições, sem aspectos.
    ///
    /// Os aspectos são adicionados em seguida via [`push_aspect()`](Self::push_aspect) —
    /// o chamador é responsável por adicionar pelo menos um antes de
    /// entregar o registro (o parser sempre adiciona três).
    pub fn new(
        subject_a: String,
        subject_b: String,
        description_a: String,
        description_b: String,
    ) -> Self {
        let mut descriptions = HashMap::new();
        descriptions.insert(subject_a.clone(), description_a);
        descriptions.insert(subject_b.clone(), description_b);
        Self {
            subject_a,
            subject_b,
            descriptions,
            aspects: Vec::new(),
        }
    }

    /// Acrescenta um aspecto ao final da sequência de exibição.
    ///
    /// Os valores são chaveados pelos sujeitos do próprio registro, o que
    /// garante por construção a parte "cada aspecto tem ambos os valores"
    /// do invariante.
    pub fn push_aspect(&mut self, title: &str, value_a: String, value_b: String) {
        let mut values = HashMap::new();
        values.insert(self.subject_a.clone(), value_a);
        values.insert(self.subject_b.clone(), value_b);
        self.aspects.push(Aspect {
            title: title.to_string(),
            values,
        });
    }

    /// Verifica o invariante de boa formação do registro.
    ///
    /// Retorna `true` quando:
    /// - ambos os sujeitos são não vazios
    /// - `descriptions` tem uma entrada para cada sujeito
    /// - existe pelo menos um aspecto
    /// - todo aspecto tem título não vazio e um valor para cada sujeito
    ///
    /// Função pura, sem efeitos colaterais.
    pub fn is_well_formed(&self) -> bool {
        !self.subject_a.is_empty()
            && !self.subject_b.is_empty()
            && self.descriptions.contains_key(&self.subject_a)
            && self.descriptions.contains_key(&self.subject_b)
            && !self.aspects.is_empty()
            && self.aspects.iter().all(|a| {
                !a.title.is_empty()
                    && a.values.contains_key(&self.subject_a)
                    && a.values.contains_key(&self.subject_b)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ComparisonRecord {
        let mut record = ComparisonRecord::new(
            "Python".to_string(),
            "Rust".to_string(),
            "Key characteristics and features of python".to_string(),
            "Key characteristics and features of rust".to_string(),
        );
        record.push_aspect("Definition", "a".to_string(), "b".to_string());
        record.push_aspect("Key Features", "c".to_string(), "d".to_string());
        record.push_aspect("Benefits", "e".to_string(), "f".to_string());
        record
    }

    #[test]
    fn well_formed_record() {
        assert!(sample_record().is_well_formed());
    }

    #[test]
    fn empty_subject_is_malformed() {
        let mut record = sample_record();
        record.subject_a = String::new();
        assert!(!record.is_well_formed());
    }

    #[test]
    fn missing_description_is_malformed() {
        let mut record = sample_record();
        record.descriptions.remove("Rust");
        assert!(!record.is_well_formed());
    }

    #[test]
    fn no_aspects_is_malformed() {
        let mut record = sample_record();
        record.aspects.clear();
        assert!(!record.is_well_formed());
    }

    #[test]
    fn aspect_missing_value_is_malformed() {
        let mut record = sample_record();
        record.aspects[1].values.remove("Python");
        assert!(!record.is_well_formed());
    }

    #[test]
    fn aspect_empty_title_is_malformed() {
        let mut record = sample_record();
        record.aspects[0].title.clear();
        assert!(!record.is_well_formed());
    }

    /// Round-trip JSON: sujeitos, descrições e aspectos (mesma ordem,
    /// mesmos títulos, mesmos valores) devem sobreviver intactos.
    #[test]
    fn json_round_trip_preserves_everything() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let restored: ComparisonRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
        // A ordem dos aspectos é a ordem de exibição — verificada explicitamente
        let titles: Vec<&str> = restored.aspects.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Definition", "Key Features", "Benefits"]);
        assert!(restored.is_well_formed());
    }
}
