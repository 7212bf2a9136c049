//! # Templates de Expansão — Do Par de Sujeitos ao Registro Completo
//!
//! Depois que os dois sujeitos foram extraídos e normalizados, este módulo
//! os expande em um [`ComparisonRecord`] completo usando um de dois
//! templates:
//!
//! | Template | Quando | Conteúdo |
//! |----------|--------|----------|
//! | [`Insurance`](TemplateKind::Insurance) | algum sujeito contém `"life"` | Textos pré-autorados do domínio de seguros de vida |
//! | [`Generic`](TemplateKind::Generic) | caso contrário | Texto genérico parametrizado apenas pelo sujeito em lowercase |
//!
//! A seleção é uma função explícita ([`select_template()`]) e cada
//! gerador é uma função pura e independente — testável isoladamente,
//! sem if/else embutido no fluxo do parser.
//!
//! ## Aspectos Fixos
//!
//! Ambos os templates produzem os mesmos três aspectos, nesta ordem:
//! **Definition**, **Key Features**, **Benefits**.
//!
//! ## Semântica Posicional do Template de Seguros
//!
//! O template de seguros é **posicional**: o primeiro sujeito recebe os
//! textos de apólice permanente (whole life) e o segundo os textos de
//! apólice a termo (term life). É o comportamento do lookup estático
//! original — não há inferência sobre qual sujeito é qual.

use crate::core::ComparisonRecord;

/// Títulos dos três aspectos fixos, na ordem de exibição.
pub const ASPECT_TITLES: [&str; 3] = ["Definition", "Key Features", "Benefits"];

/// Qual conjunto de regras preenche o registro.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateKind {
    /// Conhecimento pré-autorado do domínio de seguros de vida.
    Insurance,
    /// Texto genérico parametrizado pelo nome do sujeito.
    Generic,
}

/// Seleciona o template a partir dos dois sujeitos normalizados.
///
/// Roteia para [`TemplateKind::Insurance`] quando a forma lowercase de
/// **qualquer um** dos sujeitos contém a substring `"life"`; caso
/// contrário, [`TemplateKind::Generic`].
pub fn select_template(subject_a: &str, subject_b: &str) -> TemplateKind {
    if subject_a.to_lowercase().contains("life") || subject_b.to_lowercase().contains("life") {
        TemplateKind::Insurance
    } else {
        TemplateKind::Generic
    }
}

/// Expande o par de sujeitos no registro completo segundo o template.
///
/// Construção puramente de dados — não há falha possível; o registro
/// retornado é sempre bem formado.
pub fn expand_template(
    kind: TemplateKind,
    subject_a: String,
    subject_b: String,
) -> ComparisonRecord {
    match kind {
        TemplateKind::Insurance => insurance_record(subject_a, subject_b),
        TemplateKind::Generic => generic_record(subject_a, subject_b),
    }
}

/// Template do domínio de seguros de vida — textos pré-autorados.
///
/// Posicional: `subject_a` recebe os textos de apólice permanente,
/// `subject_b` os de apólice a termo.
fn insurance_record(subject_a: String, subject_b: String) -> ComparisonRecord {
    let description_a = format!(
        "{} is a permanent life insurance policy that provides lifelong coverage \
         and includes an investment component that builds cash value over time",
        subject_a
    );
    let description_b = format!(
        "{} is a straightforward life insurance policy that provides coverage \
         for a specific period and typically has lower premiums",
        subject_b
    );

    let mut record = ComparisonRecord::new(subject_a, subject_b, description_a, description_b);
    record.push_aspect(
        ASPECT_TITLES[0],
        "A permanent policy that combines a lifelong death benefit with a cash value \
         savings component"
            .to_string(),
        "A pure protection policy that pays a death benefit only if death occurs within \
         the chosen term"
            .to_string(),
    );
    record.push_aspect(
        ASPECT_TITLES[1],
        "Permanent coverage, level premiums and cash value that builds over time and can \
         be borrowed against or withdrawn"
            .to_string(),
        "Coverage for a specific term (usually 10-30 years) with lower premiums and the \
         option to convert to whole life"
            .to_string(),
    );
    record.push_aspect(
        ASPECT_TITLES[2],
        "Lifelong protection plus a savings vehicle that grows over time".to_string(),
        "Maximum coverage per premium dollar while the need for protection is highest"
            .to_string(),
    );
    record
}

/// Template genérico — preenchimento parametrizado apenas pelo nome do
/// sujeito em lowercase.
fn generic_record(subject_a: String, subject_b: String) -> ComparisonRecord {
    let lower_a = subject_a.to_lowercase();
    let lower_b = subject_b.to_lowercase();

    let description_a = format!("Key characteristics and features of {}", lower_a);
    let description_b = format!("Key characteristics and features of {}", lower_b);

    let mut record = ComparisonRecord::new(subject_a, subject_b, description_a, description_b);
    record.push_aspect(
        ASPECT_TITLES[0],
        format!("What {} is and the context where it applies", lower_a),
        format!("What {} is and the context where it applies", lower_b),
    );
    record.push_aspect(
        ASPECT_TITLES[1],
        format!("The main characteristics that distinguish {}", lower_a),
        format!("The main characteristics that distinguish {}", lower_b),
    );
    record.push_aspect(
        ASPECT_TITLES[2],
        format!("The advantages {} offers in typical usage", lower_a),
        format!("The advantages {} offers in typical usage", lower_b),
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── seleção ───────────────────────────────────────────────

    #[test]
    fn life_routes_to_insurance() {
        assert_eq!(
            select_template("Whole", "Term life insurance"),
            TemplateKind::Insurance
        );
        assert_eq!(
            select_template("Whole life", "Term"),
            TemplateKind::Insurance
        );
    }

    #[test]
    fn life_match_is_case_insensitive() {
        assert_eq!(select_template("LIFE", "Term"), TemplateKind::Insurance);
    }

    #[test]
    fn other_subjects_route_to_generic() {
        assert_eq!(select_template("Python", "Rust"), TemplateKind::Generic);
    }

    // ─── expansão ──────────────────────────────────────────────

    #[test]
    fn generic_descriptions_are_parameterized() {
        let record = expand_template(TemplateKind::Generic, "Python".to_string(), "Rust".to_string());
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
    fn both_templates_are_well_formed() {
        let generic =
            expand_template(TemplateKind::Generic, "Python".to_string(), "Rust".to_string());
        let insurance = expand_template(
            TemplateKind::Insurance,
            "Whole".to_string(),
            "Term life insurance".to_string(),
        );
        assert!(generic.is_well_formed());
        assert!(insurance.is_well_formed());
    }

    #[test]
    fn aspect_titles_are_fixed_and_ordered() {
        let record = expand_template(TemplateKind::Generic, "A".to_string(), "B".to_string());
        let titles: Vec<&str> = record.aspects.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ASPECT_TITLES.to_vec());
    }

    #[test]
    fn insurance_texts_are_positional() {
        let record = expand_template(
            TemplateKind::Insurance,
            "Whole".to_string(),
            "Term life insurance".to_string(),
        );
        // Primeiro sujeito: apólice permanente; segundo: apólice a termo
        assert!(record.descriptions["Whole"].contains("permanent life insurance policy"));
        assert!(record.descriptions["Term life insurance"].contains("specific period"));
    }
}
