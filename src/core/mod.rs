//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os **tipos fundamentais** da comparação visual de
//! texto. Tudo no sistema gira em torno destes tipos:
//!
//! - [`ComparisonRecord`] — o registro estruturado produzido pelo parser
//!   (dois sujeitos + descrições + aspectos ordenados)
//! - [`Aspect`] — uma dimensão nomeada de comparação com um valor por sujeito
//! - [`VisualPrefs`] ([`LayoutKind`], [`ColorTheme`], [`TextSize`]) —
//!   preferências de exibição persistidas junto com o registro
//!
//! O registro é o **contrato** entre o parser e a camada de renderização
//! externa: o parser o produz completo e bem formado (ou não produz nada),
//! e o renderizador o consome como dado opaco e imutável.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{ComparisonRecord, VisualPrefs};
//!
//! let mut record = ComparisonRecord::new(
//!     "Python".to_string(),
//!     "Rust".to_string(),
//!     "...".to_string(),
//!     "...".to_string(),
//! );
//! record.push_aspect("Definition", "...".to_string(), "...".to_string());
//! assert!(record.is_well_formed());
//!
//! let prefs = VisualPrefs::default();
//! ```

/// Sub-módulo com [`ComparisonRecord`] e [`Aspect`] — o modelo de dados de saída.
pub mod record;

/// Sub-módulo com as preferências de exibição ([`VisualPrefs`] e enums).
pub mod style;

// Re-exports para conveniência — permite usar `crate::core::ComparisonRecord` diretamente.
pub use record::{Aspect, ComparisonRecord};
pub use style::{ColorTheme, LayoutKind, TextSize, VisualPrefs};
