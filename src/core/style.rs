//! # Preferências de Exibição — Dados para a Camada de Renderização
//!
//! Tipos de **preferência visual** que acompanham um registro persistido.
//! Este módulo carrega apenas dados serializáveis — toda a lógica de
//! renderização (layouts, cores aplicadas, tipografia) vive na camada de
//! apresentação externa, que consome estes valores como configuração.
//!
//! | Tipo | Valores | Uso pelo renderizador |
//! |------|---------|----------------------|
//! | [`LayoutKind`] | side-by-side, circular, process, flower, fan, balance, orbital | Variante de layout |
//! | [`ColorTheme`] | ocean, sunset, monochrome | Par de cores esquerda/direita |
//! | [`TextSize`] | compact, regular, large | Preset tipográfico |
//!
//! Os nomes serializados (kebab-case / lowercase) são o formato de fio
//! esperado pelo frontend.

use serde::{Deserialize, Serialize};

/// Variante de layout escolhida para a visualização.
///
/// A variante é opaca para este componente — apenas transportada até o
/// renderizador junto com o registro.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    /// Dois painéis lado a lado.
    SideBySide,
    /// Disposição circular dos aspectos.
    Circular,
    /// Diagrama de processo.
    Process,
    /// Disposição em pétalas.
    Flower,
    /// Disposição em leque.
    Fan,
    /// Balança de dois pratos.
    Balance,
    /// Aspectos orbitando os sujeitos.
    Orbital,
}

/// Tema de cores da visualização.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    /// Azul / verde.
    Ocean,
    /// Roxo / laranja.
    Sunset,
    /// Cinza / cinza.
    Monochrome,
}

impl ColorTheme {
    /// Par de cores (esquerda, direita) associado ao tema.
    ///
    /// Mapeamento fixo, usado pelo renderizador para colorir o lado de
    /// cada sujeito.
    pub fn color_pair(&self) -> (&'static str, &'static str) {
        match self {
            ColorTheme::Ocean => ("blue", "green"),
            ColorTheme::Sunset => ("purple", "orange"),
            ColorTheme::Monochrome => ("gray", "gray"),
        }
    }
}

/// Preset de tamanho de texto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    /// Denso — mais conteúdo por tela.
    Compact,
    /// Padrão.
    Regular,
    /// Ampliado.
    Large,
}

/// Conjunto completo de preferências visuais de uma sessão.
///
/// Persistido junto com o registro em [`crate::persistence::StoredSession`]
/// e entregue ao renderizador pelo endpoint JSON da sessão.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualPrefs {
    /// Variante de layout.
    pub layout: LayoutKind,
    /// Tema de cores.
    pub theme: ColorTheme,
    /// Preset tipográfico.
    pub text_size: TextSize,
}

impl Default for VisualPrefs {
    /// Preferências iniciais: circular, ocean, regular.
    fn default() -> Self {
        Self {
            layout: LayoutKind::Circular,
            theme: ColorTheme::Ocean,
            text_size: TextSize::Regular,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_serializes_kebab_case() {
        let json = serde_json::to_string(&LayoutKind::SideBySide).unwrap();
        assert_eq!(json, "\"side-by-side\"");
    }

    #[test]
    fn theme_color_pairs() {
        assert_eq!(ColorTheme::Ocean.color_pair(), ("blue", "green"));
        assert_eq!(ColorTheme::Sunset.color_pair(), ("purple", "orange"));
        assert_eq!(ColorTheme::Monochrome.color_pair(), ("gray", "gray"));
    }

    #[test]
    fn prefs_round_trip() {
        let prefs = VisualPrefs::default();
        let json = serde_json::to_string(&prefs).unwrap();
        let restored: VisualPrefs = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, prefs);
    }
}
