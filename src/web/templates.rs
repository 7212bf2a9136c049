//! # Templates Maud — HTML Server-Side Rendering
//!
//! Templates HTML renderizados em tempo de compilação usando o macro
//! [`maud`](https://maud.lambda.xyz/). Maud compila templates diretamente
//! em código Rust, resultando em rendering ~10x mais rápido que engines
//! runtime (Handlebars, Tera) e com **zero allocations** desnecessárias.
//!
//! ## Filosofia: HTMX + Maud = Hypermedia-Driven
//!
//! Em vez de SPA (React/Vue), usamos o padrão **Hypermedia-Driven**:
//! - Servidor retorna **HTML fragments** (não JSON)
//! - HTMX no frontend injeta fragments no DOM
//! - JavaScript apenas para atalhos de teclado e contador de caracteres
//!
//! ## Templates Disponíveis
//!
//! | Função | Tipo | Descrição |
//! |--------|------|-----------|
//! | [`full_page()`] | Página completa | Superfície de entrada + resultado |
//! | [`record_card()`] | Fragment HTMX | Resumo textual do registro |
//! | [`no_match_fragment()`] | Fragment HTMX | Aviso + formatos suportados |
//! | [`format_hints()`] | Fragment | Lista dos formatos de entrada |
//!
//! ## Layout Principal (`full_page`)
//!
//! ```text
//! ┌──────────────── nav-bar ─────────────────┐
//! │ TC │ Text Comparison              │      │
//! ├──────────────────────────────────────────┤
//! │        Text to Visual Comparison          │
//! │  ┌────────────────────────────────────┐  │
//! │  │ textarea (máx. 10.000 chars)       │  │
//! │  └────────────────────────────────────┘  │
//! │  [Show Formats]     [Transform to Visual] │
//! │  ── preferências: layout / tema / texto ──│
//! │  ┌────────────────────────────────────┐  │
//! │  │ #comparison-result (fragment)      │  │
//! │  └────────────────────────────────────┘  │
//! └──────────────────────────────────────────┘
//! ```

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::core::{ColorTheme, ComparisonRecord, LayoutKind, TextSize};
use crate::persistence::StoredSession;

/// Limite de caracteres da área de texto — espelhado no atributo
/// `maxlength` e validado de novo no handler.
pub const MAX_INPUT_CHARS: usize = 10_000;

/// Opções de layout exibidas no seletor: (variante, valor de fio, rótulo).
const LAYOUT_OPTIONS: &[(LayoutKind, &str, &str)] = &[
    (LayoutKind::SideBySide, "side-by-side", "Side by side"),
    (LayoutKind::Circular, "circular", "Circular"),
    (LayoutKind::Process, "process", "Process"),
    (LayoutKind::Flower, "flower", "Flower"),
    (LayoutKind::Fan, "fan", "Fan"),
    (LayoutKind::Balance, "balance", "Balance"),
    (LayoutKind::Orbital, "orbital", "Orbital"),
];

/// Opções de tema: (variante, valor de fio, rótulo).
const THEME_OPTIONS: &[(ColorTheme, &str, &str)] = &[
    (ColorTheme::Ocean, "ocean", "Ocean"),
    (ColorTheme::Sunset, "sunset", "Sunset"),
    (ColorTheme::Monochrome, "monochrome", "Monochrome"),
];

/// Opções de tamanho de texto: (variante, valor de fio, rótulo).
const TEXT_SIZE_OPTIONS: &[(TextSize, &str, &str)] = &[
    (TextSize::Compact, "compact", "Compact"),
    (TextSize::Regular, "regular", "Regular"),
    (TextSize::Large, "large", "Large"),
];

/// Página principal — superfície de entrada completa.
///
/// Quando há sessão restaurada, a área de texto é repovoada com o texto
/// de origem e o resultado anterior já aparece renderizado.
///
/// ## JavaScript Inline
///
/// O script inline no final gerencia:
/// - Ctrl/Cmd + Enter dispara a transformação
/// - Contador de caracteres (vermelho acima de 90% do limite)
/// - Toggle do painel de formatos suportados
pub fn full_page(session: Option<&StoredSession>) -> Markup {
    let prefs = session.map(|s| s.prefs).unwrap_or_default();
    let initial_text = session.map(|s| s.source_text.as_str()).unwrap_or("");

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Text to Visual Comparison" }
                link rel="stylesheet" href="/assets/style.css";
                script src="https://unpkg.com/htmx.org@2.0.4" {}
            }
            body {
                div class="app-shell" {
                    // Navigation Bar
                    nav class="nav-bar" {
                        a href="/" class="nav-brand" {
                            span class="nav-brand-icon" { "TC" }
                            span class="nav-brand-text" {
                                "Text " em { "Comparison" }
                            }
                        }
                    }

                    div class="app-container" {
                        div class="intro" {
                            h1 { "Text to Visual Comparison" }
                            p class="intro-subtitle" {
                                "Transform your text into beautiful visual comparisons"
                            }
                        }

                        div class="input-panel" {
                            button type="button" id="formats-toggle" class="formats-toggle"
                                onclick="toggleFormats()" {
                                "Show Formats"
                            }

                            div id="formats-panel" class="formats-panel" {
                                (format_hints())
                            }

                            form id="compare-form"
                                hx-post="/compare"
                                hx-target="#comparison-result"
                                hx-swap="innerHTML" {
                                textarea id="compare-text" name="text"
                                    maxlength=(MAX_INPUT_CHARS)
                                    placeholder="Example: what's the difference between whole and term life insurance" {
                                    (initial_text)
                                }
                                div class="input-meta" {
                                    span { "Press Ctrl/⌘ + Enter to transform" }
                                    span id="char-count" { "0/" (MAX_INPUT_CHARS) }
                                }
                                button type="submit" class="transform-btn" {
                                    "Transform to Visual"
                                }
                            }

                            // Preferências visuais — enviadas a cada mudança
                            form id="prefs-form" class="prefs-form"
                                hx-post="/prefs"
                                hx-target="#prefs-status"
                                hx-swap="innerHTML"
                                hx-trigger="change" {
                                label {
                                    "Layout"
                                    select name="layout" {
                                        @for (kind, value, label) in LAYOUT_OPTIONS {
                                            option value=(value) selected[prefs.layout == *kind] { (label) }
                                        }
                                    }
                                }
                                label {
                                    "Theme"
                                    select name="theme" {
                                        @for (kind, value, label) in THEME_OPTIONS {
                                            option value=(value) selected[prefs.theme == *kind] { (label) }
                                        }
                                    }
                                }
                                label {
                                    "Text size"
                                    select name="text_size" {
                                        @for (kind, value, label) in TEXT_SIZE_OPTIONS {
                                            option value=(value) selected[prefs.text_size == *kind] { (label) }
                                        }
                                    }
                                }
                                span id="prefs-status" class="prefs-status" {}
                            }

                            button class="reset-btn"
                                hx-post="/session/reset"
                                hx-target="#comparison-result"
                                hx-swap="innerHTML"
                                hx-confirm="Clear the current comparison and saved session?" {
                                "Reset"
                            }
                        }

                        div id="comparison-result" class="comparison-result" {
                            @if let Some(s) = session {
                                (record_card(&s.record))
                            }
                        }
                    }
                }

                (PreEscaped(r#"<script>
function toggleFormats() {
  var panel = document.getElementById('formats-panel');
  var btn = document.getElementById('formats-toggle');
  var open = panel.classList.toggle('open');
  btn.textContent = open ? 'Hide Formats' : 'Show Formats';
}

document.addEventListener('DOMContentLoaded', function() {
  var textarea = document.getElementById('compare-text');
  var counter = document.getElementById('char-count');
  var max = parseInt(textarea.getAttribute('maxlength'), 10);

  function updateCount() {
    counter.textContent = textarea.value.length + '/' + max;
    if (textarea.value.length > max * 0.9) {
      counter.classList.add('near-limit');
    } else {
      counter.classList.remove('near-limit');
    }
  }
  textarea.addEventListener('input', updateCount);
  updateCount();

  // Ctrl/Cmd + Enter dispara a transformação
  textarea.addEventListener('keydown', function(e) {
    if ((e.ctrlKey || e.metaKey) && e.key === 'Enter') {
      e.preventDefault();
      document.getElementById('compare-form').requestSubmit();
    }
  });
});
</script>"#))
            }
        }
    }
}

/// Resumo textual de um registro — o fragment devolvido após uma
/// transformação bem-sucedida.
///
/// Mostra os dois sujeitos, suas descrições e cada aspecto com o valor
/// de cada lado, na ordem de exibição do registro. A renderização
/// visual propriamente dita (layouts) é responsabilidade do consumidor
/// externo; este cartão é apenas o feedback da superfície de entrada.
pub fn record_card(record: &ComparisonRecord) -> Markup {
    html! {
        div class="comparison-card" {
            div class="comparison-subjects" {
                span class="subject subject-a" { (record.subject_a) }
                span class="subject-vs" { "vs" }
                span class="subject subject-b" { (record.subject_b) }
            }
            div class="comparison-descriptions" {
                @for subject in [&record.subject_a, &record.subject_b] {
                    div class="description" {
                        div class="description-subject" { (subject) }
                        div class="description-text" {
                            (record.descriptions.get(subject).map(String::as_str).unwrap_or(""))
                        }
                    }
                }
            }
            div class="comparison-aspects" {
                @for aspect in &record.aspects {
                    div class="aspect" {
                        div class="aspect-title" { (aspect.title) }
                        div class="aspect-values" {
                            div class="aspect-value" {
                                (aspect.values.get(&record.subject_a).map(String::as_str).unwrap_or(""))
                            }
                            div class="aspect-value" {
                                (aspect.values.get(&record.subject_b).map(String::as_str).unwrap_or(""))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Fragment devolvido quando nenhum padrão casa: não renderiza
/// visualização e sugere os formatos suportados.
pub fn no_match_fragment() -> Markup {
    html! {
        div class="no-match" {
            p { "No comparison found in this text. Try one of the supported formats:" }
            (format_hints())
        }
    }
}

/// Lista dos formatos de entrada suportados — usada no painel de ajuda
/// da página e no fragment de "sem resultado".
pub fn format_hints() -> Markup {
    html! {
        div class="format-hints" {
            div class="format-column" {
                p class="format-title" { "Natural Language:" }
                ul {
                    li { "\"what's the difference between X and Y\"" }
                    li { "\"differences between X and Y\"" }
                    li { "\"comparing X and Y\"" }
                }
            }
            div class="format-column" {
                p class="format-title" { "Structured Format:" }
                ul {
                    li { "Subject1: description" }
                    li { "Subject2: description" }
                    li { "- Aspect: value1 vs value2" }
                }
            }
        }
    }
}
