//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma
//! rota em [`super::create_router()`]. Os handlers seguem o padrão
//! **HTMX fragment** — retornam fragmentos HTML (não páginas completas)
//! que o HTMX injeta no DOM via `hx-swap`.
//!
//! ## Padrão de Resposta
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Página principal (Maud) |
//! | `compare` | POST | HTMX fragment | Cartão do registro ou "sem resultado" |
//! | `update_prefs` | POST | HTMX fragment | Confirmação de preferências |
//! | `reset_session` | POST | HTMX fragment | Confirmação de reset |
//! | `session_record` | GET | JSON | Registro + preferências para o renderizador |
//!
//! ## Contrato de Falha
//!
//! O parser nunca falha com erro — apenas `None`. Um `None` vira o
//! fragment de "sem resultado" (nenhuma visualização + dica de formatos),
//! nunca um status de erro HTTP. Falhas de persistência são logadas e
//! **não** derrubam a requisição — a sessão em memória continua válida.

use axum::response::Html;
use axum::Json;
use axum::{extract::State, Form};
use chrono::{DateTime, Utc};
use maud::html;

use super::state::AppState;
use super::templates;
use crate::core::{ColorTheme, ComparisonRecord, LayoutKind, TextSize, VisualPrefs};
use crate::persistence::{self, StoredSession};

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// GET `/` — Página principal.
///
/// Renderiza a página completa com a sessão corrente (se houver) já
/// aplicada: texto de origem na área de entrada, preferências nos
/// seletores e o último registro no painel de resultado.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.read().clone();
    markup_to_html(templates::full_page(session.as_ref()))
}

/// Dados do formulário de comparação (campo `text` do form HTML).
#[derive(serde::Deserialize)]
pub struct CompareForm {
    /// Texto de entrada do usuário.
    pub text: String,
}

/// POST `/compare` — Transforma o texto em registro de comparação.
///
/// ## Fluxo
///
/// ```text
/// 1. Trim + validação de tamanho (limite de 10.000 chars)
/// 2. parse_any: linguagem natural, depois formato estruturado
/// 3. Some(record) → atualiza sessão (preservando preferências),
///    persiste em disco e retorna o cartão do registro
/// 4. None → fragment "sem resultado" com os formatos suportados
/// ```
pub async fn compare(
    State(state): State<AppState>,
    Form(form): Form<CompareForm>,
) -> Html<String> {
    let text = form.text.trim().to_string();
    if text.is_empty() {
        return markup_to_html(html! {});
    }

    // O limite é imposto pela superfície (maxlength), mas revalidado aqui
    if text.chars().count() > templates::MAX_INPUT_CHARS {
        tracing::warn!(chars = text.chars().count(), "Entrada acima do limite");
        return markup_to_html(html! {
            div class="no-match" {
                p { "Input exceeds the 10,000 character limit." }
            }
        });
    }

    match state.parser.parse_any(&text) {
        Some(record) => {
            tracing::info!(
                subject_a = %record.subject_a,
                subject_b = %record.subject_b,
                aspects = record.aspects.len(),
                "Comparação transformada"
            );

            // Atualiza a sessão em memória, preservando as preferências
            let session = {
                let mut guard = state.session.write();
                let prefs = guard.as_ref().map(|s| s.prefs).unwrap_or_default();
                let mut session = StoredSession::new(text, record);
                session.prefs = prefs;
                *guard = Some(session.clone());
                session
            };

            // Persiste em disco após cada transformação
            if let Err(e) = persistence::save_session(&session) {
                tracing::error!(error = %e, "Falha ao salvar sessão após transformação");
            }

            markup_to_html(templates::record_card(&session.record))
        }
        None => {
            tracing::debug!("Nenhum padrão de comparação casou");
            markup_to_html(templates::no_match_fragment())
        }
    }
}

/// Dados do formulário de preferências visuais.
///
/// Os valores chegam nos nomes de fio dos enums (`side-by-side`,
/// `ocean`, `regular`) e são desserializados direto pelos renames serde.
#[derive(serde::Deserialize)]
pub struct PrefsForm {
    /// Variante de layout.
    pub layout: LayoutKind,
    /// Tema de cores.
    pub theme: ColorTheme,
    /// Preset de tamanho de texto.
    pub text_size: TextSize,
}

/// POST `/prefs` — Atualiza as preferências visuais da sessão corrente.
///
/// Sem sessão não há o que estilizar — o fragment apenas orienta a
/// transformar algo primeiro. Com sessão, atualiza, persiste e confirma.
pub async fn update_prefs(
    State(state): State<AppState>,
    Form(form): Form<PrefsForm>,
) -> Html<String> {
    let prefs = VisualPrefs {
        layout: form.layout,
        theme: form.theme,
        text_size: form.text_size,
    };

    let session = {
        let mut guard = state.session.write();
        match guard.as_mut() {
            Some(session) => {
                session.prefs = prefs;
                session.saved_at = Utc::now();
                Some(session.clone())
            }
            None => None,
        }
    };

    match session {
        Some(session) => {
            if let Err(e) = persistence::save_session(&session) {
                tracing::error!(error = %e, "Falha ao salvar sessão após preferências");
            }
            markup_to_html(html! { "Saved" })
        }
        None => markup_to_html(html! { "Transform something first" }),
    }
}

/// POST `/session/reset` — Limpa a sessão corrente e o arquivo em disco.
pub async fn reset_session(State(state): State<AppState>) -> Html<String> {
    *state.session.write() = None;

    if let Err(e) = persistence::clear_session() {
        tracing::error!(error = %e, "Falha ao remover sessão do disco");
    }

    tracing::info!("Sessão resetada pelo usuário");

    markup_to_html(html! {
        div class="no-match" {
            p { "Session cleared." }
        }
    })
}

/// Payload JSON da sessão corrente para a camada de renderização externa.
///
/// O renderizador consome o registro como dado opaco e aplica as
/// preferências por conta própria; `null` significa "nada a renderizar".
#[derive(serde::Serialize)]
pub struct SessionPayload {
    /// O registro de comparação corrente.
    pub record: ComparisonRecord,
    /// Preferências visuais escolhidas.
    pub prefs: VisualPrefs,
    /// Texto de entrada que originou o registro.
    pub source_text: String,
    /// Timestamp da última gravação.
    pub saved_at: DateTime<Utc>,
}

/// GET `/session/record` — Registro + preferências como JSON.
///
/// É a interface de saída para o consumidor externo (camada de
/// renderização). Sem sessão corrente, responde `null` — o consumidor
/// deve tratar como "não exibir visualização".
pub async fn session_record(State(state): State<AppState>) -> Json<Option<SessionPayload>> {
    let session = state.session.read().clone();
    Json(session.map(|s| SessionPayload {
        record: s.record,
        prefs: s.prefs,
        source_text: s.source_text,
        saved_at: s.saved_at,
    }))
}
