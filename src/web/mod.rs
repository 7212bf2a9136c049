//! # Módulo Web — A Superfície de Entrada
//!
//! Este módulo organiza toda a camada web da aplicação, construída
//! com **Axum** + **HTMX** + **Maud**.
//!
//! ## Arquitetura Web
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Browser (HTMX)                                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo)                               │
//! │  ├── GET  /                → index (superfície de entrada)│
//! │  ├── POST /compare         → HTMX fragment (registro)   │
//! │  ├── POST /prefs           → HTMX fragment (confirmação)│
//! │  ├── POST /session/reset   → HTMX fragment              │
//! │  └── GET  /session/record  → JSON (registro + prefs)    │
//! ├─────────────────────────────────────────────────────────┤
//! │ Static Assets (tower_http::ServeDir → /assets/)         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! A rota `/session/record` é o contrato com a camada de renderização
//! externa: registro e preferências como JSON, `null` quando não há nada
//! a exibir. Tudo o mais são fragments HTMX da própria superfície.
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
///
/// ## Rotas Registradas
///
/// - **Página HTML**: `/`
/// - **HTMX fragments**: `/compare`, `/prefs`, `/session/reset`
/// - **API JSON**: `/session/record`
/// - **Estáticos**: `/assets/*` → diretório `assets/`
///
/// O estado `AppState` é compartilhado entre todos os handlers via
/// extrator `State<AppState>` do Axum.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // ── Página HTML ───────────────────────────────────────
        .route("/", get(handlers::index))
        // ── HTMX fragments ───────────────────────────────────
        .route("/compare", post(handlers::compare))
        .route("/prefs", post(handlers::update_prefs))
        .route("/session/reset", post(handlers::reset_session))
        // ── API JSON ──────────────────────────────────────────
        .route("/session/record", get(handlers::session_record))
        // ── Arquivos estáticos ────────────────────────────────
        .nest_service("/assets", ServeDir::new("assets"))
        .with_state(state)
}
