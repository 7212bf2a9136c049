#![allow(dead_code, unused_imports)]
#![allow(rustdoc::broken_intra_doc_links, rustdoc::invalid_html_tags)]
//! # Text to Visual Comparison
//!
//! **Ponto de entrada principal** da aplicação de comparação visual de texto.
//!
//! O núcleo do sistema é um único componente puro — o
//! [`ComparisonParser`](parser::ComparisonParser) — que transforma frases
//! em linguagem natural ("what's the difference between whole and term
//! life insurance") em registros estruturados de comparação. Tudo ao
//! redor é superfície: entrada de texto via web, persistência de sessão
//! e a entrega do registro à camada de renderização externa.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Carrega sessão do disco (ou inicia vazia)
//!   ├── Monta AppState (parser + sessão) e Router
//!   └── Inicia servidor TCP (porta 3000)
//! ```
//!
//! Diferente de sistemas com modelos de ML, não há fase de warm-up: o
//! parser compila duas regexes na construção e está pronto imediatamente.
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Executar com logs detalhados
//! RUST_LOG=debug cargo run
//!
//! # O servidor estará disponível em http://localhost:3000
//! ```

// Declaração dos módulos da aplicação.
// Cada módulo corresponde a uma camada da arquitetura:

/// Módulo `core` — tipos fundamentais: ComparisonRecord, Aspect, VisualPrefs.
mod core;

/// Módulo `parser` — o parser de comparação (padrões, templates, formato estruturado).
mod parser;

/// Módulo `persistence` — serialização/desserialização da sessão em JSON.
mod persistence;

/// Módulo `web` — servidor web axum, handlers HTTP e templates.
mod web;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::web::state::AppState;

/// Função principal assíncrona da aplicação.
///
/// Inicializa logging, restaura a sessão persistida (se houver) e sobe o
/// servidor web. O parser é puro e sem estado — não há inicialização em
/// background nem gate de readiness.
///
/// # Erros
///
/// Retorna erro se:
/// - Não conseguir fazer bind na porta 3000
/// - O servidor axum falhar durante execução
#[tokio::main]
async fn main() -> Result<()> {
    // Configura o sistema de logging/tracing.
    // Aceita a variável de ambiente RUST_LOG para configurar o nível.
    // Exemplo: RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Text to Visual Comparison — Starting...");

    // Tenta restaurar a sessão anterior do disco (data/session.json).
    // Se o arquivo não existir ou estiver corrompido, inicia vazia.
    let session = match persistence::load_session() {
        // Registros vindos de fora do parser são validados antes de uso
        Ok(Some(session)) if session.record.is_well_formed() => {
            tracing::info!(
                subject_a = %session.record.subject_a,
                subject_b = %session.record.subject_b,
                "Sessão restaurada do disco"
            );
            Some(session)
        }
        Ok(Some(_)) => {
            tracing::warn!("Sessão persistida malformada, descartando");
            None
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "Falha ao restaurar sessão, iniciando vazia");
            None
        }
    };

    // Estado compartilhado da aplicação — passado para todos os handlers
    // via axum State.
    let state = AppState::new(session);

    // Cria o router com todas as rotas da aplicação.
    let app = web::create_router(state);

    // Inicia o servidor TCP.
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running at http://localhost:3000");

    // Inicia o servidor axum — bloqueia até que o processo seja encerrado.
    axum::serve(listener, app).await?;

    Ok(())
}
