//! # Estado da Aplicação Web
//!
//! Define a struct de estado compartilhado entre todos os handlers Axum.
//!
//! O parser é imutável e sem estado — compartilhado via `Arc` puro. A
//! sessão corrente (última comparação + preferências) é o único dado
//! mutável, protegida por `RwLock` e espelhada em disco pela camada de
//! persistência.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::parser::ComparisonParser;
use crate::persistence::StoredSession;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Parser de comparação — imutável após criação, sem coordenação.
    pub parser: Arc<ComparisonParser>,
    /// Sessão corrente (se houver), protegida por `RwLock`.
    pub session: Arc<RwLock<Option<StoredSession>>>,
}

impl AppState {
    /// Monta o estado inicial a partir da sessão restaurada do disco.
    pub fn new(restored: Option<StoredSession>) -> Self {
        Self {
            parser: Arc::new(ComparisonParser::new()),
            session: Arc::new(RwLock::new(restored)),
        }
    }
}
