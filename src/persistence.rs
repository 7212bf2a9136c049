//! # Persistência — Salvamento e Restauração da Sessão em Disco
//!
//! Módulo responsável por serializar/desserializar a [`StoredSession`]
//! como JSON em `data/session.json`, permitindo restaurar a última
//! comparação (texto de origem, registro e preferências visuais) entre
//! execuções.
//!
//! ## Formato de Armazenamento
//!
//! A sessão é salva como JSON "pretty-printed" para facilitar inspeção
//! manual. A ordem de `aspects` do registro é preservada no round-trip
//! (backing `Vec` — requisito da camada de renderização).
//!
//! ## Quando a Sessão é Salva?
//!
//! - Após cada transformação bem-sucedida (`POST /compare`)
//! - Após cada mudança de preferência visual (`POST /prefs`)
//!
//! ## ⚠️ Atomicidade
//!
//! A escrita **não é atômica** — crash durante escrita pode corromper
//! o arquivo. Aceitável aqui; o pior caso é iniciar com sessão vazia.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{ComparisonRecord, VisualPrefs};

/// Caminho do arquivo de persistência da sessão (relativo à raiz do projeto).
const SESSION_PATH: &str = "data/session.json";

/// Uma sessão persistida: a última comparação transformada com sucesso,
/// junto com o texto que a originou e as preferências de exibição.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredSession {
    /// Identificador único da sessão (UUID v4).
    pub id: Uuid,

    /// Texto de entrada que produziu o registro — usado para repovoar a
    /// área de texto ao restaurar.
    pub source_text: String,

    /// O registro de comparação produzido pelo parser.
    pub record: ComparisonRecord,

    /// Preferências visuais escolhidas para esta sessão.
    pub prefs: VisualPrefs,

    /// Timestamp da última gravação.
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    /// Cria uma nova sessão a partir de uma transformação bem-sucedida,
    /// com preferências padrão e timestamp atual.
    pub fn new(source_text: String, record: ComparisonRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_text,
            record,
            prefs: VisualPrefs::default(),
            saved_at: Utc::now(),
        }
    }
}

/// Salva a sessão em disco como JSON pretty-printed.
///
/// Cria o diretório `data/` se não existir.
///
/// # Erros
///
/// Retorna erro se não conseguir criar o diretório, serializar,
/// ou escrever no arquivo.
pub fn save_session(session: &StoredSession) -> Result<()> {
    let path = Path::new(SESSION_PATH);
    // Garante que o diretório data/ existe
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Falha ao criar diretório data/")?;
    }
    let json =
        serde_json::to_string_pretty(session).context("Falha ao serializar StoredSession")?;
    std::fs::write(path, json).context("Falha ao escrever data/session.json")?;
    Ok(())
}

/// Carrega a sessão do disco, ou `None` se nunca foi salva.
///
/// # Erros
///
/// Retorna erro se o arquivo existir mas estiver corrompido
/// ou incompatível com a struct atual.
pub fn load_session() -> Result<Option<StoredSession>> {
    let path = Path::new(SESSION_PATH);
    if !path.exists() {
        tracing::info!("Nenhum {} encontrado, iniciando sessão vazia", SESSION_PATH);
        return Ok(None);
    }
    let json = std::fs::read_to_string(path).context("Falha ao ler data/session.json")?;
    let session: StoredSession =
        serde_json::from_str(&json).context("Falha ao desserializar data/session.json")?;
    Ok(Some(session))
}

/// Remove o arquivo de sessão, se existir.
///
/// Usado pelo reset da sessão — a próxima inicialização parte vazia.
pub fn clear_session() -> Result<()> {
    let path = Path::new(SESSION_PATH);
    if path.exists() {
        std::fs::remove_file(path).context("Falha ao remover data/session.json")?;
    }
    Ok(())
}
