use serde::{Deserialize, Serialize};

use crate::utils::constants::{BACKEND_URL, STORAGE_BACKEND};

/// Dónde viven los pedidos del estudiante
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// API HTTP del portal (autoritativo)
    Remote,
    /// Solo localStorage del navegador (sin servidor)
    Local,
    /// En memoria, para demos y pruebas
    Memory,
}

impl StorageBackend {
    /// Selección por configuración de build (STORAGE_BACKEND en .env)
    pub fn from_env() -> Self {
        match STORAGE_BACKEND {
            Some("local") => StorageBackend::Local,
            Some("memory") => StorageBackend::Memory,
            _ => StorageBackend::Remote,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub storage_backend: StorageBackend,
    pub enable_logging: bool,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            storage_backend: StorageBackend::from_env(),
            enable_logging: true,
            toast_duration_ms: 5000,
        }
    }
}
