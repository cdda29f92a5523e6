// src/persistence.rs

use crate::error::QuizResult;
use crate::results::HistoryMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "flashcard_quiz";
pub const HISTORY_FILE: &str = "results_history.json";

/// Directorio local de datos de la app (se crea si no existe).
pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, path: &Path) -> QuizResult<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    info!("Datos guardados en {}", path.display());
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> QuizResult<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let json = fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    info!("Datos cargados de {}", path.display());
    Ok(data)
}

/// Puerto de persistencia del historial: se carga al iniciar y se guarda tras cada intento.
pub trait HistoryPort {
    fn load(&self) -> QuizResult<HistoryMap>;
    fn save(&self, history: &HistoryMap) -> QuizResult<()>;
}

/// Sólo memoria: el historial dura lo que dura el proceso.
#[derive(Default)]
pub struct MemoryPort;

impl HistoryPort for MemoryPort {
    fn load(&self) -> QuizResult<HistoryMap> {
        Ok(HistoryMap::new())
    }

    fn save(&self, _history: &HistoryMap) -> QuizResult<()> {
        Ok(())
    }
}

/// Historial en un archivo JSON.
pub struct JsonFilePort {
    path: PathBuf,
}

impl JsonFilePort {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_data_dir() -> Self {
        Self::new(get_data_file_path(HISTORY_FILE))
    }

    /// `results_history.json` -> `results_history.json.bak`
    fn backup_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }
}

impl HistoryPort for JsonFilePort {
    /// Un archivo ilegible se aparta a `.bak` antes de devolver el error,
    /// para que el siguiente guardado no lo sobrescriba.
    fn load(&self) -> QuizResult<HistoryMap> {
        load_json(&self.path).inspect_err(|_| {
            let backup = self.backup_path();
            match fs::rename(&self.path, &backup) {
                Ok(()) => warn!("Historial ilegible movido a {}", backup.display()),
                Err(e) => warn!("No se pudo apartar {}: {e}", self.path.display()),
            }
        })
    }

    fn save(&self, history: &HistoryMap) -> QuizResult<()> {
        save_json(history, &self.path)
    }
}
