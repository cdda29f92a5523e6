// src/export.rs

use crate::error::{QuizError, QuizResult};
use crate::persistence::get_app_data_dir;
use crate::results::Attempt;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Lo que se exporta al terminar un quiz: el historial completo de ese quiz.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub quiz_id: String,
    pub quiz_title: String,
    pub attempts: Vec<Attempt>,
}

impl ExportPayload {
    pub fn new(quiz_id: &str, quiz_title: &str, attempts: &[Attempt]) -> Self {
        Self {
            quiz_id: quiz_id.to_owned(),
            quiz_title: quiz_title.to_owned(),
            attempts: attempts.to_vec(),
        }
    }

    /// JSON con sangría de 2 espacios
    pub fn to_pretty_json(&self) -> QuizResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn export_file_name(quiz_id: &str, epoch_millis: i64) -> String {
    format!("{quiz_id}_results_{epoch_millis}.json")
}

/// Superficie interactiva de guardado (diálogo). `None` = cancelado o no disponible.
pub trait SaveSurface {
    fn choose_path(&self, suggested_name: &str) -> Option<PathBuf>;
}

/// Diálogo nativo de guardar.
pub struct NativeSaveDialog;

impl SaveSurface for NativeSaveDialog {
    fn choose_path(&self, suggested_name: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Guardar resultados")
            .set_file_name(suggested_name)
            .add_filter("Archivos JSON", &["json"])
            .save_file()
    }
}

/// Sin diálogo: siempre se usa la descarga automática.
pub struct NoSaveSurface;

impl SaveSurface for NoSaveSurface {
    fn choose_path(&self, _suggested_name: &str) -> Option<PathBuf> {
        None
    }
}

/// Carpeta de descargas del usuario, o la de datos de la app si no hay.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(get_app_data_dir)
}

#[derive(Debug)]
pub enum ExportOutcome {
    Saved(PathBuf),
    Downloaded(PathBuf),
    Failed(QuizError),
}

impl ExportOutcome {
    pub fn message(&self) -> String {
        match self {
            ExportOutcome::Saved(p) => format!("💾 Resultados guardados en {}", p.display()),
            ExportOutcome::Downloaded(p) => format!("⬇ Resultados descargados en {}", p.display()),
            ExportOutcome::Failed(e) => format!("⚠ {e}"),
        }
    }
}

fn write_payload(json: &str, path: &Path) -> QuizResult<()> {
    fs::write(path, json)
        .map_err(|e| QuizError::ExportFailure(format!("{}: {e}", path.display())))
}

/// Exporta los resultados: primero el diálogo, y si se cancela o falla,
/// descarga automática en `fallback_dir`. Nunca entra en pánico.
pub fn export(
    payload: &ExportPayload,
    surface: &dyn SaveSurface,
    fallback_dir: &Path,
    epoch_millis: i64,
) -> ExportOutcome {
    let json = match payload.to_pretty_json() {
        Ok(json) => json,
        Err(e) => return ExportOutcome::Failed(e),
    };
    let name = export_file_name(&payload.quiz_id, epoch_millis);

    if let Some(path) = surface.choose_path(&name) {
        match write_payload(&json, &path) {
            Ok(()) => {
                info!("Resultados exportados a {}", path.display());
                return ExportOutcome::Saved(path);
            }
            Err(e) => warn!("{e}; se usa la descarga automática"),
        }
    }

    let path = fallback_dir.join(&name);
    match fs::create_dir_all(fallback_dir)
        .map_err(|e| QuizError::ExportFailure(format!("{}: {e}", fallback_dir.display())))
        .and_then(|_| write_payload(&json, &path))
    {
        Ok(()) => {
            info!("Resultados descargados en {}", path.display());
            ExportOutcome::Downloaded(path)
        }
        Err(e) => {
            warn!("{e}");
            ExportOutcome::Failed(e)
        }
    }
}
