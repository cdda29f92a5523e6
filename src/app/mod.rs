use crate::data::{load_quiz_file, sample_quizzes};
use crate::export::{NativeSaveDialog, SaveSurface, default_download_dir};
use crate::heatmap::YearActivity;
use crate::model::{AppState, Quiz, QuizMode};
use crate::persistence::{HistoryPort, JsonFilePort};
use crate::randomize::RandomizeOptions;
use crate::results::{Attempt, ResultsHistory};
use crate::session::Session;
use chrono::{Datelike, Local};
use eframe::egui;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// Submódulos
pub mod actions;
pub mod completion;
pub mod queries;

// Re-export de view models
pub use crate::view_models::{AttemptRow, QuizCard};

/// Preferencias del usuario; eframe las guarda entre ejecuciones.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub randomize_questions: bool,
    pub randomize_choices: bool,
    pub mode: QuizMode,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            randomize_questions: true,
            randomize_choices: true,
            mode: QuizMode::MultipleChoice,
            dark_mode: true,
        }
    }
}

impl Settings {
    pub fn randomize(&self) -> RandomizeOptions {
        RandomizeOptions {
            questions: self.randomize_questions,
            choices: self.randomize_choices,
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }
}

pub struct QuizApp {
    pub quizzes: Vec<Quiz>,
    pub history: ResultsHistory,
    pub session: Option<Session>,
    pub settings: Settings,
    pub state: AppState,
    pub message: String,
    /// Texto de la respuesta de identificación
    pub input: String,
    pub last_attempt: Option<Attempt>,
    pub confirm_leave: bool,
    pub heatmap: YearActivity,
    save_surface: Box<dyn SaveSurface>,
    download_dir: PathBuf,
}

impl QuizApp {
    /// Arranque desde eframe: preferencias guardadas, historial en disco y diálogo nativo.
    pub fn new(cc: &eframe::CreationContext<'_>, quiz_path: Option<&Path>) -> Self {
        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        cc.egui_ctx.set_visuals(settings.visuals());

        let mut app = Self::with_parts(
            sample_quizzes(),
            Box::new(JsonFilePort::in_data_dir()),
            Box::new(NativeSaveDialog),
            default_download_dir(),
        );
        app.settings = settings;

        if let Some(path) = quiz_path {
            app.load_quizzes_from(path);
        }
        app
    }

    pub fn with_parts(
        quizzes: Vec<Quiz>,
        history_port: Box<dyn HistoryPort>,
        save_surface: Box<dyn SaveSurface>,
        download_dir: PathBuf,
    ) -> Self {
        info!("{} quizzes disponibles", quizzes.len());
        Self {
            quizzes,
            history: ResultsHistory::load(history_port),
            session: None,
            settings: Settings::default(),
            state: AppState::QuizList,
            message: String::new(),
            input: String::new(),
            last_attempt: None,
            confirm_leave: false,
            heatmap: YearActivity::generate(Local::now().year(), &mut rand::rng()),
            save_surface,
            download_dir,
        }
    }

    /// Sustituye el conjunto de quizzes. Si el archivo no vale, se conserva el anterior.
    pub fn load_quizzes_from(&mut self, path: &Path) -> bool {
        match load_quiz_file(path) {
            Ok(quizzes) => {
                self.message = format!("📂 {} quizzes cargados", quizzes.len());
                self.quizzes = quizzes;
                true
            }
            Err(e) => {
                warn!("{e}");
                self.message = format!("⚠ {e}");
                false
            }
        }
    }

    pub fn select_heatmap_year(&mut self, year: i32) {
        if self.heatmap.year != year {
            self.heatmap = YearActivity::generate(year, &mut rand::rng());
        }
    }

    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.dark_mode = !self.settings.dark_mode;
        ctx.set_visuals(self.settings.visuals());
    }

    pub fn confirm_leave(&mut self, ctx: &egui::Context) {
        egui::Window::new("Salir del quiz")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("¿Volver a la lista? Se perderá el progreso de este intento.");
                ui.horizontal(|ui| {
                    if ui.button("Sí, salir").clicked() {
                        self.back_to_list();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_leave = false;
                    }
                });
            });
    }

    pub(crate) fn save_surface(&self) -> &dyn SaveSurface {
        self.save_surface.as_ref()
    }

    pub(crate) fn download_dir(&self) -> &Path {
        &self.download_dir
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::export::NoSaveSurface;
    use crate::model::Question;
    use crate::persistence::MemoryPort;

    pub fn quiz(id: &str, answers: &[&str]) -> Quiz {
        Quiz {
            id: id.into(),
            title: format!("Quiz {id}"),
            description: String::new(),
            category: "Test".into(),
            difficulty: "Easy".into(),
            questions: answers
                .iter()
                .enumerate()
                .map(|(n, a)| Question {
                    question: format!("Pregunta {n}"),
                    correct_answer: a.to_string(),
                    choices: vec![a.to_string(), format!("{a}-no")],
                })
                .collect(),
        }
    }

    pub fn app(quizzes: Vec<Quiz>, name: &str) -> QuizApp {
        let dir = std::env::temp_dir()
            .join(format!("flashcard_quiz_app_{}", std::process::id()))
            .join(name);
        let mut app = QuizApp::with_parts(
            quizzes,
            Box::new(MemoryPort::default()),
            Box::new(NoSaveSurface),
            dir,
        );
        app.settings.randomize_questions = false;
        app.settings.randomize_choices = false;
        app
    }
}
