// src/error.rs

use thiserror::Error;

/// Todo lo que puede salir mal en el núcleo del quiz. Ninguno es fatal:
/// la app los muestra como mensaje y sigue funcionando.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Archivo de quizzes no válido: {0}")]
    InvalidUploadFormat(String),

    #[error("El quiz '{0}' no tiene preguntas")]
    EmptyQuiz(String),

    #[error("El quiz '{quiz}' tiene la pregunta {question} sin opciones")]
    MissingChoices { quiz: String, question: usize },

    #[error("Acción no permitida: {0}")]
    InvalidTransition(&'static str),

    #[error("No hay respuesta")]
    NoAnswer,

    #[error("No se pudo exportar: {0}")]
    ExportFailure(String),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error de JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type QuizResult<T> = Result<T, QuizError>;
