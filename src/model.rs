use serde::{Deserialize, Serialize};

/// Modo de respuesta de una sesión.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum QuizMode {
    #[default]
    MultipleChoice,
    Identification,
}

impl QuizMode {
    pub fn label(self) -> &'static str {
        match self {
            QuizMode::MultipleChoice => "Opción múltiple",
            QuizMode::Identification => "Identificación",
        }
    }

    /// Etiqueta corta para el historial (MC / ID)
    pub fn badge(self) -> &'static str {
        match self {
            QuizMode::MultipleChoice => "MC",
            QuizMode::Identification => "ID",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub question: String,
    pub correct_answer: String,
    // Sin opciones = pregunta sólo de identificación
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

impl Question {
    pub fn is_multiple_choice(&self) -> bool {
        !self.choices.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Un quiz se puede empezar en opción múltiple sólo si todas sus preguntas tienen opciones.
    pub fn supports_mode(&self, mode: QuizMode) -> bool {
        match mode {
            QuizMode::MultipleChoice => self.questions.iter().all(Question::is_multiple_choice),
            QuizMode::Identification => true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppState {
    #[default]
    QuizList,
    Quiz,
    Complete,
}
