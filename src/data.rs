// src/data.rs

use crate::error::{QuizError, QuizResult};
use crate::model::Quiz;
use log::info;
use serde_json::Value;
use std::path::Path;

/// Parsea un documento `{ "quizzes": [...] }` y valida las preguntas.
pub fn parse_quiz_set(json: &str) -> QuizResult<Vec<Quiz>> {
    let doc: Value = serde_json::from_str(json)
        .map_err(|e| QuizError::InvalidUploadFormat(format!("JSON mal formado ({e})")))?;

    let quizzes = doc
        .get("quizzes")
        .filter(|v| v.is_array())
        .cloned()
        .ok_or_else(|| {
            QuizError::InvalidUploadFormat("se esperaba { \"quizzes\": [...] }".to_owned())
        })?;

    let quizzes: Vec<Quiz> = serde_json::from_value(quizzes)
        .map_err(|e| QuizError::InvalidUploadFormat(format!("quiz mal formado ({e})")))?;

    for quiz in &quizzes {
        validate_quiz(quiz)?;
    }
    Ok(quizzes)
}

/// Cada pregunta con opciones debe incluir la respuesta correcta exactamente una vez.
fn validate_quiz(quiz: &Quiz) -> QuizResult<()> {
    for (n, q) in quiz.questions.iter().enumerate() {
        if !q.is_multiple_choice() {
            continue;
        }
        let hits = q.choices.iter().filter(|c| **c == q.correct_answer).count();
        if hits != 1 {
            return Err(QuizError::InvalidUploadFormat(format!(
                "en '{}', la pregunta {} tiene la respuesta correcta {} veces entre las opciones",
                quiz.id,
                n + 1,
                hits
            )));
        }
    }
    Ok(())
}

/// Quizzes de ejemplo embebidos en el binario
pub fn sample_quizzes() -> Vec<Quiz> {
    let file_content = include_str!("data/sample_quizzes.json");
    match parse_quiz_set(file_content) {
        Ok(quizzes) => quizzes,
        Err(e) => {
            log::error!("Los quizzes de ejemplo no son válidos: {e}");
            Vec::new()
        }
    }
}

/// Carga un archivo subido por el usuario.
pub fn load_quiz_file(path: &Path) -> QuizResult<Vec<Quiz>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        QuizError::InvalidUploadFormat(format!("no se pudo leer {} ({e})", path.display()))
    })?;
    let quizzes = parse_quiz_set(&content)?;
    info!("{} quizzes cargados de {}", quizzes.len(), path.display());
    Ok(quizzes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_set_is_valid() {
        let quizzes = sample_quizzes();
        assert!(!quizzes.is_empty());
        assert!(quizzes.iter().all(|q| !q.questions.is_empty()));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = parse_quiz_set("{ quizzes: ").unwrap_err();
        assert!(matches!(err, QuizError::InvalidUploadFormat(_)));
    }

    #[test]
    fn missing_or_non_array_quizzes_is_rejected() {
        assert!(parse_quiz_set("{}").is_err());
        assert!(parse_quiz_set(r#"{ "quizzes": {} }"#).is_err());
        assert!(parse_quiz_set("[]").is_err());
    }

    #[test]
    fn optional_fields_default() {
        let quizzes = parse_quiz_set(
            r#"{ "quizzes": [ { "id": "x", "title": "X", "questions": [
                { "question": "2+2", "correct_answer": "4" } ] } ] }"#,
        )
        .unwrap();
        assert_eq!(quizzes[0].category, "");
        assert!(!quizzes[0].questions[0].is_multiple_choice());
    }

    #[test]
    fn correct_answer_must_appear_once_in_choices() {
        let missing = r#"{ "quizzes": [ { "id": "x", "title": "X", "questions": [
            { "question": "q", "correct_answer": "a", "choices": ["b", "c"] } ] } ] }"#;
        let twice = r#"{ "quizzes": [ { "id": "x", "title": "X", "questions": [
            { "question": "q", "correct_answer": "a", "choices": ["a", "a"] } ] } ] }"#;
        assert!(parse_quiz_set(missing).is_err());
        assert!(parse_quiz_set(twice).is_err());
    }

    #[test]
    fn empty_quiz_list_is_accepted() {
        assert!(parse_quiz_set(r#"{ "quizzes": [] }"#).unwrap().is_empty());
    }
}
