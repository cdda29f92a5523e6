use crate::model::QuizMode;

/// Normaliza una respuesta libre: recorta, colapsa espacios internos y pasa a minúsculas.
pub fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Compara la respuesta enviada con la esperada según el modo.
/// Una respuesta vacía nunca es correcta.
pub fn grade(mode: QuizMode, submitted: &str, expected: &str) -> bool {
    if submitted.trim().is_empty() {
        return false;
    }
    match mode {
        // En opción múltiple se elige entre los textos exactos: sin normalizar
        QuizMode::MultipleChoice => submitted == expected,
        QuizMode::Identification => normalize(submitted) == normalize(expected),
    }
}
