// src/view_models.rs

use crate::results::{Attempt, QuizStats};

#[derive(Clone, Debug)]
pub struct QuizCard {
    pub idx: usize,        // índice en app.quizzes
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub question_count: usize,
    pub supports_multiple_choice: bool,
    pub stats: Option<QuizStats>,
    pub recent: Vec<AttemptRow>,
}

#[derive(Clone, Debug)]
pub struct AttemptRow {
    pub date: String,
    pub score: usize,
    pub total: usize,
    pub accuracy: String,
    pub time_taken: u64,
    pub randomized: String, // "Q", "C", "QC" o vacío
    pub variant: &'static str,
}

impl From<&Attempt> for AttemptRow {
    fn from(a: &Attempt) -> Self {
        Self {
            date: a.date.format("%d/%m/%Y %H:%M").to_string(),
            score: a.score,
            total: a.total,
            accuracy: a.accuracy.clone(),
            time_taken: a.time_taken,
            randomized: a.randomize_badge(),
            variant: a.variant.badge(),
        }
    }
}

impl AttemptRow {
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.score, self.total)
    }
}

impl QuizCard {
    pub fn question_label(&self) -> String {
        if self.question_count == 1 {
            "1 pregunta".to_owned()
        } else {
            format!("{} preguntas", self.question_count)
        }
    }

    pub fn can_start(&self) -> bool {
        self.question_count > 0
    }
}

/// "1m 05s" o "42s"
pub fn format_duration(secs: u64) -> String {
    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(65), "1m 05s");
    }
}
