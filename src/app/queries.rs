use super::*;

/// Intentos recientes que se muestran en cada tarjeta
pub const RECENT_ATTEMPTS: usize = 5;

impl QuizApp {
    pub fn quiz_cards(&self) -> Vec<QuizCard> {
        self.quizzes
            .iter()
            .enumerate()
            .map(|(idx, quiz)| QuizCard {
                idx,
                title: quiz.title.clone(),
                description: quiz.description.clone(),
                category: quiz.category.clone(),
                difficulty: quiz.difficulty.clone(),
                question_count: quiz.questions.len(),
                supports_multiple_choice: quiz.supports_mode(QuizMode::MultipleChoice),
                stats: self.history.stats(&quiz.id),
                recent: self
                    .history
                    .recent(&quiz.id, RECENT_ATTEMPTS)
                    .iter()
                    .map(AttemptRow::from)
                    .collect(),
            })
            .collect()
    }

    /// Historial completo del quiz en curso (para la pantalla final)
    pub fn current_attempt_rows(&self) -> Vec<AttemptRow> {
        self.session
            .as_ref()
            .map(|s| {
                self.history
                    .attempts(&s.quiz().id)
                    .iter()
                    .map(AttemptRow::from)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, quiz};
    use super::*;

    #[test]
    fn cards_show_stats_after_attempts() {
        let mut app = app(vec![quiz("a", &["x", "y"]), quiz("b", &["z"])], "cards");
        let cards = app.quiz_cards();
        assert_eq!(cards.len(), 2);
        assert!(cards[0].stats.is_none());
        assert_eq!(cards[0].question_label(), "2 preguntas");

        app.start_quiz(1, QuizMode::MultipleChoice);
        app.select_answer("z".into());
        app.submit_answer();
        app.next_question();

        let cards = app.quiz_cards();
        let stats = cards[1].stats.as_ref().unwrap();
        assert_eq!(stats.attempts, 1);
        assert_eq!(stats.avg_score, "100.0");
        assert_eq!(cards[1].recent[0].score_label(), "1/1");
        assert_eq!(cards[1].recent[0].variant, "MC");
        assert!(cards[0].recent.is_empty());

        assert_eq!(app.current_attempt_rows().len(), 1);
    }
}
