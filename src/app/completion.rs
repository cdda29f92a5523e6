use super::*;
use crate::export::{ExportPayload, export};

impl QuizApp {
    /// Cierre del intento: se guarda en el historial y después se exporta.
    /// Si la exportación falla, el intento ya está guardado igualmente.
    pub(crate) fn finish(&mut self, attempt: Attempt) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let quiz_id = session.quiz().id.clone();
        let quiz_title = session.quiz().title.clone();

        let attempts = self.history.record(&quiz_id, attempt.clone());
        let payload = ExportPayload::new(&quiz_id, &quiz_title, attempts);

        self.last_attempt = Some(attempt);
        self.state = AppState::Complete;

        let outcome = export(
            &payload,
            self.save_surface(),
            self.download_dir(),
            Local::now().timestamp_millis(),
        );
        self.message = outcome.message();
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, quiz};
    use super::*;

    fn complete_once(app: &mut QuizApp, answer: &str) {
        app.start_quiz(0, QuizMode::MultipleChoice);
        app.select_answer(answer.into());
        app.submit_answer();
        app.next_question();
    }

    #[test]
    fn completion_records_newest_first_and_exports() {
        let mut app = app(vec![quiz("hist", &["x"])], "completion");
        complete_once(&mut app, "x");
        complete_once(&mut app, "x-no");

        let attempts = app.history.attempts("hist");
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].accuracy, "0.0");
        assert_eq!(attempts[1].accuracy, "100.0");

        let stats = app.history.stats("hist").unwrap();
        assert_eq!(stats.avg_score, "50.0");
        assert_eq!(stats.best_score, 100.0);

        // Sin diálogo: descarga automática
        assert!(app.message.starts_with("⬇"));
        let exported = std::fs::read_dir(app.download_dir())
            .unwrap()
            .filter_map(Result::ok)
            .any(|e| e.file_name().to_string_lossy().starts_with("hist_results_"));
        assert!(exported);
    }

    #[test]
    fn failed_export_keeps_the_attempt() {
        let mut app = app(vec![quiz("fail", &["x"])], "completion_export_fails");
        let _ = std::fs::create_dir_all(&app.download_dir);
        let blocker = app.download_dir.join("regular_file");
        std::fs::write(&blocker, "x").unwrap();
        app.download_dir = blocker.join("sub");

        complete_once(&mut app, "x");

        assert!(app.message.starts_with("⚠"));
        assert_eq!(app.state, AppState::Complete);
        assert_eq!(app.history.attempts("fail").len(), 1);
        assert_eq!(app.last_attempt.as_ref().map(|a| a.score), Some(1));
    }
}
