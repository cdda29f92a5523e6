use super::*;
use crate::error::QuizError;
use crate::session::Step;
use log::debug;

impl QuizApp {
    /// Empieza el quiz `idx` en el modo dado, con las opciones de aleatorización actuales.
    pub fn start_quiz(&mut self, idx: usize, mode: QuizMode) {
        let Some(quiz) = self.quizzes.get(idx) else {
            return;
        };
        self.settings.mode = mode;

        match Session::start(quiz, self.settings.randomize(), mode, &mut rand::rng()) {
            Ok(session) => {
                self.session = Some(session);
                self.state = AppState::Quiz;
                self.input.clear();
                self.message.clear();
                self.last_attempt = None;
            }
            Err(e) => {
                warn!("{e}");
                self.message = format!("⚠ {e}");
            }
        }
    }

    pub fn select_answer(&mut self, value: String) {
        if let Some(session) = self.session.as_mut() {
            if let Err(e) = session.select_answer(value) {
                debug!("Selección ignorada: {e}");
            }
        }
    }

    /// Para identificación: la respuesta pendiente sigue al texto escrito.
    pub fn sync_input(&mut self) {
        let text = self.input.clone();
        self.select_answer(text);
    }

    pub fn submit_answer(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.submit() {
            Ok(_) => self.message.clear(),
            Err(QuizError::NoAnswer) => self.message = "Elige o escribe una respuesta".to_owned(),
            Err(e) => debug!("Envío ignorado: {e}"),
        }
    }

    pub fn next_question(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.next() {
            Ok(Step::Advanced) => self.input.clear(),
            Ok(Step::Completed(attempt)) => self.finish(attempt),
            Err(e) => debug!("Avance ignorado: {e}"),
        }
    }

    /// Repetir el mismo quiz, re-barajado con las mismas opciones.
    pub fn retake(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        match session.retake(&mut rand::rng()) {
            Ok(fresh) => {
                self.session = Some(fresh);
                self.state = AppState::Quiz;
                self.input.clear();
                self.message.clear();
                self.last_attempt = None;
            }
            Err(e) => self.message = format!("⚠ {e}"),
        }
    }

    /// Vuelve a la lista y descarta la sesión.
    pub fn back_to_list(&mut self) {
        self.session = None;
        self.state = AppState::QuizList;
        self.input.clear();
        self.confirm_leave = false;
        self.last_attempt = None;
    }

    /// Abre el diálogo para subir un archivo de quizzes.
    pub fn upload_quizzes(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Subir quizzes")
            .add_filter("Archivos JSON", &["json"])
            .pick_file()
        {
            self.load_quizzes_from(&path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, quiz};
    use super::*;
    use crate::session::SessionState;

    #[test]
    fn start_and_answer_through_app() {
        let mut app = app(vec![quiz("a", &["uno", "dos"])], "flow");
        app.start_quiz(0, QuizMode::MultipleChoice);
        assert_eq!(app.state, AppState::Quiz);

        app.select_answer("uno".into());
        app.submit_answer();
        app.next_question();
        app.select_answer("dos-no".into());
        app.submit_answer();
        app.next_question();

        assert_eq!(app.state, AppState::Complete);
        let attempt = app.last_attempt.clone().unwrap();
        assert_eq!(attempt.score, 1);
        assert_eq!(attempt.accuracy, "50.0");
        assert_eq!(app.history.attempts("a").len(), 1);
    }

    #[test]
    fn identification_follows_typed_text() {
        let mut app = app(vec![quiz("a", &["Madrid"])], "typed");
        app.start_quiz(0, QuizMode::Identification);
        app.input = "  madrid ".into();
        app.sync_input();
        app.submit_answer();
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.state(), SessionState::FeedbackShown { correct: true });
    }

    #[test]
    fn empty_quiz_shows_message_and_stays_on_list() {
        let mut app = app(vec![quiz("vacío", &[])], "empty");
        app.start_quiz(0, QuizMode::Identification);
        assert_eq!(app.state, AppState::QuizList);
        assert!(app.session.is_none());
        assert!(!app.message.is_empty());
    }

    #[test]
    fn submit_without_answer_keeps_state() {
        let mut app = app(vec![quiz("a", &["x"])], "noanswer");
        app.start_quiz(0, QuizMode::MultipleChoice);
        app.submit_answer();
        assert_eq!(
            app.session.as_ref().unwrap().state(),
            SessionState::AwaitingAnswer
        );
        assert!(!app.message.is_empty());
    }

    #[test]
    fn retake_and_back_to_list() {
        let mut app = app(vec![quiz("a", &["x"])], "retake");
        app.start_quiz(0, QuizMode::MultipleChoice);
        app.select_answer("x".into());
        app.submit_answer();
        app.next_question();
        assert_eq!(app.state, AppState::Complete);

        app.retake();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session.as_ref().unwrap().score(), 0);

        app.back_to_list();
        assert_eq!(app.state, AppState::QuizList);
        assert!(app.session.is_none());
        // El historial no se toca al salir
        assert_eq!(app.history.attempts("a").len(), 1);
    }

    #[test]
    fn bad_upload_keeps_previous_set() {
        let mut app = app(vec![quiz("a", &["x"])], "upload");
        let path = std::env::temp_dir().join(format!("flashcard_bad_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "nope": [] }"#).unwrap();

        assert!(!app.load_quizzes_from(&path));
        assert_eq!(app.quizzes.len(), 1);
        assert!(app.message.contains("⚠"));
        let _ = std::fs::remove_file(&path);
    }
}
