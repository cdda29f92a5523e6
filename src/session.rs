// src/session.rs

use crate::error::{QuizError, QuizResult};
use crate::grader::grade;
use crate::model::{Question, Quiz, QuizMode};
use crate::randomize::{RandomizeOptions, randomize};
use crate::results::{Attempt, accuracy_percent};
use chrono::{DateTime, Local};
use log::info;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    AwaitingAnswer,
    FeedbackShown { correct: bool },
    Complete,
}

/// Resultado de `next`: se pasa a la siguiente pregunta o se termina el quiz.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Advanced,
    Completed(Attempt),
}

/// Estado vivo de un intento. Se crea al empezar y se descarta al volver a la lista.
#[derive(Clone, Debug)]
pub struct Session {
    original: Quiz,
    quiz: Quiz,
    options: RandomizeOptions,
    mode: QuizMode,
    index: usize,
    pending: Option<String>,
    state: SessionState,
    score: usize,
    answered: usize,
    started_at: DateTime<Local>,
}

impl Session {
    pub fn start<R: Rng + ?Sized>(
        quiz: &Quiz,
        options: RandomizeOptions,
        mode: QuizMode,
        rng: &mut R,
    ) -> QuizResult<Self> {
        Self::start_at(quiz, options, mode, rng, Local::now())
    }

    pub fn start_at<R: Rng + ?Sized>(
        quiz: &Quiz,
        options: RandomizeOptions,
        mode: QuizMode,
        rng: &mut R,
        now: DateTime<Local>,
    ) -> QuizResult<Self> {
        if quiz.questions.is_empty() {
            return Err(QuizError::EmptyQuiz(quiz.title.clone()));
        }
        if mode == QuizMode::MultipleChoice {
            if let Some(pos) = quiz.questions.iter().position(|q| !q.is_multiple_choice()) {
                return Err(QuizError::MissingChoices {
                    quiz: quiz.title.clone(),
                    question: pos + 1,
                });
            }
        }

        info!(
            "Empieza '{}' ({} preguntas, modo {:?}, {:?})",
            quiz.id,
            quiz.questions.len(),
            mode,
            options
        );

        Ok(Self {
            original: quiz.clone(),
            quiz: randomize(quiz, options, rng),
            options,
            mode,
            index: 0,
            pending: None,
            state: SessionState::AwaitingAnswer,
            score: 0,
            answered: 0,
            started_at: now,
        })
    }

    /// Repetir: vuelve a barajar desde el quiz original con las mismas opciones.
    pub fn retake<R: Rng + ?Sized>(&self, rng: &mut R) -> QuizResult<Self> {
        Self::start(&self.original, self.options, self.mode, rng)
    }

    pub fn select_answer(&mut self, value: impl Into<String>) -> QuizResult<()> {
        if self.state != SessionState::AwaitingAnswer {
            return Err(QuizError::InvalidTransition("la pregunta ya está respondida"));
        }
        self.pending = Some(value.into());
        Ok(())
    }

    /// Corrige la respuesta pendiente. Devuelve si era correcta.
    pub fn submit(&mut self) -> QuizResult<bool> {
        if self.state != SessionState::AwaitingAnswer {
            return Err(QuizError::InvalidTransition("la pregunta ya está respondida"));
        }
        let answer = match self.pending.as_deref() {
            Some(a) if !a.trim().is_empty() => a,
            _ => return Err(QuizError::NoAnswer),
        };

        let correct = grade(self.mode, answer, &self.current_question().correct_answer);
        if correct {
            self.score += 1;
        }
        self.answered += 1;
        self.state = SessionState::FeedbackShown { correct };
        Ok(correct)
    }

    pub fn next(&mut self) -> QuizResult<Step> {
        self.next_at(Local::now())
    }

    pub fn next_at(&mut self, now: DateTime<Local>) -> QuizResult<Step> {
        if !matches!(self.state, SessionState::FeedbackShown { .. }) {
            return Err(QuizError::InvalidTransition("primero hay que enviar la respuesta"));
        }

        if self.index + 1 < self.total() {
            self.index += 1;
            self.pending = None;
            self.state = SessionState::AwaitingAnswer;
            return Ok(Step::Advanced);
        }

        self.state = SessionState::Complete;
        let attempt = self.finalize(now);
        info!(
            "Terminado '{}': {}/{} ({}%)",
            self.quiz.id, attempt.score, attempt.total, attempt.accuracy
        );
        Ok(Step::Completed(attempt))
    }

    fn finalize(&self, now: DateTime<Local>) -> Attempt {
        let elapsed = (now - self.started_at).num_seconds().max(0) as u64;
        Attempt {
            date: now,
            score: self.score,
            total: self.total(),
            accuracy: accuracy_percent(self.score, self.total()),
            time_taken: elapsed,
            randomize_questions: self.options.questions,
            randomize_choices: self.options.choices,
            variant: self.mode,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.quiz.questions[self.index]
    }

    /// El quiz original, sin barajar
    pub fn quiz(&self) -> &Quiz {
        &self.original
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn options(&self) -> RandomizeOptions {
        self.options
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.total()
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    pub fn can_submit(&self) -> bool {
        self.state == SessionState::AwaitingAnswer
            && self.pending.as_deref().is_some_and(|a| !a.trim().is_empty())
    }

    /// Fracción para la barra de progreso (pregunta actual incluida)
    pub fn progress(&self) -> f32 {
        (self.index + 1) as f32 / self.total() as f32
    }
}
