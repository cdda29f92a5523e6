// src/randomize.rs

use crate::model::{Question, Quiz};
use crate::shuffle::shuffle;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomizeOptions {
    pub questions: bool,
    pub choices: bool,
}

impl Default for RandomizeOptions {
    fn default() -> Self {
        Self {
            questions: true,
            choices: true,
        }
    }
}

impl RandomizeOptions {
    pub const NONE: RandomizeOptions = RandomizeOptions {
        questions: false,
        choices: false,
    };
}

/// Crea la copia de trabajo de una sesión. El quiz original no se modifica.
pub fn randomize<R: Rng + ?Sized>(quiz: &Quiz, options: RandomizeOptions, rng: &mut R) -> Quiz {
    let mut questions = if options.questions {
        shuffle(&quiz.questions, rng)
    } else {
        quiz.questions.clone()
    };

    if options.choices {
        questions = questions
            .into_iter()
            .map(|q| Question {
                choices: shuffle(&q.choices, rng),
                ..q
            })
            .collect();
    }

    Quiz {
        questions,
        ..quiz.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn quiz() -> Quiz {
        let questions = (0..8)
            .map(|n| Question {
                question: format!("q{n}"),
                correct_answer: format!("a{n}"),
                choices: if n % 3 == 0 {
                    vec![]
                } else {
                    (0..4).map(|c| format!("q{n}-c{c}")).collect()
                },
            })
            .collect();
        Quiz {
            id: "demo".into(),
            title: "Demo".into(),
            description: String::new(),
            category: "test".into(),
            difficulty: "easy".into(),
            questions,
        }
    }

    #[test]
    fn no_flags_returns_equal_quiz() {
        let original = quiz();
        let out = randomize(&original, RandomizeOptions::NONE, &mut StdRng::seed_from_u64(9));
        assert_eq!(out, original);
    }

    #[test]
    fn question_shuffle_keeps_choices_order() {
        let original = quiz();
        let options = RandomizeOptions {
            questions: true,
            choices: false,
        };
        let out = randomize(&original, options, &mut StdRng::seed_from_u64(5));

        assert_eq!(out.questions.len(), original.questions.len());
        for q in &out.questions {
            let src = original
                .questions
                .iter()
                .find(|o| o.question == q.question)
                .unwrap();
            assert_eq!(q, src);
        }
        assert_eq!(out.id, original.id);
    }

    #[test]
    fn choice_shuffle_keeps_question_order_and_answers() {
        let original = quiz();
        let options = RandomizeOptions {
            questions: false,
            choices: true,
        };
        let out = randomize(&original, options, &mut StdRng::seed_from_u64(11));

        for (q, src) in out.questions.iter().zip(&original.questions) {
            assert_eq!(q.question, src.question);
            assert_eq!(q.correct_answer, src.correct_answer);
            let mut a = q.choices.clone();
            let mut b = src.choices.clone();
            a.sort();
            b.sort();
            assert_eq!(a, b);
        }
        // Las de identificación siguen sin opciones
        assert!(out.questions[0].choices.is_empty());
    }

    #[test]
    fn source_quiz_is_untouched() {
        let original = quiz();
        let copy = original.clone();
        let _ = randomize(&original, RandomizeOptions::default(), &mut StdRng::seed_from_u64(2));
        assert_eq!(original, copy);
    }
}
