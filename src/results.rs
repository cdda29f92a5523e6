// src/results.rs

use crate::model::QuizMode;
use crate::persistence::HistoryPort;
use chrono::{DateTime, Local};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// id de quiz -> intentos, el más reciente primero
pub type HistoryMap = BTreeMap<String, Vec<Attempt>>;

/// Un intento terminado. Las claves en JSON van en camelCase.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub date: DateTime<Local>,
    pub score: usize,
    pub total: usize,
    pub accuracy: String,
    pub time_taken: u64,
    pub randomize_questions: bool,
    pub randomize_choices: bool,
    pub variant: QuizMode,
}

impl Attempt {
    pub fn accuracy_value(&self) -> f64 {
        self.accuracy.parse().unwrap_or(0.0)
    }

    /// "Q", "C", "QC" o vacío según la aleatorización usada
    pub fn randomize_badge(&self) -> String {
        let mut badge = String::new();
        if self.randomize_questions {
            badge.push('Q');
        }
        if self.randomize_choices {
            badge.push('C');
        }
        badge
    }
}

/// Un decimal, redondeando los empates hacia arriba (6.25 -> "6.3").
/// `{:.1}` solo redondea al par, así que se redondea antes en décimas.
fn one_decimal(tenths: f64) -> String {
    format!("{:.1}", tenths.round() / 10.0)
}

/// Porcentaje con un decimal. `total` nunca es 0 (los quizzes vacíos no se pueden empezar).
pub fn accuracy_percent(score: usize, total: usize) -> String {
    if total == 0 {
        return "0.0".to_owned();
    }
    one_decimal(1000.0 * score as f64 / total as f64)
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizStats {
    pub attempts: usize,
    pub avg_score: String,
    pub best_score: f64,
}

/// Estadísticas de un quiz; `None` si nunca se ha hecho.
pub fn stats(quiz_id: &str, history: &HistoryMap) -> Option<QuizStats> {
    let attempts = history.get(quiz_id).filter(|a| !a.is_empty())?;

    let values: Vec<f64> = attempts.iter().map(Attempt::accuracy_value).collect();
    let avg_tenths = 10.0 * values.iter().sum::<f64>() / values.len() as f64;
    let best = values.iter().copied().fold(f64::MIN, f64::max);

    Some(QuizStats {
        attempts: attempts.len(),
        avg_score: one_decimal(avg_tenths),
        best_score: best,
    })
}

/// Historial de resultados de la sesión de la app, con su puerto de persistencia.
pub struct ResultsHistory {
    attempts: HistoryMap,
    port: Box<dyn HistoryPort>,
}

impl ResultsHistory {
    /// Carga el historial desde el puerto. Si falla, empieza vacío.
    pub fn load(port: Box<dyn HistoryPort>) -> Self {
        let attempts = match port.load() {
            Ok(map) => map,
            Err(e) => {
                warn!("No se pudo cargar el historial: {e}. Se empieza vacío.");
                HistoryMap::new()
            }
        };
        Self { attempts, port }
    }

    /// Añade el intento al principio y lo guarda. Un fallo al guardar no
    /// afecta al historial en memoria.
    pub fn record(&mut self, quiz_id: &str, attempt: Attempt) -> &[Attempt] {
        self.attempts
            .entry(quiz_id.to_owned())
            .or_default()
            .insert(0, attempt);

        if let Err(e) = self.port.save(&self.attempts) {
            warn!("No se pudo guardar el historial: {e}");
        }
        self.attempts(quiz_id)
    }

    pub fn attempts(&self, quiz_id: &str) -> &[Attempt] {
        self.attempts.get(quiz_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn recent(&self, quiz_id: &str, n: usize) -> &[Attempt] {
        let all = self.attempts(quiz_id);
        &all[..all.len().min(n)]
    }

    pub fn stats(&self, quiz_id: &str) -> Option<QuizStats> {
        stats(quiz_id, &self.attempts)
    }
}
