use crate::QuizApp;
use crate::model::QuizMode;
use crate::session::SessionState;
use crate::ui::helpers::{choice_button, choice_look};
use crate::ui::layout::scroll_panel;
use egui::{Button, Color32, Context, Frame, ProgressBar, RichText, TextEdit, Ui};

enum QuizAction {
    Select(String),
    Typed,
    Submit,
    Next,
}

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    // Copia de lo necesario para pintar sin tener la sesión prestada
    let question = session.current_question().clone();
    let mode = session.mode();
    let state = session.state();
    let pending = session.pending().map(str::to_owned);
    let can_submit = session.can_submit();
    let is_last = session.is_last_question();
    let (index, total, score) = (session.index(), session.total(), session.score());
    let progress = session.progress();
    let title = session.quiz().title.clone();

    let feedback = matches!(state, SessionState::FeedbackShown { .. });
    let mut action = None;

    scroll_panel(ctx, 680.0, |ui| {
        ui.label(RichText::new(&title).strong());
        ui.horizontal(|ui| {
            ui.label(format!("Pregunta {} de {}", index + 1, total));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Puntos: {score}/{total}"));
            });
        });
        ui.add(ProgressBar::new(progress).desired_height(6.0));
        ui.add_space(16.0);

        ui.label(RichText::new(&question.question).heading().strong());
        ui.add_space(16.0);

        let width = ui.available_width();
        match mode {
            QuizMode::MultipleChoice => {
                for choice in &question.choices {
                    let look = choice_look(
                        choice,
                        pending.as_deref(),
                        &question.correct_answer,
                        feedback,
                    );
                    if choice_button(ui, choice, look, width, !feedback) {
                        action = Some(QuizAction::Select(choice.clone()));
                    }
                    ui.add_space(4.0);
                }
            }
            QuizMode::Identification => {
                let edit = TextEdit::multiline(&mut app.input)
                    .hint_text("Escribe tu respuesta...")
                    .desired_rows(3)
                    .desired_width(width)
                    .font(egui::TextStyle::Monospace)
                    .interactive(!feedback);
                if ui.add(edit).changed() {
                    action = Some(QuizAction::Typed);
                }
                ui.add_space(4.0);
                ui.label(RichText::new("Vista previa:").small());
                Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(width);
                    ui.label(&app.input);
                });
            }
        }

        ui.add_space(12.0);
        if let SessionState::FeedbackShown { correct } = state {
            feedback_box(ui, correct, &question.correct_answer);
            ui.add_space(12.0);
        }

        if feedback {
            let label = if is_last { "Terminar quiz" } else { "Siguiente pregunta" };
            if ui.add_sized([width, 36.0], Button::new(label)).clicked() {
                action = Some(QuizAction::Next);
            }
        } else if ui
            .add_enabled(can_submit, Button::new("Enviar respuesta").min_size(egui::vec2(width, 36.0)))
            .clicked()
        {
            action = Some(QuizAction::Submit);
        }
    });

    match action {
        Some(QuizAction::Select(choice)) => app.select_answer(choice),
        Some(QuizAction::Typed) => app.sync_input(),
        Some(QuizAction::Submit) => app.submit_answer(),
        Some(QuizAction::Next) => app.next_question(),
        None => {}
    }
}

fn feedback_box(ui: &mut Ui, correct: bool, expected: &str) {
    let (fill, text) = if correct {
        (Color32::from_rgb(30, 90, 50), "✅ ¡Correcto!")
    } else {
        (Color32::from_rgb(110, 35, 35), "❌ Incorrecto")
    };
    Frame::default()
        .fill(fill)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).strong().color(Color32::WHITE));
            if !correct {
                ui.label(
                    RichText::new(format!("La respuesta correcta es: {expected}"))
                        .color(Color32::WHITE),
                );
            }
        });
}
