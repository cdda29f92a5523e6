use crate::QuizApp;
use crate::model::QuizMode;
use crate::ui::helpers::{difficulty_color, tag};
use crate::ui::layout::scroll_panel;
use crate::view_models::QuizCard;
use egui::{Button, Color32, Context, Frame, RichText, Ui};

use super::heatmap::ui_heatmap;

enum CardAction {
    Start(usize, QuizMode),
}

pub fn ui_quiz_list(app: &mut QuizApp, ctx: &Context) {
    scroll_panel(ctx, 820.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🧠 Flashcards");
            ui.label("Pon a prueba lo que sabes con nuestra colección de quizzes");
            ui.add_space(8.0);
            if ui.button("📂 Subir quizzes (JSON)").clicked() {
                app.upload_quizzes();
            }
        });
        ui.add_space(12.0);

        ui_heatmap(app, ui);
        ui.add_space(12.0);

        options(app, ui);
        ui.add_space(12.0);

        let cards = app.quiz_cards();
        if cards.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label("No hay quizzes. ¡Sube un archivo quizzes.json para empezar!");
            });
            return;
        }

        let mut action = None;
        for card in &cards {
            if let Some(a) = quiz_card(ui, card) {
                action = Some(a);
            }
            ui.add_space(8.0);
        }

        if let Some(CardAction::Start(idx, mode)) = action {
            app.start_quiz(idx, mode);
        }
    });
}

fn options(app: &mut QuizApp, ui: &mut Ui) {
    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.checkbox(&mut app.settings.randomize_questions, "Barajar preguntas");
            ui.checkbox(&mut app.settings.randomize_choices, "Barajar opciones");
            ui.separator();
            ui.label("Modo:");
            ui.radio_value(
                &mut app.settings.mode,
                QuizMode::MultipleChoice,
                QuizMode::MultipleChoice.label(),
            );
            ui.radio_value(
                &mut app.settings.mode,
                QuizMode::Identification,
                QuizMode::Identification.label(),
            );
        });
    });
}

fn quiz_card(ui: &mut Ui, card: &QuizCard) -> Option<CardAction> {
    let mut action = None;
    Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&card.title).heading().strong());
            if !card.description.is_empty() {
                ui.label(&card.description);
            }
            ui.horizontal(|ui| {
                tag(ui, &card.category, Color32::from_rgb(90, 110, 200));
                tag(ui, &card.difficulty, difficulty_color(&card.difficulty));
                ui.label(format!("📖 {}", card.question_label()));
            });

            if let Some(stats) = &card.stats {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label(format!("🎯 Intentos: {}", stats.attempts));
                    ui.separator();
                    ui.label(format!("Media: {}%", stats.avg_score));
                    ui.separator();
                    ui.label(format!("🏆 Mejor: {}%", stats.best_score));
                });
            }

            if !card.recent.is_empty() {
                ui.add_space(4.0);
                ui.label(RichText::new("Intentos recientes").small());
                for row in &card.recent {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&row.date).small());
                        ui.label(RichText::new(row.score_label()).small().strong());
                        ui.label(RichText::new(format!("{}%", row.accuracy)).small());
                    });
                }
            }

            ui.add_space(6.0);
            let w = (ui.available_width() - 8.0) / 2.0;
            ui.horizontal(|ui| {
                let mc = ui
                    .add_enabled(
                        card.can_start() && card.supports_multiple_choice,
                        Button::new("Empezar opción múltiple").min_size(egui::vec2(w, 32.0)),
                    )
                    .on_disabled_hover_text("Este quiz no tiene opciones en todas sus preguntas");
                let id = ui.add_enabled(
                    card.can_start(),
                    Button::new("Empezar identificación").min_size(egui::vec2(w, 32.0)),
                );
                if mc.clicked() {
                    action = Some(CardAction::Start(card.idx, QuizMode::MultipleChoice));
                }
                if id.clicked() {
                    action = Some(CardAction::Start(card.idx, QuizMode::Identification));
                }
            });
        });
    action
}
