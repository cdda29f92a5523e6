use crate::QuizApp;
use crate::ui::layout::{scroll_panel, two_button_row};
use crate::view_models::{AttemptRow, format_duration};
use egui::{Context, Grid, RichText, Ui};

pub fn ui_complete(app: &mut QuizApp, ctx: &Context) {
    let Some(attempt) = app.last_attempt.clone() else {
        return;
    };
    let title = app
        .session
        .as_ref()
        .map(|s| s.quiz().title.clone())
        .unwrap_or_default();
    let rows = app.current_attempt_rows();

    let mut retake = false;
    let mut back = false;

    scroll_panel(ctx, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🏆 ¡Quiz terminado!");
            ui.label(&title);
        });
        ui.add_space(16.0);

        Grid::new("complete_stats")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                ui.label("Puntuación");
                ui.label(RichText::new(format!("{}/{}", attempt.score, attempt.total)).strong());
                ui.end_row();
                ui.label("Precisión");
                ui.label(RichText::new(format!("{}%", attempt.accuracy)).strong());
                ui.end_row();
                ui.label("Tiempo");
                ui.label(RichText::new(format_duration(attempt.time_taken)).strong());
                ui.end_row();
            });

        if !rows.is_empty() {
            ui.add_space(16.0);
            previous_attempts(ui, &rows);
        }

        ui.add_space(16.0);
        let width = ui.available_width();
        (retake, back) = two_button_row(ui, width, "🔄 Repetir quiz", "📋 Todos los quizzes");
    });

    if retake {
        app.retake();
    }
    if back {
        app.back_to_list();
    }
}

fn previous_attempts(ui: &mut Ui, rows: &[AttemptRow]) {
    ui.label(RichText::new("Intentos anteriores").strong());
    Grid::new("previous_attempts_grid")
        .striped(true)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("Fecha");
            ui.label("Puntos");
            ui.label("%");
            ui.label("Tiempo");
            ui.label("Modo");
            ui.end_row();

            for r in rows {
                ui.label(&r.date);
                ui.label(r.score_label());
                ui.label(&r.accuracy);
                ui.label(format_duration(r.time_taken));
                ui.horizontal(|ui| {
                    if !r.randomized.is_empty() {
                        ui.label(RichText::new(&r.randomized).small().strong());
                    }
                    ui.label(RichText::new(r.variant).small());
                });
                ui.end_row();
            }
        });
}
