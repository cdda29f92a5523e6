use crate::QuizApp;
use crate::heatmap::{DAY_LABELS, selectable_years};
use crate::ui::helpers::heat_color;
use chrono::{Datelike, Local};
use egui::{Align2, CornerRadius, FontId, Frame, Pos2, Rect, RichText, ScrollArea, Sense, Ui, vec2};

const CELL: f32 = 11.0;
const GAP: f32 = 3.0;
const LABEL_W: f32 = 28.0;
const HEADER_H: f32 = 14.0;

pub fn ui_heatmap(app: &mut QuizApp, ui: &mut Ui) {
    let mut chosen_year = None;

    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            // Años
            ui.vertical(|ui| {
                ui.label(RichText::new("Años").strong());
                for year in selectable_years(Local::now().year()) {
                    if ui
                        .selectable_label(app.heatmap.year == year, year.to_string())
                        .clicked()
                    {
                        chosen_year = Some(year);
                    }
                }
            });
            ui.separator();

            ui.vertical(|ui| {
                ui.label(format!(
                    "{} actividades en {}",
                    app.heatmap.total(),
                    app.heatmap.year
                ));
                ScrollArea::horizontal().show(ui, |ui| {
                    grid(app, ui);
                });
            });
        });
    });

    if let Some(year) = chosen_year {
        app.select_heatmap_year(year);
    }
}

fn grid(app: &QuizApp, ui: &mut Ui) {
    let weeks = app.heatmap.weeks();
    let spans = app.heatmap.month_spans();
    let dark = app.settings.dark_mode;

    let step = CELL + GAP;
    let size = vec2(LABEL_W + weeks.len() as f32 * step, HEADER_H + 7.0 * step);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = response.rect.min;
    let text_color = ui.visuals().text_color();
    let font = FontId::proportional(9.0);

    for span in &spans {
        let x = origin.x + LABEL_W + span.start as f32 * step;
        painter.text(
            Pos2::new(x, origin.y),
            Align2::LEFT_TOP,
            span.label,
            font.clone(),
            text_color,
        );
    }

    // Sólo lunes, miércoles y viernes, para no saturar
    for row in [1usize, 3, 5] {
        let y = origin.y + HEADER_H + row as f32 * step;
        painter.text(
            Pos2::new(origin.x, y),
            Align2::LEFT_TOP,
            DAY_LABELS[row],
            font.clone(),
            text_color,
        );
    }

    let mut hovered = None;
    for (col, week) in weeks.iter().enumerate() {
        for (row, day) in week.iter().enumerate() {
            let Some(day) = day else {
                continue;
            };
            let min = Pos2::new(
                origin.x + LABEL_W + col as f32 * step,
                origin.y + HEADER_H + row as f32 * step,
            );
            let rect = Rect::from_min_size(min, vec2(CELL, CELL));
            painter.rect_filled(rect, CornerRadius::same(2), heat_color(day.value, dark));

            if response.hover_pos().is_some_and(|p| rect.contains(p)) {
                hovered = Some(*day);
            }
        }
    }

    if let Some(day) = hovered {
        response.on_hover_text(format!(
            "{}: {} actividades",
            day.date.format("%d/%m/%Y"),
            day.value
        ));
    }
}
