// src/ui/helpers.rs
use crate::heatmap;
use egui::{Button, Color32, RichText, Ui, Vec2};

/// Color de la etiqueta de dificultad
pub fn difficulty_color(difficulty: &str) -> Color32 {
    match difficulty.to_lowercase().as_str() {
        "easy" | "fácil" => Color32::from_rgb(60, 160, 90),
        "medium" | "media" => Color32::from_rgb(200, 160, 40),
        "hard" | "difícil" => Color32::from_rgb(200, 70, 70),
        _ => Color32::GRAY,
    }
}

pub fn tag(ui: &mut Ui, text: &str, color: Color32) {
    if text.is_empty() {
        return;
    }
    ui.label(RichText::new(text).small().strong().color(color));
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ChoiceLook {
    Idle,
    Selected,
    Correct,
    Wrong,
    Dimmed,
}

/// Cómo se pinta una opción según la selección y si ya hay corrección.
pub fn choice_look(choice: &str, selected: Option<&str>, correct: &str, feedback: bool) -> ChoiceLook {
    let is_selected = selected == Some(choice);
    if feedback {
        if choice == correct {
            ChoiceLook::Correct
        } else if is_selected {
            ChoiceLook::Wrong
        } else {
            ChoiceLook::Dimmed
        }
    } else if is_selected {
        ChoiceLook::Selected
    } else {
        ChoiceLook::Idle
    }
}

/// Botón de opción a ancho completo. Devuelve si se pulsó.
pub fn choice_button(ui: &mut Ui, choice: &str, look: ChoiceLook, width: f32, enabled: bool) -> bool {
    let (fill, suffix) = match look {
        ChoiceLook::Idle => (None, ""),
        ChoiceLook::Selected => (Some(Color32::from_rgb(70, 80, 170)), ""),
        ChoiceLook::Correct => (Some(Color32::from_rgb(40, 120, 60)), "  ✅"),
        ChoiceLook::Wrong => (Some(Color32::from_rgb(150, 45, 45)), "  ❌"),
        ChoiceLook::Dimmed => (None, ""),
    };
    let mut button = Button::new(format!("{choice}{suffix}")).min_size(Vec2::new(width, 36.0));
    if let Some(fill) = fill {
        button = button.fill(fill);
    }
    ui.add_enabled(enabled, button).clicked()
}

/// Color de una celda del mapa de actividad
pub fn heat_color(value: u32, dark: bool) -> Color32 {
    let empty = if dark {
        Color32::from_gray(45)
    } else {
        Color32::from_gray(225)
    };
    match heatmap::level(value) {
        0 => empty,
        1 => Color32::from_rgb(199, 210, 254),
        2 => Color32::from_rgb(165, 180, 252),
        3 => Color32::from_rgb(129, 140, 248),
        4 => Color32::from_rgb(99, 102, 241),
        _ => Color32::from_rgb(79, 70, 229),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_looks() {
        assert!(choice_look("a", Some("a"), "b", false) == ChoiceLook::Selected);
        assert!(choice_look("b", Some("a"), "b", false) == ChoiceLook::Idle);
        assert!(choice_look("b", Some("a"), "b", true) == ChoiceLook::Correct);
        assert!(choice_look("a", Some("a"), "b", true) == ChoiceLook::Wrong);
        assert!(choice_look("c", Some("a"), "b", true) == ChoiceLook::Dimmed);
    }
}
