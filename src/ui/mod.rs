mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Botón de volver sólo durante el quiz y en la pantalla final
        if matches!(self.state, AppState::Quiz | AppState::Complete) {
            top_panel(self, ctx);
        }

        // Panel inferior: tema y mensajes
        bottom_panel(self, ctx);

        match self.state {
            AppState::QuizList => views::quiz_list::ui_quiz_list(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Complete => views::complete::ui_complete(self, ctx),
        }

        if self.confirm_leave {
            self.confirm_leave(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.settings);
    }
}
