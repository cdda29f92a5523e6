use eframe::egui;
use flashcard_quiz::QuizApp;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    // Opcional: archivo de quizzes como primer argumento
    let quiz_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Flashcard Quiz")
            .with_inner_size([960.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Flashcard Quiz",
        options,
        Box::new(move |cc| Ok(Box::new(QuizApp::new(cc, quiz_path.as_deref())))),
    )
}
