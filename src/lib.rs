pub mod app;
pub mod data;
pub mod error;
pub mod export;
pub mod grader;
pub mod heatmap;
pub mod model;
pub mod persistence;
pub mod randomize;
pub mod results;
pub mod session;
pub mod shuffle;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use error::{QuizError, QuizResult};
