pub mod config;
pub mod csv;
pub mod input_worker;
pub mod logger;
pub mod models;
pub mod session;
pub mod store;
pub mod timer;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use crate::csv::{LoadError, load_csv, parse_records};
pub use config::{AppPaths, DEFAULT_CONFIG, QuizConfig};
pub use input_worker::{InputEvent, spawn_input_worker};
pub use models::{
    AppState, CategoryEntry, Direction, Phase, QuizSession, Record, RevealContent, RevealState,
    UrgencyPhase,
};
pub use session::handle_quiz_input;
pub use store::RecordStore;
pub use timer::{TimerDriver, TimerHandle, TimerId, TimerKind};
pub use ui::draw_app;
