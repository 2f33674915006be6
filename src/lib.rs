pub mod app;
pub mod duration;
pub mod errors;
pub mod handlers;
pub mod milestones;
pub mod models;
pub mod sort;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::{AppState, Store};
pub use storage::{load_habits, load_settings, resolve_data_dir};
