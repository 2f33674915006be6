use crate::models::{Habit, Settings};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct Store {
    pub habits: Vec<Habit>,
    pub settings: Settings,
}

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, store: Store) -> Self {
        Self {
            data_dir,
            store: Arc::new(Mutex::new(store)),
        }
    }
}
