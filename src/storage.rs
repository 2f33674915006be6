use crate::errors::AppError;
use crate::models::{Habit, HabitsRecord, Settings};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

// The two logical records, each under its own stable file name.
const HABITS_FILE: &str = "habits.json";
const SETTINGS_FILE: &str = "settings.json";

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("APP_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("data")
}

pub fn habits_path(dir: &Path) -> PathBuf {
    dir.join(HABITS_FILE)
}

pub fn settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE)
}

/// Reads never fail the caller: a missing, unreadable or corrupt habits
/// file yields the empty collection, and the failure is only logged.
pub async fn load_habits(dir: &Path) -> Vec<Habit> {
    let record: HabitsRecord = read_record(&habits_path(dir), "habits").await;
    record.habits
}

/// Same fallback contract as [`load_habits`], with the default settings
/// standing in for anything unreadable.
pub async fn load_settings(dir: &Path) -> Settings {
    read_record(&settings_path(dir), "settings").await
}

async fn read_record<T>(path: &Path, kind: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(record) => record,
            Err(err) => {
                error!("failed to parse {kind} file: {err}");
                T::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(err) => {
            error!("failed to read {kind} file: {err}");
            T::default()
        }
    }
}

pub async fn persist_habits(dir: &Path, habits: &[Habit]) -> Result<(), AppError> {
    #[derive(Serialize)]
    struct Record<'a> {
        habits: &'a [Habit],
    }
    write_record(&habits_path(dir), &Record { habits }).await
}

pub async fn persist_settings(dir: &Path, settings: &Settings) -> Result<(), AppError> {
    write_record(&settings_path(dir), settings).await
}

async fn write_record<T: Serialize>(path: &Path, record: &T) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(record).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
