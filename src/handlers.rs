use crate::duration::{days_label, days_since_at, detailed_duration_at, format_date, is_valid_date};
use crate::errors::AppError;
use crate::milestones;
use crate::models::{
    EXPORT_VERSION, ExportSnapshot, Habit, HabitListResponse, HabitView, HabitsRecord,
    NewHabitRequest, Settings,
};
use crate::sort::sort_habits_at;
use crate::state::AppState;
use crate::storage::{persist_habits, persist_settings};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use chrono::{Local, NaiveDate, SecondsFormat, Utc};
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_index(&store.settings))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<HabitListResponse> {
    let store = state.store.lock().await;
    let today = Local::now().date_naive();
    let sorted = sort_habits_at(&store.habits, &store.settings.sort_by, today);
    let habits = sorted.iter().map(|habit| to_view(habit, today)).collect();
    Json(HabitListResponse { habits })
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<NewHabitRequest>,
) -> Result<(StatusCode, Json<HabitView>), AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }
    let start_date = payload.start_date.trim();
    if !is_valid_date(start_date) {
        return Err(AppError::bad_request(
            "startDate must be a real YYYY-MM-DD date",
        ));
    }

    let habit = Habit {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        start_date: start_date.to_string(),
        created_at: Some(now_iso()),
    };

    let mut store = state.store.lock().await;
    store.habits.push(habit.clone());
    if let Err(err) = persist_habits(&state.data_dir, &store.habits).await {
        // not added unless the write went through
        store.habits.pop();
        return Err(err);
    }

    let today = Local::now().date_naive();
    Ok((StatusCode::CREATED, Json(to_view(&habit, today))))
}

/// Deleting an id that is not there still succeeds; the collection is
/// simply rewritten as-is.
pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    store.habits.retain(|habit| habit.id != id);
    persist_habits(&state.data_dir, &store.habits).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn export_snapshot(State(state): State<AppState>) -> Json<ExportSnapshot> {
    let store = state.store.lock().await;
    Json(ExportSnapshot {
        export_date: now_iso(),
        version: EXPORT_VERSION.to_string(),
        data: HabitsRecord {
            habits: store.habits.clone(),
        },
        settings: store.settings.clone(),
    })
}

/// Wholesale overwrite: the snapshot's habits replace the collection with
/// no merge, no de-duplication and no id regeneration. Settings are
/// replaced too when the snapshot carries them.
pub async fn import_snapshot(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<StatusCode, AppError> {
    let habits_value = payload
        .get("data")
        .and_then(|data| data.get("habits"))
        .filter(|value| value.is_array());
    let Some(habits_value) = habits_value else {
        return Err(AppError::bad_request(
            "snapshot must carry data.habits as a list",
        ));
    };
    let habits: Vec<Habit> = serde_json::from_value(habits_value.clone())
        .map_err(|err| AppError::bad_request(format!("invalid habit entry: {err}")))?;

    let settings: Option<Settings> = match payload.get("settings").filter(|value| !value.is_null())
    {
        Some(value) => Some(
            serde_json::from_value(value.clone())
                .map_err(|err| AppError::bad_request(format!("invalid settings: {err}")))?,
        ),
        None => None,
    };

    let mut store = state.store.lock().await;
    persist_habits(&state.data_dir, &habits).await?;
    store.habits = habits;
    if let Some(settings) = settings {
        persist_settings(&state.data_dir, &settings).await?;
        store.settings = settings;
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    let store = state.store.lock().await;
    Json(store.settings.clone())
}

/// Full replacement of the settings record; callers read-merge-write.
pub async fn save_settings(
    State(state): State<AppState>,
    Json(payload): Json<Settings>,
) -> Result<Json<Settings>, AppError> {
    let mut store = state.store.lock().await;
    persist_settings(&state.data_dir, &payload).await?;
    store.settings = payload;
    Ok(Json(store.settings.clone()))
}

fn to_view(habit: &Habit, today: NaiveDate) -> HabitView {
    let days = days_since_at(&habit.start_date, today);
    HabitView {
        id: habit.id.clone(),
        name: habit.name.clone(),
        start_date: habit.start_date.clone(),
        created_at: habit.created_at.clone(),
        days,
        days_label: days_label(days),
        formatted_date: format_date(&habit.start_date),
        duration: detailed_duration_at(&habit.start_date, today),
        milestone: milestones::current_milestone(days),
        next_milestone: milestones::next_milestone(days),
        progress_text: milestones::progress_text(days),
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
