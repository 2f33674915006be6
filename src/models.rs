use crate::duration::DetailedDuration;
use crate::milestones::{NextMilestone, Tier};
use serde::{Deserialize, Serialize};

pub const EXPORT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HabitsRecord {
    pub habits: Vec<Habit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_view_mode")]
    pub view_mode: String,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            language: default_language(),
            view_mode: default_view_mode(),
            sort_by: default_sort_by(),
        }
    }
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_language() -> String {
    "pt".to_string()
}

fn default_view_mode() -> String {
    "grid".to_string()
}

fn default_sort_by() -> String {
    "most-days".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabitRequest {
    pub name: String,
    pub start_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub export_date: String,
    pub version: String,
    pub data: HabitsRecord,
    pub settings: Settings,
}

/// A habit enriched for display: day count, milestone state, formatted dates.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitView {
    pub id: String,
    pub name: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub days: i64,
    pub days_label: &'static str,
    pub formatted_date: String,
    pub duration: DetailedDuration,
    pub milestone: &'static Tier,
    pub next_milestone: Option<NextMilestone>,
    pub progress_text: String,
}

#[derive(Debug, Serialize)]
pub struct HabitListResponse {
    pub habits: Vec<HabitView>,
}
