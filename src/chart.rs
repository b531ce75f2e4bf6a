//! Supervisor dashboard charts.
//!
//! DESIGN
//! ======
//! The page embeds a `supervisorChartsData` object with three arrays. Each
//! array feeds one bar chart whose mount point may or may not be on the page.
//! This module maps the arrays into Chart.js declarative configs; drawing is
//! delegated to a [`ChartRenderer`] (Chart.js in the browser, a recorder in
//! tests). Charts are built once per page load and never updated.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::*;
use crate::dom::Dom;
use crate::error::PanelError;

// =============================================================================
// INPUT DATA
// =============================================================================

/// One day of completed activities.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimelinePoint {
    pub date: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub count: u32,
}

/// Average progress across a course's enrollments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseProgress {
    #[serde(rename = "course__name")]
    pub course_name: String,
    /// `null` when the aggregate had no rows.
    #[serde(default, deserialize_with = "deserialize_progress")]
    pub avg_progress: Option<f64>,
}

/// Average progress across one student's enrollments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentProgress {
    #[serde(rename = "app_user__username")]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_progress")]
    pub avg_progress: Option<f64>,
}

/// The page-global chart data object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartData {
    pub timeline: Vec<TimelinePoint>,
    pub course_progress: Vec<CourseProgress>,
    pub student_progress: Vec<StudentProgress>,
}

impl ChartData {
    /// # Errors
    ///
    /// [`PanelError::ChartData`] if `raw` does not match the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, PanelError> {
        serde_json::from_str(raw).map_err(PanelError::ChartData)
    }
}

/// Decimal aggregates arrive as strings (`"62.50"`) from the server's JSON
/// encoder; plain numbers and `null` are accepted as well.
fn deserialize_progress<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => number
            .as_f64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected numeric string, got {raw:?}"))),
        _ => Err(D::Error::custom("expected number, numeric string or null")),
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => {
            let Some(count) = number.as_u64() else {
                return Err(D::Error::custom("expected non-negative integer count"));
            };
            u32::try_from(count).map_err(|_| D::Error::custom("count out of range"))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| D::Error::custom(format!("expected integer string, got {raw:?}"))),
        _ => Err(D::Error::custom("expected integer count")),
    }
}

// =============================================================================
// CHART.JS CONFIG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartSeries,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    pub label: &'static str,
    pub data: Vec<Option<f64>>,
    pub background_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<&'static str>,
    pub scales: Scales,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Plugins>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scales {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Scale>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Toggle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub step_size: u32,
}

/// `{ display: bool }`, used by grids and legends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Toggle,
}

impl ChartConfig {
    fn bar(labels: Vec<String>, dataset: BarDataset, options: ChartOptions) -> Self {
        Self {
            kind: "bar",
            data: ChartSeries { labels, datasets: vec![dataset] },
            options,
        }
    }
}

// =============================================================================
// CHARTS
// =============================================================================

/// The three dashboard charts, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardChart {
    /// Completed activities per day.
    Timeline,
    /// Average progress per course, as horizontal bars.
    Course,
    /// Average progress per student, top entries only.
    Student,
}

impl DashboardChart {
    pub const ALL: [Self; 3] = [Self::Timeline, Self::Course, Self::Student];

    #[must_use]
    pub fn mount_id(self) -> &'static str {
        match self {
            Self::Timeline => TIMELINE_CHART,
            Self::Course => COURSE_CHART,
            Self::Student => STUDENT_CHART,
        }
    }

    /// Build the Chart.js config for this chart. `student_limit` caps the
    /// per-student series; the server already sorts it.
    #[must_use]
    pub fn config(self, data: &ChartData, student_limit: usize) -> ChartConfig {
        match self {
            Self::Timeline => timeline_config(&data.timeline),
            Self::Course => course_config(&data.course_progress),
            Self::Student => student_config(&data.student_progress, student_limit),
        }
    }
}

fn timeline_config(points: &[TimelinePoint]) -> ChartConfig {
    let (labels, values) = points
        .iter()
        .map(|p| (p.date.clone(), Some(f64::from(p.count))))
        .unzip();
    ChartConfig::bar(
        labels,
        BarDataset {
            label: TIMELINE_LABEL,
            data: values,
            background_color: TIMELINE_COLOR,
            border_radius: Some(TIMELINE_BORDER_RADIUS),
        },
        ChartOptions {
            responsive: Some(true),
            scales: Scales {
                y: Some(Scale { begin_at_zero: Some(true), ticks: Some(Ticks { step_size: 1 }), ..Scale::default() }),
                x: Some(Scale { grid: Some(Toggle { display: false }), ..Scale::default() }),
            },
            plugins: Some(Plugins { legend: Toggle { display: false } }),
            ..ChartOptions::default()
        },
    )
}

fn course_config(courses: &[CourseProgress]) -> ChartConfig {
    let (labels, values) = courses
        .iter()
        .map(|c| (c.course_name.clone(), c.avg_progress))
        .unzip();
    ChartConfig::bar(
        labels,
        BarDataset { label: PROGRESS_LABEL, data: values, background_color: COURSE_COLOR, border_radius: None },
        ChartOptions {
            index_axis: Some("y"),
            scales: Scales { x: Some(Scale { max: Some(PROGRESS_MAX), ..Scale::default() }), y: None },
            ..ChartOptions::default()
        },
    )
}

fn student_config(students: &[StudentProgress], limit: usize) -> ChartConfig {
    let (labels, values) = students
        .iter()
        .take(limit)
        .map(|s| (s.username.clone(), s.avg_progress))
        .unzip();
    ChartConfig::bar(
        labels,
        BarDataset { label: PROGRESS_LABEL, data: values, background_color: STUDENT_COLOR, border_radius: None },
        ChartOptions {
            scales: Scales { x: None, y: Some(Scale { max: Some(PROGRESS_MAX), ..Scale::default() }) },
            ..ChartOptions::default()
        },
    )
}

// =============================================================================
// RENDERING
// =============================================================================

/// Something that can draw a chart config into a mount point.
pub trait ChartRenderer {
    /// # Errors
    ///
    /// Implementation-specific; the browser renderer reports Chart.js throws
    /// as [`PanelError::Js`].
    fn render(&mut self, mount_id: &str, config: &ChartConfig) -> Result<(), PanelError>;
}

/// Build every dashboard chart whose mount point is on the page. Absent
/// mount points are skipped. Returns how many charts were rendered.
///
/// # Errors
///
/// Propagates the first renderer failure.
pub fn init_charts<D, R>(dom: &D, renderer: &mut R, data: &ChartData, student_limit: usize) -> Result<usize, PanelError>
where
    D: Dom + ?Sized,
    R: ChartRenderer + ?Sized,
{
    let mut rendered = 0;
    for chart in DashboardChart::ALL {
        let mount_id = chart.mount_id();
        if !dom.contains(mount_id) {
            log::debug!("chart: no #{mount_id} on page, skipping");
            continue;
        }
        renderer.render(mount_id, &chart.config(data, student_limit))?;
        rendered += 1;
    }
    log::info!("chart: rendered {rendered} dashboard chart(s)");
    Ok(rendered)
}
