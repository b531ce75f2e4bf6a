//! DOM ids, display values, and chart styling shared across the crate.
//!
//! The ids are an exact-match contract with the server-rendered templates.

// ── Enroll modal (admin users) ──────────────────────────────────

pub const ENROLL_MODAL: &str = "enrollModal";
pub const ENROLL_USER_ID: &str = "modalUserId";
pub const ENROLL_TITLE: &str = "modalTitle";

// ── Team modals (admin teams) ───────────────────────────────────

pub const CREATE_TEAM_MODAL: &str = "createTeamModal";

pub const EDIT_TEAM_MODAL: &str = "editTeamModal";
pub const EDIT_TEAM_NAME: &str = "editTeamName";
pub const EDIT_TEAM_DESCRIPTION: &str = "editTeamDescription";
pub const EDIT_TEAM_SUPERVISOR: &str = "editTeamSupervisor";
pub const EDIT_TEAM_FORM: &str = "editTeamForm";

pub const MANAGE_MEMBERS_MODAL: &str = "manageMembersModal";
pub const MANAGE_MEMBERS_TITLE: &str = "manageMembersTitle";
pub const ADD_MEMBER_FORM: &str = "addMemberForm";
pub const MEMBERS_LIST_CONTAINER: &str = "membersListContainer";
pub const TEAM_MEMBERS_PREFIX: &str = "team-members-";

// ── Manage modal (supervisor panel) ─────────────────────────────

pub const MANAGE_MODAL: &str = "manageModal";
pub const MANAGE_TITLE: &str = "manageModalTitle";
pub const ENROLL_COURSE_USER_ID: &str = "enrollCourseUserId";
pub const ENROLL_PATH_USER_ID: &str = "enrollPathUserId";
pub const USER_DATA_PREFIX: &str = "data-user-";
pub const CURRENT_ENROLLMENTS_CONTAINER: &str = "currentEnrollmentsContainer";
pub const ENROLL_COURSE_FORM: &str = "enrollCourseForm";
pub const ENROLL_PATH_FORM: &str = "enrollPathForm";

// ── Chart mount points ──────────────────────────────────────────

pub const TIMELINE_CHART: &str = "timelineChart";
pub const COURSE_CHART: &str = "courseChart";
pub const STUDENT_CHART: &str = "studentChart";

// ── Page globals ────────────────────────────────────────────────

/// Global holding the supervisor dashboard chart data.
pub const CHART_DATA_GLOBAL: &str = "supervisorChartsData";

/// Global holding an optional [`crate::config::PanelConfig`] object.
pub const CONFIG_GLOBAL: &str = "safePanelsConfig";

// ── Trigger dataset keys ────────────────────────────────────────

pub const DATA_TEAM_ID: &str = "teamId";
pub const DATA_TEAM_NAME: &str = "teamName";
pub const DATA_TEAM_DESC: &str = "teamDesc";
pub const DATA_TEAM_SUP: &str = "teamSup";
pub const DATA_URL: &str = "url";

// ── Chart styling ───────────────────────────────────────────────

pub const TIMELINE_COLOR: &str = "#c5a47e";
pub const COURSE_COLOR: &str = "#3b82f6";
pub const STUDENT_COLOR: &str = "#10b981";

pub const TIMELINE_LABEL: &str = "Actividades Completadas";
pub const PROGRESS_LABEL: &str = "Progreso Promedio (%)";

/// Upper bound for percentage axes.
pub const PROGRESS_MAX: f64 = 100.0;

/// Rounded bar corners on the activity timeline, in pixels.
pub const TIMELINE_BORDER_RADIUS: u32 = 4;

/// Default number of students shown in the per-student chart.
pub const STUDENT_CHART_LIMIT: usize = 10;
