//! Modal identities and the explicit open-modal state.
//!
//! At most one modal is open at a time. [`ModalState`] records which one;
//! `open` and `close` are its only mutators, and the delegated click and key
//! listeners consult it instead of re-reading styles from the page.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::consts::{CREATE_TEAM_MODAL, EDIT_TEAM_MODAL, ENROLL_MODAL, MANAGE_MEMBERS_MODAL, MANAGE_MODAL};

/// Every modal the panels know how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    /// Admin: enroll a user in a course.
    Enroll,
    /// Admin: create a team.
    CreateTeam,
    /// Admin: edit a team's name, description and supervisor.
    EditTeam,
    /// Admin: list and add team members.
    ManageMembers,
    /// Supervisor: manage one student's course and path enrollments.
    Manage,
}

impl ModalKind {
    pub const ALL: [Self; 5] = [Self::Enroll, Self::CreateTeam, Self::EditTeam, Self::ManageMembers, Self::Manage];

    /// Id of the modal's backdrop element, which is also the element toggled.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Enroll => ENROLL_MODAL,
            Self::CreateTeam => CREATE_TEAM_MODAL,
            Self::EditTeam => EDIT_TEAM_MODAL,
            Self::ManageMembers => MANAGE_MEMBERS_MODAL,
            Self::Manage => MANAGE_MODAL,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    open: Option<ModalKind>,
}

impl ModalState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<ModalKind> {
        self.open
    }

    /// Mark `kind` as the open modal. Returns the modal it displaced, if a
    /// different one was open.
    pub fn open(&mut self, kind: ModalKind) -> Option<ModalKind> {
        self.open.replace(kind).filter(|prev| *prev != kind)
    }

    /// Clear `kind` if it is the open modal. Returns whether it was.
    pub fn close(&mut self, kind: ModalKind) -> bool {
        if self.open == Some(kind) {
            self.open = None;
            true
        } else {
            false
        }
    }

    /// The open modal whose backdrop is the element with `target_id`.
    #[must_use]
    pub fn backdrop_hit(&self, target_id: &str) -> Option<ModalKind> {
        self.open.filter(|kind| kind.element_id() == target_id)
    }
}
