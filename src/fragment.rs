//! Copies pre-rendered markup from a hidden per-entity container into a
//! shared display container.
//!
//! The server renders one hidden block per team (its member list) or per
//! student (their current enrollments). Opening a modal moves the matching
//! block's markup into the modal. The destination is fully replaced, so the
//! previous entity's content never lingers.

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

use crate::consts::{TEAM_MEMBERS_PREFIX, USER_DATA_PREFIX};
use crate::dom::Dom;
use crate::error::PanelError;

/// A hidden source container, keyed by the entity it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentSource<'a> {
    /// `team-members-{team_id}`
    TeamMembers(&'a str),
    /// `data-user-{user_id}`
    UserEnrollments(&'a str),
}

impl FragmentSource<'_> {
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::TeamMembers(team_id) => format!("{TEAM_MEMBERS_PREFIX}{team_id}"),
            Self::UserEnrollments(user_id) => format!("{USER_DATA_PREFIX}{user_id}"),
        }
    }
}

/// Replace `destination`'s markup with the source container's markup.
///
/// # Errors
///
/// [`PanelError::MissingElement`] if either container is absent. The
/// destination is left untouched when the source is missing.
pub fn copy_fragment<D: Dom + ?Sized>(dom: &mut D, source: FragmentSource<'_>, destination: &str) -> Result<(), PanelError> {
    let html = dom.inner_html(&source.element_id())?;
    dom.set_inner_html(destination, &html)
}
