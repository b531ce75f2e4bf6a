//! Switches the manage modal between its course and path enrollment forms.

use crate::consts::{ENROLL_COURSE_FORM, ENROLL_PATH_FORM};
use crate::dom::{Display, Dom};
use crate::error::PanelError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnrollForm {
    /// Enroll the student in a single course. Shown when the modal opens.
    #[default]
    Course,
    /// Enroll the student in a learning path.
    Path,
}

impl EnrollForm {
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Course => ENROLL_COURSE_FORM,
            Self::Path => ENROLL_PATH_FORM,
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Course => Self::Path,
            Self::Path => Self::Course,
        }
    }
}

/// Show `form` and hide its sibling.
///
/// # Errors
///
/// [`PanelError::MissingElement`] if either form is absent.
pub fn show_form<D: Dom + ?Sized>(dom: &mut D, form: EnrollForm) -> Result<(), PanelError> {
    dom.set_display(form.element_id(), Display::Block)?;
    dom.set_display(form.other().element_id(), Display::None)
}
