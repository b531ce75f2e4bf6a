//! The DOM seam.
//!
//! DESIGN
//! ======
//! Panel logic talks to the page only through [`Dom`], addressed by element
//! id. The browser build implements it over `web_sys::Document`; tests and
//! native tooling use [`crate::memory::MemoryDom`]. Every method fails with
//! [`PanelError::MissingElement`] when the id does not resolve, so a template
//! that drifts from the script surfaces as an error instead of a no-op.

use crate::error::PanelError;

/// CSS `display` values the panels toggle between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Flex,
    Block,
}

impl Display {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Flex => "flex",
            Self::Block => "block",
        }
    }

    /// Parse an inline `display` value. Anything else (including empty,
    /// meaning "whatever the stylesheet says") yields `None`.
    #[must_use]
    pub fn from_css(raw: &str) -> Option<Self> {
        match raw.trim() {
            "none" => Some(Self::None),
            "flex" => Some(Self::Flex),
            "block" => Some(Self::Block),
            _ => None,
        }
    }
}

/// Id-addressed access to the page.
pub trait Dom {
    /// Whether an element with `id` exists.
    fn contains(&self, id: &str) -> bool;

    /// Set the inline `display` style.
    ///
    /// # Errors
    ///
    /// [`PanelError::MissingElement`] if `id` does not resolve.
    fn set_display(&mut self, id: &str, display: Display) -> Result<(), PanelError>;

    /// Read the inline `display` style; `None` when unset.
    ///
    /// # Errors
    ///
    /// [`PanelError::MissingElement`] if `id` does not resolve.
    fn display(&self, id: &str) -> Result<Option<Display>, PanelError>;

    /// Set the value of a form field (input, select or textarea).
    ///
    /// # Errors
    ///
    /// [`PanelError::MissingElement`] or [`PanelError::WrongElementKind`].
    fn set_value(&mut self, id: &str, value: &str) -> Result<(), PanelError>;

    /// Replace the rendered text of an element.
    ///
    /// # Errors
    ///
    /// [`PanelError::MissingElement`] if `id` does not resolve.
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), PanelError>;

    /// Point a form's `action` at `url`.
    ///
    /// # Errors
    ///
    /// [`PanelError::MissingElement`] or [`PanelError::WrongElementKind`].
    fn set_form_action(&mut self, id: &str, url: &str) -> Result<(), PanelError>;

    /// Current markup inside an element.
    ///
    /// # Errors
    ///
    /// [`PanelError::MissingElement`] if `id` does not resolve.
    fn inner_html(&self, id: &str) -> Result<String, PanelError>;

    /// Replace the markup inside an element.
    ///
    /// # Errors
    ///
    /// [`PanelError::MissingElement`] if `id` does not resolve.
    fn set_inner_html(&mut self, id: &str, html: &str) -> Result<(), PanelError>;
}
