//! In-memory [`Dom`] used by native tests and tooling.
//!
//! Elements are plain records keyed by id. The page constructors mirror the
//! skeleton the admin and supervisor templates render, so handlers can be
//! exercised end to end without a browser.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashMap;

use crate::consts::*;
use crate::dom::{Display, Dom};
use crate::error::PanelError;

/// What an element accepts beyond style, text and markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `<div>` and friends.
    Container,
    /// `<input>`, `<select>` or `<textarea>`: has a value.
    Field,
    /// `<form>`: has an action.
    Form,
    /// `<canvas>` used as a chart mount point.
    Canvas,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryElement {
    pub kind: ElementKind,
    pub display: Option<Display>,
    pub value: String,
    pub text: String,
    pub action: String,
    pub html: String,
}

impl MemoryElement {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            display: None,
            value: String::new(),
            text: String::new(),
            action: String::new(),
            html: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    elements: HashMap<String, MemoryElement>,
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, id: &str, kind: ElementKind) -> Self {
        self.insert(id, kind);
        self
    }

    /// Add a hidden container pre-filled with server markup.
    #[must_use]
    pub fn with_fragment(mut self, id: &str, html: &str) -> Self {
        let el = self.insert(id, ElementKind::Container);
        el.display = Some(Display::None);
        el.html = html.to_owned();
        self
    }

    pub fn insert(&mut self, id: &str, kind: ElementKind) -> &mut MemoryElement {
        self.elements
            .entry(id.to_owned())
            .or_insert_with(|| MemoryElement::new(kind))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    /// Skeleton of the admin users and teams pages: enroll, create-team,
    /// edit-team and manage-members modals with their fields.
    #[must_use]
    pub fn admin_page() -> Self {
        Self::new()
            .with(ENROLL_MODAL, ElementKind::Container)
            .with(ENROLL_USER_ID, ElementKind::Field)
            .with(ENROLL_TITLE, ElementKind::Container)
            .with(CREATE_TEAM_MODAL, ElementKind::Container)
            .with(EDIT_TEAM_MODAL, ElementKind::Container)
            .with(EDIT_TEAM_NAME, ElementKind::Field)
            .with(EDIT_TEAM_DESCRIPTION, ElementKind::Field)
            .with(EDIT_TEAM_SUPERVISOR, ElementKind::Field)
            .with(EDIT_TEAM_FORM, ElementKind::Form)
            .with(MANAGE_MEMBERS_MODAL, ElementKind::Container)
            .with(MANAGE_MEMBERS_TITLE, ElementKind::Container)
            .with(ADD_MEMBER_FORM, ElementKind::Form)
            .with(MEMBERS_LIST_CONTAINER, ElementKind::Container)
    }

    /// Skeleton of the supervisor panel: the manage modal, its two
    /// enrollment forms, and the three chart mount points.
    #[must_use]
    pub fn supervisor_page() -> Self {
        Self::new()
            .with(MANAGE_MODAL, ElementKind::Container)
            .with(MANAGE_TITLE, ElementKind::Container)
            .with(ENROLL_COURSE_USER_ID, ElementKind::Field)
            .with(ENROLL_PATH_USER_ID, ElementKind::Field)
            .with(CURRENT_ENROLLMENTS_CONTAINER, ElementKind::Container)
            .with(ENROLL_COURSE_FORM, ElementKind::Form)
            .with(ENROLL_PATH_FORM, ElementKind::Form)
            .with(TIMELINE_CHART, ElementKind::Canvas)
            .with(COURSE_CHART, ElementKind::Canvas)
            .with(STUDENT_CHART, ElementKind::Canvas)
    }

    fn element(&self, id: &str) -> Result<&MemoryElement, PanelError> {
        self.elements.get(id).ok_or_else(|| PanelError::missing(id))
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut MemoryElement, PanelError> {
        self.elements.get_mut(id).ok_or_else(|| PanelError::missing(id))
    }
}

impl Dom for MemoryDom {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_display(&mut self, id: &str, display: Display) -> Result<(), PanelError> {
        self.element_mut(id)?.display = Some(display);
        Ok(())
    }

    fn display(&self, id: &str) -> Result<Option<Display>, PanelError> {
        Ok(self.element(id)?.display)
    }

    fn set_value(&mut self, id: &str, value: &str) -> Result<(), PanelError> {
        let el = self.element_mut(id)?;
        if el.kind != ElementKind::Field {
            return Err(PanelError::WrongElementKind { id: id.to_owned(), expected: "form field" });
        }
        value.clone_into(&mut el.value);
        Ok(())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), PanelError> {
        let el = self.element_mut(id)?;
        text.clone_into(&mut el.text);
        text.clone_into(&mut el.html);
        Ok(())
    }

    fn set_form_action(&mut self, id: &str, url: &str) -> Result<(), PanelError> {
        let el = self.element_mut(id)?;
        if el.kind != ElementKind::Form {
            return Err(PanelError::WrongElementKind { id: id.to_owned(), expected: "form" });
        }
        url.clone_into(&mut el.action);
        Ok(())
    }

    fn inner_html(&self, id: &str) -> Result<String, PanelError> {
        Ok(self.element(id)?.html.clone())
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> Result<(), PanelError> {
        html.clone_into(&mut self.element_mut(id)?.html);
        Ok(())
    }
}
