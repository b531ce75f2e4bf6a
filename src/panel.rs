//! The panel controller: one owner for the page handle and the modal state.
//!
//! ARCHITECTURE
//! ============
//! `Panel` holds everything that does not depend on a real browser, so the
//! whole click-to-mutation path runs natively against
//! [`crate::memory::MemoryDom`]. The browser build wraps a
//! `Panel<BrowserDom>` and forwards each exported JS function to it.
//!
//! Every `open_*` writes the modal's fields first and shows the modal last.
//! The modal state only records a modal as open once it is actually visible,
//! so a failed write leaves nothing half-open.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::chart::{ChartData, ChartRenderer, init_charts};
use crate::config::PanelConfig;
use crate::consts::*;
use crate::dom::{Display, Dom};
use crate::error::PanelError;
use crate::forms::{EnrollForm, show_form};
use crate::fragment::{FragmentSource, copy_fragment};
use crate::modal::{ModalKind, ModalState};
use crate::trigger::{EditTeamTrigger, ManageMembersTrigger};

const ESCAPE_KEY: &str = "Escape";

pub struct Panel<D: Dom> {
    dom: D,
    state: ModalState,
    config: PanelConfig,
}

impl<D: Dom> Panel<D> {
    #[must_use]
    pub fn new(dom: D, config: PanelConfig) -> Self {
        Self { dom, state: ModalState::new(), config }
    }

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// The modal currently open, if any.
    #[must_use]
    pub fn open_modal(&self) -> Option<ModalKind> {
        self.state.current()
    }

    // --- Admin: users ---

    /// Enroll modal for one user: hidden id field plus a titled header.
    ///
    /// # Errors
    ///
    /// [`PanelError::MissingElement`] if the enroll modal markup is absent.
    pub fn open_enroll(&mut self, user_id: &str, username: &str) -> Result<(), PanelError> {
        self.dom.set_value(ENROLL_USER_ID, user_id)?;
        self.dom.set_text(ENROLL_TITLE, &format!("Inscribir a {username} en un curso"))?;
        self.show(ModalKind::Enroll)
    }

    // --- Admin: teams ---

    /// # Errors
    ///
    /// [`PanelError::MissingElement`] if the modal is absent.
    pub fn open_create_team(&mut self) -> Result<(), PanelError> {
        self.show(ModalKind::CreateTeam)
    }

    /// Fill the edit form from the row's trigger and point it at the row's
    /// edit URL.
    ///
    /// # Errors
    ///
    /// [`PanelError::MissingElement`] or [`PanelError::WrongElementKind`]
    /// when the edit form markup does not match.
    pub fn open_edit_team(&mut self, trigger: &EditTeamTrigger) -> Result<(), PanelError> {
        self.dom.set_value(EDIT_TEAM_NAME, &trigger.name)?;
        self.dom.set_value(EDIT_TEAM_DESCRIPTION, &trigger.description)?;
        self.dom.set_value(EDIT_TEAM_SUPERVISOR, &trigger.supervisor_id)?;
        self.dom.set_form_action(EDIT_TEAM_FORM, &trigger.url)?;
        self.show(ModalKind::EditTeam)
    }

    /// Title the members modal, point the add-member form at the team, and
    /// copy the team's pre-rendered member list into the modal.
    ///
    /// # Errors
    ///
    /// [`PanelError::MissingElement`] if the modal markup or the team's
    /// `team-members-{id}` block is absent.
    pub fn open_manage_members(&mut self, trigger: &ManageMembersTrigger) -> Result<(), PanelError> {
        self.dom.set_text(MANAGE_MEMBERS_TITLE, &format!("Miembros de {}", trigger.team_name))?;
        self.dom.set_form_action(ADD_MEMBER_FORM, &trigger.url)?;
        copy_fragment(&mut self.dom, FragmentSource::TeamMembers(&trigger.team_id), MEMBERS_LIST_CONTAINER)?;
        self.show(ModalKind::ManageMembers)
    }

    // --- Supervisor ---

    /// Manage modal for one student. Both enrollment forms get the user id,
    /// current enrollments are copied in, and the course form is shown.
    ///
    /// # Errors
    ///
    /// [`PanelError::MissingElement`] if the modal markup or the student's
    /// `data-user-{id}` block is absent.
    pub fn open_manage(&mut self, user_id: &str, username: &str) -> Result<(), PanelError> {
        self.dom.set_text(MANAGE_TITLE, &format!("Gestionar a {username}"))?;
        self.dom.set_value(ENROLL_COURSE_USER_ID, user_id)?;
        self.dom.set_value(ENROLL_PATH_USER_ID, user_id)?;
        copy_fragment(&mut self.dom, FragmentSource::UserEnrollments(user_id), CURRENT_ENROLLMENTS_CONTAINER)?;
        show_form(&mut self.dom, EnrollForm::default())?;
        self.show(ModalKind::Manage)
    }

    /// # Errors
    ///
    /// [`PanelError::MissingElement`] if either form is absent.
    pub fn show_course_form(&mut self) -> Result<(), PanelError> {
        show_form(&mut self.dom, EnrollForm::Course)
    }

    /// # Errors
    ///
    /// [`PanelError::MissingElement`] if either form is absent.
    pub fn show_path_form(&mut self) -> Result<(), PanelError> {
        show_form(&mut self.dom, EnrollForm::Path)
    }

    // --- Closing ---

    /// Hide `kind`. Closing a modal that is not open still hides its element.
    ///
    /// # Errors
    ///
    /// [`PanelError::MissingElement`] if the modal is absent.
    pub fn close(&mut self, kind: ModalKind) -> Result<(), PanelError> {
        self.dom.set_display(kind.element_id(), Display::None)?;
        if self.state.close(kind) {
            log::debug!("modal: closed #{}", kind.element_id());
        }
        Ok(())
    }

    /// Delegated document click. A click whose target is the open modal's
    /// backdrop (not its content box) closes it. Returns the closed modal.
    ///
    /// # Errors
    ///
    /// [`PanelError::MissingElement`] if the modal vanished from the page.
    pub fn handle_click(&mut self, target_id: &str) -> Result<Option<ModalKind>, PanelError> {
        let Some(kind) = self.state.backdrop_hit(target_id) else {
            return Ok(None);
        };
        self.close(kind)?;
        Ok(Some(kind))
    }

    /// Delegated keydown. Escape closes the open modal unless disabled in
    /// config. Returns the closed modal.
    ///
    /// # Errors
    ///
    /// [`PanelError::MissingElement`] if the modal vanished from the page.
    pub fn handle_key(&mut self, key: &str) -> Result<Option<ModalKind>, PanelError> {
        if key != ESCAPE_KEY || !self.config.escape_closes_modal {
            return Ok(None);
        }
        let Some(kind) = self.state.current() else {
            return Ok(None);
        };
        self.close(kind)?;
        Ok(Some(kind))
    }

    // --- Charts ---

    /// Render the dashboard charts present on the page.
    ///
    /// # Errors
    ///
    /// Propagates renderer failures.
    pub fn init_charts<R: ChartRenderer + ?Sized>(&self, renderer: &mut R, data: &ChartData) -> Result<usize, PanelError> {
        init_charts(&self.dom, renderer, data, self.config.student_chart_limit)
    }

    fn show(&mut self, kind: ModalKind) -> Result<(), PanelError> {
        if let Some(prev) = self.state.current().filter(|prev| *prev != kind) {
            log::warn!("modal: #{} still open while opening #{}, closing it", prev.element_id(), kind.element_id());
            self.close(prev)?;
        }
        self.dom.set_display(kind.element_id(), Display::Flex)?;
        self.state.open(kind);
        log::debug!("modal: opened #{}", kind.element_id());
        Ok(())
    }
}
