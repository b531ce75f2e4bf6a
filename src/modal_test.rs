use super::*;

// =============================================================
// ModalKind
// =============================================================

#[test]
fn element_ids_match_templates() {
    assert_eq!(ModalKind::Enroll.element_id(), "enrollModal");
    assert_eq!(ModalKind::CreateTeam.element_id(), "createTeamModal");
    assert_eq!(ModalKind::EditTeam.element_id(), "editTeamModal");
    assert_eq!(ModalKind::ManageMembers.element_id(), "manageMembersModal");
    assert_eq!(ModalKind::Manage.element_id(), "manageModal");
}

#[test]
fn element_ids_are_distinct() {
    for (i, a) in ModalKind::ALL.iter().enumerate() {
        for b in &ModalKind::ALL[i + 1..] {
            assert_ne!(a.element_id(), b.element_id());
        }
    }
}

// =============================================================
// ModalState
// =============================================================

#[test]
fn starts_closed() {
    let state = ModalState::new();
    assert_eq!(state.current(), None);
}

#[test]
fn open_then_close() {
    let mut state = ModalState::new();
    assert_eq!(state.open(ModalKind::Enroll), None);
    assert_eq!(state.current(), Some(ModalKind::Enroll));
    assert!(state.close(ModalKind::Enroll));
    assert_eq!(state.current(), None);
}

#[test]
fn open_reports_displaced_modal() {
    let mut state = ModalState::new();
    state.open(ModalKind::EditTeam);
    assert_eq!(state.open(ModalKind::ManageMembers), Some(ModalKind::EditTeam));
    assert_eq!(state.current(), Some(ModalKind::ManageMembers));
    assert_ne!(state.current(), Some(ModalKind::EditTeam));
}

#[test]
fn reopening_same_modal_displaces_nothing() {
    let mut state = ModalState::new();
    state.open(ModalKind::Manage);
    assert_eq!(state.open(ModalKind::Manage), None);
}

#[test]
fn close_of_other_modal_keeps_current() {
    let mut state = ModalState::new();
    state.open(ModalKind::Enroll);
    assert!(!state.close(ModalKind::CreateTeam));
    assert_eq!(state.current(), Some(ModalKind::Enroll));
}

#[test]
fn backdrop_hit_only_matches_open_modal() {
    let mut state = ModalState::new();
    assert_eq!(state.backdrop_hit("enrollModal"), None);
    state.open(ModalKind::Enroll);
    assert_eq!(state.backdrop_hit("enrollModal"), Some(ModalKind::Enroll));
    assert_eq!(state.backdrop_hit("createTeamModal"), None);
    assert_eq!(state.backdrop_hit("modalTitle"), None);
}
