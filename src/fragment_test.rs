use super::*;
use crate::memory::{ElementKind, MemoryDom};

fn page() -> MemoryDom {
    MemoryDom::new()
        .with("membersListContainer", ElementKind::Container)
        .with_fragment("team-members-1", "<li>ana</li><li>luis</li>")
        .with_fragment("team-members-2", "<li>sofia</li>")
}

#[test]
fn element_ids_follow_template_prefixes() {
    assert_eq!(FragmentSource::TeamMembers("12").element_id(), "team-members-12");
    assert_eq!(FragmentSource::UserEnrollments("42").element_id(), "data-user-42");
}

#[test]
fn copy_moves_markup_verbatim() {
    let mut dom = page();
    copy_fragment(&mut dom, FragmentSource::TeamMembers("1"), "membersListContainer").unwrap();
    assert_eq!(dom.inner_html("membersListContainer").unwrap(), "<li>ana</li><li>luis</li>");
    // Source keeps its markup.
    assert_eq!(dom.inner_html("team-members-1").unwrap(), "<li>ana</li><li>luis</li>");
}

#[test]
fn second_copy_replaces_first() {
    let mut dom = page();
    copy_fragment(&mut dom, FragmentSource::TeamMembers("1"), "membersListContainer").unwrap();
    copy_fragment(&mut dom, FragmentSource::TeamMembers("2"), "membersListContainer").unwrap();
    assert_eq!(dom.inner_html("membersListContainer").unwrap(), "<li>sofia</li>");
}

#[test]
fn missing_source_leaves_destination_untouched() {
    let mut dom = page();
    copy_fragment(&mut dom, FragmentSource::TeamMembers("1"), "membersListContainer").unwrap();
    let err = copy_fragment(&mut dom, FragmentSource::TeamMembers("9"), "membersListContainer").unwrap_err();
    assert!(matches!(err, PanelError::MissingElement { ref id } if id == "team-members-9"));
    assert_eq!(dom.inner_html("membersListContainer").unwrap(), "<li>ana</li><li>luis</li>");
}

#[test]
fn missing_destination_is_error() {
    let mut dom = page();
    assert!(copy_fragment(&mut dom, FragmentSource::TeamMembers("1"), "nowhere").is_err());
}
