use std::collections::HashMap;

use super::*;

impl Dataset for HashMap<&str, &str> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|v| (*v).to_owned())
    }
}

fn edit_button() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("teamId", "7"),
        ("teamName", "Alpha"),
        ("teamDesc", "desc"),
        ("teamSup", "3"),
        ("url", "/teams/7/edit"),
    ])
}

#[test]
fn edit_team_reads_all_keys() {
    let trigger = EditTeamTrigger::from_dataset(&edit_button()).unwrap();
    assert_eq!(
        trigger,
        EditTeamTrigger {
            team_id: "7".into(),
            name: "Alpha".into(),
            description: "desc".into(),
            supervisor_id: "3".into(),
            url: "/teams/7/edit".into(),
        }
    );
}

#[test]
fn edit_team_keeps_empty_values_verbatim() {
    let mut data = edit_button();
    data.insert("teamSup", "");
    data.insert("teamDesc", "");
    let trigger = EditTeamTrigger::from_dataset(&data).unwrap();
    assert_eq!(trigger.supervisor_id, "");
    assert_eq!(trigger.description, "");
}

#[test]
fn edit_team_missing_key_is_named() {
    let mut data = edit_button();
    data.remove("url");
    let err = EditTeamTrigger::from_dataset(&data).unwrap_err();
    assert!(matches!(err, PanelError::MissingAttribute { ref key } if key == "url"));
}

#[test]
fn manage_members_ignores_extra_keys() {
    let trigger = ManageMembersTrigger::from_dataset(&edit_button()).unwrap();
    assert_eq!(trigger.team_id, "7");
    assert_eq!(trigger.team_name, "Alpha");
    assert_eq!(trigger.url, "/teams/7/edit");
}

#[test]
fn require_reports_missing_key() {
    let data = HashMap::from([("teamName", "Beta")]);
    assert_eq!(data.require("teamName").unwrap(), "Beta");
    let err = data.require("teamId").unwrap_err();
    assert_eq!(err.error_code(), "E_MISSING_ATTRIBUTE");
}
