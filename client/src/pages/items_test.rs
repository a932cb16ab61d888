use super::*;

#[test]
fn dialog_title_switches_on_mode() {
    assert_eq!(dialog_title(false), "Create New Item");
    assert_eq!(dialog_title(true), "Edit Item");
}

#[test]
fn dialog_description_switches_on_mode() {
    assert_eq!(dialog_description(false), "Add a new item to your collection.");
    assert_eq!(dialog_description(true), "Make changes to your item here.");
}

#[test]
fn submit_label_switches_on_mode() {
    assert_eq!(submit_label(false), "Create");
    assert_eq!(submit_label(true), "Update");
}
