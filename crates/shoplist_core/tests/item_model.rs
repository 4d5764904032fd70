//! Item model behavior: construction defaults, state flips, wire shape.

use shoplist_core::{Item, ItemId};

#[test]
fn new_items_start_unchecked_with_fresh_ids() {
    let apples = Item::new("apples");
    let oranges = Item::new("oranges");

    assert_eq!(apples.name, "apples");
    assert!(!apples.checked);
    assert_ne!(apples.id, oranges.id);
}

#[test]
fn names_are_kept_verbatim() {
    let padded = Item::new("  milk  ");
    assert_eq!(padded.name, "  milk  ");

    let empty = Item::new("");
    assert_eq!(empty.name, "");
}

#[test]
fn toggle_flips_checked_both_ways() {
    let mut item = Item::new("bread");

    item.toggle();
    assert!(item.checked);

    item.toggle();
    assert!(!item.checked);
}

#[test]
fn rename_replaces_name_and_keeps_id_and_state() {
    let mut item = Item::new("bred");
    item.toggle();
    let id = item.id;

    item.rename("bread");

    assert_eq!(item.name, "bread");
    assert_eq!(item.id, id);
    assert!(item.checked);
}

#[test]
fn serde_wire_shape_is_stable() {
    let id: ItemId = uuid::Uuid::nil();
    let item = Item::with_id(id, "milk", true);

    let wire = serde_json::to_value(&item).expect("item should serialize");
    assert_eq!(
        wire,
        serde_json::json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "milk",
            "checked": true,
        })
    );

    let back: Item = serde_json::from_value(wire).expect("item should deserialize");
    assert_eq!(back, item);
}
