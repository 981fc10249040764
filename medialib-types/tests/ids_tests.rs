use medialib_types::{Error, ItemId, MediaTypeId, ViewModeId};
use std::collections::HashSet;
use std::str::FromStr;

// ── ItemId ────────────────────────────────────────────────────────

#[test]
fn item_id_new_is_unique() {
    let ids: HashSet<ItemId> = (0..100).map(|_| ItemId::new()).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn item_id_from_uuid_roundtrip() {
    let uuid = uuid::Uuid::new_v4();
    let id = ItemId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn item_id_display_is_hyphenated_lowercase() {
    let id = ItemId::parse("6C1B2E8A-0D5F-4E3B-9C7A-1F2E3D4C5B6A").unwrap();
    assert_eq!(id.to_string(), "6c1b2e8a-0d5f-4e3b-9c7a-1f2e3d4c5b6a");
}

#[test]
fn item_id_from_str() {
    let id = ItemId::new();
    let parsed = ItemId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn item_id_parse_invalid() {
    assert!(matches!(ItemId::parse("not-a-uuid"), Err(Error::InvalidUuid(_))));
    assert!(matches!(ItemId::parse(""), Err(Error::InvalidUuid(_))));
    assert!(matches!("6c1b2e8a".parse::<ItemId>(), Err(Error::InvalidUuid(_))));
}

#[test]
fn item_id_serde_is_transparent() {
    let id = ItemId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
    let back: ItemId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

// ── Machine names ─────────────────────────────────────────────────

#[test]
fn media_type_id_accepts_machine_names() {
    let id = MediaTypeId::new("arrakis").unwrap();
    assert_eq!(id.as_str(), "arrakis");
    assert_eq!(id.to_string(), "arrakis");
}

#[test]
fn media_type_id_rejects_labels() {
    assert!(MediaTypeId::new("Arrakis").is_err());
    assert!(MediaTypeId::new("").is_err());
    assert!(MediaTypeId::new("remote video").is_err());
}

#[test]
fn view_mode_id_parse() {
    let vm: ViewModeId = "view_mode_1".parse().unwrap();
    assert_eq!(vm.as_str(), "view_mode_1");
}

#[test]
fn machine_name_deserialize_validates() {
    let ok: MediaTypeId = serde_json::from_str("\"image\"").unwrap();
    assert_eq!(ok.as_str(), "image");
    assert!(serde_json::from_str::<MediaTypeId>("\"Not Valid\"").is_err());
}

#[test]
fn machine_names_order_lexically() {
    let a = MediaTypeId::new("arrakis").unwrap();
    let b = MediaTypeId::new("image").unwrap();
    assert!(a < b);
}
