// Host-side tests for payload parsing and validation.

use sphere_core::items::{ItemStatus, PayloadError, SpherePayload};

fn payload_json(items: usize, columns: u32, rows: u32) -> String {
    let logos: Vec<String> = (0..items)
        .map(|i| {
            format!(
                r#"{{"id":"item-{i}","name":"Item {i}","href":"/integrations/item-{i}",
                    "category":"Automation","status":"Available","spriteIndex":{i}}}"#
            )
        })
        .collect();
    format!(
        r#"{{"logos":[{}],"sprite":{{"url":"/img/integrations.png","tileSize":64,"columns":{columns},"rows":{rows}}}}}"#,
        logos.join(",")
    )
}

#[test]
fn parses_a_full_catalog() {
    let payload = SpherePayload::parse(&payload_json(100, 10, 10)).expect("valid payload");
    assert_eq!(payload.logos.len(), 100);
    assert_eq!(payload.sprite.tile_size, 64);
    assert_eq!(payload.logos[42].sprite_index, 42);
    assert_eq!(payload.logos[0].status, ItemStatus::Available);
}

#[test]
fn status_uses_the_wire_strings() {
    let raw = r##"{"logos":[{"id":"x","name":"X","href":"#x","category":"Data",
        "status":"Coming soon","spriteIndex":0}],
        "sprite":{"url":"/s.png","tileSize":32,"columns":1,"rows":1}}"##;
    let payload = SpherePayload::parse(raw).expect("valid payload");
    assert_eq!(payload.logos[0].status, ItemStatus::ComingSoon);
}

#[test]
fn rejects_invalid_json() {
    assert!(matches!(
        SpherePayload::parse("{not json"),
        Err(PayloadError::Json(_))
    ));
}

#[test]
fn rejects_empty_catalog() {
    assert!(matches!(
        SpherePayload::parse(&payload_json(0, 10, 10)),
        Err(PayloadError::NoItems)
    ));
}

#[test]
fn rejects_undersized_atlas() {
    match SpherePayload::parse(&payload_json(100, 9, 9)) {
        Err(PayloadError::AtlasTooSmall { capacity, items }) => {
            assert_eq!(capacity, 81);
            assert_eq!(items, 100);
        }
        other => panic!("expected AtlasTooSmall, got {other:?}"),
    }
}

#[test]
fn rejects_degenerate_sheet() {
    let raw = r#"{"logos":[{"id":"x","name":"X","href":"/x","category":"Data",
        "status":"Available","spriteIndex":0}],
        "sprite":{"url":"/s.png","tileSize":0,"columns":10,"rows":10}}"#;
    assert!(matches!(
        SpherePayload::parse(raw),
        Err(PayloadError::DegenerateSheet)
    ));
}

#[test]
fn rejects_out_of_range_sprite_index() {
    let raw = r#"{"logos":[{"id":"x","name":"X","href":"/x","category":"Data",
        "status":"Available","spriteIndex":4}],
        "sprite":{"url":"/s.png","tileSize":32,"columns":2,"rows":2}}"#;
    match SpherePayload::parse(raw) {
        Err(PayloadError::SpriteIndexOutOfRange { id, index, capacity }) => {
            assert_eq!(id, "x");
            assert_eq!(index, 4);
            assert_eq!(capacity, 4);
        }
        other => panic!("expected SpriteIndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn rejects_duplicate_ids() {
    let raw = r#"{"logos":[
        {"id":"x","name":"X","href":"/x","category":"Data","status":"Available","spriteIndex":0},
        {"id":"x","name":"X2","href":"/x2","category":"Data","status":"Available","spriteIndex":1}],
        "sprite":{"url":"/s.png","tileSize":32,"columns":2,"rows":2}}"#;
    assert!(matches!(
        SpherePayload::parse(raw),
        Err(PayloadError::DuplicateId(id)) if id == "x"
    ));
}

#[test]
fn id_lookup_covers_every_item() {
    let payload = SpherePayload::parse(&payload_json(25, 5, 5)).expect("valid payload");
    let index = payload.index_by_id();
    assert_eq!(index.len(), 25);
    assert_eq!(index["item-7"], 7);
}
