// Host-side tests for sprite-atlas addressing. The canvas source rect and
// the fallback grid's background-position must come from the same mapping.

use sphere_core::atlas::{background_position, source_rect, tile_for_index, SpriteSheetMeta, Tile};

#[test]
fn index_maps_row_major() {
    let t = tile_for_index(23, 10);
    assert_eq!(t, Tile { col: 3, row: 2 });

    assert_eq!(tile_for_index(0, 10), Tile { col: 0, row: 0 });
    assert_eq!(tile_for_index(9, 10), Tile { col: 9, row: 0 });
    assert_eq!(tile_for_index(10, 10), Tile { col: 0, row: 1 });
    assert_eq!(tile_for_index(99, 10), Tile { col: 9, row: 9 });
}

#[test]
fn source_rect_and_background_position_agree() {
    let tile = tile_for_index(23, 10);
    let (x, y, w, h) = source_rect(tile, 64);
    assert_eq!((x, y, w, h), (192.0, 128.0, 64.0, 64.0));

    // Same tile, CSS form: the offsets are the negated source origin.
    assert_eq!(background_position(tile, 64), "-192px -128px");
}

#[test]
fn origin_tile_has_zero_offsets() {
    let tile = tile_for_index(0, 10);
    assert_eq!(source_rect(tile, 64).0, 0.0);
    assert_eq!(background_position(tile, 64), "-0px -0px");
}

#[test]
fn sheet_capacity() {
    let meta = SpriteSheetMeta {
        url: "/img/integrations.png".into(),
        tile_size: 64,
        columns: 10,
        rows: 10,
    };
    assert_eq!(meta.capacity(), 100);
}
