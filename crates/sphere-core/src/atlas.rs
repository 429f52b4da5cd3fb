//! Sprite-sheet tile addressing.
//!
//! One mapping feeds both draw paths: the canvas renderer derives its
//! `drawImage` source rect and the static fallback grid derives its CSS
//! `background-position` from the same `(col, row)`, so a failed animation
//! shows exactly the sprite a working one would.

use serde::Deserialize;

/// Metadata for the single pre-baked sprite sheet.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpriteSheetMeta {
    pub url: String,
    /// Square tile edge in pixels.
    pub tile_size: u32,
    pub columns: u32,
    pub rows: u32,
}

impl SpriteSheetMeta {
    #[inline]
    pub fn capacity(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub col: u32,
    pub row: u32,
}

#[inline]
pub fn tile_for_index(index: usize, columns: u32) -> Tile {
    let columns = columns.max(1) as usize;
    Tile {
        col: (index % columns) as u32,
        row: (index / columns) as u32,
    }
}

/// Source rect `(x, y, w, h)` in sheet pixels for `drawImage`.
#[inline]
pub fn source_rect(tile: Tile, tile_size: u32) -> (f64, f64, f64, f64) {
    let t = tile_size as f64;
    (tile.col as f64 * t, tile.row as f64 * t, t, t)
}

/// CSS `background-position` value selecting the same tile.
#[inline]
pub fn background_position(tile: Tile, tile_size: u32) -> String {
    format!(
        "-{}px -{}px",
        tile.col as u64 * tile_size as u64,
        tile.row as u64 * tile_size as u64
    )
}
