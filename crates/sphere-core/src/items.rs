//! Payload model: the item catalog and sprite metadata handed over by the
//! page layer, parsed once at mount.

use crate::atlas::SpriteSheetMeta;
use fnv::FnvHashMap;
use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum ItemStatus {
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "Coming soon")]
    ComingSoon,
}

/// One integration entry. Immutable after load; the sphere only reads it.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationItem {
    pub id: String,
    pub name: String,
    pub href: String,
    pub category: String,
    pub status: ItemStatus,
    pub sprite_index: usize,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SpherePayload {
    pub logos: Vec<IntegrationItem>,
    pub sprite: SpriteSheetMeta,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload contains no items")]
    NoItems,
    #[error("sprite sheet has a zero dimension (tileSize/columns/rows)")]
    DegenerateSheet,
    #[error("atlas holds {capacity} tiles but {items} items were provided")]
    AtlasTooSmall { capacity: usize, items: usize },
    #[error("item `{id}` has sprite index {index}, atlas capacity is {capacity}")]
    SpriteIndexOutOfRange {
        id: String,
        index: usize,
        capacity: usize,
    },
    #[error("duplicate item id `{0}`")]
    DuplicateId(String),
}

impl SpherePayload {
    /// Parse and validate the embedded JSON payload.
    pub fn parse(raw: &str) -> Result<Self, PayloadError> {
        let payload: SpherePayload = serde_json::from_str(raw)?;
        payload.validate()?;
        Ok(payload)
    }

    pub fn validate(&self) -> Result<(), PayloadError> {
        if self.logos.is_empty() {
            return Err(PayloadError::NoItems);
        }
        if self.sprite.tile_size == 0 || self.sprite.columns == 0 || self.sprite.rows == 0 {
            return Err(PayloadError::DegenerateSheet);
        }
        let capacity = self.sprite.capacity();
        if capacity < self.logos.len() {
            return Err(PayloadError::AtlasTooSmall {
                capacity,
                items: self.logos.len(),
            });
        }
        let mut seen: FnvHashMap<&str, usize> = FnvHashMap::default();
        for (i, item) in self.logos.iter().enumerate() {
            if item.sprite_index >= capacity {
                return Err(PayloadError::SpriteIndexOutOfRange {
                    id: item.id.clone(),
                    index: item.sprite_index,
                    capacity,
                });
            }
            if seen.insert(item.id.as_str(), i).is_some() {
                return Err(PayloadError::DuplicateId(item.id.clone()));
            }
        }
        Ok(())
    }

    /// Lookup table from item id to slot index, used for hash navigation.
    pub fn index_by_id(&self) -> FnvHashMap<&str, usize> {
        self.logos
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id.as_str(), i))
            .collect()
    }
}
