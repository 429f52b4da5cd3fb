// DOM contract and render styling for the sphere front-end.
// Feel/physics tuning lives in `sphere_core::SphereConfig`, not here.

// Element ids the page layer provides
pub const CANVAS_ID: &str = "integration-sphere-canvas";
pub const FALLBACK_ID: &str = "integration-sphere-fallback";
pub const PAYLOAD_ID: &str = "integration-sphere-data";

// Class names used by the fallback grid
pub const FALLBACK_VISIBLE_CLASS: &str = "is-visible";
pub const FALLBACK_ITEM_CLASS: &str = "sphere-fallback-item";
pub const FALLBACK_ICON_CLASS: &str = "sphere-fallback-icon";
pub const FALLBACK_NAME_CLASS: &str = "sphere-fallback-name";
pub const COMING_SOON_CLASS: &str = "is-coming-soon";

// Orbit ring backdrop
pub const RING_COLOR: &str = "rgba(148, 163, 184, 0.18)";
pub const RING_LINE_WIDTH: f64 = 1.0;
pub const RING_RADIUS_RATIO: f64 = 1.12; // relative to the sphere radius
pub const RING_SQUASH: f64 = 0.35; // minor/major axis ratio
pub const RING_TILTS: [f64; 2] = [-0.5, 0.6]; // radians

// Depth cue for items that are not yet live
pub const COMING_SOON_ALPHA: f32 = 0.55;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
