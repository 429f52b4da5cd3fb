//! Static link grid shown whenever the animated sphere cannot run.
//!
//! Built from the same item list and atlas addressing as the canvas path,
//! so every failure mode converges on the same, fully working directory.

use crate::constants::*;
use crate::dom;
use sphere_core::{atlas, ItemStatus, SpherePayload};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Populate the fallback container with one link per item. The grid stays
/// hidden until [`engage`] switches it in.
pub fn build_grid(
    document: &web::Document,
    container: &web::Element,
    payload: &SpherePayload,
) -> anyhow::Result<()> {
    let sheet = &payload.sprite;
    let sheet_w = sheet.columns as u64 * sheet.tile_size as u64;
    let sheet_h = sheet.rows as u64 * sheet.tile_size as u64;

    for item in &payload.logos {
        let anchor: web::HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| anyhow::anyhow!("{e:?}"))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        anchor.set_href(&item.href);
        let mut class = FALLBACK_ITEM_CLASS.to_string();
        if item.status == ItemStatus::ComingSoon {
            class.push(' ');
            class.push_str(COMING_SOON_CLASS);
        }
        anchor.set_class_name(&class);

        let icon = document
            .create_element("span")
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        icon.set_class_name(FALLBACK_ICON_CLASS);
        let tile = atlas::tile_for_index(item.sprite_index, sheet.columns);
        _ = icon.set_attribute(
            "style",
            &format!(
                "width:{t}px;height:{t}px;background-image:url({url});background-position:{pos};background-size:{sheet_w}px {sheet_h}px",
                t = sheet.tile_size,
                url = sheet.url,
                pos = atlas::background_position(tile, sheet.tile_size),
            ),
        );

        let name = document
            .create_element("span")
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        name.set_class_name(FALLBACK_NAME_CLASS);
        name.set_text_content(Some(&item.name));

        _ = anchor.append_child(&icon);
        _ = anchor.append_child(&name);
        _ = container.append_child(&anchor);
    }
    Ok(())
}

/// Switch to the static grid: show the container, hide the canvas. Safe to
/// call on any failure path, including before the grid was populated.
pub fn engage(canvas: Option<&web::HtmlCanvasElement>, container: &web::Element) {
    _ = container.class_list().add_1(FALLBACK_VISIBLE_CLASS);
    _ = container.set_attribute("style", "");
    if let Some(canvas) = canvas {
        dom::hide(canvas);
    }
    log::info!("[sphere] static fallback grid engaged");
}
