// Rendering and page helpers shared by the viewer components

/// Human-readable magnification, e.g. `2.5` -> `"250%"`.
pub fn format_percent(scale: f64) -> String {
    format!("{}%", (scale * 100.0).round() as i64)
}

/// CSS transform applied to the displayed image.
pub fn scale_transform(scale: f64) -> String {
    format!("scale({})", scale)
}

pub fn overflow_for(locked: bool) -> &'static str {
    if locked { "hidden" } else { "" }
}

/// Suspends (or restores) background scrolling of the host page.
pub fn set_page_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body());
    match body {
        Some(body) => {
            if body
                .style()
                .set_property("overflow", overflow_for(locked))
                .is_err()
            {
                log::warn!("could not update body overflow");
            }
        }
        None => log::warn!("no document body; scroll lock skipped"),
    }
}
