// Page scan: wires every zoomable image already in the host page to `show`.
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlImageElement, MouseEvent};
use yew::Callback;

use crate::model::ImageSource;

pub const ZOOMABLE_SELECTOR: &str = ".product-image img, .gallery-image img, [data-zoom]";

/// Optional alternative (usually higher resolution) source. `data-zoom`
/// itself only marks an element as zoomable; its value is never a URL.
pub const ZOOM_SOURCE_ATTR: &str = "data-zoom-src";

/// Picks the source to display: a non-empty `data-zoom-src` value wins over
/// the element's own image source. `attr` looks up an attribute by name.
pub fn pick_source(
    attr: impl Fn(&str) -> Option<String>,
    image_src: Option<&str>,
) -> Option<ImageSource> {
    let non_empty = |s: &&str| !s.trim().is_empty();
    let zoom_src = attr(ZOOM_SOURCE_ATTR);
    zoom_src
        .as_deref()
        .filter(non_empty)
        .or(image_src.filter(non_empty))
        .map(|s| ImageSource::from(s.trim()))
}

fn source_of(el: &Element) -> Option<ImageSource> {
    let image_src = el.dyn_ref::<HtmlImageElement>().map(|img| {
        let current = img.current_src();
        if current.is_empty() { img.src() } else { current }
    });
    pick_source(|name| el.get_attribute(name), image_src.as_deref())
}

/// Live click listeners added by [`bind_zoomable_images`].
pub struct ZoomableBindings {
    targets: Vec<EventTarget>,
    on_click: Closure<dyn FnMut(MouseEvent)>,
}

impl ZoomableBindings {
    pub fn unbind(self) {
        for target in &self.targets {
            let _ = target
                .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
        }
    }
}

pub fn bind_zoomable_images(document: &Document, show: Callback<ImageSource>) -> ZoomableBindings {
    let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
        let Some(el) = e
            .current_target()
            .and_then(|t| t.dyn_into::<Element>().ok())
        else {
            return;
        };
        e.prevent_default();
        e.stop_propagation();
        match source_of(&el) {
            Some(src) => show.emit(src),
            None => log::warn!("zoomable element has no image source"),
        }
    }) as Box<dyn FnMut(_)>);

    let mut targets = Vec::new();
    match document.query_selector_all(ZOOMABLE_SELECTOR) {
        Ok(list) => {
            for i in 0..list.length() {
                let Some(node) = list.item(i) else { continue };
                let Ok(el) = node.dyn_into::<Element>() else { continue };
                if el
                    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                    .is_ok()
                {
                    targets.push(el.unchecked_into::<EventTarget>());
                }
            }
        }
        Err(_) => log::warn!("zoomable selector rejected: {}", ZOOMABLE_SELECTOR),
    }
    log::info!("bound {} zoomable images", targets.len());
    ZoomableBindings { targets, on_click }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn zoom_src_attribute_wins() {
        let el = [("data-zoom", ""), ("data-zoom-src", "large.jpg")];
        assert_eq!(
            pick_source(attrs(&el), Some("thumb.jpg")),
            Some(ImageSource::from("large.jpg"))
        );
    }

    #[test]
    fn data_zoom_flag_value_is_not_a_source() {
        for flag in ["true", "1", "yes"] {
            let el = [("data-zoom", flag)];
            assert_eq!(
                pick_source(attrs(&el), Some("http://x/photo.jpg")),
                Some(ImageSource::from("http://x/photo.jpg"))
            );
        }
    }

    #[test]
    fn falls_back_to_image_src() {
        let el = [("data-zoom-src", "")];
        assert_eq!(
            pick_source(attrs(&el), Some("thumb.jpg")),
            Some(ImageSource::from("thumb.jpg"))
        );
        assert_eq!(
            pick_source(attrs(&[]), Some("thumb.jpg")),
            Some(ImageSource::from("thumb.jpg"))
        );
    }

    #[test]
    fn nothing_to_show() {
        assert_eq!(pick_source(attrs(&[]), None), None);
        let el = [("data-zoom-src", "  ")];
        assert_eq!(pick_source(attrs(&el), Some("")), None);
    }
}
