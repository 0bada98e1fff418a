// `window.ImageViewer.show(src)` (and `window.zoomViewer`) for page scripts
// that are not part of this crate.
use js_sys::{Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;
use yew::Callback;

use crate::model::ImageSource;

/// Globals the show API is published under. `ImageViewer` keeps existing
/// page scripts working.
pub const GLOBAL_NAMES: [&str; 2] = ["ImageViewer", "zoomViewer"];

pub struct ShowBridge {
    window: Window,
    installed: Vec<&'static str>,
    _show: Closure<dyn FnMut(JsValue)>,
}

impl ShowBridge {
    pub fn install(window: Window, show: Callback<ImageSource>) -> Option<Self> {
        let show_fn = Closure::wrap(Box::new(move |src: JsValue| match src.as_string() {
            Some(src) if !src.is_empty() => show.emit(ImageSource::from(src)),
            _ => log::warn!("ImageViewer.show expects a non-empty string"),
        }) as Box<dyn FnMut(_)>);

        let api = Object::new();
        Reflect::set(&api, &JsValue::from_str("show"), show_fn.as_ref().unchecked_ref()).ok()?;
        let installed: Vec<&'static str> = GLOBAL_NAMES
            .into_iter()
            .filter(|name| {
                let ok = Reflect::set(&window, &JsValue::from_str(name), &api).is_ok();
                if !ok {
                    log::warn!("could not expose window.{}", name);
                }
                ok
            })
            .collect();
        if installed.is_empty() {
            return None;
        }
        Some(Self {
            window,
            installed,
            _show: show_fn,
        })
    }

    pub fn uninstall(self) {
        for name in &self.installed {
            let _ = Reflect::delete_property(&self.window, &JsValue::from_str(name));
        }
    }
}
