use super::zoom_viewer::ZoomViewer;
use crate::bridge::ShowBridge;
use crate::config::ViewerConfig;
use crate::model::{ImageSource, ViewerAction, ViewerState};
use crate::scan::bind_zoomable_images;
use yew::prelude::*;

/// Composition root: owns the single viewer state for the page and hands
/// out its `show` entry point.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| ViewerConfig::load_from_page());
    let viewer = {
        let bounds = config.scale;
        use_reducer(move || ViewerState::new(bounds))
    };
    let keys = {
        let config = config.clone();
        use_memo((), move |_| config.key_bindings())
    };

    // Bind zoomable page images and expose window.zoomViewer
    {
        let viewer = viewer.clone();
        use_effect_with((), move |_| {
            let show = Callback::from(move |src: ImageSource| {
                viewer.dispatch(ViewerAction::Show(src));
            });
            let window = web_sys::window();
            let bindings = window
                .as_ref()
                .and_then(|win| win.document())
                .map(|doc| bind_zoomable_images(&doc, show.clone()));
            let bridge = window.and_then(|win| ShowBridge::install(win, show));
            move || {
                if let Some(bindings) = bindings {
                    bindings.unbind();
                }
                if let Some(bridge) = bridge {
                    bridge.uninstall();
                }
            }
        });
    }

    html! { <ZoomViewer viewer={viewer} keys={keys} /> }
}
