use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, Node, WheelEvent};
use yew::prelude::*;

use super::{close_button::CloseButton, scale_indicator::ScaleIndicator, zoom_controls::ZoomControls};
use crate::model::{ViewerControl, ViewerState};
use crate::state::{route, InputEvent, KeyBindings};
use crate::util::{scale_transform, set_page_scroll_locked};

type Shared<T> = Rc<RefCell<T>>;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomViewerProps {
    pub viewer: UseReducerHandle<ViewerState>,
    pub keys: Rc<KeyBindings>,
}

/// Routes one input against the latest state and dispatches whatever comes
/// out. Returns whether the browser default should be cancelled.
fn dispatch_input(
    viewer: &Shared<UseReducerHandle<ViewerState>>,
    keys: &Shared<Rc<KeyBindings>>,
    event: InputEvent,
) -> bool {
    let handle = viewer.borrow().clone();
    let routed = route(handle.is_open, &event, &keys.borrow());
    if let Some(control) = routed.control {
        handle.dispatch(control.into());
    }
    routed.prevent_default
}

#[function_component(ZoomViewer)]
pub fn zoom_viewer(props: &ZoomViewerProps) -> Html {
    let overlay_ref = use_node_ref();
    let viewer_ref = use_mut_ref(|| props.viewer.clone());
    let keys_ref = use_mut_ref(|| props.keys.clone());

    // Effect: listeners registered once read the latest handle and bindings
    {
        let viewer_ref = viewer_ref.clone();
        use_effect_with(props.viewer.clone(), move |handle| {
            *viewer_ref.borrow_mut() = handle.clone();
            || ()
        });
    }
    {
        let keys_ref = keys_ref.clone();
        use_effect_with(props.keys.clone(), move |keys| {
            *keys_ref.borrow_mut() = keys.clone();
            || ()
        });
    }

    // Effect: page scroll is suspended exactly while the overlay is open
    use_effect_with(props.viewer.is_open, move |open| {
        let open = *open;
        if open {
            set_page_scroll_locked(true);
        }
        move || {
            if open {
                set_page_scroll_locked(false);
            }
        }
    });

    // Global keydown + overlay wheel
    {
        let overlay_ref = overlay_ref.clone();
        let viewer_ref = viewer_ref.clone();
        let keys_ref = keys_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let keydown_cb = {
                let viewer_ref = viewer_ref.clone();
                let keys_ref = keys_ref.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if dispatch_input(&viewer_ref, &keys_ref, InputEvent::Key(e.key())) {
                        e.prevent_default();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            match &window {
                Some(win) => {
                    win.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                        .ok();
                }
                None => log::warn!("no window; keyboard controls disabled"),
            }
            let wheel_cb = {
                let viewer_ref = viewer_ref.clone();
                let keys_ref = keys_ref.clone();
                Closure::wrap(Box::new(move |e: WheelEvent| {
                    let event = InputEvent::Wheel {
                        delta_y: e.delta_y(),
                    };
                    if dispatch_input(&viewer_ref, &keys_ref, event) {
                        e.prevent_default();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let overlay = overlay_ref.cast::<Element>();
            match &overlay {
                Some(el) => {
                    el.add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                        .ok();
                }
                None => log::warn!("overlay not mounted; wheel zoom disabled"),
            }
            // Cleanup
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
                if let Some(el) = &overlay {
                    let _ = el.remove_event_listener_with_callback(
                        "wheel",
                        wheel_cb.as_ref().unchecked_ref(),
                    );
                }
                let _keep_alive = (&keydown_cb, &wheel_cb);
            }
        });
    }

    let on_control = {
        let viewer_ref = viewer_ref.clone();
        let keys_ref = keys_ref.clone();
        Callback::from(move |control: ViewerControl| {
            dispatch_input(&viewer_ref, &keys_ref, InputEvent::Control(control));
        })
    };
    let on_close = on_control.reform(|_: ()| ViewerControl::Close);
    // Yew delegates events to its root, so compare against the overlay node
    // itself rather than `current_target`.
    let on_overlay_click = {
        let overlay_ref = overlay_ref.clone();
        let viewer_ref = viewer_ref.clone();
        let keys_ref = keys_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let on_backdrop = target.is_some() && target == overlay_ref.get();
            dispatch_input(&viewer_ref, &keys_ref, InputEvent::OverlayClick { on_backdrop });
        })
    };

    let state = &*props.viewer;
    let display = if state.is_open { "flex" } else { "none" };
    let src = state.image.as_ref().map(|s| AttrValue::from(s.as_str().to_owned()));
    html! {
        <div ref={overlay_ref}
            class={classes!("image-viewer-overlay", state.is_open.then_some("active"))}
            style={format!("position:fixed; inset:0; z-index:1000; background:rgba(0,0,0,0.9); display:{}; align-items:center; justify-content:center; overflow:hidden;", display)}
            onclick={on_overlay_click}>
            <CloseButton on_close={on_close} />
            <ScaleIndicator scale={state.scale} />
            <div class="image-viewer-container" style="max-width:90vw; max-height:80vh; display:flex; align-items:center; justify-content:center;">
                <img src={src} alt=""
                    style={format!("max-width:90vw; max-height:80vh; transform:{}; transform-origin:center;", scale_transform(state.scale))} />
            </div>
            <ZoomControls on_control={on_control} />
        </div>
    }
}
