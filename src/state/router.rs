// Input routing: turns raw overlay input into viewer controls.
use super::keys::{suppresses_default, KeyBindings};
use crate::model::ViewerControl;

/// Raw input from one of the three channels, already stripped of DOM types.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// One of the overlay's buttons (zoom in/out, reset, close).
    Control(ViewerControl),
    /// `KeyboardEvent.key` from the global keydown listener.
    Key(String),
    /// Vertical wheel delta; positive means the wheel moved away from the user.
    Wheel { delta_y: f64 },
    /// A click that reached the overlay; only clicks on the backdrop itself close it.
    OverlayClick { on_backdrop: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Routed {
    pub control: Option<ViewerControl>,
    /// Cancel the browser default for this event.
    pub prevent_default: bool,
}

impl Routed {
    fn ignored() -> Self {
        Self::default()
    }

    fn dispatch(control: ViewerControl, prevent_default: bool) -> Self {
        Self {
            control: Some(control),
            prevent_default,
        }
    }
}

pub fn route(is_open: bool, event: &InputEvent, keys: &KeyBindings) -> Routed {
    // Listeners stay registered while closed; nothing gets through.
    if !is_open {
        return Routed::ignored();
    }
    match event {
        InputEvent::Control(control) => Routed::dispatch(*control, false),
        InputEvent::Key(key) => match keys.get(key) {
            Some(control) => Routed::dispatch(control, suppresses_default(control)),
            None => Routed::ignored(),
        },
        InputEvent::Wheel { delta_y } => {
            let control = if *delta_y > 0.0 {
                ViewerControl::ZoomOut
            } else {
                ViewerControl::ZoomIn
            };
            Routed::dispatch(control, true)
        }
        InputEvent::OverlayClick { on_backdrop: true } => {
            Routed::dispatch(ViewerControl::Close, false)
        }
        InputEvent::OverlayClick { on_backdrop: false } => Routed::ignored(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ViewerAction, ViewerState};

    fn key(k: &str) -> InputEvent {
        InputEvent::Key(k.to_string())
    }

    fn all_events() -> Vec<InputEvent> {
        vec![
            InputEvent::Control(ViewerControl::ZoomIn),
            InputEvent::Control(ViewerControl::ZoomOut),
            InputEvent::Control(ViewerControl::Reset),
            InputEvent::Control(ViewerControl::Close),
            key("Escape"),
            key("+"),
            key("="),
            key("-"),
            key("_"),
            key("0"),
            key("x"),
            InputEvent::Wheel { delta_y: 120.0 },
            InputEvent::Wheel { delta_y: -120.0 },
            InputEvent::OverlayClick { on_backdrop: true },
            InputEvent::OverlayClick { on_backdrop: false },
        ]
    }

    #[test]
    fn closed_viewer_routes_nothing() {
        let keys = KeyBindings::default();
        for event in all_events() {
            assert_eq!(route(false, &event, &keys), Routed::ignored(), "{:?}", event);
        }
    }

    #[test]
    fn buttons_map_one_to_one() {
        let keys = KeyBindings::default();
        for control in [
            ViewerControl::ZoomIn,
            ViewerControl::ZoomOut,
            ViewerControl::Reset,
            ViewerControl::Close,
        ] {
            let routed = route(true, &InputEvent::Control(control), &keys);
            assert_eq!(routed.control, Some(control));
            assert!(!routed.prevent_default);
        }
    }

    #[test]
    fn keyboard_routing() {
        let keys = KeyBindings::default();
        assert_eq!(
            route(true, &key("Escape"), &keys),
            Routed::dispatch(ViewerControl::Close, false)
        );
        for k in ["+", "="] {
            assert_eq!(
                route(true, &key(k), &keys),
                Routed::dispatch(ViewerControl::ZoomIn, true)
            );
        }
        for k in ["-", "_"] {
            assert_eq!(
                route(true, &key(k), &keys),
                Routed::dispatch(ViewerControl::ZoomOut, true)
            );
        }
        assert_eq!(
            route(true, &key("0"), &keys),
            Routed::dispatch(ViewerControl::Reset, false)
        );
        assert_eq!(route(true, &key("ArrowUp"), &keys), Routed::ignored());
    }

    #[test]
    fn wheel_direction() {
        let keys = KeyBindings::default();
        let away = route(true, &InputEvent::Wheel { delta_y: 53.0 }, &keys);
        assert_eq!(away, Routed::dispatch(ViewerControl::ZoomOut, true));
        let toward = route(true, &InputEvent::Wheel { delta_y: -53.0 }, &keys);
        assert_eq!(toward, Routed::dispatch(ViewerControl::ZoomIn, true));
        let flat = route(true, &InputEvent::Wheel { delta_y: 0.0 }, &keys);
        assert_eq!(flat, Routed::dispatch(ViewerControl::ZoomIn, true));
    }

    #[test]
    fn only_backdrop_clicks_close() {
        let keys = KeyBindings::default();
        assert_eq!(
            route(true, &InputEvent::OverlayClick { on_backdrop: true }, &keys),
            Routed::dispatch(ViewerControl::Close, false)
        );
        assert_eq!(
            route(true, &InputEvent::OverlayClick { on_backdrop: false }, &keys),
            Routed::ignored()
        );
    }

    fn drive(state: &mut ViewerState, event: InputEvent, keys: &KeyBindings) {
        if let Some(control) = route(state.is_open, &event, keys).control {
            state.apply(control.into());
        }
    }

    #[test]
    fn wheel_matches_button_zoom() {
        let keys = KeyBindings::default();
        let mut by_wheel = ViewerState::default();
        let mut by_button = ViewerState::default();
        by_wheel.apply(ViewerAction::Show("a.png".into()));
        by_button.apply(ViewerAction::Show("a.png".into()));

        drive(&mut by_wheel, InputEvent::Wheel { delta_y: 100.0 }, &keys);
        drive(&mut by_button, InputEvent::Control(ViewerControl::ZoomOut), &keys);
        assert_eq!(by_wheel, by_button);
        assert_eq!(by_wheel.scale, 0.5);

        drive(&mut by_wheel, InputEvent::Wheel { delta_y: -100.0 }, &keys);
        drive(&mut by_button, InputEvent::Control(ViewerControl::ZoomIn), &keys);
        assert_eq!(by_wheel, by_button);
        assert_eq!(by_wheel.scale, 1.0);
    }

    #[test]
    fn full_session() {
        let keys = KeyBindings::default();
        let mut s = ViewerState::default();
        drive(&mut s, key("+"), &keys);
        assert_eq!(s.scale, 1.0);

        s.apply(ViewerAction::Show("imgA.png".into()));
        for _ in 0..4 {
            drive(&mut s, key("="), &keys);
        }
        assert_eq!(s.scale, 3.0);
        drive(&mut s, InputEvent::OverlayClick { on_backdrop: false }, &keys);
        assert!(s.is_open);
        drive(&mut s, key("Escape"), &keys);
        assert!(!s.is_open);
        assert_eq!(s.scale, 1.0);

        drive(&mut s, InputEvent::Wheel { delta_y: -1.0 }, &keys);
        assert_eq!(s.scale, 1.0);
        s.apply(ViewerAction::Show("imgB.png".into()));
        assert_eq!(s.scale, 1.0);
    }
}
