use std::collections::HashMap;

use crate::model::ViewerControl;

/// Maps `KeyboardEvent.key` values to viewer controls.
///
/// Zoom keys carry a primary and a shifted binding each so that either
/// `+`/`=` or `-`/`_` works regardless of keyboard layout.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    bindings: HashMap<String, ViewerControl>,
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<ViewerControl> {
        self.bindings.get(key).copied()
    }

    pub fn bind(&mut self, key: impl Into<String>, control: ViewerControl) {
        self.bindings.insert(key.into(), control);
    }

    /// Replaces every key bound to `control` with `keys`.
    pub fn rebind(&mut self, control: ViewerControl, keys: &[String]) {
        self.bindings.retain(|_, c| *c != control);
        for key in keys {
            self.bind(key.clone(), control);
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self::empty();
        keys.bind("Escape", ViewerControl::Close);
        keys.bind("+", ViewerControl::ZoomIn);
        keys.bind("=", ViewerControl::ZoomIn);
        keys.bind("-", ViewerControl::ZoomOut);
        keys.bind("_", ViewerControl::ZoomOut);
        keys.bind("0", ViewerControl::Reset);
        keys
    }
}

/// Whether the browser's own handling of the key should be cancelled.
/// Only the zoom keys are swallowed; Escape and reset keep their defaults.
pub fn suppresses_default(control: ViewerControl) -> bool {
    matches!(control, ViewerControl::ZoomIn | ViewerControl::ZoomOut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.get("Escape"), Some(ViewerControl::Close));
        assert_eq!(keys.get("+"), Some(ViewerControl::ZoomIn));
        assert_eq!(keys.get("="), Some(ViewerControl::ZoomIn));
        assert_eq!(keys.get("-"), Some(ViewerControl::ZoomOut));
        assert_eq!(keys.get("_"), Some(ViewerControl::ZoomOut));
        assert_eq!(keys.get("0"), Some(ViewerControl::Reset));
        assert_eq!(keys.get("a"), None);
        assert_eq!(keys.get("Enter"), None);
    }

    #[test]
    fn rebind_replaces_previous_keys() {
        let mut keys = KeyBindings::default();
        keys.rebind(ViewerControl::Reset, &["r".to_string(), "R".to_string()]);
        assert_eq!(keys.get("0"), None);
        assert_eq!(keys.get("r"), Some(ViewerControl::Reset));
        assert_eq!(keys.get("R"), Some(ViewerControl::Reset));
        assert_eq!(keys.get("+"), Some(ViewerControl::ZoomIn));
    }

    #[test]
    fn only_zoom_keys_suppress_default() {
        assert!(suppresses_default(ViewerControl::ZoomIn));
        assert!(suppresses_default(ViewerControl::ZoomOut));
        assert!(!suppresses_default(ViewerControl::Reset));
        assert!(!suppresses_default(ViewerControl::Close));
    }
}
