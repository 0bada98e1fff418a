//! Core state for the zoom viewer.
//! One `ViewerState` lives for the whole page; every command goes through its reducer.

use serde::Deserialize;
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

/// Unmagnified scale. Every open and every reset lands here.
pub const BASELINE_SCALE: f64 = 1.0;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageSource(pub String);

impl ImageSource {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageSource {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ImageSource {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScaleBounds {
    pub min: f64,
    pub max: f64,
    /// Distance between two adjacent zoom levels.
    pub step: f64,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 5.0,
            step: 0.5,
        }
    }
}

impl ScaleBounds {
    /// Index of the grid level nearest to `scale`, counted from the baseline.
    ///
    /// Levels are always recomputed from the baseline rather than accumulated,
    /// so repeated stepping can never drift off the grid or miss a bound.
    fn level_of(&self, scale: f64) -> i64 {
        ((scale - BASELINE_SCALE) / self.step).round() as i64
    }

    fn at_level(&self, level: i64) -> f64 {
        (BASELINE_SCALE + level as f64 * self.step).clamp(self.min, self.max)
    }

    pub fn step_up(&self, scale: f64) -> f64 {
        if scale >= self.max {
            return self.max;
        }
        self.at_level(self.level_of(scale).saturating_add(1))
    }

    pub fn step_down(&self, scale: f64) -> f64 {
        if scale <= self.min {
            return self.min;
        }
        self.at_level(self.level_of(scale).saturating_sub(1))
    }
}

/// The normalized command set. The input router and the page scan only ever
/// talk to the viewer through these.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerAction {
    Show(ImageSource),
    Close,
    ZoomIn,
    ZoomOut,
    Reset,
}

/// Commands that originate inside the overlay: buttons, keys and the wheel.
/// Unlike `Show` they are only honoured while the viewer is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewerControl {
    ZoomIn,
    ZoomOut,
    Reset,
    Close,
}

impl From<ViewerControl> for ViewerAction {
    fn from(control: ViewerControl) -> Self {
        match control {
            ViewerControl::ZoomIn => ViewerAction::ZoomIn,
            ViewerControl::ZoomOut => ViewerAction::ZoomOut,
            ViewerControl::Reset => ViewerAction::Reset,
            ViewerControl::Close => ViewerAction::Close,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    pub is_open: bool,
    /// Current magnification, always within `bounds`.
    pub scale: f64,
    pub bounds: ScaleBounds,
    /// Image on display; `None` while closed.
    pub image: Option<ImageSource>,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(ScaleBounds::default())
    }
}

impl ViewerState {
    pub fn new(bounds: ScaleBounds) -> Self {
        Self {
            is_open: false,
            scale: BASELINE_SCALE,
            bounds,
            image: None,
        }
    }

    /// Applies one command in place. Returns false when the command was
    /// discarded or left the state untouched.
    pub fn apply(&mut self, action: ViewerAction) -> bool {
        use ViewerAction::*;
        if !self.is_open && !matches!(action, Show(_)) {
            return false;
        }
        match action {
            Show(src) => {
                log::debug!("viewer: show {}", src);
                self.image = Some(src);
                self.is_open = true;
                self.scale = BASELINE_SCALE;
                true
            }
            Close => {
                log::debug!("viewer: close at {}", self.scale);
                self.is_open = false;
                self.image = None;
                self.scale = BASELINE_SCALE;
                true
            }
            ZoomIn => self.set_scale(self.bounds.step_up(self.scale)),
            ZoomOut => self.set_scale(self.bounds.step_down(self.scale)),
            Reset => self.set_scale(BASELINE_SCALE),
        }
    }

    fn set_scale(&mut self, next: f64) -> bool {
        if next == self.scale {
            return false;
        }
        log::debug!("viewer: scale {} -> {}", self.scale, next);
        self.scale = next;
        true
    }
}

impl Reducible for ViewerState {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        if new.apply(action) { Rc::new(new) } else { self }
    }
}
