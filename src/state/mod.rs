pub mod keys;
pub mod router;

pub use keys::KeyBindings;
pub use router::{route, InputEvent};
