//! Browser page glue
//!
//! The keypad, a mock DOM and the page wiring that turns clicks and key
//! presses into evaluator calls. Nothing here needs a browser.

mod app;
mod dom;
mod keypad;

pub use app::KeypadApp;
pub use dom::{DomDisplay, DomElement, DomEvent, MockDom, DISPLAY_ID};
pub use keypad::{Keypad, KeypadAction, KeypadButtonDef, MockDomKeypadExt};
