use crate::hint::DomHooks;
use celestial_core::SceneController;
use std::cell::RefCell;
use std::rc::Rc;

mod keyboard;
mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};

/// The page's one scene, shared between listeners and the frame loop.
pub type SharedScene = Rc<RefCell<SceneController<DomHooks>>>;
