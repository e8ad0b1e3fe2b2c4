//! Toolkit-independent half of the two-panel viewer: startup config, the
//! draw form, panel layout and the state that turns draws and clicks into
//! render requests.

pub mod form;
pub mod layout;
pub mod state;
pub mod viewer_config;
