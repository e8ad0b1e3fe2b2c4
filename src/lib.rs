pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
#[cfg(feature = "gui")]
pub mod presenters;

pub use controllers::viewer::viewer_config::ViewerConfig;
pub use crate::core::actions::render_plane::{render_plane, render_plane_cancelable};
pub use input::cli::viewer_args::ViewerArgs;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
