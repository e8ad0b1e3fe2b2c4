//! Interactive controller for background panel rendering.
//!
//! Each panel of the viewer owns one controller. A controller accepts
//! `RenderRequest` snapshots, renders the newest one on a worker thread and
//! hands finished frames to the presentation layer.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `RenderRequest` structs describing what to render
//! - **Output**: `InteractiveControllerPresenterPort` receiving `RenderEvent`s
//! - **Core**: Uses `core::actions::render_plane` for the actual computation

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
