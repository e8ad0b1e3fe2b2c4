//! GUI input adapter for the two-panel viewer.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for the controls strip.

pub mod app;
pub mod commands;
pub mod errors;
pub mod events;
