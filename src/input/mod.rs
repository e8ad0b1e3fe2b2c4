//! Input adapters for the fractal viewer.
//!
//! This module contains adapters that receive input from the command line
//! and the window and translate them into domain requests.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
