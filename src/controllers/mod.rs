pub mod interactive;
pub mod viewer;
