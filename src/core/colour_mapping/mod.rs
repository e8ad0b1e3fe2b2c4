pub mod errors;
pub mod hsb;
pub mod hsb_rainbow;
