use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render {} failed: {}", self.generation, self.message)
    }
}

impl Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_generation_and_message() {
        let error = RenderError {
            generation: 7,
            message: "iterations 12 exceeds maximum 10".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "render 7 failed: iterations 12 exceeds maximum 10"
        );
    }
}
