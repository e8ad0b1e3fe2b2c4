use crate::core::data::render_result::RenderResult;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub result: RenderResult,
    pub render_duration: Duration,
}
