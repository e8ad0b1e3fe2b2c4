use crate::core::data::render_params::RenderParams;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Snapshot of everything one render job needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub params: RenderParams,
    pub fractal: FractalKinds,
}
