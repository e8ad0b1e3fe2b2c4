pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod plane_region;
pub mod point;
pub mod render_params;
pub mod render_result;
pub mod sample_grid;
