//! Geometry primitives: points, rectangles, directions and intersection tests

pub mod intersect;
pub mod segment;
pub mod types;

pub use intersect::{
    do_lines_intersect, does_line_intersect_rect, does_path_intersect_rect, is_number_between,
    is_segment_overlap_1d,
};
pub use segment::{intersect_segments, rotation_by_points};
pub use types::*;
