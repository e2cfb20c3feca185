pub mod bounds;
pub mod hit_testing;

pub use bounds::{compute_bounds, view_box};
pub use hit_testing::contains_point;
