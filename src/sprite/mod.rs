mod loader;
mod region;
mod trimmer;

pub use loader::load_sheet;
pub use region::{Rect, RegionRule};
pub use trimmer::{opaque_bounds, trim_sprite};
