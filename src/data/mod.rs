pub mod dataset;
#[cfg(feature = "assets")]
pub mod image_meta;
pub mod levels;
pub mod points;

pub use dataset::MapDataset;
pub use levels::FloodLevels;
pub use points::{MapPoint, Region, ZoomTarget};
