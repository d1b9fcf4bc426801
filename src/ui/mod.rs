pub mod hint;
pub mod view;

pub use hint::HintBanner;
pub use view::{MapView, PointSelection, SelectionCallback};
