pub mod dataset;
pub mod mode;

pub use dataset::{ElementDataset, NeedleData, OrnamentData, ORNAMENT_PALETTE};
pub use mode::Mode;
