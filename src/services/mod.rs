pub mod detectors;
pub mod mood;
pub mod recommendations;

pub use mood::normalize;
pub use recommendations::{recommend_for, recommendations_for};
