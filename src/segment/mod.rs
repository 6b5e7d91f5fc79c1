pub mod classifier;
pub mod segmenter;
