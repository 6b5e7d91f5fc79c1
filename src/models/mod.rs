pub mod options;
pub mod section;
