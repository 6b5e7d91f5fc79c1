pub mod assets;
pub mod html;
pub mod markdown;
