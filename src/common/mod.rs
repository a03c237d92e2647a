pub mod chooser;
pub mod colors;
pub mod constants;
pub mod grid;
pub mod histogram;
pub mod spectrum;
