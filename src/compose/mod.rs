pub mod draw;
pub mod fit;
pub mod font;
pub mod pass;
