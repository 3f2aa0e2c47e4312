pub mod clipboard;
pub mod render;
pub mod theme;
