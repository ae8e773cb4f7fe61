pub mod icons;
pub mod loader;
pub mod theme;
