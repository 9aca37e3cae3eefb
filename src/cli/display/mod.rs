//! Display module for formatted CLI output

pub mod colors;
pub mod icons;

pub use colors::ColorTheme;
pub use icons::StatusIcon;
