//! Screen state for the settings screen and the image info sheet.

pub mod mvi;
pub mod settings;
pub mod sheet;
