//! CLI command implementations

pub mod check;
pub mod layouts;
pub mod locate;
pub mod render;
