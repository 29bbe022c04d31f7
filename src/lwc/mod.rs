pub mod helpers;
pub mod model;
pub mod renderers;
pub mod views;
