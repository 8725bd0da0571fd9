//! Rendering resources

pub mod materials;
