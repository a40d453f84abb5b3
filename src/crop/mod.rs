//! Headless 2:3 crop tool: a draggable, zoomable selection over a contain-fit image.

pub mod export;
pub mod geometry;
