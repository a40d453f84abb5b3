pub mod entity;
pub mod export;
pub mod icons;
pub mod previews;
pub mod raster;
pub mod settings;
pub mod svg;
pub mod text;
