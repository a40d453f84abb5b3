pub mod ops;
pub mod panel;
pub mod path;
pub mod record;
pub mod value;
