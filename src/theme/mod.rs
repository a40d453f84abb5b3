pub mod labels;
pub mod tokens;
