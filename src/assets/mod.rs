pub mod art;
pub mod data_url;
pub mod fonts;
