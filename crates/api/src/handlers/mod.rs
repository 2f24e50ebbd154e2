pub mod flows;
pub mod models;
