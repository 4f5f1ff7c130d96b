pub mod auth;
pub mod products;
pub mod pvz;
pub mod receptions;
