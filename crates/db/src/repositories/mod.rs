//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and return raw `sqlx` results.

pub mod product_repo;
pub mod pvz_repo;
pub mod reception_repo;
pub mod user_repo;

pub use product_repo::{ProductRepo, TailDelete};
pub use pvz_repo::PvzRepo;
pub use reception_repo::ReceptionRepo;
pub use user_repo::UserRepo;
