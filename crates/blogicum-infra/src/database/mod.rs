//! Database connection management and repositories.

mod base_repo;
mod connections;
mod errors;
mod repositories;

pub mod entity;

pub use base_repo::SeaOrmRepository;
pub use connections::{DatabaseConfig, connect};
pub use repositories::{
    Repositories, SeaOrmCategoryRepository, SeaOrmLocationRepository, SeaOrmPostRepository,
    SeaOrmUserRepository,
};

#[cfg(test)]
mod tests;
