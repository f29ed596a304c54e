//! # Blogicum Core
//!
//! The domain layer of the blog: categories, locations, posts and their authors.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
