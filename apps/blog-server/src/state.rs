//! Application state - shared across all handlers.

/// Shared application state: the repository set built over one connection pool.
///
/// Cloning is cheap; every clone talks to the same pool.
pub type AppState = blogicum_infra::Repositories;
