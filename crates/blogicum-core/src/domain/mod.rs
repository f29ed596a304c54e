//! Domain entities - the core business objects.

mod category;
mod location;
mod post;
mod publication;
mod slug;
mod user;
pub mod validation;

pub use category::Category;
pub use location::Location;
pub use post::{AuthoredPost, Post};
pub use publication::Publication;
pub use slug::Slug;
pub use user::User;
pub use validation::Validate;
