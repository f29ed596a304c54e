//! SeaORM entities - one module per table.

use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveValue, NotSet, Set};

pub mod category;
pub mod location;
pub mod post;
pub mod user;

/// Fill `created_at` on insert and keep it out of every UPDATE.
pub(crate) fn stamp_created_at(created_at: &mut ActiveValue<DateTimeWithTimeZone>, insert: bool) {
    if !insert {
        *created_at = NotSet;
    } else if created_at.is_not_set() {
        *created_at = Set(chrono::Utc::now().into());
    }
}
