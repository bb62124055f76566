//! SeaORM entity definitions for the gitlab-monitor database schema.

pub mod commit;
pub mod prelude;
pub mod project;
pub mod visibility;
