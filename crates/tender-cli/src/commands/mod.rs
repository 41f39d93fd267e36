pub mod categories;
pub mod dispatch;
pub mod get;
pub mod query;
pub mod schema;
