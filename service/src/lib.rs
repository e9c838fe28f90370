mod error;
mod mutation;
mod query;
mod schema;

pub use error::*;
pub use mutation::*;
pub use query::*;
pub use schema::*;

pub use sea_orm;
