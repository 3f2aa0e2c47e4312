pub mod error;
pub mod model;
pub mod schema;
pub mod traits;
