pub mod schema;
pub mod segment;
