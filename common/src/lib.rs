pub mod builder;
pub mod collaborators;
pub mod error;
pub mod model;
