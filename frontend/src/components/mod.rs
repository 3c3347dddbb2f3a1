pub mod popup;
pub mod segment_builder;
