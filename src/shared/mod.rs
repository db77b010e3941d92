pub mod bounds;
pub mod drawable;
pub mod shape;
