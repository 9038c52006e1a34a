pub mod hours;
pub mod summary;
pub mod target;
