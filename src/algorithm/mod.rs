pub mod attitude;
pub mod circular;
