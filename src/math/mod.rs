pub mod matrix;
pub mod point3;
pub mod scalar;
