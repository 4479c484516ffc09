mod field;
mod inverse;
mod modular;
mod montgomery;
mod point;

pub use field::FieldElement;
pub use modular::mul_mod_u256;
pub use montgomery::Montgomery;
pub use point::AffinePoint;
