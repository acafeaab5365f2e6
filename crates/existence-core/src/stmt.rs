//! Values read from records and passed to drivers.

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
