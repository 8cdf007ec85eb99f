//! Wire models exchanged with the backend.

mod department;
mod registration;

pub use department::Department;
pub use registration::{RegisterRequest, Role};
