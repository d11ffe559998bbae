// Document text acquisition: positioned-fragment linearization and repair of
// extraction artifacts. Everything downstream consumes the plain string this
// module produces.

pub mod layout;
pub mod normalize;

pub use layout::{linearize_pages, PositionedFragment};
pub use normalize::normalize_text;
