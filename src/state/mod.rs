//! Page state models, one per behaviour.
//!
//! DESIGN
//! ======
//! Each module is plain data plus pure transitions. Nothing here touches the
//! DOM; the browser layer feeds values in and applies the resulting effects,
//! so every rule can be exercised by native unit tests.

pub mod form;
pub mod greeting;
pub mod header;
pub mod nav;
pub mod reveal;
pub mod theme;
