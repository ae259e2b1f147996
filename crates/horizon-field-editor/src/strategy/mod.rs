//! One rendering and coercion policy per field kind.
//!
//! Each strategy renders from the props alone and interprets only the
//! widget events its own control produces. Strategies never call each
//! other; [`crate::dispatcher`] picks one per render.

pub mod boolean;
pub mod lookup;
pub mod temporal;
pub mod text;
