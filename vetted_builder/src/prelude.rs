//! Traits which, typically, may be imported without concern: `use vetted::prelude::*`.

use crate::api::Filter;

/// Behaviour for finishing an optional filter with a default value.
// Needs to be imported in order to call `otherwise`.
pub trait Otherwise<D> {
    /// Set the value to resolve when the argument is absent, and finish the filter.
    fn otherwise(self, default: D) -> Filter;
}
