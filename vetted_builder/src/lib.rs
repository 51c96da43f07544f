//! Builder module for `vetted`.
//! See [documentation root](https://docs.rs/vetted/latest/vetted/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{tokenize, tokenize_with, ConsoleInterface, Tokens, UserInterface};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
