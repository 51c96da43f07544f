mod argument;
mod command;
mod error;
mod filter;
mod program;

pub use argument::{Callback, Check};
pub(crate) use argument::{CliOption, CliValue};
pub use command::{Command, Payload};
pub use error::{DeclarationError, DeclarationErrorKind, RunError};
pub use filter::{
    is, BooleanStage, Bound, Filter, FilterError, Is, ListStage, Mandatory, NumberStage,
    Obligation, Optional, StringStage, TypeStage, Validator,
};
pub use program::Program;
