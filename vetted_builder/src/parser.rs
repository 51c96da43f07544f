mod interface;
mod printer;
mod tokens;

pub use interface::{ConsoleInterface, UserInterface};
pub(crate) use printer::Printer;
pub use tokens::{tokenize, tokenize_with, Tokens};

#[cfg(test)]
pub(crate) use interface::util;
