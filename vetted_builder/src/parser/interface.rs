/// The output capability used by commands and programs.
///
/// Warnings are the non-fatal notices of [`Command::resolve`](crate::Command::resolve) (ex: an unknown option).
/// Errors are printed by [`Program`](crate::Program) before it exits.
pub trait UserInterface {
    /// Print a regular message (ex: the help).
    fn print(&self, message: String);

    /// Print an error message.
    fn print_error(&self, message: String);

    /// Print a non-fatal warning.
    fn warn(&self, message: String);
}

/// A [`UserInterface`] printing to stdout (messages) and stderr (errors, warnings).
#[derive(Debug, Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }

    fn warn(&self, message: String) {
        eprintln!("Warning: {message}");
    }
}

impl<T: UserInterface + ?Sized> UserInterface for &T {
    fn print(&self, message: String) {
        (**self).print(message);
    }

    fn print_error(&self, message: String) {
        (**self).print_error(message);
    }

    fn warn(&self, message: String) {
        (**self).warn(message);
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::UserInterface;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct InMemoryInterface {
        messages: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
        warnings: RefCell<Vec<String>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            self.messages.borrow_mut().push(message);
        }

        fn print_error(&self, message: String) {
            self.errors.borrow_mut().push(message);
        }

        fn warn(&self, message: String) {
            self.warnings.borrow_mut().push(message);
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> (Option<String>, Option<String>, Vec<String>) {
            let InMemoryInterface {
                messages,
                errors,
                warnings,
            } = self;
            let join = |lines: Vec<String>| {
                if lines.is_empty() {
                    None
                } else {
                    Some(lines.join("\n"))
                }
            };

            (
                join(messages.into_inner()),
                join(errors.into_inner()),
                warnings.into_inner(),
            )
        }

        pub(crate) fn consume_message(self) -> String {
            let (message, error, _) = self.consume();
            assert_eq!(error, None);
            message.unwrap()
        }

        pub(crate) fn consume_error(self) -> String {
            let (message, error, _) = self.consume();
            assert_eq!(message, None);
            error.unwrap()
        }

        pub(crate) fn consume_warnings(self) -> Vec<String> {
            let (_, _, warnings) = self.consume();
            warnings
        }
    }
}
