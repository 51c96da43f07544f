use std::env;

use crate::api::argument::{parse_slug, Check};
use crate::api::command::{Command, Payload};
use crate::api::error::{command_tag, option_tag, DeclarationError, DeclarationErrorKind};
use crate::constant::*;
use crate::parser::{tokenize_with, ConsoleInterface, Printer, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The top level command of a Cli program.
///
/// Reserves `-h, --help` (print the help) and `--version` (print the version, when set).
///
/// ### Example
/// ```
/// # use vetted_builder as vetted;
/// use vetted::{is, prelude::*, Program};
///
/// let mut name = String::default();
/// Program::new("greeter")
///     .version("1.0.0")?
///     .description("Greet someone.")?
///     .value("name", "Who to greet.", is().optional().string().otherwise("world"))?
///     .action(|payload| {
///         name = payload.value("name").map(|v| v.to_string()).unwrap_or_default();
///     })
///     .parse_tokens(&["Alice"])
///     .unwrap();
///
/// assert_eq!(name, "Alice");
/// # Ok::<(), vetted::DeclarationError>(())
/// ```
pub struct Program<'a> {
    name: String,
    version: Option<String>,
    command: Command<'a>,
    user_interface: Box<dyn UserInterface + 'a>,
}

impl<'a> std::fmt::Debug for Program<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("command", &self.command)
            .finish()
    }
}

impl<'a> Program<'a> {
    /// Create a program printing to the console.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            command: Command::new(PROGRAM_SLUG),
            user_interface: Box::new(ConsoleInterface::default()),
        }
    }

    /// Replace the [`UserInterface`] this program prints to.
    pub fn user_interface(mut self, user_interface: impl UserInterface + 'a) -> Self {
        self.user_interface = Box::new(user_interface);
        self
    }

    /// Set the version of this program, printed by `--version`.
    ///
    /// Fails unless the version is semantic (ex: `"1.2.3"`, `"1.0.0-beta+exp.sha.5114f85"`).
    pub fn version(mut self, version: impl Into<String>) -> Result<Self, DeclarationError> {
        let version = version.into();

        if version.starts_with(|c| c == 'v' || c == 'V') {
            return Err(
                DeclarationError::new(DeclarationErrorKind::VersionPrefix).within(&self.tag())
            );
        }

        if !is_semantic_version(&version) {
            return Err(
                DeclarationError::new(DeclarationErrorKind::VersionFormat).within(&self.tag())
            );
        }

        self.version.replace(version);
        Ok(self)
    }

    /// Set the description of this program.
    pub fn description(mut self, description: impl Into<String>) -> Result<Self, DeclarationError> {
        self.command = self.command.description(description)?;
        Ok(self)
    }

    /// Declare an option (see [`Command::option`]).
    ///
    /// Fails when the option uses the reserved `-h`, `--help` or `--version`.
    pub fn option(
        mut self,
        slug: &str,
        description: &str,
        check: impl Into<Check<'a>>,
    ) -> Result<Self, DeclarationError> {
        if let Some((short, name)) = parse_slug(slug) {
            if name == HELP_NAME || name == VERSION_NAME || short == Some(HELP_SHORT) {
                return Err(DeclarationError::new(DeclarationErrorKind::ReservedOption(
                    slug.to_string(),
                ))
                .within(&option_tag(slug))
                .within(&self.tag()));
            }
        }

        self.command = self.command.option(slug, description, check)?;
        Ok(self)
    }

    /// Declare a positional value (see [`Command::value`]).
    pub fn value(
        mut self,
        name: &str,
        description: &str,
        check: impl Into<Check<'a>>,
    ) -> Result<Self, DeclarationError> {
        self.command = self.command.value(name, description, check)?;
        Ok(self)
    }

    /// Set the action to invoke with the resolved [`Payload`].
    pub fn action(mut self, action: impl FnOnce(Payload) + 'a) -> Self {
        self.command = self.command.action(action);
        self
    }

    fn tag(&self) -> String {
        command_tag(PROGRAM_SLUG)
    }

    /// Run the program against the Cli `tokens`.
    ///
    /// Prints the help on `-h`/`--help`, or the version on `--version`, and returns `Err(0)`.
    /// Otherwise runs the command (see [`Command::run`]).
    /// A declaration or run error is printed, returning `Err(1)`.
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<(), i32> {
        let Program {
            name,
            version,
            command,
            user_interface,
        } = self;

        if let Err(error) = command.validate() {
            user_interface.print_error(error.to_string());
            return Err(1);
        }

        let tokens = tokenize_with(tokens, |key| command.takes_value(key));
        let help_short = HELP_SHORT.to_string();
        let requested = |names: &[&str]| {
            tokens
                .options
                .iter()
                .any(|(key, _)| names.iter().any(|name| key.as_str() == *name))
        };

        if requested(&[HELP_NAME, help_short.as_str()]) {
            Printer::terminal().print_help(&name, version.is_some(), &command, &*user_interface);
            return Err(0);
        }

        if let Some(version) = &version {
            if requested(&[VERSION_NAME]) {
                user_interface.print(format!("{name} {version}"));
                return Err(0);
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Running program '{name}'.");
        }

        match command.run(tokens.options, tokens.values, &*user_interface) {
            Ok(()) => Ok(()),
            Err(error) => {
                user_interface.print_error(error.to_string());
                Err(1)
            }
        }
    }

    /// Run the program against the Cli arguments (see [`Program::parse_tokens`]).
    ///
    /// Exits the process with the returned code when there is one.
    pub fn parse(self) {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(()) => {}
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        };
    }
}

fn is_semantic_version(version: &str) -> bool {
    let (version, build) = match version.split_once('+') {
        Some((version, build)) => (version, Some(build)),
        None => (version, None),
    };
    let (core, pre) = match version.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (version, None),
    };
    let identifiers = |text: &str| {
        text.split('.').all(|identifier| {
            !identifier.is_empty()
                && identifier
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
    };
    let numbers: Vec<&str> = core.split('.').collect();

    numbers.len() == 3
        && numbers
            .iter()
            .all(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
        && pre.map_or(true, identifiers)
        && build.map_or(true, identifiers)
}
