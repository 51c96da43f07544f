use thiserror::Error;

use crate::api::FilterError;

/// The kinds of mistake that can be made while declaring a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeclarationErrorKind {
    /// A description was given as empty text.
    #[error("description cannot be empty.")]
    EmptyDescription,
    /// The command description was never set.
    #[error("description is undefined.")]
    UndefinedDescription,
    /// An option slug or value name was given as empty text.
    #[error("name cannot be empty.")]
    EmptyName,
    /// The option slug is not of the form `-x, --name` or `--name`.
    #[error("slug must look like \"-x, --name\" or \"--name\".")]
    MalformedSlug,
    /// The value name is not a camelCase identifier.
    #[error("name must be a camelCase identifier (ex: \"fileName\").")]
    MalformedName,
    /// Another option already uses this long name.
    #[error("option '--{0}' is already declared.")]
    DuplicateOption(String),
    /// Another option already uses this short letter.
    #[error("option '-{0}' is already declared.")]
    DuplicateShort(char),
    /// Another value already uses this name.
    #[error("value '{0}' is already declared.")]
    DuplicateValue(String),
    /// The option is built into the program.
    #[error("option '{0}' is reserved.")]
    ReservedOption(String),
    /// The version starts with a `v`.
    #[error("version cannot start with a 'v' or 'V'.")]
    VersionPrefix,
    /// The version is not a semantic version.
    #[error("version must be a semantic version (ex: \"1.2.3\").")]
    VersionFormat,
}

/// A mistake in the declaration of a command, option or value.
///
/// The message is prefixed with the context of the mistake, ex: `[Command: "foo"] [Option: "-b, --bar"] description cannot be empty.`
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{context}{kind}")]
pub struct DeclarationError {
    context: String,
    kind: DeclarationErrorKind,
}

impl DeclarationError {
    pub(crate) fn new(kind: DeclarationErrorKind) -> Self {
        Self {
            context: String::default(),
            kind,
        }
    }

    /// Prefix the error with an (outer) context tag.
    pub(crate) fn within(mut self, tag: &str) -> Self {
        self.context.insert_str(0, tag);
        self
    }

    /// The kind of mistake.
    pub fn kind(&self) -> &DeclarationErrorKind {
        &self.kind
    }

    /// The context prefix (ex: `[Command: "foo"] `).
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl From<DeclarationErrorKind> for DeclarationError {
    fn from(kind: DeclarationErrorKind) -> Self {
        DeclarationError::new(kind)
    }
}

/// A failure to resolve an argument during [`Command::run`](crate::Command::run).
#[derive(Debug, Error, PartialEq)]
pub enum RunError {
    /// A filter rejected the argument.
    #[error("{context}{source}")]
    Filter {
        /// The command and argument tags.
        context: String,
        /// The filter failure.
        source: FilterError,
    },
    /// A custom check rejected the argument.
    #[error("{context}{message}")]
    Custom {
        /// The command and argument tags.
        context: String,
        /// The message returned by the custom check.
        message: String,
    },
}

impl RunError {
    /// The command and argument tags (ex: `[Command: "foo"] [Option: "-b, --bar"] `).
    pub fn context(&self) -> &str {
        match self {
            RunError::Filter { context, .. } => context,
            RunError::Custom { context, .. } => context,
        }
    }
}

pub(crate) fn command_tag(slug: &str) -> String {
    if slug == crate::constant::PROGRAM_SLUG {
        "[Program] ".to_string()
    } else {
        format!("[Command: \"{slug}\"] ")
    }
}

pub(crate) fn option_tag(slug: &str) -> String {
    format!("[Option: \"{slug}\"] ")
}

pub(crate) fn value_tag(name: &str) -> String {
    format!("[Value: \"{name}\"] ")
}
