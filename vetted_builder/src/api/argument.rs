use crate::api::error::{option_tag, value_tag, DeclarationError, DeclarationErrorKind, RunError};
use crate::api::filter::{BooleanStage, ListStage, NumberStage, Obligation, StringStage};
use crate::api::Filter;
use crate::model::{Kind, Raw, Value};

/// A user supplied check, receiving the raw input (`None` when the argument was not supplied).
pub type Callback<'a> = Box<dyn Fn(Option<&Raw>) -> Result<Value, String> + 'a>;

/// How a declared option/value resolves its raw input.
///
/// Any stage of the filter Dsl converts into a `Check`, except for the obligation root and the type stage:
/// ```compile_fail
/// # use vetted_builder as vetted;
/// use vetted::{is, Command};
///
/// Command::new("program").option("-b, --bar", "Bar.", is().mandatory()).unwrap();
/// ```
#[derive(Default)]
pub enum Check<'a> {
    /// Pass the raw input through unchanged (null when absent).
    #[default]
    Pass,
    /// Evaluate a [`Filter`].
    Filter(Filter),
    /// Evaluate a user [`Callback`].
    Custom(Callback<'a>),
}

impl<'a> Check<'a> {
    /// Create a custom check.
    ///
    /// ### Example
    /// ```
    /// # use vetted_builder as vetted;
    /// use vetted::{Check, Raw, Value};
    ///
    /// let check = Check::custom(|raw: Option<&Raw>| match raw {
    ///     Some(Raw::Text(text)) => Ok(Value::from(text.to_uppercase())),
    ///     Some(Raw::Flag(_)) => Err("expects a value.".to_string()),
    ///     None => Ok(Value::from("DEFAULT")),
    /// });
    /// ```
    pub fn custom(callback: impl Fn(Option<&Raw>) -> Result<Value, String> + 'a) -> Self {
        Check::Custom(Box::new(callback))
    }

    /// The filter, if this is a [`Check::Filter`].
    pub fn filter(&self) -> Option<&Filter> {
        match self {
            Check::Filter(filter) => Some(filter),
            _ => None,
        }
    }

    pub(crate) fn is_mandatory(&self) -> bool {
        self.filter().is_some_and(Filter::is_mandatory)
    }

    pub(crate) fn takes_value(&self) -> bool {
        self.filter().map_or(true, |f| f.kind() != Kind::Boolean)
    }

    pub(crate) fn resolve(
        &self,
        raw: Option<&Raw>,
        context: impl FnOnce() -> String,
    ) -> Result<Option<Value>, RunError> {
        match self {
            Check::Pass => Ok(raw.cloned().map(Value::from)),
            Check::Filter(filter) => filter.process(raw).map_err(|source| RunError::Filter {
                context: context(),
                source,
            }),
            Check::Custom(callback) => callback(raw).map(Some).map_err(|message| RunError::Custom {
                context: context(),
                message,
            }),
        }
    }
}

impl<'a> std::fmt::Debug for Check<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Check::Pass => write!(f, "Pass"),
            Check::Filter(filter) => write!(f, "{filter:?}"),
            Check::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl<'a> From<Filter> for Check<'a> {
    fn from(value: Filter) -> Self {
        Check::Filter(value)
    }
}

macro_rules! check_from_stage {
    ($($stage:ident),*) => {
        $(
            impl<'a, O: Obligation> From<$stage<O>> for Check<'a> {
                fn from(value: $stage<O>) -> Self {
                    Check::Filter(Filter::from(value))
                }
            }
        )*
    };
}

check_from_stage!(BooleanStage, NumberStage, StringStage, ListStage);

/// A declared option: `-x, --name` or `--name`.
#[derive(Debug)]
pub(crate) struct CliOption<'a> {
    slug: String,
    name: String,
    short: Option<char>,
    description: String,
    check: Check<'a>,
}

impl<'a> CliOption<'a> {
    pub(crate) fn new(
        slug: &str,
        description: &str,
        check: Check<'a>,
    ) -> Result<Self, DeclarationError> {
        if slug.is_empty() {
            return Err(DeclarationErrorKind::EmptyName.into());
        }

        let tag = option_tag(slug);

        if description.is_empty() {
            return Err(DeclarationError::new(DeclarationErrorKind::EmptyDescription).within(&tag));
        }

        let (short, name) = parse_slug(slug)
            .ok_or_else(|| DeclarationError::new(DeclarationErrorKind::MalformedSlug).within(&tag))?;

        Ok(Self {
            slug: slug.to_string(),
            name,
            short,
            description: description.to_string(),
            check,
        })
    }

    pub(crate) fn slug(&self) -> &str {
        &self.slug
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn short(&self) -> Option<char> {
        self.short
    }

    pub(crate) fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn check(&self) -> &Check<'a> {
        &self.check
    }

    pub(crate) fn matches(&self, key: &str) -> bool {
        let mut chars = key.chars();

        match (chars.next(), chars.next()) {
            (Some(letter), None) => self.short == Some(letter),
            _ => self.name == key,
        }
    }
}

/// A declared positional value.
#[derive(Debug)]
pub(crate) struct CliValue<'a> {
    name: String,
    description: String,
    check: Check<'a>,
}

impl<'a> CliValue<'a> {
    pub(crate) fn new(
        name: &str,
        description: &str,
        check: Check<'a>,
    ) -> Result<Self, DeclarationError> {
        if name.is_empty() {
            return Err(DeclarationErrorKind::EmptyName.into());
        }

        let tag = value_tag(name);

        if description.is_empty() {
            return Err(DeclarationError::new(DeclarationErrorKind::EmptyDescription).within(&tag));
        }

        if !is_camel_case(name) {
            return Err(DeclarationError::new(DeclarationErrorKind::MalformedName).within(&tag));
        }

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            check,
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn check(&self) -> &Check<'a> {
        &self.check
    }
}

/// Split `-x, --name` or `--name` into its short letter and long name.
pub(crate) fn parse_slug(slug: &str) -> Option<(Option<char>, String)> {
    let (short, long) = match slug.split_once(", ") {
        Some((short, long)) => {
            let mut chars = short.strip_prefix('-')?.chars();

            match (chars.next(), chars.next()) {
                (Some(letter), None) if letter.is_ascii_alphabetic() => (Some(letter), long),
                _ => return None,
            }
        }
        None => (None, slug),
    };
    let long = long.strip_prefix("--")?;

    if is_long_name(long) {
        Some((short, long.to_string()))
    } else {
        None
    }
}

// Kebab-case: ascii alphanumeric words joined by single hyphens, starting with a letter.
// A single character is reserved for short letters.
fn is_long_name(name: &str) -> bool {
    name.len() > 1
        && name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && name
            .split('-')
            .all(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphanumeric()))
}

fn is_camel_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_lowercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric())
}
