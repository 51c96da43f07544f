use std::collections::HashMap;

use crate::api::argument::{Check, CliOption, CliValue};
use crate::api::error::{
    command_tag, option_tag, value_tag, DeclarationError, DeclarationErrorKind, RunError,
};
use crate::model::{Raw, Value};
use crate::parser::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The resolved input handed to the command action.
///
/// Holds precisely one entry per declared option (keyed by its long name) and per declared value (keyed by its name).
/// A `None` entry means the argument was absent and resolved to no value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    /// The resolved options.
    pub options: HashMap<String, Option<Value>>,
    /// The resolved positional values.
    pub values: HashMap<String, Option<Value>>,
}

impl Payload {
    /// Get the resolved option `name`, if it has a value.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name).and_then(Option::as_ref)
    }

    /// Get the resolved positional value `name`, if it has a value.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name).and_then(Option::as_ref)
    }
}

type Action<'a> = Box<dyn FnOnce(Payload) + 'a>;

/// A command: its declared options and values, and the action to dispatch the resolved [`Payload`] to.
///
/// ### Example
/// ```
/// # use vetted_builder as vetted;
/// use vetted::{is, prelude::*, Command, ConsoleInterface};
///
/// let mut total = 0.0;
/// Command::new("add")
///     .description("Add two numbers.")?
///     .option("-v, --verbose", "Print the operands.", is().optional().boolean())?
///     .value("left", "The left operand.", is().mandatory().float())?
///     .value("right", "The right operand.", is().optional().float().otherwise(1))?
///     .action(|payload| {
///         let left = payload.value("left").and_then(|v| v.as_f64()).unwrap_or_default();
///         let right = payload.value("right").and_then(|v| v.as_f64()).unwrap_or_default();
///         total = left + right;
///     })
///     .run(vec![], vec!["2".to_string()], &ConsoleInterface::default())?;
///
/// assert_eq!(total, 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Command<'a> {
    slug: String,
    description: Option<String>,
    options: Vec<CliOption<'a>>,
    values: Vec<CliValue<'a>>,
    action: Option<Action<'a>>,
}

impl<'a> std::fmt::Debug for Command<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("slug", &self.slug)
            .field("description", &self.description)
            .field("options", &self.options)
            .field("values", &self.values)
            .finish()
    }
}

impl<'a> Command<'a> {
    /// Create a command.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            description: None,
            options: Vec::default(),
            values: Vec::default(),
            action: None,
        }
    }

    fn tag(&self) -> String {
        command_tag(&self.slug)
    }

    /// Set the description of this command.
    /// If repeated, only the final description will apply.
    ///
    /// Fails if the description is empty.
    pub fn description(mut self, description: impl Into<String>) -> Result<Self, DeclarationError> {
        let description = description.into();

        if description.is_empty() {
            return Err(DeclarationError::new(DeclarationErrorKind::EmptyDescription).within(&self.tag()));
        }

        self.description.replace(description);
        Ok(self)
    }

    /// Set the action to invoke with the resolved [`Payload`].
    /// If repeated, only the final action will apply.
    pub fn action(mut self, action: impl FnOnce(Payload) + 'a) -> Self {
        self.action.replace(Box::new(action));
        self
    }

    /// Declare an option.
    ///
    /// The `slug` must be of the form `"-x, --name"` or `"--name"`.
    /// The option resolves under its long `name`, while it may be supplied by either its short letter or long name.
    ///
    /// ### Example
    /// ```
    /// # use vetted_builder as vetted;
    /// use vetted::{is, Check, Command};
    ///
    /// let command = Command::new("program")
    ///     .option("-a, --alpha", "Alpha option.", is().mandatory().boolean())
    ///     .and_then(|c| c.option("--beta", "Beta option.", Check::Pass));
    /// assert!(command.is_ok());
    ///
    /// let error = Command::new("program").option("bar", "Bar option.", Check::Pass).unwrap_err();
    /// assert_eq!(
    ///     error.to_string(),
    ///     "[Command: \"program\"] [Option: \"bar\"] slug must look like \"-x, --name\" or \"--name\".",
    /// );
    /// ```
    pub fn option(
        mut self,
        slug: &str,
        description: &str,
        check: impl Into<Check<'a>>,
    ) -> Result<Self, DeclarationError> {
        let option = CliOption::new(slug, description, check.into()).map_err(|e| e.within(&self.tag()))?;
        let duplicate = |kind: DeclarationErrorKind| {
            DeclarationError::new(kind)
                .within(&option_tag(slug))
                .within(&self.tag())
        };

        if self.options.iter().any(|o| o.name() == option.name()) {
            return Err(duplicate(DeclarationErrorKind::DuplicateOption(
                option.name().to_string(),
            )));
        }

        if let Some(short) = option.short() {
            if self.options.iter().any(|o| o.short() == Some(short)) {
                return Err(duplicate(DeclarationErrorKind::DuplicateShort(short)));
            }
        }

        self.options.push(option);
        Ok(self)
    }

    /// Declare a positional value.
    ///
    /// The `name` must be camelCase.
    /// The order of value declarations corresponds to their positional order during matching.
    pub fn value(
        mut self,
        name: &str,
        description: &str,
        check: impl Into<Check<'a>>,
    ) -> Result<Self, DeclarationError> {
        let value = CliValue::new(name, description, check.into()).map_err(|e| e.within(&self.tag()))?;

        if self.values.iter().any(|v| v.name() == value.name()) {
            return Err(DeclarationError::new(DeclarationErrorKind::DuplicateValue(
                name.to_string(),
            ))
            .within(&value_tag(name))
            .within(&self.tag()));
        }

        self.values.push(value);
        Ok(self)
    }

    /// Check the declaration is complete (ex: the description is set).
    pub fn validate(&self) -> Result<(), DeclarationError> {
        if self.description.is_none() {
            return Err(DeclarationError::new(DeclarationErrorKind::UndefinedDescription).within(&self.tag()));
        }

        Ok(())
    }

    /// Resolve the raw input against the declared options and values.
    ///
    /// 1. Raw options are matched by short letter (single character keys) or long name.
    /// Unknown options are dropped with a warning.
    /// 2. Raw values are matched to the declared values by position.
    /// Extra values are dropped with a warning.
    /// 3. Every declared option and value is resolved through its [`Check`], in declaration order.
    /// The first failure is returned.
    pub fn resolve(
        &self,
        raw_options: Vec<(String, Raw)>,
        raw_values: Vec<String>,
        interface: &(impl UserInterface + ?Sized),
    ) -> Result<Payload, RunError> {
        let tag = self.tag();
        let mut matched_options: HashMap<&str, Raw> = HashMap::default();

        for (key, raw) in raw_options {
            match self.options.iter().find(|o| o.matches(&key)) {
                Some(option) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Matched '{key}' to option '{}'.", option.name());
                    }

                    matched_options.insert(option.name(), raw);
                }
                None => {
                    let dashes = if key.chars().count() > 1 { "--" } else { "-" };
                    interface.warn(format!("Unknown option '{dashes}{key}'. Please run --help."));
                }
            }
        }

        let mut raw_values = raw_values.into_iter();
        let matched_values: Vec<Option<Raw>> = self
            .values
            .iter()
            .map(|_| raw_values.next().map(Raw::Text))
            .collect();

        for extra in raw_values {
            interface.warn(format!("Too many values ('{extra}'). Please run --help."));
        }

        let mut payload = Payload::default();

        for option in &self.options {
            let raw = matched_options.get(option.name());
            let value = option
                .check()
                .resolve(raw, || format!("{tag}{}", option_tag(option.slug())))?;
            payload.options.insert(option.name().to_string(), value);
        }

        for (value, raw) in self.values.iter().zip(matched_values.iter()) {
            let resolved = value
                .check()
                .resolve(raw.as_ref(), || format!("{tag}{}", value_tag(value.name())))?;
            payload.values.insert(value.name().to_string(), resolved);
        }

        Ok(payload)
    }

    /// Resolve the raw input (see [`Command::resolve`]) and invoke the action with the [`Payload`].
    ///
    /// The command is consumed: the action fires at most once, and never with a partially resolved payload.
    pub fn run(
        self,
        raw_options: Vec<(String, Raw)>,
        raw_values: Vec<String>,
        interface: &(impl UserInterface + ?Sized),
    ) -> Result<(), RunError> {
        let payload = self.resolve(raw_options, raw_values, interface)?;

        match self.action {
            Some(action) => action(payload),
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Command '{}' has no action.", self.slug);
                }
            }
        }

        Ok(())
    }

    /// Whether the option under `key` (short letter or long name) takes a value; unknown keys do.
    pub(crate) fn takes_value(&self, key: &str) -> bool {
        self.options
            .iter()
            .find(|o| o.matches(key))
            .map_or(true, |o| o.check().takes_value())
    }

    pub(crate) fn about(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn options(&self) -> &[CliOption<'a>] {
        &self.options
    }

    pub(crate) fn values(&self) -> &[CliValue<'a>] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{is, Bound, FilterError};
    use crate::parser::tokenize;
    use crate::parser::util::InMemoryInterface;
    use crate::prelude::Otherwise;
    use rstest::rstest;
    use std::cell::Cell;

    fn raw_options(pairs: Vec<(&str, Raw)>) -> Vec<(String, Raw)> {
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    fn raw_values(values: Vec<&str>) -> Vec<String> {
        values.into_iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn validate() {
        let command = Command::new("foo");
        assert_eq!(
            command.validate().unwrap_err().to_string(),
            "[Command: \"foo\"] description is undefined."
        );

        let command = command.description("foo").unwrap();
        command.validate().unwrap();
        assert_eq!(command.about(), Some("foo"));
    }

    #[test]
    fn description_empty() {
        let error = Command::new("foo").description("").unwrap_err();
        assert_eq!(error.kind(), &DeclarationErrorKind::EmptyDescription);
        assert_eq!(error.context(), "[Command: \"foo\"] ");
    }

    #[test]
    fn description_repeated() {
        let command = Command::new("foo")
            .description("discarded")
            .unwrap()
            .description("kept")
            .unwrap();
        assert_eq!(command.about(), Some("kept"));
    }

    #[rstest]
    #[case("", "lambda", "[Command: \"foo\"] name cannot be empty.")]
    #[case(
        "-b, --bar",
        "",
        "[Command: \"foo\"] [Option: \"-b, --bar\"] description cannot be empty."
    )]
    #[case(
        "bar",
        "lambda",
        "[Command: \"foo\"] [Option: \"bar\"] slug must look like \"-x, --name\" or \"--name\"."
    )]
    fn option_invalid(#[case] slug: &str, #[case] description: &str, #[case] expected: &str) {
        let error = Command::new("foo")
            .option(slug, description, Check::Pass)
            .unwrap_err();
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case("", "lambda", "[Command: \"foo\"] name cannot be empty.")]
    #[case(
        "bar",
        "",
        "[Command: \"foo\"] [Value: \"bar\"] description cannot be empty."
    )]
    #[case(
        "Bar",
        "lambda",
        "[Command: \"foo\"] [Value: \"Bar\"] name must be a camelCase identifier (ex: \"fileName\")."
    )]
    fn value_invalid(#[case] name: &str, #[case] description: &str, #[case] expected: &str) {
        let error = Command::new("foo")
            .value(name, description, Check::Pass)
            .unwrap_err();
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn option_duplicate() {
        let command = Command::new("foo")
            .option("-b, --bar", "Bar.", Check::Pass)
            .unwrap();

        let error = command
            .option("--bar", "Bar again.", Check::Pass)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "[Command: \"foo\"] [Option: \"--bar\"] option '--bar' is already declared."
        );

        let command = Command::new("foo")
            .option("-b, --bar", "Bar.", Check::Pass)
            .unwrap();
        let error = command
            .option("-b, --baz", "Baz.", Check::Pass)
            .unwrap_err();
        assert_eq!(error.kind(), &DeclarationErrorKind::DuplicateShort('b'));
    }

    #[test]
    fn value_duplicate() {
        let error = Command::new("foo")
            .value("bar", "Bar.", Check::Pass)
            .unwrap()
            .value("bar", "Bar again.", Check::Pass)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "[Command: \"foo\"] [Value: \"bar\"] value 'bar' is already declared."
        );
    }

    #[test]
    fn option_and_value_share_name() {
        Command::new("foo")
            .option("--bar", "Bar option.", Check::Pass)
            .unwrap()
            .value("bar", "Bar value.", Check::Pass)
            .unwrap();
    }

    #[test]
    fn declaration_order() {
        let command = Command::new("foo")
            .option("--beta", "B.", Check::Pass)
            .unwrap()
            .option("--alpha", "A.", Check::Pass)
            .unwrap()
            .value("z", "Z.", Check::Pass)
            .unwrap()
            .value("y", "Y.", Check::Pass)
            .unwrap();

        let options: Vec<&str> = command.options().iter().map(|o| o.name()).collect();
        let values: Vec<&str> = command.values().iter().map(|v| v.name()).collect();
        assert_eq!(options, vec!["beta", "alpha"]);
        assert_eq!(values, vec!["z", "y"]);
    }

    fn scenario<'a>() -> Command<'a> {
        Command::new("foo")
            .option("-a, --alpha", "Alpha option description.", is().mandatory().boolean())
            .unwrap()
            .option("-B, --beta", "Beta option description.", is().mandatory().integer())
            .unwrap()
            .option("-g, --gamma", "Gamma option description.", is().optional().float().otherwise(0))
            .unwrap()
            .option("-D, --delta", "Delta option description.", is().optional().boolean())
            .unwrap()
            .option(
                "--lamda",
                "Lambda option description.",
                is().optional().list(["leet", "l33t", "1337"]).otherwise("l33t"),
            )
            .unwrap()
            .value("omega", "Omega value description", is().mandatory().string())
            .unwrap()
            .value(
                "epsilon",
                "Epsilon value description",
                is().optional().string().otherwise("Who knows?"),
            )
            .unwrap()
            .value("iota", "Iota value description", is().optional().string())
            .unwrap()
    }

    fn expected_payload() -> Payload {
        Payload {
            options: HashMap::from([
                ("alpha".to_string(), Some(Value::Boolean(true))),
                ("beta".to_string(), Some(Value::Number(123.0))),
                ("delta".to_string(), Some(Value::Boolean(false))),
                ("gamma".to_string(), Some(Value::Number(0.0))),
                ("lamda".to_string(), Some(Value::from("leet"))),
            ]),
            values: HashMap::from([
                ("omega".to_string(), Some(Value::from("A value."))),
                ("epsilon".to_string(), Some(Value::from("Who knows?"))),
                ("iota".to_string(), None),
            ]),
        }
    }

    #[test]
    fn run() {
        // Setup
        let mut calls = 0;
        let mut received: Option<Payload> = None;
        let command = scenario().action(|payload| {
            calls += 1;
            received.replace(payload);
        });
        let interface = InMemoryInterface::default();

        // Execute
        command
            .run(
                raw_options(vec![
                    ("a", Raw::Flag(true)),
                    ("B", Raw::from("123")),
                    ("lamda", Raw::from("leet")),
                ]),
                raw_values(vec!["A value."]),
                &interface,
            )
            .unwrap();

        // Verify
        assert_eq!(calls, 1);
        assert_eq!(received, Some(expected_payload()));
        assert_eq!(interface.consume_warnings(), Vec::<String>::default());
    }

    #[test]
    fn run_tokenized() {
        // Setup
        let mut received: Option<Payload> = None;
        let command = scenario().action(|payload| {
            received.replace(payload);
        });
        let tokens = tokenize(&["-aB", "123", "--lamda", "leet", "A value."]);
        let interface = InMemoryInterface::default();

        // Execute
        command
            .run(tokens.options, tokens.values, &interface)
            .unwrap();

        // Verify
        assert_eq!(received, Some(expected_payload()));
    }

    #[test]
    fn run_unknown_and_extra() {
        // Setup
        let mut received: Option<Payload> = None;
        let command = scenario().action(|payload| {
            received.replace(payload);
        });
        let interface = InMemoryInterface::default();

        // Execute
        command
            .run(
                raw_options(vec![
                    ("a", Raw::Flag(true)),
                    ("x", Raw::Flag(true)),
                    ("beta", Raw::from("123")),
                    ("zeta", Raw::from("1")),
                ]),
                raw_values(vec!["A value.", "Who knows?", "iota", "extra"]),
                &interface,
            )
            .unwrap();

        // Verify
        let payload = received.unwrap();
        assert_eq!(payload.options.len(), 5);
        assert_eq!(payload.values.len(), 3);
        assert!(!payload.options.contains_key("x"));
        assert!(!payload.options.contains_key("zeta"));
        assert_eq!(payload.value("iota"), Some(&Value::from("iota")));
        assert_eq!(
            interface.consume_warnings(),
            vec![
                "Unknown option '-x'. Please run --help.".to_string(),
                "Unknown option '--zeta'. Please run --help.".to_string(),
                "Too many values ('extra'). Please run --help.".to_string(),
            ]
        );
    }

    #[rstest]
    #[case(
        vec![("B", Raw::from("123"))],
        vec!["A value."],
        "[Command: \"foo\"] [Option: \"-a, --alpha\"] missing mandatory value."
    )]
    #[case(
        vec![("a", Raw::Flag(true)), ("B", Raw::from("12.5"))],
        vec!["A value."],
        "[Command: \"foo\"] [Option: \"-B, --beta\"] '12.5' must be an integer."
    )]
    #[case(
        vec![("a", Raw::Flag(true)), ("B", Raw::from("abc"))],
        vec!["A value."],
        "[Command: \"foo\"] [Option: \"-B, --beta\"] cannot convert 'abc' to number."
    )]
    #[case(
        vec![("a", Raw::Flag(true)), ("B", Raw::from("1")), ("lamda", Raw::from("lol"))],
        vec!["A value."],
        "[Command: \"foo\"] [Option: \"--lamda\"] 'lol' must be one of: leet, l33t, 1337."
    )]
    #[case(
        vec![("a", Raw::Flag(true)), ("B", Raw::from("1"))],
        vec![],
        "[Command: \"foo\"] [Value: \"omega\"] missing mandatory value."
    )]
    fn run_invalid(
        #[case] options: Vec<(&str, Raw)>,
        #[case] values: Vec<&str>,
        #[case] expected: &str,
    ) {
        // Setup
        let mut calls = 0;
        let command = scenario().action(|_| calls += 1);
        let interface = InMemoryInterface::default();

        // Execute
        let error = command
            .run(raw_options(options), raw_values(values), &interface)
            .unwrap_err();

        // Verify
        assert_eq!(error.to_string(), expected);
        assert_eq!(calls, 0);
    }

    #[test]
    fn run_filter_error() {
        let command = Command::new("foo")
            .option(
                "--size",
                "Size.",
                is().mandatory().integer().between(0, 10, Bound::Excluded),
            )
            .unwrap();
        let error = command
            .run(
                raw_options(vec![("size", Raw::from("3.5"))]),
                raw_values(vec![]),
                &InMemoryInterface::default(),
            )
            .unwrap_err();

        assert_matches!(error, RunError::Filter { source: FilterError::Rejected { description, .. }, .. } => {
            assert_eq!(description, "must be an integer.");
        });
    }

    #[test]
    fn run_custom() {
        // Setup
        let mut received: Option<Payload> = None;
        let command = Command::new("foo")
            .option(
                "-n, --name",
                "Name.",
                Check::custom(|raw| match raw {
                    Some(Raw::Text(text)) => Ok(Value::from(text.to_uppercase())),
                    Some(Raw::Flag(_)) => Err("expects a value.".to_string()),
                    None => Ok(Value::from("ANONYMOUS")),
                }),
            )
            .unwrap()
            .option("--raw", "Raw.", Check::Pass)
            .unwrap()
            .option("--unset", "Unset.", Check::Pass)
            .unwrap()
            .value("rest", "Rest.", Check::Pass)
            .unwrap()
            .action(|payload| {
                received.replace(payload);
            });

        // Execute
        command
            .run(
                raw_options(vec![("n", Raw::from("ada")), ("raw", Raw::Flag(true))]),
                raw_values(vec![]),
                &InMemoryInterface::default(),
            )
            .unwrap();

        // Verify
        let payload = received.unwrap();
        assert_eq!(payload.option("name"), Some(&Value::from("ADA")));
        assert_eq!(payload.option("raw"), Some(&Value::Boolean(true)));
        assert_eq!(payload.options.get("unset"), Some(&None));
        assert_eq!(payload.values.get("rest"), Some(&None));
    }

    #[test]
    fn run_custom_error() {
        let command = Command::new("foo")
            .option(
                "-n, --name",
                "Name.",
                Check::custom(|_| Err("expects a value.".to_string())),
            )
            .unwrap();

        let error = command
            .run(
                raw_options(vec![("name", Raw::Flag(true))]),
                raw_values(vec![]),
                &InMemoryInterface::default(),
            )
            .unwrap_err();

        assert_eq!(
            error,
            RunError::Custom {
                context: "[Command: \"foo\"] [Option: \"-n, --name\"] ".to_string(),
                message: "expects a value.".to_string(),
            }
        );
    }

    fn counting(calls: &Cell<usize>) -> Check<'_> {
        Check::custom(move |raw| {
            calls.set(calls.get() + 1);
            Ok(raw.cloned().map_or(Value::from("absent"), Value::from))
        })
    }

    #[test]
    fn run_evaluates_each_check_once() {
        // Setup
        let name_calls = Cell::new(0);
        let unset_calls = Cell::new(0);
        let rest_calls = Cell::new(0);
        let mut received: Option<Payload> = None;
        let command = Command::new("foo")
            .option("-n, --name", "Name.", counting(&name_calls))
            .unwrap()
            .option("-u, --unset", "Unset.", counting(&unset_calls))
            .unwrap()
            .value("rest", "Rest.", counting(&rest_calls))
            .unwrap()
            .action(|payload| {
                received.replace(payload);
            });

        // Execute
        command
            .run(
                raw_options(vec![("n", Raw::from("first")), ("name", Raw::from("second"))]),
                raw_values(vec![]),
                &InMemoryInterface::default(),
            )
            .unwrap();

        // Verify
        assert_eq!(name_calls.get(), 1);
        assert_eq!(unset_calls.get(), 1);
        assert_eq!(rest_calls.get(), 1);
        let payload = received.unwrap();
        assert_eq!(payload.option("name"), Some(&Value::from("second")));
        assert_eq!(payload.option("unset"), Some(&Value::from("absent")));
        assert_eq!(payload.value("rest"), Some(&Value::from("absent")));
    }

    #[test]
    fn run_without_action() {
        Command::new("foo")
            .option("--bar", "Bar.", is().optional().boolean())
            .unwrap()
            .run(
                raw_options(vec![("bar", Raw::Flag(true))]),
                raw_values(vec![]),
                &InMemoryInterface::default(),
            )
            .unwrap();
    }

    #[test]
    fn resolve_last_raw_wins() {
        let command = Command::new("foo")
            .option("-c, --count", "Count.", is().optional().integer())
            .unwrap();
        let payload = command
            .resolve(
                raw_options(vec![("c", Raw::from("1")), ("count", Raw::from("2"))]),
                raw_values(vec![]),
                &InMemoryInterface::default(),
            )
            .unwrap();

        assert_eq!(payload.option("count"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn resolve_one_entry_per_option() {
        let command = scenario();

        for options in [
            vec![("a", Raw::Flag(true)), ("B", Raw::from("1"))],
            vec![
                ("alpha", Raw::Flag(true)),
                ("beta", Raw::from("1")),
                ("g", Raw::from("2.5")),
                ("D", Raw::Flag(true)),
                ("lamda", Raw::from("1337")),
                ("unknown", Raw::Flag(true)),
            ],
        ] {
            let payload = command
                .resolve(
                    raw_options(options),
                    raw_values(vec!["A value."]),
                    &InMemoryInterface::default(),
                )
                .unwrap();
            let mut names: Vec<&String> = payload.options.keys().collect();
            names.sort();
            assert_eq!(names, vec!["alpha", "beta", "delta", "gamma", "lamda"]);
        }
    }
}
