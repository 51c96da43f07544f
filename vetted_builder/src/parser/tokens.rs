use std::iter::Peekable;
use std::str::FromStr;

use crate::model::Raw;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The Cli tokens, split into raw options (in order of appearance) and raw positional values.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Tokens {
    /// The raw options, keyed by short letter or long name (without dashes).
    pub options: Vec<(String, Raw)>,
    /// The raw positional values.
    pub values: Vec<String>,
}

/// Split the Cli tokens into raw options and raw positional values.
///
/// * `--` ends the options; every later token is a value.
/// * `--name=text` is an option with the value `text`.
/// * `--name` takes the following token as its value if that token looks like a value, else it is a flag.
/// * `-abc` aggregates the flags `a` and `b`, while `c` follows the `--name` rule.
/// * Anything else (including `-` and negative numbers) is a value.
///
/// ### Example
/// ```
/// # use vetted_builder as vetted;
/// use vetted::{tokenize, Raw};
///
/// let tokens = tokenize(&["-aB", "123", "--lamda", "leet", "A value."]);
/// assert_eq!(
///     tokens.options,
///     vec![
///         ("a".to_string(), Raw::Flag(true)),
///         ("B".to_string(), Raw::from("123")),
///         ("lamda".to_string(), Raw::from("leet")),
///     ]
/// );
/// assert_eq!(tokens.values, vec!["A value.".to_string()]);
/// ```
pub fn tokenize(tokens: &[&str]) -> Tokens {
    tokenize_with(tokens, |_| true)
}

/// Split the Cli tokens like [`tokenize`], where options for which `takes_value(key)` is false never take the following token.
///
/// ### Example
/// ```
/// # use vetted_builder as vetted;
/// use vetted::{tokenize_with, Raw};
///
/// let tokens = tokenize_with(&["--verbose", "file.txt"], |key| key != "verbose");
/// assert_eq!(tokens.options, vec![("verbose".to_string(), Raw::Flag(true))]);
/// assert_eq!(tokens.values, vec!["file.txt".to_string()]);
/// ```
pub fn tokenize_with(tokens: &[&str], takes_value: impl Fn(&str) -> bool) -> Tokens {
    let mut out = Tokens::default();
    let mut iter = tokens.iter().copied().peekable();

    while let Some(token) = iter.next() {
        if token == "--" {
            out.values.extend(iter.by_ref().map(str::to_string));
        } else if let Some(long) = token.strip_prefix("--") {
            match long.split_once('=') {
                Some((name, text)) => out.options.push((name.to_string(), Raw::from(text))),
                None => {
                    let raw = take_value(&mut iter, takes_value(long));
                    out.options.push((long.to_string(), raw));
                }
            }
        } else if token.len() > 1 && token.starts_with('-') && !is_number(token) {
            let letters: Vec<char> = token.chars().skip(1).collect();

            if let Some((last, aggregated)) = letters.split_last() {
                for letter in aggregated {
                    out.options.push((letter.to_string(), Raw::Flag(true)));
                }

                let last = last.to_string();
                let raw = take_value(&mut iter, takes_value(&last));
                out.options.push((last, raw));
            }
        } else {
            out.values.push(token.to_string());
        }
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Tokenized {tokens:?} into {out:?}.");
    }

    out
}

fn take_value<'t>(iter: &mut Peekable<impl Iterator<Item = &'t str>>, wanted: bool) -> Raw {
    match iter.next_if(|next| wanted && is_value(next)) {
        Some(value) => Raw::from(value),
        None => Raw::Flag(true),
    }
}

fn is_value(token: &str) -> bool {
    !token.starts_with('-') || token == "-" || is_number(token)
}

fn is_number(token: &str) -> bool {
    f64::from_str(token).is_ok_and(f64::is_finite)
}
