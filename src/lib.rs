//! `vetted` is a declarative command line library for Rust, built around *filters*.
//!
//! Each option and positional value of a command is declared together with the filter that vets it.
//! When the command runs, every declared argument is resolved through its filter before the action is invoked.
//! The action therefore never sees an unconverted, out of range, or missing mandatory argument.
//!
//! `vetted` prioritizes the following design concerns:
//! * *Staged filter declarations*:
//! A filter is built in stages: first the obligation (`mandatory`/`optional`), then the type, then refinements.
//! Out of order or mismatched declarations (ex: a length bound on a number) do not compile.
//! * *Declaration errors up front*:
//! Malformed slugs, empty descriptions, or duplicate names are reported when the command is declared, with a context prefix locating the mistake.
//! * *Atomic runs*:
//! Either every argument resolves and the action fires exactly once, or the first failure is returned and the action never fires.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/summer.rs")]
//! ```
//!
//! Generates the following Cli program:
//! ```console
//! $ summer -h
//! usage: summer [-h] [--version] [-s SCALE] LEFT [RIGHT]
//!
//! Sum two numbers.
//!
//! values:
//!  LEFT               The left operand.                 type: number
//!  RIGHT              The right operand.                type: number  default: 0
//! options:
//!  -h, --help         Show this help message and exit.
//!  --version          Show the version and exit.
//!  -s, --scale SCALE  Multiply the sum by this factor.  type: number  default: 1
//!
//! $ summer 1 2 --scale 2
//! Sum: 6
//!
//! $ summer
//! [Program] [Value: "left"] missing mandatory value.
//!
//! $ summer 1 --scale 0
//! [Program] [Option: "-s, --scale"] '0' must be greater than 0.
//! ```
//!
//! # Filters
//! Start a filter with [`is`], then pick its obligation, its type, and optionally refine it:
//! ```
//! use vetted::{is, prelude::*, Bound, Raw, Value};
//!
//! let percentage = is().mandatory().integer().between(0, 100, Bound::Included);
//! let filter = vetted::Filter::from(percentage);
//! assert_eq!(filter.process(Some(&Raw::from("42"))), Ok(Some(Value::Number(42.0))));
//! assert!(filter.process(Some(&Raw::from("101"))).is_err());
//! assert!(filter.process(None).is_err());
//!
//! let colour = is().optional().list(["red", "green"]).otherwise("red");
//! assert_eq!(colour.process(None), Ok(Some(Value::from("red"))));
//! ```
//!
//! Only optional filters take a default, via [`prelude::Otherwise`].
//! Types are:
//! * `boolean`: a flag (`--verbose`), or the text `true`/`false`; optional booleans default to `false`.
//! * `float`, `integer`: finite numbers, the latter additionally rejecting fractions.
//! Refine with `between`, `greater_than`, and `less_than`.
//! * `string`: any text. Refine with `longer_than`, and `shorter_than` (counted in characters).
//! * `list`: one of the allowed texts.
//!
//! An argument may also skip filtering ([`Check::Pass`]) or use a [`Check::custom`] callback.
//!
//! # Commands
//! A [`Command`] (or the top level [`Program`]) collects option and value declarations.
//! Option slugs are of the form `-x, --name` or `--name`, value names are camelCase.
//! Running the command resolves the raw input into a [`Payload`] keyed by option long name and value name.
//!
//! Unknown options and extra values are not fatal: they are reported as warnings through the [`UserInterface`].
//!
//! # Features
//! * `tracing_debug`: emit `tracing::debug!` events while tokenizing and resolving.
pub use vetted_builder::*;
