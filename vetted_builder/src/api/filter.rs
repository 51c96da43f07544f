use std::marker::PhantomData;
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;

use crate::model::{Kind, Raw, Value};
use crate::prelude::Otherwise;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A named predicate over a coerced [`Value`].
///
/// The description is the human readable failure message, reported when the predicate does not hold.
#[derive(Clone)]
pub struct Validator {
    description: String,
    test: Rc<dyn Fn(&Value) -> bool>,
}

impl Validator {
    /// Create a validator.
    ///
    /// ### Example
    /// ```
    /// # use vetted_builder as vetted;
    /// use vetted::{Validator, Value};
    ///
    /// let even = Validator::new("must be even.", |v| v.as_f64().is_some_and(|n| n % 2.0 == 0.0));
    /// assert!(even.test(&Value::from(4)));
    /// assert!(!even.test(&Value::from(3)));
    /// ```
    pub fn new(description: impl Into<String>, test: impl Fn(&Value) -> bool + 'static) -> Self {
        Self {
            description: description.into(),
            test: Rc::new(test),
        }
    }

    /// The failure message of this validator.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Check the value against this validator.
    pub fn test(&self, value: &Value) -> bool {
        (self.test)(value)
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("description", &self.description)
            .finish()
    }
}

/// Whether the bound of a range refinement is part of the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The bound itself is rejected (ex: `x > min`).
    Excluded,
    /// The bound itself is accepted (ex: `x >= min`).
    Included,
}

/// The failure of a [`Filter`] evaluation.
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    /// A mandatory argument was not supplied.
    #[error("missing mandatory value.")]
    Missing,
    /// The raw input could not be coerced into the filter's [`Kind`].
    #[error("cannot convert '{token}' to {kind}.")]
    InvalidConversion {
        /// The raw input.
        token: String,
        /// The filter's target kind.
        kind: Kind,
    },
    /// A validator rejected the coerced value.
    #[error("'{value}' {description}")]
    Rejected {
        /// The coerced value.
        value: Value,
        /// The rejecting validator's description.
        description: String,
    },
}

mod sealed {
    pub trait Sealed {}
}

/// Marker for the obligation picked at the root of the filter Dsl.
pub trait Obligation: sealed::Sealed {
    #[doc(hidden)]
    const MANDATORY: bool;
}

/// The argument must be supplied.
#[derive(Debug, Clone, Copy)]
pub struct Mandatory;

/// The argument may be omitted, resolving to its default (or null).
#[derive(Debug, Clone, Copy)]
pub struct Optional;

impl sealed::Sealed for Mandatory {}
impl sealed::Sealed for Optional {}

impl Obligation for Mandatory {
    const MANDATORY: bool = true;
}

impl Obligation for Optional {
    const MANDATORY: bool = false;
}

/// A finished filter: obligation, target type, validators and default.
///
/// Filters are built through the staged Dsl starting at [`is`].
/// Each stage only exposes the operations legal at that point, so the following do not compile:
/// ```compile_fail
/// # use vetted_builder as vetted;
/// use vetted::is;
/// // The type cannot be picked before the obligation.
/// is().integer();
/// ```
/// ```compile_fail
/// # use vetted_builder as vetted;
/// use vetted::{is, Bound};
/// // Range refinements only exist on number stages.
/// is().optional().string().between(0, 10, Bound::Included);
/// ```
/// ```compile_fail
/// # use vetted_builder as vetted;
/// use vetted::{is, prelude::*};
/// // A mandatory filter never takes a default.
/// is().mandatory().integer().otherwise(0);
/// ```
/// ```compile_fail
/// # use vetted_builder as vetted;
/// use vetted::{is, Bound};
/// // List (and boolean) stages take no refinements.
/// is().optional().list(["a", "b"]).longer_than(0, Bound::Excluded);
/// ```
#[derive(Clone)]
pub struct Filter {
    mandatory: bool,
    kind: Kind,
    validators: Vec<Validator>,
    default: Option<Value>,
}

impl std::fmt::Debug for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let obligation = if self.mandatory {
            "mandatory"
        } else {
            "optional"
        };
        write!(
            f,
            "Filter[{obligation}, {kind}, {n} validators, default: {default:?}]",
            kind = self.kind,
            n = self.validators.len(),
            default = self.default,
        )
    }
}

impl Filter {
    fn seed(mandatory: bool, kind: Kind) -> Self {
        Self {
            mandatory,
            kind,
            validators: Vec::default(),
            default: None,
        }
    }

    fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    fn with_default(mut self, default: Value) -> Self {
        self.default.replace(default);
        self
    }

    /// Whether the argument must be supplied.
    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// The target type.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The validators, in declaration order.
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// The value resolved when the argument is absent.
    /// Always `None` for a mandatory filter.
    pub fn default_value(&self) -> Option<&Value> {
        if self.mandatory {
            None
        } else {
            self.default.as_ref()
        }
    }

    /// Evaluate the filter against a raw input (`None` when the argument was not supplied).
    ///
    /// Absent input fails on a mandatory filter, and otherwise resolves to the default without coercion or validation.
    /// Present input is coerced to the filter's [`Kind`] and then checked by every validator in declaration order.
    /// The first failing validator is reported.
    ///
    /// ### Example
    /// ```
    /// # use vetted_builder as vetted;
    /// use vetted::{is, prelude::*, Bound, Raw, Value};
    ///
    /// let filter = is().optional().integer().between(0, 10, Bound::Included).otherwise(5);
    /// assert_eq!(filter.process(Some(&Raw::from("7"))).unwrap(), Some(Value::Number(7.0)));
    /// assert_eq!(filter.process(None).unwrap(), Some(Value::Number(5.0)));
    /// assert!(filter.process(Some(&Raw::from("11"))).is_err());
    /// ```
    pub fn process(&self, raw: Option<&Raw>) -> Result<Option<Value>, FilterError> {
        let raw = match raw {
            Some(raw) => raw,
            None if self.mandatory => return Err(FilterError::Missing),
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Absent input, resolving default {:?}.", self.default);
                }

                return Ok(self.default.clone());
            }
        };

        let value = self.coerce(raw)?;

        for validator in &self.validators {
            if !validator.test(&value) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Validator '{}' rejected {value}.", validator.description());
                }

                return Err(FilterError::Rejected {
                    value,
                    description: validator.description().to_string(),
                });
            }
        }

        Ok(Some(value))
    }

    fn coerce(&self, raw: &Raw) -> Result<Value, FilterError> {
        let invalid = || FilterError::InvalidConversion {
            token: raw.to_string(),
            kind: self.kind,
        };

        match (self.kind, raw) {
            (Kind::Boolean, Raw::Flag(b)) => Ok(Value::Boolean(*b)),
            (Kind::Boolean, Raw::Text(text)) => bool::from_str(text)
                .map(Value::Boolean)
                .map_err(|_| invalid()),
            (Kind::Number, Raw::Text(text)) => match f64::from_str(text) {
                Ok(n) if n.is_finite() => Ok(Value::Number(n)),
                _ => Err(invalid()),
            },
            (Kind::String, Raw::Text(text)) => Ok(Value::String(text.clone())),
            (Kind::Number, Raw::Flag(_)) | (Kind::String, Raw::Flag(_)) => Err(invalid()),
        }
    }
}

/// The root of the filter Dsl, where the obligation is picked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Is;

/// Start a filter declaration.
///
/// ### Example
/// ```
/// # use vetted_builder as vetted;
/// use vetted::{is, prelude::*, Bound};
///
/// is().mandatory().boolean();
/// is().mandatory().integer().greater_than(0, Bound::Excluded);
/// is().optional().float().between(0, 1, Bound::Included).otherwise(0.5);
/// is().optional().string().shorter_than(8, Bound::Included);
/// is().optional().list(["leet", "l33t", "1337"]).otherwise("l33t");
/// ```
pub fn is() -> Is {
    Is
}

impl Is {
    /// The argument must be supplied.
    pub fn mandatory(self) -> TypeStage<Mandatory> {
        TypeStage {
            _obligation: PhantomData,
        }
    }

    /// The argument may be omitted.
    pub fn optional(self) -> TypeStage<Optional> {
        TypeStage {
            _obligation: PhantomData,
        }
    }
}

/// The stage where the target type is picked.
#[derive(Debug, Clone)]
pub struct TypeStage<O> {
    _obligation: PhantomData<O>,
}

impl<O: Obligation> TypeStage<O> {
    /// Coerce to a boolean, defaulting to `false`.
    pub fn boolean(self) -> BooleanStage<O> {
        BooleanStage::new(Filter::seed(O::MANDATORY, Kind::Boolean).with_default(Value::Boolean(false)))
    }

    /// Coerce to a number.
    pub fn float(self) -> NumberStage<O> {
        NumberStage::new(Filter::seed(O::MANDATORY, Kind::Number))
    }

    /// Coerce to a number that must be integral.
    pub fn integer(self) -> NumberStage<O> {
        let validator = Validator::new("must be an integer.", |value| {
            value.as_f64().is_some_and(|n| n == n.round())
        });
        NumberStage::new(Filter::seed(O::MANDATORY, Kind::Number).with_validator(validator))
    }

    /// Keep the text as is.
    pub fn string(self) -> StringStage<O> {
        StringStage::new(Filter::seed(O::MANDATORY, Kind::String))
    }

    /// Keep the text, which must be one of the `allowed` choices.
    pub fn list<S: Into<String>>(self, allowed: impl IntoIterator<Item = S>) -> ListStage<O> {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        let description = format!("must be one of: {}.", allowed.join(", "));
        let validator = Validator::new(description, move |value| {
            value
                .as_str()
                .is_some_and(|text| allowed.iter().any(|a| a == text))
        });
        ListStage::new(Filter::seed(O::MANDATORY, Kind::String).with_validator(validator))
    }
}

impl<D: Into<Value>> Otherwise<D> for TypeStage<Optional> {
    /// Finish an un-typed optional filter, taking the type from the default value.
    fn otherwise(self, default: D) -> Filter {
        let default = default.into();
        Filter::seed(false, default.kind()).with_default(default)
    }
}

macro_rules! stage {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name<O> {
            filter: Filter,
            _obligation: PhantomData<O>,
        }

        impl<O: Obligation> $name<O> {
            fn new(filter: Filter) -> Self {
                Self {
                    filter,
                    _obligation: PhantomData,
                }
            }
        }

        impl<O: Obligation> From<$name<O>> for Filter {
            fn from(value: $name<O>) -> Self {
                value.filter
            }
        }
    };
}

stage!(
    /// The refinement stage of a boolean filter.
    BooleanStage
);
stage!(
    /// The refinement stage of a number filter.
    NumberStage
);
stage!(
    /// The refinement stage of a string filter.
    StringStage
);
stage!(
    /// The refinement stage of a list (choices) filter.
    ListStage
);

macro_rules! refinable {
    ($($name:ident),*) => {
        $(
            impl<O: Obligation> $name<O> {
                fn refine(self, validator: Validator) -> Self {
                    Self::new(self.filter.with_validator(validator))
                }
            }
        )*
    };
}

refinable!(NumberStage, StringStage);

impl<O: Obligation> NumberStage<O> {
    /// Require the number to be within `min` and `max`.
    pub fn between(self, min: impl Into<f64>, max: impl Into<f64>, bound: Bound) -> Self {
        let (min, max) = (min.into(), max.into());
        let validator = match bound {
            Bound::Included => Validator::new(
                format!("must be between {min} and {max} (both included)."),
                move |value| value.as_f64().is_some_and(|n| n >= min && n <= max),
            ),
            Bound::Excluded => Validator::new(
                format!("must be between {min} and {max} (both excluded)."),
                move |value| value.as_f64().is_some_and(|n| n > min && n < max),
            ),
        };
        self.refine(validator)
    }

    /// Require the number to be above `min`.
    pub fn greater_than(self, min: impl Into<f64>, bound: Bound) -> Self {
        let min = min.into();
        let validator = match bound {
            Bound::Included => Validator::new(
                format!("must be greater or equal to {min}."),
                move |value| value.as_f64().is_some_and(|n| n >= min),
            ),
            Bound::Excluded => Validator::new(format!("must be greater than {min}."), move |value| {
                value.as_f64().is_some_and(|n| n > min)
            }),
        };
        self.refine(validator)
    }

    /// Require the number to be below `max`.
    pub fn less_than(self, max: impl Into<f64>, bound: Bound) -> Self {
        let max = max.into();
        let validator = match bound {
            Bound::Included => Validator::new(
                format!("must be less or equal to {max}."),
                move |value| value.as_f64().is_some_and(|n| n <= max),
            ),
            Bound::Excluded => Validator::new(format!("must be less than {max}."), move |value| {
                value.as_f64().is_some_and(|n| n < max)
            }),
        };
        self.refine(validator)
    }
}

// Lengths count chars, not bytes.
fn length(value: &Value) -> Option<usize> {
    value.as_str().map(|text| text.chars().count())
}

impl<O: Obligation> StringStage<O> {
    /// Require the text to be longer than `min` characters.
    pub fn longer_than(self, min: usize, bound: Bound) -> Self {
        let validator = match bound {
            Bound::Included => Validator::new(
                format!("must be at least {min} characters long."),
                move |value| length(value).is_some_and(|n| n >= min),
            ),
            Bound::Excluded => Validator::new(
                format!("must be longer than {min} characters."),
                move |value| length(value).is_some_and(|n| n > min),
            ),
        };
        self.refine(validator)
    }

    /// Require the text to be shorter than `max` characters.
    pub fn shorter_than(self, max: usize, bound: Bound) -> Self {
        let validator = match bound {
            Bound::Included => Validator::new(
                format!("must be at most {max} characters long."),
                move |value| length(value).is_some_and(|n| n <= max),
            ),
            Bound::Excluded => Validator::new(
                format!("must be shorter than {max} characters."),
                move |value| length(value).is_some_and(|n| n < max),
            ),
        };
        self.refine(validator)
    }
}

impl Otherwise<bool> for BooleanStage<Optional> {
    fn otherwise(self, default: bool) -> Filter {
        self.filter.with_default(Value::Boolean(default))
    }
}

impl<N: Into<f64>> Otherwise<N> for NumberStage<Optional> {
    fn otherwise(self, default: N) -> Filter {
        self.filter.with_default(Value::Number(default.into()))
    }
}

impl<S: Into<String>> Otherwise<S> for StringStage<Optional> {
    fn otherwise(self, default: S) -> Filter {
        self.filter.with_default(Value::String(default.into()))
    }
}

impl<S: Into<String>> Otherwise<S> for ListStage<Optional> {
    fn otherwise(self, default: S) -> Filter {
        self.filter.with_default(Value::String(default.into()))
    }
}
