use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use super::FormulaError;

/// Name of the variable which is used to eliminate constants in operator
/// bases without constants.
pub const PLACEHOLDER: &str = "p";

/// Returns `true` if `name` is a valid variable name.
///
/// A variable name starts with a lowercase ASCII letter, followed by any
/// number of ASCII digits.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::is_variable_name;
/// assert!(is_variable_name("p"));
/// assert!(is_variable_name("x12"));
/// assert!(!is_variable_name("T"));
/// assert!(!is_variable_name("ab"));
/// assert!(!is_variable_name(""));
/// ```
pub fn is_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase()) && chars.all(|c| c.is_ascii_digit())
}

/// A boolean variable.
///
/// The name is shared, so cloning a variable is cheap.
#[derive(Hash, Eq, PartialEq, Clone, Debug, Ord, PartialOrd)]
pub struct Variable(Arc<str>);

impl Variable {
    /// Creates a new variable with the given name.
    ///
    /// Returns [`FormulaError::InvalidVariable`] if the name does not satisfy
    /// [`is_variable_name`].
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logicng_basis::formulas::Variable;
    /// let q = Variable::new("q").unwrap();
    /// assert_eq!(q.name(), "q");
    ///
    /// assert!(Variable::new("Q").is_err());
    /// ```
    pub fn new<S: AsRef<str>>(name: S) -> Result<Self, FormulaError> {
        let name = name.as_ref();
        if is_variable_name(name) {
            Ok(Self(Arc::from(name)))
        } else {
            Err(FormulaError::InvalidVariable(name.to_owned()))
        }
    }

    /// The variable [`PLACEHOLDER`].
    pub fn placeholder() -> Self {
        Self(Arc::from(PLACEHOLDER))
    }

    /// Creates a variable from a name the grammar already accepted.
    pub(crate) fn parsed(name: &str) -> Self {
        debug_assert!(is_variable_name(name));
        Self(Arc::from(name))
    }

    /// Returns the name of this variable.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Variable {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Variable {
    type Error = FormulaError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{is_variable_name, Variable, PLACEHOLDER};
    use crate::formulas::FormulaError;

    #[test]
    fn test_variable_names() {
        for name in ["a", "p", "z", "p1", "q0", "x1234567890"] {
            assert!(is_variable_name(name), "{name}");
        }
        for name in ["", "A", "T", "F", "1", "p_1", "pq", "p1q", "~p", " p", "ä"] {
            assert!(!is_variable_name(name), "{name}");
        }
    }

    #[test]
    fn test_creation() {
        assert_eq!(Variable::new("q12").unwrap().name(), "q12");
        assert_eq!("q".parse::<Variable>().unwrap(), Variable::new("q").unwrap());
        assert_eq!(Variable::try_from("r").unwrap().to_string(), "r");
        assert_eq!(Variable::placeholder().name(), PLACEHOLDER);
        match Variable::new("Foo") {
            Err(FormulaError::InvalidVariable(name)) => assert_eq!(name, "Foo"),
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_ordering() {
        let mut vars = vec![Variable::new("q").unwrap(), Variable::new("a2").unwrap(), Variable::new("a1").unwrap()];
        vars.sort();
        assert_eq!(vars.iter().map(Variable::name).collect::<Vec<_>>(), vec!["a1", "a2", "q"]);
    }
}
