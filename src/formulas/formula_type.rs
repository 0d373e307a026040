use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::{is_variable_name, FormulaError};

/// Specifies all root kinds a [`Formula`] can have.
///
/// You can get the type of a `Formula` by calling [`Formula::formula_type()`].
///
/// [`Formula`]: super::Formula
/// [`Formula::formula_type()`]: super::Formula::formula_type
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum FormulaType {
    /// Variable
    Var,
    /// Constant true
    True,
    /// Constant false
    False,
    /// Negation
    Not,
    /// Conjunction
    And,
    /// Disjunction
    Or,
    /// Implication
    Impl,
    /// Exclusive disjunction
    Xor,
    /// Equivalence
    Equiv,
    /// Negated conjunction
    Nand,
    /// Negated disjunction
    Nor,
}

impl FormulaType {
    /// All root kinds.
    pub const ALL: [Self; 11] = [
        Self::Var,
        Self::True,
        Self::False,
        Self::Not,
        Self::And,
        Self::Or,
        Self::Impl,
        Self::Xor,
        Self::Equiv,
        Self::Nand,
        Self::Nor,
    ];

    /// Returns the label of this root kind in the textual syntax, or `None`
    /// for variables, whose label is their name.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logicng_basis::formulas::FormulaType;
    /// assert_eq!(FormulaType::Nand.label(), Some("-&"));
    /// assert_eq!(FormulaType::True.label(), Some("T"));
    /// assert_eq!(FormulaType::Var.label(), None);
    /// ```
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::Var => None,
            Self::True => Some("T"),
            Self::False => Some("F"),
            Self::Not => Some("~"),
            Self::And => Some("&"),
            Self::Or => Some("|"),
            Self::Impl => Some("->"),
            Self::Xor => Some("+"),
            Self::Equiv => Some("<->"),
            Self::Nand => Some("-&"),
            Self::Nor => Some("-|"),
        }
    }

    /// Classifies a root label.
    ///
    /// Variable names are classified as [`FormulaType::Var`]. Returns `None`
    /// if the label is not recognized.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logicng_basis::formulas::FormulaType;
    /// assert_eq!(FormulaType::of_root("q3"), Some(FormulaType::Var));
    /// assert_eq!(FormulaType::of_root("<->"), Some(FormulaType::Equiv));
    /// assert_eq!(FormulaType::of_root("=>"), None);
    /// ```
    pub fn of_root(label: &str) -> Option<Self> {
        match label {
            "T" => Some(Self::True),
            "F" => Some(Self::False),
            "~" => Some(Self::Not),
            "&" => Some(Self::And),
            "|" => Some(Self::Or),
            "->" => Some(Self::Impl),
            "+" => Some(Self::Xor),
            "<->" => Some(Self::Equiv),
            "-&" => Some(Self::Nand),
            "-|" => Some(Self::Nor),
            _ if is_variable_name(label) => Some(Self::Var),
            _ => None,
        }
    }

    /// Returns the number of operands a formula of this type has.
    pub const fn arity(self) -> usize {
        match self {
            Self::Var | Self::True | Self::False => 0,
            Self::Not => 1,
            _ => 2,
        }
    }

    /// Returns `true` for the constants `True` and `False`.
    pub const fn is_constant(self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// Returns `true` for the unary operator `Not`.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Not)
    }

    /// Returns `true` for all binary operators.
    pub const fn is_binary(self) -> bool {
        self.arity() == 2
    }
}

impl Display for FormulaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("variable"))
    }
}

impl FromStr for FormulaType {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of_root(s).ok_or_else(|| FormulaError::UnknownRoot(s.to_owned()))
    }
}

/// Returns `true` if `label` is one of the constants `T` and `F`.
pub fn is_constant(label: &str) -> bool {
    FormulaType::of_root(label).is_some_and(FormulaType::is_constant)
}

/// Returns `true` if `label` is the unary operator `~`.
pub fn is_unary(label: &str) -> bool {
    FormulaType::of_root(label).is_some_and(FormulaType::is_unary)
}

/// Returns `true` if `label` is one of the binary operators `&`, `|`, `->`,
/// `+`, `<->`, `-&`, and `-|`.
pub fn is_binary(label: &str) -> bool {
    FormulaType::of_root(label).is_some_and(FormulaType::is_binary)
}

/// The binary operators.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum BinaryOperator {
    /// `&`
    And,
    /// `|`
    Or,
    /// `->`
    Impl,
    /// `+`
    Xor,
    /// `<->`
    Equiv,
    /// `-&`
    Nand,
    /// `-|`
    Nor,
}

impl BinaryOperator {
    /// Returns the [`FormulaType`] of a formula with this operator as root.
    pub const fn formula_type(self) -> FormulaType {
        match self {
            Self::And => FormulaType::And,
            Self::Or => FormulaType::Or,
            Self::Impl => FormulaType::Impl,
            Self::Xor => FormulaType::Xor,
            Self::Equiv => FormulaType::Equiv,
            Self::Nand => FormulaType::Nand,
            Self::Nor => FormulaType::Nor,
        }
    }

    /// Returns the label of this operator.
    pub const fn label(self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Impl => "->",
            Self::Xor => "+",
            Self::Equiv => "<->",
            Self::Nand => "-&",
            Self::Nor => "-|",
        }
    }

    /// Applies this operator to two truth values.
    pub const fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left && right,
            Self::Or => left || right,
            Self::Impl => !left || right,
            Self::Xor => left != right,
            Self::Equiv => left == right,
            Self::Nand => !(left && right),
            Self::Nor => !(left || right),
        }
    }
}

impl TryFrom<FormulaType> for BinaryOperator {
    type Error = FormulaType;

    fn try_from(value: FormulaType) -> Result<Self, Self::Error> {
        match value {
            FormulaType::And => Ok(Self::And),
            FormulaType::Or => Ok(Self::Or),
            FormulaType::Impl => Ok(Self::Impl),
            FormulaType::Xor => Ok(Self::Xor),
            FormulaType::Equiv => Ok(Self::Equiv),
            FormulaType::Nand => Ok(Self::Nand),
            FormulaType::Nor => Ok(Self::Nor),
            other => Err(other),
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
