mod implies_false;
mod implies_not;
mod nand;
mod not_and;
mod not_and_or;

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::ptr;
use std::str::FromStr;
use std::sync::Arc;

pub use implies_false::*;
pub use implies_not::*;
pub use nand::*;
pub use not_and::*;
pub use not_and_or::*;

use tracing::trace;

use crate::formulas::{BinaryOperator, Formula, FormulaError, FormulaType, Variable};
use crate::operations::functions::formula_depth;

/// The operator bases a formula can be converted into.
///
/// Each basis is functionally complete: every formula has an equivalent
/// formula which only uses the operators of the basis (and variables).
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum Basis {
    /// `~`, `&`, and `|`
    NotAndOr,
    /// `~` and `&`
    NotAnd,
    /// `-&`
    Nand,
    /// `->` and `~`
    ImpliesNot,
    /// `->` and the constant `F`
    ImpliesFalse,
}

impl Basis {
    /// All operator bases.
    pub const ALL: [Self; 5] = [Self::NotAndOr, Self::NotAnd, Self::Nand, Self::ImpliesNot, Self::ImpliesFalse];

    /// Returns the operators and constants of this basis. Variables are part
    /// of every basis and not included.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logicng_basis::formulas::FormulaType;
    /// # use logicng_basis::operations::transformations::Basis;
    /// assert_eq!(Basis::ImpliesFalse.operators(), &[FormulaType::Impl, FormulaType::False]);
    /// ```
    pub const fn operators(self) -> &'static [FormulaType] {
        match self {
            Self::NotAndOr => &[FormulaType::Not, FormulaType::And, FormulaType::Or],
            Self::NotAnd => &[FormulaType::Not, FormulaType::And],
            Self::Nand => &[FormulaType::Nand],
            Self::ImpliesNot => &[FormulaType::Impl, FormulaType::Not],
            Self::ImpliesFalse => &[FormulaType::Impl, FormulaType::False],
        }
    }

    /// Returns `true` if a formula of this basis may contain a node of the
    /// given type.
    pub fn contains(self, ty: FormulaType) -> bool {
        ty == FormulaType::Var || self.operators().contains(&ty)
    }

    /// Converts `formula` into an equivalent formula of this basis, using the
    /// default [`BasisConfig`].
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logicng_basis::formulas::ToFormula;
    /// # use logicng_basis::operations::transformations::Basis;
    /// let formula = "p -> q".to_formula();
    ///
    /// assert_eq!(Basis::NotAndOr.convert(&formula).to_string(), "(~p|q)");
    /// assert_eq!(Basis::Nand.convert(&formula).to_string(), "(p-&(q-&q))");
    /// ```
    pub fn convert(self, formula: &Formula) -> Formula {
        self.convert_with(formula, &BasisConfig::default())
    }

    /// Converts `formula` into an equivalent formula of this basis, using the
    /// given configuration.
    pub fn convert_with(self, formula: &Formula, config: &BasisConfig) -> Formula {
        match self {
            Self::NotAndOr => convert_to_not_and_or_with(formula, config),
            Self::NotAnd => convert_to_not_and_with(formula, config),
            Self::Nand => convert_to_nand_with(formula, config),
            Self::ImpliesNot => convert_to_implies_not_with(formula, config),
            Self::ImpliesFalse => convert_to_implies_false(formula),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::NotAndOr => "not-and-or",
            Self::NotAnd => "not-and",
            Self::Nand => "nand",
            Self::ImpliesNot => "implies-not",
            Self::ImpliesFalse => "implies-false",
        }
    }
}

impl Display for Basis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Basis {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|basis| basis.name() == s).ok_or_else(|| FormulaError::UnknownBasis(s.to_owned()))
    }
}

/// `BasisConfig` is a configuration for the conversions into operator bases.
///
/// Bases without constants express `T` and `F` with a placeholder variable,
/// e.g. `p | ~p` and `p & ~p`. The placeholder cancels out, so any variable
/// works; the default is [`PLACEHOLDER`](crate::formulas::PLACEHOLDER). A
/// placeholder which also occurs in the converted formula is not detected and
/// the result then shares this variable with the input.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BasisConfig {
    /// The variable used to eliminate constants.
    pub placeholder: Variable,
}

impl BasisConfig {
    /// Creates a new `BasisConfig` with the default placeholder `p`.
    pub fn new() -> Self {
        Self { placeholder: Variable::placeholder() }
    }

    /// Updates the placeholder variable.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logicng_basis::formulas::{Formula, Variable};
    /// # use logicng_basis::operations::transformations::{Basis, BasisConfig};
    /// let config = BasisConfig::new().placeholder(Variable::new("z").unwrap());
    ///
    /// let converted = Basis::ImpliesNot.convert_with(&Formula::True, &config);
    /// assert_eq!(converted.to_string(), "(z->z)");
    /// ```
    #[must_use]
    pub fn placeholder(mut self, placeholder: Variable) -> Self {
        self.placeholder = placeholder;
        self
    }
}

impl Default for BasisConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A formula node whose operands are converted already.
enum Converted<'a> {
    /// A variable or a constant.
    Atom(&'a Formula),
    Not(Arc<Formula>),
    Binary(BinaryOperator, Arc<Formula>, Arc<Formula>),
}

/// The rewriting rules of a basis.
///
/// Operators the rules cannot express directly take a detour: the node is
/// replaced by an equivalent intermediate formula over its original operands,
/// which is converted in its place. Every intermediate only nests operators
/// which need at most one further detour, so the conversion terminates.
trait Converter {
    const BASIS: Basis;

    /// Returns the intermediate formula for a node which takes a detour.
    fn detour(&self, formula: &Formula) -> Option<Formula>;

    /// Rewrites a node which takes no detour.
    fn rewrite(&self, node: Converted<'_>) -> Formula;
}

enum Task {
    Visit(Arc<Formula>),
    Rewrite(Arc<Formula>),
    /// Records the last result as the result of a node which took a detour.
    Remember(Arc<Formula>),
}

/// Converts `formula` bottom-up with an explicit work stack.
///
/// Results are memoized per node, so a sub-formula which occurs several
/// times, in the input or in the intermediates of detours, is converted once
/// and shared in the result. The memo keeps every visited node alive until
/// the conversion is done.
fn convert_iteratively<C: Converter>(formula: &Formula, converter: &C) -> Formula {
    trace!(basis = %C::BASIS, depth = formula_depth(formula), "converting formula");
    let mut memo: HashMap<*const Formula, (Arc<Formula>, Arc<Formula>)> = HashMap::new();
    let mut tasks = vec![Task::Visit(Arc::new(formula.clone()))];
    let mut results: Vec<Arc<Formula>> = Vec::new();
    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit(node) => {
                if let Some((_, result)) = memo.get(&ptr::from_ref(node.as_ref())) {
                    results.push(Arc::clone(result));
                } else if let Some(intermediate) = converter.detour(&node) {
                    tasks.push(Task::Remember(node));
                    tasks.push(Task::Visit(Arc::new(intermediate)));
                } else {
                    let operands = operands(&node);
                    tasks.push(Task::Rewrite(node));
                    tasks.extend(operands.into_iter().rev().map(Task::Visit));
                }
            }
            Task::Rewrite(node) => {
                let converted = match node.as_ref() {
                    Formula::Not(_) => Converted::Not(pop(&mut results)),
                    other => match other.as_binary() {
                        Some((op, _, _)) => {
                            let right = pop(&mut results);
                            Converted::Binary(op, pop(&mut results), right)
                        }
                        None => Converted::Atom(other),
                    },
                };
                let result = Arc::new(converter.rewrite(converted));
                results.push(Arc::clone(&result));
                memo.insert(ptr::from_ref(node.as_ref()), (node, result));
            }
            Task::Remember(node) => {
                let result = Arc::clone(results.last().unwrap_or_else(|| unreachable!("a detour yields a result")));
                memo.insert(ptr::from_ref(node.as_ref()), (node, result));
            }
        }
    }
    drop(memo);
    Arc::unwrap_or_clone(pop(&mut results))
}

fn operands(formula: &Formula) -> Vec<Arc<Formula>> {
    match formula {
        Formula::Not(op) => vec![Arc::clone(op)],
        _ => formula.as_binary().map_or_else(Vec::new, |(_, left, right)| vec![Arc::clone(left), Arc::clone(right)]),
    }
}

fn pop(results: &mut Vec<Arc<Formula>>) -> Arc<Formula> {
    results.pop().unwrap_or_else(|| unreachable!("operands are converted before their parent"))
}
