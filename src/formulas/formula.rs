use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::mem;
use std::ptr;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use crate::datastructures::Assignment;
use crate::parser;

use super::{BinaryOperator, FormulaError, FormulaType, Variable};

/// A propositional formula.
///
/// A formula is an immutable tree. The operands are reference counted, so a
/// sub-formula can occur several times in a formula without being copied, and
/// cloning a formula never copies more than its root. Since formulas are never
/// mutated, they can be shared between threads.
///
/// The eleven variants are closed: every operation on formulas is an
/// exhaustive `match`, so a new operator is a compile error in all of them.
///
/// Evaluation, printing, the conversions, and dropping a formula work with an
/// explicit stack, so deeply nested formulas do not overflow the call stack.
/// The derived comparisons and `Debug` are recursive.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::{Formula, ToFormula};
/// let p = Formula::variable("p").unwrap();
/// let q = Formula::variable("q").unwrap();
///
/// let formula = Formula::implication(Formula::not(p), q);
///
/// assert_eq!(formula.to_string(), "(~p->q)");
/// assert_eq!(formula, "~p -> q".to_formula());
/// ```
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum Formula {
    /// Variable
    Var(Variable),
    /// Constant true, `T`
    True,
    /// Constant false, `F`
    False,
    /// Negation, `~`
    Not(Arc<Formula>),
    /// Conjunction, `&`
    And(Arc<Formula>, Arc<Formula>),
    /// Disjunction, `|`
    Or(Arc<Formula>, Arc<Formula>),
    /// Implication, `->`
    Impl(Arc<Formula>, Arc<Formula>),
    /// Exclusive disjunction, `+`
    Xor(Arc<Formula>, Arc<Formula>),
    /// Equivalence, `<->`
    Equiv(Arc<Formula>, Arc<Formula>),
    /// Negated conjunction, `-&`
    Nand(Arc<Formula>, Arc<Formula>),
    /// Negated disjunction, `-|`
    Nor(Arc<Formula>, Arc<Formula>),
}

impl Formula {
    /// Creates a new variable formula.
    pub fn var(variable: &Variable) -> Self {
        Self::Var(variable.clone())
    }

    /// Creates a new variable formula from a name.
    ///
    /// Returns [`FormulaError::InvalidVariable`] if the name is not a valid
    /// variable name.
    pub fn variable<S: AsRef<str>>(name: S) -> Result<Self, FormulaError> {
        Variable::new(name).map(Self::Var)
    }

    /// Creates the constant `true` or `false` based on `value`.
    pub const fn constant(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }

    /// Creates the constant `true`.
    pub const fn verum() -> Self {
        Self::True
    }

    /// Creates the constant `false`.
    pub const fn falsum() -> Self {
        Self::False
    }

    /// Creates the negation of `operand`.
    ///
    /// Unlike in most formula libraries, no simplification takes place:
    /// `~~a` stays a double negation.
    pub fn not<O: Into<Arc<Self>>>(operand: O) -> Self {
        Self::Not(operand.into())
    }

    /// Creates the conjunction `left & right`.
    pub fn and<L: Into<Arc<Self>>, R: Into<Arc<Self>>>(left: L, right: R) -> Self {
        Self::And(left.into(), right.into())
    }

    /// Creates the disjunction `left | right`.
    pub fn or<L: Into<Arc<Self>>, R: Into<Arc<Self>>>(left: L, right: R) -> Self {
        Self::Or(left.into(), right.into())
    }

    /// Creates the implication `left -> right`.
    pub fn implication<L: Into<Arc<Self>>, R: Into<Arc<Self>>>(left: L, right: R) -> Self {
        Self::Impl(left.into(), right.into())
    }

    /// Creates the exclusive disjunction `left + right`.
    pub fn xor<L: Into<Arc<Self>>, R: Into<Arc<Self>>>(left: L, right: R) -> Self {
        Self::Xor(left.into(), right.into())
    }

    /// Creates the equivalence `left <-> right`.
    pub fn equivalence<L: Into<Arc<Self>>, R: Into<Arc<Self>>>(left: L, right: R) -> Self {
        Self::Equiv(left.into(), right.into())
    }

    /// Creates the negated conjunction `left -& right`.
    pub fn nand<L: Into<Arc<Self>>, R: Into<Arc<Self>>>(left: L, right: R) -> Self {
        Self::Nand(left.into(), right.into())
    }

    /// Creates the negated disjunction `left -| right`.
    pub fn nor<L: Into<Arc<Self>>, R: Into<Arc<Self>>>(left: L, right: R) -> Self {
        Self::Nor(left.into(), right.into())
    }

    /// Creates a binary formula with the given operator.
    pub fn binary<L: Into<Arc<Self>>, R: Into<Arc<Self>>>(op: BinaryOperator, left: L, right: R) -> Self {
        let (left, right) = (left.into(), right.into());
        match op {
            BinaryOperator::And => Self::And(left, right),
            BinaryOperator::Or => Self::Or(left, right),
            BinaryOperator::Impl => Self::Impl(left, right),
            BinaryOperator::Xor => Self::Xor(left, right),
            BinaryOperator::Equiv => Self::Equiv(left, right),
            BinaryOperator::Nand => Self::Nand(left, right),
            BinaryOperator::Nor => Self::Nor(left, right),
        }
    }

    /// Creates a formula from a root label and its operands.
    ///
    /// The label is a variable name, a constant (`T`, `F`), or an operator
    /// (`~`, `&`, `|`, `->`, `+`, `<->`, `-&`, `-|`). The number of given
    /// operands must match the arity of the label.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logicng_basis::formulas::{Formula, FormulaError, ToFormula};
    /// let p = Formula::from_root("p", None, None).unwrap();
    /// let q = Formula::from_root("q", None, None).unwrap();
    /// let xor = Formula::from_root("+", Some(p.clone()), Some(q)).unwrap();
    ///
    /// assert_eq!(xor, "p + q".to_formula());
    /// assert!(matches!(Formula::from_root("=>", None, None), Err(FormulaError::UnknownRoot(_))));
    /// assert!(matches!(Formula::from_root("~", None, None), Err(FormulaError::OperandMismatch { .. })));
    /// assert!(matches!(Formula::from_root("T", Some(p), None), Err(FormulaError::OperandMismatch { .. })));
    /// ```
    pub fn from_root(label: &str, first: Option<Self>, second: Option<Self>) -> Result<Self, FormulaError> {
        let ty = FormulaType::of_root(label).ok_or_else(|| FormulaError::UnknownRoot(label.to_owned()))?;
        let found = usize::from(first.is_some()) + usize::from(second.is_some());
        let mismatch = || FormulaError::OperandMismatch { root: label.to_owned(), expected: ty.arity(), found };
        match (ty, first, second) {
            (FormulaType::Var, None, None) => Ok(Self::Var(Variable::parsed(label))),
            (FormulaType::True, None, None) => Ok(Self::True),
            (FormulaType::False, None, None) => Ok(Self::False),
            (FormulaType::Not, Some(operand), None) => Ok(Self::not(operand)),
            (ty, Some(left), Some(right)) => {
                BinaryOperator::try_from(ty).map(|op| Self::binary(op, left, right)).map_err(|_| mismatch())
            }
            _ => Err(mismatch()),
        }
    }

    /// Returns the type of the root of this formula.
    pub const fn formula_type(&self) -> FormulaType {
        match self {
            Self::Var(_) => FormulaType::Var,
            Self::True => FormulaType::True,
            Self::False => FormulaType::False,
            Self::Not(_) => FormulaType::Not,
            Self::And(..) => FormulaType::And,
            Self::Or(..) => FormulaType::Or,
            Self::Impl(..) => FormulaType::Impl,
            Self::Xor(..) => FormulaType::Xor,
            Self::Equiv(..) => FormulaType::Equiv,
            Self::Nand(..) => FormulaType::Nand,
            Self::Nor(..) => FormulaType::Nor,
        }
    }

    /// Returns `true` if this formula is a variable.
    pub const fn is_variable(&self) -> bool {
        matches!(self, Self::Var(_))
    }

    /// Returns `true` if this formula is a constant.
    pub const fn is_constant(&self) -> bool {
        self.formula_type().is_constant()
    }

    /// Returns `true` if this formula is a negation.
    pub const fn is_unary(&self) -> bool {
        self.formula_type().is_unary()
    }

    /// Returns `true` if the root of this formula is a binary operator.
    pub const fn is_binary(&self) -> bool {
        self.formula_type().is_binary()
    }

    /// Returns the variable, if this formula is a variable.
    pub const fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Var(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the operator and the operands, if the root of this formula is
    /// a binary operator.
    pub fn as_binary(&self) -> Option<(BinaryOperator, &Arc<Self>, &Arc<Self>)> {
        match self {
            Self::And(l, r) => Some((BinaryOperator::And, l, r)),
            Self::Or(l, r) => Some((BinaryOperator::Or, l, r)),
            Self::Impl(l, r) => Some((BinaryOperator::Impl, l, r)),
            Self::Xor(l, r) => Some((BinaryOperator::Xor, l, r)),
            Self::Equiv(l, r) => Some((BinaryOperator::Equiv, l, r)),
            Self::Nand(l, r) => Some((BinaryOperator::Nand, l, r)),
            Self::Nor(l, r) => Some((BinaryOperator::Nor, l, r)),
            Self::Var(_) | Self::True | Self::False | Self::Not(_) => None,
        }
    }

    /// Returns the label of the root: the name for variables, the constant or
    /// operator symbol otherwise.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logicng_basis::formulas::ToFormula;
    /// assert_eq!("q7".to_formula().root(), "q7");
    /// assert_eq!("a -& b".to_formula().root(), "-&");
    /// assert_eq!("~T".to_formula().root(), "~");
    /// ```
    pub fn root(&self) -> Cow<'_, str> {
        match self {
            Self::Var(v) => Cow::Borrowed(v.name()),
            _ => Cow::Borrowed(self.formula_type().label().unwrap_or_default()),
        }
    }

    /// Returns the operand of a negation or the left operand of a binary
    /// formula.
    pub fn first(&self) -> Option<&Self> {
        match self {
            Self::Not(op) => Some(op.as_ref()),
            _ => self.as_binary().map(|(_, left, _)| left.as_ref()),
        }
    }

    /// Returns the right operand of a binary formula.
    pub fn second(&self) -> Option<&Self> {
        self.as_binary().map(|(_, _, right)| right.as_ref())
    }

    /// Returns all operands of this formula in order.
    pub fn operands(&self) -> Vec<&Self> {
        self.first().into_iter().chain(self.second()).collect()
    }

    /// Evaluates this formula with the given assignment.
    ///
    /// A variable which is not assigned evaluates to `false`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logicng_basis::formulas::{ToFormula, Variable};
    /// # use logicng_basis::datastructures::Assignment;
    /// let p = Variable::new("p").unwrap();
    /// let q = Variable::new("q").unwrap();
    /// let assignment = Assignment::from_variables(&[p], &[q]);
    ///
    /// assert!("p + q".to_formula().evaluate(&assignment));
    /// assert!(!"p -> q".to_formula().evaluate(&assignment));
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        self.fold(|node, values: &[bool]| match (node, values) {
            (Self::Var(v), []) => assignment.evaluate_variable(v),
            (Self::True, []) => true,
            (Self::False, []) => false,
            (Self::Not(_), [value]) => !value,
            (_, [left, right]) => node.as_binary().is_some_and(|(op, _, _)| op.apply(*left, *right)),
            _ => unreachable!("{} has {} operands", node.formula_type(), values.len()),
        })
    }

    /// Computes a value bottom-up: `combine` gets a node and the values of
    /// its operands in order.
    ///
    /// Nodes are visited with an explicit stack. A node which is shared by
    /// several parents is combined only once.
    pub(crate) fn fold<'a, T, C>(&'a self, mut combine: C) -> T
    where
        T: Clone,
        C: FnMut(&'a Self, &[T]) -> T,
    {
        enum Task<'b> {
            Visit(&'b Formula),
            Combine(&'b Formula),
        }

        let mut memo: HashMap<*const Self, T> = HashMap::new();
        let mut tasks = vec![Task::Visit(self)];
        let mut values: Vec<T> = Vec::new();
        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(node) => {
                    if let Some(value) = memo.get(&ptr::from_ref(node)) {
                        values.push(value.clone());
                    } else {
                        tasks.push(Task::Combine(node));
                        tasks.extend(node.operands().into_iter().rev().map(Task::Visit));
                    }
                }
                Task::Combine(node) => {
                    let at = values.len() - node.formula_type().arity();
                    let value = combine(node, &values[at..]);
                    values.truncate(at);
                    memo.insert(ptr::from_ref(node), value.clone());
                    values.push(value);
                }
            }
        }
        debug_assert_eq!(values.len(), 1);
        values.swap_remove(0)
    }

    /// Moves the operands out of this formula, replacing them by a shared
    /// constant.
    fn take_operands(&mut self, operands: &mut Vec<Arc<Self>>) {
        match self {
            Self::Var(_) | Self::True | Self::False => {}
            Self::Not(op) => operands.push(mem::replace(op, detached())),
            Self::And(left, right)
            | Self::Or(left, right)
            | Self::Impl(left, right)
            | Self::Xor(left, right)
            | Self::Equiv(left, right)
            | Self::Nand(left, right)
            | Self::Nor(left, right) => {
                operands.push(mem::replace(left, detached()));
                operands.push(mem::replace(right, detached()));
            }
        }
    }

    /// Parses a formula from its textual representation.
    ///
    /// See [`parser::parse`] for the syntax.
    pub fn parse<S: AsRef<str>>(input: S) -> Result<Self, FormulaError> {
        parser::parse(input)
    }
}

impl From<Variable> for Formula {
    fn from(variable: Variable) -> Self {
        Self::Var(variable)
    }
}

impl Display for Formula {
    /// Writes the formula with every binary operation in parentheses, e.g.
    /// `((p&~q)->F)`. The output is accepted by the parser.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        enum Token<'a> {
            Formula(&'a Formula),
            Text(&'static str),
        }

        let mut stack = vec![Token::Formula(self)];
        while let Some(token) = stack.pop() {
            match token {
                Token::Text(text) => f.write_str(text)?,
                Token::Formula(Self::Var(v)) => write!(f, "{v}")?,
                Token::Formula(Self::True) => f.write_str("T")?,
                Token::Formula(Self::False) => f.write_str("F")?,
                Token::Formula(Self::Not(op)) => {
                    f.write_str("~")?;
                    stack.push(Token::Formula(op));
                }
                Token::Formula(formula) => {
                    let (op, left, right) = formula.as_binary().ok_or(fmt::Error)?;
                    f.write_str("(")?;
                    stack.extend([Token::Text(")"), Token::Formula(right), Token::Text(op.label()), Token::Formula(left)]);
                }
            }
        }
        Ok(())
    }
}

impl Drop for Formula {
    fn drop(&mut self) {
        let mut operands = Vec::new();
        self.take_operands(&mut operands);
        while let Some(op) = operands.pop() {
            if let Some(mut formula) = Arc::into_inner(op) {
                formula.take_operands(&mut operands);
            }
        }
    }
}

/// The operand left behind in a formula whose operands were taken.
fn detached() -> Arc<Formula> {
    static DETACHED: OnceLock<Arc<Formula>> = OnceLock::new();
    Arc::clone(DETACHED.get_or_init(|| Arc::new(Formula::False)))
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

/// Conversion of strings into formulas, intended for tests and examples.
pub trait ToFormula {
    /// Parses `self` as formula.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a valid formula. Use [`Formula::parse`] to
    /// handle invalid input.
    fn to_formula(&self) -> Formula;
}

impl ToFormula for str {
    fn to_formula(&self) -> Formula {
        parser::parse(self).unwrap_or_else(|e| panic!("Invalid formula {self:?}: {e}"))
    }
}

impl ToFormula for String {
    fn to_formula(&self) -> Formula {
        self.as_str().to_formula()
    }
}
