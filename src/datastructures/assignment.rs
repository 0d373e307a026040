use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::formulas::{FormulaError, Variable};

/// An `Assignment` stores a set of variables assigned to `true` and a set of
/// variables assigned to `false`.
///
/// Variables which are in neither set are unassigned. [`Formula::evaluate`]
/// treats them as `false`.
///
/// [`Formula::evaluate`]: crate::formulas::Formula::evaluate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    /// Set of all variables assigned to `true`.
    pub pos: HashSet<Variable>,
    /// Set of all variables assigned to `false`.
    pub neg: HashSet<Variable>,
}

impl Assignment {
    /// Creates a new assignment.
    pub const fn new(pos: HashSet<Variable>, neg: HashSet<Variable>) -> Self {
        Self { pos, neg }
    }

    /// Creates a new assignment from slices.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logicng_basis::datastructures::Assignment;
    /// # use logicng_basis::formulas::Variable;
    /// let a = Variable::new("a").unwrap();
    /// let b = Variable::new("b").unwrap();
    ///
    /// let assignment = Assignment::from_variables(&[a.clone()], &[b.clone()]);
    ///
    /// assert_eq!(assignment.value(&a), Some(true));
    /// assert_eq!(assignment.value(&b), Some(false));
    /// ```
    pub fn from_variables(pos: &[Variable], neg: &[Variable]) -> Self {
        Self { pos: pos.iter().cloned().collect(), neg: neg.iter().cloned().collect() }
    }

    /// Creates a new assignment from variable names.
    ///
    /// Returns an error if one of the names is not a valid variable name.
    pub fn from_names(pos: &[&str], neg: &[&str]) -> Result<Self, FormulaError> {
        let pos = pos.iter().map(Variable::new).collect::<Result<_, _>>()?;
        let neg = neg.iter().map(Variable::new).collect::<Result<_, _>>()?;
        Ok(Self { pos, neg })
    }

    /// Creates the assignment with number `bits` over `variables`.
    ///
    /// The first variable corresponds to the most significant bit, so
    /// counting `bits` from `0` to `2^n - 1` enumerates all assignments in the
    /// order of a truth table.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use logicng_basis::datastructures::Assignment;
    /// # use logicng_basis::formulas::Variable;
    /// let p = Variable::new("p").unwrap();
    /// let q = Variable::new("q").unwrap();
    ///
    /// let assignment = Assignment::from_bits(&[p.clone(), q.clone()], 0b10);
    ///
    /// assert_eq!(assignment.value(&p), Some(true));
    /// assert_eq!(assignment.value(&q), Some(false));
    /// ```
    pub fn from_bits(variables: &[Variable], bits: u64) -> Self {
        let mut assignment = Self::default();
        for (i, var) in variables.iter().rev().enumerate() {
            assignment.add(var.clone(), (bits >> i) & 1 == 1);
        }
        assignment
    }

    /// Assigns `value` to `var`.
    ///
    /// Returns `true` iff the variable previously was not assigned to this
    /// value. A previous assignment to the opposite value is removed.
    pub fn add(&mut self, var: Variable, value: bool) -> bool {
        if value {
            self.neg.remove(&var);
            self.pos.insert(var)
        } else {
            self.pos.remove(&var);
            self.neg.insert(var)
        }
    }

    /// Returns all variables assigned to `true`.
    pub const fn pos(&self) -> &HashSet<Variable> {
        &self.pos
    }

    /// Returns all variables assigned to `false`.
    pub const fn neg(&self) -> &HashSet<Variable> {
        &self.neg
    }

    /// Returns the number of assigned variables.
    pub fn len(&self) -> usize {
        self.pos.len() + self.neg.len()
    }

    /// Returns `true` if no variable is assigned.
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty() && self.neg.is_empty()
    }

    /// Returns `true` if `var` is assigned to `true`.
    pub fn contains_pos(&self, var: &Variable) -> bool {
        self.pos.contains(var)
    }

    /// Returns `true` if `var` is assigned to `false`.
    pub fn contains_neg(&self, var: &Variable) -> bool {
        self.neg.contains(var)
    }

    /// Returns the value of `var`, or `None` if it is unassigned.
    pub fn value(&self, var: &Variable) -> Option<bool> {
        if self.contains_pos(var) {
            Some(true)
        } else if self.contains_neg(var) {
            Some(false)
        } else {
            None
        }
    }

    /// Evaluates `var`; unassigned variables are `false`.
    pub fn evaluate_variable(&self, var: &Variable) -> bool {
        self.contains_pos(var)
    }
}

impl Display for Assignment {
    /// Writes the assigned variables in alphabetical order, variables assigned
    /// to `false` prefixed with `~`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let entries = self
            .pos
            .iter()
            .map(|v| (v, true))
            .chain(self.neg.iter().map(|v| (v, false)))
            .sorted()
            .map(|(v, value)| if value { v.to_string() } else { format!("~{v}") });
        write!(f, "[{}]", entries.format(", "))
    }
}
