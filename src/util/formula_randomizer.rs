use fastrand::Rng;

use crate::formulas::{BinaryOperator, Formula, Variable};

/// A configuration for randomizing formulas.
///
/// The following things can be configured:
/// - the seed, which makes the generated formulas deterministic
/// - the variables, all of which have the same probability of being chosen
/// - weights for the different formula types, defining how often a formula
///   type is generated compared to other types.
///
/// Note that the weights only apply to inner nodes of the generated formula.
/// At the maximal depth, only constants and variables are generated, so their
/// effective weight is higher.
#[derive(Clone, PartialEq, Debug)]
pub struct FormulaRandomizerConfig {
    pub(crate) seed: u64,
    pub(crate) variables: Vec<Variable>,
    pub(crate) weight_constant: f32,
    pub(crate) weight_variable: f32,
    pub(crate) weight_not: f32,
    pub(crate) weight_and: f32,
    pub(crate) weight_or: f32,
    pub(crate) weight_impl: f32,
    pub(crate) weight_xor: f32,
    pub(crate) weight_equiv: f32,
    pub(crate) weight_nand: f32,
    pub(crate) weight_nor: f32,
}

impl FormulaRandomizerConfig {
    /// Builds a basic configuration with the given variables and with default
    /// settings. By default, all eleven formula types are generated.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logicng_basis::formulas::Variable;
    /// # use logicng_basis::util::formula_randomizer::FormulaRandomizerConfig;
    /// let variables = vec![Variable::new("a").unwrap(), Variable::new("b").unwrap()];
    /// let config = FormulaRandomizerConfig::default_with_variables(variables);
    /// ```
    pub fn default_with_variables(variables: Vec<Variable>) -> Self {
        Self {
            seed: 42_u64,
            variables,
            weight_constant: 0.5,
            weight_variable: 4.0,
            weight_not: 2.0,
            weight_and: 2.0,
            weight_or: 2.0,
            weight_impl: 1.0,
            weight_xor: 1.0,
            weight_equiv: 1.0,
            weight_nand: 1.0,
            weight_nor: 1.0,
        }
    }

    /// Builds a basic configuration with default settings. Additionally, it
    /// generates `num_vars` variables `v0`, `v1`, ... and adds them to the
    /// configuration.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logicng_basis::util::formula_randomizer::FormulaRandomizerConfig;
    /// let config = FormulaRandomizerConfig::default_with_num_vars(2);
    /// ```
    pub fn default_with_num_vars(num_vars: usize) -> Self {
        Self::default_with_variables((0..num_vars).map(|n| Variable::parsed(&format!("v{n}"))).collect())
    }

    /// Updates the seed, which will be used to generate pseudo-random values.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logicng_basis::util::formula_randomizer::FormulaRandomizerConfig;
    /// let config = FormulaRandomizerConfig::default_with_num_vars(4)
    ///         // ...
    ///         .seed(24)
    ///         // ...
    ///         ;
    /// ```
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the relative weight of a constant.
    #[must_use]
    pub const fn weight_constant(mut self, weight_constant: f32) -> Self {
        self.weight_constant = weight_constant;
        self
    }

    /// Sets the relative weight of a variable.
    #[must_use]
    pub const fn weight_variable(mut self, weight_variable: f32) -> Self {
        self.weight_variable = weight_variable;
        self
    }

    /// Sets the relative weight of a negation.
    #[must_use]
    pub const fn weight_not(mut self, weight_not: f32) -> Self {
        self.weight_not = weight_not;
        self
    }

    /// Sets the relative weight of a conjunction.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logicng_basis::util::formula_randomizer::FormulaRandomizerConfig;
    /// let config = FormulaRandomizerConfig::default_with_num_vars(4)
    ///         // ...
    ///         .weight_and(25.0)
    ///         // ...
    ///         ;
    /// ```
    #[must_use]
    pub const fn weight_and(mut self, weight_and: f32) -> Self {
        self.weight_and = weight_and;
        self
    }

    /// Sets the relative weight of a disjunction.
    #[must_use]
    pub const fn weight_or(mut self, weight_or: f32) -> Self {
        self.weight_or = weight_or;
        self
    }

    /// Sets the relative weight of an implication.
    #[must_use]
    pub const fn weight_impl(mut self, weight_impl: f32) -> Self {
        self.weight_impl = weight_impl;
        self
    }

    /// Sets the relative weight of an exclusive disjunction.
    #[must_use]
    pub const fn weight_xor(mut self, weight_xor: f32) -> Self {
        self.weight_xor = weight_xor;
        self
    }

    /// Sets the relative weight of an equivalence.
    #[must_use]
    pub const fn weight_equiv(mut self, weight_equiv: f32) -> Self {
        self.weight_equiv = weight_equiv;
        self
    }

    /// Sets the relative weight of a negated conjunction.
    #[must_use]
    pub const fn weight_nand(mut self, weight_nand: f32) -> Self {
        self.weight_nand = weight_nand;
        self
    }

    /// Sets the relative weight of a negated disjunction.
    #[must_use]
    pub const fn weight_nor(mut self, weight_nor: f32) -> Self {
        self.weight_nor = weight_nor;
        self
    }

    fn compute_formula_type_probabilities(&self) -> FormulaTypeProbabilities {
        let total = self.weight_constant
            + self.weight_variable
            + self.weight_not
            + self.weight_and
            + self.weight_or
            + self.weight_impl
            + self.weight_xor
            + self.weight_equiv
            + self.weight_nand
            + self.weight_nor;
        let constant = self.weight_constant / total;
        let variable = constant + self.weight_variable / total;
        let not = variable + self.weight_not / total;
        let and = not + self.weight_and / total;
        let or = and + self.weight_or / total;
        let implication = or + self.weight_impl / total;
        let xor = implication + self.weight_xor / total;
        let equivalence = xor + self.weight_equiv / total;
        let nand = equivalence + self.weight_nand / total;
        FormulaTypeProbabilities { constant, variable, not, and, or, implication, xor, equivalence, nand }
    }
}

struct FormulaTypeProbabilities {
    constant: f32,
    variable: f32,
    not: f32,
    and: f32,
    or: f32,
    implication: f32,
    xor: f32,
    equivalence: f32,
    nand: f32,
}

/// A generator for random formulas.
///
/// The formula types included in the generated formulas can be configured with
/// a [`FormulaRandomizerConfig`]. Formulas are never simplified, so every
/// generated node has the type which was drawn for it.
pub struct FormulaRandomizer {
    config: FormulaRandomizerConfig,
    random: Rng,
    formula_probs: FormulaTypeProbabilities,
}

impl FormulaRandomizer {
    /// Builds a new `FormulaRandomizer` from a [`FormulaRandomizerConfig`].
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logicng_basis::util::formula_randomizer::{FormulaRandomizerConfig, FormulaRandomizer};
    /// let config = FormulaRandomizerConfig::default_with_num_vars(5);
    /// let mut randomizer = FormulaRandomizer::new(config);
    /// ```
    pub fn new(config: FormulaRandomizerConfig) -> Self {
        let seed = config.seed;
        let formula_probs = config.compute_formula_type_probabilities();
        Self { config, random: Rng::with_seed(seed), formula_probs }
    }

    /// Returns a random constant.
    pub fn constant(&mut self) -> Formula {
        Formula::constant(self.random.bool())
    }

    /// Returns a random variable of the configuration.
    ///
    /// # Panics
    ///
    /// The function panics if the configuration has no variables.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logicng_basis::formulas::Variable;
    /// # use logicng_basis::util::formula_randomizer::{FormulaRandomizerConfig, FormulaRandomizer};
    /// let config = FormulaRandomizerConfig::default_with_variables(vec![Variable::new("a").unwrap()]);
    /// let mut randomizer = FormulaRandomizer::new(config);
    ///
    /// assert_eq!(randomizer.variable().to_string(), "a");
    /// ```
    pub fn variable(&mut self) -> Formula {
        assert!(!self.config.variables.is_empty(), "Cannot generate a variable without variables");
        Formula::var(&self.config.variables[self.random.usize(0..self.config.variables.len())])
    }

    /// Returns a random atom, i.e. a constant or a variable, according to
    /// their relative weights.
    pub fn atom(&mut self) -> Formula {
        let n = self.random.f32() * self.formula_probs.variable;
        if n < self.formula_probs.constant {
            self.constant()
        } else {
            self.variable_or_constant()
        }
    }

    fn variable_or_constant(&mut self) -> Formula {
        if self.config.variables.is_empty() {
            self.constant()
        } else {
            self.variable()
        }
    }

    /// Returns a random negation with a given maximal depth.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logicng_basis::util::formula_randomizer::{FormulaRandomizerConfig, FormulaRandomizer};
    /// # let config = FormulaRandomizerConfig::default_with_num_vars(10);
    /// # let mut randomizer = FormulaRandomizer::new(config);
    /// let negation = randomizer.not(2);
    ///
    /// assert!(negation.to_string().starts_with('~'));
    /// ```
    pub fn not(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.atom()
        } else {
            Formula::not(self.formula(max_depth - 1))
        }
    }

    /// Returns a random binary formula with operator `op` and a given maximal
    /// depth.
    pub fn binary(&mut self, op: BinaryOperator, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.atom()
        } else {
            let left = self.formula(max_depth - 1);
            let right = self.formula(max_depth - 1);
            Formula::binary(op, left, right)
        }
    }

    /// Returns a random conjunction with a given maximal depth.
    pub fn and(&mut self, max_depth: u32) -> Formula {
        self.binary(BinaryOperator::And, max_depth)
    }

    /// Returns a random disjunction with a given maximal depth.
    pub fn or(&mut self, max_depth: u32) -> Formula {
        self.binary(BinaryOperator::Or, max_depth)
    }

    /// Returns a random implication with a given maximal depth.
    pub fn implication(&mut self, max_depth: u32) -> Formula {
        self.binary(BinaryOperator::Impl, max_depth)
    }

    /// Returns a random exclusive disjunction with a given maximal depth.
    pub fn xor(&mut self, max_depth: u32) -> Formula {
        self.binary(BinaryOperator::Xor, max_depth)
    }

    /// Returns a random equivalence with a given maximal depth.
    pub fn equivalence(&mut self, max_depth: u32) -> Formula {
        self.binary(BinaryOperator::Equiv, max_depth)
    }

    /// Returns a random negated conjunction with a given maximal depth.
    pub fn nand(&mut self, max_depth: u32) -> Formula {
        self.binary(BinaryOperator::Nand, max_depth)
    }

    /// Returns a random negated disjunction with a given maximal depth.
    pub fn nor(&mut self, max_depth: u32) -> Formula {
        self.binary(BinaryOperator::Nor, max_depth)
    }

    /// Returns a random formula with a given maximal depth.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use logicng_basis::operations::functions::formula_depth;
    /// # use logicng_basis::util::formula_randomizer::{FormulaRandomizerConfig, FormulaRandomizer};
    /// # let config = FormulaRandomizerConfig::default_with_num_vars(10);
    /// # let mut randomizer = FormulaRandomizer::new(config);
    /// let formula = randomizer.formula(2);
    ///
    /// assert!(formula_depth(&formula) <= 2);
    /// ```
    pub fn formula(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.atom()
        } else {
            let n = self.random.f32();
            if n < self.formula_probs.constant {
                self.constant()
            } else if n < self.formula_probs.variable {
                self.variable_or_constant()
            } else if n < self.formula_probs.not {
                self.not(max_depth)
            } else if n < self.formula_probs.and {
                self.and(max_depth)
            } else if n < self.formula_probs.or {
                self.or(max_depth)
            } else if n < self.formula_probs.implication {
                self.implication(max_depth)
            } else if n < self.formula_probs.xor {
                self.xor(max_depth)
            } else if n < self.formula_probs.equivalence {
                self.equivalence(max_depth)
            } else if n < self.formula_probs.nand {
                self.nand(max_depth)
            } else {
                self.nor(max_depth)
            }
        }
    }

    /// Returns a list of `num_formulas` random formulas with a given maximal
    /// depth.
    pub fn formulas(&mut self, num_formulas: u32, max_depth: u32) -> Vec<Formula> {
        (0..num_formulas).map(|_| self.formula(max_depth)).collect()
    }
}
