#![allow(non_snake_case)]
#![allow(dead_code)]

use std::collections::BTreeSet;

use crate::formulas::{Formula, ToFormula, Variable};

pub fn var(name: &str) -> Variable {
    Variable::new(name).unwrap()
}

pub fn vars(elements: &str) -> BTreeSet<Variable> {
    elements.split(' ').map(var).collect()
}

pub fn vars_list(elements: &str) -> Vec<Variable> {
    elements.split(' ').map(var).collect()
}

pub fn formulas(elements: &[&str]) -> Vec<Formula> {
    elements.iter().map(|s| s.to_formula()).collect()
}

#[allow(clippy::struct_field_names)]
pub struct F {
    // Constants
    pub(crate) TRUE: Formula,
    pub(crate) FALSE: Formula,

    // Literals
    pub(crate) A: Formula,
    pub(crate) B: Formula,
    pub(crate) C: Formula,
    pub(crate) D: Formula,
    pub(crate) X: Formula,
    pub(crate) Y: Formula,
    pub(crate) Z: Formula,
    pub(crate) NA: Formula,
    pub(crate) NB: Formula,
    pub(crate) NX: Formula,
    pub(crate) NY: Formula,

    // Disjunctions
    pub(crate) OR1: Formula,
    pub(crate) OR2: Formula,
    pub(crate) OR3: Formula,

    // Conjunctions
    pub(crate) AND1: Formula,
    pub(crate) AND2: Formula,
    pub(crate) AND3: Formula,

    // Negations
    pub(crate) NOT1: Formula,
    pub(crate) NOT2: Formula,

    // Implications
    pub(crate) IMP1: Formula,
    pub(crate) IMP2: Formula,
    pub(crate) IMP3: Formula,
    pub(crate) IMP4: Formula,

    // Equivalences
    pub(crate) EQ1: Formula,
    pub(crate) EQ2: Formula,
    pub(crate) EQ3: Formula,
    pub(crate) EQ4: Formula,

    // Exclusive disjunctions
    pub(crate) XOR1: Formula,
    pub(crate) XOR2: Formula,

    // Negated conjunctions
    pub(crate) NAND1: Formula,
    pub(crate) NAND2: Formula,

    // Negated disjunctions
    pub(crate) NOR1: Formula,
    pub(crate) NOR2: Formula,
}

impl F {
    pub(crate) fn new() -> Self {
        let TRUE = Formula::verum();
        let FALSE = Formula::falsum();

        let A = Formula::var(&var("a"));
        let B = Formula::var(&var("b"));
        let C = Formula::var(&var("c"));
        let D = Formula::var(&var("d"));
        let X = Formula::var(&var("x"));
        let Y = Formula::var(&var("y"));
        let Z = Formula::var(&var("z"));
        let NA = Formula::not(A.clone());
        let NB = Formula::not(B.clone());
        let NX = Formula::not(X.clone());
        let NY = Formula::not(Y.clone());

        let OR1 = Formula::or(X.clone(), Y.clone());
        let OR2 = Formula::or(NX.clone(), NY.clone());
        let AND1 = Formula::and(A.clone(), B.clone());
        let AND2 = Formula::and(NA.clone(), NB.clone());

        let OR3 = Formula::or(AND1.clone(), AND2.clone());
        let AND3 = Formula::and(OR1.clone(), OR2.clone());

        let NOT1 = Formula::not(AND1.clone());
        let NOT2 = Formula::not(OR1.clone());

        let IMP1 = Formula::implication(A.clone(), B.clone());
        let EQ1 = Formula::equivalence(A.clone(), B.clone());
        let IMP2 = Formula::implication(NA.clone(), NB.clone());
        let IMP3 = Formula::implication(AND1.clone(), OR1.clone());

        let EQ5 = Formula::equivalence(NX.clone(), NY.clone());
        let IMP4 = Formula::implication(EQ1.clone(), EQ5);

        let EQ2 = Formula::equivalence(NA.clone(), NB.clone());
        let EQ3 = Formula::equivalence(AND1.clone(), OR1.clone());
        let EQ4 = Formula::equivalence(IMP1.clone(), IMP2.clone());

        let XOR1 = Formula::xor(A.clone(), B.clone());
        let XOR2 = Formula::xor(NX.clone(), NY.clone());
        let NAND1 = Formula::nand(A.clone(), B.clone());
        let NAND2 = Formula::nand(AND1.clone(), OR1.clone());
        let NOR1 = Formula::nor(A.clone(), B.clone());
        let NOR2 = Formula::nor(NX.clone(), NY.clone());

        Self {
            TRUE,
            FALSE,
            A,
            B,
            C,
            D,
            X,
            Y,
            Z,
            NA,
            NB,
            NX,
            NY,
            OR1,
            OR2,
            OR3,
            AND1,
            AND2,
            AND3,
            NOT1,
            NOT2,
            IMP1,
            IMP2,
            IMP3,
            IMP4,
            EQ1,
            EQ2,
            EQ3,
            EQ4,
            XOR1,
            XOR2,
            NAND1,
            NAND2,
            NOR1,
            NOR2,
        }
    }

    /// All fixtures, constants first.
    pub(crate) fn all(&self) -> Vec<&Formula> {
        vec![
            &self.TRUE,
            &self.FALSE,
            &self.A,
            &self.B,
            &self.C,
            &self.D,
            &self.X,
            &self.Y,
            &self.Z,
            &self.NA,
            &self.NB,
            &self.NX,
            &self.NY,
            &self.OR1,
            &self.OR2,
            &self.OR3,
            &self.AND1,
            &self.AND2,
            &self.AND3,
            &self.NOT1,
            &self.NOT2,
            &self.IMP1,
            &self.IMP2,
            &self.IMP3,
            &self.IMP4,
            &self.EQ1,
            &self.EQ2,
            &self.EQ3,
            &self.EQ4,
            &self.XOR1,
            &self.XOR2,
            &self.NAND1,
            &self.NAND2,
            &self.NOR1,
            &self.NOR2,
        ]
    }
}
