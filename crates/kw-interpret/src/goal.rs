//! Literals, conjuncts, and DNF goals.
//!
//! A [`Goal`] is a set of [`Conjunct`]s (OR); a conjunct is a set of
//! [`Literal`]s (AND). Both are `Vec`-backed with structural-equality
//! deduplication, so iteration order is first-seen order and rendering is
//! deterministic for a given value.

use std::fmt;

use kw_core::{ObjectId, Relation};
use serde::{Deserialize, Serialize};

/// An atomic, possibly negated relation over scene objects.
///
/// Two literals are equal iff polarity, relation, and the ordered argument
/// list are all equal. Every set operation in this module uses that
/// structural equality — never identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// `true` asserts the relation, `false` negates it.
    pub polarity: bool,
    /// The relation name.
    pub relation: Relation,
    /// Object arguments, in relation order.
    pub args: Vec<ObjectId>,
}

impl Literal {
    /// An affirmed binary relation literal.
    pub fn relates(a: ObjectId, relation: Relation, b: ObjectId) -> Self {
        Self {
            polarity: true,
            relation,
            args: vec![a, b],
        }
    }

    /// The unary "the arm holds this" literal.
    pub fn holding(id: ObjectId) -> Self {
        Self {
            polarity: true,
            relation: Relation::Holding,
            args: vec![id],
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            write!(f, "-")?;
        }
        let args: Vec<&str> = self.args.iter().map(ObjectId::as_str).collect();
        write!(f, "{}({})", self.relation, args.join(","))
    }
}

/// An AND-group of literals.
///
/// Holds no structural duplicates; first-seen order is kept. The empty
/// conjunct is vacuously satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conjunct {
    literals: Vec<Literal>,
}

impl Conjunct {
    /// Build a conjunct, dropping structural duplicates (first wins).
    pub fn new(literals: Vec<Literal>) -> Self {
        let mut deduped: Vec<Literal> = Vec::with_capacity(literals.len());
        for literal in literals {
            if !deduped.contains(&literal) {
                deduped.push(literal);
            }
        }
        Self { literals: deduped }
    }

    /// A conjunct of exactly one literal.
    pub fn singleton(literal: Literal) -> Self {
        Self {
            literals: vec![literal],
        }
    }

    /// The literals, in first-seen order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Number of distinct literals.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// `true` for the empty (vacuously satisfied) conjunct.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Structural membership test.
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// Union of two conjuncts, deduplicated, `self`'s literals first.
    pub fn merge(&self, other: &Conjunct) -> Conjunct {
        let mut merged = self.literals.clone();
        merged.extend(other.literals.iter().cloned());
        Self::new(merged)
    }

    /// Set equality: the same literals regardless of order.
    ///
    /// This is the membership test [`Goal`] uses to keep its conjuncts
    /// free of duplicates; derived `==` stays order-sensitive.
    pub fn same_set(&self, other: &Conjunct) -> bool {
        self.len() == other.len() && self.literals.iter().all(|literal| other.contains(literal))
    }
}

impl fmt::Display for Conjunct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.literals.iter().map(Literal::to_string).collect();
        write!(f, "{}", parts.join(" & "))
    }
}

/// A goal in disjunctive normal form: any one conjunct satisfies it.
///
/// Holds no two conjuncts that are equal as sets. The empty goal is
/// unsatisfiable — a command that resolves to it admits no
/// interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Goal {
    conjuncts: Vec<Conjunct>,
}

impl Goal {
    /// The unsatisfiable empty goal.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A goal with a single alternative.
    pub fn singleton(conjunct: Conjunct) -> Self {
        Self {
            conjuncts: vec![conjunct],
        }
    }

    /// Build a goal from alternatives, dropping set-equal duplicates.
    pub fn new(conjuncts: Vec<Conjunct>) -> Self {
        let mut goal = Self::default();
        for conjunct in conjuncts {
            goal.push(conjunct);
        }
        goal
    }

    /// Add an alternative unless a set-equal one is already present.
    pub fn push(&mut self, conjunct: Conjunct) {
        if !self.conjuncts.iter().any(|existing| existing.same_set(&conjunct)) {
            self.conjuncts.push(conjunct);
        }
    }

    /// The alternatives, in first-seen order.
    pub fn conjuncts(&self) -> &[Conjunct] {
        &self.conjuncts
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.conjuncts.len()
    }

    /// `true` if no alternative exists.
    pub fn is_empty(&self) -> bool {
        self.conjuncts.is_empty()
    }

    /// OR of two goals: concatenation with outer-level deduplication.
    pub fn union(&self, other: &Goal) -> Goal {
        let mut out = self.clone();
        for conjunct in &other.conjuncts {
            out.push(conjunct.clone());
        }
        out
    }

    /// AND of two goals: every pairwise conjunct merge, deduplicated.
    ///
    /// Distributes AND over the nested ORs so the result stays in DNF.
    /// Combinatorial by nature: up to `self.len() * other.len()`
    /// alternatives before deduplication. Deep universal nesting can blow
    /// up goal size; no bound is imposed here.
    pub fn cross_product(&self, other: &Goal) -> Goal {
        let mut out = Goal::default();
        for a in &self.conjuncts {
            for b in &other.conjuncts {
                out.push(a.merge(b));
            }
        }
        out
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.conjuncts.iter().map(Conjunct::to_string).collect();
        write!(f, "{}", parts.join(" | "))
    }
}
