//! Evaluation-order constraint registry
//!
//! Records "evaluate-after" edges for the host build engine to honor. The
//! registry does not sequence anything itself and performs no cycle
//! detection: it holds exactly the edges that were declared.

use serde::Serialize;

/// `dependent` must be evaluated after `dependency`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConstraint {
    pub dependent: String,
    pub dependency: String,
}

impl std::fmt::Display for OrderConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.dependent, self.dependency)
    }
}

/// Declared order constraints, in insertion order
#[derive(Debug, Clone, Default)]
pub struct OrderConstraintRegistry {
    constraints: Vec<OrderConstraint>,
}

impl OrderConstraintRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_constraint(&mut self, dependent: impl Into<String>, dependency: impl Into<String>) {
        self.constraints.push(OrderConstraint {
            dependent: dependent.into(),
            dependency: dependency.into(),
        });
    }

    /// Dependencies declared for `module`, in insertion order
    pub fn constraints_for(&self, module: &str) -> Vec<&str> {
        self.constraints
            .iter()
            .filter(|c| c.dependent == module)
            .map(|c| c.dependency.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderConstraint> {
        self.constraints.iter()
    }

    pub fn as_slice(&self) -> &[OrderConstraint] {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}
