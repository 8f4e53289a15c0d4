use std::collections::HashSet;

use tracing::warn;

use super::constraints::{
    Constraint, ConstraintClass, HistoryConstraint, SingleResponseConstraint,
    TrajectoryConstraint,
};
use super::repairs::{Repair, RepairRef};
use crate::error::DefinitionError;

/// Immutable policy bundle: constraints, repairs and the memory-category schema.
///
/// Constraint order is evaluation order within each class; repair order is
/// application order. `Clone` is the explicit copy operation: the clone shares
/// constraint and repair behaviour and has identical ids and schema, so it is
/// always [`equivalent`] to the original.
///
/// Duplicate constraint or repair ids are accepted but make [`equivalent`]
/// ambiguous, since two definitions that list the same id twice compare equal
/// regardless of which behaviour sits behind each entry.
#[derive(Debug, Clone)]
pub struct PersonaDefinition {
    constraints: Vec<Constraint>,
    repairs: Vec<RepairRef>,
    memory_schema: Vec<String>,
    commit_category: String,
}

impl PersonaDefinition {
    pub fn builder() -> PersonaDefinitionBuilder {
        PersonaDefinitionBuilder::default()
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Constraints of one class, in definition order.
    pub fn constraints_of(&self, class: ConstraintClass) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter().filter(move |c| c.class() == class)
    }

    pub fn repairs(&self) -> &[RepairRef] {
        &self.repairs
    }

    pub fn memory_schema(&self) -> &[String] {
        &self.memory_schema
    }

    /// The memory category incremented on every commit.
    pub fn commit_category(&self) -> &str {
        &self.commit_category
    }

    pub fn constraint_ids(&self) -> Vec<&str> {
        self.constraints.iter().map(Constraint::id).collect()
    }

    pub fn repair_ids(&self) -> Vec<&str> {
        self.repairs.iter().map(RepairRef::id).collect()
    }
}

/// Structural, order-sensitive comparison by constraint ids, repair ids and
/// memory schema. Behaviour behind matching ids is not compared.
pub fn equivalent(a: &PersonaDefinition, b: &PersonaDefinition) -> bool {
    a.constraint_ids() == b.constraint_ids()
        && a.repair_ids() == b.repair_ids()
        && a.memory_schema == b.memory_schema
}

#[derive(Default)]
pub struct PersonaDefinitionBuilder {
    constraints: Vec<Constraint>,
    repairs: Vec<RepairRef>,
    memory_schema: Vec<String>,
    commit_category: Option<String>,
}

impl PersonaDefinitionBuilder {
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn single_response(self, constraint: impl SingleResponseConstraint + 'static) -> Self {
        self.constraint(Constraint::single_response(constraint))
    }

    pub fn history(self, constraint: impl HistoryConstraint + 'static) -> Self {
        self.constraint(Constraint::history(constraint))
    }

    pub fn trajectory(self, constraint: impl TrajectoryConstraint + 'static) -> Self {
        self.constraint(Constraint::trajectory(constraint))
    }

    pub fn repair(mut self, repair: impl Repair + 'static) -> Self {
        self.repairs.push(RepairRef::new(repair));
        self
    }

    pub fn memory_category(mut self, name: impl Into<String>) -> Self {
        self.memory_schema.push(name.into());
        self
    }

    /// Category incremented on commit. Defaults to the first schema entry.
    pub fn commit_category(mut self, name: impl Into<String>) -> Self {
        self.commit_category = Some(name.into());
        self
    }

    pub fn build(self) -> Result<PersonaDefinition, DefinitionError> {
        let mut seen = HashSet::new();
        for name in &self.memory_schema {
            if !seen.insert(name.as_str()) {
                return Err(DefinitionError::DuplicateMemoryCategory { name: name.clone() });
            }
        }

        let commit_category = match self.commit_category {
            Some(name) => name,
            None => self
                .memory_schema
                .first()
                .cloned()
                .ok_or(DefinitionError::EmptySchema)?,
        };
        if !self.memory_schema.contains(&commit_category) {
            return Err(DefinitionError::UnknownCommitCategory {
                name: commit_category,
            });
        }

        warn_on_duplicate_ids("constraint", self.constraints.iter().map(Constraint::id));
        warn_on_duplicate_ids("repair", self.repairs.iter().map(RepairRef::id));

        Ok(PersonaDefinition {
            constraints: self.constraints,
            repairs: self.repairs,
            memory_schema: self.memory_schema,
            commit_category,
        })
    }
}

fn warn_on_duplicate_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            warn!(kind = %kind, id = %id, "persona.definition.duplicate_id");
        }
    }
}
