use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `persona-governor`.
///
/// Constraint violations are never errors: the transformation loop turns them
/// into fallback responses or repairs. Only definition construction and
/// configuration loading can fail.
#[derive(Debug, Error)]
pub enum GovernorError {
    // ── Definition ──────────────────────────────────────────────────────
    #[error("definition: {0}")]
    Definition(#[from] DefinitionError),

    // ── Config ──────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),
}

// ─── Definition errors ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("memory category {name} is declared more than once")]
    DuplicateMemoryCategory { name: String },

    #[error("commit category {name} is not part of the memory schema")]
    UnknownCommitCategory { name: String },

    #[error("memory schema is empty")]
    EmptySchema,
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, GovernorError>;
