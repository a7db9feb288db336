use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Tooling matches on these,
// never on the human-readable message string.

/// Stable error code constants.
pub mod error_code {
    pub const SCHEMA_SYNTAX: &str = "SCHEMA_SYNTAX";
    pub const ROOT_TYPE_MISSING: &str = "ROOT_TYPE_MISSING";
    pub const ACTION_NOT_FOUND: &str = "ACTION_NOT_FOUND";
    pub const UNRESOLVED_TYPE: &str = "UNRESOLVED_TYPE";
    pub const NAME_COLLISION: &str = "NAME_COLLISION";
}

// ── CodegenError ────────────────────────────────────────────────────

/// Every failure the generator can report.
///
/// None of these are recovered internally: generation is deterministic,
/// so the caller gets the error and no partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// The SDL source could not be parsed.
    #[error("schema syntax error: {0}")]
    SchemaSyntax(String),

    /// The schema has no object type with the designated root name.
    #[error("root type '{0}' is not defined as an object type")]
    RootTypeMissing(String),

    /// The requested action is not a field of the root type.
    #[error("action '{0}' not found")]
    ActionNotFound(String),

    /// A field refers to a type that is neither a scalar nor declared.
    #[error("field '{owner}.{field}' refers to unknown type '{type_name}'")]
    UnresolvedTypeReference {
        owner: String,
        field: String,
        type_name: String,
    },

    /// A type name is declared twice, or a synthesized `<Action>Args`
    /// type would shadow a declared one.
    #[error("type '{0}' is already defined")]
    NameCollision(String),
}

impl CodegenError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            CodegenError::SchemaSyntax(_) => error_code::SCHEMA_SYNTAX,
            CodegenError::RootTypeMissing(_) => error_code::ROOT_TYPE_MISSING,
            CodegenError::ActionNotFound(_) => error_code::ACTION_NOT_FOUND,
            CodegenError::UnresolvedTypeReference { .. } => error_code::UNRESOLVED_TYPE,
            CodegenError::NameCollision(_) => error_code::NAME_COLLISION,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodegenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_mapping() {
        assert_eq!(CodegenError::SchemaSyntax("x".into()).error_code(), "SCHEMA_SYNTAX");
        assert_eq!(CodegenError::RootTypeMissing("x".into()).error_code(), "ROOT_TYPE_MISSING");
        assert_eq!(CodegenError::ActionNotFound("x".into()).error_code(), "ACTION_NOT_FOUND");
        assert_eq!(CodegenError::NameCollision("x".into()).error_code(), "NAME_COLLISION");
        let unresolved = CodegenError::UnresolvedTypeReference {
            owner: "A".into(),
            field: "b".into(),
            type_name: "C".into(),
        };
        assert_eq!(unresolved.error_code(), "UNRESOLVED_TYPE");
    }

    #[test]
    fn display_names_the_offender() {
        assert_eq!(
            CodegenError::ActionNotFound("Greet".into()).to_string(),
            "action 'Greet' not found"
        );
        let unresolved = CodegenError::UnresolvedTypeReference {
            owner: "UserInfo".into(),
            field: "address".into(),
            type_name: "Address".into(),
        };
        assert_eq!(
            unresolved.to_string(),
            "field 'UserInfo.address' refers to unknown type 'Address'"
        );
    }
}
