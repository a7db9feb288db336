//! Actions codegen library: shared code generation logic
//!
//! Turns a GraphQL SDL document whose root type (usually `Mutation`)
//! declares actions into per-language handler files:
//! 1. `schema`: SDL loading into an ordered type map
//! 2. `field`: normalized field extraction
//! 3. `model`: `<Action>Args` synthesis + field info enrichment
//! 4. `profile`: the per-language spelling rules
//! 5. `converter`: declaration rendering + per-action code
//!
//! `typescript`, `go` and `kotlin` hold the shipped profiles together with
//! the handler templates that embed their output.

pub mod converter;
pub mod error;
pub mod field;
pub mod go;
pub mod kotlin;
pub mod model;
pub mod profile;
pub mod schema;
pub mod typescript;

use std::sync::Arc;

use tracing::{info, warn};

pub use converter::TypeConverter;
pub use error::{CodegenError, Result};
pub use field::{Field, ScalarType};
pub use model::ActionSchema;
pub use profile::LanguageProfile;

/// Caller-supplied action code generator: receives the action name, its
/// return type, its converted arguments and the rendered declarations.
pub type ActionCodegen = dyn Fn(&str, &str, &[Field], &str) -> String;

/// One output language: a profile paired with the template that turns its
/// declarations into a handler file.
pub struct Target {
    pub profile: Box<dyn LanguageProfile>,
    pub codegen: Box<ActionCodegen>,
}

impl Target {
    pub fn new<P, F>(profile: P, codegen: F) -> Self
    where
        P: LanguageProfile + 'static,
        F: Fn(&str, &str, &[Field], &str) -> String + 'static,
    {
        Self {
            profile: Box::new(profile),
            codegen: Box::new(codegen),
        }
    }

    /// Express handler in TypeScript.
    pub fn typescript() -> Self {
        Self::new(typescript::TypeScriptProfile, typescript::express_handler)
    }

    /// `net/http` server in Go.
    pub fn go() -> Self {
        Self::new(go::GoProfile, go::net_http_handler)
    }

    /// Kotlin declarations and a function stub.
    pub fn kotlin() -> Self {
        Self::new(kotlin::KotlinProfile, kotlin::action_stub)
    }

    /// Look up a shipped target by language name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "typescript" | "ts" => Some(Self::typescript()),
            "go" => Some(Self::go()),
            "kotlin" | "kt" => Some(Self::kotlin()),
            _ => None,
        }
    }

    pub fn language(&self) -> &str {
        self.profile.language()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// `<ActionName>Handler.<ext>`
pub fn handler_file_name(action_name: &str, extension: &str) -> String {
    format!("{}Handler.{}", action_name, extension)
}

/// Generate one handler file per target for a single action.
pub fn generate_action(
    schema: &Arc<ActionSchema>,
    action_name: &str,
    targets: &[Target],
) -> Result<Vec<GeneratedFile>> {
    let mut files = Vec::with_capacity(targets.len());

    for target in targets {
        let converter = TypeConverter::with_schema(Arc::clone(schema), &*target.profile);
        let content = converter.action_code(action_name, |name, ty, args, type_defs| {
            (target.codegen)(name, ty, args, type_defs)
        })?;
        files.push(GeneratedFile {
            path: handler_file_name(action_name, target.profile.file_extension()),
            content,
        });
    }

    Ok(files)
}

/// Outcome of a batch run: the files of every action that generated, plus
/// the requested names that are not actions on the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    pub files: Vec<GeneratedFile>,
    pub missing: Vec<String>,
}

impl Generation {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Generate handler files for the named actions, or for every action on
/// the root when `actions` is empty.
///
/// An unknown action name only fails that action: it is recorded in
/// [`Generation::missing`] and the remaining actions still generate. Any
/// other error aborts the whole batch.
pub fn generate(
    schema: &Arc<ActionSchema>,
    actions: &[String],
    targets: &[Target],
) -> Result<Generation> {
    let names: Vec<String> = if actions.is_empty() {
        schema.actions().iter().map(|a| a.name.clone()).collect()
    } else {
        actions.to_vec()
    };

    let mut generation = Generation::default();
    for name in &names {
        match generate_action(schema, name, targets) {
            Ok(files) => generation.files.extend(files),
            Err(CodegenError::ActionNotFound(missing)) => {
                warn!("no action named {} on {}, skipping", missing, schema.root());
                generation.missing.push(missing);
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "generated {} file(s) for {} action(s) across {} target(s)",
        generation.files.len(),
        names.len() - generation.missing.len(),
        targets.len()
    );
    Ok(generation)
}
