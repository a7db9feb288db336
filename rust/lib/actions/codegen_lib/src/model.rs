//! The normalized action model: a loaded schema with synthesized
//! `<Action>Args` types and field info attached to every entry.
//!
//! Built once per schema and read-only afterwards, so one model can feed
//! any number of language profiles.

use serde::Serialize;
use tracing::debug;

use crate::error::{CodegenError, Result};
use crate::field::Field;
use crate::schema::{SchemaDocument, TypeMap, TypeNode};

/// Root type used when neither the caller nor the schema names one.
pub const DEFAULT_ROOT: &str = "Mutation";

/// Name of the synthesized argument type for an action.
pub fn args_type_name(action: &str) -> String {
    format!("{action}Args")
}

/// Register an `<Action>Args` object type for every field of `root`.
///
/// The new types hold the action's raw argument nodes as fields and are
/// appended in action order. Returns the number of types added.
pub fn synthesize_action_args(doc: &mut SchemaDocument, root: &str) -> Result<usize> {
    let root_type = doc
        .get_object_type(root)
        .ok_or_else(|| CodegenError::RootTypeMissing(root.to_string()))?;

    let arg_types: Vec<TypeNode> = root_type
        .fields
        .iter()
        .map(|action| TypeNode::object(args_type_name(&action.name), action.arguments.clone()))
        .collect();

    let count = arg_types.len();
    for node in arg_types {
        debug!(
            "synthesized {} with {} field(s)",
            node.name,
            node.fields.len()
        );
        doc.create_object_type(node)?;
    }
    Ok(count)
}

/// Attach field info to every entry that has fields.
///
/// Field info is rebuilt from the raw node each time and replaces any
/// previous list, so running this twice changes nothing.
pub fn enrich(doc: &mut SchemaDocument) {
    for entry in doc.type_map_mut().values_mut() {
        if entry.node.has_fields() {
            entry.field_info = Some(entry.node.fields.iter().map(Field::extract).collect());
        }
    }
}

/// A schema ready for rendering.
#[derive(Debug, Clone)]
pub struct ActionSchema {
    document: SchemaDocument,
    root: String,
}

impl ActionSchema {
    /// Load `source`, taking the root from its `schema { mutation }` block
    /// or falling back to [`DEFAULT_ROOT`].
    pub fn parse(source: &str) -> Result<Self> {
        let document = SchemaDocument::parse(source)?;
        let root = document
            .schema_mutation_root()
            .unwrap_or(DEFAULT_ROOT)
            .to_string();
        Self::build(document, root)
    }

    /// Load `source` with an explicit root type name.
    pub fn parse_with_root(source: &str, root: &str) -> Result<Self> {
        let document = SchemaDocument::parse(source)?;
        Self::build(document, root.to_string())
    }

    fn build(mut document: SchemaDocument, root: String) -> Result<Self> {
        let synthesized = synthesize_action_args(&mut document, &root)?;
        enrich(&mut document);
        debug!(
            "loaded schema: {} type(s), {} action(s) on {}",
            document.type_map().len(),
            synthesized,
            root
        );
        Ok(Self { document, root })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    pub fn type_map(&self) -> &TypeMap {
        self.document.type_map()
    }

    /// The root's fields, i.e. every action.
    pub fn actions(&self) -> &[Field] {
        self.document
            .get_type(&self.root)
            .and_then(|entry| entry.field_info.as_deref())
            .unwrap_or(&[])
    }

    pub fn action(&self, name: &str) -> Result<&Field> {
        self.actions()
            .iter()
            .find(|action| action.name == name)
            .ok_or_else(|| CodegenError::ActionNotFound(name.to_string()))
    }

    /// Argument fields of an action, read from its synthesized type.
    pub fn action_args(&self, name: &str) -> Result<&[Field]> {
        self.document
            .get_type(&args_type_name(name))
            .and_then(|entry| entry.field_info.as_deref())
            .ok_or_else(|| CodegenError::ActionNotFound(name.to_string()))
    }

    /// Serializable snapshot of the enriched type map.
    pub fn inspect(&self) -> Inspection<'_> {
        Inspection {
            root: &self.root,
            types: self.type_map(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Inspection<'a> {
    pub root: &'a str,
    pub types: &'a TypeMap,
}
