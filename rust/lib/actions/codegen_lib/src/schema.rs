//! Schema loader. Turns SDL text into a navigable type map.
//!
//! Parsing is delegated to `graphql-parser`; this module keeps only what
//! codegen needs (type names, kinds, fields, arguments and type wrappers)
//! in owned, insertion-ordered form.

use graphql_parser::schema::{self as ast, Definition, TypeDefinition};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use crate::error::{CodegenError, Result};
use crate::field::Field;

/// A (possibly wrapped) reference to a named type, e.g. `[String!]!`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    fn from_ast(ty: &ast::Type<'_, String>) -> Self {
        match ty {
            ast::Type::NamedType(name) => TypeRef::Named(name.clone()),
            ast::Type::ListType(inner) => TypeRef::List(Box::new(Self::from_ast(inner))),
            ast::Type::NonNullType(inner) => TypeRef::NonNull(Box::new(Self::from_ast(inner))),
        }
    }

    /// Innermost named type, with every list and non-null wrapper removed.
    pub fn typename(&self) -> &str {
        match self {
            TypeRef::Named(name) => name.as_str(),
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.typename(),
        }
    }

    /// True when the outermost wrapper is non-null.
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// True for `[T]` and `[T]!`.
    pub fn is_list(&self) -> bool {
        match self {
            TypeRef::List(_) => true,
            TypeRef::NonNull(inner) => matches!(**inner, TypeRef::List(_)),
            TypeRef::Named(_) => false,
        }
    }
}

/// A raw field or argument as declared in the SDL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldNode {
    pub name: String,
    pub ty: TypeRef,
    /// Declared arguments. Always empty for input fields and arguments.
    pub arguments: Vec<FieldNode>,
}

impl FieldNode {
    fn from_input_value(value: &ast::InputValue<'_, String>) -> Self {
        Self {
            name: value.name.clone(),
            ty: TypeRef::from_ast(&value.value_type),
            arguments: Vec::new(),
        }
    }

    fn from_field(field: &ast::Field<'_, String>) -> Self {
        Self {
            name: field.name.clone(),
            ty: TypeRef::from_ast(&field.field_type),
            arguments: field.arguments.iter().map(Self::from_input_value).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Object,
    InputObject,
    Interface,
    Scalar,
    Enum,
    Union,
}

/// A raw type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeNode {
    pub name: String,
    pub kind: TypeKind,
    pub fields: Vec<FieldNode>,
}

impl TypeNode {
    /// Build an object type node from already-parsed fields.
    pub fn object(name: impl Into<String>, fields: Vec<FieldNode>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Object,
            fields,
        }
    }

    /// Whether this kind of type declares fields at all.
    pub fn has_fields(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::Object | TypeKind::InputObject | TypeKind::Interface
        )
    }

    fn from_definition(def: &TypeDefinition<'_, String>) -> Self {
        let (name, kind, fields) = match def {
            TypeDefinition::Object(object) => (
                &object.name,
                TypeKind::Object,
                object.fields.iter().map(FieldNode::from_field).collect(),
            ),
            TypeDefinition::Interface(interface) => (
                &interface.name,
                TypeKind::Interface,
                interface.fields.iter().map(FieldNode::from_field).collect(),
            ),
            TypeDefinition::InputObject(input) => (
                &input.name,
                TypeKind::InputObject,
                input.fields.iter().map(FieldNode::from_input_value).collect(),
            ),
            TypeDefinition::Scalar(scalar) => (&scalar.name, TypeKind::Scalar, Vec::new()),
            TypeDefinition::Enum(en) => (&en.name, TypeKind::Enum, Vec::new()),
            TypeDefinition::Union(union) => (&union.name, TypeKind::Union, Vec::new()),
        };
        Self {
            name: name.clone(),
            kind,
            fields,
        }
    }
}

/// A type map entry: the raw node plus its extracted field info.
///
/// `field_info` is `None` until enrichment, and stays `None` for types
/// without fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeEntry {
    pub node: TypeNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_info: Option<Vec<Field>>,
}

/// Type name → entry, in declaration order.
pub type TypeMap = IndexMap<String, TypeEntry>;

/// A loaded SDL document.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    type_map: TypeMap,
    mutation_root: Option<String>,
}

impl SchemaDocument {
    /// Parse SDL source text.
    ///
    /// Type extensions and directive definitions are ignored; a type
    /// declared twice is a [`CodegenError::NameCollision`].
    pub fn parse(source: &str) -> Result<Self> {
        let document = ast::parse_schema::<String>(source)
            .map_err(|e| CodegenError::SchemaSyntax(e.to_string()))?;

        let mut doc = SchemaDocument {
            type_map: TypeMap::new(),
            mutation_root: None,
        };

        for definition in &document.definitions {
            match definition {
                Definition::SchemaDefinition(schema) => {
                    doc.mutation_root = schema.mutation.clone();
                }
                Definition::TypeDefinition(def) => {
                    doc.insert(TypeNode::from_definition(def))?;
                }
                Definition::TypeExtension(_) => {
                    warn!("type extensions are not supported, skipping");
                }
                Definition::DirectiveDefinition(directive) => {
                    warn!("skipping directive definition @{}", directive.name);
                }
            }
        }

        Ok(doc)
    }

    pub fn type_map(&self) -> &TypeMap {
        &self.type_map
    }

    pub(crate) fn type_map_mut(&mut self) -> &mut TypeMap {
        &mut self.type_map
    }

    pub fn get_type(&self, name: &str) -> Option<&TypeEntry> {
        self.type_map.get(name)
    }

    /// Look up a type that is specifically an object type.
    pub fn get_object_type(&self, name: &str) -> Option<&TypeNode> {
        self.type_map
            .get(name)
            .map(|entry| &entry.node)
            .filter(|node| node.kind == TypeKind::Object)
    }

    /// Register a new object type at the end of the map.
    pub fn create_object_type(&mut self, node: TypeNode) -> Result<()> {
        debug_assert_eq!(node.kind, TypeKind::Object);
        self.insert(node)
    }

    /// Mutation root named by a `schema { mutation: ... }` block, if any.
    pub fn schema_mutation_root(&self) -> Option<&str> {
        self.mutation_root.as_deref()
    }

    fn insert(&mut self, node: TypeNode) -> Result<()> {
        if self.type_map.contains_key(&node.name) {
            return Err(CodegenError::NameCollision(node.name));
        }
        self.type_map.insert(
            node.name.clone(),
            TypeEntry {
                node,
                field_info: None,
            },
        );
        Ok(())
    }
}
