//! Normalized field descriptions shared by every language profile.

use serde::{Deserialize, Serialize};

use crate::schema::FieldNode;

/// A field (or action argument) after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Scalar name or type map key. After conversion, the target type.
    #[serde(rename = "type")]
    pub ty: String,
    pub required: bool,
    pub list: bool,
    /// Nested arguments. Only action fields have any.
    pub args: Vec<Field>,
}

impl Field {
    /// Extract a field from its raw node, recursing into arguments.
    pub fn extract(node: &FieldNode) -> Self {
        Self {
            name: node.name.clone(),
            ty: node.ty.typename().to_string(),
            required: node.ty.is_non_null(),
            list: node.ty.is_list(),
            args: node.arguments.iter().map(Self::extract).collect(),
        }
    }

    /// Rendered types are nullable exactly when not required.
    pub fn nullable(&self) -> bool {
        !self.required
    }
}

/// The built-in scalars eligible for per-language substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    #[serde(rename = "ID")]
    Id,
    Int,
    Float,
    String,
    Boolean,
}

impl ScalarType {
    pub const ALL: [ScalarType; 5] = [
        ScalarType::Id,
        ScalarType::Int,
        ScalarType::Float,
        ScalarType::String,
        ScalarType::Boolean,
    ];

    /// Recognize a scalar by its SDL name. Anything else is a type reference.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ID" => Some(ScalarType::Id),
            "Int" => Some(ScalarType::Int),
            "Float" => Some(ScalarType::Float),
            "String" => Some(ScalarType::String),
            "Boolean" => Some(ScalarType::Boolean),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Id => "ID",
            ScalarType::Int => "Int",
            ScalarType::Float => "Float",
            ScalarType::String => "String",
            ScalarType::Boolean => "Boolean",
        }
    }
}
