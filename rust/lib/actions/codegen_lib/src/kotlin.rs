//! Kotlin profile. Unlike the TypeScript and Go profiles it spells out
//! nullability (`String?`).

use crate::field::{Field, ScalarType};
use crate::profile::LanguageProfile;

pub struct KotlinProfile;

impl LanguageProfile for KotlinProfile {
    fn language(&self) -> &str {
        "kotlin"
    }

    fn file_extension(&self) -> &str {
        "kt"
    }

    fn scalar_type(&self, scalar: ScalarType) -> &str {
        match scalar {
            ScalarType::Id | ScalarType::Int => "Int",
            ScalarType::Float => "Float",
            ScalarType::String => "String",
            ScalarType::Boolean => "Boolean",
        }
    }

    fn type_header(&self, type_name: &str) -> String {
        format!("interface {}", type_name)
    }

    fn field_line(&self, name: &str, ty: &str, list: bool, nullable: bool) -> String {
        // String -> String? -> List<String?>
        let mut ty = ty.to_string();
        if nullable {
            ty.push('?');
        }
        if list {
            ty = format!("List<{}>", ty);
        }
        format!("var {}: {}", name, ty)
    }
}

/// Type declarations plus a stub function for the action.
pub fn action_stub(
    action_name: &str,
    action_type: &str,
    args: &[Field],
    type_defs: &str,
) -> String {
    let mut output = String::new();

    output.push_str(type_defs);
    output.push_str("\n\n");

    let arg_names: Vec<&str> = args.iter().map(|arg| arg.name.as_str()).collect();
    output.push_str(&format!("// Arguments: {}\n", arg_names.join(", ")));
    output.push_str(&format!(
        "fun {}(args: {}Args): {} {{\n",
        action_name, action_name, action_type
    ));
    output.push_str(&format!("    TODO(\"implement {}\")\n", action_name));
    output.push_str("}\n");

    output
}
