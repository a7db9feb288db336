//! TypeScript profile and Express handler template

use crate::field::{Field, ScalarType};
use crate::profile::LanguageProfile;

pub struct TypeScriptProfile;

impl LanguageProfile for TypeScriptProfile {
    fn language(&self) -> &str {
        "typescript"
    }

    fn file_extension(&self) -> &str {
        "ts"
    }

    fn scalar_type(&self, scalar: ScalarType) -> &str {
        match scalar {
            ScalarType::Id | ScalarType::Int | ScalarType::Float => "number",
            ScalarType::String => "string",
            ScalarType::Boolean => "boolean",
        }
    }

    fn type_header(&self, type_name: &str) -> String {
        format!("type {} = ", type_name)
    }

    // Nullability is not rendered: generated types mirror the request
    // body shape, and a missing key reads as `undefined` either way.
    fn field_line(&self, name: &str, ty: &str, list: bool, _nullable: bool) -> String {
        if list {
            format!("{}: {}[]", name, ty)
        } else {
            format!("{}: {}", name, ty)
        }
    }
}

/// Express request handler for one action.
pub fn express_handler(
    action_name: &str,
    action_type: &str,
    _args: &[Field],
    type_defs: &str,
) -> String {
    let mut output = String::new();

    output.push_str("import { Request, Response } from 'express';\n\n");
    output.push_str(type_defs);
    output.push_str("\n\n");

    output.push_str(&format!(
        "function {}(args: {}Args): {} {{\n\n}}\n\n",
        action_name, action_name, action_type
    ));

    output.push_str("// Request Handler\n");
    output.push_str("const handler = async (req: Request, res: Response) => {\n");
    output.push_str("  // get request input\n");
    output.push_str(&format!(
        "  const params: {}Args = req.body.input\n\n",
        action_name
    ));
    output.push_str("  // run some business logic\n");
    output.push_str(&format!("  const result = {}(params)\n\n", action_name));
    output.push_str("  /*\n");
    output.push_str("  // In case of errors:\n");
    output.push_str("  return res.status(400).json({\n");
    output.push_str("    message: \"error happened\"\n");
    output.push_str("  })\n");
    output.push_str("  */\n\n");
    output.push_str("  // success\n");
    output.push_str("  return res.json(result)\n");
    output.push_str("}\n\n");
    output.push_str("module.exports = handler\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_map() {
        let ts = TypeScriptProfile;
        assert_eq!(ts.scalar_type(ScalarType::Id), "number");
        assert_eq!(ts.scalar_type(ScalarType::Float), "number");
        assert_eq!(ts.scalar_type(ScalarType::String), "string");
        assert_eq!(ts.scalar_type(ScalarType::Boolean), "boolean");
    }

    #[test]
    fn field_lines() {
        let ts = TypeScriptProfile;
        assert_eq!(ts.field_line("tags", "string", true, true), "tags: string[]");
        assert_eq!(ts.field_line("name", "string", false, false), "name: string");
        assert_eq!(ts.field_line("name", "string", false, true), "name: string");
        assert_eq!(ts.type_header("Reply"), "type Reply = ");
    }

    #[test]
    fn handler_embeds_types_and_names() {
        let code = express_handler("Greet", "Reply", &[], "type Reply =  {\n  message: string\n}");
        assert!(code.starts_with("import { Request, Response } from 'express';"));
        assert!(code.contains("type Reply =  {\n  message: string\n}"));
        assert!(code.contains("function Greet(args: GreetArgs): Reply {"));
        assert!(code.contains("const params: GreetArgs = req.body.input"));
        assert!(code.contains("const result = Greet(params)"));
        assert!(code.ends_with("module.exports = handler\n"));
    }
}
