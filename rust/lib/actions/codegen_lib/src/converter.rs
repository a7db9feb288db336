//! Type converter: renders the action model through one language profile.

use std::sync::Arc;

use tracing::debug;

use crate::error::{CodegenError, Result};
use crate::field::{Field, ScalarType};
use crate::model::ActionSchema;
use crate::profile::LanguageProfile;

const INDENT: &str = "  ";

/// Renders declarations and per-action code for one target language.
///
/// The model is shared and never written to; every conversion returns
/// fresh values, so several converters may render the same schema.
pub struct TypeConverter<P> {
    schema: Arc<ActionSchema>,
    profile: P,
}

impl<P: LanguageProfile> TypeConverter<P> {
    /// Parse `source` into a private model and bind it to `profile`.
    pub fn new(source: &str, profile: P) -> Result<Self> {
        let schema = ActionSchema::parse(source)?;
        Ok(Self::with_schema(Arc::new(schema), profile))
    }

    /// Bind an already loaded model to `profile`.
    pub fn with_schema(schema: Arc<ActionSchema>, profile: P) -> Self {
        Self { schema, profile }
    }

    pub fn schema(&self) -> &ActionSchema {
        &self.schema
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }

    /// Generate the code for one action.
    ///
    /// `codegen` receives the action name, its (converted) return type,
    /// its converted arguments and the rendered declarations of every
    /// type; its output is returned as is. It is not called when the
    /// action is unknown or a declaration fails to render.
    pub fn action_code<F>(&self, action_name: &str, codegen: F) -> Result<String>
    where
        F: FnOnce(&str, &str, &[Field], &str) -> String,
    {
        let action = self.schema.action(action_name)?;
        let args: Vec<Field> = self
            .schema
            .action_args(action_name)?
            .iter()
            .map(|arg| self.convert_field(arg))
            .collect();
        let type_defs = self.render_type_declarations()?;
        let return_type = self.convert_scalar_type(&action.ty);

        debug!(
            "generating {} code for {} ({} arg(s))",
            self.profile.language(),
            action.name,
            args.len()
        );
        Ok(codegen(&action.name, &return_type, &args, &type_defs))
    }

    /// Render a declaration block for every entry that has fields, in
    /// type map order.
    pub fn render_type_declarations(&self) -> Result<String> {
        let mut blocks = Vec::new();

        for (type_name, entry) in self.schema.type_map() {
            let Some(fields) = entry.field_info.as_deref() else {
                continue;
            };

            let mut block = format!("{} {{", self.profile.type_header(type_name));
            for field in fields {
                self.check_resolved(type_name, field)?;
                block.push('\n');
                block.push_str(INDENT);
                block.push_str(&self.field_line(field));
            }
            block.push_str("\n}");
            blocks.push(block);
        }

        debug!(
            "rendered {} {} declaration(s)",
            blocks.len(),
            self.profile.language()
        );
        Ok(blocks.join("\n"))
    }

    /// Scalar names map through the profile; anything else is a type
    /// reference and comes back unchanged.
    pub fn convert_scalar_type(&self, type_name: &str) -> String {
        match ScalarType::from_name(type_name) {
            Some(scalar) => self.profile.scalar_type(scalar).to_string(),
            None => type_name.to_string(),
        }
    }

    /// A copy of `field` with its type (and its arguments' types) converted.
    pub fn convert_field(&self, field: &Field) -> Field {
        Field {
            name: field.name.clone(),
            ty: self.convert_scalar_type(&field.ty),
            required: field.required,
            list: field.list,
            args: field.args.iter().map(|arg| self.convert_field(arg)).collect(),
        }
    }

    fn field_line(&self, field: &Field) -> String {
        let ty = self.convert_scalar_type(&field.ty);
        self.profile
            .field_line(&field.name, &ty, field.list, field.nullable())
    }

    fn check_resolved(&self, owner: &str, field: &Field) -> Result<()> {
        if ScalarType::from_name(&field.ty).is_some()
            || self.schema.type_map().contains_key(&field.ty)
        {
            return Ok(());
        }
        Err(CodegenError::UnresolvedTypeReference {
            owner: owner.to_string(),
            field: field.name.clone(),
            type_name: field.ty.clone(),
        })
    }
}
