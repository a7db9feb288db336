//! Language profile contract: how one target language spells types.

use crate::field::ScalarType;

/// Language profile. Implement this for each target language.
///
/// A profile only decides spelling: which word a scalar becomes, how a
/// type declaration opens, and how one field line reads. Everything
/// else (which types exist, which fields they have) comes from the model.
pub trait LanguageProfile {
    fn language(&self) -> &str;

    /// Extension of generated handler files, without the dot.
    fn file_extension(&self) -> &str;

    fn scalar_type(&self, scalar: ScalarType) -> &str;

    /// Opening of a type declaration; the engine appends ` {`.
    fn type_header(&self, type_name: &str) -> String;

    /// One field line inside a declaration, without indentation.
    fn field_line(&self, name: &str, ty: &str, list: bool, nullable: bool) -> String;
}

impl<P: LanguageProfile + ?Sized> LanguageProfile for &P {
    fn language(&self) -> &str {
        (**self).language()
    }

    fn file_extension(&self) -> &str {
        (**self).file_extension()
    }

    fn scalar_type(&self, scalar: ScalarType) -> &str {
        (**self).scalar_type(scalar)
    }

    fn type_header(&self, type_name: &str) -> String {
        (**self).type_header(type_name)
    }

    fn field_line(&self, name: &str, ty: &str, list: bool, nullable: bool) -> String {
        (**self).field_line(name, ty, list, nullable)
    }
}

impl<P: LanguageProfile + ?Sized> LanguageProfile for Box<P> {
    fn language(&self) -> &str {
        (**self).language()
    }

    fn file_extension(&self) -> &str {
        (**self).file_extension()
    }

    fn scalar_type(&self, scalar: ScalarType) -> &str {
        (**self).scalar_type(scalar)
    }

    fn type_header(&self, type_name: &str) -> String {
        (**self).type_header(type_name)
    }

    fn field_line(&self, name: &str, ty: &str, list: bool, nullable: bool) -> String {
        (**self).field_line(name, ty, list, nullable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::go::GoProfile;
    use crate::kotlin::KotlinProfile;

    #[test]
    fn boxed_and_borrowed_profiles_forward() {
        let boxed: Box<dyn LanguageProfile> = Box::new(KotlinProfile);
        let borrowed = &GoProfile;

        assert_eq!(boxed.language(), "kotlin");
        assert_eq!(boxed.file_extension(), "kt");
        assert_eq!(borrowed.scalar_type(ScalarType::Float), "float32");
        assert_eq!(borrowed.type_header("Reply"), "type Reply struct");
        assert_eq!(
            (&*boxed).field_line("name", "String", false, false),
            KotlinProfile.field_line("name", "String", false, false)
        );
    }
}
