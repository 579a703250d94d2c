use crate::codegen::CodeGenerator;
use crate::types::{ArgumentShape, InferredType, LiteralKey};

/// Type used for arguments that are only interpolated
pub const DEFAULT_OPAQUE_TYPE: &str = "FluentVariable";

/// Type of an arguments object that must be passed but has no fields
pub const EMPTY_SHAPE_TYPE: &str = "Record<string, never>";

/// TypeScript code generator for inferred argument shapes
pub struct TypeScriptGenerator {
    opaque_type: String,
}

impl TypeScriptGenerator {
    pub fn new() -> Self {
        Self::with_opaque_type(DEFAULT_OPAQUE_TYPE)
    }

    /// Use `opaque_type` instead of `FluentVariable` for opaque arguments
    pub fn with_opaque_type(opaque_type: impl Into<String>) -> Self {
        Self {
            opaque_type: opaque_type.into(),
        }
    }

    pub fn opaque_type(&self) -> &str {
        &self.opaque_type
    }

    fn generate_literal(&self, key: &LiteralKey) -> String {
        match key {
            // Normalizes forms such as `007` that TypeScript rejects
            LiteralKey::Number(raw) => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => value.to_string(),
                _ => quote(raw),
            },
            LiteralKey::String(s) => quote(s),
        }
    }
}

impl Default for TypeScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for TypeScriptGenerator {
    fn generate_type(&self, type_: &InferredType) -> String {
        match type_ {
            InferredType::Opaque => self.opaque_type.clone(),
            InferredType::LiteralUnion(keys) if keys.is_empty() => "never".to_string(),
            InferredType::LiteralUnion(keys) => {
                let literals: Vec<String> = keys.iter().map(|k| self.generate_literal(k)).collect();
                literals.join(" | ")
            }
        }
    }

    fn generate_property(&self, name: &str, type_: &InferredType) -> String {
        format!("readonly {}: {}", property_name(name), self.generate_type(type_))
    }

    fn generate_shape(&self, shape: &ArgumentShape) -> String {
        if shape.is_empty() {
            return EMPTY_SHAPE_TYPE.to_string();
        }

        let fields: Vec<String> = shape
            .iter()
            .map(|(name, type_)| self.generate_property(name, type_))
            .collect();

        format!("{{ {} }}", fields.join("; "))
    }
}

/// Quote a string as a TypeScript string literal
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Fluent identifiers may contain `-`, which TypeScript property names may not
pub fn property_name(name: &str) -> String {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if valid {
        name.to_string()
    } else {
        quote(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_key(s: &str) -> LiteralKey {
        LiteralKey::String(s.to_string())
    }

    fn number_key(s: &str) -> LiteralKey {
        LiteralKey::Number(s.to_string())
    }

    #[test]
    fn test_generate_opaque_type() {
        let gen = TypeScriptGenerator::new();
        assert_eq!(gen.opaque_type(), DEFAULT_OPAQUE_TYPE);
        assert_eq!(gen.generate_type(&InferredType::Opaque), "FluentVariable");

        let custom = TypeScriptGenerator::with_opaque_type("unknown");
        assert_eq!(custom.opaque_type(), "unknown");
        assert_eq!(custom.generate_type(&InferredType::Opaque), "unknown");
    }

    #[test]
    fn test_generate_literal_union() {
        let gen = TypeScriptGenerator::new();
        let union = InferredType::literal_union(vec![string_key("one"), string_key("other")]);
        assert_eq!(gen.generate_type(&union), "\"one\" | \"other\"");
    }

    #[test]
    fn test_generate_number_keys() {
        let gen = TypeScriptGenerator::new();
        let union = InferredType::literal_union(vec![
            number_key("0"),
            number_key("007"),
            number_key("-1.5"),
            string_key("other"),
        ]);
        assert_eq!(gen.generate_type(&union), "0 | 7 | -1.5 | \"other\"");
    }

    #[test]
    fn test_generate_empty_union_is_never() {
        let gen = TypeScriptGenerator::new();
        assert_eq!(gen.generate_type(&InferredType::literal_union(vec![])), "never");
    }

    #[test]
    fn test_generate_property_quotes_hyphenated_names() {
        let gen = TypeScriptGenerator::new();
        assert_eq!(
            gen.generate_property("user-name", &InferredType::Opaque),
            "readonly \"user-name\": FluentVariable"
        );
        assert_eq!(
            gen.generate_property("userName", &InferredType::Opaque),
            "readonly userName: FluentVariable"
        );
    }

    #[test]
    fn test_generate_shape_in_insertion_order() {
        let gen = TypeScriptGenerator::new();
        let mut shape = ArgumentShape::new();
        shape.insert("name".to_string(), InferredType::Opaque);
        shape.insert(
            "count".to_string(),
            InferredType::literal_union(vec![string_key("one"), string_key("other")]),
        );

        assert_eq!(
            gen.generate_shape(&shape),
            "{ readonly name: FluentVariable; readonly count: \"one\" | \"other\" }"
        );
    }

    #[test]
    fn test_generate_empty_shape() {
        let gen = TypeScriptGenerator::new();
        assert_eq!(gen.generate_shape(&ArgumentShape::new()), "Record<string, never>");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
