pub mod typescript;

use crate::types::{ArgumentShape, InferredType};

/// Plugin trait for rendering inferred shapes as declarations
/// Implementations decide how opaque values, literal unions and argument
/// records are spelled in the target language
pub trait CodeGenerator {
    /// Generate code for a single argument type
    fn generate_type(&self, type_: &InferredType) -> String;

    /// Generate code for a single field of an arguments record
    fn generate_property(&self, name: &str, type_: &InferredType) -> String;

    /// Generate the arguments record of one entry
    fn generate_shape(&self, shape: &ArgumentShape) -> String;
}
