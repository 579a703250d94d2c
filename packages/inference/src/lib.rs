//! # Fluent Typegen Inference Engine
//!
//! Derives, for every message and attribute of a Fluent resource, the shape
//! of the arguments object needed to format it.
//!
//! ## Rules
//!
//! - **Plain references**: `{ $name }` makes `name` opaque (any value)
//! - **Select narrowing**: `{ $n -> [one] ... *[other] ... }` makes `n` the
//!   union of the variant keys, in declaration order
//! - **Narrowing sticks**: a select overrides an earlier plain reference,
//!   later references never widen it, and the first select on a variable
//!   wins over later ones
//! - **Attribute addressing**: attributes are indexed as `message.attribute`
//!
//! ## Example
//!
//! ```rust
//! use fluent_typegen_inference::{CodeGenerator, InferenceEngine, TypeScriptGenerator};
//! use fluent_syntax::parser::parse;
//!
//! let source = "apples = I have { $count ->\n    [one] one apple\n   *[other] { $count } apples\n}\n";
//!
//! let resource = parse(source).unwrap();
//! let engine = InferenceEngine::default();
//! let index = engine.infer_resource(&resource).unwrap();
//!
//! let ts_gen = TypeScriptGenerator::new();
//! for (id, shape) in index.argument_ids() {
//!     println!("{}: {}", id, ts_gen.generate_shape(shape));
//! }
//! ```

pub mod codegen;
pub mod error;
pub mod inference;
pub mod options;
pub mod scope;
pub mod types;

// Re-export main types for convenience
pub use codegen::{typescript::TypeScriptGenerator, CodeGenerator};
pub use error::{InferenceError, InferenceResult};
pub use inference::InferenceEngine;
pub use options::{CollisionPolicy, InferenceOptions};
pub use scope::Scope;
pub use types::{ArgumentShape, EntryArguments, InferredType, LiteralKey, ResourceArgumentIndex};
