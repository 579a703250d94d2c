use crate::error::{InferenceError, InferenceResult};
use crate::options::{CollisionPolicy, InferenceOptions};
use crate::scope::Scope;
use crate::types::{ArgumentShape, EntryArguments, InferredType, LiteralKey, ResourceArgumentIndex};
use fluent_syntax::ast::{
    CallArguments, Entry, Expression, InlineExpression, Message, Pattern, PatternElement,
    Resource, VariantKey,
};
use tracing::{debug, warn};

/// Infers the arguments each message and attribute of a resource needs
pub struct InferenceEngine {
    options: InferenceOptions,
}

impl InferenceEngine {
    /// Create a new inference engine with the given options
    pub fn new(options: InferenceOptions) -> Self {
        Self { options }
    }

    /// Main entry point: infer the argument index of a parsed resource
    ///
    /// Ids are `message` for message values and `message.attribute` for
    /// attributes. A message without a value gets no id of its own.
    pub fn infer_resource<S: AsRef<str>>(
        &self,
        resource: &Resource<S>,
    ) -> InferenceResult<ResourceArgumentIndex> {
        let mut index = ResourceArgumentIndex::new();

        for entry in &resource.body {
            match entry {
                Entry::Message(message) => self.infer_message(message, &mut index)?,
                // Reported by whoever chose to parse leniently
                Entry::Junk { .. }
                | Entry::Term(_)
                | Entry::Comment(_)
                | Entry::GroupComment(_)
                | Entry::ResourceComment(_) => {}
            }
        }

        debug!(entries = index.len(), "Inferred resource arguments");
        Ok(index)
    }

    fn infer_message<S: AsRef<str>>(
        &self,
        message: &Message<S>,
        index: &mut ResourceArgumentIndex,
    ) -> InferenceResult<()> {
        let name = message.id.name.as_ref();

        if let Some(value) = &message.value {
            self.bind_entry(index, name.to_string(), value)?;
        }

        for attribute in &message.attributes {
            let id = format!("{}.{}", name, attribute.id.name.as_ref());
            self.bind_entry(index, id, &attribute.value)?;
        }

        Ok(())
    }

    fn bind_entry<S: AsRef<str>>(
        &self,
        index: &mut ResourceArgumentIndex,
        id: String,
        pattern: &Pattern<S>,
    ) -> InferenceResult<()> {
        let shape = self.infer_pattern(pattern);
        debug!(id = %id, arguments = shape.len(), "Inferred entry");

        let arguments = if shape.is_empty() && self.options.omit_empty_shapes {
            EntryArguments::None
        } else {
            EntryArguments::Shape(shape)
        };

        if index.contains(&id) {
            match self.options.collisions {
                CollisionPolicy::Reject => return Err(InferenceError::NameCollision { id }),
                CollisionPolicy::LastWriteWins => {
                    warn!(id = %id, "Entry id declared twice, keeping the later one");
                }
            }
        }

        index.insert(id, arguments);
        Ok(())
    }

    /// Infer the argument shape of a single pattern
    pub fn infer_pattern<S: AsRef<str>>(&self, pattern: &Pattern<S>) -> ArgumentShape {
        let mut scope = Scope::new();
        self.infer_from_pattern(pattern, &mut scope);
        scope.into_shape()
    }

    fn infer_from_pattern<S: AsRef<str>>(&self, pattern: &Pattern<S>, scope: &mut Scope) {
        for element in &pattern.elements {
            match element {
                PatternElement::Placeable { expression } => {
                    self.infer_from_expression(expression, scope);
                }
                PatternElement::TextElement { .. } => {}
            }
        }
    }

    fn infer_from_expression<S: AsRef<str>>(&self, expr: &Expression<S>, scope: &mut Scope) {
        match expr {
            Expression::Inline(inline) => self.infer_from_inline(inline, scope),

            Expression::Select { selector, variants } => {
                if let InlineExpression::VariableReference { id } = selector {
                    let candidate = InferredType::literal_union(
                        variants.iter().map(|variant| literal_key(&variant.key)),
                    );
                    scope.bind_selector(id.name.as_ref(), candidate);
                }

                self.infer_from_inline(selector, scope);

                for variant in variants {
                    self.infer_from_pattern(&variant.value, scope);
                }
            }
        }
    }

    fn infer_from_inline<S: AsRef<str>>(&self, expr: &InlineExpression<S>, scope: &mut Scope) {
        match expr {
            InlineExpression::VariableReference { id } => {
                scope.bind_reference(id.name.as_ref());
            }

            InlineExpression::FunctionReference { arguments, .. } => {
                self.infer_from_arguments(arguments, scope);
            }

            InlineExpression::TermReference { arguments, .. } => {
                if let Some(arguments) = arguments {
                    self.infer_from_arguments(arguments, scope);
                }
            }

            InlineExpression::Placeable { expression } => {
                self.infer_from_expression(expression, scope);
            }

            InlineExpression::StringLiteral { .. }
            | InlineExpression::NumberLiteral { .. }
            | InlineExpression::MessageReference { .. } => {}
        }
    }

    fn infer_from_arguments<S: AsRef<str>>(&self, arguments: &CallArguments<S>, scope: &mut Scope) {
        for positional in &arguments.positional {
            self.infer_from_inline(positional, scope);
        }

        for named in &arguments.named {
            self.infer_from_inline(&named.value, scope);
        }
    }
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new(InferenceOptions::default())
    }
}

fn literal_key<S: AsRef<str>>(key: &VariantKey<S>) -> LiteralKey {
    match key {
        VariantKey::Identifier { name } => LiteralKey::String(name.as_ref().to_string()),
        VariantKey::NumberLiteral { value } => LiteralKey::Number(value.as_ref().to_string()),
    }
}
