use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a select-expression variant, kept in the form it was written
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralKey {
    /// `[one]`, `[other]`, ...
    String(String),
    /// `[0]`, `[1.5]`, `[-1]`, ... with the literal text as written
    Number(String),
}

impl LiteralKey {
    pub fn as_str(&self) -> &str {
        match self {
            LiteralKey::String(s) | LiteralKey::Number(s) => s,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, LiteralKey::Number(_))
    }
}

impl fmt::Display for LiteralKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inferred type of a single message argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InferredType {
    /// Any value the runtime accepts; the variable is only interpolated
    Opaque,

    /// Exactly the variant keys of the select expression that branches on
    /// the variable, in declaration order
    LiteralUnion(IndexSet<LiteralKey>),
}

impl InferredType {
    /// Build a literal union, keeping the first position of repeated keys
    pub fn literal_union(keys: impl IntoIterator<Item = LiteralKey>) -> Self {
        InferredType::LiteralUnion(keys.into_iter().collect())
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, InferredType::Opaque)
    }

    /// Keys of a literal union, empty for opaque arguments
    pub fn keys(&self) -> impl Iterator<Item = &LiteralKey> {
        let keys = match self {
            InferredType::Opaque => None,
            InferredType::LiteralUnion(keys) => Some(keys),
        };
        keys.into_iter().flatten()
    }
}

/// Variables a pattern needs at format time, in order of first discovery
pub type ArgumentShape = IndexMap<String, InferredType>;

/// What a formattable entry accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryArguments {
    /// The entry takes an arguments object of this shape, possibly empty
    Shape(ArgumentShape),
    /// The entry takes no arguments parameter at all
    None,
}

impl EntryArguments {
    pub fn shape(&self) -> Option<&ArgumentShape> {
        match self {
            EntryArguments::Shape(shape) => Some(shape),
            EntryArguments::None => None,
        }
    }

    pub fn accepts_arguments(&self) -> bool {
        matches!(self, EntryArguments::Shape(_))
    }
}

/// Argument shapes of every formattable entry in one resource, keyed by
/// `message` or `message.attribute`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceArgumentIndex {
    entries: IndexMap<String, EntryArguments>,
}

impl ResourceArgumentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an entry, returning what it replaced
    pub fn insert(&mut self, id: String, arguments: EntryArguments) -> Option<EntryArguments> {
        self.entries.insert(id, arguments)
    }

    pub fn get(&self, id: &str) -> Option<&EntryArguments> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntryArguments)> {
        self.entries.iter().map(|(id, args)| (id.as_str(), args))
    }

    /// Ids that take an arguments object, with their shapes
    pub fn argument_ids(&self) -> impl Iterator<Item = (&str, &ArgumentShape)> {
        self.entries
            .iter()
            .filter_map(|(id, args)| args.shape().map(|shape| (id.as_str(), shape)))
    }

    /// Ids whose signature omits the arguments parameter
    pub fn no_argument_ids(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, args)| !args.accepts_arguments())
            .map(|(id, _)| id.as_str())
    }
}
