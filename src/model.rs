//! Data model for parsed documentation records — format-agnostic.

use std::collections::BTreeMap;

/// All parsed classes of one generation run, keyed by fully-qualified
/// class name. `BTreeMap` gives the lexicographic order the renderer
/// walks in.
pub type ClassRecords = BTreeMap<String, ClassRecord>;

/// A documented class with its merged public methods.
#[derive(Debug)]
pub struct ClassRecord {
    pub class_doc: ClassDoc,
    /// Keyed by method name. Negatives absorbed as inverses have been
    /// removed by the merge step.
    pub methods: BTreeMap<String, MethodRecord>,
}

/// Class-level comment block, parsed.
#[derive(Debug, Default)]
pub struct ClassDoc {
    /// First paragraph of the comment.
    pub summary: String,
    /// Everything after the first blank comment line. May be empty.
    pub doc: String,
    /// Tag name → values, one entry per occurrence of the tag.
    /// A bare tag contributes an empty string.
    pub tags: BTreeMap<String, Vec<String>>,
}

impl ClassDoc {
    /// Classes tagged `@internal` are excluded from generated output.
    pub fn is_internal(&self) -> bool {
        self.tags.contains_key("internal")
    }
}

/// Method-level comment block, parsed.
#[derive(Debug, Default)]
pub struct MethodDoc {
    /// Short description. Never empty once validated.
    pub doc: String,
    /// Extended description after the first blank comment line.
    pub long: String,
    /// Parameters in declaration order.
    pub params: Vec<ParamDoc>,
}

impl MethodDoc {
    pub fn param(&self, name: &str) -> Option<&ParamDoc> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// A single documented parameter.
#[derive(Debug)]
pub struct ParamDoc {
    pub name: String,
    /// Declared type token from the `@param` tag.
    pub ty: String,
    /// Default value attached from reflection, if the parameter has one.
    pub default: Option<serde_json::Value>,
}

/// A method together with its paired negative assertion, if any.
#[derive(Debug)]
pub struct MethodRecord {
    pub name: String,
    pub doc: MethodDoc,
    /// The matching `assert…Not…` record, moved here by the merge step.
    pub inverse: Option<Box<MethodRecord>>,
}
