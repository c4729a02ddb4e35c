//! Reflection facility — the introspection seam the generator consumes.
//!
//! The generator never touches files; it asks a [`Reflect`] implementation
//! for raw comment text and method/parameter metadata. [`ManifestReflector`]
//! answers from a precomputed JSON manifest, the shape the documented
//! library's build tooling exports.

use crate::error::GenerateError;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Introspection capability: enumerate classes and describe one class as
/// raw comment text plus public-method metadata.
pub trait Reflect {
    /// Every fully-qualified class name known to this source, sorted.
    fn classes(&self) -> Vec<String>;

    /// Class comment and public methods for one fully-qualified name.
    fn describe(&self, class: &str) -> Result<ClassInfo, GenerateError>;
}

/// Raw reflection data for one class.
#[derive(Debug, Clone)]
pub struct ClassInfo {
    pub comment: String,
    pub methods: Vec<MethodInfo>,
}

/// Raw reflection data for one public method.
#[derive(Debug, Clone)]
pub struct MethodInfo {
    pub name: String,
    pub comment: String,
    /// Declared parameters in declaration order.
    pub params: Vec<ParamInfo>,
}

/// One declared parameter.
#[derive(Debug, Clone)]
pub struct ParamInfo {
    pub name: String,
    /// Declared default value, if any.
    pub default: Option<serde_json::Value>,
}

// -- Manifest-backed implementation -------------------------------------------

/// Precomputed reflection manifest.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    pub classes: BTreeMap<String, ClassEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ClassEntry {
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

#[derive(Debug, Deserialize)]
pub struct MethodEntry {
    pub name: String,
    #[serde(default)]
    pub comment: String,
    /// Non-public methods never reach the generator.
    #[serde(default = "default_public")]
    pub public: bool,
    #[serde(default)]
    pub params: Vec<ParamEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ParamEntry {
    pub name: String,
    /// JSON `null` (or an absent key) means the parameter has no default.
    #[serde(default)]
    pub default: Option<serde_json::Value>,
}

fn default_public() -> bool {
    true
}

impl Manifest {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// [`Reflect`] implementation answering from a [`Manifest`].
pub struct ManifestReflector {
    manifest: Manifest,
}

impl ManifestReflector {
    pub fn new(manifest: Manifest) -> Self {
        Self { manifest }
    }
}

impl Reflect for ManifestReflector {
    fn classes(&self) -> Vec<String> {
        self.manifest.classes.keys().cloned().collect()
    }

    fn describe(&self, class: &str) -> Result<ClassInfo, GenerateError> {
        let entry =
            self.manifest
                .classes
                .get(class)
                .ok_or_else(|| GenerateError::UnknownClass {
                    class: class.to_string(),
                })?;

        let methods = entry
            .methods
            .iter()
            .filter(|method| method.public)
            .map(|method| MethodInfo {
                name: method.name.clone(),
                comment: method.comment.clone(),
                params: method
                    .params
                    .iter()
                    .map(|param| ParamInfo {
                        name: param.name.clone(),
                        default: param.default.clone(),
                    })
                    .collect(),
            })
            .collect();

        Ok(ClassInfo {
            comment: entry.comment.clone(),
            methods,
        })
    }
}
