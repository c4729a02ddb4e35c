//! Generation orchestrator — reflection in, finished document out.
//!
//! Drives the comment parsers over every requested class, validates the
//! parsed records against reflection metadata, merges negative assertions
//! and hands the sorted collection to the renderer. Fail-fast: the first
//! error aborts the run, no partial document is produced.

use crate::error::GenerateError;
use crate::model::{ClassRecord, ClassRecords, MethodRecord};
use crate::parser::{class_doc, merge, method_doc};
use crate::reflect::{MethodInfo, Reflect};
use crate::render;
use std::collections::BTreeMap;

/// Generate the document for the given fully-qualified class names.
pub fn generate(reflect: &dyn Reflect, classes: &[String]) -> Result<String, GenerateError> {
    let mut records = ClassRecords::new();

    for class in classes {
        let info = reflect.describe(class)?;

        let class_doc =
            class_doc::parse(&info.comment).ok_or_else(|| GenerateError::MissingClassDoc {
                class: class.clone(),
            })?;

        if class_doc.is_internal() {
            continue;
        }

        let mut methods = BTreeMap::new();
        for method in &info.methods {
            let record = parse_method(class, method)?;
            methods.insert(record.name.clone(), record);
        }

        merge::merge_negatives(&mut methods);

        records.insert(class.clone(), ClassRecord { class_doc, methods });
    }

    Ok(render::render(&records))
}

/// Parse one method comment and validate it against reflection metadata:
/// non-empty description, documented parameter names exactly matching the
/// declared ones, defaults attached from the declaration.
fn parse_method(class: &str, method: &MethodInfo) -> Result<MethodRecord, GenerateError> {
    let mut doc = method_doc::parse(&method.comment)
        .map_err(|source| GenerateError::MethodDocParse {
            class: class.to_string(),
            method: method.name.clone(),
            source,
        })?
        .ok_or_else(|| GenerateError::MissingMethodDoc {
            class: class.to_string(),
            method: method.name.clone(),
        })?;

    if doc.doc.is_empty() {
        return Err(GenerateError::EmptyMethodDescription {
            class: class.to_string(),
            method: method.name.clone(),
        });
    }

    for param in &method.params {
        if doc.param(&param.name).is_none() {
            return Err(GenerateError::UndocumentedParam {
                class: class.to_string(),
                method: method.name.clone(),
                param: param.name.clone(),
            });
        }
    }
    for param in &doc.params {
        if !method.params.iter().any(|p| p.name == param.name) {
            return Err(GenerateError::UnknownParam {
                class: class.to_string(),
                method: method.name.clone(),
                param: param.name.clone(),
            });
        }
    }

    for param in &method.params {
        if let Some(default) = &param.default {
            if let Some(doc_param) = doc.params.iter_mut().find(|p| p.name == param.name) {
                doc_param.default = Some(default.clone());
            }
        }
    }

    Ok(MethodRecord {
        name: method.name.clone(),
        doc,
        inverse: None,
    })
}
