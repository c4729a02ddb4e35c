//! README rendering.
//!
//! Walks the sorted, merged class records into the listing and body
//! blocks and substitutes both into the document template. Output is
//! byte-identical for identical input records.

pub mod template;

use crate::model::{ClassRecords, MethodRecord};

/// Render the full document for a sorted, merged record collection.
pub fn render(records: &ClassRecords) -> String {
    let mut listing = String::new();
    let mut body = String::new();

    for (class, record) in records {
        let short = short_class_name(class);
        let class_doc = &record.class_doc;

        listing.push_str(&format!("\n- **{}** — {}", short, class_doc.summary));

        body.push_str(&format!(
            "\n## {}\n###### {}\n{}\n",
            short, class, class_doc.doc
        ));
        if !class_doc.doc.is_empty() {
            body.push('\n');
        }

        if let Some(values) = class_doc.tags.get("requires") {
            render_requires(&mut body, values);
        }

        body.push_str("\n### Methods\n");
        for method in record.methods.values() {
            body.push_str(&method_block(method));
            if let Some(inverse) = &method.inverse {
                body.push_str(&format!(
                    "\nThe inverse assertion{}\n",
                    method_block(inverse)
                ));
            }
        }
    }

    template::substitute(&listing, &body)
}

/// `@requires` values: a single value renders as a sentence, several as a
/// bulleted list with blank values skipped.
fn render_requires(body: &mut String, values: &[String]) {
    if let [value] = values {
        body.push_str(&format!("Requires {}.\n", value));
    } else {
        body.push_str("Requires:\n");
        for value in values {
            if !value.is_empty() {
                body.push_str(&format!("* {}\n", value));
            }
        }
    }
}

/// One method's detail block: heading, signature sub-heading, short
/// description. Parameters with defaults render bracketed as optional.
fn method_block(method: &MethodRecord) -> String {
    let mut params = String::new();
    for param in &method.doc.params {
        match &param.default {
            Some(default) => params.push_str(&format!(
                " [, {} ${} = {}]",
                param.ty,
                param.name,
                default_literal(default)
            )),
            None => params.push_str(&format!(", {} ${}", param.ty, param.name)),
        }
    }
    let params = params
        .strip_prefix(", ")
        .unwrap_or_else(|| params.trim_start());

    format!(
        "\n#### {name}()\n###### {name}({params})\n{doc}\n",
        name = method.name,
        params = params,
        doc = method.doc.doc
    )
}

/// Defaults from reflection: textual values single-quoted, everything
/// else in its JSON literal form.
fn default_literal(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => format!("'{}'", s),
        other => other.to_string(),
    }
}

/// Unqualified class name: everything after the final namespace separator.
fn short_class_name(class: &str) -> &str {
    class.rsplit(['\\', ':']).next().unwrap_or(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassDoc, ClassRecord, MethodDoc, ParamDoc};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn method(name: &str, desc: &str, params: Vec<ParamDoc>) -> MethodRecord {
        MethodRecord {
            name: name.to_string(),
            doc: MethodDoc {
                doc: desc.to_string(),
                long: String::new(),
                params,
            },
            inverse: None,
        }
    }

    fn param(name: &str, ty: &str) -> ParamDoc {
        ParamDoc {
            name: name.to_string(),
            ty: ty.to_string(),
            default: None,
        }
    }

    #[test]
    fn short_name_strips_namespaces() {
        assert_eq!(short_class_name("Acme\\Assert\\FooTrait"), "FooTrait");
        assert_eq!(short_class_name("acme::assert::FooTrait"), "FooTrait");
        assert_eq!(short_class_name("FooTrait"), "FooTrait");
    }

    #[test]
    fn default_literal_quotes_strings_only() {
        assert_eq!(default_literal(&json!("abc")), "'abc'");
        assert_eq!(default_literal(&json!("")), "''");
        assert_eq!(default_literal(&json!(10)), "10");
        assert_eq!(default_literal(&json!(true)), "true");
        assert_eq!(default_literal(&json!(null)), "null");
    }

    #[test]
    fn method_block_single_param() {
        let rec = method("assertY", "Checks Y.", vec![param("a", "string")]);
        assert_eq!(
            method_block(&rec),
            "\n#### assertY()\n###### assertY(string $a)\nChecks Y.\n"
        );
    }

    #[test]
    fn method_block_optional_param_is_bracketed() {
        let mut message = param("message", "string");
        message.default = Some(json!(""));
        let rec = method(
            "assertFileExists",
            "Checks the file.",
            vec![param("filename", "string"), message],
        );
        assert_eq!(
            method_block(&rec),
            "\n#### assertFileExists()\n###### assertFileExists(string $filename [, string $message = ''])\nChecks the file.\n"
        );
    }

    #[test]
    fn method_block_no_params() {
        let rec = method("assertSomething", "Checks.", Vec::new());
        assert_eq!(
            method_block(&rec),
            "\n#### assertSomething()\n###### assertSomething()\nChecks.\n"
        );
    }

    #[test]
    fn requires_single_value_renders_sentence() {
        let mut body = String::new();
        render_requires(&mut body, &["ext-posix".to_string()]);
        assert_eq!(body, "Requires ext-posix.\n");
    }

    #[test]
    fn requires_multiple_values_render_list() {
        let mut body = String::new();
        render_requires(
            &mut body,
            &[
                "ext-mbstring".to_string(),
                "".to_string(),
                "intl".to_string(),
            ],
        );
        assert_eq!(body, "Requires:\n* ext-mbstring\n* intl\n");
    }

    #[test]
    fn render_is_deterministic() {
        let mut methods = BTreeMap::new();
        let rec = method("assertY", "Checks Y.", vec![param("a", "string")]);
        methods.insert(rec.name.clone(), rec);

        let mut records = ClassRecords::new();
        records.insert(
            "Acme\\Assert\\YTrait".to_string(),
            ClassRecord {
                class_doc: ClassDoc {
                    summary: "Does X.".to_string(),
                    doc: String::new(),
                    tags: BTreeMap::new(),
                },
                methods,
            },
        );

        assert_eq!(render(&records), render(&records));
    }

    #[test]
    fn inverse_renders_directly_after_its_positive() {
        let mut positive = method("assertFoo", "Checks foo.", Vec::new());
        positive.inverse = Some(Box::new(method(
            "assertFooNot",
            "Checks not foo.",
            Vec::new(),
        )));
        let mut methods = BTreeMap::new();
        methods.insert(positive.name.clone(), positive);

        let mut records = ClassRecords::new();
        records.insert(
            "Acme\\Assert\\FooTrait".to_string(),
            ClassRecord {
                class_doc: ClassDoc {
                    summary: "Does X.".to_string(),
                    doc: String::new(),
                    tags: BTreeMap::new(),
                },
                methods,
            },
        );

        let out = render(&records);
        assert!(out.contains(
            "\n#### assertFoo()\n###### assertFoo()\nChecks foo.\n\nThe inverse assertion\n#### assertFooNot()\n###### assertFooNot()\nChecks not foo.\n\n"
        ));
    }
}
