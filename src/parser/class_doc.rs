//! Class-level comment parser.
//!
//! Splits a delimiter-bounded comment block into a one-paragraph summary,
//! a long description and a tag table. The first blank comment line
//! switches capture from summary to description.

use crate::model::ClassDoc;
use crate::parser::{comment_lines, split_tag, strip_marker};

/// Capture target for content lines.
#[derive(Clone, Copy)]
enum Capture {
    Summary,
    Doc,
}

/// Parse a class comment block. Returns `None` when the block has no
/// content lines at all; the orchestrator reports that as missing class
/// documentation.
pub fn parse(raw: &str) -> Option<ClassDoc> {
    let mut lines = comment_lines(raw).peekable();
    lines.peek()?;

    let mut out = ClassDoc::default();
    let mut capture = Capture::Summary;

    for line in lines {
        if line == "/**" {
            continue;
        }
        if line == "*/" {
            break;
        }
        if line == "*" {
            capture = Capture::Doc;
            continue;
        }
        if let Some(tag) = line.strip_prefix("* @") {
            let (name, value) = split_tag(tag);
            out.tags
                .entry(name.to_string())
                .or_default()
                .push(value.to_string());
            continue;
        }
        // Content shorter than the marker prefix carries no text.
        if line.len() > 2 {
            let buf = match capture {
                Capture::Summary => &mut out.summary,
                Capture::Doc => &mut out.doc,
            };
            buf.push_str(strip_marker(line));
            buf.push('\n');
        }
    }

    out.summary = out.summary.trim().to_string();
    out.doc = out.doc.trim().to_string();
    Some(out)
}
