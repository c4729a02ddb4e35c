//! Method-level comment parser.
//!
//! Short description first, extended description after the blank comment
//! line, `@param` tags collected in comment order. The only tag shape a
//! method comment may carry is `@param <type> $<name> [<description>]`.

use crate::error::MethodParseError;
use crate::model::{MethodDoc, ParamDoc};
use crate::parser::{comment_lines, strip_marker};
use regex::Regex;
use std::sync::LazyLock;

static RE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s+\$(\S+)").unwrap());

/// Capture target for content lines.
#[derive(Clone, Copy)]
enum Capture {
    Doc,
    Long,
}

/// Parse a method comment block. Returns `None` when the block has no
/// content lines; a `@param` line that does not match the expected shape
/// is an error carrying the raw block text.
pub fn parse(raw: &str) -> Result<Option<MethodDoc>, MethodParseError> {
    let mut lines = comment_lines(raw).peekable();
    if lines.peek().is_none() {
        return Ok(None);
    }

    let mut out = MethodDoc::default();
    let mut capture = Capture::Doc;

    for line in lines {
        if line == "/**" || line == "*/" {
            continue;
        }
        if line == "*" {
            capture = Capture::Long;
            continue;
        }
        if let Some(tag) = line.strip_prefix("* @param") {
            let caps = RE_PARAM.captures(tag.trim_start()).ok_or_else(|| {
                MethodParseError::MalformedParamTag {
                    snippet: raw.to_string(),
                }
            })?;
            push_param(&mut out.params, &caps[2], &caps[1]);
            continue;
        }
        let buf = match capture {
            Capture::Doc => &mut out.doc,
            Capture::Long => &mut out.long,
        };
        buf.push_str(strip_marker(line));
        buf.push('\n');
    }

    out.doc = out.doc.trim().to_string();
    out.long = out.long.trim().to_string();
    Ok(Some(out))
}

/// Insert a parsed parameter, keyed by name: a repeated name updates the
/// existing entry in place instead of appending a duplicate.
fn push_param(params: &mut Vec<ParamDoc>, name: &str, ty: &str) {
    if let Some(existing) = params.iter_mut().find(|p| p.name == name) {
        existing.ty = ty.to_string();
        return;
    }
    params.push(ParamDoc {
        name: name.to_string(),
        ty: ty.to_string(),
        default: None,
    });
}
