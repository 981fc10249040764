//! `<drupal-media>` markup codec.
//!
//! Output is canonical: fixed attribute order, double quotes, explicit
//! closing tag. Input may be self-closing, single- or double-quoted, with
//! arbitrary whitespace between attributes.

use crate::embed::{EmbedNode, ENTITY_TYPE};
use crate::error::{MarkupError, MarkupResult};
use medialib_types::{Alignment, ItemId, ViewModeId};

pub const TAG_NAME: &str = "drupal-media";
pub(crate) const OPEN_TAG: &str = "<drupal-media";
const CLOSE_TAG: &str = "</drupal-media>";

const ATTR_ENTITY_TYPE: &str = "data-entity-type";
const ATTR_ENTITY_UUID: &str = "data-entity-uuid";
const ATTR_ALIGN: &str = "data-align";
const ATTR_VIEW_MODE: &str = "data-view-mode";

/// Serializes an embed to its canonical markup.
pub fn to_markup(node: &EmbedNode) -> String {
    let mut out = String::with_capacity(160);
    out.push_str(OPEN_TAG);
    push_attr(&mut out, ATTR_ENTITY_TYPE, ENTITY_TYPE);
    push_attr(&mut out, ATTR_ENTITY_UUID, &node.referenced_item_id.to_string());
    push_attr(&mut out, ATTR_ALIGN, node.alignment.as_str());
    if let Some(view_mode) = &node.view_mode {
        push_attr(&mut out, ATTR_VIEW_MODE, view_mode.as_str());
    }
    out.push('>');
    out.push_str(CLOSE_TAG);
    out
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

/// Parses a single embed element. Surrounding whitespace is ignored.
pub fn parse_embed(markup: &str) -> MarkupResult<EmbedNode> {
    let trimmed = markup.trim();
    let (result, end) = scan_element(trimmed);
    let node = result?;
    if end != trimmed.len() {
        return Err(MarkupError::unparseable("trailing content after element"));
    }
    Ok(node)
}

/// Scans one element at the start of `input`, which must begin with the
/// opening tag.
///
/// Always returns how many bytes the element spans, even on failure, so a
/// caller can skip the malformed fragment.
pub(crate) fn scan_element(input: &str) -> (MarkupResult<EmbedNode>, usize) {
    if !input.starts_with(OPEN_TAG) {
        return (
            Err(MarkupError::unparseable(format!("expected <{TAG_NAME}>"))),
            0,
        );
    }
    let mut pos = OPEN_TAG.len();
    match input[pos..].chars().next() {
        Some(c) if c.is_ascii_whitespace() || c == '>' || c == '/' => {}
        Some(_) => {
            let end = input.find('>').map_or(input.len(), |i| i + 1);
            return (Err(MarkupError::unparseable("unexpected tag name")), end);
        }
        None => return (Err(MarkupError::unparseable("unterminated tag")), input.len()),
    }

    let mut attrs: Vec<(String, String)> = Vec::new();
    let self_closing = loop {
        pos = skip_whitespace(input, pos);
        let rest = &input[pos..];
        if rest.starts_with("/>") {
            pos += 2;
            break true;
        }
        if rest.starts_with('>') {
            pos += 1;
            break false;
        }
        match scan_attribute(input, pos) {
            Ok((name, value, next)) => {
                attrs.push((name, value));
                pos = next;
            }
            Err(e) => {
                let end = input[pos..].find('>').map_or(input.len(), |i| pos + i + 1);
                return (Err(e), end);
            }
        }
    };

    if !self_closing {
        let after = skip_whitespace(input, pos);
        if input[after..].starts_with(CLOSE_TAG) {
            pos = after + CLOSE_TAG.len();
        } else {
            return (Err(MarkupError::unparseable("missing closing tag")), pos);
        }
    }

    (build_node(attrs), pos)
}

fn skip_whitespace(input: &str, pos: usize) -> usize {
    input[pos..]
        .find(|c: char| !c.is_ascii_whitespace())
        .map_or(input.len(), |i| pos + i)
}

fn scan_attribute(input: &str, start: usize) -> MarkupResult<(String, String, usize)> {
    let name_len = input[start..]
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':'))
        .unwrap_or(input.len() - start);
    if name_len == 0 {
        return Err(MarkupError::unparseable("malformed attribute"));
    }
    let name = input[start..start + name_len].to_ascii_lowercase();

    let mut pos = skip_whitespace(input, start + name_len);
    if !input[pos..].starts_with('=') {
        return Err(MarkupError::unparseable(format!(
            "attribute '{name}' has no value"
        )));
    }
    pos = skip_whitespace(input, pos + 1);

    let rest = &input[pos..];
    let (raw, next) = match rest.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let close = rest[1..].find(quote).ok_or_else(|| {
                MarkupError::unparseable(format!("unterminated value for '{name}'"))
            })?;
            (&rest[1..1 + close], pos + close + 2)
        }
        Some(_) => {
            let len = rest
                .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                .unwrap_or(rest.len());
            (&rest[..len], pos + len)
        }
        None => {
            return Err(MarkupError::unparseable(format!(
                "unterminated value for '{name}'"
            )));
        }
    };
    Ok((name, unescape(raw), next))
}

fn build_node(attrs: Vec<(String, String)>) -> MarkupResult<EmbedNode> {
    let mut entity_type = None;
    let mut uuid = None;
    let mut align = None;
    let mut view_mode = None;

    for (name, value) in attrs {
        let slot = match name.as_str() {
            ATTR_ENTITY_TYPE => &mut entity_type,
            ATTR_ENTITY_UUID => &mut uuid,
            ATTR_ALIGN => &mut align,
            ATTR_VIEW_MODE => &mut view_mode,
            other => {
                return Err(MarkupError::unparseable(format!(
                    "unexpected attribute '{other}'"
                )));
            }
        };
        if slot.replace(value).is_some() {
            return Err(MarkupError::unparseable(format!(
                "duplicate attribute '{name}'"
            )));
        }
    }

    let entity_type = required(entity_type, ATTR_ENTITY_TYPE)?;
    if entity_type != ENTITY_TYPE {
        return Err(MarkupError::unparseable(format!(
            "unsupported entity type '{entity_type}'"
        )));
    }
    let uuid = required(uuid, ATTR_ENTITY_UUID)?;
    let referenced_item_id = ItemId::parse(&uuid)
        .map_err(|e| MarkupError::unparseable(format!("invalid {ATTR_ENTITY_UUID}: {e}")))?;
    let alignment: Alignment = required(align, ATTR_ALIGN)?
        .parse()
        .map_err(|e| MarkupError::unparseable(format!("{e}")))?;
    let view_mode = view_mode
        .map(ViewModeId::new)
        .transpose()
        .map_err(|e| MarkupError::unparseable(format!("{e}")))?;

    Ok(EmbedNode {
        referenced_item_id,
        alignment,
        view_mode,
    })
}

fn required(value: Option<String>, name: &str) -> MarkupResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        Some(_) => Err(MarkupError::unparseable(format!("empty attribute '{name}'"))),
        None => Err(MarkupError::unparseable(format!("missing attribute '{name}'"))),
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

fn unescape(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
