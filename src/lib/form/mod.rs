//! Attribute-driven field validation.
//!
//! Rules live on the fields themselves: `data-required`, `data-min-length`
//! and `data-pattern`. Failures surface as an `error` class on the field and
//! a `field-error` element under its parent. Values are trimmed before every
//! check; a `data-pattern` that does not compile is skipped.

use regex::Regex;
use tracing::debug;

use crate::dom::{Document, NodeId};

const RULE_ATTRS: [&str; 3] = ["data-required", "data-pattern", "data-min-length"];

/// Validate every rule-carrying field under `form`. All fields are checked
/// even after a failure, so each shows its own error.
pub fn validate_form(doc: &mut Document, form: NodeId) -> bool {
    let fields: Vec<NodeId> = doc
        .descendants(form)
        .into_iter()
        .filter(|&node| RULE_ATTRS.iter().any(|name| doc.attr(node, name).is_some()))
        .collect();

    let mut all_valid = true;
    for field in fields {
        if !validate_field(doc, field) {
            all_valid = false;
        }
    }
    all_valid
}

/// Check one field against its rules, in order: required, then minimum
/// length, then pattern. The first failing rule reports and stops.
pub fn validate_field(doc: &mut Document, field: NodeId) -> bool {
    let value = doc
        .attr(field, "value")
        .unwrap_or_default()
        .trim()
        .to_string();
    let required = doc.attr(field, "data-required").is_some();
    let pattern = doc.attr(field, "data-pattern").map(str::to_string);
    let min_length = doc.attr(field, "data-min-length").map(str::to_string);

    clear_field_error(doc, field);

    if required && value.is_empty() {
        show_field_error(doc, field, "此字段为必填项");
        return false;
    }

    // The raw attribute text is what the message shows, even when padded.
    if let Some(raw) = min_length {
        if let Ok(min) = raw.trim().parse::<usize>() {
            if value.chars().count() < min {
                show_field_error(doc, field, &format!("最少需要 {raw} 个字符"));
                return false;
            }
        } else if !raw.is_empty() {
            debug!(attr = %raw, "skipping unparseable data-min-length");
        }
    }

    if let Some(pattern) = pattern.filter(|p| !p.is_empty() && !value.is_empty()) {
        match Regex::new(&pattern) {
            Ok(re) => {
                if !re.is_match(&value) {
                    show_field_error(doc, field, "格式不正确");
                    return false;
                }
            }
            Err(error) => debug!(%error, "skipping uncompilable data-pattern"),
        }
    }

    true
}

/// Flag the field and write `message` into a `field-error` element under its
/// parent, reusing one left by an earlier check.
pub fn show_field_error(doc: &mut Document, field: NodeId, message: &str) {
    doc.add_class(field, "error");
    let Some(parent) = doc.parent(field) else {
        return;
    };
    let error = doc
        .elements_with_class(parent, "field-error")
        .first()
        .copied()
        .unwrap_or_else(|| {
            let created = doc.create_element("div");
            doc.set_attr(created, "class", "field-error");
            doc.append_child(parent, created);
            created
        });
    doc.set_text(error, message);
}

pub fn clear_field_error(doc: &mut Document, field: NodeId) {
    doc.remove_class(field, "error");
    let Some(parent) = doc.parent(field) else {
        return;
    };
    if let Some(error) = doc.elements_with_class(parent, "field-error").first().copied() {
        doc.detach(error);
    }
}
