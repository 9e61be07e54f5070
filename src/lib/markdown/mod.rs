//! Regex-driven renderer for the markdown subset used by site pages.
//!
//! This is not a markdown parser. Each rule is a single regex rewrite
//! applied to the whole source in a fixed order, so the quirks of that
//! approach are part of the contract:
//!
//! - `**` and `*` spans match greedily. In `**a** and **b**` the bold
//!   rule captures `a** and **b` as one span; separate emphasis runs on
//!   a line merge into one element.
//! - Inline code is the one lazy rule, so `` `a` and `b` `` yields two
//!   code spans.
//! - Raw HTML in the source passes through untouched.
//! - Paragraphs come from splitting on blank lines after the inline
//!   rules have run, and the whole output is wrapped in one `<p>` pair.

use std::sync::OnceLock;

use regex::Regex;

/// Rewrite rules in application order.
const RULES: &[(&str, &str)] = &[
    (r"(?m)^### (.*)$", "<h3>${1}</h3>"),
    (r"(?m)^## (.*)$", "<h2>${1}</h2>"),
    (r"(?m)^# (.*)$", "<h1>${1}</h1>"),
    (r"\*\*(.*)\*\*", "<strong>${1}</strong>"),
    (r"\*(.*)\*", "<em>${1}</em>"),
    (r"`(.*?)`", "<code>${1}</code>"),
    (r"\[([^\]]+)\]\(([^)]+)\)", r#"<a href="${2}">${1}</a>"#),
];

static COMPILED: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();

fn rules() -> &'static [(Regex, &'static str)] {
    COMPILED.get_or_init(|| {
        RULES
            .iter()
            .map(|(pattern, replacement)| {
                let re = Regex::new(pattern).expect("static rule pattern is valid");
                (re, *replacement)
            })
            .collect()
    })
}

/// Render the markdown subset to an HTML paragraph block.
pub fn render(markdown: &str) -> String {
    let mut html = markdown.to_string();
    for (re, replacement) in rules() {
        html = re.replace_all(&html, *replacement).into_owned();
    }
    let html = html.replace("\n\n", "</p><p>");
    format!("<p>{html}</p>")
}

#[cfg(test)]
mod tests;
