//! Syntax highlighting for `<pre><code>` blocks.
//!
//! Highlighting is class-based: the block's text is replaced with classed
//! spans and [`highlight_css`] supplies the matching stylesheet. The language
//! comes from a `language-x` class on the code element.

use std::sync::OnceLock;

use syntect::{
    highlighting::{Theme, ThemeSet},
    html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};
use tracing::debug;

use crate::dom::{Document, NodeId};

const LANGUAGE_CLASS_PREFIX: &str = "language-";
const THEME_NAME: &str = "InspiredGitHub";

static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

static THEME: OnceLock<Theme> = OnceLock::new();
fn theme() -> &'static Theme {
    THEME.get_or_init(|| {
        ThemeSet::load_defaults()
            .themes
            .remove(THEME_NAME)
            .unwrap_or_default()
    })
}

static HIGHLIGHT_CSS: OnceLock<String> = OnceLock::new();
/// Return the CSS needed for class-based syntax highlighting.
pub fn highlight_css() -> &'static str {
    HIGHLIGHT_CSS.get_or_init(|| {
        css_for_theme_with_class_style(theme(), ClassStyle::Spaced).unwrap_or_default()
    })
}

/// Replace the text of every code block under the page root with classed
/// spans. Unknown or missing languages highlight as plain text; a block
/// syntect cannot parse keeps its original text.
pub fn highlight_code_blocks(doc: &mut Document) {
    let root = doc.root();
    let blocks: Vec<NodeId> = doc
        .elements_with_tag(root, "pre")
        .into_iter()
        .flat_map(|pre| doc.elements_with_tag(pre, "code"))
        .collect();

    for code in blocks {
        let language = language_of(doc, code);
        let source = doc.text_content(code);
        match render_classed_html(&source, language.as_deref()) {
            Some(rendered) => doc.set_inner_html(code, &rendered),
            None => debug!(language = ?language, "left code block unhighlighted"),
        }
    }
}

fn language_of(doc: &Document, code: NodeId) -> Option<String> {
    doc.attr(code, "class")?
        .split_ascii_whitespace()
        .find_map(|class| class.strip_prefix(LANGUAGE_CLASS_PREFIX))
        .map(str::to_string)
}

fn render_classed_html(source: &str, language: Option<&str>) -> Option<String> {
    let syntax_set = syntax_set();
    let syntax: &SyntaxReference = language
        .and_then(|lang| syntax_set.find_syntax_by_token(lang))
        .unwrap_or_else(|| syntax_set.find_syntax_plain_text());

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntax_set, ClassStyle::Spaced);
    for line in LinesWithEndings::from(source) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .ok()?;
    }
    Some(generator.finalize())
}

#[cfg(test)]
mod tests;
