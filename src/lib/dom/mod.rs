//! An arena-backed element/text tree standing in for the browser DOM.
//!
//! Pages are parsed into a [`Document`] once, enhanced in place, and
//! serialized back out. The parser is deliberately lenient: unknown or
//! unbalanced markup never fails, mismatched close tags are dropped, and
//! malformed trailing markup is discarded. Node handles ([`NodeId`]) stay
//! valid for the life of the document, but [`Document::set_inner_html`]
//! rebuilds the subtree it targets, so handles into the old subtree go
//! stale (detached) rather than tracking the new content.

use itertools::Itertools;

use crate::utils::{decode_entities, escape_attr};

/// Handle to a node in a [`Document`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
enum NodeKind {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Element/text tree with `innerHTML`-style access.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag)
}

// Text nodes keep quotes literal so innerHTML string surgery sees the
// same characters text_content reports.
fn escape_text_node(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

impl Document {
    /// Empty document: a tagless root that serializes to "".
    pub fn new() -> Self {
        let root = Node {
            kind: NodeKind::Element {
                tag: String::new(),
                attrs: Vec::new(),
            },
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    pub fn parse(html: &str) -> Self {
        let mut doc = Self::new();
        let root = doc.root;
        doc.parse_into(root, html);
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The first `<body>` element, or the root when the document is a
    /// fragment without one.
    pub fn body(&self) -> NodeId {
        self.elements_with_tag(self.root, "body")
            .first()
            .copied()
            .unwrap_or(self.root)
    }

    fn new_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.new_node(NodeKind::Element {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
        })
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.new_node(NodeKind::Text(text.to_string()))
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Remove a node from its parent. The node stays in the arena and can
    /// be re-attached; a detached handle simply stops matching queries.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent {
            self.nodes[parent.0].children.retain(|&c| c != node);
            self.nodes[node.0].parent = None;
        }
    }

    /// Swap `old` for `new` in place. No-op when `old` is detached.
    pub fn replace_with(&mut self, old: NodeId, new: NodeId) {
        if old == new {
            return;
        }
        let Some(parent) = self.nodes[old.0].parent else {
            return;
        };
        self.detach(new);
        let Some(pos) = self.nodes[parent.0].children.iter().position(|&c| c == old) else {
            return;
        };
        self.nodes[parent.0].children[pos] = new;
        self.nodes[new.0].parent = Some(parent);
        self.nodes[old.0].parent = None;
    }

    pub fn clear_children(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    /// Replace an element's content with a single text node.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        if let NodeKind::Text(existing) = &mut self.nodes[node.0].kind {
            *existing = text.to_string();
            return;
        }
        self.clear_children(node);
        let child = self.create_text(text);
        self.append_child(node, child);
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Element tag name; `None` for text nodes and the tagless root.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { tag, .. } if !tag.is_empty() => Some(tag),
            _ => None,
        }
    }

    /// Text node content; `None` for elements.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => Some(text),
            NodeKind::Element { .. } => None,
        }
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n.as_str() == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if let NodeKind::Element { attrs, .. } = &mut self.nodes[node.0].kind {
            match attrs.iter_mut().find(|(n, _)| n.as_str() == name) {
                Some(slot) => slot.1 = value.to_string(),
                None => attrs.push((name.to_string(), value.to_string())),
            }
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.attr(node, "class")
            .is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        let updated = match self.attr(node, "class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attr(node, "class", &updated);
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        let Some(updated) = self.attr(node, "class").map(|existing| {
            existing
                .split_ascii_whitespace()
                .filter(|c| *c != class)
                .join(" ")
        }) else {
            return;
        };
        self.set_attr(node, "class", &updated);
    }

    /// One declaration out of the inline `style` attribute.
    pub fn style_prop(&self, node: NodeId, prop: &str) -> Option<String> {
        self.attr(node, "style").and_then(|style| {
            style.split(';').find_map(|decl| {
                let (name, value) = decl.split_once(':')?;
                (name.trim() == prop).then(|| value.trim().to_string())
            })
        })
    }

    /// Update one declaration in the inline `style` attribute, keeping the
    /// others.
    pub fn set_style_prop(&mut self, node: NodeId, prop: &str, value: &str) {
        let mut decls: Vec<(String, String)> = self
            .attr(node, "style")
            .map(|style| {
                style
                    .split(';')
                    .filter_map(|decl| {
                        let (name, value) = decl.split_once(':')?;
                        let name = name.trim();
                        (!name.is_empty()).then(|| (name.to_string(), value.trim().to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default();
        match decls.iter_mut().find(|(name, _)| name.as_str() == prop) {
            Some(slot) => slot.1 = value.to_string(),
            None => decls.push((prop.to_string(), value.to_string())),
        }
        let rendered = decls
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .join("; ");
        self.set_attr(node, "style", &rendered);
    }

    /// All nodes under `scope` in document order, excluding `scope`.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&n| self.attr(n, "id") == Some(id))
    }

    pub fn elements_with_tag(&self, scope: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&n| self.tag(n) == Some(tag))
            .collect()
    }

    pub fn elements_with_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&n| self.has_class(n, class))
            .collect()
    }

    pub fn elements_with_attr(&self, scope: NodeId, name: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&n| self.attr(n, name).is_some())
            .collect()
    }

    pub fn text_nodes_under(&self, scope: NodeId) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&n| self.text(n).is_some())
            .collect()
    }

    /// Concatenated text of the node and everything under it.
    pub fn text_content(&self, node: NodeId) -> String {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => text.clone(),
            NodeKind::Element { .. } => {
                let mut out = String::new();
                for id in self.text_nodes_under(node) {
                    out.push_str(self.text(id).unwrap_or_default());
                }
                out
            }
        }
    }

    /// Whether `node` sits somewhere below `ancestor` (strictly).
    pub fn is_attached_under(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = node;
        while let Some(parent) = self.nodes[cursor.0].parent {
            if parent == ancestor {
                return true;
            }
            cursor = parent;
        }
        false
    }

    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        for &child in &self.nodes[node.0].children {
            self.write_node(child, &mut out);
        }
        out
    }

    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    /// Reparse `html` as this node's new content. Any handles into the
    /// previous subtree become detached.
    pub fn set_inner_html(&mut self, node: NodeId, html: &str) {
        self.clear_children(node);
        self.parse_into(node, html);
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].kind {
            NodeKind::Text(text) => {
                let raw_parent = self
                    .parent(id)
                    .and_then(|p| self.tag(p))
                    .is_some_and(is_raw_text);
                if raw_parent {
                    out.push_str(text);
                } else {
                    out.push_str(&escape_text_node(text));
                }
            }
            NodeKind::Element { tag, attrs } => {
                if tag.is_empty() {
                    for &child in &self.nodes[id.0].children {
                        self.write_node(child, out);
                    }
                    return;
                }
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    if !value.is_empty() {
                        out.push_str("=\"");
                        out.push_str(&escape_attr(value));
                        out.push('"');
                    }
                }
                out.push('>');
                if is_void(tag) {
                    return;
                }
                for &child in &self.nodes[id.0].children {
                    self.write_node(child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }

    fn push_text(&mut self, parent: NodeId, raw: &str) {
        if raw.is_empty() {
            return;
        }
        let id = self.new_node(NodeKind::Text(decode_entities(raw)));
        self.append_child(parent, id);
    }

    fn parse_into(&mut self, parent: NodeId, html: &str) {
        let mut stack: Vec<NodeId> = vec![parent];
        let mut rest = html;

        while !rest.is_empty() {
            let top = stack.last().copied().unwrap_or(parent);

            let Some(lt) = rest.find('<') else {
                self.push_text(top, rest);
                break;
            };
            if lt > 0 {
                let (text, after) = rest.split_at(lt);
                self.push_text(top, text);
                rest = after;
                continue;
            }

            if let Some(tail) = rest.strip_prefix("<!--") {
                rest = tail.find("-->").map(|i| &tail[i + 3..]).unwrap_or("");
                continue;
            }
            if rest.starts_with("<!") {
                rest = rest.find('>').map(|i| &rest[i + 1..]).unwrap_or("");
                continue;
            }

            if let Some(tail) = rest.strip_prefix("</") {
                let Some(end) = tail.find('>') else {
                    break;
                };
                let name = tail[..end].trim().to_ascii_lowercase();
                rest = &tail[end + 1..];
                if let Some(pos) = stack
                    .iter()
                    .rposition(|&id| self.tag(id) == Some(name.as_str()))
                {
                    // Never pop the fragment parent itself.
                    if pos > 0 {
                        stack.truncate(pos);
                    }
                }
                continue;
            }

            let after_lt = &rest[1..];
            if !after_lt
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic())
            {
                // Stray '<' is ordinary text.
                self.push_text(top, "<");
                rest = after_lt;
                continue;
            }

            let (tag_name, after_name) = split_tag_name(after_lt);
            let Some((attrs, self_closed, after_tag)) = parse_attrs(after_name) else {
                break;
            };

            let id = self.new_node(NodeKind::Element {
                tag: tag_name.clone(),
                attrs,
            });
            self.append_child(top, id);
            rest = after_tag;

            if self_closed || is_void(&tag_name) {
                continue;
            }

            if is_raw_text(&tag_name) {
                let close = format!("</{tag_name}");
                let lower = rest.to_ascii_lowercase();
                match lower.find(&close) {
                    Some(i) => {
                        if i > 0 {
                            let raw = self.new_node(NodeKind::Text(rest[..i].to_string()));
                            self.append_child(id, raw);
                        }
                        let after_close = &rest[i..];
                        rest = after_close
                            .find('>')
                            .map(|j| &after_close[j + 1..])
                            .unwrap_or("");
                    }
                    None => {
                        if !rest.is_empty() {
                            let raw = self.new_node(NodeKind::Text(rest.to_string()));
                            self.append_child(id, raw);
                        }
                        rest = "";
                    }
                }
                continue;
            }

            stack.push(id);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn split_tag_name(input: &str) -> (String, &str) {
    let end = input
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(input.len());
    (input[..end].to_ascii_lowercase(), &input[end..])
}

fn parse_attrs(mut input: &str) -> Option<(Vec<(String, String)>, bool, &str)> {
    let mut attrs = Vec::new();
    loop {
        input = input.trim_start();
        if let Some(tail) = input.strip_prefix("/>") {
            return Some((attrs, true, tail));
        }
        if let Some(tail) = input.strip_prefix('>') {
            return Some((attrs, false, tail));
        }
        if input.is_empty() {
            return None;
        }

        let name_end = input
            .find(|c: char| c.is_whitespace() || c == '=' || c == '>' || c == '/')
            .unwrap_or(input.len());
        if name_end == 0 {
            // Lone '/' that is not part of '/>'.
            input = &input[1..];
            continue;
        }
        let name = input[..name_end].to_ascii_lowercase();
        input = input[name_end..].trim_start();

        let Some(tail) = input.strip_prefix('=') else {
            attrs.push((name, String::new()));
            continue;
        };
        let tail = tail.trim_start();
        if let Some(quoted) = tail.strip_prefix('"') {
            let close = quoted.find('"')?;
            attrs.push((name, decode_entities(&quoted[..close])));
            input = &quoted[close + 1..];
        } else if let Some(quoted) = tail.strip_prefix('\'') {
            let close = quoted.find('\'')?;
            attrs.push((name, decode_entities(&quoted[..close])));
            input = &quoted[close + 1..];
        } else {
            let end = tail
                .find(|c: char| c.is_whitespace() || c == '>')
                .unwrap_or(tail.len());
            attrs.push((name, decode_entities(&tail[..end])));
            input = &tail[end..];
        }
    }
}
