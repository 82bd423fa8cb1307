//! Minimal HTML element tree.
//!
//! Widgets are built as [`Element`] trees rather than strings so the form
//! style can decorate the main control (add classes, read its id or value)
//! after the widget has been produced. Rendering happens once, through
//! [`Display`](std::fmt::Display), when the form is written out.
//!
//! Attributes keep insertion order, so output is deterministic.
//!
//! ```rust
//! use md1_render::html::Element;
//!
//! let input = Element::new("input")
//!     .attr("type", "text")
//!     .attr("name", "title")
//!     .attr("value", "a \"quoted\" value");
//!
//! assert_eq!(
//!     input.to_string(),
//!     r#"<input type="text" name="title" value="a &quot;quoted&quot; value">"#
//! );
//! ```

use std::borrow::Cow;
use std::fmt;

/// Elements rendered without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Pre-rendered markup, written verbatim (inline scripts).
    Raw(String),
}

impl Node {
    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Whether this node is an inline script, either raw markup or a
    /// `<script>` element.
    pub fn is_script(&self) -> bool {
        match self {
            Node::Raw(markup) => markup.trim_start().starts_with("<script"),
            Node::Element(el) => el.name() == "script",
            Node::Text(_) => false,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => el.fmt(f),
            Node::Text(text) => f.write_str(&escape(text)),
            Node::Raw(markup) => f.write_str(markup),
        }
    }
}

/// An HTML element with ordered attributes and child nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets an attribute, replacing any previous value with the same key.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Sets an attribute only when `value` is present.
    pub fn attr_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(key, value),
            None => self,
        }
    }

    /// Sets an attribute in place.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Looks up an attribute value.
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// The `class` attribute.
    pub fn class(&self) -> Option<&str> {
        self.get_attr("class")
    }

    /// The `value` attribute.
    pub fn value(&self) -> Option<&str> {
        self.get_attr("value")
    }

    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.class()
            .map(|list| list.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Appends `class` to the class list unless already present.
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let joined = match self.class() {
            Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.set_attr("class", joined);
    }

    /// Appends a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends several child nodes.
    pub fn children_from<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Appends a child node in place.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Child nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Consumes the element, returning its children.
    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    /// Depth-first search for the first element named `name`, including self.
    pub fn find(&self, name: &str) -> Option<&Element> {
        if self.name == name {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find_map(|child| child.find(name))
    }

    /// Collects every element named `name` in document order, including self.
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect(name, &mut found);
        found
    }

    fn collect<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        if self.name == name {
            found.push(self);
        }
        for child in self.children.iter().filter_map(Node::as_element) {
            child.collect(name, found);
        }
    }

    /// Whether self or any descendant is one of `names`.
    pub fn contains_any(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.find(name).is_some())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (key, value) in &self.attrs {
            write!(f, " {}=\"{}\"", key, escape(value))?;
        }
        f.write_str(">")?;
        if VOID_ELEMENTS.contains(&self.name.as_str()) {
            return Ok(());
        }
        for child in &self.children {
            child.fmt(f)?;
        }
        write!(f, "</{}>", self.name)
    }
}

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(&['&', '<', '>', '"', '\''][..]) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
