//! Minimal HTML element builder.
//!
//! Text children and attribute values are escaped when rendered; only
//! [`Node::Raw`] is emitted verbatim.

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Raw(String),
}

impl Node {
    pub fn render_into(&self, out: &mut String) {
        match self {
            Node::Element(e) => e.render_into(out),
            Node::Text(t) => out.push_str(&html_escape(t)),
            Node::Raw(r) => out.push_str(r),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
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

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// An HTML element with attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
}

/// Shorthand for [`Element::new`].
pub fn el(tag: &'static str) -> Element {
    Element::new(tag)
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Set an attribute, replacing an earlier value of the same name.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set a boolean attribute such as `open` or `selected`.
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on && !self.attrs.iter().any(|(n, _)| *n == name) {
            self.attrs.push((name, None));
        }
        self
    }

    pub fn class(self, classes: impl Into<String>) -> Self {
        self.attr("class", classes)
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn href(self, href: impl Into<String>) -> Self {
        self.attr("href", href)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a child only when `node` is `Some`.
    pub fn child_opt(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn raw(self, html: impl Into<String>) -> Self {
        self.child(Node::Raw(html.into()))
    }

    pub fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(&html_escape(value));
                out.push('"');
            }
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.render_into(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_nested_render() {
        let html = el("div")
            .class("card")
            .child(el("h3").text("E-E-A-T & Trust"))
            .child(el("input").attr("value", "\"q\""))
            .to_html();
        assert_eq!(
            html,
            r#"<div class="card"><h3>E-E-A-T &amp; Trust</h3><input value="&quot;q&quot;"></div>"#
        );
    }

    #[test]
    fn test_flags_and_replaced_attrs() {
        let html = el("details")
            .flag("open", true)
            .flag("hidden", false)
            .attr("data-id", "a")
            .attr("data-id", "b")
            .to_html();
        assert_eq!(html, r#"<details open data-id="b"></details>"#);
    }

    #[test]
    fn test_raw_is_verbatim() {
        let html = el("p").raw("&copy;").child_opt(None::<Element>).to_html();
        assert_eq!(html, "<p>&copy;</p>");
    }
}
