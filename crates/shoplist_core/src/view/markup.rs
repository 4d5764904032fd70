//! Markup tree construction and string materialization.
//!
//! # Responsibility
//! - Provide a small builder for the element tree one render produces.
//! - Materialize that tree to a markup string in one thin, separately
//!   testable step.
//!
//! # Invariants
//! - Text content and attribute values are escaped at materialization, so
//!   arbitrary item names cannot produce malformed markup.
//! - Attribute names and element names come from this crate, never from
//!   user input, and are emitted verbatim.
//! - All emitted elements are explicitly closed; the builder targets the
//!   list fragment's element set (no void elements).

/// One element in the markup tree.
///
/// Built with chained calls and turned into a string via [`MarkupNode::to_html`]
/// or [`fragment_html`]. Text content renders before child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    tag: &'static str,
    classes: Vec<String>,
    attrs: Vec<(&'static str, String)>,
    text: Option<String>,
    children: Vec<MarkupNode>,
}

impl MarkupNode {
    /// Starts a new element with the given tag name.
    pub fn element(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Appends one class to the element's class list.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets one attribute. Repeated names are emitted in call order.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Sets the element's text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends one child element.
    pub fn child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the value of one attribute, if set.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Materializes this element and its subtree to a markup string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape_html(&self.classes.join(" ")));
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape_html(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// Materializes a sequence of sibling elements, concatenated with no
/// separator.
pub fn fragment_html(nodes: &[MarkupNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_html(&mut out);
    }
    out
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::{escape_html, fragment_html, MarkupNode};

    #[test]
    fn escape_html_covers_markup_metacharacters() {
        assert_eq!(
            escape_html(r#"<b>"salt & pepper"</b>"#),
            "&lt;b&gt;&quot;salt &amp; pepper&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn to_html_emits_classes_attrs_text_and_children() {
        let node = MarkupNode::element("li")
            .class("list-row")
            .attr("data-item-id", "abc")
            .text("milk")
            .child(MarkupNode::element("span").class("row-actions"));

        assert_eq!(
            node.to_html(),
            r#"<li class="list-row" data-item-id="abc">milk<span class="row-actions"></span></li>"#
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let node = MarkupNode::element("span").attr("data-label", r#"a"b<c"#);
        assert_eq!(
            node.to_html(),
            r#"<span data-label="a&quot;b&lt;c"></span>"#
        );
    }

    #[test]
    fn fragment_html_concatenates_without_separator() {
        let rows = vec![
            MarkupNode::element("li").text("a"),
            MarkupNode::element("li").text("b"),
        ];
        assert_eq!(fragment_html(&rows), "<li>a</li><li>b</li>");
    }

    #[test]
    fn attr_value_returns_set_attribute() {
        let node = MarkupNode::element("li").attr("data-item-id", "xyz");
        assert_eq!(node.attr_value("data-item-id"), Some("xyz"));
        assert_eq!(node.attr_value("data-action"), None);
    }
}
