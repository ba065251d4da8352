//! A small element tree for the generated descriptor documents.
//!
//! Descriptor assembly builds [`Element`] trees; everything about rendering
//! (escaping, indentation, the declaration line) lives here so the
//! descriptor modules never touch markup syntax.

use indexmap::IndexMap;

/// Declaration emitted at the top of every generated document.
const DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// A named element with ordered string attributes and child elements.
///
/// Attribute order is preserved as inserted; the IDE writes its files with a
/// fixed attribute order and the generated documents match it. The
/// descriptor vocabulary has no text nodes, so none are modeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute, replacing any previous value under the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append children from an iterator.
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render as a complete pretty-printed document with a declaration line.
    pub fn to_document(&self) -> String {
        let mut out = String::new();
        out.push_str(DECLARATION);
        out.push('\n');
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        if self.children.is_empty() {
            out.push_str(" />\n");
            return;
        }
        out.push_str(">\n");
        for child in &self.children {
            child.render_into(out, depth + 1);
        }
        out.push_str(&format!("{}</{}>\n", indent, self.name));
    }
}

/// Escape a value for use inside a double-quoted attribute.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_element_self_closes() {
        let doc = Element::new("exclude-output").to_document();
        assert_eq!(
            doc,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<exclude-output />\n"
        );
    }

    #[test]
    fn nested_elements_indent_two_spaces() {
        let doc = Element::new("project")
            .attr("version", "4")
            .child(
                Element::new("component")
                    .attr("name", "RunManager")
                    .child(Element::new("module").attr("name", "project")),
            )
            .to_document();

        assert_eq!(
            doc,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <project version=\"4\">\n\
             \x20 <component name=\"RunManager\">\n\
             \x20   <module name=\"project\" />\n\
             \x20 </component>\n\
             </project>\n"
        );
    }

    #[test]
    fn attributes_render_in_insertion_order() {
        let doc = Element::new("orderEntry")
            .attr("type", "library")
            .attr("level", "project")
            .attr("name", "widget")
            .to_document();
        assert!(doc.contains("<orderEntry type=\"library\" level=\"project\" name=\"widget\" />"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let doc = Element::new("option")
            .attr("value", "a & b <\"c\">")
            .to_document();
        assert!(doc.contains("value=\"a &amp; b &lt;&quot;c&quot;&gt;\""));
    }

    #[test]
    fn repeated_attribute_takes_last_value() {
        let element = Element::new("option").attr("name", "first").attr("name", "second");
        assert!(element.to_document().contains("name=\"second\""));
        assert!(!element.to_document().contains("first"));
    }
}
