//! The per-library reference files under `.idea/libraries/`.

use crate::core::Library;
use crate::util::fs::jar_url;
use crate::xml::Element;

/// Library table holding a single project library.
pub fn library_table(library: &Library) -> Element {
    Element::new("component")
        .attr("name", "libraryTable")
        .child(library_entry(library))
}

/// One library: classes root plus javadoc and sources sections. The
/// optional sections are always present, empty when the artifact is absent.
fn library_entry(library: &Library) -> Element {
    let classes = Element::new("CLASSES")
        .child(Element::new("root").attr("url", jar_url(&library.classes)));

    let mut javadoc = Element::new("JAVADOC");
    if let Some(path) = &library.javadoc {
        javadoc = javadoc.child(Element::new("root").attr("url", jar_url(path)));
    }

    let mut sources = Element::new("SOURCES");
    if let Some(path) = &library.sources {
        sources = sources.child(Element::new("root").attr("url", jar_url(path)));
    }

    Element::new("library")
        .attr("name", library.file_safe_name())
        .child(classes)
        .child(javadoc)
        .child(sources)
}
