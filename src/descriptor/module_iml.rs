//! The `project.iml` module descriptor.

use std::path::{Path, PathBuf};

use crate::core::Library;
use crate::util::fs::file_url;
use crate::xml::Element;

/// Module descriptor: content root, source folders, and order entries for
/// the inherited JDK, the source folder, and each project library.
pub fn module_descriptor(
    project_root: &Path,
    source_dirs: &[PathBuf],
    libraries: &[Library],
) -> Element {
    let mut content = Element::new("content").attr("url", file_url(project_root));
    for dir in source_dirs {
        content = content.child(
            Element::new("sourceFolder")
                .attr("url", file_url(dir))
                .attr("isTestSource", "false"),
        );
    }

    let mut component = Element::new("component")
        .attr("name", "NewModuleRootManager")
        .attr("inherit-compiler-output", "true")
        .child(Element::new("exclude-output"))
        .child(content)
        .child(Element::new("orderEntry").attr("type", "inheritedJdk"))
        .child(
            Element::new("orderEntry")
                .attr("type", "sourceFolder")
                .attr("forTests", "false"),
        );
    for library in libraries {
        component = component.child(library_order_entry(library));
    }

    Element::new("module")
        .attr("type", "JAVA_MODULE")
        .attr("version", "4")
        .child(component)
}

/// Project-level library reference among the module's order entries.
fn library_order_entry(library: &Library) -> Element {
    Element::new("orderEntry")
        .attr("type", "library")
        .attr("level", "project")
        .attr("name", library.file_safe_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_lists_source_folder_and_libraries() {
        let root = PathBuf::from("/projects/demo");
        let src = vec![root.join("src")];
        let libs = vec![Library::new("org.example:widget:1.2", "/libs/widget.jar")];

        let doc = module_descriptor(&root, &src, &libs).to_document();

        assert!(doc.contains("<module type=\"JAVA_MODULE\" version=\"4\">"));
        assert!(doc.contains("<content url=\"file:///projects/demo\">"));
        assert!(doc.contains(
            "<sourceFolder url=\"file:///projects/demo/src\" isTestSource=\"false\" />"
        ));
        assert!(doc.contains("<orderEntry type=\"inheritedJdk\" />"));
        assert!(doc.contains(
            "<orderEntry type=\"library\" level=\"project\" name=\"org.example_widget_1.2\" />"
        ));
    }
}
