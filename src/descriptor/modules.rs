//! The `.idea/modules.xml` module registration.

use std::path::PathBuf;

use crate::util::fs::{file_url, forward_slashes};
use crate::xml::Element;

/// Register the given module descriptor files with the project.
pub fn module_registration(module_files: &[PathBuf]) -> Element {
    let mut modules = Element::new("modules");
    for module in module_files {
        modules = modules.child(
            Element::new("module")
                .attr("fileurl", file_url(module))
                .attr("filepath", forward_slashes(module)),
        );
    }

    Element::new("project").attr("version", "4").child(
        Element::new("component")
            .attr("name", "ProjectModuleManager")
            .child(modules),
    )
}
