//! The `.idea/misc.xml` project-wide settings.

use std::path::Path;

use crate::util::fs::file_url;
use crate::xml::Element;

/// Project root manager settings: JDK selection and the compiler output
/// location under the project root.
pub fn project_settings(project_root: &Path) -> Element {
    Element::new("project").attr("version", "4").child(
        Element::new("component")
            .attr("name", "ProjectRootManager")
            .attr("version", "2")
            .attr("languageLevel", "JDK_12")
            .attr("default", "true")
            .attr("project-jdk-name", "12")
            .attr("project-jdk-type", "JavaSDK")
            .child(
                Element::new("output").attr("url", format!("{}/out", file_url(project_root))),
            ),
    )
}
