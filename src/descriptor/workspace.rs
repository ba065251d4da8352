//! The `.idea/workspace.xml` run configuration.

use super::{flag_option, option, MODULE_NAME};
use crate::xml::Element;

/// Run configuration for the given entry point.
///
/// The class name is taken as given; it is not checked against the linked
/// source set.
pub fn run_configuration(main_class: &str) -> Element {
    Element::new("project").attr("version", "4").child(
        Element::new("component").attr("name", "RunManager").child(
            Element::new("configuration")
                .attr("name", "Run")
                .attr("type", "JetRunConfigurationType")
                .attr("factoryName", "Kotlin")
                .child(Element::new("module").attr("name", MODULE_NAME))
                .child(flag_option("VM_PARAMETERS"))
                .child(flag_option("PROGRAM_PARAMETERS"))
                .child(flag_option("ALTERNATIVE_JRE_PATH_ENABLED"))
                .child(flag_option("ALTERNATIVE_JRE_PATH"))
                .child(option("PASS_PARENT_ENVS", "true"))
                .child(option("MAIN_CLASS_NAME", main_class))
                .child(flag_option("WORKING_DIRECTORY"))
                .child(
                    Element::new("method").attr("v", "2").child(
                        Element::new("option")
                            .attr("name", "Make")
                            .attr("enabled", "true"),
                    ),
                ),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_configuration_carries_main_class() {
        let doc = run_configuration("com.example.MainKt").to_document();
        assert!(doc.contains("<option name=\"MAIN_CLASS_NAME\" value=\"com.example.MainKt\" />"));
        assert!(doc.contains("<module name=\"project\" />"));
        assert!(doc.contains("<option name=\"VM_PARAMETERS\" />"));
    }
}
