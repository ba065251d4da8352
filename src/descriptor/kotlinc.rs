//! The `.idea/kotlinc.xml` compiler settings.

use super::option;
use crate::xml::Element;

const JVM_TARGET: &str = "1.8";
const API_VERSION: &str = "1.3";
const LANGUAGE_VERSION: &str = "1.3";

/// Compiler settings, pinned to the target and language versions the
/// generated module is built against.
pub fn compiler_settings() -> Element {
    Element::new("project")
        .attr("version", "4")
        .child(
            Element::new("component")
                .attr("name", "Kotlin2JvmCompilerArguments")
                .child(option("jvmTarget", JVM_TARGET)),
        )
        .child(
            Element::new("component")
                .attr("name", "KotlinCommonCompilerArguments")
                .child(option("apiVersion", API_VERSION))
                .child(option("languageVersion", LANGUAGE_VERSION)),
        )
}
