//! Assembly of the IDE's project descriptor documents.
//!
//! Each submodule builds the [`Element`](crate::xml::Element) tree for one
//! generated file; rendering happens in [`crate::xml`]. Element and
//! attribute names mirror the files the IDE writes for itself, with the
//! `version="4"` schema throughout.

pub mod kotlinc;
pub mod library_table;
pub mod misc;
pub mod module_iml;
pub mod modules;
pub mod workspace;

use crate::xml::Element;

/// File name of the module descriptor at the project root.
pub const MODULE_FILE_NAME: &str = "project.iml";

/// Module name the run configuration refers to.
pub(crate) const MODULE_NAME: &str = "project";

/// `<option name=".." value=".." />` row.
pub(crate) fn option(name: &str, value: &str) -> Element {
    Element::new("option").attr("name", name).attr("value", value)
}

/// `<option name=".." />` row with no value.
pub(crate) fn flag_option(name: &str) -> Element {
    Element::new("option").attr("name", name)
}
