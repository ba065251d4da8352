//! Slipway - single-module JetBrains IDE project generation.
//!
//! This crate lays out an IntelliJ IDEA project folder for a flat list of
//! source files and libraries: a `src/` folder of symlinked sources, the
//! `project.iml` module descriptor, and the `.idea/` settings tree with
//! compiler options, module registration, project metadata, an optional run
//! configuration, and one reference file per library. It can then launch the
//! IDE as a detached process against the generated folder.
//!
//! Slipway is a library with no command-line surface; a host tool calls
//! [`generate_project`] and [`launch`] directly.

pub mod core;
pub mod descriptor;
pub mod ops;
pub mod util;
pub mod xml;

pub use crate::core::Library;
pub use crate::ops::generate::{generate_project, GenerateOptions};
pub use crate::ops::launch::launch;
