//! Project generation: folder layout, source linking, descriptor writing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::Library;
use crate::descriptor::{self, MODULE_FILE_NAME};
use crate::util::fs::{clear_dir, ensure_dir, symlink, write_string};

/// Inputs for [`generate_project`].
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Source files to link into the project's `src/` folder, in order.
    pub sources: Vec<PathBuf>,

    /// Libraries to reference from the module.
    pub libraries: Vec<Library>,

    /// Fully-qualified entry point. When present, a run configuration is
    /// written for it.
    pub main_class: Option<String>,
}

/// Generate a single-module IDE project under `folder`.
///
/// Destructive: any existing contents of `folder` are removed first, so the
/// folder must not hold unrelated data. A failure partway through leaves the
/// folder partially written; nothing is rolled back.
///
/// Returns the folder path.
pub fn generate_project(folder: &Path, opts: &GenerateOptions) -> Result<PathBuf> {
    ensure_dir(folder)?;
    debug!("clearing {}", folder.display());
    clear_dir(folder)?;

    let src_dir = folder.join("src");
    ensure_dir(&src_dir)?;
    for source in &opts.sources {
        link_source(&src_dir, source)?;
    }
    debug!("linked {} source file(s)", opts.sources.len());

    let module_file = folder.join(MODULE_FILE_NAME);
    write_string(
        &module_file,
        &descriptor::module_iml::module_descriptor(
            folder,
            std::slice::from_ref(&src_dir),
            &opts.libraries,
        )
        .to_document(),
    )?;

    let idea_dir = folder.join(".idea");
    ensure_dir(&idea_dir)?;
    write_string(
        &idea_dir.join("kotlinc.xml"),
        &descriptor::kotlinc::compiler_settings().to_document(),
    )?;
    write_string(
        &idea_dir.join("modules.xml"),
        &descriptor::modules::module_registration(std::slice::from_ref(&module_file))
            .to_document(),
    )?;
    write_string(
        &idea_dir.join("misc.xml"),
        &descriptor::misc::project_settings(folder).to_document(),
    )?;
    if let Some(main_class) = &opts.main_class {
        write_string(
            &idea_dir.join("workspace.xml"),
            &descriptor::workspace::run_configuration(main_class).to_document(),
        )?;
    }

    let lib_dir = idea_dir.join("libraries");
    ensure_dir(&lib_dir)?;
    for library in &opts.libraries {
        let file = lib_dir.join(format!("{}.xml", library.file_safe_name()));
        write_string(&file, &descriptor::library_table::library_table(library).to_document())?;
    }

    debug!("generated project at {}", folder.display());
    Ok(folder.to_path_buf())
}

/// Link one source file into the source folder, disambiguating name
/// collisions with an ascending counter before the extension.
fn link_source(src_dir: &Path, source: &Path) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .with_context(|| format!("source has no file name: {}", source.display()))?;

    let mut target = src_dir.join(file_name);
    let mut counter = 2;
    while target.symlink_metadata().is_ok() {
        target = src_dir.join(numbered_name(source, counter));
        counter += 1;
    }

    symlink(source, &target).with_context(|| {
        format!(
            "failed to link {} as {}",
            source.display(),
            target.display()
        )
    })?;
    Ok(target)
}

/// `Foo.kt` becomes `Foo2.kt` for counter 2; extensionless names get the
/// counter appended.
fn numbered_name(source: &Path, counter: u32) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match source.extension() {
        Some(ext) => format!("{}{}.{}", stem, counter, ext.to_string_lossy()),
        None => format!("{}{}", stem, counter),
    }
}
