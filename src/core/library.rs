//! External library references.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A named pointer to an external artifact set: a classes jar plus optional
/// sources and javadoc jars.
///
/// Libraries are immutable values created by the host tool and consumed only
/// for serialization into the generated project; nothing here touches the
/// filesystem or verifies the artifacts exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Display name, e.g. a Maven coordinate like `org.example:widget:1.2`.
    pub name: String,

    /// The compiled classes artifact.
    pub classes: PathBuf,

    /// Sources artifact, if available.
    #[serde(default)]
    pub sources: Option<PathBuf>,

    /// Javadoc artifact, if available.
    #[serde(default)]
    pub javadoc: Option<PathBuf>,
}

impl Library {
    /// Create a library reference with just a classes artifact.
    pub fn new(name: impl Into<String>, classes: impl Into<PathBuf>) -> Self {
        Library {
            name: name.into(),
            classes: classes.into(),
            sources: None,
            javadoc: None,
        }
    }

    /// Attach a sources artifact.
    pub fn with_sources(mut self, sources: impl Into<PathBuf>) -> Self {
        self.sources = Some(sources.into());
        self
    }

    /// Attach a javadoc artifact.
    pub fn with_javadoc(mut self, javadoc: impl Into<PathBuf>) -> Self {
        self.javadoc = Some(javadoc.into());
        self
    }

    /// The display name reduced to characters safe in a file name.
    ///
    /// ASCII alphanumerics, `.`, `-` and `_` pass through; everything else
    /// (coordinate colons, path separators, spaces) becomes `_`. This name
    /// identifies the library both in its reference file under
    /// `.idea/libraries/` and in the module's order entries.
    pub fn file_safe_name(&self) -> String {
        self.name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}
