use std::path::{PathBuf, MAIN_SEPARATOR};

use crate::config::OutputConfig;
use crate::descriptor::ClassDescriptor;

/// Maps a class to `<base>/<root>/<package dirs>/<SimpleName>Test.<ext>`.
#[derive(Debug, Clone)]
pub struct OutputPathResolver {
    base_path: String,
    output_root: String,
    extension: String,
}

impl OutputPathResolver {
    pub fn new(
        base_path: impl Into<String>,
        output_root: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            output_root: output_root.into(),
            extension: extension.into(),
        }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self::new(&output.base_path, &output.root, &output.extension)
    }

    /// Segments are joined textually so an absolute `output_root` still lands under the base.
    pub fn resolve(&self, class: &ClassDescriptor) -> PathBuf {
        let test_file = format!(
            "{}Test.{}",
            class.canonical_name.replace('.', &MAIN_SEPARATOR.to_string()),
            self.extension
        );
        PathBuf::from(format!(
            "{}{}{}{}{}",
            self.base_path, MAIN_SEPARATOR, self.output_root, MAIN_SEPARATOR, test_file
        ))
    }
}
