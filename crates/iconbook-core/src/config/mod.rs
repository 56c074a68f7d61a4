use std::path::{Path, PathBuf};

mod env;

pub const ENV_ICONS_DIR: &str = "ICONBOOK_ICONS_DIR";
pub const ENV_FONTS_DIR: &str = "ICONBOOK_FONTS_DIR";
pub const ENV_TAGS_FILE: &str = "ICONBOOK_TAGS_FILE";
pub const ENV_MAPPING_FILE: &str = "ICONBOOK_MAPPING_FILE";
pub const ENV_OUTPUT_FILE: &str = "ICONBOOK_OUTPUT_FILE";

const DEFAULT_ICONS_DIR: &str = "source/icons";
const DEFAULT_FONTS_DIR: &str = "source/fonts";
const DEFAULT_TAGS_FILE: &str = "source/tags.json";
const DEFAULT_MAPPING_FILE: &str = "source/mapping.json";
const DEFAULT_OUTPUT_FILE: &str = "src/generated/icons.json";

/// Input and output locations for one data-preparation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareConfig {
    pub icons_dir: PathBuf,
    pub fonts_dir: PathBuf,
    pub tags_file: PathBuf,
    pub mapping_file: PathBuf,
    pub output_file: PathBuf,
}

impl PrepareConfig {
    /// Conventional project layout under `root`.
    #[must_use]
    pub fn for_root(root: &Path) -> Self {
        Self {
            icons_dir: root.join(DEFAULT_ICONS_DIR),
            fonts_dir: root.join(DEFAULT_FONTS_DIR),
            tags_file: root.join(DEFAULT_TAGS_FILE),
            mapping_file: root.join(DEFAULT_MAPPING_FILE),
            output_file: root.join(DEFAULT_OUTPUT_FILE),
        }
    }

    /// Layout under `root`, with any `ICONBOOK_*` path variables applied.
    #[must_use]
    pub fn from_env(root: &Path) -> Self {
        let mut config = Self::for_root(root);
        config.apply_overrides(PathOverrides {
            icons_dir: env::read_env_path(ENV_ICONS_DIR),
            fonts_dir: env::read_env_path(ENV_FONTS_DIR),
            tags_file: env::read_env_path(ENV_TAGS_FILE),
            mapping_file: env::read_env_path(ENV_MAPPING_FILE),
            output_file: env::read_env_path(ENV_OUTPUT_FILE),
        });
        config
    }

    pub fn apply_overrides(&mut self, overrides: PathOverrides) {
        let PathOverrides {
            icons_dir,
            fonts_dir,
            tags_file,
            mapping_file,
            output_file,
        } = overrides;
        if let Some(path) = icons_dir {
            self.icons_dir = path;
        }
        if let Some(path) = fonts_dir {
            self.fonts_dir = path;
        }
        if let Some(path) = tags_file {
            self.tags_file = path;
        }
        if let Some(path) = mapping_file {
            self.mapping_file = path;
        }
        if let Some(path) = output_file {
            self.output_file = path;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathOverrides {
    pub icons_dir: Option<PathBuf>,
    pub fonts_dir: Option<PathBuf>,
    pub tags_file: Option<PathBuf>,
    pub mapping_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
}
