// File: ./src/context.rs
/*! Application context abstraction for filesystem paths.

`AppContext` decides where the configuration file lives. Two concrete
implementations are provided:

- `StandardContext`: uses `directories::ProjectDirs`, or an override root
  (taken from `QUICKICS_ROOT` when built with `from_env`).
- `TestContext`: a temporary directory for isolated tests, removed when
  dropped.
*/

use directories::ProjectDirs;
use std::path::PathBuf;

pub const ROOT_ENV_VAR: &str = "QUICKICS_ROOT";

pub trait AppContext: Send + Sync + std::fmt::Debug {
    /// `None` when no home directory can be determined.
    fn get_config_dir(&self) -> Option<PathBuf>;

    fn get_config_file_path(&self) -> Option<PathBuf> {
        self.get_config_dir().map(|p| p.join("config.toml"))
    }
}

// --- Production Implementation ---

#[derive(Clone, Debug)]
pub struct StandardContext {
    override_root: Option<PathBuf>,
}

impl StandardContext {
    /// When `override_root` is `Some(path)`, the config lives under `path/config`.
    pub fn new(override_root: Option<PathBuf>) -> Self {
        Self { override_root }
    }

    pub fn from_env() -> Self {
        let override_root = std::env::var_os(ROOT_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::new(override_root)
    }

    pub fn override_root(&self) -> Option<&PathBuf> {
        self.override_root.as_ref()
    }

    fn get_proj_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "quickics", "quickics")
    }
}

impl AppContext for StandardContext {
    fn get_config_dir(&self) -> Option<PathBuf> {
        if let Some(root) = &self.override_root {
            return Some(root.join("config"));
        }
        Self::get_proj_dirs().map(|proj| proj.config_dir().to_path_buf())
    }
}

// --- Test Implementation ---

#[derive(Clone, Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    /// Creates a new TestContext backed by a unique temporary directory.
    pub fn new() -> Self {
        let uuid = uuid::Uuid::new_v4();
        let root = std::env::temp_dir().join(format!("quickics_test_{}", uuid));
        // Tests will panic if this fails.
        std::fs::create_dir_all(root.join("config")).expect("failed to create TestContext temp dir");
        Self { root }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn get_config_dir(&self) -> Option<PathBuf> {
        Some(self.root.join("config"))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
