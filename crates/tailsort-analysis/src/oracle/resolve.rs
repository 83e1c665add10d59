//! Locating the class-order configuration file.

use std::path::{Path, PathBuf};

/// File names searched for when no explicit path is configured.
pub const CONVENTIONAL_CONFIG_FILES: &[&str] = &[
    "tailwind.config.js",
    "tailwind.config.cjs",
    "tailwind.config.mjs",
    "tailwind.config.ts",
    "tailwind.config.cts",
    "tailwind.config.mts",
];

/// Resolve the configuration path for a session rooted at `root`.
///
/// An explicit path (relative to `root` unless absolute) is used when it
/// exists and is never replaced by a discovered one. Without an explicit
/// path, the conventional names are searched in `root` and then each ancestor.
pub fn resolve_config_path(explicit: Option<&str>, root: &Path) -> Option<PathBuf> {
    if let Some(explicit) = explicit {
        let candidate = Path::new(explicit);
        let candidate = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            root.join(candidate)
        };
        return candidate.is_file().then_some(candidate);
    }

    root.ancestors().find_map(|dir| {
        CONVENTIONAL_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_relative_path() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("web")).unwrap();
        std::fs::write(dir.path().join("web/tw.config.js"), "module.exports = {}").unwrap();

        let found = resolve_config_path(Some("web/tw.config.js"), dir.path());
        assert_eq!(found, Some(dir.path().join("web/tw.config.js")));
    }

    #[test]
    fn test_missing_explicit_path_does_not_fall_back() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("tailwind.config.js"), "").unwrap();
        assert_eq!(resolve_config_path(Some("nope.js"), dir.path()), None);
    }

    #[test]
    fn test_discovers_in_ancestor() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("tailwind.config.ts"), "export default {}").unwrap();
        let nested = dir.path().join("packages/app");
        std::fs::create_dir_all(&nested).unwrap();

        let found = resolve_config_path(None, &nested);
        assert_eq!(found, Some(dir.path().join("tailwind.config.ts")));
    }

    #[test]
    fn test_nearest_wins() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("app");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("tailwind.config.js"), "").unwrap();
        std::fs::write(nested.join("tailwind.config.cjs"), "").unwrap();

        assert_eq!(
            resolve_config_path(None, &nested),
            Some(nested.join("tailwind.config.cjs"))
        );
    }
}
