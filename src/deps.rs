use crate::error::Result;
use crate::storage::{self, Storage};
use crate::types::Dependency;
use std::path::PathBuf;

/// Record `dep` as wanted and regenerate the shared README.
///
/// Only the marker directory is load-bearing: a README that cannot be
/// written is logged and skipped.
pub fn mark_installed(storage: &Storage, dep: &str) -> Result<PathBuf> {
    let dir = storage.dependency_dir(dep);
    storage::ensure_dir(&dir)?;

    if let Err(e) = storage::write_file(&storage.deps_readme_path(), &readme_text()) {
        log::warn!("{}", e);
    }
    Ok(dir)
}

pub fn readme_text() -> String {
    let mut text = String::from(
        "Replit3DS Dependency Manager\n\
         ============================\n\n\
         Common 3DS dependencies:\n",
    );
    for dep in Dependency::ALL {
        text.push_str(&format!("- {}: {}\n", dep.name(), dep.summary()));
    }
    text.push_str("\nInstall via devkitPro pacman:\n  sudo dkp-pacman -S <package>\n");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn marker_and_readme_are_written() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        storage.init_layout();

        let marker = mark_installed(&storage, "citro3d").unwrap();
        assert!(marker.is_dir());
        assert!(marker.ends_with("3ds/replit3ds_deps/citro3d"));

        let readme = fs::read_to_string(storage.deps_readme_path()).unwrap();
        assert!(readme.contains("- libctru: Core 3DS library"));
        assert!(readme.ends_with("sudo dkp-pacman -S <package>\n"));
    }

    #[test]
    fn repeat_marking_is_fine() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        storage.init_layout();
        mark_installed(&storage, "sf2d").unwrap();
        mark_installed(&storage, "sf2d").unwrap();
    }

    #[test]
    fn blocked_readme_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        storage.init_layout();
        fs::create_dir(storage.deps_readme_path()).unwrap();
        assert!(mark_installed(&storage, "citro2d").is_ok());
    }

    #[test]
    fn missing_deps_root_fails() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        assert!(mark_installed(&storage, "libctru").is_err());
    }
}
