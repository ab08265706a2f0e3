use std::io;
use std::path::PathBuf;

/// Errors raised by the filesystem gateway, scaffolder and registry.
///
/// None of these ever leave a menu action: the state layer turns them into a
/// status line and logs the full `Display` form.
#[derive(Debug, thiserror::Error)]
pub enum IdeError {
    #[error("storage volume unavailable at {}", .0.display())]
    StorageUnavailable(PathBuf),

    #[error("cannot access directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IdeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_error_names_path() {
        let e = IdeError::Directory {
            path: PathBuf::from("/3ds/replit3ds_projects"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = format!("{e}");
        assert!(msg.contains("/3ds/replit3ds_projects"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn config_error_display() {
        let e = IdeError::Config("bad json".into());
        assert_eq!(format!("{e}"), "config error: bad json");
    }

    #[test]
    fn file_read_keeps_source() {
        use std::error::Error;
        let e = IdeError::FileRead {
            path: PathBuf::from("main.cpp"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(e.source().is_some());
    }
}
