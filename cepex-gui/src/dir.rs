use std::path::{Path, PathBuf};

/// Directory holding the log file, the optional configuration file and the outbox.
#[derive(Clone, Debug, PartialEq)]
pub struct CepexDirectory(PathBuf);

impl CepexDirectory {
    pub fn new(p: PathBuf) -> Self {
        CepexDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(CepexDirectory::new)
    }
}

impl CepexDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
}

// Get the absolute path to the cepex data folder.
///
/// This a "Cepex" directory in the XDG standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.cepex`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".cepex");

        #[cfg(not(target_os = "linux"))]
        path.push("Cepex");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(datadir_path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700).recursive(true).create(datadir_path)?;
        Ok(())
    };

    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(datadir_path)?;
        Ok(())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = CepexDirectory::new(tmp.path().join("a").join("b"));
        assert!(!dir.exists());
        dir.init().unwrap();
        assert!(dir.exists());
        // Initializing twice is fine.
        dir.init().unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(dir.path()).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o700);
        }
    }
}
