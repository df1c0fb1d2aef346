use std::path::{Path, PathBuf};

/// Root every path in the program hangs off. `TABLET_APPS_ROOT` relocates
/// the whole tree, which is how the tests sandbox filesystem effects.
pub fn root_dir() -> PathBuf {
    if let Ok(dev_root) = std::env::var("TABLET_APPS_ROOT") {
        return PathBuf::from(dev_root);
    }
    PathBuf::from("/")
}

pub fn config_dir(root: &Path) -> PathBuf {
    root.join("etc").join("tablet-apps")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn root_dir_prefers_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let prior = std::env::var("TABLET_APPS_ROOT").ok();

        std::env::set_var("TABLET_APPS_ROOT", "/tmp/tablet-root");
        let root = root_dir();
        assert_eq!(root, PathBuf::from("/tmp/tablet-root"));

        if let Some(v) = prior {
            std::env::set_var("TABLET_APPS_ROOT", v);
        } else {
            std::env::remove_var("TABLET_APPS_ROOT");
        }
    }

    #[test]
    fn root_dir_defaults_to_fs_root() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let prior = std::env::var("TABLET_APPS_ROOT").ok();

        std::env::remove_var("TABLET_APPS_ROOT");
        assert_eq!(root_dir(), PathBuf::from("/"));

        if let Some(v) = prior {
            std::env::set_var("TABLET_APPS_ROOT", v);
        }
    }

    #[test]
    fn config_dir_is_etc_tablet_apps() {
        let root = PathBuf::from("/sandbox");
        assert_eq!(config_dir(&root), root.join("etc").join("tablet-apps"));
    }
}
