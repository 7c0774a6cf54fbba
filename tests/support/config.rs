use std::fs;
use std::path::{Path, PathBuf};

/// Render a config with one `[[services]]` entry per `(name, path)`.
pub fn config_toml<P: AsRef<Path>>(instance: &str, services: &[(&str, P)]) -> String {
    let mut toml = format!("[hypervisor]\nlima_instance = \"{instance}\"\n");
    for (name, path) in services {
        toml.push_str(&format!(
            "\n[[services]]\nname = \"{name}\"\npath = \"{}\"\n",
            path.as_ref().display()
        ));
    }
    toml
}

/// Write `contents` to `launchd-docker.toml` inside `dir`.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("launchd-docker.toml");
    fs::write(&path, contents).expect("write config");
    path
}
