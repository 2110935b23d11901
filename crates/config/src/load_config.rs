// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use path_clean::clean;

pub type FindInParent = fn(&PathBuf, &str) -> Option<PathBuf>;

pub fn find_in_parent(path: &PathBuf, filename: &str) -> Option<PathBuf> {
    let mut current = PathBuf::from(path);

    loop {
        let file_path = current.join(filename);
        if file_path.exists() {
            return Some(file_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Where the configuration file was resolved from
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigSource {
    /// Passed explicitly on the command line, must exist
    Cli(PathBuf),
    /// Found by searching upward from the working directory
    Found(PathBuf),
    /// Default location, may not exist
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigSource::Cli(path) | ConfigSource::Found(path) | ConfigSource::Default(path) => {
                path
            }
        }
    }
}

pub fn resolve_config_path<P: Into<PathBuf>>(
    find_in_parent: FindInParent,
    cwd: P,
    default_config_dir: P,
    default_filename: &str,
    cli_file: Option<P>,
) -> ConfigSource {
    let cli_file: Option<PathBuf> = cli_file.map(Into::into);
    let default_config_dir = default_config_dir.into();
    let cwd = cwd.into();

    if let Some(cli_file) = cli_file {
        let cli_file = PathBuf::from(shellexpand::tilde(&cli_file.to_string_lossy()).into_owned());

        // config is passed in and is absolute
        if cli_file.is_absolute() {
            return ConfigSource::Cli(cli_file);
        }

        // config is passed in and is relative
        return ConfigSource::Cli(clean(cwd.join(cli_file)));
    }

    // search from cwd
    if let Some(found) = find_in_parent(&cwd, default_filename) {
        return ConfigSource::Found(found);
    }

    // return default
    ConfigSource::Default(clean(default_config_dir.join(default_filename)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::path::PathBuf;

    fn not_found(_: &PathBuf, _: &str) -> Option<PathBuf> {
        None
    }

    fn found(_: &PathBuf, _: &str) -> Option<PathBuf> {
        Some(PathBuf::from("/foo/polyrpc.config.yaml"))
    }

    #[test]
    fn test_resolve_cli() -> Result<()> {
        let path = resolve_config_path(
            not_found,
            PathBuf::from("/foo/bar"),
            PathBuf::from("/my/config"),
            "polyrpc.config.yaml",
            None,
        );

        assert_eq!(
            path,
            ConfigSource::Default(PathBuf::from("/my/config/polyrpc.config.yaml"))
        );

        let path = resolve_config_path(
            found, // should be overridden by config attr
            PathBuf::from("/foo/bar"),
            PathBuf::from("/my/config"),
            "polyrpc.config.yaml",
            Some(PathBuf::from("/my/absolute/conf.yaml")),
        );

        assert_eq!(
            path,
            ConfigSource::Cli(PathBuf::from("/my/absolute/conf.yaml"))
        );

        let path = resolve_config_path(
            found,
            PathBuf::from("/foo/bar"),
            PathBuf::from("/my/config"),
            "polyrpc.config.yaml",
            Some(PathBuf::from("../conf.yaml")),
        );

        assert_eq!(path, ConfigSource::Cli(PathBuf::from("/foo/conf.yaml")));

        let path = resolve_config_path(
            found,
            PathBuf::from("/foo/bar"),
            PathBuf::from("/my/config"),
            "polyrpc.config.yaml",
            None,
        );

        assert_eq!(
            path,
            ConfigSource::Found(PathBuf::from("/foo/polyrpc.config.yaml"))
        );
        assert_eq!(path.path(), &PathBuf::from("/foo/polyrpc.config.yaml"));
        Ok(())
    }

    #[test]
    fn test_find_in_parent() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested)?;
        std::fs::write(dir.path().join("polyrpc.config.yaml"), "")?;

        let found = find_in_parent(&nested, "polyrpc.config.yaml");
        assert_eq!(found, Some(dir.path().join("polyrpc.config.yaml")));
        assert_eq!(find_in_parent(&nested, "missing.yaml"), None);
        Ok(())
    }
}
