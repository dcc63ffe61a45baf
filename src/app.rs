use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::config::{Config, PROJECT_CONFIG_FILE};
use crate::error::Result;
use crate::lint::StyleValidator;

pub struct AppContext {
    /// Directory searched for the project config file
    pub project_root: PathBuf,
    pub config: Config,
    pub validator: StyleValidator,
    pub robot_mode: bool,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let project_root = Self::find_project_root()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;

        Ok(Self {
            project_root,
            config,
            validator: StyleValidator::new(),
            robot_mode: cli.robot,
            output_format: cli.output_format(),
            verbosity: cli.verbose,
        })
    }

    /// Nearest ancestor of the working directory holding a project config,
    /// or the working directory itself.
    fn find_project_root() -> Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(find_upwards(&cwd, PROJECT_CONFIG_FILE).unwrap_or(cwd))
    }
}

fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join(name).is_file() {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::UnitTestFixture;

    #[test]
    fn test_find_upwards_locates_config_in_ancestor() {
        let fixture = UnitTestFixture::new();
        let _ = fixture.create_project_config("[rules]\n");
        let nested = fixture.data_path.join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_upwards(&nested, PROJECT_CONFIG_FILE).unwrap();
        assert_eq!(found, fixture.data_path);
    }

    #[test]
    fn test_find_upwards_without_config() {
        let fixture = UnitTestFixture::new();
        assert!(find_upwards(&fixture.data_path, "no-such-file.toml").is_none());
    }
}
