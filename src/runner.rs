use std::env;

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;

use crate::cli::{Cli, Command};
use crate::scaffold;

pub fn run(cli: Cli) -> Result<()> {
    if let Some(dir) = &cli.chdir {
        env::set_current_dir(dir)
            .with_context(|| format!("changing directory to {}", dir.display()))?;
    }

    match cli.command {
        None => scaffold::create(&current_working_dir()?, cli.dry_run),
        Some(Command::Plan) => {
            scaffold::plan();
            Ok(())
        }
        Some(Command::Check) => scaffold::check(&current_working_dir()?),
    }
}

fn current_working_dir() -> Result<Utf8PathBuf> {
    let cwd = env::current_dir().context("determining current directory")?;
    Utf8PathBuf::from_path_buf(cwd).map_err(|_| anyhow!("current directory is not valid UTF-8"))
}
