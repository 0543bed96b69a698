// SPDX-License-Identifier: Apache-2.0

//! Shell completion generation and installation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use console::style;
use tracing::debug;

use crate::cli::Cli;

/// Where a shell's completion script goes and how to enable it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct InstallTarget {
    path: PathBuf,
    instructions: &'static str,
    reload: &'static str,
}

/// Resolves the install target for `shell` under `home`.
fn install_target(shell: Shell, home: &Path) -> Result<InstallTarget> {
    let target = match shell {
        Shell::Bash => InstallTarget {
            path: home.join(".bash_completion.d/defintel"),
            instructions: "Add to ~/.bashrc or ~/.bash_profile:\n  source ~/.bash_completion.d/defintel",
            reload: "source ~/.bashrc",
        },
        Shell::Zsh => InstallTarget {
            path: home.join(".zsh/completions/_defintel"),
            instructions: "Add to ~/.zshrc (before compinit):\n  fpath=(~/.zsh/completions $fpath)\n  autoload -U compinit && compinit -i",
            reload: "exec zsh",
        },
        Shell::Fish => InstallTarget {
            path: home.join(".config/fish/completions/defintel.fish"),
            instructions: "Completions are loaded from ~/.config/fish/completions/ automatically.",
            reload: "exec fish",
        },
        Shell::Elvish => InstallTarget {
            path: home.join(".local/share/elvish/lib/defintel.elv"),
            instructions: "Add to ~/.config/elvish/rc.elv:\n  use defintel",
            reload: "exec elvish",
        },
        other => bail!(
            "Cannot install completions for {other}. Use `defintel completion generate {other}` instead."
        ),
    };
    Ok(target)
}

/// Maps the basename of `$SHELL` to a supported shell.
fn shell_from_path(shell_path: &str) -> Result<Shell> {
    let name = Path::new(shell_path)
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("Could not parse shell name from $SHELL"))?;

    match name {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "elvish" => Ok(Shell::Elvish),
        _ => Err(anyhow!(
            "Unsupported shell: {name}. Pass --shell (bash, zsh, fish, elvish)."
        )),
    }
}

fn script(shell: Shell) -> Vec<u8> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, name, &mut buf);
    buf
}

/// Writes the completion script for `shell` to stdout.
pub fn run_generate(shell: Shell) -> Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(&script(shell))?;
    stdout.flush()?;
    Ok(())
}

/// Installs the completion script to the shell's standard location.
///
/// The shell is taken from `--shell` or detected from `$SHELL`.
pub fn run_install(shell: Option<Shell>, dry_run: bool) -> Result<()> {
    let shell = match shell {
        Some(s) => s,
        None => {
            let path = std::env::var("SHELL")
                .context("$SHELL is not set. Use --shell to specify.")?;
            shell_from_path(&path)?
        }
    };
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    let target = install_target(shell, &home)?;

    if dry_run {
        println!("{}", style("DRY RUN - No files will be modified").yellow().bold());
        println!();
        println!("{}", style(format!("Shell: {shell}")).cyan());
        println!(
            "{}",
            style(format!("Completion path: {}", target.path.display())).cyan()
        );
        println!();
        println!("{}", style("Configuration instructions:").bold());
        println!("{}", target.instructions);
        return Ok(());
    }

    if let Some(parent) = target.path.parent() {
        debug!(dir = %parent.display(), "Creating completion directory");
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&target.path, script(shell))
        .with_context(|| format!("Failed to write {}", target.path.display()))?;

    println!();
    println!("{}", style("Completion script installed.").green().bold());
    println!(
        "  {}",
        style(format!("Location: {}", target.path.display())).cyan()
    );
    println!();
    println!("{}", style("Configuration instructions:").bold());
    println!("{}", target.instructions);
    println!();
    println!(
        "{} {}",
        style("Then restart your terminal or run:").dim(),
        target.reload
    );
    Ok(())
}
