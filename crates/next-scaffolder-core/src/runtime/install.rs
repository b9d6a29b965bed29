//! Dependency installation through the package manager

use crate::templates::PackageManager;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;
use tracing::info;

/// Upper bound for a full dependency install
const INSTALL_TIMEOUT: Duration = Duration::from_secs(600);

/// Run `<pm> install` in `root`, streaming its output
pub async fn install_dependencies(root: &Path, package_manager: PackageManager) -> Result<()> {
    let (program, args) = package_manager.install_args();
    let cmd = package_manager.install_command();
    info!(root = %root.display(), %cmd, "installing dependencies");

    println!();
    println!("{} {}", "Running:".dimmed(), cmd.yellow());
    println!();

    let mut child = TokioCommand::new(program)
        .args(args)
        .current_dir(root)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to run {}. Is {} installed?", cmd, program))?;

    let stdout = child
        .stdout
        .take()
        .context("Failed to capture installer stdout")?;
    let stderr = child
        .stderr
        .take()
        .context("Failed to capture installer stderr")?;

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();

    let output_task = async {
        let mut stdout_done = false;
        let mut stderr_done = false;
        while !(stdout_done && stderr_done) {
            tokio::select! {
                line = stdout_reader.next_line(), if !stdout_done => match line {
                    Ok(Some(line)) => println!("  {}", line),
                    Ok(None) => stdout_done = true,
                    Err(e) => {
                        eprintln!("{} {}", "Error reading stdout:".red(), e);
                        stdout_done = true;
                    }
                },
                line = stderr_reader.next_line(), if !stderr_done => match line {
                    Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                    Ok(None) => stderr_done = true,
                    Err(e) => {
                        eprintln!("{} {}", "Error reading stderr:".red(), e);
                        stderr_done = true;
                    }
                },
            }
        }
    };

    if timeout(INSTALL_TIMEOUT, output_task).await.is_err() {
        let _ = child.kill().await;
        anyhow::bail!(
            "Installing dependencies timed out after {} seconds.\n\
             Run `{}` in {} to finish manually.",
            INSTALL_TIMEOUT.as_secs(),
            cmd,
            root.display()
        );
    }

    let status = child
        .wait()
        .await
        .with_context(|| format!("Failed to wait for {}", cmd))?;
    println!();

    if !status.success() {
        anyhow::bail!(
            "{} failed with exit code: {}\n\
             Run it again in {} once the problem is fixed.",
            cmd,
            status.code().unwrap_or(-1),
            root.display()
        );
    }
    Ok(())
}
