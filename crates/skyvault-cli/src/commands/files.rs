//! File commands - List, Upload, Download, and Delete
//!
//! Each command wires the core use cases over the HTTP provider and renders
//! their typed results. The upload command runs the two-phase coordinator;
//! the delete command gates on a confirmation prompt before invoking the
//! use case.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use skyvault_core::domain::{FileName, FileRegistry, PendingUpload};
use skyvault_core::usecases::{FileOperations, UploadCoordinator, UploadOutcome};

use crate::commands::{build_context, AppContext};
use crate::output::{get_formatter, OutputFormat, OutputFormatter};

// ============================================================================
// List
// ============================================================================

#[derive(Debug, Args)]
pub struct ListCommand {}

impl ListCommand {
    pub async fn execute(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        let fmt = get_formatter(format);
        let ctx = build_context(config_path)?;

        let ops = FileOperations::new(ctx.provider.clone(), ctx.sessions.clone());
        let mut registry = FileRegistry::new();
        ops.refresh(&mut registry).await?;

        if format == OutputFormat::Json {
            let names: Vec<&str> = registry.files().iter().map(|f| f.as_str()).collect();
            fmt.print_json(&serde_json::json!({ "files": names }));
        } else if registry.is_empty() {
            fmt.info("No files stored");
        } else {
            for file in registry.files() {
                println!("{}", file);
            }
        }
        Ok(())
    }
}

// ============================================================================
// Upload
// ============================================================================

#[derive(Debug, Args)]
pub struct UploadCommand {
    /// Local file to upload
    path: PathBuf,

    /// Store under this name instead of the local file name
    #[arg(long)]
    name: Option<String>,
}

impl UploadCommand {
    pub async fn execute(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        let fmt = get_formatter(format);
        let ctx = build_context(config_path)?;

        let pending = self.read_pending().await?;
        let coordinator = UploadCoordinator::new(ctx.provider.clone(), ctx.sessions.clone());
        let mut registry = FileRegistry::new();

        fmt.info(&format!("Uploading {}...", pending.name()));
        let outcome = coordinator.upload(pending, &mut registry).await?;

        match outcome {
            UploadOutcome::Uploaded {
                message,
                refresh_error,
            } => {
                fmt.success(&message);
                if let Some(err) = refresh_error {
                    fmt.warn(&format!("Could not refresh file list: {}", err));
                }
            }
            UploadOutcome::DuplicateName { name } => {
                fmt.warn(&format!("A file named '{}' already exists.", name));
            }
        }
        Ok(())
    }

    /// Reads the local file into a pending upload under its declared name
    async fn read_pending(&self) -> Result<PendingUpload> {
        let declared = match &self.name {
            Some(name) => FileName::new(name.as_str())?,
            None => {
                let base = self
                    .path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .with_context(|| {
                        format!("Cannot derive a file name from {}", self.path.display())
                    })?;
                FileName::new(base)?
            }
        };

        let data = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        Ok(PendingUpload::new(declared, data))
    }
}

// ============================================================================
// Download
// ============================================================================

#[derive(Debug, Args)]
pub struct DownloadCommand {
    /// Name of the stored file
    name: String,

    /// Write to this path instead of the remote name
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl DownloadCommand {
    pub async fn execute(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        let fmt = get_formatter(format);
        let ctx = build_context(config_path)?;

        let name = FileName::new(self.name.as_str())?;
        let ops = FileOperations::new(ctx.provider.clone(), ctx.sessions.clone());

        let file = ops.download(&name).await?;

        let dest = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(file.name().as_str()));
        let size = file.bytes().len();

        tokio::fs::write(&dest, file.into_bytes())
            .await
            .with_context(|| format!("Failed to write {}", dest.display()))?;

        fmt.success(&format!("Saved {} ({} bytes)", dest.display(), size));
        Ok(())
    }
}

// ============================================================================
// Delete
// ============================================================================

#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Name of the stored file
    name: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

impl DeleteCommand {
    pub async fn execute(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        let fmt = get_formatter(format);
        let ctx = build_context(config_path)?;

        let name = FileName::new(self.name.as_str())?;

        if !self.yes && !confirm(&format!("Delete '{}'? [y/N] ", name))? {
            fmt.info("Aborted");
            return Ok(());
        }

        self.run_delete(&ctx, &*fmt, &name).await
    }

    async fn run_delete(
        &self,
        ctx: &AppContext,
        fmt: &dyn OutputFormatter,
        name: &FileName,
    ) -> Result<()> {
        let ops = FileOperations::new(ctx.provider.clone(), ctx.sessions.clone());
        let mut registry = FileRegistry::new();

        let outcome = ops.delete(name, &mut registry).await?;

        fmt.success(&outcome.message);
        match outcome.refresh_error {
            Some(err) => fmt.warn(&format!("Could not refresh file list: {}", err)),
            None => fmt.info(&format!("{} file(s) remaining", registry.len())),
        }
        Ok(())
    }
}

/// Asks the user for a yes/no confirmation on stdin
fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
