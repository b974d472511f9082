//! Printing through a viewing surface.
//!
//! The host is asked for a surface to show the PDF in. If it refuses (the
//! popup-blocked case) nothing else happens and the caller gets
//! [`SinkError::PopupBlocked`]. Otherwise the artifact is loaded into the
//! surface and printing is triggered once loading has finished.

use crate::error::SinkError;
use crate::generate::Artifact;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Somewhere a PDF can be shown and printed from
pub trait PrintSurface {
    fn load(&mut self, artifact: &Artifact) -> Result<(), SinkError>;
    fn print(&mut self) -> Result<(), SinkError>;
}

/// Opens print surfaces; `None` means the host refused to open one
pub trait PrintHost {
    type Surface: PrintSurface;

    fn open(&self) -> Option<Self::Surface>;
}

pub fn print<H: PrintHost>(host: &H, artifact: &Artifact) -> Result<(), SinkError> {
    let Some(mut surface) = host.open() else {
        log::warn!("print surface for {} was blocked", artifact.filename);
        return Err(SinkError::PopupBlocked);
    };

    surface.load(artifact)?;
    surface.print()?;
    log::info!("opened {} for printing", artifact.filename);
    Ok(())
}

/// The viewer the operating system opens PDFs with
pub fn default_command() -> Vec<String> {
    let command: &[&str] = if cfg!(target_os = "macos") {
        &["open"]
    } else if cfg!(target_os = "windows") {
        &["explorer"]
    } else {
        &["xdg-open"]
    };
    command.iter().map(|s| s.to_string()).collect()
}

/// Look a program up the way a shell would: as given if it contains a path
/// separator, otherwise in each `PATH` entry
fn resolve_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths).find_map(|dir| {
        let full = dir.join(program);
        if full.is_file() {
            return Some(full);
        }
        let exe = full.with_extension("exe");
        exe.is_file().then_some(exe)
    })
}

/// Opens the PDF with an external viewer command
#[derive(Clone, Debug)]
pub struct SystemPrintHost {
    command: Vec<String>,
}

impl SystemPrintHost {
    pub fn new(command: Vec<String>) -> SystemPrintHost {
        SystemPrintHost { command }
    }
}

impl Default for SystemPrintHost {
    fn default() -> Self {
        SystemPrintHost::new(default_command())
    }
}

impl PrintHost for SystemPrintHost {
    type Surface = CommandSurface;

    fn open(&self) -> Option<CommandSurface> {
        let (program, args) = self.command.split_first()?;
        let Some(program) = resolve_program(program) else {
            log::debug!("print command `{program}` was not found");
            return None;
        };
        Some(CommandSurface {
            program,
            args: args.to_vec(),
            file: None,
        })
    }
}

pub struct CommandSurface {
    program: PathBuf,
    args: Vec<String>,
    file: Option<PathBuf>,
}

impl PrintSurface for CommandSurface {
    fn load(&mut self, artifact: &Artifact) -> Result<(), SinkError> {
        let stem = artifact.filename.trim_end_matches(".pdf");
        let mut file = tempfile::Builder::new()
            .prefix(&format!("{stem}-"))
            .suffix(".pdf")
            .tempfile()
            .map_err(|e| SinkError::Print(format!("failed to create a temporary file: {e}")))?;
        file.write_all(&artifact.bytes)
            .map_err(|e| SinkError::Print(format!("failed to write the temporary file: {e}")))?;

        // the viewer outlives us, so the file has to stay behind
        let path = file
            .into_temp_path()
            .keep()
            .map_err(|e| SinkError::Print(format!("failed to keep the temporary file: {e}")))?;
        log::debug!("wrote print copy to {}", path.display());
        self.file = Some(path);
        Ok(())
    }

    fn print(&mut self) -> Result<(), SinkError> {
        let file = self
            .file
            .as_ref()
            .ok_or_else(|| SinkError::Print("nothing has been loaded".to_string()))?;
        let viewer = Command::new(&self.program)
            .args(&self.args)
            .arg(file)
            .spawn()
            .map_err(|e| SinkError::Print(format!("failed to run {}: {e}", self.program.display())))?;
        // the viewer is detached: it is never waited on, so a long-lived
        // caller keeps an unreaped child around until it exits
        log::debug!("{} running as pid {}", self.program.display(), viewer.id());
        Ok(())
    }
}
