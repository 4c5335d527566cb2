use super::{Decompile, DecompileError, OutputMode};
use crate::config::DecompilerFlags;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, warn};

/// AtlusScriptCompiler (or a compatible tool) run as a child process.
///
/// Arguments are passed as a vector, never through a shell.
#[derive(Debug, Clone)]
pub struct ExternalDecompiler {
    compiler: PathBuf,
    launcher: Option<PathBuf>,
    flags: DecompilerFlags,
    mode: OutputMode,
}

impl ExternalDecompiler {
    pub fn new(compiler: impl Into<PathBuf>, flags: DecompilerFlags) -> Self {
        Self {
            compiler: compiler.into(),
            launcher: None,
            flags,
            mode: OutputMode::default(),
        }
    }

    /// Run the compiler through another program, e.g. `wine` or `dotnet`
    pub fn launcher(mut self, launcher: Option<PathBuf>) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Program that is actually spawned
    pub fn program(&self) -> &Path {
        self.launcher.as_deref().unwrap_or(self.compiler.as_path())
    }

    /// Full argument vector for decompiling `input`
    pub fn arguments(&self, input: &Path) -> Vec<OsString> {
        let mut args = Vec::with_capacity(11);
        if self.launcher.is_some() {
            args.push(self.compiler.clone().into_os_string());
        }
        args.push(input.as_os_str().to_os_string());
        args.push("-Decompile".into());
        args.push("-InFormat".into());
        args.push(self.flags.in_format.clone().into());
        args.push("-Library".into());
        args.push(self.flags.library.clone().into());
        args.push("-Encoding".into());
        args.push(self.flags.encoding.clone().into());
        args.push("-OutFormat".into());
        args.push(self.flags.out_format.clone().into());
        args
    }

    fn command(&self, input: &Path) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.arguments(input)).stdin(Stdio::null());
        command
    }

    fn spawn_error(&self, source: std::io::Error) -> DecompileError {
        DecompileError::Spawn {
            program: self.program().to_path_buf(),
            source,
        }
    }
}

impl Decompile for ExternalDecompiler {
    fn decompile(&self, input: &Path) -> Result<(), DecompileError> {
        debug!("Decompiling {}", input.display());
        let mut command = self.command(input);

        let status = match self.mode {
            OutputMode::Inherit => command.status().map_err(|e| self.spawn_error(e))?,
            OutputMode::Capture => {
                let output = command
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()
                    .map_err(|e| self.spawn_error(e))?;

                let stdout = String::from_utf8_lossy(&output.stdout);
                if !stdout.trim().is_empty() {
                    println!("{}", stdout.trim_end());
                }

                let stderr = String::from_utf8_lossy(&output.stderr);
                if !stderr.trim().is_empty() {
                    warn!("Compiler error output:\n{}", stderr.trim_end());
                }

                output.status
            }
        };

        log_status(input, status);
        Ok(())
    }
}

fn log_status(input: &Path, status: ExitStatus) {
    if !status.success() {
        warn!(
            "Compiler exited with code {:?} for {}",
            status.code(),
            input.display()
        );
    }
}
