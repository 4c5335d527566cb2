
use crate::config::{
    self, CatalogKind, ConfigError, DumperConfig, GameProfile, ARCHIVE_DIR, COMPILER, OUTPUT_DIR,
};
use crate::decompiler::OutputMode;
use crate::menu::{KeySource, Menu};
use crate::pipeline::RunReport;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub const TITLE: &str = "P3R Batch Text Dumper";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    SetCompilerPath,
    SetArchivePath,
    SetOutputPath,
    SetLanguage,
    StartExtraction,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::SetCompilerPath,
        MenuItem::SetArchivePath,
        MenuItem::SetOutputPath,
        MenuItem::SetLanguage,
        MenuItem::StartExtraction,
        MenuItem::Exit,
    ];

    pub fn label(&self) -> &str {
        match self {
            MenuItem::SetCompilerPath => "Set AtlusScriptCompiler path",
            MenuItem::SetArchivePath => "Set Paks folder path",
            MenuItem::SetOutputPath => "Set output folder path",
            MenuItem::SetLanguage => "Set language code",
            MenuItem::StartExtraction => "Start extraction",
            MenuItem::Exit => "Exit",
        }
    }

    /// Item for a 1-based menu selection
    pub fn from_selection(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Values collected so far in the interactive session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub compiler_path: Option<PathBuf>,
    pub archive_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    /// Normalized language code, `None` for the default language
    pub language: Option<String>,
}

/// Settings that apply to every run started from the menu
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub profile: GameProfile,
    pub catalog_kind: CatalogKind,
    pub launcher: Option<PathBuf>,
    pub initial: SessionState,
}

/// Interactive menu loop.
///
/// Keys drive the menu, `input` answers the line prompts, and `runner`
/// performs the extraction once all paths are valid.
pub struct Session<K, R, W, F> {
    keys: K,
    input: R,
    out: W,
    options: SessionOptions,
    state: SessionState,
    runner: F,
}

impl<K, R, W, F> Session<K, R, W, F>
where
    K: KeySource,
    R: BufRead,
    W: Write,
    F: FnMut(&DumperConfig) -> anyhow::Result<RunReport>,
{
    pub fn new(keys: K, input: R, out: W, options: SessionOptions, runner: F) -> Self {
        let state = options.initial.clone();
        Self {
            keys,
            input,
            out,
            options,
            state,
            runner,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Show the menu until the user exits
    pub fn run(&mut self) -> io::Result<()> {
        let mut cursor = 0;

        loop {
            let mut menu = Menu::new(TITLE, self.labels()).with_selected(cursor);
            let choice = menu.run(&mut self.keys, &mut self.out)?;
            cursor = menu.selected();

            let item = choice
                .and_then(MenuItem::from_selection)
                .unwrap_or(MenuItem::Exit);

            match item {
                MenuItem::SetCompilerPath => {
                    let path = self.prompt_path(
                        "Enter the full path to AtlusScriptCompiler.exe: ",
                        |p| config::validate_file(COMPILER, p),
                    )?;
                    self.state.compiler_path = Some(path);
                    self.notify("Compiler path set successfully!")?;
                }
                MenuItem::SetArchivePath => {
                    let path = self.prompt_path(
                        "Enter the full folder path to the P3R Paks folder: ",
                        |p| config::validate_dir(ARCHIVE_DIR, p),
                    )?;
                    self.state.archive_dir = Some(path);
                    self.notify("Paks folder path set successfully!")?;
                }
                MenuItem::SetOutputPath => {
                    let path = self.prompt_path(
                        "Enter the full folder path to the output folder: ",
                        |p| config::validate_dir(OUTPUT_DIR, p),
                    )?;
                    self.state.output_dir = Some(path);
                    self.notify("Output folder path set successfully!")?;
                }
                MenuItem::SetLanguage => {
                    let prompt = format!(
                        "Enter language code (leave blank for {}): ",
                        self.options.profile.default_include_marker
                    );
                    let code = self.read_line(&prompt)?;
                    self.state.language = config::normalize_language(Some(&code));

                    let message = match &self.state.language {
                        Some(code) => format!("Language set to: {}", code),
                        None => format!(
                            "Language set to default ({})",
                            self.options.profile.default_include_marker
                        ),
                    };
                    self.notify(&message)?;
                }
                MenuItem::StartExtraction => self.start_extraction()?,
                MenuItem::Exit => return Ok(()),
            }
        }
    }

    fn labels(&self) -> Vec<String> {
        let show = |path: &Option<PathBuf>| match path {
            Some(p) => p.display().to_string(),
            None => "not set".to_string(),
        };

        MenuItem::ALL
            .iter()
            .map(|item| match item {
                MenuItem::SetCompilerPath => {
                    format!("{} [{}]", item.label(), show(&self.state.compiler_path))
                }
                MenuItem::SetArchivePath => {
                    format!("{} [{}]", item.label(), show(&self.state.archive_dir))
                }
                MenuItem::SetOutputPath => {
                    format!("{} [{}]", item.label(), show(&self.state.output_dir))
                }
                MenuItem::SetLanguage => format!(
                    "{} [{}]",
                    item.label(),
                    self.state.language.as_deref().unwrap_or("default")
                ),
                _ => item.label().to_string(),
            })
            .collect()
    }

    fn start_extraction(&mut self) -> io::Result<()> {
        let config = match self.build_config() {
            Ok(config) => config,
            Err(e) => {
                let message = format!(
                    "Please set valid compiler, Paks and output paths first ({}).",
                    e
                );
                return self.notify(&message);
            }
        };

        writeln!(self.out, "Starting extraction process...")?;
        self.out.flush()?;

        let message = match (self.runner)(&config) {
            Ok(report) => format!(
                "Extraction completed! {} of {} files dumped to {}",
                report.summary.collected,
                report.matched,
                report.dump_path.display()
            ),
            Err(e) => format!("Error during extraction: {:#}", e),
        };
        self.notify(&message)
    }

    fn build_config(&self) -> Result<DumperConfig, ConfigError> {
        let required = |path: &Option<PathBuf>, what| {
            path.clone().ok_or(ConfigError::EmptyPath { what })
        };

        let config = DumperConfig::new(
            required(&self.state.compiler_path, COMPILER)?,
            required(&self.state.archive_dir, ARCHIVE_DIR)?,
            required(&self.state.output_dir, OUTPUT_DIR)?,
        )?;

        let config = config
            .language(self.state.language.as_deref())
            .catalog_kind(self.options.catalog_kind)
            .output_mode(OutputMode::Capture)
            .launcher(self.options.launcher.clone())
            .profile(self.options.profile.clone());
        config.check_output_location()?;
        Ok(config)
    }

    /// Ask until `validate` accepts the answer
    fn prompt_path<V>(&mut self, prompt: &str, validate: V) -> io::Result<PathBuf>
    where
        V: Fn(&Path) -> Result<(), ConfigError>,
    {
        loop {
            let path = PathBuf::from(self.read_line(prompt)?);
            match validate(&path) {
                Ok(()) => return Ok(path),
                Err(e) => writeln!(self.out, "Invalid path ({}). Please try again.", e)?,
            }
        }
    }

    /// One trimmed line of input. Surrounding quotes from pasted paths are
    /// dropped.
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line.trim().trim_matches('"').to_string())
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)?;
        writeln!(self.out, "Press any key to continue...")?;
        self.out.flush()?;
        self.keys.next_key()?;
        Ok(())
    }
}
