pub mod options;
pub mod results;
pub mod runner;

use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
pub use results::{parse_xml, Host, HostHint, HostState, NmapRun, Port, PortProtocol, PortState};
pub use runner::{RunContext, RunOutcome};

/// Which output format the caller asked nmap for.
///
/// Only `Default` makes the runner request `-oX -` itself and decode stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Default,
    Normal,
    Xml,
    ScriptKiddie,
    Grepable,
    /// `-oA`, every format written under one basename
    All,
    /// The invocation produces no scan document (`--script-help`, `-V`, `-h`)
    None,
}

/// One nmap invocation: the accumulated command line plus export settings.
///
/// Option methods take `&mut self` and return `&mut Self` so calls chain the
/// way `std::process::Command` does; options with a bounded domain return
/// `Result<&mut Self>` and leave the argument list untouched on error.
/// Running consumes the invocation.
#[derive(Debug, Clone, Default)]
pub struct Nmap {
    args: Vec<String>,
    bin_path: Option<PathBuf>,
    output_mode: OutputMode,
    config: ExportConfig,
}

impl Nmap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExportConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Use this executable instead of looking `nmap` up on `PATH`.
    pub fn bin_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.bin_path = Some(path.into());
        self
    }

    /// Append raw tokens, in order, to the command line.
    pub fn add_args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn add_arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn configured_bin_path(&self) -> Option<&Path> {
        self.bin_path.as_deref()
    }

    pub(crate) fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    /// `flag a,b,c` for list-valued options
    pub(crate) fn add_list<I, S>(&mut self, flag: &str, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = items
            .into_iter()
            .map(|item| item.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.add_args([flag.to_string(), joined])
    }

    /// Like `add_list`, but an empty list emits the bare flag
    pub(crate) fn add_optional_list<I, S>(&mut self, flag: &str, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return self.add_arg(flag);
        }
        self.add_list(flag, items)
    }
}
