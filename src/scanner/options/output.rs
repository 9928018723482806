use crate::error::Result;
use crate::scanner::options::{check_range, single_file};
use crate::scanner::{Nmap, OutputMode};

/// OUTPUT
impl Nmap {
    /// `-oN <file>`: normal output. No filename means stdout.
    pub fn output_normal<I, S>(&mut self, file: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_format("-oN", OutputMode::Normal, file)
    }

    /// `-oX <file>`: XML output written by nmap itself; the runner won't decode it.
    pub fn output_xml<I, S>(&mut self, file: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_format("-oX", OutputMode::Xml, file)
    }

    /// `-oS <file>`: s|<rIpt kIddi3 output
    pub fn output_script_kiddie<I, S>(&mut self, file: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_format("-oS", OutputMode::ScriptKiddie, file)
    }

    /// `-oG <file>`: grepable output
    pub fn output_grepable<I, S>(&mut self, file: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_format("-oG", OutputMode::Grepable, file)
    }

    /// `-oA <basename>`: output in the three major formats at once
    pub fn output_all(&mut self, basename: impl Into<String>) -> &mut Self {
        self.set_output_mode(OutputMode::All);
        self.add_args(["-oA".to_string(), basename.into()])
    }

    /// `-v` repeated `level` times (1..=9), e.g. level 3 is `-vvv`
    pub fn verbose(&mut self, level: u8) -> Result<&mut Self> {
        self.repeated_flag("-v", 'v', level)
    }

    /// `-d` repeated `level` times (1..=9)
    pub fn debug(&mut self, level: u8) -> Result<&mut Self> {
        self.repeated_flag("-d", 'd', level)
    }

    /// `--reason`: display the reason a port is in a particular state
    pub fn reason(&mut self) -> &mut Self {
        self.add_arg("--reason")
    }

    pub fn stats_every(&mut self, interval: impl Into<String>) -> &mut Self {
        self.add_args(["--stats-every".to_string(), interval.into()])
    }

    /// `--packet-trace`: show all packets sent and received
    pub fn packet_trace(&mut self) -> &mut Self {
        self.add_arg("--packet-trace")
    }

    /// `--open`: only show open (or possibly open) ports
    pub fn open(&mut self) -> &mut Self {
        self.add_arg("--open")
    }

    pub fn append_output(&mut self) -> &mut Self {
        self.add_arg("--append-output")
    }

    /// `--resume <filename>`: resume an aborted scan
    pub fn resume(&mut self, filename: impl Into<String>) -> &mut Self {
        self.add_args(["--resume".to_string(), filename.into()])
    }

    pub fn noninteractive(&mut self) -> &mut Self {
        self.add_arg("--noninteractive")
    }

    /// `--stylesheet <path/URL>`: XSL stylesheet to transform XML output to HTML
    pub fn stylesheet(&mut self, path_or_url: impl Into<String>) -> &mut Self {
        self.add_args(["--stylesheet".to_string(), path_or_url.into()])
    }

    /// `--webxml`: reference stylesheet from Nmap.Org for more portable XML
    pub fn webxml(&mut self) -> &mut Self {
        self.add_arg("--webxml")
    }

    /// `--no-stylesheet`: prevent associating of XSL stylesheet w/XML output
    pub fn no_stylesheet(&mut self) -> &mut Self {
        self.add_arg("--no-stylesheet")
    }

    fn output_format<I, S>(&mut self, flag: &'static str, mode: OutputMode, file: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let file = single_file(flag, file)?;
        self.set_output_mode(mode);
        Ok(self.add_args([flag.to_string(), file]))
    }

    fn repeated_flag(&mut self, option: &'static str, flag: char, level: u8) -> Result<&mut Self> {
        let level = check_range(option, level, 1..=9)?;
        let token = format!("-{}", flag.to_string().repeat(level as usize));
        Ok(self.add_arg(token))
    }
}
