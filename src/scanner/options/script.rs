use crate::scanner::{Nmap, OutputMode};

/// SCRIPT SCAN
impl Nmap {
    /// `-sC`: equivalent to `--script=default`
    pub fn default_scripts(&mut self) -> &mut Self {
        self.add_arg("-sC")
    }

    /// `--script <Lua scripts>`: directories, script files or script categories
    pub fn scripts<I, S>(&mut self, scripts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_list("--script", scripts)
    }

    /// `--script-args <n1=v1,[n2=v2,...]>`
    pub fn script_args(&mut self, args: impl Into<String>) -> &mut Self {
        self.add_args(["--script-args".to_string(), args.into()])
    }

    /// `--script-args-file <filename>`
    pub fn script_args_file(&mut self, filename: impl Into<String>) -> &mut Self {
        self.add_args(["--script-args-file".to_string(), filename.into()])
    }

    /// `--script-trace`: show all data sent and received
    pub fn script_trace(&mut self) -> &mut Self {
        self.add_arg("--script-trace")
    }

    /// `--script-updatedb`: update the script database
    pub fn script_updatedb(&mut self) -> &mut Self {
        self.add_arg("--script-updatedb")
    }

    /// `--script-help <Lua scripts>`. Prints help instead of scanning, so no
    /// XML is requested or decoded for this invocation.
    pub fn script_help<I, S>(&mut self, scripts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_output_mode(OutputMode::None);
        self.add_list("--script-help", scripts)
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::{Nmap, OutputMode};

    #[test]
    fn test_script_options() {
        let mut nmap = Nmap::new();
        nmap.default_scripts()
            .scripts(["redis-info", "redis-brute"])
            .script_args("user=foo,pass=")
            .script_args_file("payload.txt")
            .script_trace()
            .script_updatedb();
        assert_eq!(
            nmap.args(),
            &[
                "-sC",
                "--script",
                "redis-info,redis-brute",
                "--script-args",
                "user=foo,pass=",
                "--script-args-file",
                "payload.txt",
                "--script-trace",
                "--script-updatedb",
            ]
        );
        assert_eq!(nmap.output_mode(), OutputMode::Default);
    }

    #[test]
    fn test_script_help_disables_default_output() {
        let mut nmap = Nmap::new();
        nmap.script_help(["redis-info"]);
        assert_eq!(nmap.args(), &["--script-help", "redis-info"]);
        assert_eq!(nmap.output_mode(), OutputMode::None);
    }
}
