use crate::scanner::{Nmap, OutputMode};

/// MISC
impl Nmap {
    /// `-6`: enable IPv6 scanning
    pub fn ipv6(&mut self) -> &mut Self {
        self.add_arg("-6")
    }

    /// `-A`: enable OS detection, version detection, script scanning, and traceroute
    pub fn aggressive(&mut self) -> &mut Self {
        self.add_arg("-A")
    }

    /// `--datadir <dirname>`: specify custom nmap data file location
    pub fn datadir(&mut self, dirname: impl Into<String>) -> &mut Self {
        self.add_args(["--datadir".to_string(), dirname.into()])
    }

    pub fn send_eth(&mut self) -> &mut Self {
        self.add_arg("--send-eth")
    }

    pub fn send_ip(&mut self) -> &mut Self {
        self.add_arg("--send-ip")
    }

    /// `--privileged`: assume that the user is fully privileged
    pub fn privileged(&mut self) -> &mut Self {
        self.add_arg("--privileged")
    }

    /// `--unprivileged`: assume the user lacks raw socket privileges
    pub fn unprivileged(&mut self) -> &mut Self {
        self.add_arg("--unprivileged")
    }

    pub fn servicedb(&mut self, filename: impl Into<String>) -> &mut Self {
        self.add_args(["--servicedb".to_string(), filename.into()])
    }

    pub fn versiondb(&mut self, filename: impl Into<String>) -> &mut Self {
        self.add_args(["--versiondb".to_string(), filename.into()])
    }

    pub fn release_memory(&mut self) -> &mut Self {
        self.add_arg("--release-memory")
    }

    /// `-V`: print version number. Produces no scan document.
    pub fn print_version(&mut self) -> &mut Self {
        self.set_output_mode(OutputMode::None);
        self.add_arg("-V")
    }

    /// `-h`: print the help summary. Produces no scan document.
    pub fn print_help(&mut self) -> &mut Self {
        self.set_output_mode(OutputMode::None);
        self.add_arg("-h")
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::{Nmap, OutputMode};

    #[test]
    fn test_misc_options() {
        let mut nmap = Nmap::new();
        nmap.ipv6()
            .aggressive()
            .datadir("/usr/share/nmap")
            .send_eth()
            .send_ip()
            .privileged()
            .unprivileged()
            .servicedb("services")
            .versiondb("probes")
            .release_memory();
        assert_eq!(
            nmap.args(),
            &[
                "-6",
                "-A",
                "--datadir",
                "/usr/share/nmap",
                "--send-eth",
                "--send-ip",
                "--privileged",
                "--unprivileged",
                "--servicedb",
                "services",
                "--versiondb",
                "probes",
                "--release-memory",
            ]
        );
        assert_eq!(nmap.output_mode(), OutputMode::Default);
    }

    #[test]
    fn test_info_flags_produce_no_document() {
        let mut nmap = Nmap::new();
        nmap.print_version();
        assert_eq!(nmap.output_mode(), OutputMode::None);

        let mut nmap = Nmap::new();
        nmap.print_help();
        assert_eq!(nmap.args(), &["-h"]);
        assert_eq!(nmap.output_mode(), OutputMode::None);
    }
}
