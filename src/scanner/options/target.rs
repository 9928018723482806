use crate::scanner::Nmap;

/// TARGET SPECIFICATION
impl Nmap {
    /// Hostnames, IP addresses, networks, etc. appended as-is
    pub fn targets<I, S>(&mut self, targets: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_args(targets)
    }

    /// `-iL <inputfilename>`: input from list of hosts/networks
    pub fn input_list(&mut self, filename: impl Into<String>) -> &mut Self {
        self.add_args(["-iL".to_string(), filename.into()])
    }

    /// `-iR <num hosts>`: choose random targets
    pub fn random_targets(&mut self, num_hosts: u32) -> &mut Self {
        self.add_args(["-iR".to_string(), num_hosts.to_string()])
    }

    /// `--exclude <host1[,host2][,host3],...>`
    pub fn exclude<I, S>(&mut self, hosts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_list("--exclude", hosts)
    }

    /// `--excludefile <exclude_file>`
    pub fn exclude_file(&mut self, filename: impl Into<String>) -> &mut Self {
        self.add_args(["--excludefile".to_string(), filename.into()])
    }

    pub fn resolve_all(&mut self) -> &mut Self {
        self.add_arg("--resolve-all")
    }

    pub fn unique(&mut self) -> &mut Self {
        self.add_arg("--unique")
    }
}
