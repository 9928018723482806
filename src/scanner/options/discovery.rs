use crate::scanner::Nmap;

/// HOST DISCOVERY
impl Nmap {
    /// `-sL`: list scan, simply list targets to scan
    pub fn list_scan(&mut self) -> &mut Self {
        self.add_arg("-sL")
    }

    /// `-sn`: ping scan, disable port scan
    pub fn ping_scan(&mut self) -> &mut Self {
        self.add_arg("-sn")
    }

    /// `-Pn`: treat all hosts as online, skip host discovery
    pub fn skip_host_discovery(&mut self) -> &mut Self {
        self.add_arg("-Pn")
    }

    /// `-PS [portlist]`: TCP SYN discovery to given ports
    pub fn tcp_syn_discovery<I, S>(&mut self, ports: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_optional_list("-PS", ports)
    }

    /// `-PA [portlist]`: TCP ACK discovery
    pub fn tcp_ack_discovery<I, S>(&mut self, ports: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_optional_list("-PA", ports)
    }

    /// `-PU [portlist]`: UDP discovery
    pub fn udp_discovery<I, S>(&mut self, ports: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_optional_list("-PU", ports)
    }

    /// `-PY [portlist]`: SCTP discovery
    pub fn sctp_discovery<I, S>(&mut self, ports: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_optional_list("-PY", ports)
    }

    /// `-PE`: ICMP echo request discovery probe
    pub fn icmp_echo_discovery(&mut self) -> &mut Self {
        self.add_arg("-PE")
    }

    /// `-PP`: ICMP timestamp request discovery probe
    pub fn icmp_timestamp_discovery(&mut self) -> &mut Self {
        self.add_arg("-PP")
    }

    /// `-PM`: ICMP netmask request discovery probe
    pub fn icmp_netmask_discovery(&mut self) -> &mut Self {
        self.add_arg("-PM")
    }

    /// `-PO [protocol list]`: IP protocol ping
    pub fn ip_protocol_ping<I, S>(&mut self, protocols: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_optional_list("-PO", protocols)
    }

    pub fn disable_arp_ping(&mut self) -> &mut Self {
        self.add_arg("--disable-arp-ping")
    }

    pub fn discovery_ignore_rst(&mut self) -> &mut Self {
        self.add_arg("--discovery-ignore-rst")
    }

    /// `--traceroute`: trace hop path to each host
    pub fn traceroute(&mut self) -> &mut Self {
        self.add_arg("--traceroute")
    }

    /// `-n`: never do DNS resolution
    pub fn no_dns_resolution(&mut self) -> &mut Self {
        self.add_arg("-n")
    }

    /// `-R`: always resolve
    pub fn always_resolve(&mut self) -> &mut Self {
        self.add_arg("-R")
    }

    /// `--dns-servers <serv1[,serv2],...>`
    pub fn dns_servers<I, S>(&mut self, servers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_list("--dns-servers", servers)
    }

    /// `--system-dns`: use OS's DNS resolver
    pub fn system_dns(&mut self) -> &mut Self {
        self.add_arg("--system-dns")
    }
}
