use crate::scanner::Nmap;

/// FIREWALL/IDS EVASION AND SPOOFING
impl Nmap {
    /// `-f`: fragment packets
    pub fn fragment(&mut self) -> &mut Self {
        self.add_arg("-f")
    }

    /// `--mtu <val>`: fragment packets with the given MTU, a multiple of 8
    pub fn mtu(&mut self, mtu: u16) -> &mut Self {
        self.add_args(["--mtu".to_string(), mtu.to_string()])
    }

    /// `-D <decoy1,decoy2[,ME],...>`: cloak a scan with decoys
    pub fn decoys<I, S>(&mut self, decoys: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_list("-D", decoys)
    }

    /// `-S <IP_Address>`: spoof source address
    pub fn spoof_source(&mut self, address: impl Into<String>) -> &mut Self {
        self.add_args(["-S".to_string(), address.into()])
    }

    /// `-e <iface>`: use specified interface
    pub fn interface(&mut self, iface: impl Into<String>) -> &mut Self {
        self.add_args(["-e".to_string(), iface.into()])
    }

    /// `--source-port <portnum>`
    pub fn source_port(&mut self, port: u16) -> &mut Self {
        self.add_args(["--source-port".to_string(), port.to_string()])
    }

    /// `--data <hex string>`: append a custom payload to sent packets
    pub fn data(&mut self, hex: impl Into<String>) -> &mut Self {
        self.add_args(["--data".to_string(), hex.into()])
    }

    /// `--data-string <string>`: append a custom ASCII string to sent packets
    pub fn data_string(&mut self, data: impl Into<String>) -> &mut Self {
        self.add_args(["--data-string".to_string(), data.into()])
    }

    /// `--data-length <num>`: append random data to sent packets
    pub fn data_length(&mut self, length: u32) -> &mut Self {
        self.add_args(["--data-length".to_string(), length.to_string()])
    }

    /// `--ip-options <options>`: send packets with specified ip options
    pub fn ip_options(&mut self, options: impl Into<String>) -> &mut Self {
        self.add_args(["--ip-options".to_string(), options.into()])
    }

    /// `--ttl <val>`: set IP time-to-live field
    pub fn ttl(&mut self, ttl: u8) -> &mut Self {
        self.add_args(["--ttl".to_string(), ttl.to_string()])
    }

    pub fn randomize_hosts(&mut self) -> &mut Self {
        self.add_arg("--randomize-hosts")
    }

    /// `--spoof-mac <mac address/prefix/vendor name>`
    pub fn spoof_mac(&mut self, mac: impl Into<String>) -> &mut Self {
        self.add_args(["--spoof-mac".to_string(), mac.into()])
    }

    /// `--proxies <url1,[url2],...>`: relay connections through HTTP/SOCKS4 proxies
    pub fn proxies<I, S>(&mut self, urls: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_list("--proxies", urls)
    }

    /// `--badsum`: send packets with a bogus TCP/UDP/SCTP checksum
    pub fn badsum(&mut self) -> &mut Self {
        self.add_arg("--badsum")
    }

    pub fn adler32(&mut self) -> &mut Self {
        self.add_arg("--adler32")
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::Nmap;

    #[test]
    fn test_evasion_options() {
        let mut nmap = Nmap::new();
        nmap.fragment()
            .mtu(16)
            .decoys(["192.168.1.5", "ME"])
            .spoof_source("10.0.0.9")
            .interface("eth0")
            .source_port(53)
            .data("deadbeef")
            .data_string("hello")
            .data_length(24)
            .ip_options("R")
            .ttl(64)
            .randomize_hosts()
            .spoof_mac("0")
            .proxies(["http://127.0.0.1:8080", "socks4://127.0.0.1:1080"])
            .badsum()
            .adler32();
        assert_eq!(
            nmap.args(),
            &[
                "-f",
                "--mtu",
                "16",
                "-D",
                "192.168.1.5,ME",
                "-S",
                "10.0.0.9",
                "-e",
                "eth0",
                "--source-port",
                "53",
                "--data",
                "deadbeef",
                "--data-string",
                "hello",
                "--data-length",
                "24",
                "--ip-options",
                "R",
                "--ttl",
                "64",
                "--randomize-hosts",
                "--spoof-mac",
                "0",
                "--proxies",
                "http://127.0.0.1:8080,socks4://127.0.0.1:1080",
                "--badsum",
                "--adler32",
            ]
        );
    }
}
