use crate::scanner::Nmap;

/// SCAN TECHNIQUES
impl Nmap {
    /// `-sS`
    pub fn syn_scan(&mut self) -> &mut Self {
        self.add_arg("-sS")
    }

    /// `-sT`
    pub fn connect_scan(&mut self) -> &mut Self {
        self.add_arg("-sT")
    }

    /// `-sA`
    pub fn ack_scan(&mut self) -> &mut Self {
        self.add_arg("-sA")
    }

    /// `-sW`
    pub fn window_scan(&mut self) -> &mut Self {
        self.add_arg("-sW")
    }

    /// `-sM`
    pub fn maimon_scan(&mut self) -> &mut Self {
        self.add_arg("-sM")
    }

    /// `-sU`
    pub fn udp_scan(&mut self) -> &mut Self {
        self.add_arg("-sU")
    }

    /// `-sN`
    pub fn null_scan(&mut self) -> &mut Self {
        self.add_arg("-sN")
    }

    /// `-sF`
    pub fn fin_scan(&mut self) -> &mut Self {
        self.add_arg("-sF")
    }

    /// `-sX`
    pub fn xmas_scan(&mut self) -> &mut Self {
        self.add_arg("-sX")
    }

    /// `--scanflags <flags>`: customize TCP scan flags
    pub fn scan_flags(&mut self, flags: impl Into<String>) -> &mut Self {
        self.add_args(["--scanflags".to_string(), flags.into()])
    }

    /// `-sI <zombie host[:probeport]>`: idle scan
    pub fn idle_scan(&mut self, zombie: impl Into<String>) -> &mut Self {
        self.add_args(["-sI".to_string(), zombie.into()])
    }

    /// `-sY`
    pub fn sctp_init_scan(&mut self) -> &mut Self {
        self.add_arg("-sY")
    }

    /// `-sZ`
    pub fn sctp_cookie_echo_scan(&mut self) -> &mut Self {
        self.add_arg("-sZ")
    }

    /// `-sO`: IP protocol scan. Port ids in the result are protocol numbers.
    pub fn ip_protocol_scan(&mut self) -> &mut Self {
        self.add_arg("-sO")
    }

    /// `-b <FTP relay host>`: FTP bounce scan
    pub fn ftp_bounce(&mut self, relay: impl Into<String>) -> &mut Self {
        self.add_args(["-b".to_string(), relay.into()])
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::Nmap;

    #[test]
    fn test_scan_techniques() {
        let mut nmap = Nmap::new();
        nmap.syn_scan()
            .connect_scan()
            .ack_scan()
            .window_scan()
            .maimon_scan()
            .udp_scan()
            .null_scan()
            .fin_scan()
            .xmas_scan()
            .sctp_init_scan()
            .sctp_cookie_echo_scan()
            .ip_protocol_scan();
        assert_eq!(
            nmap.args(),
            &["-sS", "-sT", "-sA", "-sW", "-sM", "-sU", "-sN", "-sF", "-sX", "-sY", "-sZ", "-sO"]
        );
    }

    #[test]
    fn test_valued_techniques() {
        let mut nmap = Nmap::new();
        nmap.scan_flags("URGACKPSHRSTSYNFIN")
            .idle_scan("127.0.0.2:88")
            .ftp_bounce("127.0.0.2");
        assert_eq!(
            nmap.args(),
            &["--scanflags", "URGACKPSHRSTSYNFIN", "-sI", "127.0.0.2:88", "-b", "127.0.0.2"]
        );
    }
}
