use crate::scanner::Nmap;

/// OS DETECTION
impl Nmap {
    /// `-O`
    pub fn os_detection(&mut self) -> &mut Self {
        self.add_arg("-O")
    }

    /// `--osscan-limit`: limit OS detection to promising targets
    pub fn osscan_limit(&mut self) -> &mut Self {
        self.add_arg("--osscan-limit")
    }

    /// `--osscan-guess`: guess OS more aggressively
    pub fn osscan_guess(&mut self) -> &mut Self {
        self.add_arg("--osscan-guess")
    }

    pub fn max_os_tries(&mut self, tries: u32) -> &mut Self {
        self.add_args(["--max-os-tries".to_string(), tries.to_string()])
    }
}
