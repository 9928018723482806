use crate::error::{NmapError, Result};
use crate::scanner::options::check_range;
use crate::scanner::Nmap;

/// PORT SPECIFICATION AND SCAN ORDER
impl Nmap {
    /// `-p <port ranges>`, e.g. `["22", "1-65535", "U:53,111,T:21-25"]`
    pub fn ports<I, S>(&mut self, ranges: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_list("-p", ranges)
    }

    /// `--exclude-ports <port ranges>`
    pub fn exclude_ports<I, S>(&mut self, ranges: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_list("--exclude-ports", ranges)
    }

    /// `-F`: fast mode, fewer ports than the default scan
    pub fn fast_mode(&mut self) -> &mut Self {
        self.add_arg("-F")
    }

    /// `-r`: scan ports sequentially, don't randomize
    pub fn sequential_ports(&mut self) -> &mut Self {
        self.add_arg("-r")
    }

    /// `--top-ports <number>`: scan the most common ports. `number` must be 1 or greater.
    pub fn top_ports(&mut self, number: u32) -> Result<&mut Self> {
        if number < 1 {
            return Err(NmapError::invalid("--top-ports", "number must be 1 or greater"));
        }
        Ok(self.add_args(["--top-ports".to_string(), number.to_string()]))
    }

    /// `--port-ratio <ratio>`: ports more common than `ratio`, which must lie in 0.0..=1.0.
    ///
    /// The value is passed with one decimal place, so `0.35` becomes `0.3`.
    pub fn port_ratio(&mut self, ratio: f32) -> Result<&mut Self> {
        let ratio = check_range("--port-ratio", ratio, 0.0..=1.0)?;
        Ok(self.add_args(["--port-ratio".to_string(), format!("{:.1}", ratio)]))
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::Nmap;

    #[test]
    fn test_port_lists() {
        let mut nmap = Nmap::new();
        nmap.ports(["80", "443", "8000-8100"])
            .exclude_ports(["8080"])
            .fast_mode()
            .sequential_ports();
        assert_eq!(
            nmap.args(),
            &["-p", "80,443,8000-8100", "--exclude-ports", "8080", "-F", "-r"]
        );
    }

    #[test]
    fn test_top_ports() {
        let mut nmap = Nmap::new();
        nmap.top_ports(10).unwrap();
        assert_eq!(nmap.args(), &["--top-ports", "10"]);

        assert!(nmap.top_ports(0).is_err());
        assert_eq!(nmap.args().len(), 2);
    }

    #[test]
    fn test_port_ratio_rounds_to_one_decimal() {
        let mut nmap = Nmap::new();
        nmap.port_ratio(0.35).unwrap();
        assert_eq!(nmap.args(), &["--port-ratio", "0.3"]);
    }

    #[test]
    fn test_port_ratio_bounds() {
        let mut nmap = Nmap::new();
        nmap.port_ratio(0.0).unwrap().port_ratio(1.0).unwrap();
        assert_eq!(nmap.args(), &["--port-ratio", "0.0", "--port-ratio", "1.0"]);

        assert!(nmap.port_ratio(1.5).is_err());
        assert!(nmap.port_ratio(-0.1).is_err());
        assert!(nmap.port_ratio(f32::NAN).is_err());
        assert_eq!(nmap.args().len(), 4);
    }
}
