use crate::error::Result;
use crate::scanner::options::check_range;
use crate::scanner::Nmap;

/// SERVICE/VERSION DETECTION
impl Nmap {
    /// `-sV`: probe open ports to determine service/version info
    pub fn service_version(&mut self) -> &mut Self {
        self.add_arg("-sV")
    }

    /// `--allports`: don't exclude any ports from version detection
    pub fn all_ports(&mut self) -> &mut Self {
        self.add_arg("--allports")
    }

    /// `--version-intensity <level>`: 0 (light) to 9 (try all probes)
    pub fn version_intensity(&mut self, level: u8) -> Result<&mut Self> {
        let level = check_range("--version-intensity", level, 0..=9)?;
        Ok(self.add_args(["--version-intensity".to_string(), level.to_string()]))
    }

    /// `--version-light`: limit to most likely probes (intensity 2)
    pub fn version_light(&mut self) -> &mut Self {
        self.add_arg("--version-light")
    }

    /// `--version-all`: try every single probe (intensity 9)
    pub fn version_all(&mut self) -> &mut Self {
        self.add_arg("--version-all")
    }

    /// `--version-trace`: show detailed version scan activity
    pub fn version_trace(&mut self) -> &mut Self {
        self.add_arg("--version-trace")
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::Nmap;

    #[test]
    fn test_version_detection_flags() {
        let mut nmap = Nmap::new();
        nmap.service_version()
            .all_ports()
            .version_light()
            .version_all()
            .version_trace();
        assert_eq!(
            nmap.args(),
            &["-sV", "--allports", "--version-light", "--version-all", "--version-trace"]
        );
    }

    #[test]
    fn test_version_intensity_range() {
        let mut nmap = Nmap::new();
        nmap.version_intensity(0).unwrap().version_intensity(8).unwrap();
        assert_eq!(
            nmap.args(),
            &["--version-intensity", "0", "--version-intensity", "8"]
        );
        assert!(nmap.version_intensity(10).is_err());
        assert_eq!(nmap.args().len(), 4);
    }
}
