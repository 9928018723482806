use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use nmapwrap::{ExportConfig, Nmap};

#[derive(Parser, Debug)]
#[command(name = "nmapwrap")]
#[command(version)]
#[command(about = "Run nmap and turn its XML output into console, text and spreadsheet reports", long_about = None)]
pub struct Cli {
    #[arg(help = "Targets: hostnames, IP addresses, networks (192.168.1.0/24) or ranges. Can be specified multiple times.")]
    pub targets: Vec<String>,

    #[arg(short = 'p', long, value_delimiter = ',', help = "Port ranges: -p22,80,443 or -p1-1000 or -p-")]
    pub ports: Vec<String>,

    #[arg(long, value_name = "NUMBER", help = "Scan the <number> most common ports")]
    pub top_ports: Option<u32>,

    #[arg(short = 's', long, value_enum, help = "Scan technique")]
    pub scan_type: Option<ScanType>,

    #[arg(long = "sV", help = "Probe open ports to determine service/version info")]
    pub service_version: bool,

    #[arg(short = 'O', help = "Enable OS detection")]
    pub os_detection: bool,

    #[arg(short = 'A', help = "Enable OS detection, version detection, script scanning, and traceroute")]
    pub aggressive: bool,

    #[arg(long = "Pn", help = "Skip host discovery (treat all hosts as online)")]
    pub skip_ping: bool,

    #[arg(short = 'n', help = "Never do DNS resolution")]
    pub no_dns: bool,

    #[arg(short = 'T', value_name = "0-5", value_parser = clap::value_parser!(u8).range(0..=5), help = "Timing template (higher is faster)")]
    pub timing: Option<u8>,

    #[arg(long, value_delimiter = ',', help = "NSE scripts, directories or categories")]
    pub script: Vec<String>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase nmap verbosity (repeat up to 9 times)")]
    pub verbose: u8,

    #[arg(long, value_name = "PATH", help = "Use this nmap executable instead of searching PATH")]
    pub nmap_path: Option<PathBuf>,

    #[arg(long, value_name = "SECONDS", help = "Kill the scan if it runs longer than this")]
    pub timeout: Option<u64>,

    #[arg(long, value_name = "FILE", help = "Decode an existing -oX file instead of running nmap")]
    pub parse: Option<PathBuf>,

    #[arg(long, help = "Load export settings from this JSON file instead of the user config")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Write <result-name>.xlsx")]
    pub xlsx: bool,

    #[arg(long, help = "Write <result-name>.txt")]
    pub txt: bool,

    #[arg(long, help = "Base name for the raw XML and exported reports")]
    pub result_name: Option<String>,

    #[arg(long, help = "Hide the hosthint section of the console report")]
    pub no_hosthint: bool,

    #[arg(long, help = "Hide the host and port section of the console report")]
    pub no_hostport: bool,

    #[arg(long, help = "Do not merge a host's cells across its port rows in the spreadsheet")]
    pub no_merge: bool,

    #[arg(long, help = "Do not style spreadsheet sheets as tables")]
    pub no_table: bool,

    #[arg(long, help = "Do not keep the raw XML output")]
    pub no_save_raw: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(last = true, help = "Extra arguments passed to nmap verbatim")]
    pub nmap_args: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum ScanType {
    #[value(name = "syn", help = "TCP SYN scan (requires root)")]
    Syn,
    #[value(name = "connect", help = "TCP connect scan")]
    Connect,
    #[value(name = "udp", help = "UDP scan")]
    Udp,
    #[value(name = "fin", help = "TCP FIN scan")]
    Fin,
    #[value(name = "xmas", help = "TCP Xmas scan")]
    Xmas,
    #[value(name = "null", help = "TCP NULL scan")]
    Null,
    #[value(name = "ack", help = "TCP ACK scan")]
    Ack,
    #[value(name = "ping", help = "Host discovery only, no port scan")]
    Ping,
}

impl Cli {
    /// Apply the command-line switches on top of a loaded config.
    pub fn export_config(&self, mut config: ExportConfig) -> ExportConfig {
        if let Some(name) = &self.result_name {
            config.result_name = name.clone();
        }
        config.show_hosthint &= !self.no_hosthint;
        config.show_hostport &= !self.no_hostport;
        config.merge_row &= !self.no_merge;
        config.add_table &= !self.no_table;
        config.save_xml_raw &= !self.no_save_raw;
        config
    }

    /// Translate the scan switches into an nmap invocation.
    pub fn build_invocation(&self, config: ExportConfig) -> nmapwrap::Result<Nmap> {
        let mut nmap = Nmap::with_config(config);
        if let Some(path) = &self.nmap_path {
            nmap.bin_path(path);
        }

        match self.scan_type {
            Some(ScanType::Syn) => nmap.syn_scan(),
            Some(ScanType::Connect) => nmap.connect_scan(),
            Some(ScanType::Udp) => nmap.udp_scan(),
            Some(ScanType::Fin) => nmap.fin_scan(),
            Some(ScanType::Xmas) => nmap.xmas_scan(),
            Some(ScanType::Null) => nmap.null_scan(),
            Some(ScanType::Ack) => nmap.ack_scan(),
            Some(ScanType::Ping) => nmap.ping_scan(),
            None => &mut nmap,
        };

        if !self.ports.is_empty() {
            nmap.ports(&self.ports);
        }
        if let Some(number) = self.top_ports {
            nmap.top_ports(number)?;
        }
        if self.service_version {
            nmap.service_version();
        }
        if self.os_detection {
            nmap.os_detection();
        }
        if self.aggressive {
            nmap.aggressive();
        }
        if self.skip_ping {
            nmap.skip_host_discovery();
        }
        if self.no_dns {
            nmap.no_dns_resolution();
        }
        if let Some(template) = self.timing {
            nmap.timing_template(template);
        }
        if !self.script.is_empty() {
            nmap.scripts(&self.script);
        }
        if self.verbose > 0 {
            nmap.verbose(self.verbose)?;
        }

        nmap.add_args(self.nmap_args.iter().cloned());
        nmap.targets(self.targets.iter().cloned());
        Ok(nmap)
    }
}
