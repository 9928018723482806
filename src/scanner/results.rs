//! Typed model of nmap's XML output (`-oX`), following nmap.dtd.
//!
//! Every struct is `#[serde(default)]`: attributes or elements missing from
//! the document leave the field at its empty value. Only structurally broken
//! XML is an error.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::Result;

/// Decode a captured `-oX` document into a result tree.
pub fn parse_xml(text: &str) -> Result<NmapRun> {
    Ok(quick_xml::de::from_str(text)?)
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename = "nmaprun")]
pub struct NmapRun {
    #[serde(rename = "@scanner")]
    pub scanner: String,
    #[serde(rename = "@args")]
    pub args: String,
    #[serde(rename = "@start", deserialize_with = "lenient")]
    pub start: i64,
    #[serde(rename = "@startstr")]
    pub start_str: String,
    #[serde(rename = "@version")]
    pub version: String,
    #[serde(rename = "@profile_name")]
    pub profile_name: String,
    #[serde(rename = "@xmloutputversion")]
    pub xml_output_version: String,
    #[serde(rename = "scaninfo")]
    pub scan_info: Vec<ScanInfo>,
    pub verbose: Verbose,
    pub debugging: Verbose,
    #[serde(rename = "target")]
    pub targets: Vec<Target>,
    #[serde(rename = "taskbegin")]
    pub task_begin: Vec<Task>,
    #[serde(rename = "taskprogress")]
    pub task_progress: Vec<TaskProgress>,
    #[serde(rename = "taskend")]
    pub task_end: Vec<Task>,
    #[serde(rename = "hosthint")]
    pub host_hints: Vec<HostHint>,
    #[serde(rename = "host")]
    pub hosts: Vec<Host>,
    #[serde(rename = "prescript", deserialize_with = "script_list")]
    pub pre_scripts: Vec<Script>,
    #[serde(rename = "postscript", deserialize_with = "script_list")]
    pub post_scripts: Vec<Script>,
    pub output: Vec<Output>,
    #[serde(rename = "runstats")]
    pub run_stats: RunStats,
}

impl NmapRun {
    /// Read and decode an `-oX` file written by an earlier run.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        parse_xml(&text)
    }

    /// The closing summary line, e.g. "Nmap done at ...; 1 IP address (1 host up) scanned in 0.05 seconds"
    pub fn summary(&self) -> &str {
        &self.run_stats.finished.summary
    }

    /// nmap's own terminal error, if the run failed after producing XML
    pub fn error_message(&self) -> Option<&str> {
        let msg = self.run_stats.finished.error_msg.as_str();
        (!msg.is_empty()).then_some(msg)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanInfo {
    #[serde(rename = "@type")]
    pub scan_type: String,
    #[serde(rename = "@scanflags")]
    pub scan_flags: String,
    #[serde(rename = "@protocol")]
    pub protocol: PortProtocol,
    #[serde(rename = "@numservices", deserialize_with = "lenient")]
    pub num_services: u32,
    #[serde(rename = "@services")]
    pub services: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Verbose {
    #[serde(rename = "@level", deserialize_with = "lenient")]
    pub level: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Target {
    #[serde(rename = "@specification")]
    pub specification: String,
    #[serde(rename = "@status")]
    pub status: String,
    #[serde(rename = "@reason")]
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Task {
    #[serde(rename = "@task")]
    pub task: String,
    #[serde(rename = "@time", deserialize_with = "lenient")]
    pub time: i64,
    #[serde(rename = "@extrainfo")]
    pub extra_info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TaskProgress {
    #[serde(rename = "@task")]
    pub task: String,
    #[serde(rename = "@time", deserialize_with = "lenient")]
    pub time: i64,
    #[serde(rename = "@percent", deserialize_with = "lenient")]
    pub percent: f32,
    #[serde(rename = "@remaining", deserialize_with = "lenient")]
    pub remaining: i64,
    #[serde(rename = "@etc", deserialize_with = "lenient")]
    pub etc: i64,
}

/// Lightweight liveness record emitted during host discovery
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostHint {
    pub status: Status,
    #[serde(rename = "address")]
    pub addresses: Vec<Address>,
    #[serde(deserialize_with = "hostname_list")]
    pub hostnames: Vec<Hostname>,
}

impl HostHint {
    /// The primary (first reported) address
    pub fn address(&self) -> Option<&Address> {
        self.addresses.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Host {
    #[serde(rename = "@starttime", deserialize_with = "lenient")]
    pub start_time: i64,
    #[serde(rename = "@endtime", deserialize_with = "lenient")]
    pub end_time: i64,
    #[serde(rename = "@timedout", deserialize_with = "lenient")]
    pub timed_out: bool,
    #[serde(rename = "@comment")]
    pub comment: String,
    pub status: Status,
    #[serde(rename = "address")]
    pub addresses: Vec<Address>,
    #[serde(deserialize_with = "hostname_list")]
    pub hostnames: Vec<Hostname>,
    pub smurf: Vec<Smurf>,
    #[serde(rename = "ports")]
    pub port_groups: Vec<Ports>,
    pub os: Option<Os>,
    pub distance: Option<Distance>,
    pub uptime: Option<Uptime>,
    #[serde(rename = "tcpsequence")]
    pub tcp_sequence: Option<TcpSequence>,
    #[serde(rename = "ipidsequence")]
    pub ip_id_sequence: Option<Sequence>,
    #[serde(rename = "tcptssequence")]
    pub tcp_ts_sequence: Option<Sequence>,
    #[serde(rename = "hostscript", deserialize_with = "script_list")]
    pub host_scripts: Vec<Script>,
    pub trace: Option<Trace>,
    pub times: Option<Times>,
}

impl Host {
    /// Every scanned port across all port groups
    pub fn ports(&self) -> impl Iterator<Item = &Port> {
        self.port_groups.iter().flat_map(|group| group.ports.iter())
    }

    pub fn has_ports(&self) -> bool {
        self.ports().next().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Status {
    #[serde(rename = "@state")]
    pub state: HostState,
    #[serde(rename = "@reason")]
    pub reason: String,
    #[serde(rename = "@reason_ttl", deserialize_with = "lenient")]
    pub reason_ttl: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(rename = "@addr")]
    pub addr: String,
    #[serde(rename = "@addrtype")]
    pub addr_type: String,
    #[serde(rename = "@vendor")]
    pub vendor: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Hostname {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@type")]
    pub kind: HostnameType,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Smurf {
    #[serde(rename = "@responses", deserialize_with = "lenient")]
    pub responses: u32,
}

/// One `<ports>` group: the ports scanned for a host plus the collapsed remainder
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Ports {
    #[serde(rename = "extraports")]
    pub extra_ports: Vec<ExtraPorts>,
    #[serde(rename = "port")]
    pub ports: Vec<Port>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExtraPorts {
    #[serde(rename = "@state")]
    pub state: PortState,
    #[serde(rename = "@count", deserialize_with = "lenient")]
    pub count: u32,
    #[serde(rename = "extrareasons")]
    pub extra_reasons: Vec<ExtraReasons>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExtraReasons {
    #[serde(rename = "@reason")]
    pub reason: String,
    #[serde(rename = "@count")]
    pub count: String,
    #[serde(rename = "@proto")]
    pub proto: PortProtocol,
    #[serde(rename = "@ports")]
    pub ports: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Port {
    #[serde(rename = "@protocol")]
    pub protocol: PortProtocol,
    /// Port number, or the IP protocol number for an IP protocol scan (`-sO`)
    #[serde(rename = "@portid", deserialize_with = "lenient")]
    pub port_id: u16,
    pub state: State,
    pub owner: Option<Owner>,
    pub service: Option<Service>,
    #[serde(rename = "script")]
    pub scripts: Vec<Script>,
}

impl Port {
    /// `product version`, trimmed; empty when nothing was detected
    pub fn service_version(&self) -> String {
        match &self.service {
            Some(service) => format!("{} {}", service.product, service.version)
                .trim()
                .to_string(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct State {
    #[serde(rename = "@state")]
    pub state: PortState,
    #[serde(rename = "@reason")]
    pub reason: String,
    #[serde(rename = "@reason_ttl", deserialize_with = "lenient")]
    pub reason_ttl: i32,
    #[serde(rename = "@reason_ip")]
    pub reason_ip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Owner {
    #[serde(rename = "@name")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde(rename = "@name")]
    pub name: String,
    /// Detection confidence, 0 (guess) to 10 (certain)
    #[serde(rename = "@conf", deserialize_with = "lenient")]
    pub conf: u8,
    /// `table` or `probed`
    #[serde(rename = "@method")]
    pub method: String,
    #[serde(rename = "@version")]
    pub version: String,
    #[serde(rename = "@product")]
    pub product: String,
    #[serde(rename = "@extrainfo")]
    pub extra_info: String,
    #[serde(rename = "@tunnel")]
    pub tunnel: String,
    #[serde(rename = "@proto")]
    pub proto: String,
    #[serde(rename = "@rpcnum", deserialize_with = "lenient")]
    pub rpc_num: u32,
    #[serde(rename = "@lowver", deserialize_with = "lenient")]
    pub low_ver: u32,
    #[serde(rename = "@highver", deserialize_with = "lenient")]
    pub high_ver: u32,
    #[serde(rename = "@hostname")]
    pub hostname: String,
    #[serde(rename = "@ostype")]
    pub os_type: String,
    #[serde(rename = "@devicetype")]
    pub device_type: String,
    #[serde(rename = "@servicefp")]
    pub service_fp: String,
    pub cpe: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Script {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@output")]
    pub output: String,
    #[serde(rename = "table")]
    pub tables: Vec<Table>,
    #[serde(rename = "elem")]
    pub elems: Vec<Elem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Table {
    #[serde(rename = "@key")]
    pub key: String,
    #[serde(rename = "table")]
    pub tables: Vec<Table>,
    #[serde(rename = "elem")]
    pub elems: Vec<Elem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Elem {
    #[serde(rename = "@key")]
    pub key: String,
    #[serde(rename = "$text")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Os {
    #[serde(rename = "portused")]
    pub ports_used: Vec<PortUsed>,
    #[serde(rename = "osmatch")]
    pub matches: Vec<OsMatch>,
    #[serde(rename = "osfingerprint")]
    pub fingerprints: Vec<OsFingerprint>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortUsed {
    #[serde(rename = "@state")]
    pub state: PortState,
    #[serde(rename = "@proto")]
    pub proto: PortProtocol,
    #[serde(rename = "@portid", deserialize_with = "lenient")]
    pub port_id: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OsMatch {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@accuracy", deserialize_with = "lenient")]
    pub accuracy: u8,
    #[serde(rename = "@line", deserialize_with = "lenient")]
    pub line: u32,
    #[serde(rename = "osclass")]
    pub classes: Vec<OsClass>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OsClass {
    #[serde(rename = "@vendor")]
    pub vendor: String,
    #[serde(rename = "@osgen")]
    pub os_gen: String,
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@accuracy")]
    pub accuracy: String,
    #[serde(rename = "@osfamily")]
    pub os_family: String,
    pub cpe: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OsFingerprint {
    #[serde(rename = "@fingerprint")]
    pub fingerprint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Distance {
    #[serde(rename = "@value", deserialize_with = "lenient")]
    pub value: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Uptime {
    #[serde(rename = "@seconds", deserialize_with = "lenient")]
    pub seconds: u64,
    #[serde(rename = "@lastboot")]
    pub last_boot: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TcpSequence {
    #[serde(rename = "@index", deserialize_with = "lenient")]
    pub index: u32,
    #[serde(rename = "@difficulty")]
    pub difficulty: String,
    #[serde(rename = "@values")]
    pub values: String,
}

/// `<ipidsequence>` and `<tcptssequence>`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Sequence {
    #[serde(rename = "@class")]
    pub class: String,
    #[serde(rename = "@values")]
    pub values: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Trace {
    #[serde(rename = "@proto")]
    pub proto: String,
    #[serde(rename = "@port")]
    pub port: String,
    #[serde(rename = "hop")]
    pub hops: Vec<Hop>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Hop {
    #[serde(rename = "@ttl", deserialize_with = "lenient")]
    pub ttl: u32,
    #[serde(rename = "@rtt")]
    pub rtt: String,
    #[serde(rename = "@ipaddr")]
    pub ip_addr: String,
    #[serde(rename = "@host")]
    pub host: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Times {
    #[serde(rename = "@srtt")]
    pub srtt: String,
    #[serde(rename = "@rttvar")]
    pub rtt_var: String,
    #[serde(rename = "@to")]
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Output {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "$text")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunStats {
    pub finished: Finished,
    pub hosts: HostCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Finished {
    #[serde(rename = "@time", deserialize_with = "lenient")]
    pub time: i64,
    #[serde(rename = "@timestr")]
    pub time_str: String,
    #[serde(rename = "@elapsed", deserialize_with = "lenient")]
    pub elapsed: f32,
    #[serde(rename = "@summary")]
    pub summary: String,
    #[serde(rename = "@exit")]
    pub exit: String,
    #[serde(rename = "@errormsg")]
    pub error_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostCounts {
    #[serde(rename = "@up", deserialize_with = "lenient")]
    pub up: u32,
    #[serde(rename = "@down", deserialize_with = "lenient")]
    pub down: u32,
    #[serde(rename = "@total", deserialize_with = "lenient")]
    pub total: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum HostState {
    Up,
    Down,
    #[default]
    Unknown,
    Skipped,
}

impl From<String> for HostState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "up" => HostState::Up,
            "down" => HostState::Down,
            "skipped" => HostState::Skipped,
            _ => HostState::Unknown,
        }
    }
}

impl fmt::Display for HostState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostState::Up => write!(f, "up"),
            HostState::Down => write!(f, "down"),
            HostState::Unknown => write!(f, "unknown"),
            HostState::Skipped => write!(f, "skipped"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PortState {
    Open,
    Closed,
    Filtered,
    Unfiltered,
    OpenFiltered,
    ClosedFiltered,
    Other(String),
}

impl Default for PortState {
    fn default() -> Self {
        PortState::Other(String::new())
    }
}

impl From<String> for PortState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "open" => PortState::Open,
            "closed" => PortState::Closed,
            "filtered" => PortState::Filtered,
            "unfiltered" => PortState::Unfiltered,
            "open|filtered" => PortState::OpenFiltered,
            "closed|filtered" => PortState::ClosedFiltered,
            _ => PortState::Other(value),
        }
    }
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortState::Open => write!(f, "open"),
            PortState::Closed => write!(f, "closed"),
            PortState::Filtered => write!(f, "filtered"),
            PortState::Unfiltered => write!(f, "unfiltered"),
            PortState::OpenFiltered => write!(f, "open|filtered"),
            PortState::ClosedFiltered => write!(f, "closed|filtered"),
            PortState::Other(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PortProtocol {
    Ip,
    Tcp,
    Udp,
    Sctp,
    Other(String),
}

impl Default for PortProtocol {
    fn default() -> Self {
        PortProtocol::Other(String::new())
    }
}

impl From<String> for PortProtocol {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ip" => PortProtocol::Ip,
            "tcp" => PortProtocol::Tcp,
            "udp" => PortProtocol::Udp,
            "sctp" => PortProtocol::Sctp,
            _ => PortProtocol::Other(value),
        }
    }
}

impl fmt::Display for PortProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortProtocol::Ip => write!(f, "ip"),
            PortProtocol::Tcp => write!(f, "tcp"),
            PortProtocol::Udp => write!(f, "udp"),
            PortProtocol::Sctp => write!(f, "sctp"),
            PortProtocol::Other(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum HostnameType {
    User,
    Ptr,
    Other(String),
}

impl Default for HostnameType {
    fn default() -> Self {
        HostnameType::Other(String::new())
    }
}

impl From<String> for HostnameType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "user" => HostnameType::User,
            "PTR" => HostnameType::Ptr,
            _ => HostnameType::Other(value),
        }
    }
}

// Numeric and boolean attributes: an empty value reads as the type's zero value
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    let text = String::deserialize(deserializer)?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(T::default());
    }
    text.parse().map_err(serde::de::Error::custom)
}

// <hostnames><hostname/>...</hostnames> is flattened into Vec<Hostname>
fn hostname_list<'de, D>(deserializer: D) -> std::result::Result<Vec<Hostname>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(rename = "hostname", default)]
        items: Vec<Hostname>,
    }
    Ok(Wrapper::deserialize(deserializer)?.items)
}

// <hostscript>, <prescript> and <postscript> all wrap a list of <script>
fn script_list<'de, D>(deserializer: D) -> std::result::Result<Vec<Script>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(rename = "script", default)]
        items: Vec<Script>,
    }
    Ok(Wrapper::deserialize(deserializer)?.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE nmaprun>
<nmaprun scanner="nmap" args="nmap -Pn -oX - 127.0.0.1" start="1650000000" version="7.92" xmloutputversion="1.05">
<hosthint><status state="up" reason="unknown-response" reason_ttl="0"/>
<address addr="127.0.0.1" addrtype="ipv4"/>
<hostnames>
</hostnames>
</hosthint>
<host starttime="1650000000" endtime="1650000001"><status state="up" reason="user-set" reason_ttl="0"/>
<address addr="127.0.0.1" addrtype="ipv4"/>
<hostnames>
<hostname name="localhost" type="PTR"/>
</hostnames>
</host>
<runstats><finished time="1650000001" timestr="Fri Apr 15 10:00:01 2022" elapsed="0.05" summary="Nmap done; 1 IP address (1 host up) scanned in 0.05 seconds" exit="success"/><hosts up="1" down="0" total="1"/>
</runstats>
</nmaprun>
"#;

    #[test]
    fn test_minimal_document() {
        let run = parse_xml(MINIMAL).unwrap();
        assert_eq!(run.scanner, "nmap");
        assert_eq!(run.version, "7.92");
        assert_eq!(run.host_hints.len(), 1);
        assert_eq!(run.host_hints[0].address().unwrap().addr, "127.0.0.1");
        assert_eq!(run.host_hints[0].status.state, HostState::Up);
        assert!(run.host_hints[0].hostnames.is_empty());

        assert_eq!(run.hosts.len(), 1);
        let host = &run.hosts[0];
        assert_eq!(host.port_groups.len(), 0);
        assert!(!host.has_ports());
        assert!(host.os.is_none());
        assert!(host.trace.is_none());
        assert_eq!(host.hostnames[0].name, "localhost");
        assert_eq!(host.hostnames[0].kind, HostnameType::Ptr);
        assert_eq!(run.run_stats.hosts.up, 1);
        assert!(run.error_message().is_none());
        assert!(run.summary().starts_with("Nmap done"));
    }

    #[test]
    fn test_missing_fields_stay_empty() {
        let run = parse_xml("<nmaprun><host><address addr=\"10.0.0.1\"/></host></nmaprun>").unwrap();
        assert_eq!(run.scanner, "");
        assert_eq!(run.start, 0);
        assert_eq!(run.hosts[0].status.state, HostState::Unknown);
        assert_eq!(run.hosts[0].addresses[0].addr_type, "");
        assert_eq!(run.summary(), "");
    }

    #[test]
    fn test_port_state_strings() {
        assert_eq!(PortState::from("open|filtered".to_string()), PortState::OpenFiltered);
        assert_eq!(PortState::ClosedFiltered.to_string(), "closed|filtered");
        assert_eq!(
            PortState::from("weird".to_string()),
            PortState::Other("weird".to_string())
        );
        assert_eq!(PortProtocol::from("sctp".to_string()).to_string(), "sctp");
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(parse_xml("").is_err());
    }

    #[test]
    fn test_unclosed_document_is_error() {
        assert!(parse_xml("<nmaprun><host><status state=\"up\"/>").is_err());
    }

    #[test]
    fn test_mismatched_tags_are_error() {
        assert!(parse_xml("<nmaprun><host></hosts></nmaprun>").is_err());
    }

    #[test]
    fn test_empty_numeric_attributes_read_as_zero() {
        let xml = r#"<nmaprun start="">
<host starttime="" timedout=""><status state="up" reason="syn-ack" reason_ttl=""/>
<ports><port protocol="tcp" portid="80"><state state="open" reason_ttl=" "/><service name="http" conf=""/></port></ports>
</host>
</nmaprun>"#;
        let run = parse_xml(xml).unwrap();
        let host = &run.hosts[0];
        assert_eq!(run.start, 0);
        assert_eq!(host.start_time, 0);
        assert!(!host.timed_out);
        assert_eq!(host.status.reason_ttl, 0);

        let port = host.ports().next().unwrap();
        assert_eq!(port.port_id, 80);
        assert_eq!(port.state.reason_ttl, 0);
        assert_eq!(port.service.as_ref().unwrap().conf, 0);
    }

    #[test]
    fn test_malformed_numeric_attribute_is_error() {
        let xml = r#"<nmaprun><host><status state="up" reason_ttl="sixty-four"/></host></nmaprun>"#;
        assert!(parse_xml(xml).is_err());
    }
}
