use crate::scanner::Nmap;

// TIMING AND PERFORMANCE
//
// Options which take <time> are in seconds, or append 'ms' (milliseconds),
// 's' (seconds), 'm' (minutes), or 'h' (hours) to the value (e.g. 30m).
impl Nmap {
    /// `-T<0-5>` as two tokens: higher is faster
    pub fn timing_template(&mut self, template: u8) -> &mut Self {
        self.add_args(["-T".to_string(), template.to_string()])
    }

    pub fn min_hostgroup(&mut self, size: u32) -> &mut Self {
        self.add_args(["--min-hostgroup".to_string(), size.to_string()])
    }

    pub fn max_hostgroup(&mut self, size: u32) -> &mut Self {
        self.add_args(["--max-hostgroup".to_string(), size.to_string()])
    }

    pub fn min_parallelism(&mut self, probes: u32) -> &mut Self {
        self.add_args(["--min-parallelism".to_string(), probes.to_string()])
    }

    pub fn max_parallelism(&mut self, probes: u32) -> &mut Self {
        self.add_args(["--max-parallelism".to_string(), probes.to_string()])
    }

    pub fn min_rtt_timeout(&mut self, time: impl Into<String>) -> &mut Self {
        self.add_args(["--min-rtt-timeout".to_string(), time.into()])
    }

    pub fn max_rtt_timeout(&mut self, time: impl Into<String>) -> &mut Self {
        self.add_args(["--max-rtt-timeout".to_string(), time.into()])
    }

    pub fn initial_rtt_timeout(&mut self, time: impl Into<String>) -> &mut Self {
        self.add_args(["--initial-rtt-timeout".to_string(), time.into()])
    }

    /// `--max-retries <tries>`: caps number of port scan probe retransmissions
    pub fn max_retries(&mut self, tries: u32) -> &mut Self {
        self.add_args(["--max-retries".to_string(), tries.to_string()])
    }

    /// `--host-timeout <time>`: give up on target after this long
    pub fn host_timeout(&mut self, time: impl Into<String>) -> &mut Self {
        self.add_args(["--host-timeout".to_string(), time.into()])
    }

    pub fn script_timeout(&mut self, time: impl Into<String>) -> &mut Self {
        self.add_args(["--script-timeout".to_string(), time.into()])
    }

    /// `--scan-delay <time>`: adjust delay between probes
    pub fn scan_delay(&mut self, time: impl Into<String>) -> &mut Self {
        self.add_args(["--scan-delay".to_string(), time.into()])
    }

    pub fn max_scan_delay(&mut self, time: impl Into<String>) -> &mut Self {
        self.add_args(["--max-scan-delay".to_string(), time.into()])
    }

    /// `--min-rate <number>`: send packets no slower than `number` per second
    pub fn min_rate(&mut self, rate: impl Into<String>) -> &mut Self {
        self.add_args(["--min-rate".to_string(), rate.into()])
    }

    /// `--max-rate <number>`: send packets no faster than `number` per second
    pub fn max_rate(&mut self, rate: impl Into<String>) -> &mut Self {
        self.add_args(["--max-rate".to_string(), rate.into()])
    }

    pub fn defeat_rst_ratelimit(&mut self) -> &mut Self {
        self.add_arg("--defeat-rst-ratelimit")
    }

    pub fn defeat_icmp_ratelimit(&mut self) -> &mut Self {
        self.add_arg("--defeat-icmp-ratelimit")
    }

    /// `--nsock-engine <engine>`: epoll, kqueue, poll or select
    pub fn nsock_engine(&mut self, engine: impl Into<String>) -> &mut Self {
        self.add_args(["--nsock-engine".to_string(), engine.into()])
    }
}
