use colored::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::scanner::results::{Address, Hostname, Port};
use crate::scanner::{Host, NmapRun};

const NSE_SEPARATOR: &str = " &&&& ";

/// Console report for a decoded run.
///
/// The hosthint section falls back to one line per host when nmap emitted
/// no hints. The run summary is always the last line.
pub fn render_pretty(run: &NmapRun, config: &ExportConfig) -> String {
    let mut output = String::new();

    if config.show_hosthint {
        let hints = hint_lines(run);
        if !hints.is_empty() {
            output.push_str(&format!("{}\n", "hosthint:".truecolor(0, 255, 65).bold()));
            for line in hints {
                output.push_str(&format!("\t{}\n", line));
            }
        }
    }

    if config.show_hostport && !run.hosts.is_empty() {
        output.push_str(&format!("{}\n", "host and port:".truecolor(0, 255, 65).bold()));
        for host in &run.hosts {
            output.push_str(&format!("{}\n", host_line(host).truecolor(255, 255, 255).bold()));
            if !host.has_ports() {
                output.push_str(&format!("\t{}\n", "no port information".truecolor(128, 128, 128)));
                continue;
            }
            output.push_str(&format!(
                "\t{:<13} {:<13} {:<20} {:<25} {:<20} {:<10} {:<12} {}\n",
                "port", "state", "service", "version", "cpe", "confidence", "reason", "nseresult"
            ));
            for port in host.ports() {
                output.push_str(&format!("\t{}\n", port_row(port)));
            }
        }
    }

    output.push_str(run.summary());
    output.push('\n');
    output
}

/// Write `<result_name>.txt`: one line per host address, its ports appended
/// as `[port,proto,state,service,productversion]` tuples.
pub fn export_txt(run: &NmapRun, config: &ExportConfig) -> Result<PathBuf> {
    let path = PathBuf::from(format!("{}.txt", config.result_name));
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);

    for host in &run.hosts {
        let tuples: Vec<String> = host.ports().map(txt_tuple).collect();
        for address in &host.addresses {
            if tuples.is_empty() {
                writeln!(writer, "{}", address.addr)?;
            } else {
                writeln!(writer, "{}[{}]", address.addr, tuples.join(","))?;
            }
        }
    }
    writer.flush()?;

    info!(path = %path.display(), hosts = run.hosts.len(), "txt report written");
    Ok(path)
}

pub(crate) fn join_addresses(addresses: &[Address], sep: &str) -> String {
    addresses
        .iter()
        .map(|a| a.addr.as_str())
        .collect::<Vec<_>>()
        .join(sep)
}

pub(crate) fn join_hostnames(hostnames: &[Hostname], sep: &str) -> String {
    hostnames
        .iter()
        .map(|h| h.name.as_str())
        .collect::<Vec<_>>()
        .join(sep)
}

fn hint_lines(run: &NmapRun) -> Vec<String> {
    if run.host_hints.is_empty() {
        return run.hosts.iter().map(host_line).collect();
    }
    run.host_hints
        .iter()
        .map(|hint| {
            let addr = hint.address().map(|a| a.addr.as_str()).unwrap_or_default();
            join_fields(&[addr, &hint.status.state.to_string(), &join_hostnames(&hint.hostnames, " ")])
        })
        .collect()
}

fn host_line(host: &Host) -> String {
    join_fields(&[
        &join_addresses(&host.addresses, " "),
        &host.status.state.to_string(),
        &join_hostnames(&host.hostnames, " "),
    ])
}

fn join_fields(fields: &[&str]) -> String {
    fields
        .iter()
        .filter(|f| !f.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn port_row(port: &Port) -> String {
    let (name, cpe, conf) = match &port.service {
        Some(service) => (service.name.as_str(), service.cpe.join(" "), service.conf.to_string()),
        None => ("", String::new(), String::new()),
    };
    let nse = port
        .scripts
        .iter()
        .map(|script| format!("{} {}", script.id, script.output.replace('\n', " ").trim()))
        .collect::<Vec<_>>()
        .join(NSE_SEPARATOR);

    format!(
        "{:<13} {:<13} {:<20} {:<25} {:<20} {:<10} {:<12} {}",
        format!("{}/{}", port.port_id, port.protocol),
        port.state.state.to_string(),
        name,
        port.service_version(),
        cpe,
        conf,
        port.state.reason,
        nse
    )
    .trim_end()
    .to_string()
}

fn txt_tuple(port: &Port) -> String {
    let (name, version) = match &port.service {
        Some(service) if !service.product.is_empty() => {
            (service.name.as_str(), format!("{}{}", service.product, service.version))
        }
        Some(service) => (service.name.as_str(), "null".to_string()),
        None => ("", "null".to_string()),
    };
    format!(
        "[{},{},{},{},{}]",
        port.port_id, port.protocol, port.state.state, name, version
    )
}
