//! `.xlsx` export of a decoded run.
//!
//! Two sheets: `hosthint` (one row per discovery hint, or per host when nmap
//! emitted none) and `host And Ports` (one row per port, a single row for a
//! host without ports).

use rust_xlsxwriter::{
    ColNum, Format, FormatAlign, RowNum, Table, TableColumn, TableStyle, Workbook, Worksheet,
};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::ExportConfig;
use crate::error::Result;
use crate::output::{join_addresses, join_hostnames};
use crate::scanner::results::Port;
use crate::scanner::{Host, NmapRun};

const HINT_HEADERS: [&str; 4] = ["address", "hostnames", "state", "reason"];
const HOST_PORT_HEADERS: [&str; 14] = [
    "address",
    "hostnames",
    "_state",
    "_reason",
    "port",
    "protocol",
    "state",
    "service",
    "product",
    "version",
    "cpe",
    "confidence",
    "reason",
    "nseresult",
];

#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Text(String),
    Number(f64),
}

/// One host's rows on the `host And Ports` sheet: the four host columns
/// shared by every row, then the port columns per row.
#[derive(Debug)]
struct HostBlock {
    host: [String; 4],
    ports: Vec<Vec<Cell>>,
}

impl HostBlock {
    fn from_host(host: &Host) -> Self {
        Self {
            host: host_columns(host),
            ports: host.ports().map(port_columns).collect(),
        }
    }

    /// A host without ports still occupies one row
    fn height(&self) -> u32 {
        self.ports.len().max(1) as u32
    }
}

/// Write `<result_name>.xlsx`, replacing any existing file.
pub fn export_xlsx(run: &NmapRun, config: &ExportConfig) -> Result<PathBuf> {
    let path = PathBuf::from(format!("{}.xlsx", config.result_name));
    let cell_format = Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::VerticalCenter);

    let mut hints = Worksheet::new();
    hints.set_name("hosthint")?;
    write_hint_sheet(&mut hints, run, config, &cell_format)?;

    let mut hosts = Worksheet::new();
    hosts.set_name("host And Ports")?;
    write_host_sheet(&mut hosts, run, config, &cell_format)?;

    let mut workbook = Workbook::new();
    workbook.push_worksheet(hints);
    workbook.push_worksheet(hosts);
    workbook.save(&path)?;

    info!(path = %path.display(), hosts = run.hosts.len(), "xlsx report written");
    Ok(path)
}

fn write_hint_sheet(
    sheet: &mut Worksheet,
    run: &NmapRun,
    config: &ExportConfig,
    format: &Format,
) -> Result<()> {
    for (col, width) in [(0, 20.0), (1, 30.0), (2, 10.0), (3, 20.0)] {
        sheet.set_column_width(col, width)?;
    }
    write_header(sheet, &HINT_HEADERS)?;

    let rows = hint_rows(run);
    for (index, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            sheet.write_string_with_format(index as RowNum + 1, col as ColNum, value, format)?;
        }
    }

    if config.add_table && !rows.is_empty() {
        sheet.add_table(0, 0, rows.len() as RowNum, 3, &styled_table(&HINT_HEADERS))?;
    }
    Ok(())
}

fn write_host_sheet(
    sheet: &mut Worksheet,
    run: &NmapRun,
    config: &ExportConfig,
    format: &Format,
) -> Result<()> {
    for (col, width) in [
        (0, 15.0),
        (1, 30.0),
        (2, 10.0),
        (3, 15.0),
        (4, 10.0),
        (5, 10.0),
        (6, 12.0),
        (7, 15.0),
        (8, 15.0),
        (9, 15.0),
        (10, 30.0),
        (11, 10.0),
        (12, 10.0),
        (13, 30.0),
    ] {
        sheet.set_column_width(col, width)?;
    }
    write_header(sheet, &HOST_PORT_HEADERS)?;

    let plan = HostSheetPlan::new(run, config);
    for placed in &plan.blocks {
        let (first, last) = (placed.first_row, placed.last_row);

        for (col, value) in placed.block.host.iter().enumerate() {
            let col = col as ColNum;
            if placed.merged {
                sheet.merge_range(first, col, last, col, value, format)?;
            } else {
                for r in first..=last {
                    sheet.write_string_with_format(r, col, value, format)?;
                }
            }
        }

        for (offset, cells) in placed.block.ports.iter().enumerate() {
            let r = first + offset as RowNum;
            for (col, cell) in cells.iter().enumerate() {
                let col = col as ColNum + 4;
                match cell {
                    Cell::Text(text) => sheet.write_string_with_format(r, col, text, format)?,
                    Cell::Number(number) => sheet.write_number_with_format(r, col, *number, format)?,
                };
            }
        }
    }

    match plan.table_last_row {
        Some(last) => {
            sheet.add_table(0, 0, last, 13, &styled_table(&HOST_PORT_HEADERS))?;
        }
        None if config.add_table => debug!("table style skipped on host sheet"),
        None => {}
    }
    Ok(())
}

/// A host block placed on the `host And Ports` sheet
#[derive(Debug)]
struct PlacedBlock {
    block: HostBlock,
    first_row: RowNum,
    last_row: RowNum,
    /// Host columns A-D are merged across the block's rows
    merged: bool,
}

/// Row layout of the `host And Ports` sheet, below the header row.
#[derive(Debug)]
struct HostSheetPlan {
    blocks: Vec<PlacedBlock>,
    /// Last row of the styled table, when the sheet gets one
    table_last_row: Option<RowNum>,
}

impl HostSheetPlan {
    fn new(run: &NmapRun, config: &ExportConfig) -> Self {
        let mut blocks = Vec::with_capacity(run.hosts.len());
        let mut row: RowNum = 1;
        for block in run.hosts.iter().map(HostBlock::from_host) {
            let last_row = row + block.height() - 1;
            blocks.push(PlacedBlock {
                merged: config.merge_row && last_row > row,
                block,
                first_row: row,
                last_row,
            });
            row = last_row + 1;
        }

        // Excel tables cannot contain merged cells.
        let table_last_row = (config.add_table && !config.merge_row && row > 1).then(|| row - 1);
        Self {
            blocks,
            table_last_row,
        }
    }
}

fn write_header(sheet: &mut Worksheet, headers: &[&str]) -> Result<()> {
    let bold = Format::new().set_bold();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as ColNum, *header, &bold)?;
    }
    Ok(())
}

fn styled_table(headers: &[&str]) -> Table {
    let columns: Vec<TableColumn> = headers
        .iter()
        .map(|header| TableColumn::new().set_header(*header))
        .collect();
    Table::new()
        .set_style(TableStyle::Medium2)
        .set_first_column(true)
        .set_last_column(true)
        .set_banded_rows(false)
        .set_banded_columns(true)
        .set_columns(&columns)
}

fn hint_rows(run: &NmapRun) -> Vec<[String; 4]> {
    if run.host_hints.is_empty() {
        return run.hosts.iter().map(host_columns).collect();
    }
    run.host_hints
        .iter()
        .map(|hint| {
            [
                join_addresses(&hint.addresses, "\n"),
                join_hostnames(&hint.hostnames, "\n"),
                hint.status.state.to_string(),
                hint.status.reason.clone(),
            ]
        })
        .collect()
}

fn host_columns(host: &Host) -> [String; 4] {
    [
        join_addresses(&host.addresses, "\n"),
        join_hostnames(&host.hostnames, "\n"),
        host.status.state.to_string(),
        host.status.reason.clone(),
    ]
}

fn port_columns(port: &Port) -> Vec<Cell> {
    let service = port.service.clone().unwrap_or_default();
    let nse = port
        .scripts
        .iter()
        .map(|script| format!("{}\n{}", script.id, script.output))
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", "&".repeat(20)));

    vec![
        Cell::Number(f64::from(port.port_id)),
        Cell::Text(port.protocol.to_string()),
        Cell::Text(port.state.state.to_string()),
        Cell::Text(service.name),
        Cell::Text(service.product),
        Cell::Text(service.version),
        Cell::Text(service.cpe.join("\n")),
        Cell::Number(f64::from(service.conf)),
        Cell::Text(port.state.reason.clone()),
        Cell::Text(nse),
    ]
}
