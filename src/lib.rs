//! Build nmap command lines, run them under a cancellable deadline, and
//! decode the XML nmap writes into a typed result tree.
//!
//! ```no_run
//! # async fn demo() -> nmapwrap::Result<()> {
//! use nmapwrap::Nmap;
//!
//! let mut nmap = Nmap::new();
//! nmap.targets(["scanme.nmap.org"]).service_version().top_ports(100)?;
//! let outcome = nmap.run().await?;
//! if let Some(run) = &outcome.xml {
//!     println!("{} hosts", run.hosts.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod spreadsheet;

pub use config::ExportConfig;
pub use error::{NmapError, Result};
pub use output::{export_txt, render_pretty};
pub use scanner::{parse_xml, Nmap, NmapRun, OutputMode, RunContext, RunOutcome};
pub use spreadsheet::export_xlsx;
