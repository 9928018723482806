use std::io;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{NmapError, Result};
use crate::scanner::results::{parse_xml, NmapRun};
use crate::scanner::{Nmap, OutputMode};

/// Cancellation and deadline for one run. Whichever fires first kills nmap.
///
/// The default context never expires.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    cancel: Option<CancellationToken>,
    timeout: Option<Duration>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    async fn done(&self) {
        match (&self.cancel, self.timeout) {
            (Some(token), Some(timeout)) => {
                tokio::select! {
                    _ = token.cancelled() => {}
                    _ = tokio::time::sleep(timeout) => {}
                }
            }
            (Some(token), None) => token.cancelled().await,
            (None, Some(timeout)) => tokio::time::sleep(timeout).await,
            (None, None) => std::future::pending::<()>().await,
        }
    }
}

/// What one completed run produced.
#[derive(Debug)]
pub struct RunOutcome {
    /// Captured stdout. XML unless an explicit output format was chosen.
    pub result: String,
    /// Captured stderr, if any. Not an error by itself.
    pub warning: Option<String>,
    /// The decoded document; only set when nmap was left on the default format
    pub xml: Option<NmapRun>,
    /// Where the raw stdout was saved, when `save_xml_raw` is on
    pub saved_to: Option<PathBuf>,
    /// Set when saving the raw stdout failed; the rest of the outcome is intact
    pub persist_error: Option<NmapError>,
    pub status: ExitStatus,
}

impl Nmap {
    /// Run without a deadline. Blocks until nmap exits on its own.
    pub async fn run(self) -> Result<RunOutcome> {
        self.run_with_context(RunContext::default()).await
    }

    pub async fn run_with_cancel(self, token: CancellationToken) -> Result<RunOutcome> {
        self.run_with_context(RunContext::new().with_cancel(token)).await
    }

    pub async fn run_with_timeout(self, timeout: Duration) -> Result<RunOutcome> {
        self.run_with_context(RunContext::new().with_timeout(timeout)).await
    }

    pub async fn run_with_context(mut self, ctx: RunContext) -> Result<RunOutcome> {
        let bin = self.resolve_bin()?;
        let default_format = self.output_mode == OutputMode::Default;
        if default_format {
            self.args.push("-oX".to_string());
            self.args.push("-".to_string());
        }

        debug!(bin = %bin.display(), args = ?self.args, "launching nmap");
        let mut child = Command::new(&bin)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| NmapError::Spawn {
                path: bin.clone(),
                source,
            })?;

        // The run is complete once nmap has exited and both pipes are at EOF.
        let stdout_task = tokio::spawn(read_pipe(child.stdout.take()));
        let stderr_task = tokio::spawn(read_pipe(child.stderr.take()));
        let readers = [stdout_task.abort_handle(), stderr_task.abort_handle()];

        let (status, stdout, stderr) = tokio::select! {
            biased;
            _ = ctx.done() => {
                warn!(bin = %bin.display(), "run cancelled or timed out, killing nmap");
                if let Err(e) = child.kill().await {
                    debug!(error = %e, "kill after exit");
                }
                for reader in &readers {
                    reader.abort();
                }
                return Err(NmapError::Timeout);
            }
            captured = async {
                let status = child.wait().await?;
                let stdout = join_pipe(stdout_task).await?;
                let stderr = join_pipe(stderr_task).await?;
                Ok::<_, NmapError>((status, stdout, stderr))
            } => captured?,
        };

        if !status.success() {
            debug!(%status, "nmap exited unsuccessfully");
        }

        let mut xml = None;
        if default_format {
            let run = parse_xml(&stdout)?;
            if let Some(msg) = run.error_message() {
                return Err(NmapError::Run(msg.to_string()));
            }
            xml = Some(run);
        }

        let warning = (!stderr.is_empty()).then_some(stderr);
        if let Some(warning) = &warning {
            debug!(%warning, "nmap wrote to stderr");
        }

        let mut saved_to = None;
        let mut persist_error = None;
        if !stdout.is_empty() && self.config.save_xml_raw {
            let path = self.config.raw_output_path(default_format);
            match tokio::fs::write(&path, stdout.as_bytes()).await {
                Ok(()) => saved_to = Some(path),
                Err(source) => {
                    warn!(path = %path.display(), error = %source, "could not save raw output");
                    persist_error = Some(NmapError::Persist { path, source });
                }
            }
        }

        info!(
            %status,
            bytes = stdout.len(),
            hosts = xml.as_ref().map_or(0, |run| run.hosts.len()),
            "nmap run finished"
        );

        Ok(RunOutcome {
            result: stdout,
            warning,
            xml,
            saved_to,
            persist_error,
            status,
        })
    }

    fn resolve_bin(&self) -> Result<PathBuf> {
        let name = self
            .bin_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("nmap"));
        which::which(&name).map_err(|source| NmapError::NotFound {
            name: name.display().to_string(),
            source,
        })
    }
}

async fn read_pipe<R>(pipe: Option<R>) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

async fn join_pipe(task: tokio::task::JoinHandle<io::Result<Vec<u8>>>) -> Result<String> {
    let bytes = task
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))??;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::ExportConfig;
    use std::time::Instant;
    use tempfile::TempDir;

    const HOST_XML: &str = r#"<?xml version="1.0"?>
<nmaprun scanner="nmap" args="nmap 127.0.0.1" version="7.94">
<host><status state="up" reason="localhost-response"/><address addr="127.0.0.1" addrtype="ipv4"/>
<ports><port protocol="tcp" portid="22"><state state="open" reason="syn-ack"/><service name="ssh" product="OpenSSH" version="9.6" conf="10"/></port></ports>
</host>
<runstats><finished summary="1 IP address (1 host up) scanned" exit="success"/><hosts up="1" down="0" total="1"/></runstats>
</nmaprun>"#;

    // Runs `/bin/sh <script>` in place of nmap.
    fn fake_nmap(dir: &TempDir, script: &str, config: ExportConfig) -> Nmap {
        let path = dir.path().join("fake-nmap.sh");
        std::fs::write(&path, script).unwrap();
        let mut nmap = Nmap::with_config(config);
        nmap.bin_path("/bin/sh").add_arg(path.to_string_lossy());
        nmap
    }

    fn no_save() -> ExportConfig {
        ExportConfig {
            save_xml_raw: false,
            ..ExportConfig::default()
        }
    }

    fn xml_script(xml: &str) -> String {
        format!("cat <<'EOF'\n{}\nEOF\n", xml)
    }

    #[tokio::test]
    async fn test_missing_executable_is_not_found() {
        let mut nmap = Nmap::new();
        nmap.bin_path("/nonexistent/dir/nmap").add_arg("127.0.0.1");

        let err = nmap.run().await.unwrap_err();
        assert!(matches!(err, NmapError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_default_format_requests_xml_on_stdout() {
        let dir = TempDir::new().unwrap();
        let script = format!("printf '%s ' \"$@\" >&2\n{}", xml_script(HOST_XML));
        let nmap = fake_nmap(&dir, &script, no_save());

        let outcome = nmap.run().await.unwrap();
        let warning = outcome.warning.unwrap();
        assert!(warning.trim_end().ends_with("-oX -"));

        let xml = outcome.xml.unwrap();
        assert_eq!(xml.hosts.len(), 1);
        let port = xml.hosts[0].ports().next().unwrap();
        assert_eq!(port.port_id, 22);
        assert_eq!(port.service_version(), "OpenSSH 9.6");
        assert!(outcome.result.contains("<nmaprun"));
    }

    #[tokio::test]
    async fn test_embedded_error_message_becomes_run_error() {
        let dir = TempDir::new().unwrap();
        let xml = r#"<nmaprun><runstats><finished exit="error" errormsg="Failed to resolve &quot;nosuchhost&quot;."/></runstats></nmaprun>"#;
        let script = format!("echo 'some warning' >&2\n{}", xml_script(xml));
        let nmap = fake_nmap(&dir, &script, no_save());

        match nmap.run().await {
            Err(NmapError::Run(msg)) => assert_eq!(msg, "Failed to resolve \"nosuchhost\"."),
            other => panic!("expected run error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_stdout_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let nmap = fake_nmap(&dir, "echo 'Starting Nmap <broken'\n", no_save());

        let err = nmap.run().await.unwrap_err();
        assert!(matches!(err, NmapError::Decode(_)));
    }

    #[tokio::test]
    async fn test_timeout_kills_process() {
        let dir = TempDir::new().unwrap();
        let pid_file = dir.path().join("pid");
        let script = format!("echo $$ > '{}'\nexec sleep 30\n", pid_file.display());
        let nmap = fake_nmap(&dir, &script, no_save());

        let started = Instant::now();
        let err = nmap
            .run_with_timeout(Duration::from_millis(500))
            .await
            .unwrap_err();
        assert!(err.is_timeout());
        assert!(started.elapsed() < Duration::from_secs(10));

        #[cfg(target_os = "linux")]
        {
            let pid = std::fs::read_to_string(&pid_file).unwrap();
            let proc_dir = PathBuf::from(format!("/proc/{}", pid.trim()));
            assert!(!proc_dir.exists(), "nmap process still alive");
        }
    }

    #[tokio::test]
    async fn test_cancelled_token_yields_timeout_without_output() {
        let dir = TempDir::new().unwrap();
        let script = format!("sleep 30\n{}", xml_script(HOST_XML));
        let nmap = fake_nmap(&dir, &script, no_save());

        let token = CancellationToken::new();
        token.cancel();
        let err = nmap.run_with_cancel(token).await.unwrap_err();
        assert!(matches!(err, NmapError::Timeout));
    }

    #[tokio::test]
    async fn test_explicit_format_skips_decode() {
        let dir = TempDir::new().unwrap();
        let script = "printf '%s ' \"$@\"\n";
        let mut nmap = fake_nmap(&dir, script, no_save());
        nmap.output_normal(["-"]).unwrap();

        let outcome = nmap.run().await.unwrap();
        assert!(outcome.xml.is_none());
        assert!(outcome.warning.is_none());
        assert!(outcome.result.contains("-oN -"));
        assert!(!outcome.result.contains("-oX"));
    }

    #[tokio::test]
    async fn test_raw_output_saved_with_xml_suffix() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("office-scan");
        let config = ExportConfig {
            result_name: base.to_string_lossy().into_owned(),
            ..ExportConfig::default()
        };
        let nmap = fake_nmap(&dir, &xml_script(HOST_XML), config);

        let outcome = nmap.run().await.unwrap();
        let saved = outcome.saved_to.unwrap();
        assert_eq!(saved, dir.path().join("office-scan.xml"));
        assert_eq!(std::fs::read_to_string(saved).unwrap(), outcome.result);
    }

    #[tokio::test]
    async fn test_raw_output_saved_without_suffix_for_explicit_format() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("grepable");
        let config = ExportConfig {
            result_name: base.to_string_lossy().into_owned(),
            ..ExportConfig::default()
        };
        let mut nmap = fake_nmap(&dir, "echo 'Host: 127.0.0.1 ()\tStatus: Up'\n", config);
        nmap.output_grepable(["-"]).unwrap();

        let outcome = nmap.run().await.unwrap();
        assert_eq!(outcome.saved_to.unwrap(), base);
    }

    #[tokio::test]
    async fn test_deadline_covers_pipes_held_by_descendants() {
        let dir = TempDir::new().unwrap();
        let nmap = fake_nmap(&dir, "sleep 5 &\nexit 0\n", no_save());

        let started = Instant::now();
        let err = nmap
            .run_with_timeout(Duration::from_millis(300))
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "expected timeout, got {:?}", err);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_failed_raw_save_keeps_outcome() {
        let dir = TempDir::new().unwrap();
        let config = ExportConfig {
            result_name: dir
                .path()
                .join("missing-dir")
                .join("Result")
                .to_string_lossy()
                .into_owned(),
            ..ExportConfig::default()
        };
        let script = format!("echo 'note' >&2\n{}", xml_script(HOST_XML));
        let nmap = fake_nmap(&dir, &script, config);

        let outcome = nmap.run().await.unwrap();
        assert_eq!(outcome.xml.as_ref().unwrap().hosts.len(), 1);
        assert!(outcome.result.contains("<nmaprun"));
        assert_eq!(outcome.warning.as_deref(), Some("note\n"));
        assert!(outcome.saved_to.is_none());
        match outcome.persist_error {
            Some(NmapError::Persist { path, .. }) => {
                assert_eq!(path, dir.path().join("missing-dir").join("Result.xml"))
            }
            other => panic!("expected persist error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_successful_save_has_no_persist_error() {
        let dir = TempDir::new().unwrap();
        let config = ExportConfig {
            result_name: dir.path().join("ok").to_string_lossy().into_owned(),
            ..ExportConfig::default()
        };
        let outcome = fake_nmap(&dir, &xml_script(HOST_XML), config).run().await.unwrap();
        assert!(outcome.persist_error.is_none());
        assert!(outcome.saved_to.is_some());
    }
}
