//! Clipboard and file destinations for the exported summary.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use prequal_core::summary::{ClipboardSink, ExportError};
use tracing::debug;

use crate::config::ClipboardConfig;

/// Writes the summary to the stdin of a clipboard program such as
/// `pbcopy` or `xclip -selection clipboard`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    command: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(config: &ClipboardConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
        }
    }
}

impl ClipboardSink for CommandClipboard {
    fn write_text(
        &mut self,
        text: &str,
    ) -> Result<(), ExportError> {
        debug!(command = %self.command, "spawning clipboard program");
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ExportError::Unavailable(format!("cannot run '{}': {e}", self.command)))?;

        // Dropping stdin closes the pipe so the program sees end of input.
        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| ExportError::Unavailable("clipboard stdin not captured".into()))?;
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(ExportError::Unavailable(format!(
                "'{}' exited with {status}",
                self.command
            )));
        }
        Ok(())
    }
}

/// Writes the summary to a file, replacing any previous contents.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ClipboardSink for FileSink {
    fn write_text(
        &mut self,
        text: &str,
    ) -> Result<(), ExportError> {
        let mut file = File::create(&self.path)?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_unavailable() {
        let mut clipboard = CommandClipboard::new(&ClipboardConfig {
            command: "prequal-no-such-clipboard-program".to_string(),
            args: vec![],
        });

        let err = clipboard.write_text("text").unwrap_err();

        assert!(matches!(err, ExportError::Unavailable(_)));
    }

    #[test]
    fn file_sink_writes_exact_text() {
        let path = std::env::temp_dir().join(format!("prequal-sink-{}.txt", std::process::id()));
        let mut sink = FileSink::new(&path);

        sink.write_text("A\nB").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A\nB");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn file_sink_reports_unwritable_path() {
        let mut sink = FileSink::new(Path::new("/nonexistent-dir/prequal/summary.txt"));

        assert!(matches!(sink.write_text("x"), Err(ExportError::Io(_))));
    }
}
