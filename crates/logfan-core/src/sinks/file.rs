//! File sink: append-only text file

use crate::record::Record;
use crate::sink::Sink;
use logfan_core_types::SinkKind;
use logfan_errors::{LogError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends `[LEVEL] file:line | message` lines to a single file.
///
/// The file is opened in append mode when the sink is created, so a sink
/// either holds an open handle or was never constructed. It is never
/// truncated. Every emit is flushed.
pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    started: bool,
}

impl FileSink {
    /// Open `path` for appending, creating it if missing.
    ///
    /// # Errors
    ///
    /// - [`LogError::InvalidPath`] if `path` is empty
    /// - [`LogError::UnableToOpenFile`] if the file cannot be opened
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(LogError::InvalidPath);
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogError::UnableToOpenFile {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: Some(BufWriter::new(file)),
            started: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(LogError::FileAlreadyOpen {
                path: self.path.clone(),
            });
        }
        self.started = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush().map_err(|e| LogError::io("file flush", e)),
            None => Ok(()),
        }
    }

    fn emit(&mut self, record: &Record<'_>) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        let _ = writeln!(writer, "{record}");
        let _ = writer.flush();
    }

    fn destroy(mut self: Box<Self>) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logfan_core_types::Severity;
    use logfan_errors::LogErrorKind;

    #[test]
    fn test_open_rejects_empty_path() {
        let err = FileSink::open("").err().unwrap();
        assert_eq!(err.kind(), LogErrorKind::InvalidPath);
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.log");

        let err = FileSink::open(&path).err().unwrap();
        assert_eq!(err.kind(), LogErrorKind::UnableToOpenFile);
    }

    #[test]
    fn test_emit_appends_and_flushes_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        std::fs::write(&path, "existing\n").unwrap();

        let mut sink = FileSink::open(&path).unwrap();
        sink.start().unwrap();
        sink.emit(&Record::new(Severity::Warn, "lib.rs", 7, "low disk"));

        // flushed without stop
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "existing\n[WARN] lib.rs:7 | low disk\n");
    }

    #[test]
    fn test_second_start_reports_already_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::open(dir.path().join("out.log")).unwrap();

        sink.start().unwrap();
        let err = sink.start().unwrap_err();
        assert_eq!(err.kind(), LogErrorKind::FileAlreadyOpen);
    }

    #[test]
    fn test_stop_twice_then_destroy() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = Box::new(FileSink::open(dir.path().join("out.log")).unwrap());

        sink.start().unwrap();
        sink.stop().unwrap();
        sink.stop().unwrap();
        sink.destroy();
    }
}
