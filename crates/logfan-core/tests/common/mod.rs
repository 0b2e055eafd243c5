use logfan_core::{LogError, Record, Result, Sink, SinkKind};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Ordered log of everything the recording sinks saw, shared across them.
pub type Journal = Arc<Mutex<Vec<String>>>;

#[allow(dead_code)]
pub fn new_journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

#[allow(dead_code)]
pub fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

/// Sink that records `name:call` entries and fails on demand.
pub struct RecordingSink {
    name: &'static str,
    journal: Journal,
    pub fail_start: bool,
    pub fail_stop: bool,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new(name: &'static str, journal: &Journal) -> Self {
        Self {
            name,
            journal: journal.clone(),
            fail_start: false,
            fail_stop: false,
        }
    }

    pub fn failing_start(mut self) -> Self {
        self.fail_start = true;
        self
    }

    pub fn failing_stop(mut self) -> Self {
        self.fail_stop = true;
        self
    }

    pub fn boxed(self) -> Box<dyn Sink> {
        Box::new(self)
    }

    fn note(&self, what: impl AsRef<str>) {
        self.journal
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.name, what.as_ref()));
    }
}

impl Sink for RecordingSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn start(&mut self) -> Result<()> {
        self.note("start");
        if self.fail_start {
            return Err(LogError::InvalidPath);
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.note("stop");
        if self.fail_stop {
            return Err(LogError::io(
                "recording stop",
                std::io::Error::new(std::io::ErrorKind::Other, "stop failed"),
            ));
        }
        Ok(())
    }

    fn emit(&mut self, record: &Record<'_>) {
        self.note(format!("emit {}", record));
    }

    fn destroy(self: Box<Self>) {
        self.note("destroy");
    }
}

/// Read a log file into its lines; missing file reads as empty.
#[allow(dead_code)]
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
