use chrono::{DateTime, Local, NaiveDateTime, SubsecRound};
use log::{debug, info, log_enabled, Level};

use crate::models::{LogEntry, WorkoutRecord};

pub const NO_LOGS_SUMMARY: &str = "No logs to summarize.";

/// Ordered, append-only collection of the records logged in one session.
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<WorkoutRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Stamps the entry with the current local time and appends it.
    /// No range checks: zero weights and any counts are accepted as given.
    pub fn append(&mut self, entry: LogEntry) -> &WorkoutRecord {
        self.append_at(entry, Local::now().naive_local().trunc_subsecs(0))
    }

    pub(crate) fn append_at(&mut self, entry: LogEntry, timestamp: NaiveDateTime) -> &WorkoutRecord {
        self.records.push(WorkoutRecord::new(entry, timestamp));
        let index = self.records.len() - 1;
        let record = &self.records[index];
        if log_enabled!(Level::Debug) {
            match serde_json::to_string(record) {
                Ok(json) => debug!("appended record #{}: {}", index + 1, json),
                Err(err) => debug!("appended record #{} (unserializable: {})", index + 1, err),
            }
        }
        record
    }

    pub fn records(&self) -> &[WorkoutRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_volume(&self) -> f64 {
        self.records.iter().map(|r| r.volume).sum()
    }

    /// Body weight is taken from the last record appended, not the latest timestamp.
    pub fn summary(&self) -> String {
        let Some(latest) = self.records.last() else {
            return NO_LOGS_SUMMARY.to_string();
        };
        format!(
            "Total Entries: {} | Total Volume: {:.1} | Latest Body Weight: {:.1} kg",
            self.records.len(),
            self.total_volume(),
            latest.body_weight
        )
    }
}

/// Owns the ledger for one user session. Dropping it discards the logs.
#[derive(Debug)]
pub struct Session {
    started_at: DateTime<Local>,
    ledger: Ledger,
}

impl Session {
    pub fn new() -> Self {
        let started_at = Local::now();
        info!("session started at {}", started_at.format("%H:%M:%S"));
        Session {
            started_at,
            ledger: Ledger::new(),
        }
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Ends this session and starts a fresh one in place, discarding the logs.
    pub fn restart(&mut self) {
        info!("session ended, discarding {} log(s)", self.ledger.len());
        self.ledger = Ledger::new();
        self.started_at = Local::now();
        info!("session started at {}", self.started_at.format("%H:%M:%S"));
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        info!("session ended, discarding {} log(s)", self.ledger.len());
    }
}
