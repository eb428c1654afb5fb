//models.rs
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Typed values for one record, as produced by the log form.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub exercise: String,
    pub time_spent: u32,
    pub sets: u32,
    pub reps: u32,
    pub weight_lifted: f64,
    pub body_weight: f64,
}

/// One logged exercise session. Never mutated once it is in the ledger.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorkoutRecord {
    pub exercise: String,
    pub time_spent: u32,
    pub sets: u32,
    pub reps: u32,
    pub weight_lifted: f64,
    pub body_weight: f64,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub volume: f64,
}

impl WorkoutRecord {
    pub fn new(entry: LogEntry, timestamp: NaiveDateTime) -> Self {
        let volume = volume(entry.sets, entry.reps, entry.weight_lifted);
        WorkoutRecord {
            exercise: entry.exercise,
            time_spent: entry.time_spent,
            sets: entry.sets,
            reps: entry.reps,
            weight_lifted: entry.weight_lifted,
            body_weight: entry.body_weight,
            timestamp,
            volume,
        }
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

pub fn volume(sets: u32, reps: u32, weight_lifted: f64) -> f64 {
    f64::from(sets) * f64::from(reps) * weight_lifted
}

fn serialize_timestamp<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}
