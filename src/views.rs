use chrono::NaiveDateTime;

use crate::ledger::Ledger;
use crate::models::WorkoutRecord;

pub const TABLE_COLUMNS: [&str; 8] = [
    "Timestamp",
    "Exercise",
    "Time Spent (min)",
    "Sets",
    "Reps",
    "Weight Lifted (kg)",
    "Body Weight (kg)",
    "Volume",
];

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Metric {
    BodyWeight,
    Volume,
    TimeSpent,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::BodyWeight, Metric::Volume, Metric::TimeSpent];

    pub fn title(&self) -> &'static str {
        match self {
            Metric::BodyWeight => "Body Weight Over Time",
            Metric::Volume => "Volume Over Time",
            Metric::TimeSpent => "Time Spent at Gym Over Time",
        }
    }

    pub fn value(&self, record: &WorkoutRecord) -> f64 {
        match self {
            Metric::BodyWeight => record.body_weight,
            Metric::Volume => record.volume,
            Metric::TimeSpent => f64::from(record.time_spent),
        }
    }
}

/// Newest first, for the logs table.
pub fn table_rows(ledger: &Ledger) -> Vec<&WorkoutRecord> {
    let mut rows: Vec<_> = ledger.records().iter().collect();
    rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    rows
}

pub fn table_cells(record: &WorkoutRecord) -> [String; 8] {
    [
        record.formatted_timestamp(),
        record.exercise.clone(),
        record.time_spent.to_string(),
        record.sets.to_string(),
        record.reps.to_string(),
        format!("{:.1}", record.weight_lifted),
        format!("{:.1}", record.body_weight),
        format!("{:.1}", record.volume),
    ]
}

/// Oldest first, for the progress charts. Equal timestamps keep insertion order.
pub fn series(ledger: &Ledger, metric: Metric) -> Vec<(NaiveDateTime, f64)> {
    let mut points: Vec<_> = ledger
        .records()
        .iter()
        .map(|r| (r.timestamp, metric.value(r)))
        .collect();
    points.sort_by_key(|(timestamp, _)| *timestamp);
    points
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::models::LogEntry;
    use chrono::NaiveDate;

    fn entry(exercise: &str, time_spent: u32, body_weight: f64) -> LogEntry {
        LogEntry {
            exercise: exercise.to_string(),
            time_spent,
            sets: 2,
            reps: 5,
            weight_lifted: 10.0,
            body_weight,
        }
    }

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 3, d)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap()
    }

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.append_at(entry("Squats", 40, 71.0), day(2));
        ledger.append_at(entry("Bench", 55, 70.0), day(1));
        ledger.append_at(entry("Rows", 30, 70.5), day(3));
        ledger
    }

    #[test]
    fn test_table_rows_newest_first() {
        let ledger = ledger();
        let names: Vec<_> = table_rows(&ledger).iter().map(|r| r.exercise.as_str()).collect();
        assert_eq!(names, ["Rows", "Squats", "Bench"]);
        // insertion order is untouched
        assert_eq!(ledger.records()[0].exercise, "Squats");
    }

    #[test]
    fn test_series_oldest_first() {
        let ledger = ledger();
        assert_eq!(
            series(&ledger, Metric::BodyWeight),
            vec![(day(1), 70.0), (day(2), 71.0), (day(3), 70.5)]
        );
        assert_eq!(
            series(&ledger, Metric::TimeSpent),
            vec![(day(1), 55.0), (day(2), 40.0), (day(3), 30.0)]
        );
        assert!(series(&ledger, Metric::Volume).iter().all(|(_, v)| *v == 100.0));
    }

    #[test]
    fn test_series_equal_timestamps_keep_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.append_at(entry("A", 10, 80.0), day(1));
        ledger.append_at(entry("B", 20, 79.0), day(1));
        let values: Vec<_> = series(&ledger, Metric::TimeSpent).into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, [10.0, 20.0]);
    }

    #[test]
    fn test_empty_ledger_has_no_rows() {
        let ledger = Ledger::new();
        assert!(table_rows(&ledger).is_empty());
        assert!(series(&ledger, Metric::Volume).is_empty());
    }

    #[test]
    fn test_table_cells() {
        let mut ledger = Ledger::new();
        ledger.append_at(entry("Bench", 55, 70.0), day(1));
        let cells = table_cells(&ledger.records()[0]);
        assert_eq!(cells[0], "2023-03-01 18:30:00");
        assert_eq!(cells[1], "Bench");
        assert_eq!(cells[7], "100.0");
        assert_eq!(cells.len(), TABLE_COLUMNS.len());
    }
}
