use std::fmt::{self, Display};

use log::debug;
use thiserror::Error;

use crate::config::{FormDefaults, FormMinimums};
use crate::models::LogEntry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    TimeSpent,
    Sets,
    Reps,
    WeightLifted,
    BodyWeight,
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::TimeSpent => "Time Spent",
            Field::Sets => "Sets",
            Field::Reps => "Reps per Set",
            Field::WeightLifted => "Weight Lifted",
            Field::BodyWeight => "Body Weight",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Please enter the exercise name.")]
    EmptyExercise,
    #[error("{field}: '{value}' is not a number.")]
    NotANumber { field: Field, value: String },
    #[error("{field} cannot be negative.")]
    Negative { field: Field },
    #[error("{field} is too large.")]
    TooLarge { field: Field },
}

pub fn parse_exercise(text: &str) -> Result<String, InputError> {
    let name = text.trim();
    if name.is_empty() {
        return Err(InputError::EmptyExercise);
    }
    Ok(name.to_string())
}

/// Whole-number field. A real literal is truncated toward zero, so "12.9" reads as 12.
pub fn parse_count(field: Field, text: &str) -> Result<u32, InputError> {
    let text = text.trim();
    if let Ok(value) = text.parse::<i64>() {
        if value < 0 {
            return Err(InputError::Negative { field });
        }
        return u32::try_from(value).map_err(|_| InputError::TooLarge { field });
    }

    let value = parse_finite(field, text)?.trunc();
    if value < 0.0 {
        Err(InputError::Negative { field })
    } else if value > f64::from(u32::MAX) {
        Err(InputError::TooLarge { field })
    } else {
        Ok(value as u32)
    }
}

pub fn parse_real(field: Field, text: &str) -> Result<f64, InputError> {
    parse_finite(field, text.trim())
}

fn parse_finite(field: Field, text: &str) -> Result<f64, InputError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotANumber {
            field,
            value: text.to_string(),
        }),
    }
}

/// Raw text of the log entry form.
#[derive(Debug, Clone)]
pub struct LogForm {
    pub exercise: String,
    pub time_spent: String,
    pub sets: String,
    pub reps: String,
    pub weight_lifted: String,
    pub body_weight: String,
    defaults: FormDefaults,
    minimums: FormMinimums,
}

impl LogForm {
    pub fn new(defaults: FormDefaults, minimums: FormMinimums) -> Self {
        LogForm {
            exercise: String::new(),
            time_spent: defaults.time_spent.to_string(),
            sets: defaults.sets.to_string(),
            reps: defaults.reps.to_string(),
            weight_lifted: format!("{:.1}", defaults.weight_lifted),
            body_weight: format!("{:.1}", defaults.body_weight),
            defaults,
            minimums,
        }
    }

    pub fn clear(&mut self) {
        *self = LogForm::new(self.defaults, self.minimums);
    }

    /// Parses every field, raising values below the configured minimums.
    /// Clears the form on success; leaves it untouched on error.
    pub fn submit(&mut self) -> Result<LogEntry, InputError> {
        let entry = self.parse().inspect_err(|err| debug!("rejected log form: {}", err))?;
        self.clear();
        Ok(entry)
    }

    fn parse(&self) -> Result<LogEntry, InputError> {
        let min = &self.minimums;
        Ok(LogEntry {
            exercise: parse_exercise(&self.exercise)?,
            time_spent: parse_count(Field::TimeSpent, &self.time_spent)?.max(min.time_spent),
            sets: parse_count(Field::Sets, &self.sets)?.max(min.sets),
            reps: parse_count(Field::Reps, &self.reps)?.max(min.reps),
            weight_lifted: parse_real(Field::WeightLifted, &self.weight_lifted)?
                .max(min.weight_lifted),
            body_weight: parse_real(Field::BodyWeight, &self.body_weight)?.max(min.body_weight),
        })
    }
}
