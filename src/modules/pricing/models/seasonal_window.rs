use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A recurring range of days inside one month during which sales run.
///
/// Both bounds are exclusive: the window is open when
/// `start_day < day < end_day`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalWindow {
    pub label: String,
    /// Calendar month, 1 = January
    pub month: u32,
    pub start_day: u32,
    pub end_day: u32,
}

impl SeasonalWindow {
    pub fn new(label: impl Into<String>, month: u32, start_day: u32, end_day: u32) -> Self {
        Self {
            label: label.into(),
            month,
            start_day,
            end_day,
        }
    }

    /// June 6th to June 14th
    pub fn summer() -> Self {
        Self::new("Summer period", 6, 5, 15)
    }

    /// January 6th to January 14th
    pub fn winter() -> Self {
        Self::new("Winter period", 1, 5, 15)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let day = date.day();
        date.month() == self.month && day > self.start_day && day < self.end_day
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(1..=12).contains(&self.month) {
            return Err(format!(
                "{}: month must be between 1 and 12, got {}",
                self.label, self.month
            ));
        }

        if self.start_day >= self.end_day {
            return Err(format!(
                "{}: start day {} must be before end day {}",
                self.label, self.start_day, self.end_day
            ));
        }

        Ok(())
    }
}
