use chrono::NaiveDate;

use crate::modules::pricing::models::SeasonalWindow;

/// The set of sale windows the shop runs during the year.
///
/// Windows may overlap; a date is on sale when any window contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonalDiscountCalendar {
    windows: Vec<SeasonalWindow>,
}

impl SeasonalDiscountCalendar {
    pub fn new(windows: Vec<SeasonalWindow>) -> Self {
        Self { windows }
    }

    /// A calendar with no sales at all
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn windows(&self) -> &[SeasonalWindow] {
        &self.windows
    }

    pub fn is_discount_active(&self, reference_date: NaiveDate) -> bool {
        self.active_window(reference_date).is_some()
    }

    /// First window open on the given date
    pub fn active_window(&self, reference_date: NaiveDate) -> Option<&SeasonalWindow> {
        self.windows
            .iter()
            .find(|window| window.contains(reference_date))
    }

    pub fn validate(&self) -> Result<(), String> {
        self.windows.iter().try_for_each(SeasonalWindow::validate)
    }
}

impl Default for SeasonalDiscountCalendar {
    fn default() -> Self {
        Self::new(vec![SeasonalWindow::summer(), SeasonalWindow::winter()])
    }
}
