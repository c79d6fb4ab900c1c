//! Daily medicine schedule and adherence summary.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::ids::DoseId;

/// A single scheduled dose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dose {
    pub id: DoseId,
    pub name: String,
    pub dosage: String,
    pub time: NaiveTime,
    pub taken: bool,
}

impl Dose {
    pub fn new(id: u32, name: impl Into<String>, dosage: impl Into<String>, time: NaiveTime) -> Self {
        Self {
            id: DoseId::new(id),
            name: name.into(),
            dosage: dosage.into(),
            time,
            taken: false,
        }
    }

    /// Builder method to mark the dose as already taken.
    pub fn already_taken(mut self) -> Self {
        self.taken = true;
        self
    }
}

/// Today's doses, kept in time order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySchedule {
    doses: Vec<Dose>,
}

impl DailySchedule {
    pub fn new(mut doses: Vec<Dose>) -> Self {
        doses.sort_by_key(|d| d.time);
        Self { doses }
    }

    /// The four-dose schedule shown to new users.
    pub fn sample() -> Self {
        Self::new(vec![
            Dose::new(1, "Vitamin D3", "1000 IU", hm(8, 0)).already_taken(),
            Dose::new(2, "Omega-3", "500mg", hm(12, 0)).already_taken(),
            Dose::new(3, "Multivitamin", "1 tablet", hm(18, 0)),
            Dose::new(4, "Calcium", "600mg", hm(21, 0)),
        ])
    }

    pub fn doses(&self) -> &[Dose] {
        &self.doses
    }

    pub fn taken_count(&self) -> usize {
        self.doses.iter().filter(|d| d.taken).count()
    }

    /// Percentage of doses taken, rounded. Zero for an empty schedule.
    pub fn completion_rate(&self) -> u8 {
        if self.doses.is_empty() {
            return 0;
        }
        let rate = self.taken_count() as f64 * 100.0 / self.doses.len() as f64;
        rate.round() as u8
    }

    /// Untaken doses scheduled after `now`, earliest first.
    pub fn upcoming(&self, now: NaiveTime) -> impl Iterator<Item = &Dose> {
        self.doses.iter().filter(move |d| !d.taken && d.time > now)
    }

    /// The next untaken dose at or after `now`, with the time left until it.
    pub fn next_due(&self, now: NaiveTime) -> Option<(&Dose, Duration)> {
        self.doses
            .iter()
            .find(|d| !d.taken && d.time >= now)
            .map(|d| (d, d.time - now))
    }

    pub fn mark_taken(&mut self, id: DoseId) -> Result<&Dose, CoreError> {
        let dose = self
            .doses
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| CoreError::DoseNotFound(id.to_string()))?;
        dose.taken = true;
        Ok(dose)
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Format a time-left duration the way reminders show it, e.g. `2h 15m`.
pub fn format_time_left(left: Duration) -> String {
    let minutes = left.num_minutes().max(0);
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
