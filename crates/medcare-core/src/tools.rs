//! Small health calculators: BMI, water intake, sleep duration, medicine expenses.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Weight status derived from BMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_value(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::NormalWeight
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    /// Rounded to one decimal place.
    pub value: f64,
    pub category: BmiCategory,
}

/// Body mass index from height in centimetres and weight in kilograms.
pub fn bmi(height_cm: f64, weight_kg: f64) -> Result<BmiReading, CoreError> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "height must be a positive number of centimetres, got {}",
            height_cm
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "weight must be a positive number of kilograms, got {}",
            weight_kg
        )));
    }

    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);

    Ok(BmiReading {
        value: (raw * 10.0).round() / 10.0,
        category: BmiCategory::from_value(raw),
    })
}

/// Most glasses the tracker will record in a day.
pub const MAX_GLASSES: u32 = 12;

/// Daily water intake counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterTracker {
    current: u32,
    target: u32,
    log: Vec<DateTime<Utc>>,
}

impl WaterTracker {
    pub fn new(current: u32, target: u32) -> Self {
        Self {
            current: current.min(MAX_GLASSES),
            target,
            log: Vec::new(),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// When each glass added through this tracker was logged.
    pub fn log(&self) -> &[DateTime<Utc>] {
        &self.log
    }

    /// Record a glass. Returns false once the daily cap is reached.
    pub fn add_glass(&mut self, at: DateTime<Utc>) -> bool {
        if self.current >= MAX_GLASSES {
            return false;
        }
        self.current += 1;
        self.log.push(at);
        true
    }

    /// Undo the last glass. Returns false when already at zero.
    pub fn remove_glass(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.log.pop();
        true
    }

    /// Percentage of the target reached, capped at 100.
    pub fn progress(&self) -> u8 {
        if self.target == 0 {
            return 100;
        }
        (self.current * 100 / self.target).min(100) as u8
    }
}

impl Default for WaterTracker {
    fn default() -> Self {
        Self::new(4, 8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl fmt::Display for SleepDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Time asleep between bedtime and wake-up. A wake-up earlier than bedtime
/// is taken to be on the next day.
pub fn sleep_duration(bedtime: NaiveTime, wakeup: NaiveTime) -> SleepDuration {
    let mut minutes = (wakeup - bedtime).num_minutes();
    if minutes < 0 {
        minutes += 24 * 60;
    }
    SleepDuration {
        hours: (minutes / 60) as u32,
        minutes: (minutes % 60) as u32,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub medicine: String,
    pub amount: u64,
    pub date: NaiveDate,
}

/// Medicine spending, newest first as entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample() -> Self {
        let mut ledger = Self::new();
        for (medicine, amount, (y, m, d)) in [
            ("Vitamin D3", 250, (2024, 1, 15)),
            ("Omega-3", 450, (2024, 1, 14)),
            ("Multivitamin", 180, (2024, 1, 13)),
        ] {
            if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
                ledger.record(medicine, amount, date);
            }
        }
        ledger
    }

    pub fn record(&mut self, medicine: impl Into<String>, amount: u64, date: NaiveDate) {
        self.expenses.push(Expense {
            medicine: medicine.into(),
            amount,
            date,
        });
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Sum of all amounts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.expenses
            .iter()
            .fold(0u64, |total, e| total.saturating_add(e.amount))
    }
}
