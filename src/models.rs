use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// `M` is male; every other value falls through to female.
    pub fn from_field(value: &str) -> Self {
        if value == "M" {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Gender::Male => "♂",
            Gender::Female => "♀",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Low,
    Medium,
    High,
}

impl Activity {
    #[cfg(test)]
    pub const ALL: [Activity; 3] = [Activity::Low, Activity::Medium, Activity::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Activity::Low => "low",
            Activity::Medium => "medium",
            Activity::High => "high",
        }
    }
}

impl FromStr for Activity {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "low" => Ok(Activity::Low),
            "medium" => Ok(Activity::Medium),
            "high" => Ok(Activity::High),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightStatus {
    Underweight,
    Normal,
    Overweight,
}

impl WeightStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WeightStatus::Underweight => "underweight",
            WeightStatus::Normal => "normal",
            WeightStatus::Overweight => "overweight",
        }
    }
}

impl fmt::Display for WeightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatRecord {
    pub name: String,
    pub age: f64,
    pub weight: f64,
    pub gender: Gender,
    pub activity: Activity,
    pub food_quantity: f64,
    pub food_type: String,
}

/// Central target weight per activity level for one age group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Thresholds {
    pub fn target(&self, activity: Activity) -> f64 {
        match activity {
            Activity::Low => self.low,
            Activity::Medium => self.medium,
            Activity::High => self.high,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub status: WeightStatus,
    pub diet_recommendation: &'static str,
    pub activity_advice: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub age: f64,
    pub gender: Gender,
    pub status: WeightStatus,
    pub activity: Activity,
    pub diet_recommendation: &'static str,
    pub activity_advice: &'static str,
    pub weight: f64,
}

impl ReportRow {
    pub fn gender_symbol(&self) -> &'static str {
        self.gender.symbol()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCounts {
    pub underweight: usize,
    pub normal: usize,
    pub overweight: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub kittens: usize,
    pub adults: usize,
    pub statuses: StatusCounts,
    pub report_path: PathBuf,
    pub chart_paths: Vec<PathBuf>,
}
