use crate::models::{Activity, CatRecord, Evaluation, Gender, ReportRow, Thresholds, WeightStatus};

pub const KITTEN_THRESHOLDS: Thresholds = Thresholds {
    low: 1.0,
    medium: 2.0,
    high: 3.0,
};

pub const ADULT_MALE_THRESHOLDS: Thresholds = Thresholds {
    low: 4.5,
    medium: 5.5,
    high: 6.5,
};

pub const ADULT_FEMALE_THRESHOLDS: Thresholds = Thresholds {
    low: 4.0,
    medium: 5.0,
    high: 6.0,
};

/// Half-width of the normal band around a threshold.
pub const BAND_HALF_WIDTH: f64 = 0.5;

pub const DIET_INCREASE: &str =
    "Increase food intake by 10-15%. Consider switching to a higher-calorie diet.";
pub const DIET_MAINTAIN: &str = "Maintain current diet.";
pub const DIET_REDUCE: &str = "Reduce food intake by 10-15%. Consider switching to a lighter diet.";

pub const ADVICE_BUILD_MUSCLE: &str = "Engage in more playtime to build muscle mass.";
pub const ADVICE_INCREASE_ACTIVITY: &str =
    "Increase activity level with more playtime or exercise to improve health.";
pub const ADVICE_MAINTAIN_ACTIVITY: &str = "Maintain current activity level.";
pub const ADVICE_LOSE_WEIGHT: &str =
    "Increase playtime or engage in more physical activities to promote weight loss.";

pub fn is_kitten(age: f64) -> bool {
    age < 1.0
}

pub fn thresholds_for(age: f64, gender: Gender) -> Thresholds {
    if is_kitten(age) {
        return KITTEN_THRESHOLDS;
    }
    match gender {
        Gender::Male => ADULT_MALE_THRESHOLDS,
        Gender::Female => ADULT_FEMALE_THRESHOLDS,
    }
}

pub fn classify(weight: f64, target: f64) -> WeightStatus {
    if weight < target - BAND_HALF_WIDTH {
        WeightStatus::Underweight
    } else if weight <= target + BAND_HALF_WIDTH {
        WeightStatus::Normal
    } else {
        WeightStatus::Overweight
    }
}

pub fn diet_recommendation(status: WeightStatus) -> &'static str {
    match status {
        WeightStatus::Underweight => DIET_INCREASE,
        WeightStatus::Normal => DIET_MAINTAIN,
        WeightStatus::Overweight => DIET_REDUCE,
    }
}

// Only these four pairs carry advice; medium activity never does.
pub fn activity_advice(status: WeightStatus, activity: Activity) -> &'static str {
    match (status, activity) {
        (WeightStatus::Underweight, Activity::Low) => ADVICE_BUILD_MUSCLE,
        (WeightStatus::Normal, Activity::Low) => ADVICE_INCREASE_ACTIVITY,
        (WeightStatus::Normal, Activity::High) => ADVICE_MAINTAIN_ACTIVITY,
        (WeightStatus::Overweight, Activity::Low) => ADVICE_LOSE_WEIGHT,
        _ => "",
    }
}

pub fn evaluate(age: f64, weight: f64, gender: Gender, activity: Activity) -> Evaluation {
    let target = thresholds_for(age, gender).target(activity);
    let status = classify(weight, target);

    Evaluation {
        status,
        diet_recommendation: diet_recommendation(status),
        activity_advice: activity_advice(status, activity),
    }
}

pub fn build_rows(records: &[CatRecord]) -> Vec<ReportRow> {
    records
        .iter()
        .map(|record| {
            let evaluation = evaluate(record.age, record.weight, record.gender, record.activity);
            ReportRow {
                name: record.name.clone(),
                age: record.age,
                gender: record.gender,
                status: evaluation.status,
                activity: record.activity,
                diet_recommendation: evaluation.diet_recommendation,
                activity_advice: evaluation.activity_advice,
                weight: record.weight,
            }
        })
        .collect()
}

/// Splits rows into (kittens, adults), keeping input order on both sides.
pub fn partition(rows: &[ReportRow]) -> (Vec<ReportRow>, Vec<ReportRow>) {
    rows.iter().cloned().partition(|row| is_kitten(row.age))
}
