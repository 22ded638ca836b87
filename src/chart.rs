use std::path::Path;

use anyhow::Context;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::models::{Gender, ReportRow, WeightStatus};

pub const NORMAL_COLOR: RGBColor = RGBColor(0x6B, 0xCB, 0x77);
pub const UNDERWEIGHT_COLOR: RGBColor = RGBColor(0xF2, 0xD3, 0x7A);
pub const OVERWEIGHT_COLOR: RGBColor = RGBColor(0xFF, 0x4F, 0x58);

pub const MALE_COLOR: RGBColor = RGBColor(0x5F, 0x9F, 0xFF);
pub const FEMALE_COLOR: RGBColor = RGBColor(0xF4, 0x8C, 0xBB);

pub const LEGEND: [(&str, RGBColor); 3] = [
    ("Normal Weight", NORMAL_COLOR),
    ("Underweight", UNDERWEIGHT_COLOR),
    ("Overweight", OVERWEIGHT_COLOR),
];

pub const CHART_SIZE: (u32, u32) = (1000, 600);
const NAME_AREA_HEIGHT: u32 = 110;

pub fn status_color(status: WeightStatus) -> RGBColor {
    match status {
        WeightStatus::Normal => NORMAL_COLOR,
        WeightStatus::Underweight => UNDERWEIGHT_COLOR,
        WeightStatus::Overweight => OVERWEIGHT_COLOR,
    }
}

pub fn gender_color(gender: Gender) -> RGBColor {
    match gender {
        Gender::Male => MALE_COLOR,
        Gender::Female => FEMALE_COLOR,
    }
}

/// Top of the y axis: the heaviest cat plus 10% headroom.
pub fn y_upper_bound(rows: &[ReportRow]) -> f64 {
    let heaviest = rows.iter().map(|row| row.weight).fold(0.0, f64::max);
    if heaviest > 0.0 {
        heaviest * 1.1
    } else {
        1.0
    }
}

fn draw_error(err: impl std::fmt::Display) -> anyhow::Error {
    anyhow::anyhow!("chart drawing failed: {err}")
}

/// Draws one bar per cat (height = weight, color = status) with the names
/// underneath colored by gender, and saves the PNG at `path`.
pub fn render_weight_chart(rows: &[ReportRow], title: &str, path: &Path) -> anyhow::Result<()> {
    draw_chart(rows, title, path)
        .with_context(|| format!("failed to render chart {}", path.display()))?;
    debug!(bars = rows.len(), path = %path.display(), "chart written");
    Ok(())
}

fn draw_chart(rows: &[ReportRow], title: &str, path: &Path) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    // An empty group still gets one slot so the axes have a range.
    let slots = rows.len().max(1) as u32;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(NAME_AREA_HEIGHT)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..slots).into_segmented(), 0f64..y_upper_bound(rows))
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(&BLACK.mix(0.2))
        .light_line_style(&BLACK.mix(0.05))
        .x_label_formatter(&|_| String::new())
        .x_desc("Cat Name")
        .y_desc("Weight (kg)")
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(rows.iter().enumerate().map(|(index, row)| {
            let slot = index as u32;
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(slot), 0.0),
                    (SegmentValue::Exact(slot + 1), row.weight),
                ],
                status_color(row.status).filled(),
            );
            bar.set_margin(0, 0, 6, 6);
            bar
        }))
        .map_err(draw_error)?;

    for (label, color) in LEGEND {
        chart
            .draw_series(std::iter::empty::<Rectangle<(SegmentValue<u32>, f64)>>())
            .map_err(draw_error)?
            .label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(draw_error)?;

    // Names run downwards under each bar, like rotated tick labels.
    let name_font = ("sans-serif", 14)
        .into_font()
        .transform(FontTransform::Rotate90);
    for (index, row) in rows.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(SegmentValue::CenterOf(index as u32), 0.0));
        let style = name_font
            .color(&gender_color(row.gender))
            .pos(Pos::new(HPos::Left, VPos::Center));
        root.draw(&Text::new(row.name.clone(), (x, y + 8), style))
            .map_err(draw_error)?;
    }

    root.present().map_err(draw_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health;
    use crate::models::Activity;

    fn sample_row(name: &str, weight: f64, gender: Gender, status: WeightStatus) -> ReportRow {
        ReportRow {
            name: name.to_string(),
            age: 2.0,
            gender,
            status,
            activity: Activity::Medium,
            diet_recommendation: health::diet_recommendation(status),
            activity_advice: "",
            weight,
        }
    }

    #[test]
    fn bar_colors_follow_status() {
        assert_eq!(status_color(WeightStatus::Normal), RGBColor(0x6B, 0xCB, 0x77));
        assert_eq!(status_color(WeightStatus::Underweight), RGBColor(0xF2, 0xD3, 0x7A));
        assert_eq!(status_color(WeightStatus::Overweight), RGBColor(0xFF, 0x4F, 0x58));
    }

    #[test]
    fn name_colors_follow_gender() {
        assert_eq!(gender_color(Gender::Male), MALE_COLOR);
        assert_eq!(gender_color(Gender::Female), FEMALE_COLOR);
        assert_ne!(MALE_COLOR, FEMALE_COLOR);
    }

    #[test]
    fn legend_lists_each_status_once() {
        let labels: Vec<&str> = LEGEND.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, ["Normal Weight", "Underweight", "Overweight"]);
        for status in [
            WeightStatus::Normal,
            WeightStatus::Underweight,
            WeightStatus::Overweight,
        ] {
            let matches = LEGEND
                .iter()
                .filter(|(_, color)| *color == status_color(status))
                .count();
            assert_eq!(matches, 1);
        }
    }

    #[test]
    fn y_axis_leaves_headroom() {
        let rows = vec![
            sample_row("Rex", 7.0, Gender::Male, WeightStatus::Normal),
            sample_row("Luna", 3.0, Gender::Female, WeightStatus::Underweight),
        ];
        assert!((y_upper_bound(&rows) - 7.7).abs() < 1e-9);
        assert_eq!(y_upper_bound(&[]), 1.0);
    }

    #[test]
    #[ignore = "needs a system sans-serif font"]
    fn renders_png_for_empty_and_filled_groups() {
        let dir = tempfile::tempdir().unwrap();
        let filled = dir.path().join("adults_weight_chart.png");
        let empty = dir.path().join("kittens_weight_chart.png");
        let rows = vec![
            sample_row("Rex", 7.0, Gender::Male, WeightStatus::Normal),
            sample_row("Luna", 3.0, Gender::Female, WeightStatus::Underweight),
        ];

        render_weight_chart(&rows, "Adults Weight Status", &filled).unwrap();
        render_weight_chart(&[], "Kittens Weight Status", &empty).unwrap();

        assert!(std::fs::metadata(&filled).unwrap().len() > 0);
        assert!(std::fs::metadata(&empty).unwrap().len() > 0);
    }
}
