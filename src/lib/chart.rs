use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use im::HashMap;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::aggregate::group_small;
use crate::errors::ChartError;

pub const OTHER_LABEL: &str = "Other";

/// Slices below this share of the total get no on-wedge percentage label.
const PCT_LABEL_MIN: f64 = 4.0;

const ICONS: [(&str, &str); 10] = [
    ("food", "🍔"),
    ("transport", "🚗"),
    ("rent", "🏠"),
    ("shopping", "🛍️"),
    ("entertainment", "🎮"),
    ("study", "📚"),
    ("medical", "🩺"),
    ("utilities", "💡"),
    ("coffee", "☕"),
    ("other", "🧾"),
];

const PALETTE: [RGBColor; 10] = [
    RGBColor(66, 133, 244),
    RGBColor(219, 68, 55),
    RGBColor(244, 180, 0),
    RGBColor(15, 157, 88),
    RGBColor(171, 71, 188),
    RGBColor(255, 112, 67),
    RGBColor(3, 169, 244),
    RGBColor(139, 195, 74),
    RGBColor(121, 85, 72),
    RGBColor(96, 125, 139),
];

/// Prefixes well-known category names with an emoji icon. Unknown categories
/// pass through undecorated.
pub fn iconize(category: &str) -> String {
    let key = category.trim().to_lowercase();
    match ICONS.iter().find(|(name, _)| *name == key) {
        Some((_, icon)) => format!("{} {}", icon, category),
        None => category.to_string(),
    }
}

/// Thousands-separated rendition of an amount, rounded to whole units.
fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Renders the category totals as a donut chart and saves it as a PNG.
///
/// Small slices are folded into [`OTHER_LABEL`] first. Layout follows the
/// shared convention: wedges largest-first from 12 o'clock, percentage labels
/// on the wedges, legend with amounts on the right, grand total in the donut
/// hole.
pub fn render_donut(
    totals: &HashMap<String, f64>,
    title: &str,
    output: &Path,
    min_ratio: f64,
) -> Result<(), ChartError> {
    let grouped = group_small(totals, min_ratio, OTHER_LABEL);

    let mut items: Vec<(String, f64)> =
        grouped.iter().map(|(k, v)| (k.clone(), *v)).collect();
    items.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    let total: f64 = items.iter().map(|(_, v)| v).sum();

    let sizes: Vec<f64> = items.iter().map(|(_, v)| *v).collect();
    let colors: Vec<RGBColor> = (0..items.len())
        .map(|i| PALETTE[i % PALETTE.len()])
        .collect();
    let wedge_labels: Vec<String> = items
        .iter()
        .map(|(_, v)| {
            let pct = if total != 0.0 { v / total * 100.0 } else { 0.0 };
            if pct < PCT_LABEL_MIN {
                String::new()
            } else {
                format!("{:.1}%", pct)
            }
        })
        .collect();

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let root = BitMapBackend::new(output, (1100, 640)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let title_style = ("sans-serif", 34)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(title.to_string(), (550, 16), title_style))
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let center = (340, 340);
    let radius = 250.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &wedge_labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
    pie.donut_hole(135.0);
    root.draw(&pie)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let centered = Pos::new(HPos::Center, VPos::Center);
    root.draw(&Text::new(
        "Total".to_string(),
        (center.0, center.1 - 18),
        ("sans-serif", 22).into_font().color(&BLACK).pos(centered),
    ))
    .map_err(|e| ChartError::Render(e.to_string()))?;
    root.draw(&Text::new(
        format_amount(total),
        (center.0, center.1 + 14),
        ("sans-serif", 32).into_font().color(&BLACK).pos(centered),
    ))
    .map_err(|e| ChartError::Render(e.to_string()))?;

    let legend_x = 680;
    let mut legend_y = 120;
    for (i, (category, value)) in items.iter().enumerate() {
        let pct = if total != 0.0 { value / total * 100.0 } else { 0.0 };
        root.draw(&Rectangle::new(
            [(legend_x, legend_y), (legend_x + 16, legend_y + 16)],
            colors[i].filled(),
        ))
        .map_err(|e| ChartError::Render(e.to_string()))?;
        root.draw(&Text::new(
            format!(
                "{}  -  {}  ({:.1}%)",
                iconize(category),
                format_amount(*value),
                pct
            ),
            (legend_x + 26, legend_y + 1),
            ("sans-serif", 20).into_font().color(&BLACK),
        ))
        .map_err(|e| ChartError::Render(e.to_string()))?;
        legend_y += 30;
    }

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    debug!(output = %output.display(), slices = items.len(), "saved chart");
    Ok(())
}
