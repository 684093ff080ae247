use crate::models::{CoordinateRow, Direction};

/// Format a coordinate the way it appears in output names and log rows.
///
/// Whole numbers keep one decimal place so that `40.0` does not collapse to `40`,
/// and magnitudes below 1e-4 or from 1e16 up use exponent form (`5e-05`, `1e+16`),
/// which keeps names compatible with archives produced by earlier collector runs.
///
/// # Examples
/// ```
/// use svi_collector::utils::format_coordinate;
///
/// assert_eq!(format_coordinate(40.0), "40.0");
/// assert_eq!(format_coordinate(-73.985428), "-73.985428");
/// assert_eq!(format_coordinate(0.00005), "5e-05");
/// ```
pub fn format_coordinate(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        exponent_form(value)
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Shortest round-trip mantissa with a signed, at least two digit exponent
fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => formatted,
    }
}

/// Row label used in file names and log rows, e.g. `p12`
pub fn row_label(index: usize) -> String {
    format!("p{}", index)
}

/// File name for one directional image: p{row}_{direction}_{lat}_{lon}.jpg
pub fn image_filename(row: &CoordinateRow, direction: Direction) -> String {
    format!(
        "{}_{}_{}_{}.jpg",
        row_label(row.index),
        direction,
        format_coordinate(row.latitude),
        format_coordinate(row.longitude)
    )
}

/// File name for a row composite: p{row}_concate_{lat}_{lon}.jpg
pub fn composite_filename(row: &CoordinateRow) -> String {
    format!(
        "{}_concate_{}_{}.jpg",
        row_label(row.index),
        format_coordinate(row.latitude),
        format_coordinate(row.longitude)
    )
}

pub fn preview_filename(row: &CoordinateRow) -> String {
    format!("{}_preview.jpg", row_label(row.index))
}
