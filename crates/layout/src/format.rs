//! Display formatting for report values. These rules are reproduced exactly
//! for compatibility with existing consumers of the rendered output.

use activa_types::NO_STATUS;
use chrono::NaiveDate;

/// Human label for a raw equipment status value: the three well-known
/// statuses map to fixed labels, anything else non-empty is title-cased.
pub fn status_label(value: &str) -> String {
    if value.is_empty() {
        return NO_STATUS.to_string();
    }
    match value.to_lowercase().as_str() {
        "operational" => "Operacional".to_string(),
        "maintenance" => "En mantenimiento".to_string(),
        "obsolete" => "Obsoleto".to_string(),
        _ => title_case(value),
    }
}

/// `"$ 1,234.50"` — thousands separators and exactly two decimals.
pub fn currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let frac = cents % 100;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("$ {sign}{grouped}.{frac:02}")
}

/// `"2024-03"` → `"Mar 2024"`. Keys that do not parse as a valid
/// year-month pass through unchanged.
pub fn period_label(period: &str) -> String {
    match NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => {
            log::warn!("unparseable period key {period:?}, passing through");
            period.to_string()
        }
    }
}

fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
