//! Number formatting shared by the renderers, the calculator and the chart readouts.

use crate::models::settings::NumberLocale;

/// Fixed two-decimal rendering without grouping (`65000` → `"65000.00"`).
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", normalize_zero(value))
}

/// USD price as shown in the ticker and list (`"$65000.00"`).
pub fn usd(value: f64) -> String {
    format!("${}", fixed2(value))
}

/// Signed percentage (`-1.5` → `"-1.50%"`).
pub fn percent(value: f64) -> String {
    format!("{}%", fixed2(value))
}

/// Two decimals with locale grouping (`377000` → `"377.000,00"` in pt-BR).
pub fn grouped(value: f64, locale: &NumberLocale) -> String {
    let rendered = format!("{:.2}", normalize_zero(value).abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let mut out = String::with_capacity(rendered.len() + int_part.len() / 3 + 1);
    if is_negative_display(value) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(locale.grouping_separator);
        }
        out.push(ch);
    }
    out.push(locale.decimal_separator);
    out.push_str(frac_part);
    out
}

/// Localized currency (`188500` → `"R$ 188.500,00"`, `-14500` → `"-R$ 14.500,00"`).
pub fn currency(value: f64, locale: &NumberLocale) -> String {
    let digits = grouped(value.abs(), locale);
    if is_negative_display(value) {
        format!("-{} {digits}", locale.currency_symbol)
    } else {
        format!("{} {digits}", locale.currency_symbol)
    }
}

/// `true` when `value` still shows as negative after rounding to 2 decimals.
fn is_negative_display(value: f64) -> bool {
    value < 0.0 && (value.abs() * 100.0).round() > 0.0
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
