//! Plain-text rendering of asset reports.
//!
//! Percentages are sign-explicit with two decimals, unavailable
//! horizons render as "N/A", prices get thousands separators.

use std::fmt::Write as _;

use rust_decimal::Decimal;

use peakwatch_core::tracker::{AssetReport, AssetSnapshot};

pub fn render_reports(reports: &[AssetReport]) -> String {
    let mut out = String::new();
    for report in reports {
        match report {
            AssetReport::Snapshot(snapshot) => render_snapshot(&mut out, snapshot),
            AssetReport::Failed {
                display_name,
                error,
                ..
            } => {
                let _ = writeln!(out, "{}: Error - {}\n", display_name, error);
            }
        }
    }
    out
}

fn render_snapshot(out: &mut String, snapshot: &AssetSnapshot) {
    let changes = &snapshot.changes;
    let _ = writeln!(out, "{}:", snapshot.display_name);
    let _ = writeln!(out, "  Current: ${}", fmt_price(snapshot.current_price));
    let _ = writeln!(out, "  ATH:     ${}", fmt_price(snapshot.ath));
    let _ = writeln!(out, "  From ATH: {}", fmt_pct(Some(snapshot.pct_from_ath)));
    let _ = writeln!(out, "  24h diff: {}", fmt_pct(changes.day));
    let _ = writeln!(out, "  1 week:   {}", fmt_pct(changes.week));
    let _ = writeln!(out, "  1 month:  {}", fmt_pct(changes.month));
    let _ = writeln!(out, "  3 months: {}", fmt_pct(changes.three_months));
    let _ = writeln!(out, "  6 months: {}", fmt_pct(changes.six_months));
    let _ = writeln!(out, "  1 year:   {}", fmt_pct(changes.year));
    let _ = writeln!(out, "  YTD:      {}\n", fmt_pct(changes.ytd));
}

/// "+1.23%" / "-0.45%" / "N/A".
fn fmt_pct(value: Option<Decimal>) -> String {
    match value {
        Some(value) => {
            let sign = if value.is_sign_negative() { "" } else { "+" };
            format!("{}{:.2}%", sign, value.round_dp(2))
        }
        None => "N/A".to_string(),
    }
}

/// Two decimals, thousands-separated: 20973.53 → "20,973.53".
fn fmt_price(value: Decimal) -> String {
    let rendered = format!("{:.2}", value.round_dp(2));
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));
    let (sign, digits) = int_part
        .strip_prefix('-')
        .map_or(("", int_part), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}
