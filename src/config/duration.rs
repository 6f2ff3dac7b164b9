// src/config/duration.rs

use std::time::Duration;

/// Parse a duration string like `"10s"`, `"250ms"`, `"1h30m"` or `"1.5s"`.
///
/// The input is a sequence of `<number><unit>` terms. Numbers may carry a
/// decimal fraction; units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`.
/// A single leading `+` or `-` is allowed, and a bare `"0"` is zero.
/// Negative durations clamp to zero, so a negative detach delay detaches
/// immediately.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let (negative, unsigned) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if unsigned.is_empty() {
        return Err(format!("invalid duration '{s}': expected a number"));
    }
    if unsigned == "0" {
        return Ok(Duration::ZERO);
    }

    let mut rest = unsigned;
    let mut total_nanos: u128 = 0;

    while !rest.is_empty() {
        let num_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (num_part, after) = rest.split_at(num_len);
        if num_part.is_empty() {
            return Err(format!("invalid duration '{s}': expected a number"));
        }

        let value: f64 = num_part
            .parse()
            .map_err(|e| format!("invalid duration number '{num_part}': {e}"))?;

        let unit_len = after
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(after.len());
        let (unit, tail) = after.split_at(unit_len);
        if unit.is_empty() {
            return Err(format!("duration '{s}' is missing a unit suffix"));
        }

        let per_unit = unit_nanos(unit).ok_or_else(|| {
            format!("unsupported duration unit '{unit}'; expected ns, us, ms, s, m, or h")
        })?;

        total_nanos = total_nanos.saturating_add((value * per_unit as f64).round() as u128);
        rest = tail;
    }

    let nanos = u64::try_from(total_nanos).map_err(|_| format!("duration '{s}' is too large"))?;
    if negative {
        return Ok(Duration::ZERO);
    }
    Ok(Duration::from_nanos(nanos))
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(60 * 60 * 1_000_000_000),
        _ => None,
    }
}
