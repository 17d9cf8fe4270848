// src/cli/parsers.rs
use std::{fmt::Display, str::FromStr};

use facet_filter_domain::{
    MediaType,
    filter::{SCORE_MAX, SCORE_MIN},
};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    // NaN は比較できないので範囲チェックの前に拒否する
    if value.partial_cmp(&min).is_none() {
        return Err(format!("invalid number '{s}'"));
    }
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a `usize` constrained to the inclusive range [1, 512].
pub fn parse_usize_1_to_512(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(512))
}

/// Parse a score bound within [0, 100].
pub fn parse_score(s: &str) -> Result<f64, String> {
    parse_bounded_number(s, SCORE_MIN, Some(SCORE_MAX))
}

/// Parse a media type name, case-insensitively.
pub fn parse_media_type(s: &str) -> Result<MediaType, String> {
    s.parse::<MediaType>().map_err(|e| e.to_string())
}
