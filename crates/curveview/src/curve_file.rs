//! Curve file reader.
//!
//! A curve file is a flat stream of whitespace-separated reals, 11 per
//! curve: four X coefficients, four Y coefficients, `t_min`, `t_max` and the
//! sample count. Line breaks carry no meaning beyond error positions.

use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use curveview_geom::{Cubic, CurveDef, GeomError, ParamRange};

/// Reals per curve record.
pub const RECORD_LEN: usize = 11;

#[derive(Debug, Error)]
pub enum CurveFileError {
    #[error("line {line}: `{token}` is not a number")]
    BadNumber { token: String, line: usize },

    #[error("record {record} is truncated: found {found} of {RECORD_LEN} values")]
    Truncated { record: usize, found: usize },

    #[error("record {record} (starting on line {line}) is invalid")]
    InvalidRecord {
        record: usize,
        line: usize,
        #[source]
        source: GeomError,
    },
}

/// Parses every record in `text`. Empty input yields no curves.
pub fn parse_curves(text: &str) -> Result<Vec<CurveDef>, CurveFileError> {
    let mut values = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| CurveFileError::BadNumber {
                token: token.to_string(),
                line: idx + 1,
            })?;
            values.push((value, idx + 1));
        }
    }

    values
        .chunks(RECORD_LEN)
        .enumerate()
        .map(|(idx, chunk)| parse_record(idx + 1, chunk))
        .collect()
}

fn parse_record(record: usize, chunk: &[(f64, usize)]) -> Result<CurveDef, CurveFileError> {
    if chunk.len() < RECORD_LEN {
        return Err(CurveFileError::Truncated {
            record,
            found: chunk.len(),
        });
    }

    let v: Vec<f64> = chunk.iter().map(|(value, _)| *value).collect();
    let range = ParamRange::from_real(v[8], v[9], v[10]).map_err(|source| {
        CurveFileError::InvalidRecord {
            record,
            line: chunk[0].1,
            source,
        }
    })?;

    Ok(CurveDef::new(
        Cubic::new([v[0], v[1], v[2], v[3]]),
        Cubic::new([v[4], v[5], v[6], v[7]]),
        range,
    ))
}

/// Reads and parses the curve file at `path`.
pub fn load_curves(path: &Path) -> anyhow::Result<Vec<CurveDef>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read curve file {}", path.display()))?;

    let defs = parse_curves(&text).with_context(|| format!("malformed curve file {}", path.display()))?;
    anyhow::ensure!(!defs.is_empty(), "curve file {} contains no curves", path.display());

    log::debug!("parsed {} curve records from {}", defs.len(), path.display());
    Ok(defs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "0 1 0 0  0 0 1 0  -1 1 3";

    // ── parse_curves ──────────────────────────────────────────────────────

    #[test]
    fn parses_single_record() {
        let defs = parse_curves(LINE).unwrap();
        assert_eq!(defs.len(), 1);

        let def = &defs[0];
        assert_eq!(def.x.coeffs, [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(def.y.coeffs, [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(def.range.t_min(), -1.0);
        assert_eq!(def.range.t_max(), 1.0);
        assert_eq!(def.range.sample_count(), 3);
    }

    #[test]
    fn records_may_span_lines() {
        let text = "1 0 0 0\n0 1 0 0\n0 2 5.9\n\n2 0 0 0 3 0 0 0 0 1 2\n";
        let defs = parse_curves(text).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].range.sample_count(), 5);
        assert_eq!(defs[1].x.coeffs, [2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_input_has_no_curves() {
        assert!(parse_curves("").unwrap().is_empty());
        assert!(parse_curves("  \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn bad_token_reports_line() {
        let err = parse_curves("0 1 0 0\n0 0 x 0\n").unwrap_err();
        match err {
            CurveFileError::BadNumber { token, line } => {
                assert_eq!(token, "x");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn trailing_partial_record_is_truncated() {
        let text = format!("{LINE}\n1 2 3");
        let err = parse_curves(&text).unwrap_err();
        assert!(matches!(err, CurveFileError::Truncated { record: 2, found: 3 }));
    }

    #[test]
    fn invalid_range_reports_record_and_line() {
        let text = format!("{LINE}\n\n0 1 0 0 0 0 1 0 2 2 10");
        let err = parse_curves(&text).unwrap_err();
        match err {
            CurveFileError::InvalidRecord { record, line, .. } => {
                assert_eq!(record, 2);
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn too_few_samples_is_invalid() {
        let err = parse_curves("0 1 0 0 0 0 1 0 0 1 1.9").unwrap_err();
        assert!(matches!(err, CurveFileError::InvalidRecord { record: 1, .. }));
    }

    // ── load_curves ───────────────────────────────────────────────────────

    #[test]
    fn missing_file_names_the_path() {
        let err = load_curves(Path::new("/nonexistent/curves.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/curves.txt"));
    }
}
