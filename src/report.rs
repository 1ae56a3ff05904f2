//! Comma-separated rows in and out. One input row is one sequence; one output
//! row holds its length and six normalized measures.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::metrics::{compute_all, DisorderMetricsResult};

/// Column names downstream tooling depends on. Order and spelling are fixed.
///
/// `rem_norm` is the fraction of elements to remove, `(n - LIS) / n`, not the
/// LIS fraction, so a sorted row scores 0 in every column.
pub const HEADER: &str = "n,inv_norm,runs_norm,rem_norm,osc_norm,dis_norm,ham_norm";

/// Parses one row of integers. Empty cells count as zero; `line` is only used in errors.
pub fn parse_row(row: &str, line: usize) -> Result<Vec<i32>> {
    row.trim_end_matches(['\r', '\n'])
        .split(',')
        .map(|cell| {
            let cell = cell.trim();
            if cell.is_empty() {
                return Ok(0);
            }
            cell.parse().map_err(|_| Error::ParseRow {
                line,
                cell: cell.to_string(),
            })
        })
        .collect()
}

/// One output row in `HEADER` order. Floats use the shortest representation
/// that reads back to the same `f64` (`1`, `0.8`, `0.3333333333333333`), not a
/// fixed number of significant digits.
pub fn format_row(result: &DisorderMetricsResult) -> String {
    let m = &result.normalized;
    format!(
        "{},{},{},{},{},{},{}",
        result.n, m.inversions, m.runs, m.rem, m.osc, m.dis, m.ham
    )
}

/// Reads sequences row by row, writes the header and one metrics row per
/// non-empty input row. Returns the number of rows written.
pub fn evaluate<R: BufRead, W: Write>(input: R, mut output: W) -> Result<usize> {
    writeln!(output, "{HEADER}")?;
    let mut written = 0;
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = parse_row(&line, idx + 1)?;
        let result = compute_all(&row);
        debug!("row {}: {:?}", idx + 1, result.raw);
        writeln!(output, "{}", format_row(&result))?;
        written += 1;
    }
    output.flush()?;
    info!("Evaluated {} rows", written);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows() {
        assert_eq!(parse_row("3,-1,,7\r\n", 1).unwrap(), vec![3, -1, 0, 7]);
        assert!(matches!(
            parse_row("1,x,3", 4),
            Err(Error::ParseRow { line: 4, ref cell }) if cell == "x"
        ));
    }

    #[test]
    fn evaluates_in_header_order() {
        let input = "1,2,3,4,5\n\n5,4,3,2,1\n";
        let mut out = Vec::new();
        let rows = evaluate(input.as_bytes(), &mut out).unwrap();
        assert_eq!(rows, 2);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "5,0,0,0,0,0,0");
        assert_eq!(lines[2], "5,1,1,0.8,0,1,0.8");
    }

    #[test]
    fn rem_column_counts_removals_at_full_precision() {
        // LIS of [2,3,1] is 2, one element of three must go
        let row = format_row(&compute_all(&[2, 3, 1]));
        let cells: Vec<&str> = row.split(',').collect();
        assert_eq!(cells.len(), HEADER.split(',').count());
        assert_eq!(cells[3], "0.3333333333333333");
        assert_eq!(cells[3].parse::<f64>().unwrap(), 1.0 / 3.0);
    }
}
