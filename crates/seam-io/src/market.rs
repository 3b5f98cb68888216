//! Matrix-Market coordinate reader.
//!
//! Supports the `matrix coordinate` object with `real`, `integer`, and
//! `pattern` fields and `general` or `symmetric` symmetry. Indices in the
//! file are 1-based; `symmetric` entries are mirrored across the diagonal;
//! `pattern` entries get the value 1.

use seam_core::{Coo, Scalar};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {detail}")]
    Parse { line: usize, detail: String },

    #[error("unsupported matrix market header: {0}")]
    Unsupported(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Real,
    Integer,
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symmetry {
    General,
    Symmetric,
}

fn parse_err(line: usize, detail: impl Into<String>) -> MarketError {
    MarketError::Parse {
        line,
        detail: detail.into(),
    }
}

/// Reads a Matrix-Market file into COO form.
pub fn read_matrix_market<T: Scalar>(path: impl AsRef<Path>) -> Result<Coo<T>, MarketError> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines().enumerate();

    let header = lines.next().ok_or_else(|| parse_err(1, "empty file"))?.1?;
    let (field, symmetry) = parse_header(&header)?;

    // Skip comments and blank lines up to the size line.
    let mut size_line = None;
    for (idx, line) in lines.by_ref() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        size_line = Some((idx + 1, trimmed.to_owned()));
        break;
    }
    let (size_lineno, size_line) = size_line.ok_or_else(|| parse_err(0, "missing size line"))?;
    let mut parts = size_line.split_whitespace();
    let nrows: usize = next_token(&mut parts, size_lineno)?;
    let ncols: usize = next_token(&mut parts, size_lineno)?;
    let nnz: usize = next_token(&mut parts, size_lineno)?;

    let mut rows = Vec::with_capacity(nnz);
    let mut cols = Vec::with_capacity(nnz);
    let mut values = Vec::with_capacity(nnz);
    let mut seen = 0usize;
    for (idx, line) in lines {
        let lineno = idx + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        if seen == nnz {
            return Err(parse_err(lineno, format!("more than {nnz} entries")));
        }
        let mut parts = trimmed.split_whitespace();
        let i: usize = next_token(&mut parts, lineno)?;
        let j: usize = next_token(&mut parts, lineno)?;
        if i == 0 || i > nrows || j == 0 || j > ncols {
            return Err(parse_err(
                lineno,
                format!("entry ({i}, {j}) outside 1-based {nrows}x{ncols}"),
            ));
        }
        let value = match field {
            Field::Pattern => T::ONE,
            Field::Real | Field::Integer => {
                let v: f64 = next_token(&mut parts, lineno)?;
                T::from_f64(v)
            }
        };
        let (i, j) = (i - 1, j - 1);
        rows.push(i);
        cols.push(j);
        values.push(value);
        if symmetry == Symmetry::Symmetric && i != j {
            rows.push(j);
            cols.push(i);
            values.push(value);
        }
        seen += 1;
    }
    if seen != nnz {
        return Err(parse_err(0, format!("expected {nnz} entries, found {seen}")));
    }

    // Bounds were checked per line; no re-validation needed.
    Coo::from_parts(nrows, ncols, rows, cols, values, false)
        .map_err(|e| parse_err(0, e.to_string()))
}

fn parse_header(header: &str) -> Result<(Field, Symmetry), MarketError> {
    let unsupported = || MarketError::Unsupported(header.to_owned());
    let mut words = header.split_whitespace();
    if words.next() != Some("%%MatrixMarket") || words.next() != Some("matrix") {
        return Err(unsupported());
    }
    if words.next() != Some("coordinate") {
        return Err(unsupported());
    }
    let field = match words.next() {
        Some("real") => Field::Real,
        Some("integer") => Field::Integer,
        Some("pattern") => Field::Pattern,
        _ => return Err(unsupported()),
    };
    let symmetry = match words.next() {
        Some("general") | None => Symmetry::General,
        Some("symmetric") => Symmetry::Symmetric,
        _ => return Err(unsupported()),
    };
    Ok((field, symmetry))
}

fn next_token<'a, V: std::str::FromStr>(
    parts: &mut impl Iterator<Item = &'a str>,
    lineno: usize,
) -> Result<V, MarketError> {
    parts
        .next()
        .ok_or_else(|| parse_err(lineno, "missing token"))?
        .parse::<V>()
        .map_err(|_| parse_err(lineno, "malformed token"))
}
