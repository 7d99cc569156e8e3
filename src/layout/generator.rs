//! Range expansion and name generation.
//!
//! A range expands to an ordered token list; a configuration expands to the
//! Cartesian product of its ranges in declaration order, each combination
//! joined as `prefix + token0 + sep0 + token1 + sep1 + token2`. Names within
//! one generation are distinct by construction.

use crate::layout::LayoutError;
use crate::types::{LayoutConfiguration, LayoutType, RangeEndpoint, RangeSpecification, RangeType};

fn layout_name(layout: LayoutType) -> &'static str {
    match layout {
        LayoutType::Single => "single",
        LayoutType::Row => "row",
        LayoutType::Grid => "grid",
        LayoutType::Grid3d => "grid_3d",
    }
}

/// Lowercased letter endpoint, bounds compared case-insensitively.
fn letter_bound(ep: &RangeEndpoint) -> Result<u8, LayoutError> {
    match ep {
        RangeEndpoint::Letter(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase() as u8),
                _ => Err(LayoutError::InvalidLetter(s.clone())),
            }
        }
        RangeEndpoint::Number(_) => Err(LayoutError::EndpointTypeMismatch { expected: "letters" }),
    }
}

/// Number endpoint, restricted to 0..=999.
fn number_bound(ep: &RangeEndpoint) -> Result<i64, LayoutError> {
    match ep {
        RangeEndpoint::Number(n) => {
            if (0..=999).contains(n) {
                Ok(*n)
            } else {
                Err(LayoutError::NumberOutOfBounds(*n))
            }
        }
        RangeEndpoint::Letter(_) => Err(LayoutError::EndpointTypeMismatch { expected: "numbers" }),
    }
}

fn check_flags(spec: &RangeSpecification) -> Result<(), LayoutError> {
    match spec.range_type {
        RangeType::Letters if spec.zero_pad => {
            Err(LayoutError::InvalidFlag { flag: "zero_pad", range_type: "letter" })
        }
        RangeType::Numbers if spec.capitalize => {
            Err(LayoutError::InvalidFlag { flag: "capitalize", range_type: "number" })
        }
        _ => Ok(()),
    }
}

/// Number of tokens a range expands to, without allocating them.
///
/// Performs the same invariant checks as [`expand_range`] so the fast
/// count pre-check rejects invalid ranges too.
pub fn range_cardinality(spec: &RangeSpecification) -> Result<usize, LayoutError> {
    check_flags(spec)?;
    match spec.range_type {
        RangeType::Letters => {
            let start = letter_bound(&spec.start)?;
            let end = letter_bound(&spec.end)?;
            if start > end {
                return Err(LayoutError::InvertedRange {
                    start: (start as char).to_string(),
                    end: (end as char).to_string(),
                });
            }
            Ok((end - start + 1) as usize)
        }
        RangeType::Numbers => {
            let start = number_bound(&spec.start)?;
            let end = number_bound(&spec.end)?;
            if start > end {
                return Err(LayoutError::InvertedRange {
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
            Ok((end - start + 1) as usize)
        }
    }
}

/// Expands one range into its ordered token list.
pub fn expand_range(spec: &RangeSpecification) -> Result<Vec<String>, LayoutError> {
    // Revalidates bounds; cardinality and expansion must agree.
    let count = range_cardinality(spec)?;
    let mut tokens = Vec::with_capacity(count);
    match spec.range_type {
        RangeType::Letters => {
            let start = letter_bound(&spec.start)?;
            let end = letter_bound(&spec.end)?;
            for b in start..=end {
                let c = if spec.capitalize { (b as char).to_ascii_uppercase() } else { b as char };
                tokens.push(c.to_string());
            }
        }
        RangeType::Numbers => {
            let start = number_bound(&spec.start)?;
            let end = number_bound(&spec.end)?;
            let width = end.to_string().len();
            for n in start..=end {
                if spec.zero_pad {
                    tokens.push(format!("{:0width$}", n, width = width));
                } else {
                    tokens.push(n.to_string());
                }
            }
        }
    }
    Ok(tokens)
}

/// Checks the cross-field shape invariants of a configuration: the range
/// count mandated by the layout type and the separator count.
pub fn check_shape(cfg: &LayoutConfiguration) -> Result<(), LayoutError> {
    let expected = cfg.layout_type.expected_ranges();
    if cfg.ranges.len() != expected {
        return Err(LayoutError::RangeCountMismatch {
            layout: layout_name(cfg.layout_type),
            expected,
            actual: cfg.ranges.len(),
        });
    }
    let expected_seps = cfg.ranges.len().saturating_sub(1);
    if cfg.separators.len() != expected_seps {
        return Err(LayoutError::SeparatorCountMismatch {
            expected: expected_seps,
            ranges: cfg.ranges.len(),
            actual: cfg.separators.len(),
        });
    }
    Ok(())
}

/// Total number of names the configuration generates: the product of each
/// range's cardinality, 1 for the degenerate no-range layout.
pub fn total_count(cfg: &LayoutConfiguration) -> Result<usize, LayoutError> {
    check_shape(cfg)?;
    let mut total: usize = 1;
    for spec in &cfg.ranges {
        total = total.saturating_mul(range_cardinality(spec)?);
    }
    Ok(total)
}

/// Generates the full ordered list of names for a configuration.
///
/// Zero ranges yields a single name equal to the prefix. Otherwise the
/// ranges are combined as a Cartesian product in declaration order, with
/// `separators[i-1]` interleaved before the token of range `i`.
pub fn generate_names(cfg: &LayoutConfiguration) -> Result<Vec<String>, LayoutError> {
    check_shape(cfg)?;

    let mut names = vec![cfg.prefix.clone()];
    for (i, spec) in cfg.ranges.iter().enumerate() {
        let tokens = expand_range(spec)?;
        let sep = if i == 0 {
            ""
        } else {
            cfg.separators.get(i - 1).map(String::as_str).unwrap_or("")
        };
        let mut next = Vec::with_capacity(names.len().saturating_mul(tokens.len()));
        for base in &names {
            for token in &tokens {
                next.push(format!("{}{}{}", base, sep, token));
            }
        }
        names = next;
    }
    Ok(names)
}
