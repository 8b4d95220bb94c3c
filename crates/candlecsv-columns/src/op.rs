//! Column operation definitions.

use candlecsv_types::{Column, ConfigError, format_float};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::str::FromStr;

/// One output column of the pipeline.
///
/// The text form used on the command line is `lineno`, `fix:<text>`,
/// `copy:<col>`, `sum:<col>`, `ma:<col>:<width>` or `smooth:<col>:<alpha>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnOp {
    /// Data-row number, starting at 1 after the header rows.
    LineNo,
    /// Fixed text on every row.
    Fix(String),
    /// Input column copied unchanged.
    Copy(Column),
    /// Running sum of the numeric cells of a column.
    Sum(Column),
    /// Mean of the last `width` numeric cells of a column.
    MovingAverage {
        /// Source column.
        column: Column,
        /// Window length.
        width: NonZeroUsize,
    },
    /// Exponential smoothing: `previous * (1 - alpha) + value * alpha`.
    Smooth {
        /// Source column.
        column: Column,
        /// Weight of the newest value, between 0 and 1.
        alpha: f64,
    },
}

impl ColumnOp {
    /// Returns the input column this operation reads, if any.
    #[must_use]
    pub const fn source(&self) -> Option<Column> {
        match self {
            Self::LineNo | Self::Fix(_) => None,
            Self::Copy(column)
            | Self::Sum(column)
            | Self::MovingAverage { column, .. }
            | Self::Smooth { column, .. } => Some(*column),
        }
    }

    /// Returns the label written in the first header row, given the source
    /// column's header cell.
    #[must_use]
    pub fn label(&self, header: &str) -> String {
        match self {
            Self::LineNo => "lineno".to_string(),
            Self::Fix(text) => text.clone(),
            Self::Copy(_) => header.to_string(),
            Self::Sum(_) => format!("sum of {header}"),
            Self::MovingAverage { width, .. } => format!("{width}-MA of {header}"),
            Self::Smooth { alpha, .. } => {
                format!("smoothed(alpha={}) of {header}", format_float(*alpha))
            }
        }
    }
}

impl FromStr for ColumnOp {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigError::InvalidColumnOp {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (kind, args) = s.split_once(':').unwrap_or((s, ""));
        if kind == "fix" {
            return Ok(Self::Fix(args.to_string()));
        }

        let args: Vec<&str> = if args.is_empty() {
            Vec::new()
        } else {
            args.split(':').collect()
        };
        let column = |arg: &str| {
            arg.parse::<Column>()
                .map_err(|_| invalid("column must be a positive integer"))
        };

        match (kind, args.as_slice()) {
            ("lineno", []) => Ok(Self::LineNo),
            ("copy", [col]) => Ok(Self::Copy(column(*col)?)),
            ("sum", [col]) => Ok(Self::Sum(column(*col)?)),
            ("ma", [col, width]) => {
                let width = width
                    .parse::<NonZeroUsize>()
                    .map_err(|_| invalid("width must be a positive integer"))?;
                Ok(Self::MovingAverage {
                    column: column(*col)?,
                    width,
                })
            }
            ("smooth", [col, alpha]) => {
                let alpha = alpha
                    .parse::<f64>()
                    .ok()
                    .filter(|a| (0.0..=1.0).contains(a))
                    .ok_or_else(|| invalid("alpha must be between 0 and 1"))?;
                Ok(Self::Smooth {
                    column: column(*col)?,
                    alpha,
                })
            }
            ("lineno" | "copy" | "sum" | "ma" | "smooth", _) => {
                Err(invalid("wrong number of arguments"))
            }
            _ => Err(invalid(
                "expected lineno, fix:<text>, copy:<col>, sum:<col>, ma:<col>:<width> or smooth:<col>:<alpha>",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(n: usize) -> Column {
        Column::new(n).unwrap()
    }

    #[test]
    fn test_parse_ops() {
        assert_eq!("lineno".parse::<ColumnOp>().unwrap(), ColumnOp::LineNo);
        assert_eq!("copy:2".parse::<ColumnOp>().unwrap(), ColumnOp::Copy(col(2)));
        assert_eq!("sum:3".parse::<ColumnOp>().unwrap(), ColumnOp::Sum(col(3)));
        assert_eq!(
            "ma:2:5".parse::<ColumnOp>().unwrap(),
            ColumnOp::MovingAverage {
                column: col(2),
                width: NonZeroUsize::new(5).unwrap(),
            }
        );
        assert_eq!(
            "smooth:4:0.25".parse::<ColumnOp>().unwrap(),
            ColumnOp::Smooth {
                column: col(4),
                alpha: 0.25,
            }
        );
    }

    #[test]
    fn test_fix_keeps_separators() {
        assert_eq!(
            "fix:a:b".parse::<ColumnOp>().unwrap(),
            ColumnOp::Fix("a:b".to_string())
        );
        assert_eq!("fix".parse::<ColumnOp>().unwrap(), ColumnOp::Fix(String::new()));
    }

    #[test]
    fn test_parse_rejects_bad_ops() {
        for input in [
            "copy",
            "copy:0",
            "sum:x",
            "ma:2",
            "ma:2:0",
            "smooth:1:1.5",
            "smooth:1:-0.1",
            "lineno:1",
            "avg:1",
        ] {
            assert!(
                matches!(
                    input.parse::<ColumnOp>(),
                    Err(ConfigError::InvalidColumnOp { .. })
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(ColumnOp::LineNo.label("x"), "lineno");
        assert_eq!(ColumnOp::Sum(col(1)).label("price"), "sum of price");
        assert_eq!(
            "ma:1:20".parse::<ColumnOp>().unwrap().label("price"),
            "20-MA of price"
        );
        assert_eq!(
            "smooth:1:1".parse::<ColumnOp>().unwrap().label("price"),
            "smoothed(alpha=1.0) of price"
        );
    }

    #[test]
    fn test_source() {
        assert_eq!(ColumnOp::Fix("x".to_string()).source(), None);
        assert_eq!("ma:3:2".parse::<ColumnOp>().unwrap().source(), Some(col(3)));
    }
}
