//! The textual problem format.
//!
//! ```text
//! rows, cols
//! ----
//! row, col, value      (one pinned source per line, possibly none)
//! ----
//! tolerance
//! max sweeps           (0 = unbounded)
//! cyclic flag          (>= 1 = cyclic, anything else bounded)
//! ```

use settle_core::{Grid, GridError, SourcePoint, Sources};
use settle_space::BoundaryMode;
use std::error::Error;
use std::fmt;

const SEPARATOR: &str = "----";

/// Errors from parsing a problem description.
///
/// Line numbers are 1-based, matching what an editor shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// The dimensions header is missing or not `rows, cols`.
    InvalidDimensions {
        /// Line the header was expected on.
        line: usize,
    },
    /// A `----` section separator is missing.
    MissingSeparator {
        /// Line the separator was expected on.
        line: usize,
    },
    /// A source line is not a `row, col, value` triple.
    InvalidSource {
        /// Line of the offending source.
        line: usize,
    },
    /// A run parameter is missing or unparseable.
    InvalidParameter {
        /// Which parameter (`"tolerance"`, `"max sweeps"`, `"cyclic flag"`).
        name: &'static str,
        /// Line the parameter was expected on.
        line: usize,
    },
    /// Unexpected non-empty content after the last parameter.
    TrailingContent {
        /// Line of the first unexpected content.
        line: usize,
    },
    /// The parsed grid or sources were rejected during construction.
    Grid(GridError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { line } => {
                write!(f, "line {line}: expected dimensions `rows, cols`")
            }
            Self::MissingSeparator { line } => {
                write!(f, "line {line}: expected `{SEPARATOR}` separator")
            }
            Self::InvalidSource { line } => {
                write!(f, "line {line}: expected source `row, col, value`")
            }
            Self::InvalidParameter { name, line } => {
                write!(f, "line {line}: expected {name}")
            }
            Self::TrailingContent { line } => {
                write!(f, "line {line}: unexpected content after parameters")
            }
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ParseError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// A parsed problem description: grid shape, pinned sources, and run
/// parameters, not yet turned into solver inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    /// Grid height.
    pub rows: u32,
    /// Grid width.
    pub cols: u32,
    /// Pinned sources in file order.
    pub sources: Vec<SourcePoint>,
    /// Convergence tolerance.
    pub tolerance: f64,
    /// Sweep cap, `0` = unbounded.
    pub max_sweeps: u32,
    /// Edge behavior.
    pub boundary: BoundaryMode,
}

impl Problem {
    /// Parse a problem description.
    ///
    /// # Examples
    ///
    /// ```
    /// use settle_io::Problem;
    /// use settle_space::BoundaryMode;
    ///
    /// let text = "3, 3\n----\n1, 1, 100.0\n----\n0.001\n0\n0\n";
    /// let problem = Problem::parse(text).unwrap();
    /// assert_eq!((problem.rows, problem.cols), (3, 3));
    /// assert_eq!(problem.sources.len(), 1);
    /// assert_eq!(problem.boundary, BoundaryMode::Bounded);
    /// ```
    pub fn parse(text: &str) -> Result<Problem, ParseError> {
        // Errors for sections missing at end of input point one line
        // past the last real line.
        let eof = text.lines().count() + 1;
        let mut lines = text.lines().enumerate().peekable();

        let (line, header) = lines
            .next()
            .ok_or(ParseError::InvalidDimensions { line: 1 })?;
        let (rows, cols) =
            parse_pair(header).ok_or(ParseError::InvalidDimensions { line: line + 1 })?;

        expect_separator(&mut lines, eof)?;

        let mut sources = Vec::new();
        loop {
            match lines.peek() {
                Some(&(_, text)) if text.trim() == SEPARATOR => {
                    lines.next();
                    break;
                }
                Some(&(line, text)) => {
                    let source =
                        parse_source(text).ok_or(ParseError::InvalidSource { line: line + 1 })?;
                    sources.push(source);
                    lines.next();
                }
                None => return Err(ParseError::MissingSeparator { line: eof }),
            }
        }

        let tolerance = parse_param(&mut lines, "tolerance", eof)?;
        let max_sweeps = parse_param::<u32>(&mut lines, "max sweeps", eof)?;
        let cyclic = parse_param::<i64>(&mut lines, "cyclic flag", eof)?;
        let boundary = if cyclic >= 1 {
            BoundaryMode::Cyclic
        } else {
            BoundaryMode::Bounded
        };

        for (line, text) in lines {
            if !text.trim().is_empty() {
                return Err(ParseError::TrailingContent { line: line + 1 });
            }
        }

        Ok(Problem {
            rows,
            cols,
            sources,
            tolerance,
            max_sweeps,
            boundary,
        })
    }

    /// Build the seeded grid and source set for this problem.
    ///
    /// Rejects any source whose coordinate falls outside the grid; the
    /// solver core relies on this check never having to be repeated.
    pub fn build(&self) -> Result<(Grid, Sources), ParseError> {
        let mut grid = Grid::new(self.rows, self.cols)?;
        let sources: Sources = self.sources.iter().copied().collect();
        sources.seed(&mut grid)?;
        Ok((grid, sources))
    }
}

fn expect_separator<'a, I>(lines: &mut I, eof: usize) -> Result<(), ParseError>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    match lines.next() {
        Some((_, text)) if text.trim() == SEPARATOR => Ok(()),
        Some((line, _)) => Err(ParseError::MissingSeparator { line: line + 1 }),
        None => Err(ParseError::MissingSeparator { line: eof }),
    }
}

fn parse_param<'a, T: std::str::FromStr>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    name: &'static str,
    eof: usize,
) -> Result<T, ParseError> {
    match lines.next() {
        Some((line, text)) => text
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidParameter {
                name,
                line: line + 1,
            }),
        None => Err(ParseError::InvalidParameter { name, line: eof }),
    }
}

fn parse_pair(text: &str) -> Option<(u32, u32)> {
    let mut fields = text.split(',');
    let a = fields.next()?.trim().parse().ok()?;
    let b = fields.next()?.trim().parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((a, b))
}

fn parse_source(text: &str) -> Option<SourcePoint> {
    let mut fields = text.split(',');
    let row = fields.next()?.trim().parse().ok()?;
    let col = fields.next()?.trim().parse().ok()?;
    let value = fields.next()?.trim().parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(SourcePoint { row, col, value })
}
