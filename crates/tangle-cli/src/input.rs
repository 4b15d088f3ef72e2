//! TSV edge-list ingestion for the two recognized profiles.
//!
//! # Profiles
//!
//! - **Multigraph**: `from <TAB> to <TAB> amount`. One row per transfer,
//!   parallel edges allowed, single `amount` channel.
//! - **Collapsed**: `from <TAB> to <TAB> transfers <TAB> amount`. One row
//!   per ordered pair with pre-summed weights, `transfers` + `amount`
//!   channels.
//!
//! Parsing is strict: every row must have exactly the profile's field count,
//! ids must be unsigned integers, weights must be non-negative finite reals.
//! Any violation aborts ingestion with the offending 1-based line number;
//! no graph exists after a parse failure.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use tangle_core::{BuildError, Graph, GraphBuilder};

/// Channel name for the per-pair transfer count (collapsed profile).
pub const TRANSFERS_CHANNEL: &str = "transfers";
/// Channel name for the transferred amount (both profiles).
pub const AMOUNT_CHANNEL: &str = "amount";

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// Which edge-list layout a file follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// One row per individual transfer: `from  to  amount`.
    Multigraph,
    /// One pre-aggregated row per ordered pair: `from  to  transfers  amount`.
    Collapsed,
}

impl Profile {
    const fn field_count(self) -> usize {
        match self {
            Self::Multigraph => 3,
            Self::Collapsed => 4,
        }
    }

    const fn channels(self) -> &'static [&'static str] {
        match self {
            Self::Multigraph => &[AMOUNT_CHANNEL],
            Self::Collapsed => &[TRANSFERS_CHANNEL, AMOUNT_CHANNEL],
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors raised while parsing an edge-list file. All are fatal.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Row has the wrong number of tab-separated fields (covers truncated
    /// records and blank lines).
    #[error("line {line}: expected {expected} tab-separated fields, found {found}")]
    FieldCount {
        /// 1-based line number.
        line: usize,
        /// Field count the profile requires.
        expected: usize,
        /// Field count actually present.
        found: usize,
    },
    /// A node id field is not an unsigned integer.
    #[error("line {line}: invalid node id '{value}'")]
    InvalidId {
        /// 1-based line number.
        line: usize,
        /// The rejected field text.
        value: String,
    },
    /// A weight field is not a real number.
    #[error("line {line}: invalid weight '{value}'")]
    InvalidWeight {
        /// 1-based line number.
        line: usize,
        /// The rejected field text.
        value: String,
    },
    /// The record parsed but the graph builder rejected it (negative or
    /// non-finite weight, arity drift).
    #[error("line {line}: {source}")]
    Record {
        /// 1-based line number.
        line: usize,
        /// Underlying builder rejection.
        source: BuildError,
    },
    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse an edge list from any buffered reader.
///
/// # Errors
///
/// Returns a [`ParseError`] identifying the first offending line; the
/// partial graph is discarded.
pub fn parse_edge_list<R: BufRead>(reader: R, profile: Profile) -> Result<Graph, ParseError> {
    let mut builder = GraphBuilder::new(profile.channels().iter().copied());

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let row = line.strip_suffix('\r').unwrap_or(&line);

        let fields: Vec<&str> = row.split('\t').collect();
        if fields.len() != profile.field_count() {
            return Err(ParseError::FieldCount {
                line: line_no,
                expected: profile.field_count(),
                found: fields.len(),
            });
        }

        let from = parse_id(fields[0], line_no)?;
        let to = parse_id(fields[1], line_no)?;
        let weights = fields[2..]
            .iter()
            .map(|f| parse_weight(f, line_no))
            .collect::<Result<Vec<f64>, ParseError>>()?;

        builder
            .add_edge(from, to, &weights)
            .map_err(|source| ParseError::Record {
                line: line_no,
                source,
            })?;
    }

    Ok(builder.finish())
}

/// Open and parse an edge-list file.
///
/// # Errors
///
/// Fails if the file cannot be opened or any row is malformed.
pub fn load_graph(path: &Path, profile: Profile) -> Result<Graph> {
    let file =
        File::open(path).with_context(|| format!("open edge list {}", path.display()))?;
    let graph = parse_edge_list(BufReader::new(file), profile)
        .with_context(|| format!("parse edge list {}", path.display()))?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        hash = graph.content_hash(),
        "edge list loaded"
    );
    Ok(graph)
}

fn parse_id(field: &str, line: usize) -> Result<usize, ParseError> {
    field.parse::<usize>().map_err(|_| ParseError::InvalidId {
        line,
        value: field.to_string(),
    })
}

fn parse_weight(field: &str, line: usize) -> Result<f64, ParseError> {
    field
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidWeight {
            line,
            value: field.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
