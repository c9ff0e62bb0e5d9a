//! Parsed tree description and the line-based text reader that produces it.
//!
//! Text format:
//! ```text
//! 5
//! 4 7 2 5 12
//! 0 1 0 0 1
//! 1 2
//! 1 3
//! 3 4
//! 3 5
//! ```
//! Node count, values, color codes, then `node_count - 1` lines of
//! 1-indexed `parent child` pairs. Blank lines are ignored.

use std::str::FromStr;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// Flat tree description handed to the builder.
///
/// Lengths are not checked here; [`TreeBuilder`](crate::domain::TreeBuilder)
/// validates them so that programmatic and parsed input fail the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeInput {
    pub node_count: usize,
    pub values: Vec<i64>,
    pub colors: Vec<String>,
    /// 1-indexed (parent, child) pairs, in attach order
    pub edges: Vec<(i64, i64)>,
}

impl TreeInput {
    pub fn new<S: Into<String>>(
        node_count: usize,
        values: Vec<i64>,
        colors: impl IntoIterator<Item = S>,
        edges: Vec<(i64, i64)>,
    ) -> Self {
        Self {
            node_count,
            values,
            colors: colors.into_iter().map(Into::into).collect(),
            edges,
        }
    }

    #[instrument(level = "debug", skip(text))]
    pub fn parse(text: &str) -> DomainResult<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let mut next_line = |what: &str| {
            lines.next().ok_or_else(|| {
                DomainError::malformed(format!("unexpected end of input, expected {}", what))
            })
        };

        let (_, count_line) = next_line("node count")?;
        let node_count: usize = parse_token(count_line, "node count")?;

        let (_, values_line) = next_line("node values")?;
        let values = values_line
            .split_whitespace()
            .map(|token| parse_token::<i64>(token, "node value"))
            .collect::<DomainResult<Vec<_>>>()?;

        let (_, colors_line) = next_line("node colors")?;
        let colors = colors_line
            .split_whitespace()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut edges = Vec::with_capacity(node_count.saturating_sub(1));
        for _ in 1..node_count {
            let (line_no, edge_line) = next_line("edge")?;
            edges.push(parse_edge(line_no + 1, edge_line)?);
        }

        if let Some((line_no, extra)) = lines.next() {
            return Err(DomainError::malformed(format!(
                "line {}: unexpected trailing input '{}'",
                line_no + 1,
                extra
            )));
        }

        debug!(node_count, edges = edges.len(), "parsed tree input");
        Ok(Self {
            node_count,
            values,
            colors,
            edges,
        })
    }
}

/// Parse one `parent child` line. Exactly two integer tokens are accepted.
pub fn parse_edge(line_no: usize, line: &str) -> DomainResult<(i64, i64)> {
    let (parent, child) = line.split_whitespace().collect_tuple().ok_or_else(|| {
        DomainError::malformed(format!(
            "line {}: edge needs exactly 2 tokens, found {}",
            line_no,
            line.split_whitespace().count()
        ))
    })?;
    Ok((
        parse_token(parent, "edge parent")?,
        parse_token(child, "edge child")?,
    ))
}

fn parse_token<T: FromStr>(token: &str, what: &str) -> DomainResult<T> {
    token
        .trim()
        .parse()
        .map_err(|_| DomainError::malformed(format!("{}: invalid integer '{}'", what, token)))
}
