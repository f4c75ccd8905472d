//! Line and token helpers shared by the `.node` and `.ele` parsers.
//!
//! Both parsers walk the same kind of file: a header line followed by data
//! rows, with `#` comment lines and blank lines mixed in. Numeric parsing
//! failures are reported with the source name and 1-based line number.

use crate::mesh_error::MeshError;
use std::iter::Enumerate;
use std::str::Lines;

/// How a line is split into tokens.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Tokenizer {
    /// Split on any run of whitespace.
    #[default]
    Whitespace,
    /// Strip the line terminator, split on single spaces and discard the
    /// empty tokens produced by runs of spaces. Tabs are not separators.
    SingleSpace,
}

impl Tokenizer {
    /// Tokenizer used for a plain (`false`) or layered (`true`) read.
    pub fn for_layered(layered: bool) -> Self {
        if layered {
            Tokenizer::SingleSpace
        } else {
            Tokenizer::Whitespace
        }
    }

    /// Split `line` into tokens.
    pub fn tokens(self, line: &str) -> Vec<&str> {
        match self {
            Tokenizer::Whitespace => line.split_whitespace().collect(),
            Tokenizer::SingleSpace => line
                .trim_end_matches(['\n', '\r'])
                .split(' ')
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

/// What to do when the same 1-based id is defined twice.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DuplicatePolicy {
    /// Keep the last definition and emit a `log::warn!` diagnostic.
    #[default]
    Warn,
    /// Fail with [`MeshError::DuplicateId`].
    Reject,
}

/// A non-blank, non-comment line split into tokens.
#[derive(Debug)]
pub struct DataLine<'a> {
    /// 1-based line number in the source.
    pub line: usize,
    /// Tokens in order of appearance.
    pub tokens: Vec<&'a str>,
}

/// Iterator over the data lines of a source, skipping comments and blanks.
pub struct DataLines<'a> {
    lines: Enumerate<Lines<'a>>,
    tokenizer: Tokenizer,
}

impl<'a> DataLines<'a> {
    pub fn new(contents: &'a str, tokenizer: Tokenizer) -> Self {
        Self {
            lines: contents.lines().enumerate(),
            tokenizer,
        }
    }
}

impl<'a> Iterator for DataLines<'a> {
    type Item = DataLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, raw) in self.lines.by_ref() {
            if raw.starts_with('#') || raw.trim().is_empty() {
                continue;
            }
            return Some(DataLine {
                line: idx + 1,
                tokens: self.tokenizer.tokens(raw),
            });
        }
        None
    }
}

/// Source name plus line number, used to build located errors.
#[derive(Clone, Copy, Debug)]
pub struct LineCtx<'a> {
    pub source: &'a str,
    pub line: usize,
}

impl<'a> LineCtx<'a> {
    pub fn new(source: &'a str, line: usize) -> Self {
        Self { source, line }
    }

    pub fn error(&self, message: impl Into<String>) -> MeshError {
        MeshError::format(self.source, self.line, message)
    }

    /// Fetch token `idx` of `tokens` or fail naming `what` is missing.
    pub fn token<'t>(&self, tokens: &[&'t str], idx: usize, what: &str) -> Result<&'t str, MeshError> {
        tokens
            .get(idx)
            .copied()
            .ok_or_else(|| self.error(format!("missing {what} (found {} tokens)", tokens.len())))
    }

    /// Parse a signed integer; out-of-range checks happen in [`Self::position`].
    pub fn int(&self, raw: &str, what: &str) -> Result<i64, MeshError> {
        raw.parse::<i64>()
            .map_err(|_| self.error(format!("invalid {what}: {raw}")))
    }

    /// Parse a non-negative count.
    pub fn count(&self, raw: &str, what: &str) -> Result<usize, MeshError> {
        let value = self.int(raw, what)?;
        usize::try_from(value).map_err(|_| self.error(format!("negative {what}: {value}")))
    }

    pub fn float(&self, raw: &str, what: &str) -> Result<f64, MeshError> {
        raw.parse::<f64>()
            .map_err(|_| self.error(format!("invalid {what}: {raw}")))
    }

    /// Convert a 1-based `id` in `[1, max]` to a 0-based position.
    pub fn position(&self, id: i64, max: usize, entity: &'static str) -> Result<usize, MeshError> {
        match usize::try_from(id) {
            Ok(one_based) if (1..=max).contains(&one_based) => Ok(one_based - 1),
            _ => Err(MeshError::Index {
                source_name: self.source.to_string(),
                line: self.line,
                entity,
                id,
                max,
            }),
        }
    }
}

/// Fail unless `available` data rows can define all `declared` entries.
///
/// Each row defines at most one id, so a header declaring more entries than
/// there are rows can never yield a dense table.
pub fn ensure_declared(
    ctx: LineCtx<'_>,
    declared: usize,
    available: usize,
    entity: &'static str,
) -> Result<(), MeshError> {
    if declared > available {
        return Err(ctx.error(format!(
            "header declares {declared} {entity} entries but only {available} data lines follow; \
             {} {entity} entries never defined",
            declared - available
        )));
    }
    Ok(())
}

/// Allocate `len` copies of `fill` without aborting on allocation failure.
pub fn try_table<T: Clone>(
    len: usize,
    fill: T,
    entity: &'static str,
    ctx: LineCtx<'_>,
) -> Result<Vec<T>, MeshError> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .map_err(|_| ctx.error(format!("cannot allocate a table of {len} {entity} entries")))?;
    table.resize(len, fill);
    Ok(table)
}

/// Tracks which 0-based positions of a pre-sized table were written.
#[derive(Debug)]
pub struct Occupancy {
    seen: Vec<bool>,
    policy: DuplicatePolicy,
    entity: &'static str,
    duplicates: usize,
}

impl Occupancy {
    /// Track `len` positions; `ctx` locates the header that declared them.
    pub fn try_new(
        len: usize,
        policy: DuplicatePolicy,
        entity: &'static str,
        ctx: LineCtx<'_>,
    ) -> Result<Self, MeshError> {
        Ok(Self {
            seen: try_table(len, false, entity, ctx)?,
            policy,
            entity,
            duplicates: 0,
        })
    }

    /// Record a write to `pos`.
    pub fn mark(&mut self, pos: usize, ctx: LineCtx<'_>) -> Result<(), MeshError> {
        if !std::mem::replace(&mut self.seen[pos], true) {
            return Ok(());
        }
        match self.policy {
            DuplicatePolicy::Warn => {
                self.duplicates += 1;
                log::warn!(
                    "{}:{}: {} id {} defined more than once; keeping the last definition",
                    ctx.source,
                    ctx.line,
                    self.entity,
                    pos + 1
                );
                Ok(())
            }
            DuplicatePolicy::Reject => Err(MeshError::DuplicateId {
                source_name: ctx.source.to_string(),
                line: ctx.line,
                entity: self.entity,
                id: pos + 1,
            }),
        }
    }

    /// Number of overwritten entries so far.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Fail if any position was never written; `line` locates the end of input.
    pub fn ensure_dense(&self, source: &str, line: usize) -> Result<(), MeshError> {
        let missing = self.seen.iter().filter(|s| !**s).count();
        match self.seen.iter().position(|s| !*s) {
            None => Ok(()),
            Some(first) => Err(MeshError::format(
                source,
                line,
                format!(
                    "{missing} {} entries never defined (first missing id {})",
                    self.entity,
                    first + 1
                ),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizers_agree_on_space_runs() {
        let line = "  2   3 0  ";
        assert_eq!(Tokenizer::Whitespace.tokens(line), vec!["2", "3", "0"]);
        assert_eq!(Tokenizer::SingleSpace.tokens(line), vec!["2", "3", "0"]);
        assert_eq!(Tokenizer::SingleSpace.tokens("1 2 3\n"), vec!["1", "2", "3"]);
    }

    #[test]
    fn single_space_does_not_split_tabs() {
        assert_eq!(Tokenizer::SingleSpace.tokens("1\t2"), vec!["1\t2"]);
        assert_eq!(Tokenizer::Whitespace.tokens("1\t2"), vec!["1", "2"]);
    }

    #[test]
    fn data_lines_skip_comments_and_blanks() {
        let text = "# header comment\n3 2 0\n\n# mid\n1 0 0\n   \n2 1 1\n";
        let lines: Vec<_> = DataLines::new(text, Tokenizer::Whitespace).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].line, 2);
        assert_eq!(lines[1].line, 5);
        assert_eq!(lines[2].tokens, vec!["2", "1", "1"]);
    }

    #[test]
    fn indented_hash_is_not_a_comment() {
        let lines: Vec<_> = DataLines::new(" # 1 2", Tokenizer::Whitespace).collect();
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn position_converts_and_bounds_checks() {
        let ctx = LineCtx::new("m.node", 4);
        assert_eq!(ctx.position(1, 3, "node").unwrap(), 0);
        assert_eq!(ctx.position(3, 3, "node").unwrap(), 2);
        for bad in [0, 4, -2] {
            let err = ctx.position(bad, 3, "node").unwrap_err();
            assert!(matches!(err, MeshError::Index { id, .. } if id == bad));
        }
    }

    #[test]
    fn count_rejects_negative_and_garbage() {
        let ctx = LineCtx::new("m.node", 1);
        assert_eq!(ctx.count("7", "node count").unwrap(), 7);
        assert!(matches!(ctx.count("-1", "node count"), Err(MeshError::Format { .. })));
        assert!(matches!(ctx.count("x", "node count"), Err(MeshError::Format { .. })));
    }

    #[test]
    fn declared_count_must_fit_in_data_lines() {
        let ctx = LineCtx::new("m.node", 1);
        assert!(ensure_declared(ctx, 2, 2, "node").is_ok());
        let err = ensure_declared(ctx, 99_999_999_999_999, 1, "node").unwrap_err();
        assert!(matches!(err, MeshError::Format { line: 1, .. }), "unexpected error: {err:?}");
        assert!(err.to_string().contains("never defined"));
    }

    #[test]
    fn try_table_fills_requested_length() {
        let ctx = LineCtx::new("m.ele", 1);
        assert_eq!(try_table(3, 0u8, "element", ctx).unwrap(), vec![0, 0, 0]);
        assert!(matches!(
            try_table(usize::MAX, 0u64, "element", ctx),
            Err(MeshError::Format { .. })
        ));
    }

    #[test]
    fn occupancy_warns_then_rejects() {
        let ctx = LineCtx::new("m.node", 2);
        let mut warn = Occupancy::try_new(2, DuplicatePolicy::Warn, "node", ctx).unwrap();
        warn.mark(0, ctx).unwrap();
        warn.mark(0, ctx).unwrap();
        assert_eq!(warn.duplicates(), 1);
        assert!(warn.ensure_dense("m.node", 3).is_err());
        warn.mark(1, ctx).unwrap();
        assert!(warn.ensure_dense("m.node", 3).is_ok());

        let mut reject = Occupancy::try_new(1, DuplicatePolicy::Reject, "node", ctx).unwrap();
        reject.mark(0, ctx).unwrap();
        assert!(matches!(
            reject.mark(0, ctx),
            Err(MeshError::DuplicateId { id: 1, .. })
        ));
    }
}
