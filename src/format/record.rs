//! Line classification for the alignment passes.
//!
//! Each input line is decomposed into a [`LineRecord`] holding its leading
//! whitespace, the text before the first `=`, the optional `=` separator,
//! the trimmed right-hand side, and an optional trailing `//` comment.
//! Lines that must not be reflowed (comments, call-looking lines) are
//! carried verbatim with `ignore` set.

use std::sync::LazyLock;

use regex::Regex;

// Leading whitespace, everything up to the first '=', an optional '=',
// and the remainder. Matched leftmost, not anchored: a line like "=c"
// decomposes starting after the '='.
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\s*)([^=]+)(=?)(.*)").unwrap());

/// One input line, split into the pieces the alignment passes operate on.
///
/// Joining `leading + lhs + separator + rhs + trailer` for every record, in
/// order, reconstructs a document with the same number of lines as the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineRecord {
    /// Whitespace prefix, preserved verbatim for alignable lines
    pub leading: String,
    /// Text before the first `=`, or the whole raw line when `ignore` is set
    pub lhs: String,
    /// The literal `=`, or empty when the line carries no assignment
    pub separator: String,
    /// Trimmed text after the `=`; empty when there is no assignment
    pub rhs: String,
    /// Trailing `//` comment, including the spaces that preceded it
    pub trailer: String,
    /// Reproduce the line verbatim, excluded from all width computations
    pub ignore: bool,
}

impl LineRecord {
    /// Classify one raw line.
    ///
    /// The guard conditions run in priority order, first match wins:
    /// 1. comment or call-looking prefix (`//`, `(`, `/*`, leading `*`,
    ///    trailing `*\`) - verbatim
    /// 2. trailing `//` comment after an assignable-looking prefix -
    ///    LHS/trailer split, no alignment
    /// 3. normal candidate - leading/LHS/separator/RHS decomposition
    /// 4. no match (empty line) - verbatim
    #[must_use]
    pub fn classify(line: &str) -> LineRecord {
        let Some(caps) = LINE_RE.captures(line) else {
            return LineRecord::verbatim(line);
        };
        let candidate = caps.get(2).map_or("", |m| m.as_str());

        if candidate.starts_with("//")
            || candidate.contains('(')
            || candidate.starts_with("/*")
            || candidate.starts_with('*')
            || candidate.ends_with("*\\")
        {
            return LineRecord::verbatim(line);
        }

        if let Some(idx) = candidate.find("//") {
            // Spaces stripped from the LHS end move into the trailer so the
            // line reassembles byte-for-byte.
            let before = &candidate[..idx];
            let lhs = before.trim_end_matches(' ');
            let mut trailer = String::with_capacity(candidate.len() - idx + before.len() - lhs.len());
            trailer.push_str(&before[lhs.len()..]);
            trailer.push_str(&candidate[idx..]);
            return LineRecord {
                leading: caps[1].to_string(),
                lhs: lhs.to_string(),
                trailer,
                ..LineRecord::default()
            };
        }

        let separator = caps[3].to_string();
        let rhs = if separator.is_empty() {
            String::new()
        } else {
            caps[4].trim().to_string()
        };
        LineRecord {
            leading: caps[1].to_string(),
            lhs: candidate.to_string(),
            separator,
            rhs,
            trailer: String::new(),
            ignore: false,
        }
    }

    fn verbatim(line: &str) -> LineRecord {
        LineRecord {
            lhs: line.to_string(),
            ignore: true,
            ..LineRecord::default()
        }
    }

    /// Whether this record's LHS tokens take part in column alignment.
    ///
    /// Records with a trailing comment trailer are reproduced as-is and
    /// contribute nothing to column widths.
    #[must_use]
    pub fn aligns_columns(&self) -> bool {
        !self.ignore && self.trailer.is_empty()
    }
}
