//! Identifier quoting engine.

use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether a bare identifier must be quoted.
#[derive(Clone)]
pub enum Reserved {
    /// Quote every bare identifier.
    Always,
    /// Never add quotes; existing quoting is still stripped.
    Never,
    /// Reserved iff the word appears in the table (case-insensitive).
    Keywords(&'static [&'static str]),
    /// Arbitrary predicate, shared across quoter clones.
    Custom(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl Reserved {
    /// Wraps a closure as a reserved-word predicate.
    #[must_use]
    pub fn custom(pred: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(pred))
    }

    /// Applies the predicate to a single identifier token.
    #[must_use]
    pub fn check(&self, word: &str) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Keywords(table) => table.iter().any(|kw| kw.eq_ignore_ascii_case(word)),
            Self::Custom(pred) => pred(word),
        }
    }
}

impl fmt::Debug for Reserved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("Always"),
            Self::Never => f.write_str("Never"),
            Self::Keywords(table) => f.debug_tuple("Keywords").field(&table.len()).finish(),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// An immutable identifier quoter for one SQL dialect.
///
/// The configuration is fixed at construction and safe to share across
/// concurrent callers. Every operation is total: unparseable input is
/// repaired conservatively rather than rejected.
#[derive(Debug, Clone)]
pub struct Quoter {
    /// Opening and closing quote characters; `None` for the plain quoter.
    quotes: Option<(char, char)>,
    reserved: Reserved,
}

impl Quoter {
    /// Creates a quoter with the given quote pair and predicate.
    #[must_use]
    pub const fn new(prefix: char, suffix: char, reserved: Reserved) -> Self {
        Self {
            quotes: Some((prefix, suffix)),
            reserved,
        }
    }

    /// A quoter that wraps every bare identifier.
    #[must_use]
    pub const fn always(prefix: char, suffix: char) -> Self {
        Self::new(prefix, suffix, Reserved::Always)
    }

    /// A quoter that never adds quotes but still strips existing ones.
    #[must_use]
    pub const fn never(prefix: char, suffix: char) -> Self {
        Self::new(prefix, suffix, Reserved::Never)
    }

    /// The plain quoter: no quote pair, [`trim`](Self::trim) is the identity.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            quotes: None,
            reserved: Reserved::Never,
        }
    }

    /// The quote pair, or `None` for the plain quoter.
    #[must_use]
    pub const fn quotes(&self) -> Option<(char, char)> {
        self.quotes
    }

    /// The reserved-word predicate.
    #[must_use]
    pub const fn reserved(&self) -> &Reserved {
        &self.reserved
    }

    /// Returns the canonical quoted form of an identifier expression.
    #[must_use]
    pub fn quote(&self, value: &str) -> String {
        let mut buf = String::with_capacity(value.len() + 8);
        self.quote_to(&mut buf, value);
        buf
    }

    /// Appends the canonical quoted form of `value` to `buf`.
    ///
    /// Leading and trailing ASCII spaces are copied through verbatim.
    pub fn quote_to(&self, buf: &mut String, value: &str) {
        let lead = value.len() - value.trim_start_matches(' ').len();
        let inner_end = value.trim_end_matches(' ').len();
        if lead >= inner_end {
            // nothing but spaces
            buf.push_str(value);
            return;
        }
        buf.push_str(&value[..lead]);
        self.quote_expr(buf, &value[lead..inner_end]);
        buf.push_str(&value[inner_end..]);
    }

    /// Quotes each element (trimmed of leading whitespace only) and joins
    /// the results with `sep`, written verbatim.
    #[must_use]
    pub fn join<S: AsRef<str>>(&self, names: &[S], sep: &str) -> String {
        let mut buf = String::new();
        self.join_to(&mut buf, names, sep);
        buf
    }

    /// [`join`](Self::join) writing into a caller-supplied sink.
    pub fn join_to<S: AsRef<str>>(&self, buf: &mut String, names: &[S], sep: &str) {
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                buf.push_str(sep);
            }
            self.quote_to(buf, name.as_ref().trim_start());
        }
    }

    /// Quotes every element independently.
    #[must_use]
    pub fn strings<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        names.iter().map(|name| self.quote(name.as_ref())).collect()
    }

    /// Removes every occurrence of this quoter's quote characters.
    ///
    /// The plain quoter's `trim` is the identity. Note that an identifier
    /// which itself contained a quote character loses it too, so `trim` is
    /// not a left-inverse of [`quote`](Self::quote) in that pathological
    /// case.
    #[must_use]
    pub fn trim(&self, s: &str) -> String {
        match self.quotes {
            None => s.to_owned(),
            Some((open, close)) => s.chars().filter(|&c| c != open && c != close).collect(),
        }
    }

    /// Rewrites every back-tick-delimited identifier in `sql` into this
    /// quoter's quoting, leaving single-quoted string literals untouched.
    ///
    /// Back-ticked identifiers are wrapped unconditionally: a caller that
    /// writes back-ticks is declaring intent to quote. Inside a literal,
    /// `''` is an escaped apostrophe and back-ticks are ordinary bytes.
    #[must_use]
    pub fn replace(&self, sql: &str) -> String {
        let Some((open, close)) = self.quotes else {
            return sql.to_owned();
        };
        let bytes = sql.as_bytes();
        let mut out = String::with_capacity(sql.len());
        let mut in_literal = false;
        let mut plain_start = 0;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'`' if !in_literal => {
                    out.push_str(&sql[plain_start..i]);
                    let mut j = i + 1;
                    while j < bytes.len() && bytes[j] != b'`' {
                        j += 1;
                    }
                    out.push(open);
                    out.push_str(&sql[i + 1..j]);
                    out.push(close);
                    i = if j < bytes.len() { j + 1 } else { j };
                    plain_start = i;
                }
                b'\'' => {
                    in_literal = !in_literal;
                    i += 1;
                }
                _ => i += 1,
            }
        }
        out.push_str(&sql[plain_start..]);
        out
    }

    /// Splits `expr` on ` AS ` alias boundaries, preserving the separator
    /// text as written, and quotes each side.
    fn quote_expr(&self, buf: &mut String, expr: &str) {
        let bytes = expr.as_bytes();
        let mut seg_start = 0;
        let mut in_opaque = false;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'"' => {
                    in_opaque = !in_opaque;
                    i += 1;
                }
                b' ' if !in_opaque
                    && i + 3 < bytes.len()
                    && bytes[i + 1].eq_ignore_ascii_case(&b'a')
                    && bytes[i + 2].eq_ignore_ascii_case(&b's')
                    && bytes[i + 3] == b' ' =>
                {
                    self.quote_segment(buf, &expr[seg_start..i]);
                    buf.push_str(&expr[i..i + 4]);
                    seg_start = i + 4;
                    i += 4;
                }
                _ => i += 1,
            }
        }
        self.quote_segment(buf, &expr[seg_start..]);
    }

    /// Splits one alias-free segment on `.` and quotes each token. Dots
    /// inside double-quoted tokens do not separate.
    fn quote_segment(&self, buf: &mut String, seg: &str) {
        let bytes = seg.as_bytes();
        let mut i = 0;
        loop {
            let start = i;
            let mut end = bytes.len();
            let mut in_opaque = false;
            let mut j = i;
            while j < bytes.len() {
                match bytes[j] {
                    b'"' => {
                        in_opaque = !in_opaque;
                        j += 1;
                    }
                    b'.' if !in_opaque => {
                        end = j;
                        break;
                    }
                    _ => j += 1,
                }
            }
            self.quote_token(buf, &seg[start..end]);
            if end == bytes.len() {
                break;
            }
            buf.push('.');
            i = end + 1;
        }
    }

    /// Quotes a single token: strips one pair of wrapping quotes, then wraps
    /// in this quoter's pair iff the reserved predicate says so.
    fn quote_token(&self, buf: &mut String, word: &str) {
        if word.is_empty() {
            return;
        }
        // the wildcard is never quoted
        if word == "*" {
            buf.push('*');
            return;
        }
        // A double-quoted token is opaque: it is not stripped, and the
        // predicate sees it as written. The dialect's own pair is stripped
        // first, so a `"`-quoting dialect stays idempotent.
        match self.strip_one_pair(word) {
            Some("") => buf.push_str(word),
            Some(inner) => self.emit_word(buf, inner),
            None => self.emit_word(buf, word),
        }
    }

    /// Strips one matching pair of wrapping quotes: the dialect's own pair,
    /// back-ticks, or brackets. Double quotes are not stripped unless they
    /// are the dialect's pair.
    fn strip_one_pair<'a>(&self, word: &'a str) -> Option<&'a str> {
        let pairs = [self.quotes, Some(('`', '`')), Some(('[', ']'))];
        for &(open, close) in pairs.iter().flatten() {
            if word.len() >= open.len_utf8() + close.len_utf8()
                && word.starts_with(open)
                && word.ends_with(close)
            {
                return Some(&word[open.len_utf8()..word.len() - close.len_utf8()]);
            }
        }
        None
    }

    /// Writes `word`, wrapped in the quote pair when the predicate demands.
    fn emit_word(&self, buf: &mut String, word: &str) {
        match self.quotes {
            Some((open, close)) if self.reserved.check(word) => {
                buf.push(open);
                buf.push_str(word);
                buf.push(close);
            }
            _ => buf.push_str(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_reserve_brackets() {
        let q = Quoter::always('[', ']');
        assert_eq!(q.quote("mytable"), "[mytable]");
        assert_eq!(q.quote("`mytable`"), "[mytable]");
        assert_eq!(q.quote("[mytable]"), "[mytable]");
        assert_eq!(q.quote("myschema.mytable"), "[myschema].[mytable]");
        assert_eq!(q.quote("`myschema`.`mytable`"), "[myschema].[mytable]");
    }

    #[test]
    fn test_mixed_quoting_styles() {
        let q = Quoter::always('[', ']');
        assert_eq!(q.quote("`myschema`.mytable"), "[myschema].[mytable]");
        assert_eq!(q.quote("myschema.`mytable`"), "[myschema].[mytable]");
        assert_eq!(q.quote("[myschema].mytable"), "[myschema].[mytable]");
        assert_eq!(q.quote("myschema.[mytable]"), "[myschema].[mytable]");
    }

    #[test]
    fn test_opaque_double_quotes() {
        let q = Quoter::always('[', ']');
        assert_eq!(q.quote("\"mytable\""), "[\"mytable\"]");
        // interior dots do not split an opaque token
        assert_eq!(q.quote("\"myschema.mytable\""), "[\"myschema.mytable\"]");
    }

    #[test]
    fn test_wildcard_not_quoted() {
        let q = Quoter::always('[', ']');
        assert_eq!(q.quote("*"), "*");
        assert_eq!(q.quote("mytable.*"), "[mytable].*");
        assert_eq!(q.quote("[mytable].*"), "[mytable].*");
    }

    #[test]
    fn test_alias_clause() {
        let q = Quoter::always('[', ']');
        assert_eq!(q.quote("mytable AS m"), "[mytable] AS [m]");
        assert_eq!(q.quote("`message_user` AS `sender`"), "[message_user] AS [sender]");
        // the separator keeps its original casing
        assert_eq!(q.quote("mytable as m"), "[mytable] as [m]");
        assert_eq!(
            q.quote("myschema.mytable AS m"),
            "[myschema].[mytable] AS [m]"
        );
    }

    #[test]
    fn test_whitespace_preserved() {
        let q = Quoter::always('[', ']');
        assert_eq!(q.quote(" mytable "), " [mytable] ");
        assert_eq!(q.quote("   mytable"), "   [mytable]");
        assert_eq!(q.quote(""), "");
        assert_eq!(q.quote("   "), "   ");
    }

    #[test]
    fn test_never_reserve_strips() {
        let q = Quoter::never('[', ']');
        assert_eq!(q.quote("`myschema`.`mytable`"), "myschema.mytable");
        assert_eq!(q.quote("[mytable]"), "mytable");
        assert_eq!(q.quote("mytable"), "mytable");
    }

    #[test]
    fn test_custom_predicate() {
        let q = Quoter::new('[', ']', Reserved::custom(|w| w == "mytable"));
        assert_eq!(q.quote("myschema.mytable"), "myschema.[mytable]");
        assert_eq!(q.quote("`mytable`"), "[mytable]");
        assert_eq!(q.quote("[mytable].*"), "[mytable].*");
    }

    #[test]
    fn test_keyword_predicate() {
        static WORDS: &[&str] = &["SELECT", "ORDER"];
        let q = Quoter::new('"', '"', Reserved::Keywords(WORDS));
        assert_eq!(q.quote("order"), "\"order\"");
        assert_eq!(q.quote("user_id"), "user_id");
    }

    #[test]
    fn test_plain_quoter() {
        let q = Quoter::plain();
        assert_eq!(q.quote("`a`.`b`"), "a.b");
        assert_eq!(q.quote("a AS b"), "a AS b");
        assert_eq!(q.trim("[keep] `everything`"), "[keep] `everything`");
    }

    #[test]
    fn test_double_quote_dialect_idempotent() {
        // when the dialect pair is `"`, stripping wins over opaqueness
        let q = Quoter::always('"', '"');
        let once = q.quote("mytable");
        assert_eq!(once, "\"mytable\"");
        assert_eq!(q.quote(&once), once);
    }

    #[test]
    fn test_idempotence() {
        let quoters = [
            Quoter::always('[', ']'),
            Quoter::always('`', '`'),
            Quoter::always('"', '"'),
            Quoter::never('[', ']'),
            Quoter::plain(),
        ];
        let inputs = [
            "mytable",
            "`mytable`",
            "myschema.mytable",
            "\"myschema.mytable\"",
            " mytable ",
            "mytable AS m",
            "t.*",
            "*",
        ];
        for q in &quoters {
            for input in inputs {
                let once = q.quote(input);
                assert_eq!(q.quote(&once), once, "quoting {input:?} twice drifted");
            }
        }
    }

    #[test]
    fn test_empty_pair_left_alone() {
        let q = Quoter::always('[', ']');
        assert_eq!(q.quote("``"), "``");
        assert_eq!(q.quote("[]"), "[]");
    }

    #[test]
    fn test_join() {
        let q = Quoter::always('`', '`');
        assert_eq!(q.join(&["a", " b", "c.d"], ", "), "`a`, `b`, `c`.`d`");
        assert_eq!(q.join::<&str>(&[], ", "), "");
    }

    #[test]
    fn test_strings() {
        let q = Quoter::always('[', ']');
        assert_eq!(q.strings(&["a", "b.c"]), vec!["[a]", "[b].[c]"]);
    }

    #[test]
    fn test_trim() {
        let q = Quoter::always('[', ']');
        assert_eq!(q.trim("[myschema].[mytable]"), "myschema.mytable");
        assert_eq!(q.trim("plain"), "plain");
    }

    #[test]
    fn test_replace_basic() {
        let q = Quoter::always('[', ']');
        assert_eq!(
            q.replace("SELECT `a`, `b` FROM `t`"),
            "SELECT [a], [b] FROM [t]"
        );
    }

    #[test]
    fn test_replace_preserves_literals() {
        let q = Quoter::always('[', ']');
        assert_eq!(
            q.replace("SELECT 'abc```test```''', `a` FROM b"),
            "SELECT 'abc```test```''', [a] FROM b"
        );
        assert_eq!(q.replace("SELECT '`not an ident`'"), "SELECT '`not an ident`'");
    }

    #[test]
    fn test_replace_plain_quoter_is_identity() {
        let q = Quoter::plain();
        assert_eq!(q.replace("SELECT `a` FROM `t`"), "SELECT `a` FROM `t`");
    }

    #[test]
    fn test_replace_no_predicate_check() {
        // back-ticks declare intent to quote, even for non-reserved words
        let q = Quoter::new('[', ']', Reserved::Never);
        assert_eq!(q.replace("SELECT `a` FROM t"), "SELECT [a] FROM t");
    }
}
