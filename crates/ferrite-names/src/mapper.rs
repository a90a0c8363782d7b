//! Name mapping policies.

use std::sync::OnceLock;

/// Translates record-type and field identifiers to SQL identifiers and back.
///
/// Mappers are pure and immutable after construction; both directions are
/// total functions. For names a mapper produced itself,
/// `table_to_obj(obj_to_table(n)) == n`.
pub trait Mapper: Send + Sync {
    /// Maps a record-type or field name to a SQL identifier.
    fn obj_to_table(&self, name: &str) -> String;

    /// Maps a SQL identifier back to a record-type or field name.
    fn table_to_obj(&self, name: &str) -> String;
}

/// Identity mapping: SQL names equal record names.
#[derive(Debug, Default, Clone, Copy)]
pub struct SameMapper;

impl Mapper for SameMapper {
    fn obj_to_table(&self, name: &str) -> String {
        name.to_owned()
    }

    fn table_to_obj(&self, name: &str) -> String {
        name.to_owned()
    }
}

/// Snake-case mapping: `Userinfo` ↔ `userinfo`.
///
/// An underscore is inserted before every upper-case ASCII letter that is
/// preceded or followed by a lower-case letter; the result is lowercased.
/// Non-ASCII letters pass through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnakeMapper;

impl Mapper for SnakeMapper {
    fn obj_to_table(&self, name: &str) -> String {
        snake_cased(name)
    }

    fn table_to_obj(&self, name: &str) -> String {
        title_cased(name)
    }
}

/// Lint-friendly snake-case mapping with an acronym set.
///
/// Configured acronyms are treated as single lexical units, so
/// `OAuth2Application` maps to `oauth2_application` rather than
/// `o_auth2_application`, and the reverse direction restores the acronym in
/// its configured casing.
#[derive(Debug, Clone)]
pub struct GonicMapper {
    /// Sorted longest-first so the greedy match prefers `HTTPS` over `HTTP`.
    acronyms: Vec<String>,
}

impl GonicMapper {
    /// Creates a mapper from an acronym set.
    #[must_use]
    pub fn new<S: Into<String>>(acronyms: impl IntoIterator<Item = S>) -> Self {
        let mut acronyms: Vec<String> = acronyms.into_iter().map(Into::into).collect();
        acronyms.sort_by_key(|a| std::cmp::Reverse(a.len()));
        Self { acronyms }
    }

    /// The standard lint acronym set.
    #[must_use]
    pub fn lint() -> Self {
        Self::new([
            "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
            "IP", "JSON", "LHS", "OAuth2", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL",
            "SSH", "TLS", "TTL", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XSRF",
            "XSS",
        ])
    }

    /// Length in chars of the acronym matching at `chars[i..]`, if any.
    ///
    /// A match must start at a word boundary and end before anything but a
    /// lower-case letter, so `ID` matches in `MyID` but not in `Identity`.
    fn acronym_at(&self, chars: &[char], i: usize) -> Option<usize> {
        if i > 0 && chars[i - 1].is_ascii_uppercase() {
            return None;
        }
        for acronym in &self.acronyms {
            let len = acronym.chars().count();
            if i + len > chars.len() {
                continue;
            }
            if acronym.chars().zip(&chars[i..]).all(|(a, &c)| a == c)
                && chars.get(i + len).map_or(true, |c| !c.is_ascii_lowercase())
            {
                return Some(len);
            }
        }
        None
    }
}

impl Mapper for GonicMapper {
    fn obj_to_table(&self, name: &str) -> String {
        let chars: Vec<char> = name.chars().collect();
        let mut out = String::with_capacity(name.len() + 4);
        let mut i = 0;
        while i < chars.len() {
            if let Some(len) = self.acronym_at(&chars, i) {
                if !out.is_empty() && !out.ends_with('_') {
                    out.push('_');
                }
                for c in &chars[i..i + len] {
                    out.push(c.to_ascii_lowercase());
                }
                i += len;
                continue;
            }
            let c = chars[i];
            if c.is_ascii_uppercase() && i > 0 && !out.is_empty() && !out.ends_with('_') {
                let prev_lower = chars[i - 1].is_ascii_lowercase();
                let next_lower = chars
                    .get(i + 1)
                    .is_some_and(|next| next.is_ascii_lowercase());
                if prev_lower || next_lower {
                    out.push('_');
                }
            }
            out.push(c.to_ascii_lowercase());
            i += 1;
        }
        out
    }

    fn table_to_obj(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        for part in name.split('_') {
            if part.is_empty() {
                continue;
            }
            if let Some(acronym) = self
                .acronyms
                .iter()
                .find(|a| a.eq_ignore_ascii_case(part))
            {
                out.push_str(acronym);
            } else {
                let mut chars = part.chars();
                if let Some(first) = chars.next() {
                    out.push(first.to_ascii_uppercase());
                    out.extend(chars);
                }
            }
        }
        out
    }
}

/// Adds a fixed prefix to another mapper's table names.
#[derive(Debug, Clone)]
pub struct PrefixMapper<M> {
    mapper: M,
    prefix: String,
}

impl<M: Mapper> PrefixMapper<M> {
    /// Wraps `mapper`, prepending `prefix` to every table name.
    #[must_use]
    pub fn new(mapper: M, prefix: impl Into<String>) -> Self {
        Self {
            mapper,
            prefix: prefix.into(),
        }
    }
}

impl<M: Mapper> Mapper for PrefixMapper<M> {
    fn obj_to_table(&self, name: &str) -> String {
        format!("{}{}", self.prefix, self.mapper.obj_to_table(name))
    }

    fn table_to_obj(&self, name: &str) -> String {
        self.mapper
            .table_to_obj(name.strip_prefix(&self.prefix).unwrap_or(name))
    }
}

/// Adds a fixed suffix to another mapper's table names.
#[derive(Debug, Clone)]
pub struct SuffixMapper<M> {
    mapper: M,
    suffix: String,
}

impl<M: Mapper> SuffixMapper<M> {
    /// Wraps `mapper`, appending `suffix` to every table name.
    #[must_use]
    pub fn new(mapper: M, suffix: impl Into<String>) -> Self {
        Self {
            mapper,
            suffix: suffix.into(),
        }
    }
}

impl<M: Mapper> Mapper for SuffixMapper<M> {
    fn obj_to_table(&self, name: &str) -> String {
        format!("{}{}", self.mapper.obj_to_table(name), self.suffix)
    }

    fn table_to_obj(&self, name: &str) -> String {
        self.mapper
            .table_to_obj(name.strip_suffix(&self.suffix).unwrap_or(name))
    }
}

/// Resolves a mapper by configuration name: `snake`, `same`, or `gonic`.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static dyn Mapper> {
    static GONIC: OnceLock<GonicMapper> = OnceLock::new();
    match name.to_ascii_lowercase().as_str() {
        "snake" => Some(&SnakeMapper),
        "same" => Some(&SameMapper),
        "gonic" | "lint" => Some(GONIC.get_or_init(GonicMapper::lint)),
        _ => None,
    }
}

/// Underscore before upper-case letters at word boundaries, then lowercase.
fn snake_cased(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev_lower = chars[i - 1].is_ascii_lowercase();
            let next_lower = chars
                .get(i + 1)
                .is_some_and(|next| next.is_ascii_lowercase());
            if (prev_lower || next_lower) && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Capitalizes each underscore-separated part.
fn title_cased(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
