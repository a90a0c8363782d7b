//! SQL dialect support.
//!
//! Different databases quote identifiers differently and reserve different
//! words. This module provides a trait for dialect-specific behavior and a
//! registry that resolves dialects by configuration name. Lookups return
//! immutable, shareable configurations.

mod mssql;
mod mysql;
mod oracle;
mod postgres;
pub mod reserved;
mod sqlite;

pub use mssql::MssqlDialect;
pub use mysql::MysqlDialect;
pub use oracle::{parse_dsn, DsnError, OracleConnectInfo, OracleDialect};
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

use crate::quote::{Quoter, Reserved};

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the opening and closing identifier quote characters.
    fn identifier_quotes(&self) -> (char, char) {
        ('"', '"')
    }

    /// Returns the parameter placeholder style.
    fn parameter_placeholder(&self) -> &'static str {
        "?"
    }

    /// Returns the words that must be quoted when used as bare identifiers.
    fn reserved_words(&self) -> &'static [&'static str];

    /// Returns whether `word` needs quoting in this dialect.
    fn is_reserved(&self, word: &str) -> bool {
        self.reserved_words()
            .iter()
            .any(|kw| kw.eq_ignore_ascii_case(word))
    }

    /// Returns the immutable quoter configured for this dialect.
    fn quoter(&self) -> Quoter {
        let (open, close) = self.identifier_quotes();
        Quoter::new(open, close, Reserved::Keywords(self.reserved_words()))
    }
}

/// Resolves a dialect by configuration name.
///
/// Accepts the usual aliases (`postgresql`, `sqlite3`, `sqlserver`, …).
#[must_use]
pub fn by_name(name: &str) -> Option<&'static dyn Dialect> {
    match name.to_ascii_lowercase().as_str() {
        "mysql" | "mariadb" => Some(&MysqlDialect),
        "postgres" | "postgresql" => Some(&PostgresDialect),
        "mssql" | "sqlserver" => Some(&MssqlDialect),
        "oracle" => Some(&OracleDialect),
        "sqlite" | "sqlite3" => Some(&SqliteDialect),
        _ => None,
    }
}
