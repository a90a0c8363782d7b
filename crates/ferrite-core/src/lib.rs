//! # ferrite-core
//!
//! The naming and identifier core of the ferrite ORM.
//!
//! This crate provides:
//! - A dialect-aware SQL identifier quoter that normalizes bare, back-ticked,
//!   bracketed, and double-quoted identifier expressions
//! - A `Dialect` trait with per-database quote pairs and reserved-word tables
//! - A connect-string parser for Oracle
//! - The `SqlValue` parameter type shared with the hook and cache crates
//!
//! ## Identifier Quoting
//!
//! A [`Quoter`] carries a quote pair and a reserved-word predicate. It
//! rewrites whatever identifier spelling a caller hands it into the dialect's
//! canonical form:
//!
//! ```rust
//! use ferrite_core::quote::Quoter;
//!
//! let quoter = Quoter::always('[', ']');
//! assert_eq!(quoter.quote("myschema.mytable"), "[myschema].[mytable]");
//! assert_eq!(quoter.quote("`mytable` AS m"), "[mytable] AS [m]");
//! assert_eq!(quoter.quote("t.*"), "[t].*");
//! ```
//!
//! Quoting is total: malformed input is repaired conservatively and no
//! operation returns an error.
//!
//! ## Dialects
//!
//! ```rust
//! use ferrite_core::dialect;
//!
//! let mysql = dialect::by_name("mysql").unwrap();
//! assert_eq!(mysql.quoter().quote("order"), "`order`");
//! assert_eq!(mysql.quoter().quote("user_id"), "user_id");
//! ```

pub mod dialect;
pub mod quote;
pub mod value;

pub use dialect::Dialect;
pub use quote::{Quoter, Reserved};
pub use value::{SqlValue, ToSqlValue};
