//! SQL identifier quoting.
//!
//! Callers name tables and columns in whatever spelling their code base
//! grew up with: bare (`mytable`), back-ticked (`` `mytable` ``), bracketed
//! (`[mytable]`), double-quoted (`"mytable"`), schema-qualified
//! (`myschema.mytable`), aliased (`mytable AS m`), or wildcarded (`t.*`).
//! This module normalizes all of them into the active dialect's quoting.

mod quoter;

pub use quoter::{Quoter, Reserved};
