//! # ferrite-names
//!
//! Record-name ↔ SQL-name translation for the ferrite ORM.
//!
//! A [`Mapper`] turns record-type and field identifiers into SQL identifiers
//! and back. Three policies ship with the crate:
//!
//! - [`SameMapper`]: identity in both directions
//! - [`SnakeMapper`]: `Userinfo` ↔ `userinfo`, `OAuth2Application` ↔
//!   `o_auth2_application`
//! - [`GonicMapper`]: snake-case with an acronym set, so
//!   `OAuth2Application` ↔ `oauth2_application` and `APIKey` ↔ `api_key`
//!
//! [`PrefixMapper`] and [`SuffixMapper`] wrap any other mapper to add a
//! fixed table-name prefix or suffix.
//!
//! A record type may override its mapped table name by implementing
//! [`TableRecord::custom_table_name`]; [`get_table_name`] consults the
//! override on the live instance before falling back to the mapper.
//!
//! ```rust
//! use ferrite_names::{get_table_name, Mapper, SnakeMapper, TableRecord};
//!
//! struct Userinfo;
//! impl TableRecord for Userinfo {}
//!
//! assert_eq!(get_table_name(&SnakeMapper, &Userinfo), "userinfo");
//! assert_eq!(SnakeMapper.table_to_obj("userinfo"), "Userinfo");
//! ```

mod mapper;
mod table;

pub use mapper::{
    by_name, GonicMapper, Mapper, PrefixMapper, SameMapper, SnakeMapper, SuffixMapper,
};
pub use table::{get_table_name, TableRecord};
