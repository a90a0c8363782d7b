//! Table-name resolution for record types.

use crate::mapper::Mapper;

/// A record type participating in table-name resolution.
///
/// The default implementation defers to the engine's mapper. A record that
/// wants to pick its own table name overrides
/// [`custom_table_name`](Self::custom_table_name); the override is consulted
/// on the live instance, so the name may depend on instance state (sharded
/// tables like `mytable_7`).
pub trait TableRecord {
    /// Explicit table name for this record instance, or `None` to defer to
    /// the mapper.
    fn custom_table_name(&self) -> Option<String> {
        None
    }
}

// The capability is visible through references and boxes, so resolution
// works whether the engine holds the record by value or by pointer.
impl<T: TableRecord + ?Sized> TableRecord for &T {
    fn custom_table_name(&self) -> Option<String> {
        (**self).custom_table_name()
    }
}

impl<T: TableRecord + ?Sized> TableRecord for Box<T> {
    fn custom_table_name(&self) -> Option<String> {
        (**self).custom_table_name()
    }
}

/// Resolves the SQL table name for `record`.
///
/// The record's own [`TableRecord::custom_table_name`] wins when present;
/// otherwise the record type's unqualified name is passed through `mapper`.
#[must_use]
pub fn get_table_name<M, T>(mapper: &M, record: &T) -> String
where
    M: Mapper + ?Sized,
    T: TableRecord + ?Sized,
{
    if let Some(name) = record.custom_table_name() {
        return name;
    }
    mapper.obj_to_table(short_type_name(std::any::type_name::<T>()))
}

/// Strips module paths, references, and smart-pointer wrappers from a type
/// name: `&alloc::boxed::Box<demo::Userinfo>` becomes `Userinfo`.
fn short_type_name(full: &str) -> &str {
    let name = full.trim_start_matches('&');
    let name = match name.rfind('<') {
        Some(open) => name[open + 1..].trim_end_matches('>'),
        None => name,
    };
    name.rsplit("::").next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::{SameMapper, SnakeMapper};

    struct Userinfo;

    impl TableRecord for Userinfo {}

    struct ShardedLog {
        shard: u32,
    }

    impl TableRecord for ShardedLog {
        fn custom_table_name(&self) -> Option<String> {
            Some(format!("mytable_{}", self.shard))
        }
    }

    #[test]
    fn test_mapper_fallback() {
        assert_eq!(get_table_name(&SnakeMapper, &Userinfo), "userinfo");
        assert_eq!(get_table_name(&SameMapper, &Userinfo), "Userinfo");
    }

    #[test]
    fn test_custom_name_wins() {
        let record = ShardedLog { shard: 7 };
        assert_eq!(get_table_name(&SnakeMapper, &record), "mytable_7");
        // the override reads live instance state
        let record = ShardedLog { shard: 12 };
        assert_eq!(get_table_name(&SnakeMapper, &record), "mytable_12");
    }

    #[test]
    fn test_pointer_forms() {
        let record = ShardedLog { shard: 3 };
        assert_eq!(get_table_name(&SnakeMapper, &&record), "mytable_3");

        let boxed: Box<ShardedLog> = Box::new(ShardedLog { shard: 4 });
        assert_eq!(get_table_name(&SnakeMapper, &boxed), "mytable_4");

        let boxed_plain: Box<Userinfo> = Box::new(Userinfo);
        assert_eq!(get_table_name(&SnakeMapper, &boxed_plain), "userinfo");
    }

    #[test]
    fn test_dyn_mapper() {
        let mapper: &dyn Mapper = &SnakeMapper;
        assert_eq!(get_table_name(mapper, &Userinfo), "userinfo");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("demo::Userinfo"), "Userinfo");
        assert_eq!(short_type_name("Userinfo"), "Userinfo");
        assert_eq!(
            short_type_name("&alloc::boxed::Box<demo::Userinfo>"),
            "Userinfo"
        );
    }
}
