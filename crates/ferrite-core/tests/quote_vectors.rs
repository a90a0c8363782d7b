//! End-to-end quoting vectors across quoter configurations.
//!
//! These exercise the full identifier grammar (bare, back-ticked,
//! bracketed, double-quoted, qualified, aliased, wildcarded) against
//! always-reserve, predicate, and never-reserve quoters.

use ferrite_core::quote::{Quoter, Reserved};

// =============================================================================
// Always-reserve quoter with [ ]
// =============================================================================

#[test]
fn always_reserve_brackets() {
    let q = Quoter::always('[', ']');
    let kases = [
        ("mytable", "[mytable]"),
        ("`mytable`", "[mytable]"),
        ("[mytable]", "[mytable]"),
        ("\"mytable\"", "[\"mytable\"]"),
        ("myschema.mytable", "[myschema].[mytable]"),
        ("`myschema`.`mytable`", "[myschema].[mytable]"),
        ("`myschema`.mytable", "[myschema].[mytable]"),
        ("myschema.`mytable`", "[myschema].[mytable]"),
        ("\"myschema.mytable\"", "[\"myschema.mytable\"]"),
        ("[myschema].[mytable]", "[myschema].[mytable]"),
        ("`message_user` AS `sender`", "[message_user] AS [sender]"),
        ("mytable AS m", "[mytable] AS [m]"),
        (" mytable ", " [mytable] "),
        ("  mytable AS m  ", "  [mytable] AS [m]  "),
        ("*", "*"),
        ("mytable.*", "[mytable].*"),
    ];
    for (input, expected) in kases {
        assert_eq!(q.quote(input), expected, "quoting {input:?}");
    }
}

// =============================================================================
// Predicate quoter reserving only "mytable", with [ ]
// =============================================================================

#[test]
fn predicate_reserve_brackets() {
    let q = Quoter::new('[', ']', Reserved::custom(|w| w == "mytable"));
    let kases = [
        ("myschema.mytable", "myschema.[mytable]"),
        ("`mytable`", "[mytable]"),
        ("[mytable].*", "[mytable].*"),
        ("myschema.other", "myschema.other"),
    ];
    for (input, expected) in kases {
        assert_eq!(q.quote(input), expected, "quoting {input:?}");
    }
}

// =============================================================================
// Never-reserve quoter: strips existing quoting
// =============================================================================

#[test]
fn never_reserve_strips_quoting() {
    let q = Quoter::never('[', ']');
    let kases = [
        ("`myschema`.`mytable`", "myschema.mytable"),
        ("[myschema].[mytable]", "myschema.mytable"),
        ("mytable", "mytable"),
        ("`mytable` AS m", "mytable AS m"),
    ];
    for (input, expected) in kases {
        assert_eq!(q.quote(input), expected, "quoting {input:?}");
    }
}

// =============================================================================
// Replace: back-tick rewriting across SQL statements
// =============================================================================

#[test]
fn replace_rewrites_backticks() {
    let q = Quoter::always('[', ']');
    assert_eq!(
        q.replace("SELECT `a`, `b` FROM `t`"),
        "SELECT [a], [b] FROM [t]"
    );
    assert_eq!(
        q.replace("SELECT 'abc```test```''', `a` FROM b"),
        "SELECT 'abc```test```''', [a] FROM b"
    );
    assert_eq!(
        q.replace("UPDATE `t` SET `v` = 'a''b`c'"),
        "UPDATE [t] SET [v] = 'a''b`c'"
    );
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn quoting_is_idempotent() {
    let quoters = [
        Quoter::always('[', ']'),
        Quoter::always('`', '`'),
        Quoter::always('"', '"'),
        Quoter::new('[', ']', Reserved::custom(|w| w.len() > 3)),
        Quoter::never('"', '"'),
        Quoter::plain(),
    ];
    let inputs = [
        "mytable",
        "`mytable`",
        "[mytable]",
        "\"mytable\"",
        "myschema.mytable",
        "\"myschema.mytable\"",
        "mytable AS m",
        " padded ",
        "t.*",
        "*",
        "a.b.c",
    ];
    for q in &quoters {
        for input in inputs {
            let once = q.quote(input);
            assert_eq!(q.quote(&once), once, "double-quoting {input:?} drifted");
        }
    }
}

#[test]
fn wildcard_stays_bare() {
    let q = Quoter::always('[', ']');
    for schema in ["s", "mytable", "a.b"] {
        let quoted = q.quote(&format!("{schema}.*"));
        assert!(quoted.ends_with(".*"), "{quoted} should end in .*");
        assert!(!quoted.ends_with("[*]"));
    }
}

#[test]
fn opaque_tokens_survive() {
    let q = Quoter::always('[', ']');
    for content in ["mytable", "my table", "my.schema.table", "select"] {
        let quoted = q.quote(&format!("\"{content}\""));
        assert!(
            quoted.contains(&format!("\"{content}\"")),
            "{quoted} lost the opaque token"
        );
    }
}

#[test]
fn join_trims_left_only() {
    let q = Quoter::always('`', '`');
    assert_eq!(q.join(&["  a", "b"], ", "), "`a`, `b`");
    // trailing spaces inside an element are preserved by quote_to
    assert_eq!(q.join(&["a ", "b"], " | "), "`a`  | `b`");
}
