//! Lexer, parser, and typed reader for lantern's S-expression data files
//! (surface descriptions, texture sub-mappings, level snippets).
//!
//! This crate is intentionally dependency-free so asset tools and editors can
//! read data files without pulling in the video layer.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`value`] | `Value` |
//! | [`error`] | `ParseError`, `ReaderError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point, `Document` |
//! | [`mapping`] | `ReaderObject`, `ReaderMapping` |
//!
//! # Quick start
//!
//! ```rust
//! use lantern_reader::parse_str;
//!
//! let src = r#"
//!     (surface
//!       (diffuse-texture (file "tux.png"))
//!       (translate 4 -2))
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! let root = doc.root().unwrap();
//! assert_eq!(root.name, "surface");
//! assert_eq!(root.mapping.get_f32_vec("translate").unwrap(), Some(vec![4.0, -2.0]));
//! ```

pub mod error;
pub mod lexer;
pub mod mapping;
pub mod parser;
pub mod value;

pub use error::{ParseError, ReaderError};
pub use mapping::{ReaderMapping, ReaderObject};
pub use parser::{parse_str, Document};
pub use value::Value;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) { parse_str(src).unwrap(); }
    fn err(src: &str) { parse_str(src).unwrap_err(); }

    #[test] fn empty_document() { assert!(parse_str("").unwrap().items.is_empty()); }
    #[test] fn empty_list() { ok("()"); }
    #[test] fn nested_lists() { ok("(a (b (c 1 2) (d \"x\")))"); }
    #[test] fn comment_only() { ok("; nothing here\n"); }
    #[test] fn negative_and_real() { ok("(p -1 -0.5 .25 +3)"); }
    #[test] fn string_escape() { ok(r#"(text "say \"hi\"")"#); }
    #[test] fn booleans() { ok("(flip #t #f)"); }
    #[test] fn err_unclosed_list() { err("(surface (file \"a\")"); }
    #[test] fn err_stray_close() { err("(a))"); }
    #[test] fn err_bad_number() { err("(n 12abc)"); }

    #[test]
    fn root_skips_leading_atoms() {
        let doc = parse_str("42 (tilemap (width 3))").unwrap();
        assert_eq!(doc.root().unwrap().name, "tilemap");
    }

    #[test]
    fn root_of_atom_only_document_is_none() {
        assert!(parse_str("1 2 3").unwrap().root().is_none());
    }

    #[test]
    fn nesting_at_the_limit_parses() {
        let depth = parser::MAX_DEPTH;
        ok(&("(".repeat(depth) + &")".repeat(depth)));
    }

    #[test]
    fn runaway_nesting_is_an_error() {
        let src = "(".repeat(200_000) + &")".repeat(200_000);
        let e = parse_str(&src).unwrap_err();
        assert!(e.message.contains("nesting too deep"), "{}", e);
        assert_eq!((e.line, e.col), (1, parser::MAX_DEPTH + 1));
    }

    #[test]
    fn unclosed_list_reports_opening_position() {
        let e = parse_str("\n  (surface").unwrap_err();
        assert_eq!((e.line, e.col), (2, 3));
    }
}
