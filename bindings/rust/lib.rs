//! Rust bindings for the `tree-sitter-veld` grammar.
//!
//! This follows the standard layout used by Tree-sitter grammars: the build
//! script links the generated parser, `language()` returns the
//! [`tree_sitter::Language`] handle, and the query files ship as constants.
//!
//! ```ignore
//! let mut parser = tree_sitter::Parser::new();
//! parser
//!     .set_language(&tree_sitter_veld::language())
//!     .expect("Error loading veld grammar");
//! ```
//!
//! [`verify_grammar_loads`] and [`load_grammar`] check the linked grammar
//! without panicking, and [`load`] does the same for any other
//! [`LanguageSource`].

mod error;
mod source;
mod verify;

pub use error::GrammarLoadError;
pub use source::{GrammarDescriptor, LanguageSource, RawLanguageFn};
pub use verify::{check_abi_version, load, verify, LanguageHandle};

#[cfg(veld_parser)]
use tree_sitter::Language;

#[cfg(veld_parser)]
extern "C" {
    fn tree_sitter_veld() -> *const ();
}

/// Descriptor of the Veld grammar compiled into this crate.
#[cfg(veld_parser)]
pub const VELD_GRAMMAR: GrammarDescriptor =
    unsafe { GrammarDescriptor::from_raw("veld", tree_sitter_veld) };

/// Descriptor of the Veld grammar; the generated parser was missing at build
/// time, so loading it reports [`GrammarLoadError::NotLinked`].
#[cfg(not(veld_parser))]
pub const VELD_GRAMMAR: GrammarDescriptor = GrammarDescriptor::unlinked("veld");

/// Returns the Tree-sitter [`Language`] for this grammar.
#[cfg(veld_parser)]
pub fn language() -> Language {
    unsafe { Language::from_raw(tree_sitter_veld() as _) }
}

/// Checks that the Veld grammar linked into this crate loads into the
/// Tree-sitter runtime.
pub fn verify_grammar_loads() -> Result<(), GrammarLoadError> {
    verify(&VELD_GRAMMAR)
}

/// Like [`verify_grammar_loads`], but keeps the loaded handle.
pub fn load_grammar() -> Result<LanguageHandle, GrammarLoadError> {
    load(&VELD_GRAMMAR)
}

/// The syntax highlighting queries for this grammar.
pub const HIGHLIGHTS_QUERY: &str = include_str!("../../queries/highlights.scm");

/// The content of the [`node-types.json`] file for this grammar.
///
/// [`node-types.json`]: https://tree-sitter.github.io/tree-sitter/using-parsers#static-node-types
#[cfg(veld_node_types)]
pub const NODE_TYPES: &str = include_str!("../../src/node-types.json");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_load_grammar() {
        if let Err(error) = verify_grammar_loads() {
            panic!("{error}");
        }
    }

    #[cfg(veld_parser)]
    #[test]
    fn repeated_loads_are_equivalent() {
        let first = load(&VELD_GRAMMAR).expect("Error loading veld grammar");
        let second = load(&VELD_GRAMMAR).expect("Error loading veld grammar");

        assert_eq!(first.name(), "veld");
        assert_eq!(first.abi_version(), second.abi_version());
        assert_eq!(first.node_kind_count(), second.node_kind_count());
        drop(first);
        assert!(second.node_kind_count() > 0);
    }

    #[cfg(veld_parser)]
    #[test]
    fn language_knows_the_root_node() {
        let language = language();
        assert_ne!(language.id_for_node_kind("source_file", true), 0);
        assert!(language.field_id_for_name("condition").is_some());
    }

    #[cfg(veld_parser)]
    #[test]
    fn highlights_query_compiles() {
        tree_sitter::Query::new(&language(), HIGHLIGHTS_QUERY)
            .expect("highlights.scm should compile against the veld grammar");
    }

    #[test]
    fn load_grammar_agrees_with_verify() {
        match (load_grammar(), verify_grammar_loads()) {
            (Ok(handle), Ok(())) => assert_eq!(handle.name(), "veld"),
            (Err(loaded), Err(verified)) => {
                assert_eq!(loaded.grammar(), "veld");
                assert_eq!(loaded.to_string(), verified.to_string());
            }
            (loaded, verified) => panic!("diverged: {loaded:?} vs {verified:?}"),
        }
    }

    #[test]
    fn descriptor_names_the_grammar() {
        assert_eq!(VELD_GRAMMAR.name(), "veld");
        assert_eq!(VELD_GRAMMAR.is_linked(), cfg!(veld_parser));
    }

    #[test]
    fn highlights_query_captures_keywords() {
        assert!(HIGHLIGHTS_QUERY.contains("@keyword"));
    }

    #[cfg(veld_node_types)]
    #[test]
    fn node_types_list_the_root() {
        assert!(NODE_TYPES.contains("\"source_file\""));
    }
}
