//! Loading grammar descriptors into the Tree-sitter runtime.

use tree_sitter::{Language, Parser, LANGUAGE_VERSION, MIN_COMPATIBLE_LANGUAGE_VERSION};

use crate::error::GrammarLoadError;
use crate::source::LanguageSource;

/// A language accepted by the parser runtime.
///
/// Only [`load`] builds these, so a handle never wraps a null language and
/// always carries an ABI version the linked runtime supports.
#[derive(Debug)]
pub struct LanguageHandle {
    name: &'static str,
    language: Language,
}

impl LanguageHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn into_language(self) -> Language {
        self.language
    }

    pub fn abi_version(&self) -> usize {
        self.language.version()
    }

    pub fn node_kind_count(&self) -> usize {
        self.language.node_kind_count()
    }
}

/// Rejects ABI versions the linked runtime cannot read.
pub fn check_abi_version(grammar: &'static str, version: usize) -> Result<(), GrammarLoadError> {
    if (MIN_COMPATIBLE_LANGUAGE_VERSION..=LANGUAGE_VERSION).contains(&version) {
        Ok(())
    } else {
        Err(GrammarLoadError::IncompatibleVersion {
            grammar,
            version,
            min: MIN_COMPATIBLE_LANGUAGE_VERSION,
            max: LANGUAGE_VERSION,
        })
    }
}

/// Turns the descriptor of `source` into a [`LanguageHandle`].
///
/// The language is registered with a throwaway [`Parser`], so a handle that
/// comes back is one the runtime has already accepted.
pub fn load<S: LanguageSource + ?Sized>(source: &S) -> Result<LanguageHandle, GrammarLoadError> {
    let descriptor = source.descriptor();
    let grammar = descriptor.name();

    let result = descriptor
        .raw()
        .ok_or(GrammarLoadError::NotLinked { grammar })
        .and_then(|raw| {
            if raw.is_null() {
                return Err(GrammarLoadError::NullLanguage { grammar });
            }
            // SAFETY: non-null, and the descriptor guarantees it points at a
            // `TSLanguage` that lives for the process.
            let language = unsafe { Language::from_raw(raw.cast()) };
            register(grammar, language)
        });

    match &result {
        Ok(handle) => tracing::debug!(
            grammar,
            abi_version = handle.abi_version(),
            node_kinds = handle.node_kind_count(),
            "grammar loaded"
        ),
        Err(error) => tracing::warn!(grammar, %error, "grammar failed to load"),
    }

    result
}

fn register(grammar: &'static str, language: Language) -> Result<LanguageHandle, GrammarLoadError> {
    check_abi_version(grammar, language.version())?;

    let mut parser = Parser::new();
    if parser.set_language(&language).is_err() {
        return Err(GrammarLoadError::IncompatibleVersion {
            grammar,
            version: language.version(),
            min: MIN_COMPATIBLE_LANGUAGE_VERSION,
            max: LANGUAGE_VERSION,
        });
    }

    if language.node_kind_count() == 0 {
        return Err(GrammarLoadError::EmptyGrammar { grammar });
    }

    Ok(LanguageHandle {
        name: grammar,
        language,
    })
}

/// Checks that `source` loads, discarding the handle.
pub fn verify<S: LanguageSource + ?Sized>(source: &S) -> Result<(), GrammarLoadError> {
    load(source).map(|_| ())
}
