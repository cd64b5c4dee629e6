use thiserror::Error;

/// Why a grammar could not be turned into a usable [`LanguageHandle`].
///
/// Every message starts with `Error loading <grammar> grammar` so test output
/// identifies the grammar without extra context.
///
/// [`LanguageHandle`]: crate::LanguageHandle
#[derive(Debug, Error)]
pub enum GrammarLoadError {
    /// The generated parser was not compiled into this build.
    #[error("Error loading {grammar} grammar: parser is not linked (run `tree-sitter generate`)")]
    NotLinked { grammar: &'static str },

    /// The descriptor accessor returned a null language.
    #[error("Error loading {grammar} grammar: descriptor returned a null language")]
    NullLanguage { grammar: &'static str },

    /// The runtime cannot read this ABI version.
    #[error(
        "Error loading {grammar} grammar: ABI version {version} is outside the supported range {min}..={max}"
    )]
    IncompatibleVersion {
        grammar: &'static str,
        version: usize,
        min: usize,
        max: usize,
    },

    #[error("Error loading {grammar} grammar: language declares no node kinds")]
    EmptyGrammar { grammar: &'static str },
}

impl GrammarLoadError {
    /// Name of the grammar that failed to load.
    pub fn grammar(&self) -> &'static str {
        match self {
            Self::NotLinked { grammar }
            | Self::NullLanguage { grammar }
            | Self::IncompatibleVersion { grammar, .. }
            | Self::EmptyGrammar { grammar } => *grammar,
        }
    }
}
