//! Grammar descriptors and the capability of providing one.

use std::fmt;

/// Raw accessor emitted by `tree-sitter generate`, e.g. `tree_sitter_veld`.
pub type RawLanguageFn = unsafe extern "C" fn() -> *const ();

/// Opaque, read-only handle on a compiled grammar.
///
/// A descriptor only records where the compiled language can be fetched from;
/// nothing is called until it is loaded.
#[derive(Clone, Copy)]
pub struct GrammarDescriptor {
    name: &'static str,
    accessor: Option<RawLanguageFn>,
}

impl GrammarDescriptor {
    /// Describes a grammar whose language is returned by `accessor`.
    ///
    /// # Safety
    ///
    /// `accessor` must return either null or a pointer to a `TSLanguage`
    /// that stays valid for the whole process.
    pub const unsafe fn from_raw(name: &'static str, accessor: RawLanguageFn) -> Self {
        Self {
            name,
            accessor: Some(accessor),
        }
    }

    /// Describes a grammar whose compiled artifact is not part of this build.
    pub const fn unlinked(name: &'static str) -> Self {
        Self {
            name,
            accessor: None,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn is_linked(&self) -> bool {
        self.accessor.is_some()
    }

    /// Fetches the raw language pointer, `None` when nothing is linked.
    pub(crate) fn raw(&self) -> Option<*const ()> {
        // SAFETY: upheld by the caller of `from_raw`.
        self.accessor.map(|accessor| unsafe { accessor() })
    }
}

impl fmt::Debug for GrammarDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrammarDescriptor")
            .field("name", &self.name)
            .field("linked", &self.is_linked())
            .finish()
    }
}

/// Anything that can hand out a [`GrammarDescriptor`].
pub trait LanguageSource {
    fn descriptor(&self) -> GrammarDescriptor;
}

impl LanguageSource for GrammarDescriptor {
    fn descriptor(&self) -> GrammarDescriptor {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe extern "C" fn null_language() -> *const () {
        std::ptr::null()
    }

    #[test]
    fn unlinked_descriptor_has_no_language() {
        let descriptor = GrammarDescriptor::unlinked("veld");
        assert_eq!(descriptor.name(), "veld");
        assert!(!descriptor.is_linked());
        assert!(descriptor.raw().is_none());
    }

    #[test]
    fn raw_calls_the_accessor() {
        let descriptor = unsafe { GrammarDescriptor::from_raw("broken", null_language) };
        assert!(descriptor.is_linked());
        assert_eq!(descriptor.raw(), Some(std::ptr::null()));
    }

    #[test]
    fn descriptor_is_its_own_source() {
        let descriptor = GrammarDescriptor::unlinked("veld");
        assert_eq!(descriptor.descriptor().name(), "veld");
    }

    #[test]
    fn debug_hides_the_accessor() {
        let descriptor = GrammarDescriptor::unlinked("veld");
        assert_eq!(
            format!("{descriptor:?}"),
            r#"GrammarDescriptor { name: "veld", linked: false }"#
        );
    }
}
