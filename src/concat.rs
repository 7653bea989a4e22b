/// A concatenation of multiple borrowed morphemes with fixed size storage.
#[derive(Debug, Clone)]
pub(crate) struct Concat<'a, const N: usize> {
    storage: arrayvec::ArrayVec<&'a str, N>,
}

impl<'a, const N: usize> Concat<'a, N> {
    /// Concatenate the given strings, skipping empty ones.
    ///
    /// # Panics
    ///
    /// Panics if more than `N` non-empty strings are provided.
    pub(crate) fn new<I>(iter: I) -> Concat<'a, N>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Concat {
            storage: iter.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }

    /// Length of the concatenated string in bytes.
    pub(crate) fn len(&self) -> usize {
        self.storage.iter().map(|s| s.len()).sum()
    }

    /// Build an owned string out of the concatenation.
    pub(crate) fn to_owned_string(&self) -> String {
        let mut out = String::with_capacity(self.len());

        for string in &self.storage {
            out.push_str(string);
        }

        out
    }
}
