use crate::flag::Flag;

/// Store is an interface for anything that can look up feature flags by name.
///
/// [crate::Registry] is the implementation used in practice; evaluation only needs read access,
/// so [crate::evaluate] is written against this trait.
pub trait Store {
    /// Retrieve a copy of the flag named `name`.
    fn flag(&self, name: &str) -> Option<Flag>;
}
