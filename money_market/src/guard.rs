multiversx_sc::imports!();

/// Scoped hold on the pool's `mutation_in_progress` flag.
///
/// The flag is raised when the guard is created and cleared when it goes out of scope, so every
/// exit path of an endpoint releases it. Failed calls roll back the flag together with the rest
/// of the storage.
pub struct MutationGuard<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
}

impl<'a, C> MutationGuard<'a, C>
where
    C: crate::storage::Storage,
{
    /// Raises the flag. Callers must have checked that it was not already raised.
    pub fn new(sc_ref: &'a C) -> Self {
        sc_ref.mutation_in_progress().set(true);
        MutationGuard { sc_ref }
    }
}

impl<C> Drop for MutationGuard<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        self.sc_ref.mutation_in_progress().clear();
    }
}
