//! Typed endpoint table entries.
//!
//! Every API operation the crate supports is declared as a `const`
//! [`Endpoint`] binding a path template to its response shape. Service
//! methods stay thin marshalling wrappers over the executor while the
//! endpoint tables remain declarative and greppable.

use std::marker::PhantomData;

/// One entry of an endpoint table: a GET path template tied to the
/// response type it deserializes into.
///
/// The type parameter never holds data; `PhantomData<fn() -> T>` keeps
/// the entry `Send + Sync` regardless of `T`.
pub(crate) struct Endpoint<T> {
    /// Path template relative to the client base address, with `[name]`
    /// placeholders resolved per call.
    pub(crate) path: &'static str,
    marker: PhantomData<fn() -> T>,
}

impl<T> Endpoint<T> {
    /// Declare a table entry. `const`-friendly so tables can live in
    /// `const` items next to the service that owns them.
    pub(crate) const fn get(path: &'static str) -> Self {
        Self {
            path,
            marker: PhantomData,
        }
    }
}
