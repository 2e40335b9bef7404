//! Deferred operations: a callable bound with its input ahead of time

use async_trait::async_trait;
use std::future::Future;

/// A deferred unit of work
///
/// Operations are retry-agnostic; the same operation value can be handed
/// to any orchestrator. `execute` re-runs the underlying call every time
/// it is invoked, never a memoized result.
#[async_trait]
pub trait Operation {
    type Output;
    type Error;

    /// Run the operation, returning its result or surfacing its failure
    /// unmodified
    async fn execute(&self) -> Result<Self::Output, Self::Error>;
}

/// An async callable bound with an optional payload
///
/// Both the callable and the payload are captured at construction and
/// never mutated. Each `execute` invokes the callable with a clone of
/// the bound payload.
pub struct Call<F, P> {
    call: F,
    payload: Option<P>,
}

impl<F, P> Call<F, P> {
    /// Bind a callable with no payload
    pub fn new(call: F) -> Self {
        Self {
            call,
            payload: None,
        }
    }

    /// Bind a callable and the payload to invoke it with
    pub fn bound(call: F, payload: P) -> Self {
        Self {
            call,
            payload: Some(payload),
        }
    }
}

#[async_trait]
impl<F, Fut, P, T, E> Operation for Call<F, P>
where
    F: Fn(Option<P>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    P: Clone + Send + Sync,
    T: Send + 'static,
    E: Send + 'static,
{
    type Output = T;
    type Error = E;

    async fn execute(&self) -> Result<T, E> {
        (self.call)(self.payload.clone()).await
    }
}
