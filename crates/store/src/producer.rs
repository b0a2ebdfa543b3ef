use std::fmt;
use std::sync::Arc;

/// Computes a stored value on demand.
///
/// The `target` argument is always `""` when the store evaluates a producer.
/// It is kept so producers can be shared with callers that pass a meaningful
/// target.
pub trait Producer<V>: Send + Sync {
	fn evaluate(&self, target: &str) -> V;
}

impl<V, F> Producer<V> for F
where
	F: Fn(&str) -> V + Send + Sync,
{
	fn evaluate(&self, target: &str) -> V {
		self(target)
	}
}

/// Type-erased producer handle as held by namespaces.
pub type SharedProducer<V> = Arc<dyn Producer<V>>;

/// Producer returning a clone of a fixed value.
#[derive(Clone, PartialEq, Eq)]
pub struct Constant<V>(pub V);

impl<V> Producer<V> for Constant<V>
where
	V: Clone + Send + Sync,
{
	fn evaluate(&self, _target: &str) -> V {
		self.0.clone()
	}
}

impl<V: fmt::Debug> fmt::Debug for Constant<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Constant").field(&self.0).finish()
	}
}
