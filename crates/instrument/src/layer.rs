//! Operations and the layers that wrap them

use std::fmt;
use std::sync::Arc;
use tallykv_core::{OperationName, Result, Value};

/// A named call taking positional scalar arguments
pub trait Operation: Send + Sync {
    /// Identity used for the operation's counter and history records
    fn name(&self) -> &OperationName;

    /// Invoke the operation
    fn call(&self, args: &[Value]) -> Result<Value>;
}

/// An [`Operation`] backed by a closure
pub struct FnOperation<F> {
    name: OperationName,
    f: F,
}

impl<F> FnOperation<F>
where
    F: Fn(&[Value]) -> Result<Value> + Send + Sync,
{
    /// Create an operation named `name` that runs `f`
    pub fn new(name: OperationName, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> Operation for FnOperation<F>
where
    F: Fn(&[Value]) -> Result<Value> + Send + Sync,
{
    fn name(&self) -> &OperationName {
        &self.name
    }

    fn call(&self, args: &[Value]) -> Result<Value> {
        (self.f)(args)
    }
}

impl<F> fmt::Debug for FnOperation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOperation").field("name", &self.name).finish()
    }
}

/// Turns an operation into a wrapped operation
pub trait Layer: Send + Sync {
    /// Wrap `inner`, returning the operation callers should invoke
    fn wrap(&self, inner: Arc<dyn Operation>) -> Arc<dyn Operation>;
}

/// A [`Layer`] made from a plain function, see [`layer_fn`]
#[derive(Clone, Copy)]
pub struct LayerFn<F> {
    f: F,
}

/// Use `f: Fn(Arc<dyn Operation>) -> Arc<dyn Operation>` as a layer
pub fn layer_fn<F>(f: F) -> LayerFn<F>
where
    F: Fn(Arc<dyn Operation>) -> Arc<dyn Operation> + Send + Sync,
{
    LayerFn { f }
}

impl<F> Layer for LayerFn<F>
where
    F: Fn(Arc<dyn Operation>) -> Arc<dyn Operation> + Send + Sync,
{
    fn wrap(&self, inner: Arc<dyn Operation>) -> Arc<dyn Operation> {
        (self.f)(inner)
    }
}

/// Ordered list of layers, composed left to right
///
/// The first layer added is the outermost: it sees the call first and the
/// result last.
#[derive(Default)]
pub struct Pipeline {
    layers: Vec<Box<dyn Layer>>,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer inside every layer added before it
    pub fn layer(mut self, layer: impl Layer + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if the pipeline has no layers
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Wrap `op` with every layer
    pub fn build(&self, op: Arc<dyn Operation>) -> Arc<dyn Operation> {
        self.layers
            .iter()
            .rev()
            .fold(op, |inner, layer| layer.wrap(inner))
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("layers", &self.layers.len())
            .finish()
    }
}
