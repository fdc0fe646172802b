// src/transform.rs

//! Per-pixel transforms and the combinators that compose them.
//!
//! A transform is any pure, total `Fn(u32) -> u32` that can be shared across
//! worker threads. Composition applies transforms in argument order:
//! `combine(a, b)` runs `a` first and feeds its result to `b`.

/// A pure mapping from one packed ARGB value to another.
///
/// Implemented for every `Fn(u32) -> u32 + Send + Sync`, so plain functions
/// such as [`crate::color::invert`] and capturing closures both qualify.
pub trait Transform: Fn(u32) -> u32 + Send + Sync {}

impl<F> Transform for F where F: Fn(u32) -> u32 + Send + Sync {}

/// A transform whose concrete type is only known at runtime.
pub type BoxedTransform = Box<dyn Transform>;

/// Returns `x ↦ b(a(x))`.
pub fn combine<A, B>(a: A, b: B) -> impl Transform
where
    A: Transform,
    B: Transform,
{
    move |v: u32| b(a(v))
}

/// Returns `x ↦ c(b(a(x)))`, built as `combine(a, combine(b, c))`.
pub fn combine3<A, B, C>(a: A, b: B, c: C) -> impl Transform
where
    A: Transform,
    B: Transform,
    C: Transform,
{
    combine(a, combine(b, c))
}

/// Folds any number of boxed transforms into one, applied left to right.
///
/// An empty list yields the identity.
pub fn chain(steps: Vec<BoxedTransform>) -> BoxedTransform {
    steps
        .into_iter()
        .fold(Box::new(identity()) as BoxedTransform, |acc, step| {
            Box::new(combine(acc, step)) as BoxedTransform
        })
}

/// The transform that returns its input unchanged.
pub fn identity() -> impl Transform + Copy {
    |v: u32| v
}

/// The transform that maps every input to `value`.
pub fn constant(value: u32) -> impl Transform + Copy {
    move |_: u32| value
}
