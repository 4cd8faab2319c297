//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Everything the fee engine accepts or returns is a value object: a product's
/// measurements, the commercial context of a sale, a fee breakdown. They carry
/// no identity, are never mutated after construction, and two instances with
/// the same fields are interchangeable.
///
/// The `Send + Sync` bound lets any caller share inputs and results across
/// threads without coordination.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Volume {
///     cubic_feet: f64,
/// }
///
/// impl ValueObject for Volume {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Send + Sync {}
