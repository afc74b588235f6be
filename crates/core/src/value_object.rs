//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity. They are immutable once built and two
/// instances holding the same attribute values are equal.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Client {
///     name: String,
///     postal_code: i32,
/// }
///
/// impl ValueObject for Client {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
