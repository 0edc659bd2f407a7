//! Canonical ordering.

use core::cmp::Ordering;

//------------ CanonicalOrd --------------------------------------------------

/// The canonical order of [RFC 4034, section 6].
///
/// Record data is ordered as if its canonical wire format was compared
/// octet by octet. Names embedded in record data thus compare by their
/// lowercased wire format rather than label by label from the root,
/// which is how [`ToName::name_cmp`] orders names on their own.
///
/// [RFC 4034, section 6]: https://tools.ietf.org/html/rfc4034#section-6
/// [`ToName::name_cmp`]: super::name::ToName::name_cmp
pub trait CanonicalOrd<Rhs: ?Sized = Self> {
    fn canonical_cmp(&self, other: &Rhs) -> Ordering;

    fn canonical_lt(&self, other: &Rhs) -> bool {
        self.canonical_cmp(other) == Ordering::Less
    }

    fn canonical_gt(&self, other: &Rhs) -> bool {
        self.canonical_cmp(other) == Ordering::Greater
    }
}
