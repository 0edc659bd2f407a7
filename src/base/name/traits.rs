//! Traits for working with different kinds of names.

use super::label::{collect_labels, Label, LabelIter};
use core::cmp::Ordering;
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ ToLabelIter ---------------------------------------------------

/// A type that holds a name as a flat sequence of uncompressed labels.
///
/// This is the basis for both absolute and relative names. All other
/// methods are provided on top of [`as_wire_slice`][Self::as_wire_slice].
pub trait ToLabelIter {
    /// Returns the wire format of the name.
    ///
    /// For an absolute name this includes the root label at the end.
    fn as_wire_slice(&self) -> &[u8];

    /// Returns an iterator over the labels of the name.
    fn iter_labels(&self) -> LabelIter<'_> {
        LabelIter::new(self.as_wire_slice())
    }

    /// Returns the length of the wire format of the name.
    fn compose_len(&self) -> u16 {
        // Names are at most 255 octets long.
        self.as_wire_slice().len() as u16
    }

    /// Returns whether the name ends with the labels of `base`.
    ///
    /// Labels are compared ignoring ASCII case. Every name ends with an
    /// empty relative name.
    fn ends_with<N: ToLabelIter + ?Sized>(&self, base: &N) -> bool {
        let wire = self.as_wire_slice();
        let base = base.as_wire_slice();
        let start = match wire.len().checked_sub(base.len()) {
            Some(start) => start,
            None => return false,
        };
        let mut pos = 0;
        while pos < start {
            pos += usize::from(wire[pos]) + 1;
        }
        // Length octets are below 64 and thus never changed by ASCII
        // case folding.
        pos == start && wire[start..].eq_ignore_ascii_case(base)
    }
}

impl<N: ToLabelIter + ?Sized> ToLabelIter for &N {
    fn as_wire_slice(&self) -> &[u8] {
        (*self).as_wire_slice()
    }
}

//------------ ToName --------------------------------------------------------

/// An absolute domain name.
pub trait ToName: ToLabelIter {
    /// Appends the uncompressed wire format of the name.
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.as_wire_slice())
    }

    /// Appends the wire format of the name with all ASCII letters in
    /// lowercase as required by the canonical form of records.
    fn compose_canonical<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        append_lowercase(self.as_wire_slice(), target)
    }

    /// Returns whether two names are equal ignoring ASCII case.
    fn name_eq<N: ToName + ?Sized>(&self, other: &N) -> bool {
        self.as_wire_slice()
            .eq_ignore_ascii_case(other.as_wire_slice())
    }

    /// Compares two names in the canonical DNS name order.
    ///
    /// Names are compared label by label starting with the rightmost one.
    /// See section 6.1 of [RFC 4034].
    ///
    /// [RFC 4034]: https://tools.ietf.org/html/rfc4034
    fn name_cmp<N: ToName + ?Sized>(&self, other: &N) -> Ordering {
        let mut left = [Label::root(); 128];
        let mut right = [Label::root(); 128];
        let left_len = collect_labels(self.as_wire_slice(), &mut left);
        let right_len = collect_labels(other.as_wire_slice(), &mut right);
        left[..left_len]
            .iter()
            .rev()
            .cmp(right[..right_len].iter().rev())
    }

    /// Compares the uncompressed wire format of two names.
    fn composed_cmp<N: ToName + ?Sized>(&self, other: &N) -> Ordering {
        self.as_wire_slice().cmp(other.as_wire_slice())
    }

    /// Compares the lowercased wire format of two names.
    ///
    /// This is the order of names embedded in canonical record data.
    fn lowercase_composed_cmp<N: ToName + ?Sized>(
        &self,
        other: &N,
    ) -> Ordering {
        self.as_wire_slice()
            .iter()
            .map(u8::to_ascii_lowercase)
            .cmp(other.as_wire_slice().iter().map(u8::to_ascii_lowercase))
    }

    /// Returns an object that displays the name with its trailing dot.
    fn fmt_with_dot(&self) -> DisplayWithDot<'_, Self> {
        DisplayWithDot(self)
    }
}

impl<N: ToName + ?Sized> ToName for &N {}

/// Appends `wire` with all ASCII letters lowercased.
pub(super) fn append_lowercase<Target: OctetsBuilder + ?Sized>(
    wire: &[u8],
    target: &mut Target,
) -> Result<(), Target::AppendError> {
    let mut buf = [0u8; 64];
    for chunk in wire.chunks(buf.len()) {
        let buf = &mut buf[..chunk.len()];
        buf.copy_from_slice(chunk);
        buf.make_ascii_lowercase();
        target.append_slice(buf)?;
    }
    Ok(())
}

/// Writes the non-root labels of `wire` separated by dots.
///
/// Returns whether any label was written.
pub(super) fn write_labels(
    wire: &[u8],
    f: &mut fmt::Formatter<'_>,
) -> Result<bool, fmt::Error> {
    let mut first = true;
    for label in LabelIter::new(wire).filter(|label| !label.is_root()) {
        if !first {
            f.write_str(".")?;
        }
        fmt::Display::fmt(label, f)?;
        first = false;
    }
    Ok(!first)
}

//------------ DisplayWithDot ------------------------------------------------

/// Displays an absolute name including the trailing dot.
pub struct DisplayWithDot<'a, N: ?Sized>(&'a N);

impl<N: ToName + ?Sized> fmt::Display for DisplayWithDot<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_labels(self.0.as_wire_slice(), f)?;
        f.write_str(".")
    }
}

//============ Testing =======================================================
