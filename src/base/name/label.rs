//! Single labels of a domain name.

use super::NameError;
use core::cmp::Ordering;
use core::{fmt, hash};

//------------ Label ---------------------------------------------------------

/// The content of a single label of a domain name.
///
/// This is an unsized type over the octets of a normal label without its
/// length octet. The empty label is the root label. Labels are compared
/// and hashed ignoring ASCII case.
#[repr(transparent)]
pub struct Label([u8]);

impl Label {
    /// The maximum number of octets in a label.
    pub const MAX_LEN: usize = 63;

    pub(super) fn from_slice_unchecked(slice: &[u8]) -> &Self {
        // SAFETY: Label is a transparent wrapper around [u8].
        unsafe { &*(slice as *const [u8] as *const Label) }
    }

    /// Returns a label for the given content if it is short enough.
    pub fn from_slice(slice: &[u8]) -> Result<&Self, NameError> {
        if slice.len() > Self::MAX_LEN {
            Err(NameError::LongLabel)
        } else {
            Ok(Self::from_slice_unchecked(slice))
        }
    }

    /// Returns the root label.
    #[must_use]
    pub fn root() -> &'static Self {
        Self::from_slice_unchecked(b"")
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

//--- PartialEq, Eq, PartialOrd, Ord, and Hash

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Label {}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Label {
    /// Orders labels as unsigned octets after lowercasing.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .iter()
            .map(u8::to_ascii_lowercase)
            .cmp(other.0.iter().map(u8::to_ascii_lowercase))
    }
}

impl hash::Hash for Label {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.0.len());
        for &ch in &self.0 {
            state.write_u8(ch.to_ascii_lowercase())
        }
    }
}

//--- Display and Debug

impl fmt::Display for Label {
    /// Writes the label in presentation format.
    ///
    /// Dots and backslashes are escaped with a backslash, all octets that
    /// aren’t printable ASCII are written as `\DDD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.0 {
            match ch {
                b'.' | b'\\' => write!(f, "\\{}", char::from(ch))?,
                0x21..=0x7E => fmt::Write::write_char(f, char::from(ch))?,
                _ => write!(f, "\\{:03}", ch)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label({})", self)
    }
}

//------------ LabelIter -----------------------------------------------------

/// An iterator over the labels in the wire format of a name.
///
/// The iterator trusts the slice to be an uncompressed sequence of normal
/// labels and stops early if it isn’t.
#[derive(Clone, Debug)]
pub struct LabelIter<'a> {
    wire: &'a [u8],
}

impl<'a> LabelIter<'a> {
    pub(super) fn new(wire: &'a [u8]) -> Self {
        LabelIter { wire }
    }
}

impl<'a> Iterator for LabelIter<'a> {
    type Item = &'a Label;

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, rest) = self.wire.split_first()?;
        let len = usize::from(len);
        if len > Label::MAX_LEN || len > rest.len() {
            self.wire = &[];
            return None;
        }
        let (label, rest) = rest.split_at(len);
        self.wire = rest;
        Some(Label::from_slice_unchecked(label))
    }
}

//------------ Wire format checks --------------------------------------------

/// Checks the labels at the start of `wire`.
///
/// Walks the labels until the root label if `absolute` is true or until
/// the end of the slice otherwise. Returns the number of octets used by
/// the name.
pub(super) fn check_wire(
    wire: &[u8],
    absolute: bool,
) -> Result<usize, NameError> {
    let max = if absolute { 255 } else { 254 };
    let mut pos = 0;
    loop {
        if !absolute && pos == wire.len() {
            return Ok(pos);
        }
        let len = match wire.get(pos) {
            Some(&len) => len,
            None => return Err(NameError::ShortInput),
        };
        match len & 0xC0 {
            0x00 => {}
            0xC0 => return Err(NameError::CompressedName),
            _ => return Err(NameError::BadLabel),
        }
        pos += usize::from(len) + 1;
        if pos > max {
            return Err(NameError::LongName);
        }
        if len == 0 {
            if absolute {
                return Ok(pos);
            }
            return Err(NameError::AbsoluteName);
        }
    }
}

/// Returns the number of labels in `wire` and collects them into `labels`.
pub(super) fn collect_labels<'a>(
    wire: &'a [u8],
    labels: &mut [&'a Label; 128],
) -> usize {
    let mut count = 0;
    for (slot, label) in labels.iter_mut().zip(LabelIter::new(wire)) {
        *slot = label;
        count += 1;
    }
    count
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compare() {
        let lower = Label::from_slice(b"example").unwrap();
        let mixed = Label::from_slice(b"ExAmPle").unwrap();
        assert_eq!(lower, mixed);
        assert_eq!(lower.cmp(mixed), Ordering::Equal);
        assert!(Label::from_slice(b"a").unwrap() < Label::from_slice(b"B").unwrap());
        assert!(Label::root() < lower);
        assert!(Label::from_slice(&[b'a'; 64]).is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn display() {
        use std::string::ToString;

        assert_eq!(
            Label::from_slice(b"a.b\\c d\x7f").unwrap().to_string(),
            "a\\.b\\\\c\\032d\\127"
        );
    }

    #[test]
    fn iter_and_check() {
        let wire = b"\x02gw\x07example\x03com\x00";
        let mut iter = LabelIter::new(wire);
        assert_eq!(iter.next().unwrap().as_slice(), b"gw");
        assert_eq!(iter.next().unwrap().as_slice(), b"example");
        assert_eq!(iter.next().unwrap().as_slice(), b"com");
        assert!(iter.next().unwrap().is_root());
        assert!(iter.next().is_none());

        assert_eq!(check_wire(wire, true), Ok(wire.len()));
        assert_eq!(check_wire(b"\x02gw\x07exa", true), Err(NameError::ShortInput));
        assert_eq!(check_wire(b"\x02gw\xc0\x0c", true), Err(NameError::CompressedName));
        assert_eq!(check_wire(b"\x42gw", true), Err(NameError::BadLabel));
        assert_eq!(check_wire(b"\x02gw", false), Ok(3));
        assert_eq!(check_wire(b"\x02gw\x00", false), Err(NameError::AbsoluteName));
    }

    #[test]
    fn long_names() {
        // 127 one-octet labels plus the root label are 255 octets.
        let mut wire = [0u8; 256];
        for chunk in wire[..254].chunks_mut(2) {
            chunk.copy_from_slice(b"\x01a");
        }
        assert_eq!(check_wire(&wire[..255], true), Ok(255));
        wire[254] = 1;
        assert_eq!(check_wire(&wire, true), Err(NameError::LongName));
        assert_eq!(check_wire(&wire[..254], false), Ok(254));
    }
}
