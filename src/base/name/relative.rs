//! Uncompressed, relative domain names.

use super::label::check_wire;
use super::traits::{append_lowercase, write_labels, ToLabelIter};
use super::NameError;
use core::{fmt, hash};
use octseq::builder::OctetsBuilder;
use octseq::octets::OctetsFrom;

//------------ RelativeName --------------------------------------------------

/// An uncompressed, relative domain name.
///
/// This is a sequence of labels, each preceded by its length, without the
/// root label. The empty sequence is a valid relative name. Such names
/// appear when an absolute name is made relative to an origin.
///
/// `Display` writes the labels separated by dots without a trailing dot.
#[derive(Clone)]
pub struct RelativeName<Octs>(Octs);

impl<Octs> RelativeName<Octs> {
    /// Creates a relative name from octets without checking.
    ///
    /// # Safety
    ///
    /// The octets must contain a correctly encoded sequence of normal
    /// labels without the root label and at most 254 octets long.
    pub const unsafe fn from_octets_unchecked(octets: Octs) -> Self {
        RelativeName(octets)
    }

    /// Creates a relative name from octets holding its wire format.
    pub fn from_octets(octets: Octs) -> Result<Self, NameError>
    where
        Octs: AsRef<[u8]>,
    {
        check_wire(octets.as_ref(), false)?;
        Ok(unsafe { Self::from_octets_unchecked(octets) })
    }

    pub fn into_octets(self) -> Octs {
        self.0
    }
}

impl<Octs: AsRef<[u8]>> RelativeName<Octs> {
    pub fn as_octets(&self) -> &Octs {
        &self.0
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns whether the name has no labels at all.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Appends the wire format of the labels.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.as_slice())
    }

    /// Appends the wire format of the labels in lowercase.
    pub fn compose_canonical<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        append_lowercase(self.as_slice(), target)
    }
}

impl<Octs: AsRef<[u8]>> ToLabelIter for RelativeName<Octs> {
    fn as_wire_slice(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- OctetsFrom

impl<Octs, SrcOcts> OctetsFrom<RelativeName<SrcOcts>> for RelativeName<Octs>
where
    Octs: OctetsFrom<SrcOcts>,
{
    type Error = Octs::Error;

    fn try_octets_from(
        source: RelativeName<SrcOcts>,
    ) -> Result<Self, Self::Error> {
        Octs::try_octets_from(source.0).map(RelativeName)
    }
}

//--- PartialEq, Eq, and Hash

impl<Octs, Other> PartialEq<RelativeName<Other>> for RelativeName<Octs>
where
    Octs: AsRef<[u8]>,
    Other: AsRef<[u8]>,
{
    fn eq(&self, other: &RelativeName<Other>) -> bool {
        self.as_slice().eq_ignore_ascii_case(other.as_slice())
    }
}

impl<Octs: AsRef<[u8]>> Eq for RelativeName<Octs> {}

impl<Octs: AsRef<[u8]>> hash::Hash for RelativeName<Octs> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for label in self.iter_labels() {
            hash::Hash::hash(label, state)
        }
    }
}

//--- Display and Debug

impl<Octs: AsRef<[u8]>> fmt::Display for RelativeName<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_labels(self.as_slice(), f).map(|_| ())
    }
}

impl<Octs: AsRef<[u8]>> fmt::Debug for RelativeName<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RelativeName({})", self)
    }
}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use std::string::ToString;

    #[test]
    fn from_octets() {
        let name = RelativeName::from_octets(b"\x02gw\x03Sub".as_slice()).unwrap();
        assert_eq!(name.to_string(), "gw.Sub");
        assert_eq!(name, RelativeName::from_octets(b"\x02GW\x03sub".as_slice()).unwrap());
        assert!(RelativeName::from_octets(b"".as_slice()).unwrap().is_empty());
        assert_eq!(
            RelativeName::from_octets(b"\x02gw\x00".as_slice()),
            Err(NameError::AbsoluteName)
        );
    }

    #[test]
    fn compose_canonical() {
        let name = RelativeName::from_octets(b"\x02GW".as_slice()).unwrap();
        let mut buf = std::vec::Vec::new();
        octseq::builder::infallible(name.compose_canonical(&mut buf));
        assert_eq!(buf, b"\x02gw");
    }
}
