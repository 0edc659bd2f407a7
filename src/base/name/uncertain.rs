//! Names that may be absolute or relative.

use super::absolute::Name;
use super::relative::RelativeName;
use super::traits::{ToLabelIter, ToName};
use core::{fmt, hash};
use octseq::builder::OctetsBuilder;
use octseq::octets::OctetsFrom;

//------------ UncertainName -------------------------------------------------

/// A domain name that may be absolute or relative.
///
/// Record data made relative to an origin keeps its names in this type:
/// names below the origin lose the origin’s labels and become relative,
/// all other names stay absolute. Composing such a name needs the origin
/// to complete the relative case.
#[derive(Clone)]
pub enum UncertainName<Octs> {
    Absolute(Name<Octs>),
    Relative(RelativeName<Octs>),
}

impl<Octs> UncertainName<Octs> {
    pub fn is_absolute(&self) -> bool {
        matches!(*self, UncertainName::Absolute(_))
    }

    pub fn is_relative(&self) -> bool {
        matches!(*self, UncertainName::Relative(_))
    }

    pub fn as_absolute(&self) -> Option<&Name<Octs>> {
        match *self {
            UncertainName::Absolute(ref name) => Some(name),
            UncertainName::Relative(_) => None,
        }
    }

    pub fn as_relative(&self) -> Option<&RelativeName<Octs>> {
        match *self {
            UncertainName::Absolute(_) => None,
            UncertainName::Relative(ref name) => Some(name),
        }
    }
}

impl<Octs: AsRef<[u8]>> UncertainName<Octs> {
    /// Returns the length of the absolute name completed with `origin`.
    pub fn compose_len_with_origin<N: ToName + ?Sized>(
        &self,
        origin: &N,
    ) -> u16 {
        match *self {
            UncertainName::Absolute(ref name) => name.compose_len(),
            UncertainName::Relative(ref name) => {
                name.compose_len() + origin.compose_len()
            }
        }
    }

    /// Appends the name, completing a relative name with `origin`.
    pub fn compose_with_origin<Target, N>(
        &self,
        origin: &N,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>
    where
        Target: OctetsBuilder + ?Sized,
        N: ToName + ?Sized,
    {
        match *self {
            UncertainName::Absolute(ref name) => name.compose(target),
            UncertainName::Relative(ref name) => {
                name.compose(target)?;
                origin.compose(target)
            }
        }
    }

    /// Appends the lowercased name, completing a relative name with
    /// `origin`.
    pub fn compose_canonical_with_origin<Target, N>(
        &self,
        origin: &N,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>
    where
        Target: OctetsBuilder + ?Sized,
        N: ToName + ?Sized,
    {
        match *self {
            UncertainName::Absolute(ref name) => name.compose_canonical(target),
            UncertainName::Relative(ref name) => {
                name.compose_canonical(target)?;
                origin.compose_canonical(target)
            }
        }
    }
}

impl<Octs: AsRef<[u8]>> ToLabelIter for UncertainName<Octs> {
    fn as_wire_slice(&self) -> &[u8] {
        match *self {
            UncertainName::Absolute(ref name) => name.as_slice(),
            UncertainName::Relative(ref name) => name.as_slice(),
        }
    }
}

//--- From

impl<Octs> From<Name<Octs>> for UncertainName<Octs> {
    fn from(name: Name<Octs>) -> Self {
        UncertainName::Absolute(name)
    }
}

impl<Octs> From<RelativeName<Octs>> for UncertainName<Octs> {
    fn from(name: RelativeName<Octs>) -> Self {
        UncertainName::Relative(name)
    }
}

//--- OctetsFrom

impl<Octs, SrcOcts> OctetsFrom<UncertainName<SrcOcts>> for UncertainName<Octs>
where
    Octs: OctetsFrom<SrcOcts>,
{
    type Error = Octs::Error;

    fn try_octets_from(
        source: UncertainName<SrcOcts>,
    ) -> Result<Self, Self::Error> {
        Ok(match source {
            UncertainName::Absolute(name) => {
                UncertainName::Absolute(Name::try_octets_from(name)?)
            }
            UncertainName::Relative(name) => {
                UncertainName::Relative(RelativeName::try_octets_from(name)?)
            }
        })
    }
}

//--- PartialEq, Eq, and Hash

impl<Octs, Other> PartialEq<UncertainName<Other>> for UncertainName<Octs>
where
    Octs: AsRef<[u8]>,
    Other: AsRef<[u8]>,
{
    fn eq(&self, other: &UncertainName<Other>) -> bool {
        // The root label tells the two kinds apart.
        self.as_wire_slice()
            .eq_ignore_ascii_case(other.as_wire_slice())
    }
}

impl<Octs: AsRef<[u8]>> Eq for UncertainName<Octs> {}

impl<Octs: AsRef<[u8]>> hash::Hash for UncertainName<Octs> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        match *self {
            UncertainName::Absolute(ref name) => hash::Hash::hash(name, state),
            UncertainName::Relative(ref name) => hash::Hash::hash(name, state),
        }
    }
}

//--- Display and Debug

impl<Octs: AsRef<[u8]>> fmt::Display for UncertainName<Octs> {
    /// Writes absolute names with and relative names without a final dot.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            UncertainName::Absolute(ref name) => {
                fmt::Display::fmt(&name.fmt_with_dot(), f)
            }
            UncertainName::Relative(ref name) => fmt::Display::fmt(name, f),
        }
    }
}

impl<Octs: AsRef<[u8]>> fmt::Debug for UncertainName<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            UncertainName::Absolute(ref name) => {
                f.debug_tuple("UncertainName::Absolute").field(name).finish()
            }
            UncertainName::Relative(ref name) => {
                f.debug_tuple("UncertainName::Relative").field(name).finish()
            }
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use octseq::builder::infallible;
    use std::string::ToString;
    use std::vec::Vec;

    #[test]
    fn compose_with_origin() {
        let origin = Name::vec_from_str("Example.com").unwrap();
        let relative: UncertainName<&[u8]> =
            RelativeName::from_octets(b"\x02GW".as_slice()).unwrap().into();
        let absolute: UncertainName<&[u8]> =
            Name::from_octets(b"\x02gw\x03net\x00".as_slice()).unwrap().into();

        let mut buf = Vec::new();
        infallible(relative.compose_with_origin(&origin, &mut buf));
        assert_eq!(buf, b"\x02GW\x07Example\x03com\x00");
        assert_eq!(
            usize::from(relative.compose_len_with_origin(&origin)),
            buf.len()
        );
        buf.clear();
        infallible(relative.compose_canonical_with_origin(&origin, &mut buf));
        assert_eq!(buf, b"\x02gw\x07example\x03com\x00");
        buf.clear();
        infallible(absolute.compose_with_origin(&origin, &mut buf));
        assert_eq!(buf, b"\x02gw\x03net\x00");
    }

    #[test]
    fn display_and_eq() {
        let relative: UncertainName<Vec<u8>> =
            RelativeName::from_octets(b"\x02gw".to_vec()).unwrap().into();
        let absolute: UncertainName<Vec<u8>> =
            Name::vec_from_str("gw").unwrap().into();
        assert_eq!(relative.to_string(), "gw");
        assert_eq!(absolute.to_string(), "gw.");
        assert_ne!(relative, absolute);
        assert!(relative.is_relative() && absolute.is_absolute());
    }
}
