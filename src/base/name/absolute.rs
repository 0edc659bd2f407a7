//! Uncompressed, absolute domain names.

use super::label::check_wire;
use super::relative::RelativeName;
use super::text::{append_chars, FromStrError};
use super::traits::{write_labels, ToLabelIter, ToName};
use crate::base::wire::{FormError, ParseError};
use core::cmp::Ordering;
use core::str::FromStr;
use core::{fmt, hash};
use octseq::builder::{EmptyBuilder, FromBuilder, OctetsBuilder, Truncate};
use octseq::octets::{Octets, OctetsFrom};
use octseq::parse::Parser;
#[cfg(feature = "serde")]
use octseq::serde::{DeserializeOctets, SerializeOctets};
#[cfg(feature = "std")]
use std::vec::Vec;

//------------ Name ----------------------------------------------------------

/// An uncompressed, absolute domain name.
///
/// The type wraps an octets sequence holding the wire format of the name,
/// i.e., a sequence of labels each preceded by its length and ending in
/// the root label. The sequence is at most 255 octets long.
///
/// Names compare equal and hash the same regardless of ASCII case. Their
/// `Ord` implementation is the canonical DNS name order.
///
/// `Display` writes the name without the trailing dot, except for the root
/// name which is a single dot. Use [`fmt_with_dot`][ToName::fmt_with_dot]
/// to always get the dot.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Name<Octs: ?Sized>(Octs);

impl<Octs> Name<Octs> {
    /// Creates a name from octets without checking.
    ///
    /// # Safety
    ///
    /// The octets must contain exactly one correctly encoded, uncompressed
    /// absolute domain name.
    pub const unsafe fn from_octets_unchecked(octets: Octs) -> Self {
        Name(octets)
    }

    /// Creates a name from octets holding its wire format.
    pub fn from_octets(octets: Octs) -> Result<Self, NameError>
    where
        Octs: AsRef<[u8]>,
    {
        if check_wire(octets.as_ref(), true)? != octets.as_ref().len() {
            return Err(NameError::TrailingData);
        }
        Ok(unsafe { Self::from_octets_unchecked(octets) })
    }

    /// Creates a name from a sequence of characters in presentation format.
    ///
    /// The name is taken as absolute even without a trailing dot.
    pub fn from_chars<C>(chars: C) -> Result<Self, FromStrError>
    where
        C: IntoIterator<Item = char>,
        Octs: FromBuilder,
        <Octs as FromBuilder>::Builder: EmptyBuilder,
    {
        let mut builder = <Octs as FromBuilder>::Builder::with_capacity(64);
        append_chars(chars, &mut builder)?;
        builder
            .append_slice(b"\0")
            .map_err(|_| FromStrError::ShortBuf)?;
        Ok(unsafe { Self::from_octets_unchecked(Octs::from_builder(builder)) })
    }

    /// Parses a name from the beginning of the parser.
    ///
    /// Compressed names are rejected.
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized>(
        parser: &mut Parser<'a, Src>,
    ) -> Result<Self, ParseError> {
        let len = check_wire(parser.peek_all(), true)?;
        Ok(unsafe { Self::from_octets_unchecked(parser.parse_octets(len)?) })
    }

    /// Converts the name into its underlying octets.
    pub fn into_octets(self) -> Octs {
        self.0
    }

    /// Strips `base` from the end of the name.
    ///
    /// Returns the remaining labels as a relative name or the unchanged
    /// name if it doesn’t end with `base`.
    pub fn strip_suffix<N: ToName + ?Sized>(
        self,
        base: &N,
    ) -> Result<RelativeName<Octs>, Self>
    where
        Octs: AsRef<[u8]> + Truncate,
    {
        if !self.ends_with(base) {
            return Err(self);
        }
        let len = self.len() - usize::from(base.compose_len());
        let mut octets = self.0;
        octets.truncate(len);
        Ok(unsafe { RelativeName::from_octets_unchecked(octets) })
    }
}

impl Name<[u8]> {
    /// Creates a name atop a slice holding its wire format.
    pub fn from_slice(slice: &[u8]) -> Result<&Self, NameError> {
        if check_wire(slice, true)? != slice.len() {
            return Err(NameError::TrailingData);
        }
        // SAFETY: Name is a transparent wrapper and the slice was checked.
        Ok(unsafe { &*(slice as *const [u8] as *const Name<[u8]>) })
    }
}

#[cfg(feature = "std")]
impl Name<Vec<u8>> {
    /// Creates a name in a vec from its presentation format.
    pub fn vec_from_str(s: &str) -> Result<Self, FromStrError> {
        Self::from_chars(s.chars())
    }
}

impl<Octs: AsRef<[u8]> + ?Sized> Name<Octs> {
    pub fn as_octets(&self) -> &Octs {
        &self.0
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Returns the length of the wire format of the name.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns whether this is the root name.
    pub fn is_root(&self) -> bool {
        self.len() == 1
    }

    /// Returns whether the name is strictly below `base`.
    ///
    /// A name is not a subdomain of itself.
    pub fn is_subdomain_of<N: ToName + ?Sized>(&self, base: &N) -> bool {
        self.len() > usize::from(base.compose_len()) && self.ends_with(base)
    }
}

//--- ToLabelIter and ToName

impl<Octs: AsRef<[u8]> + ?Sized> ToLabelIter for Name<Octs> {
    fn as_wire_slice(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<Octs: AsRef<[u8]> + ?Sized> ToName for Name<Octs> {}

//--- FromStr

impl<Octs> FromStr for Name<Octs>
where
    Octs: FromBuilder,
    <Octs as FromBuilder>::Builder: EmptyBuilder,
{
    type Err = FromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_chars(s.chars())
    }
}

//--- OctetsFrom

impl<Octs, SrcOcts> OctetsFrom<Name<SrcOcts>> for Name<Octs>
where
    Octs: OctetsFrom<SrcOcts>,
{
    type Error = Octs::Error;

    fn try_octets_from(source: Name<SrcOcts>) -> Result<Self, Self::Error> {
        Octs::try_octets_from(source.0)
            .map(|octets| unsafe { Self::from_octets_unchecked(octets) })
    }
}

//--- PartialEq, Eq, PartialOrd, Ord, and Hash

impl<Octs, N> PartialEq<N> for Name<Octs>
where
    Octs: AsRef<[u8]> + ?Sized,
    N: ToName + ?Sized,
{
    fn eq(&self, other: &N) -> bool {
        self.name_eq(other)
    }
}

impl<Octs: AsRef<[u8]> + ?Sized> Eq for Name<Octs> {}

impl<Octs, N> PartialOrd<N> for Name<Octs>
where
    Octs: AsRef<[u8]> + ?Sized,
    N: ToName + ?Sized,
{
    fn partial_cmp(&self, other: &N) -> Option<Ordering> {
        Some(self.name_cmp(other))
    }
}

impl<Octs: AsRef<[u8]> + ?Sized> Ord for Name<Octs> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name_cmp(other)
    }
}

impl<Octs: AsRef<[u8]> + ?Sized> hash::Hash for Name<Octs> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for label in self.iter_labels() {
            hash::Hash::hash(label, state)
        }
    }
}

//--- Display and Debug

impl<Octs: AsRef<[u8]> + ?Sized> fmt::Display for Name<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !write_labels(self.as_slice(), f)? {
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl<Octs: AsRef<[u8]> + ?Sized> fmt::Debug for Name<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.fmt_with_dot())
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl<Octs> serde::Serialize for Name<Octs>
where
    Octs: AsRef<[u8]> + SerializeOctets + ?Sized,
{
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_newtype_struct(
                "Name",
                &format_args!("{}", self.fmt_with_dot()),
            )
        } else {
            serializer.serialize_newtype_struct(
                "Name",
                &self.0.as_serialized_octets(),
            )
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, Octs> serde::Deserialize<'de> for Name<Octs>
where
    Octs: FromBuilder + DeserializeOctets<'de>,
    <Octs as FromBuilder>::Builder: EmptyBuilder,
{
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use core::marker::PhantomData;
        use serde::de::Error;

        struct Visitor<Octs>(PhantomData<Octs>);

        impl<'de, Octs> serde::de::Visitor<'de> for Visitor<Octs>
        where
            Octs: FromBuilder + DeserializeOctets<'de>,
            <Octs as FromBuilder>::Builder: EmptyBuilder,
        {
            type Value = Name<Octs>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an absolute domain name")
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                Name::from_chars(v.chars()).map_err(E::custom)
            }

            fn visit_newtype_struct<D: serde::Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error> {
                if deserializer.is_human_readable() {
                    deserializer.deserialize_str(self)
                } else {
                    Name::from_octets(Octs::deserialize_octets(deserializer)?)
                        .map_err(D::Error::custom)
                }
            }
        }

        deserializer.deserialize_newtype_struct("Name", Visitor(PhantomData))
    }
}

//------------ NameError -----------------------------------------------------

/// Octets did not contain a valid name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// The name ended before its last label.
    ShortInput,

    /// A compression pointer was found.
    CompressedName,

    /// A label of an extended or unknown type was found.
    BadLabel,

    /// A label was longer than 63 octets.
    LongLabel,

    /// The name was longer than 255 octets.
    LongName,

    /// A relative name contained the root label.
    AbsoluteName,

    /// There were octets left after the root label.
    TrailingData,
}

impl NameError {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NameError::ShortInput => "unexpected end of name",
            NameError::CompressedName => "compressed domain name",
            NameError::BadLabel => "invalid label type",
            NameError::LongLabel => "label too long",
            NameError::LongName => "domain name too long",
            NameError::AbsoluteName => "root label in relative name",
            NameError::TrailingData => "trailing data",
        }
    }
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NameError {}

impl From<NameError> for ParseError {
    fn from(err: NameError) -> Self {
        match err {
            NameError::ShortInput => ParseError::ShortInput,
            err => FormError::new(err.as_str()).into(),
        }
    }
}

//============ Testing =======================================================
