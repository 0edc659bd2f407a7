//! Record data from [RFC 4025]: IPSECKEY records.
//!
//! This RFC defines the IPSECKEY record type which stores public keys for
//! use with IPsec together with the gateway that should be used to reach
//! a host.
//!
//! [RFC 4025]: https://tools.ietf.org/html/rfc4025

use crate::base::cmp::CanonicalOrd;
use crate::base::iana::{IpseckeyAlgorithm, IpseckeyGatewayType, Rtype};
use crate::base::name::{Name, ToLabelIter, ToName, UncertainName};
use crate::base::net::{Ipv4Addr, Ipv6Addr};
use crate::base::rdata::{
    ComposeRecordData, LongRecordData, ParseRecordData, RecordData,
};
use crate::base::scan::{Scan, Scanner, ScannerError};
use crate::base::wire::{Compose, Composer, FormError, Parse, ParseError};
use crate::base::zonefile_fmt::{self, Formatter, ZonefileFmt};
use crate::utils::base64;
use core::cmp::Ordering;
use core::{fmt, hash};
#[cfg(feature = "serde")]
use octseq::builder::{EmptyBuilder, FromBuilder};
use octseq::builder::{OctetsBuilder, Truncate};
use octseq::octets::{Octets, OctetsFrom};
use octseq::parse::Parser;
use tracing::{debug, trace};

//------------ Gateway -------------------------------------------------------

/// The gateway field of an IPSECKEY record.
///
/// The format of the field depends on the gateway type of the record. This
/// enum has one variant for each defined gateway type so that type and
/// content can’t disagree. The gateway type is available via
/// [`gateway_type`][Self::gateway_type].
///
/// A domain name gateway is generic over the name type. Records parsed
/// from wire format without an origin use [`Name`]. Records made relative
/// to an origin use [`UncertainName`].
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gateway<N> {
    /// No gateway is present.
    None,

    /// An IPv4 address.
    Ipv4(Ipv4Addr),

    /// An IPv6 address.
    Ipv6(Ipv6Addr),

    /// A domain name.
    ///
    /// The name is never compressed in the wire format.
    Name(N),
}

impl<N> Gateway<N> {
    /// Returns the gateway type matching the variant.
    pub fn gateway_type(&self) -> IpseckeyGatewayType {
        match *self {
            Gateway::None => IpseckeyGatewayType::NONE,
            Gateway::Ipv4(_) => IpseckeyGatewayType::IPV4,
            Gateway::Ipv6(_) => IpseckeyGatewayType::IPV6,
            Gateway::Name(_) => IpseckeyGatewayType::NAME,
        }
    }

    /// Returns a reference to the domain name if this is a name gateway.
    pub fn as_name(&self) -> Option<&N> {
        match *self {
            Gateway::Name(ref name) => Some(name),
            _ => None,
        }
    }

    /// Converts the domain name of a name gateway with the given closure.
    pub fn map_name<T, F: FnOnce(N) -> T>(self, op: F) -> Gateway<T> {
        match self {
            Gateway::None => Gateway::None,
            Gateway::Ipv4(addr) => Gateway::Ipv4(addr),
            Gateway::Ipv6(addr) => Gateway::Ipv6(addr),
            Gateway::Name(name) => Gateway::Name(op(name)),
        }
    }

    /// Converts the domain name with a closure that may fail.
    pub fn try_map_name<T, E, F: FnOnce(N) -> Result<T, E>>(
        self,
        op: F,
    ) -> Result<Gateway<T>, E> {
        Ok(match self {
            Gateway::None => Gateway::None,
            Gateway::Ipv4(addr) => Gateway::Ipv4(addr),
            Gateway::Ipv6(addr) => Gateway::Ipv6(addr),
            Gateway::Name(name) => Gateway::Name(op(name)?),
        })
    }

    /// Scans a gateway of the given type.
    ///
    /// No gateway is represented by a single dot. Addresses are given in
    /// their usual textual form. A domain name is scanned through the
    /// scanner, so relative names are completed with its origin.
    pub fn scan<S: Scanner<Name = N>>(
        gateway_type: IpseckeyGatewayType,
        scanner: &mut S,
    ) -> Result<Self, S::Error> {
        match gateway_type {
            IpseckeyGatewayType::NONE => scanner.scan_ascii_str(|s| {
                if s == "." {
                    Ok(Gateway::None)
                } else {
                    Err(S::Error::custom("invalid gateway: expected '.'"))
                }
            }),
            IpseckeyGatewayType::IPV4 => scanner.scan_ascii_str(|s| {
                s.parse().map(Gateway::Ipv4).map_err(|_| {
                    S::Error::custom("invalid gateway: expected IPv4 address")
                })
            }),
            IpseckeyGatewayType::IPV6 => scanner.scan_ascii_str(|s| {
                s.parse().map(Gateway::Ipv6).map_err(|_| {
                    S::Error::custom("invalid gateway: expected IPv6 address")
                })
            }),
            IpseckeyGatewayType::NAME => scanner.scan_name().map(Gateway::Name),
            _ => Err(S::Error::custom("invalid gateway type")),
        }
    }
}

impl<Octs> Gateway<Name<Octs>> {
    /// Parses a gateway of the given type.
    ///
    /// The parser must be limited to the record data. Running out of data
    /// is a form error rather than short input.
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized>(
        gateway_type: IpseckeyGatewayType,
        parser: &mut Parser<'a, Src>,
    ) -> Result<Self, ParseError> {
        match gateway_type {
            IpseckeyGatewayType::NONE => Ok(Gateway::None),
            IpseckeyGatewayType::IPV4 => {
                if parser.remaining() < usize::from(Ipv4Addr::COMPOSE_LEN) {
                    return Err(FormError::new("short IPv4 gateway").into());
                }
                Ipv4Addr::parse(parser).map(Gateway::Ipv4)
            }
            IpseckeyGatewayType::IPV6 => {
                if parser.remaining() < usize::from(Ipv6Addr::COMPOSE_LEN) {
                    return Err(FormError::new("short IPv6 gateway").into());
                }
                Ipv6Addr::parse(parser).map(Gateway::Ipv6)
            }
            IpseckeyGatewayType::NAME => match Name::parse(parser) {
                Ok(name) => Ok(Gateway::Name(name)),
                Err(ParseError::ShortInput) => {
                    Err(FormError::new("short gateway name").into())
                }
                Err(err) => Err(err),
            },
            _ => Err(FormError::new("invalid gateway type").into()),
        }
    }

    /// Makes a name gateway relative to `origin`.
    ///
    /// Only names strictly below `origin` become relative. All other names
    /// stay absolute.
    pub fn relativize<N: ToName + ?Sized>(
        self,
        origin: &N,
    ) -> Gateway<UncertainName<Octs>>
    where
        Octs: AsRef<[u8]> + Truncate,
    {
        self.map_name(|name| {
            if !name.is_subdomain_of(origin) {
                return UncertainName::Absolute(name);
            }
            match name.strip_suffix(origin) {
                Ok(name) => UncertainName::Relative(name),
                Err(name) => UncertainName::Absolute(name),
            }
        })
    }
}

impl<N: ToLabelIter> Gateway<N> {
    /// Returns the length of the wire format of the gateway.
    pub fn compose_len(&self) -> u16 {
        match *self {
            Gateway::None => 0,
            Gateway::Ipv4(_) => Ipv4Addr::COMPOSE_LEN,
            Gateway::Ipv6(_) => Ipv6Addr::COMPOSE_LEN,
            Gateway::Name(ref name) => name.compose_len(),
        }
    }
}

impl<N: ToName> Gateway<N> {
    /// Appends the wire format of the gateway.
    ///
    /// A domain name is always appended uncompressed.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        match *self {
            Gateway::None => Ok(()),
            Gateway::Ipv4(ref addr) => addr.compose(target),
            Gateway::Ipv6(ref addr) => addr.compose(target),
            Gateway::Name(ref name) => name.compose(target),
        }
    }

    /// Appends the canonical wire format of the gateway.
    ///
    /// A domain name is appended uncompressed and lowercased.
    pub fn compose_canonical<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        match *self {
            Gateway::Name(ref name) => name.compose_canonical(target),
            _ => self.compose(target),
        }
    }
}

impl<Octs: AsRef<[u8]>> Gateway<UncertainName<Octs>> {
    /// Returns the length of the wire format once completed with `origin`.
    pub fn compose_len_with_origin<N: ToName + ?Sized>(
        &self,
        origin: &N,
    ) -> u16 {
        match *self {
            Gateway::Name(ref name) => name.compose_len_with_origin(origin),
            _ => self.compose_len(),
        }
    }

    /// Appends the wire format, completing a relative name with `origin`.
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
            Gateway::None => Ok(()),
            Gateway::Ipv4(ref addr) => addr.compose(target),
            Gateway::Ipv6(ref addr) => addr.compose(target),
            Gateway::Name(ref name) => name.compose_with_origin(origin, target),
        }
    }

    /// Appends the canonical wire format completed with `origin`.
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
            Gateway::Name(ref name) => {
                name.compose_canonical_with_origin(origin, target)
            }
            _ => self.compose_with_origin(origin, target),
        }
    }
}

//--- OctetsFrom

impl<N, SrcN> OctetsFrom<Gateway<SrcN>> for Gateway<N>
where
    N: OctetsFrom<SrcN>,
{
    type Error = N::Error;

    fn try_octets_from(source: Gateway<SrcN>) -> Result<Self, Self::Error> {
        source.try_map_name(N::try_octets_from)
    }
}

//--- PartialEq and Eq

impl<N, NN> PartialEq<Gateway<NN>> for Gateway<N>
where
    N: PartialEq<NN>,
{
    fn eq(&self, other: &Gateway<NN>) -> bool {
        match (self, other) {
            (Gateway::None, Gateway::None) => true,
            (Gateway::Ipv4(left), Gateway::Ipv4(right)) => left == right,
            (Gateway::Ipv6(left), Gateway::Ipv6(right)) => left == right,
            (Gateway::Name(left), Gateway::Name(right)) => left == right,
            _ => false,
        }
    }
}

impl<N: Eq> Eq for Gateway<N> {}

//--- PartialOrd, Ord, and CanonicalOrd

impl<N: Ord> PartialOrd for Gateway<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> Ord for Gateway<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Gateway::Ipv4(left), Gateway::Ipv4(right)) => left.cmp(right),
            (Gateway::Ipv6(left), Gateway::Ipv6(right)) => left.cmp(right),
            (Gateway::Name(left), Gateway::Name(right)) => left.cmp(right),
            _ => self.gateway_type().cmp(&other.gateway_type()),
        }
    }
}

impl<N: ToName, NN: ToName> CanonicalOrd<Gateway<NN>> for Gateway<N> {
    fn canonical_cmp(&self, other: &Gateway<NN>) -> Ordering {
        match (self, other) {
            (Gateway::Ipv4(left), Gateway::Ipv4(right)) => {
                left.octets().cmp(&right.octets())
            }
            (Gateway::Ipv6(left), Gateway::Ipv6(right)) => {
                left.octets().cmp(&right.octets())
            }
            (Gateway::Name(left), Gateway::Name(right)) => {
                left.lowercase_composed_cmp(right)
            }
            _ => self.gateway_type().cmp(&other.gateway_type()),
        }
    }
}

//--- Hash

impl<N: hash::Hash> hash::Hash for Gateway<N> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.gateway_type().hash(state);
        match *self {
            Gateway::None => {}
            Gateway::Ipv4(ref addr) => addr.hash(state),
            Gateway::Ipv6(ref addr) => addr.hash(state),
            Gateway::Name(ref name) => name.hash(state),
        }
    }
}

//--- Display, Debug, and ZonefileFmt

impl<N: ZonefileFmt> fmt::Display for Gateway<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_zonefile(false), f)
    }
}

impl<N: fmt::Debug> fmt::Debug for Gateway<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Gateway::None => f.write_str("Gateway::None"),
            Gateway::Ipv4(ref addr) => {
                f.debug_tuple("Gateway::Ipv4").field(addr).finish()
            }
            Gateway::Ipv6(ref addr) => {
                f.debug_tuple("Gateway::Ipv6").field(addr).finish()
            }
            Gateway::Name(ref name) => {
                f.debug_tuple("Gateway::Name").field(name).finish()
            }
        }
    }
}

impl<N: ZonefileFmt> ZonefileFmt for Gateway<N> {
    fn fmt(&self, p: &mut impl Formatter) -> zonefile_fmt::Result {
        match *self {
            Gateway::None => p.write_token("."),
            Gateway::Ipv4(ref addr) => p.write_token(addr),
            Gateway::Ipv6(ref addr) => p.write_token(addr),
            Gateway::Name(ref name) => p.write_show(name),
        }
    }
}

//------------ Ipseckey ------------------------------------------------------

/// IPSECKEY record data.
///
/// The record carries a public key for use with IPsec, the algorithm of
/// that key, an optional gateway through which the owner of the record can
/// be reached, and a precedence for choosing between several records for
/// the same owner. The gateway type field of the wire format is given by
/// the variant of the [`Gateway`].
///
/// The type is generic over the octets sequence of the key and the name
/// type used for name gateways.
///
/// The IPSECKEY record type is defined in [RFC 4025, section 2][1].
///
/// [1]: https://tools.ietf.org/html/rfc4025#section-2
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "
            Octs: octseq::serde::SerializeOctets + AsRef<[u8]>,
            Name: serde::Serialize,
        ",
        deserialize = "
            Octs: FromBuilder + octseq::serde::DeserializeOctets<'de>,
            <Octs as FromBuilder>::Builder: EmptyBuilder,
            Name: serde::Deserialize<'de>,
        ",
    ))
)]
pub struct Ipseckey<Octs, Name> {
    precedence: u8,
    algorithm: IpseckeyAlgorithm,
    gateway: Gateway<Name>,
    #[cfg_attr(
        feature = "serde",
        serde(with = "crate::utils::base64::serde")
    )]
    key: Octs,
}

impl Ipseckey<(), ()> {
    /// The rtype of this record data type.
    pub(crate) const RTYPE: Rtype = Rtype::IPSECKEY;

    /// The length of the fixed part of the record data.
    const HEAD_LEN: u16 = u8::COMPOSE_LEN
        + IpseckeyGatewayType::COMPOSE_LEN
        + IpseckeyAlgorithm::COMPOSE_LEN;
}

impl<Octs, Name> Ipseckey<Octs, Name> {
    /// Creates new IPSECKEY record data.
    ///
    /// The `gateway_type` has to be one of the defined gateway types and
    /// has to match the variant of `gateway`. The whole record data must
    /// fit into 65535 octets.
    pub fn new(
        precedence: u8,
        gateway_type: IpseckeyGatewayType,
        algorithm: IpseckeyAlgorithm,
        gateway: Gateway<Name>,
        key: Octs,
    ) -> Result<Self, IpseckeyError>
    where
        Octs: AsRef<[u8]>,
        Name: ToLabelIter,
    {
        if !gateway_type.is_known() || gateway_type != gateway.gateway_type()
        {
            debug!(
                %gateway_type,
                variant = %gateway.gateway_type(),
                "rejecting IPSECKEY with mismatched gateway"
            );
            return Err(IpseckeyError::InvalidGateway);
        }
        LongRecordData::check_len(
            usize::from(Ipseckey::HEAD_LEN + gateway.compose_len())
                + key.as_ref().len(),
        )?;
        Ok(unsafe { Self::new_unchecked(precedence, algorithm, gateway, key) })
    }

    /// Creates new IPSECKEY record data without checking.
    ///
    /// # Safety
    ///
    /// The caller needs to make sure that the record data, i.e., three
    /// octets plus the gateway plus the key, is at most 65535 octets long.
    pub unsafe fn new_unchecked(
        precedence: u8,
        algorithm: IpseckeyAlgorithm,
        gateway: Gateway<Name>,
        key: Octs,
    ) -> Self {
        Ipseckey {
            precedence,
            algorithm,
            gateway,
            key,
        }
    }

    /// Returns the precedence of the record.
    ///
    /// Gateways listed in records with lower precedence are to be tried
    /// first.
    pub fn precedence(&self) -> u8 {
        self.precedence
    }

    /// Returns the type of the gateway.
    pub fn gateway_type(&self) -> IpseckeyGatewayType {
        self.gateway.gateway_type()
    }

    /// Returns the algorithm of the public key.
    pub fn algorithm(&self) -> IpseckeyAlgorithm {
        self.algorithm
    }

    /// Returns a reference to the gateway.
    pub fn gateway(&self) -> &Gateway<Name> {
        &self.gateway
    }

    /// Returns a reference to the public key.
    ///
    /// The key may be empty.
    pub fn key(&self) -> &Octs {
        &self.key
    }

    /// Converts the record data into its gateway and key.
    pub fn into_gateway_and_key(self) -> (Gateway<Name>, Octs) {
        (self.gateway, self.key)
    }

    /// Scans the record data from its presentation format.
    ///
    /// The precedence, gateway type, and algorithm are decimal numbers.
    /// The gateway is followed by the key in Base 64 which may be split
    /// over the remaining tokens of the entry.
    pub fn scan<S: Scanner<Octets = Octs, Name = Name>>(
        scanner: &mut S,
    ) -> Result<Self, S::Error>
    where
        Octs: AsRef<[u8]>,
        Name: ToLabelIter,
    {
        let precedence = u8::scan(scanner)?;
        let gateway_type = IpseckeyGatewayType::from_int(u8::scan(scanner)?);
        if !gateway_type.is_known() {
            debug!(
                %gateway_type,
                "rejecting IPSECKEY with unknown gateway type"
            );
            return Err(S::Error::custom(
                IpseckeyError::InvalidGateway.as_str(),
            ));
        }
        let algorithm = IpseckeyAlgorithm::from_int(u8::scan(scanner)?);
        let gateway = Gateway::scan(gateway_type, scanner)?;
        let key = scanner.convert_entry(base64::SymbolConverter::new())?;
        let res = Self::new(precedence, gateway_type, algorithm, gateway, key)
            .map_err(|err| S::Error::custom(err.as_str()))?;
        trace!(
            precedence,
            %gateway_type,
            %algorithm,
            key_len = res.key.as_ref().len(),
            "scanned IPSECKEY record data"
        );
        Ok(res)
    }
}

impl<Octs> Ipseckey<Octs, Name<Octs>> {
    /// Parses the record data from wire format.
    ///
    /// The parser must be limited to the record data as all data left after
    /// the gateway is taken as the key.
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized>(
        parser: &mut Parser<'a, Src>,
    ) -> Result<Self, ParseError> {
        if parser.remaining() < usize::from(Ipseckey::HEAD_LEN) {
            debug!(
                rdlen = parser.remaining(),
                "rejecting short IPSECKEY record data"
            );
            return Err(FormError::new("short IPSECKEY record data").into());
        }
        let precedence = u8::parse(parser)?;
        let gateway_type = IpseckeyGatewayType::parse(parser)?;
        let algorithm = IpseckeyAlgorithm::parse(parser)?;
        let gateway = Gateway::parse(gateway_type, parser).map_err(|err| {
            debug!(%gateway_type, %err, "rejecting IPSECKEY gateway");
            err
        })?;
        let len = parser.remaining();
        let key = parser.parse_octets(len)?;
        trace!(
            precedence,
            %gateway_type,
            %algorithm,
            key_len = len,
            "parsed IPSECKEY record data"
        );
        // The parser limits the data to what fits into record data.
        Ok(unsafe { Self::new_unchecked(precedence, algorithm, gateway, key) })
    }

    /// Parses the record data and makes a name gateway relative to `origin`.
    ///
    /// A gateway name strictly below `origin` is stored as a relative name.
    /// Any other gateway stays as it is. Composing the result with
    /// [`compose_rdata_with_origin`][Ipseckey::compose_rdata_with_origin]
    /// and the same origin gives back the original wire format.
    pub fn parse_relative<'a, Src, N>(
        parser: &mut Parser<'a, Src>,
        origin: &N,
    ) -> Result<Ipseckey<Octs, UncertainName<Octs>>, ParseError>
    where
        Src: Octets<Range<'a> = Octs> + ?Sized,
        Octs: AsRef<[u8]> + Truncate,
        N: ToName + ?Sized,
    {
        Self::parse(parser).map(|data| data.relativize(origin))
    }
}

impl<Octs, NOcts> Ipseckey<Octs, Name<NOcts>> {
    /// Makes a name gateway relative to `origin`.
    ///
    /// Only a name strictly below `origin` becomes relative.
    pub fn relativize<N: ToName + ?Sized>(
        self,
        origin: &N,
    ) -> Ipseckey<Octs, UncertainName<NOcts>>
    where
        NOcts: AsRef<[u8]> + Truncate,
    {
        Ipseckey {
            precedence: self.precedence,
            algorithm: self.algorithm,
            gateway: self.gateway.relativize(origin),
            key: self.key,
        }
    }
}

impl<Octs, NOcts> Ipseckey<Octs, UncertainName<NOcts>>
where
    Octs: AsRef<[u8]>,
    NOcts: AsRef<[u8]>,
{
    /// Returns the length of the record data once completed with `origin`.
    ///
    /// Completing a relative gateway may push the record data beyond
    /// 65535 octets, in which case an error is returned.
    pub fn rdlen_with_origin<N: ToName + ?Sized>(
        &self,
        origin: &N,
    ) -> Result<u16, LongRecordData> {
        let len = usize::from(Ipseckey::HEAD_LEN)
            + usize::from(self.gateway.compose_len_with_origin(origin))
            + self.key.as_ref().len();
        LongRecordData::check_len(len)?;
        Ok(len as u16)
    }

    /// Appends the wire format with a relative gateway completed by `origin`.
    ///
    /// Nothing is appended if the completed record data would be too long.
    pub fn compose_rdata_with_origin<Target, N>(
        &self,
        origin: &N,
        target: &mut Target,
    ) -> Result<(), IpseckeyError>
    where
        Target: Composer + ?Sized,
        N: ToName + ?Sized,
    {
        self.check_origin(origin)?;
        self.compose_head(target)
            .and_then(|_| self.gateway.compose_with_origin(origin, target))
            .and_then(|_| target.append_slice(self.key.as_ref()))
            .map_err(|_| IpseckeyError::ShortBuf)
    }

    /// Appends the canonical wire format completed by `origin`.
    ///
    /// Nothing is appended if the completed record data would be too long.
    pub fn compose_canonical_rdata_with_origin<Target, N>(
        &self,
        origin: &N,
        target: &mut Target,
    ) -> Result<(), IpseckeyError>
    where
        Target: Composer + ?Sized,
        N: ToName + ?Sized,
    {
        self.check_origin(origin)?;
        self.compose_head(target)
            .and_then(|_| {
                self.gateway.compose_canonical_with_origin(origin, target)
            })
            .and_then(|_| target.append_slice(self.key.as_ref()))
            .map_err(|_| IpseckeyError::ShortBuf)
    }

    fn check_origin<N: ToName + ?Sized>(
        &self,
        origin: &N,
    ) -> Result<(), LongRecordData> {
        self.rdlen_with_origin(origin).map(|_| ()).map_err(|err| {
            debug!(
                origin = %origin.fmt_with_dot(),
                "IPSECKEY record data too long with origin"
            );
            err
        })
    }
}

impl<Octs, Name> Ipseckey<Octs, Name> {
    fn compose_head<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.precedence.compose(target)?;
        self.gateway_type().compose(target)?;
        self.algorithm.compose(target)
    }
}

//--- OctetsFrom

impl<Octs, SrcOcts, Name, SrcName> OctetsFrom<Ipseckey<SrcOcts, SrcName>>
    for Ipseckey<Octs, Name>
where
    Octs: OctetsFrom<SrcOcts>,
    Name: OctetsFrom<SrcName, Error = Octs::Error>,
{
    type Error = Octs::Error;

    fn try_octets_from(
        source: Ipseckey<SrcOcts, SrcName>,
    ) -> Result<Self, Self::Error> {
        Ok(Ipseckey {
            precedence: source.precedence,
            algorithm: source.algorithm,
            gateway: Gateway::try_octets_from(source.gateway)?,
            key: Octs::try_octets_from(source.key)?,
        })
    }
}

//--- PartialEq and Eq

impl<Octs, OtherOcts, Name, OtherName>
    PartialEq<Ipseckey<OtherOcts, OtherName>> for Ipseckey<Octs, Name>
where
    Octs: AsRef<[u8]>,
    OtherOcts: AsRef<[u8]>,
    Name: PartialEq<OtherName>,
{
    fn eq(&self, other: &Ipseckey<OtherOcts, OtherName>) -> bool {
        self.precedence == other.precedence
            && self.algorithm == other.algorithm
            && self.gateway == other.gateway
            && self.key.as_ref() == other.key.as_ref()
    }
}

impl<Octs: AsRef<[u8]>, Name: Eq> Eq for Ipseckey<Octs, Name> {}

//--- PartialOrd, Ord, and CanonicalOrd

impl<Octs: AsRef<[u8]>, Name: Ord> PartialOrd for Ipseckey<Octs, Name> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Octs: AsRef<[u8]>, Name: Ord> Ord for Ipseckey<Octs, Name> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence
            .cmp(&other.precedence)
            .then_with(|| self.gateway.cmp(&other.gateway))
            .then_with(|| self.algorithm.cmp(&other.algorithm))
            .then_with(|| self.key.as_ref().cmp(other.key.as_ref()))
    }
}

impl<Octs, OtherOcts, Name, OtherName>
    CanonicalOrd<Ipseckey<OtherOcts, OtherName>> for Ipseckey<Octs, Name>
where
    Octs: AsRef<[u8]>,
    OtherOcts: AsRef<[u8]>,
    Name: ToName,
    OtherName: ToName,
{
    fn canonical_cmp(
        &self,
        other: &Ipseckey<OtherOcts, OtherName>,
    ) -> Ordering {
        // Same order as the octets of the canonical wire format.
        self.precedence
            .cmp(&other.precedence)
            .then_with(|| self.gateway_type().cmp(&other.gateway_type()))
            .then_with(|| self.algorithm.cmp(&other.algorithm))
            .then_with(|| self.gateway.canonical_cmp(&other.gateway))
            .then_with(|| self.key.as_ref().cmp(other.key.as_ref()))
    }
}

//--- Hash

impl<Octs: AsRef<[u8]>, Name: hash::Hash> hash::Hash for Ipseckey<Octs, Name> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.precedence.hash(state);
        self.algorithm.hash(state);
        self.gateway.hash(state);
        self.key.as_ref().hash(state);
    }
}

//--- RecordData, ParseRecordData, ComposeRecordData

impl<Octs, Name> RecordData for Ipseckey<Octs, Name> {
    fn rtype(&self) -> Rtype {
        Ipseckey::RTYPE
    }
}

impl<'a, Octs: Octets + ?Sized> ParseRecordData<'a, Octs>
    for Ipseckey<Octs::Range<'a>, Name<Octs::Range<'a>>>
{
    fn parse_rdata(
        rtype: Rtype,
        parser: &mut Parser<'a, Octs>,
    ) -> Result<Option<Self>, ParseError> {
        if rtype == Ipseckey::RTYPE {
            Self::parse(parser).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl<Octs: AsRef<[u8]>, Name: ToName> ComposeRecordData
    for Ipseckey<Octs, Name>
{
    fn rdlen(&self) -> u16 {
        // The length has been checked on creation.
        Ipseckey::HEAD_LEN
            + self.gateway.compose_len()
            + self.key.as_ref().len() as u16
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.compose_head(target)?;
        self.gateway.compose(target)?;
        target.append_slice(self.key.as_ref())
    }

    fn compose_canonical_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.compose_head(target)?;
        self.gateway.compose_canonical(target)?;
        target.append_slice(self.key.as_ref())
    }
}

//--- Display

impl<Octs: AsRef<[u8]>, Name: ZonefileFmt> fmt::Display
    for Ipseckey<Octs, Name>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_zonefile(false), f)
    }
}

//--- Debug

impl<Octs: AsRef<[u8]>, Name: fmt::Debug> fmt::Debug
    for Ipseckey<Octs, Name>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ipseckey")
            .field("precedence", &self.precedence)
            .field("gateway_type", &self.gateway_type())
            .field("algorithm", &self.algorithm)
            .field("gateway", &self.gateway)
            .field(
                "key",
                &format_args!("{}", base64::encode_display(&self.key)),
            )
            .finish()
    }
}

//--- ZonefileFmt

impl<Octs: AsRef<[u8]>, Name: ZonefileFmt> ZonefileFmt
    for Ipseckey<Octs, Name>
{
    fn fmt(&self, p: &mut impl Formatter) -> zonefile_fmt::Result {
        p.block(|p| {
            p.write_token(self.precedence)?;
            p.write_comment("precedence")?;
            p.write_show(self.gateway_type())?;
            p.write_show(self.algorithm)?;
            p.write_show(&self.gateway)?;
            p.write_comment("gateway")?;
            // An empty key has an empty presentation.
            if !self.key.as_ref().is_empty() {
                p.write_token(base64::encode_display(&self.key))?;
            }
            Ok(())
        })
    }
}

//------------ IpseckeyError -------------------------------------------------

/// IPSECKEY record data could not be created.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IpseckeyError {
    /// The gateway type is unknown or doesn’t match the gateway.
    InvalidGateway,

    /// The record data would be longer than 65535 octets.
    LongRecordData,

    /// The target ran out of space while composing.
    ShortBuf,
}

impl IpseckeyError {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IpseckeyError::InvalidGateway => "invalid gateway",
            IpseckeyError::LongRecordData => "record data too long",
            IpseckeyError::ShortBuf => "short buffer",
        }
    }
}

impl From<LongRecordData> for IpseckeyError {
    fn from(_: LongRecordData) -> Self {
        IpseckeyError::LongRecordData
    }
}

impl fmt::Display for IpseckeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IpseckeyError {}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use crate::base::rdata::test::{
        test_compose_parse, test_rdlen, test_scan, test_scan_err,
    };
    use crate::base::scan::IterScanner;
    use octseq::builder::infallible;
    #[cfg(feature = "bytes")]
    use octseq::octets::OctetsInto;
    use std::string::{String, ToString};
    use std::vec::Vec;

    type VecIpseckey = Ipseckey<Vec<u8>, Name<Vec<u8>>>;

    fn name(s: &str) -> Name<Vec<u8>> {
        Name::vec_from_str(s).unwrap()
    }

    fn ipv4_rdata() -> VecIpseckey {
        Ipseckey::new(
            10,
            IpseckeyGatewayType::IPV4,
            IpseckeyAlgorithm::RSA,
            Gateway::Ipv4(Ipv4Addr::new(1, 2, 3, 4)),
            Vec::from([0xAB, 0xCD]),
        )
        .unwrap()
    }

    fn name_rdata() -> VecIpseckey {
        Ipseckey::new(
            10,
            IpseckeyGatewayType::NAME,
            IpseckeyAlgorithm::RSA,
            Gateway::Name(name("GW.Example.com.")),
            Vec::from([0xAB, 0xCD]),
        )
        .unwrap()
    }

    fn parse_vec<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<VecIpseckey, ParseError> {
        Ipseckey::parse(parser).map(VecIpseckey::octets_from)
    }

    #[test]
    fn ipseckey_compose_parse_scan() {
        let rdata = ipv4_rdata();
        test_rdlen(&rdata);
        test_compose_parse(&rdata, parse_vec);
        test_scan(&["10", "1", "2", "1.2.3.4", "q80="], Ipseckey::scan, &rdata);
    }

    #[test]
    fn ipv4_wire_format() {
        let wire = b"\x0a\x01\x02\x01\x02\x03\x04\xab\xcd";
        let mut buf = Vec::new();
        infallible(ipv4_rdata().compose_rdata(&mut buf));
        assert_eq!(buf, wire.as_slice());

        let parsed = Ipseckey::parse(&mut Parser::from_ref(wire.as_slice()))
            .unwrap();
        assert_eq!(parsed, ipv4_rdata());
        assert_eq!(parsed.precedence(), 10);
        assert_eq!(parsed.gateway_type(), IpseckeyGatewayType::IPV4);
        assert_eq!(parsed.algorithm(), IpseckeyAlgorithm::RSA);
        assert_eq!(parsed.key(), &b"\xab\xcd".as_slice());
        assert_eq!(parsed.to_string(), "10 1 2 1.2.3.4 q80=");
    }

    #[test]
    fn none_gateway() {
        let rdata: VecIpseckey = Ipseckey::new(
            1,
            IpseckeyGatewayType::NONE,
            IpseckeyAlgorithm::NONE,
            Gateway::None,
            Vec::new(),
        )
        .unwrap();
        test_rdlen(&rdata);
        test_compose_parse(&rdata, parse_vec);
        let mut buf = Vec::new();
        infallible(rdata.compose_rdata(&mut buf));
        assert_eq!(buf, b"\x01\x00\x00");
        assert_eq!(rdata.to_string(), "1 0 0 .");
        test_scan(&["1", "0", "0", "."], Ipseckey::scan, &rdata);
    }

    #[test]
    fn ipv6_gateway() {
        let rdata: VecIpseckey = Ipseckey::new(
            10,
            IpseckeyGatewayType::IPV6,
            IpseckeyAlgorithm::EDDSA,
            Gateway::Ipv6("2001:db8::1".parse().unwrap()),
            Vec::from([1, 2, 3]),
        )
        .unwrap();
        assert_eq!(rdata.rdlen(), 3 + 16 + 3);
        test_compose_parse(&rdata, parse_vec);
        assert_eq!(rdata.to_string(), "10 2 4 2001:db8::1 AQID");
        test_scan(
            &["10", "2", "4", "2001:db8::1", "AQID"],
            Ipseckey::scan,
            &rdata,
        );
    }

    #[test]
    fn name_gateway_canonical() {
        let rdata = name_rdata();
        test_rdlen(&rdata);
        test_compose_parse(&rdata, parse_vec);

        let mut buf = Vec::new();
        infallible(rdata.compose_rdata(&mut buf));
        assert_eq!(
            buf,
            b"\x0a\x03\x02\x02GW\x07Example\x03com\x00\xab\xcd".as_slice()
        );
        buf.clear();
        infallible(rdata.compose_canonical_rdata(&mut buf));
        assert_eq!(
            buf,
            b"\x0a\x03\x02\x02gw\x07example\x03com\x00\xab\xcd".as_slice()
        );
    }

    /// A composer that fails the test if it is asked to compress a name.
    #[derive(Default)]
    struct NoCompress(Vec<u8>);

    impl OctetsBuilder for NoCompress {
        type AppendError = core::convert::Infallible;

        fn append_slice(
            &mut self,
            slice: &[u8],
        ) -> Result<(), Self::AppendError> {
            self.0.extend_from_slice(slice);
            Ok(())
        }
    }

    impl Truncate for NoCompress {
        fn truncate(&mut self, len: usize) {
            self.0.truncate(len)
        }
    }

    impl AsRef<[u8]> for NoCompress {
        fn as_ref(&self) -> &[u8] {
            self.0.as_ref()
        }
    }

    impl AsMut<[u8]> for NoCompress {
        fn as_mut(&mut self) -> &mut [u8] {
            self.0.as_mut()
        }
    }

    impl Composer for NoCompress {
        fn append_compressed_name<N: ToName + ?Sized>(
            &mut self,
            _name: &N,
        ) -> Result<(), Self::AppendError> {
            panic!("gateway name must not be compressed")
        }

        fn can_compress(&self) -> bool {
            true
        }
    }

    #[test]
    fn name_gateway_never_compressed() {
        let rdata = name_rdata();
        let mut target = NoCompress::default();
        infallible(rdata.compose_len_rdata(&mut target));
        assert_eq!(
            target.0,
            b"\x00\x15\x0a\x03\x02\x02GW\x07Example\x03com\x00\xab\xcd"
                .as_slice()
        );
    }

    #[test]
    fn parse_errors() {
        fn parse(
            data: &[u8],
        ) -> Result<Ipseckey<&[u8], Name<&[u8]>>, ParseError> {
            Ipseckey::parse(&mut Parser::from_ref(data))
        }

        // Record data shorter than the fixed head.
        assert!(matches!(parse(b"\x0a\x01"), Err(ParseError::Form(_))));

        // Truncated addresses.
        assert!(matches!(
            parse(b"\x0a\x01\x02\x01\x02\x03"),
            Err(ParseError::Form(_))
        ));
        assert!(matches!(
            parse(b"\x0a\x02\x02\x20\x01\x0d\xb8"),
            Err(ParseError::Form(_))
        ));

        // Truncated name.
        assert!(matches!(
            parse(b"\x0a\x03\x02\x02gw\x07exa"),
            Err(ParseError::Form(_))
        ));

        // Compressed name.
        assert!(matches!(
            parse(b"\x0a\x03\x02\x02gw\xc0\x0c"),
            Err(ParseError::Form(_))
        ));

        // Unknown gateway type.
        assert!(matches!(
            parse(b"\x0a\x05\x02\x01\x02\x03\x04"),
            Err(ParseError::Form(_))
        ));

        // Empty key is fine.
        let parsed = parse(b"\x0a\x01\x02\x01\x02\x03\x04").unwrap();
        assert!(parsed.key().is_empty());
    }

    #[test]
    fn parse_rdata_limits_to_record_type() {
        let wire = b"\x0a\x00\x02\xab\xcd";
        let mut parser = Parser::from_ref(wire.as_slice());
        assert!(
            Ipseckey::<&[u8], Name<&[u8]>>::parse_rdata(Rtype::A, &mut parser)
                .unwrap()
                .is_none()
        );
        assert_eq!(parser.pos(), 0);
        assert!(Ipseckey::<&[u8], Name<&[u8]>>::parse_rdata(
            Rtype::IPSECKEY,
            &mut parser
        )
        .unwrap()
        .is_some());
    }

    #[test]
    fn new_rejects_mismatched_gateway() {
        assert_eq!(
            VecIpseckey::new(
                10,
                IpseckeyGatewayType::IPV4,
                IpseckeyAlgorithm::RSA,
                Gateway::Name(name("gw.example.com")),
                Vec::new(),
            ),
            Err(IpseckeyError::InvalidGateway)
        );
        assert_eq!(
            VecIpseckey::new(
                10,
                IpseckeyGatewayType::from_int(5),
                IpseckeyAlgorithm::RSA,
                Gateway::None,
                Vec::new(),
            ),
            Err(IpseckeyError::InvalidGateway)
        );
        assert_eq!(
            VecIpseckey::new(
                10,
                IpseckeyGatewayType::NONE,
                IpseckeyAlgorithm::RSA,
                Gateway::None,
                std::vec![0; 0xFFFD],
            ),
            Err(IpseckeyError::LongRecordData)
        );
        assert!(VecIpseckey::new(
            10,
            IpseckeyGatewayType::NONE,
            IpseckeyAlgorithm::RSA,
            Gateway::None,
            std::vec![0; 0xFFFC],
        )
        .is_ok());
    }

    #[test]
    fn scan_errors() {
        // Gateway type out of range.
        test_scan_err(&["10", "5", "2", "1.2.3.4", "q80="], VecIpseckey::scan);
        // Precedence beyond eight bits.
        test_scan_err(&["256", "1", "2", "1.2.3.4", "q80="], VecIpseckey::scan);
        // Malformed address.
        test_scan_err(&["10", "1", "2", "1.2.3", "q80="], VecIpseckey::scan);
        // No gateway needs a dot.
        test_scan_err(&["10", "0", "2", "gw", "q80="], VecIpseckey::scan);
        // Broken Base 64.
        test_scan_err(&["10", "1", "2", "1.2.3.4", "q80"], VecIpseckey::scan);
    }

    #[test]
    fn scan_invalid_gateway_message() {
        let mut scanner = IterScanner::<_, Vec<u8>>::new([
            "10", "5", "2", "1.2.3.4", "q80=",
        ]);
        let err = VecIpseckey::scan(&mut scanner).unwrap_err();
        assert_eq!(err.as_str(), "invalid gateway");
    }

    #[test]
    fn scan_split_key() {
        test_scan(
            &["10", "1", "2", "1.2.3.4", "Zm9v", "YmFy"],
            Ipseckey::scan,
            &VecIpseckey::new(
                10,
                IpseckeyGatewayType::IPV4,
                IpseckeyAlgorithm::RSA,
                Gateway::Ipv4(Ipv4Addr::new(1, 2, 3, 4)),
                Vec::from(b"foobar".as_slice()),
            )
            .unwrap(),
        );
    }

    #[test]
    fn relative_gateway() {
        let origin = name("example.com.");
        let wire = b"\x0a\x03\x02\x02gw\x07example\x03com\x00\xab\xcd";

        let parsed = Ipseckey::parse_relative(
            &mut Parser::from_ref(wire.as_slice()),
            &origin,
        )
        .unwrap();
        assert!(parsed.gateway().as_name().unwrap().is_relative());
        assert_eq!(parsed.to_string(), "10 3 2 gw q80=");

        let mut buf = Vec::new();
        parsed.compose_rdata_with_origin(&origin, &mut buf).unwrap();
        assert_eq!(buf, wire.as_slice());
        assert_eq!(
            usize::from(parsed.rdlen_with_origin(&origin).unwrap()),
            wire.len()
        );

        // Names outside the origin and the origin itself stay absolute.
        for wire in [
            b"\x0a\x03\x02\x02gw\x07example\x03net\x00".as_slice(),
            b"\x0a\x03\x02\x07example\x03com\x00".as_slice(),
        ] {
            let parsed =
                Ipseckey::parse_relative(&mut Parser::from_ref(wire), &origin)
                    .unwrap();
            assert!(parsed.gateway().as_name().unwrap().is_absolute());
            let mut buf = Vec::new();
            parsed.compose_rdata_with_origin(&origin, &mut buf).unwrap();
            assert_eq!(buf, wire);
        }
    }

    #[test]
    fn origin_overflows_record_data() {
        // Three octets of head plus 16 octets of gateway name.
        let rdata = VecIpseckey::new(
            10,
            IpseckeyGatewayType::NAME,
            IpseckeyAlgorithm::RSA,
            Gateway::Name(name("gw.example.com.")),
            std::vec![0; 0xFFFF - 3 - 16],
        )
        .unwrap();
        let origin = name("example.com");
        let relative = rdata.relativize(&origin);
        assert!(relative.gateway().as_name().unwrap().is_relative());

        assert_eq!(relative.rdlen_with_origin(&origin), Ok(0xFFFF));
        let mut buf = Vec::new();
        relative.compose_rdata_with_origin(&origin, &mut buf).unwrap();
        assert_eq!(buf.len(), 0xFFFF);

        let label = "o".repeat(60);
        let long_origin = name(&[label.as_str(); 3].join("."));
        assert_eq!(long_origin.len(), 184);
        assert!(relative.rdlen_with_origin(&long_origin).is_err());
        let mut buf = Vec::new();
        assert_eq!(
            relative.compose_rdata_with_origin(&long_origin, &mut buf),
            Err(IpseckeyError::LongRecordData)
        );
        assert!(buf.is_empty());
        assert_eq!(
            relative.compose_canonical_rdata_with_origin(&long_origin, &mut buf),
            Err(IpseckeyError::LongRecordData)
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn text_round_trip_with_origin() {
        let origin = name("example.com.");
        let absolute = name_rdata();
        let relative = absolute.clone().relativize(&origin);
        let text = relative.to_string();
        assert_eq!(text, "10 3 2 GW q80=");

        let mut scanner = IterScanner::<_, Vec<u8>>::with_origin(
            text.split_ascii_whitespace()
                .map(String::from)
                .collect::<Vec<_>>(),
            origin.clone(),
        );
        let scanned = VecIpseckey::scan(&mut scanner).unwrap();
        assert!(scanner.is_exhausted());
        assert_eq!(scanned, absolute);
        assert_eq!(scanned.relativize(&origin), relative);
    }

    #[test]
    fn canonical_cmp() {
        let upper = name_rdata();
        let lower = Ipseckey::new(
            10,
            IpseckeyGatewayType::NAME,
            IpseckeyAlgorithm::RSA,
            Gateway::Name(name("gw.example.com.")),
            Vec::from([0xAB, 0xCD]),
        )
        .unwrap();
        assert_eq!(upper.canonical_cmp(&lower), Ordering::Equal);
        assert_eq!(upper, lower);

        // Gateway type sorts before algorithm.
        let ipv4 = VecIpseckey::new(
            10,
            IpseckeyGatewayType::IPV4,
            IpseckeyAlgorithm::EDDSA,
            Gateway::Ipv4(Ipv4Addr::new(9, 9, 9, 9)),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(ipv4.canonical_cmp(&upper), Ordering::Less);
    }

    #[cfg(feature = "bytes")]
    #[test]
    fn octets_into() {
        let rdata = name_rdata();
        let converted: Ipseckey<bytes::Bytes, Name<bytes::Bytes>> =
            rdata.clone().octets_into();
        assert_eq!(converted, rdata);
    }

    #[test]
    fn zonefile_multiline() {
        assert_eq!(
            name_rdata().display_zonefile(true).to_string(),
            [
                "( 10\t; precedence",
                "  3\t; gateway type: NAME",
                "  2\t; algorithm: RSA",
                "  GW.Example.com.\t; gateway",
                "  q80= )",
            ]
            .join("\n")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Configure, Token};

        let rdata = ipv4_rdata();
        assert_tokens(
            &rdata.readable(),
            &[
                Token::Struct {
                    name: "Ipseckey",
                    len: 4,
                },
                Token::Str("precedence"),
                Token::U8(10),
                Token::Str("algorithm"),
                Token::U8(2),
                Token::Str("gateway"),
                Token::NewtypeVariant {
                    name: "Gateway",
                    variant: "Ipv4",
                },
                Token::Str("1.2.3.4"),
                Token::Str("key"),
                Token::Str("q80="),
                Token::StructEnd,
            ],
        );
    }
}
