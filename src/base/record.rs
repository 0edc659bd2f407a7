//! Resource records.
//!
//! A [`Record`] combines record data with the owner name, class, and
//! [`Ttl`] of a resource record. Records are read and written in their
//! standalone wire format, as they appear in a message section but
//! without any name compression.

use super::cmp::CanonicalOrd;
use super::iana::{Class, Rtype};
use super::name::{Name, ToName};
use super::rdata::{ComposeRecordData, ParseRecordData, RecordData};
use super::wire::{Compose, Composer, FormError, Parse, ParseError};
use super::zonefile_fmt::{self, Formatter, ZonefileFmt};
use core::cmp::Ordering;
use core::fmt;
use core::time::Duration;
use octseq::builder::OctetsBuilder;
use octseq::octets::Octets;
use octseq::parse::Parser;
use tracing::debug;

//------------ Record --------------------------------------------------------

/// A resource record.
///
/// The record type isn’t stored separately. It is provided by the record
/// data through [`RecordData::rtype`].
#[derive(Clone)]
pub struct Record<N, D> {
    owner: N,
    class: Class,
    ttl: Ttl,
    data: D,
}

impl<N, D> Record<N, D> {
    pub fn new(owner: N, class: Class, ttl: Ttl, data: D) -> Self {
        Record {
            owner,
            class,
            ttl,
            data,
        }
    }

    pub fn owner(&self) -> &N {
        &self.owner
    }

    pub fn rtype(&self) -> Rtype
    where
        D: RecordData,
    {
        self.data.rtype()
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn ttl(&self) -> Ttl {
        self.ttl
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn into_data(self) -> D {
        self.data
    }
}

impl<Octs, D> Record<Name<Octs>, D> {
    /// Parses a record.
    ///
    /// Returns `Ok(None)` if the record data type doesn’t handle the
    /// record type. The record is skipped in this case. Record data that
    /// is left over after parsing is an error.
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized + 'a>(
        parser: &mut Parser<'a, Src>,
    ) -> Result<Option<Self>, ParseError>
    where
        D: ParseRecordData<'a, Src>,
    {
        let owner = Name::parse(parser)?;
        let rtype = Rtype::parse(parser)?;
        let class = Class::parse(parser)?;
        let ttl = Ttl::parse(parser)?;
        let rdlen = usize::from(parser.parse_u16_be()?);
        let mut rdata = parser.parse_parser(rdlen)?;
        let Some(data) = D::parse_rdata(rtype, &mut rdata)? else {
            return Ok(None);
        };
        if rdata.remaining() > 0 {
            debug!(
                %rtype,
                rdlen,
                trailing = rdata.remaining(),
                "rejecting record with trailing record data"
            );
            return Err(FormError::new("trailing record data").into());
        }
        Ok(Some(Record::new(owner, class, ttl, data)))
    }
}

impl<N: ToName, D: ComposeRecordData> Record<N, D> {
    /// Appends the wire format of the record.
    ///
    /// Only the owner name is offered to the target for compression.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_compressed_name(&self.owner)?;
        self.compose_fields(target)?;
        self.data.compose_len_rdata(target)
    }

    /// Appends the canonical wire format of the record.
    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.owner.compose_canonical(target)?;
        self.compose_fields(target)?;
        self.data.compose_canonical_len_rdata(target)
    }

    fn compose_fields<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.data.rtype().compose(target)?;
        self.class.compose(target)?;
        self.ttl.compose(target)
    }
}

//--- PartialEq and Eq

impl<N, NN, D, DD> PartialEq<Record<NN, DD>> for Record<N, D>
where
    N: PartialEq<NN>,
    D: PartialEq<DD>,
{
    /// Compares owner, class, and data. The TTL is ignored.
    fn eq(&self, other: &Record<NN, DD>) -> bool {
        self.owner == other.owner
            && self.class == other.class
            && self.data == other.data
    }
}

impl<N: Eq, D: Eq> Eq for Record<N, D> {}

//--- CanonicalOrd

impl<N, NN, D, DD> CanonicalOrd<Record<NN, DD>> for Record<N, D>
where
    N: ToName,
    NN: ToName,
    D: RecordData + CanonicalOrd<DD>,
    DD: RecordData,
{
    fn canonical_cmp(&self, other: &Record<NN, DD>) -> Ordering {
        self.class
            .cmp(&other.class)
            .then_with(|| self.owner.name_cmp(&other.owner))
            .then_with(|| self.rtype().cmp(&other.rtype()))
            .then_with(|| self.data.canonical_cmp(&other.data))
    }
}

//--- Display, Debug, and ZonefileFmt

impl<N: ZonefileFmt, D: RecordData + ZonefileFmt> fmt::Display
    for Record<N, D>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_zonefile(false), f)
    }
}

impl<N: fmt::Debug, D: fmt::Debug> fmt::Debug for Record<N, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("owner", &self.owner)
            .field("class", &self.class)
            .field("ttl", &self.ttl)
            .field("data", &self.data)
            .finish()
    }
}

impl<N: ZonefileFmt, D: RecordData + ZonefileFmt> ZonefileFmt
    for Record<N, D>
{
    fn fmt(&self, p: &mut impl Formatter) -> zonefile_fmt::Result {
        p.write_show(&self.owner)?;
        p.write_token(self.ttl)?;
        p.write_show(self.class)?;
        p.write_show(self.rtype())?;
        p.write_show(&self.data)
    }
}

//------------ Ttl -----------------------------------------------------------

/// The time to live of a record in seconds.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ttl(u32);

impl Ttl {
    pub const HOUR: Ttl = Ttl(3600);

    #[must_use]
    pub const fn from_secs(secs: u32) -> Self {
        Ttl(secs)
    }

    #[must_use]
    pub const fn as_secs(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn into_duration(self) -> Duration {
        Duration::from_secs(self.0 as u64)
    }
}

impl Compose for Ttl {
    const COMPOSE_LEN: u16 = u32::COMPOSE_LEN;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.0.compose(target)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for Ttl {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        u32::parse(parser).map(Ttl)
    }
}

impl fmt::Display for Ttl {
    /// Writes the number of seconds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use crate::base::iana::{IpseckeyAlgorithm, IpseckeyGatewayType};
    use crate::rdata::ipseckey::{Gateway, Ipseckey};
    use octseq::builder::infallible;
    use std::string::ToString;
    use std::vec::Vec;

    type VecRecord = Record<Name<Vec<u8>>, Ipseckey<Vec<u8>, Name<Vec<u8>>>>;
    type RefRecord<'a> =
        Record<Name<&'a [u8]>, Ipseckey<&'a [u8], Name<&'a [u8]>>>;

    fn record(owner: &str, ttl: Ttl) -> VecRecord {
        Record::new(
            Name::vec_from_str(owner).unwrap(),
            Class::IN,
            ttl,
            Ipseckey::new(
                10,
                IpseckeyGatewayType::IPV4,
                IpseckeyAlgorithm::RSA,
                Gateway::Ipv4([192, 0, 2, 1].into()),
                Vec::from(b"\x01\x02".as_slice()),
            )
            .unwrap(),
        )
    }

    #[test]
    fn compose_parse() {
        let record = record("gw.example.com", Ttl::HOUR);
        let mut buf = Vec::new();
        infallible(record.compose(&mut buf));
        assert_eq!(
            buf,
            b"\x02gw\x07example\x03com\x00\
              \x00\x2d\x00\x01\x00\x00\x0e\x10\x00\x09\
              \x0a\x01\x02\xc0\x00\x02\x01\x01\x02"
                .as_slice()
        );

        let mut parser = Parser::from_ref(buf.as_slice());
        let parsed = RefRecord::parse(&mut parser).unwrap().unwrap();
        assert_eq!(parser.remaining(), 0);
        assert_eq!(parsed, record);
        assert_eq!(parsed.ttl(), Ttl::HOUR);
        assert_eq!(parsed.rtype(), Rtype::IPSECKEY);
    }

    #[test]
    fn parse_other_type_skips() {
        // An A record for the root.
        let buf = b"\x00\x00\x01\x00\x01\x00\x00\x00\x00\x00\x04\xc0\x00\x02\x01";
        let mut parser = Parser::from_ref(buf.as_slice());
        assert!(RefRecord::parse(&mut parser).unwrap().is_none());
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn parse_bad_rdlen() {
        // The record data length cuts the IPv4 gateway in half.
        let buf = b"\x00\x00\x2d\x00\x01\x00\x00\x00\x00\x00\x05\
                    \x0a\x01\x02\xc0\x00";
        assert!(RefRecord::parse(&mut Parser::from_ref(buf.as_slice())).is_err());

        // The record data length extends beyond the data.
        let buf = b"\x00\x00\x2d\x00\x01\x00\x00\x00\x00\x00\x09\
                    \x0a\x01\x02\xc0\x00";
        assert!(RefRecord::parse(&mut Parser::from_ref(buf.as_slice())).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(
            record("gw.example.com", Ttl::HOUR).to_string(),
            "gw.example.com. 3600 IN IPSECKEY 10 1 2 192.0.2.1 AQI="
        );
    }

    #[test]
    fn canonical() {
        let lower = record("gw.example.com", Ttl::HOUR);
        let upper = record("GW.Example.com", Ttl::from_secs(60));
        assert_eq!(lower.canonical_cmp(&upper), Ordering::Equal);
        assert_eq!(lower, upper);

        let mut buf = Vec::new();
        infallible(upper.compose_canonical(&mut buf));
        assert!(buf.starts_with(b"\x02gw\x07example\x03com\x00\x00\x2d"));
        assert!(lower.canonical_lt(&record("hw.example.com", Ttl::HOUR)));
    }

    #[test]
    fn ttl() {
        assert_eq!(Ttl::HOUR.as_secs(), 3600);
        assert_eq!(Ttl::from_secs(90).into_duration(), Duration::from_secs(90));
        assert_eq!(Ttl::from_secs(7200).to_string(), "7200");
    }
}
