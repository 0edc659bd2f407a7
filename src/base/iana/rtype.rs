//! Resource record types.

registry! {
    /// The type of a resource record.
    ///
    /// Only IPSECKEY and a few types commonly found next to it are listed.
    /// Any other value is available through [`Rtype::from_int`] and is
    /// written as `TYPE` followed by the decimal value. The assigned values
    /// are kept in the [Resource Record TYPEs registry].
    ///
    /// [Resource Record TYPEs registry]: https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    Rtype(u16) {
        /// An IPv4 host address.
        A = 1, "A";

        /// An authoritative name server.
        NS = 2, "NS";

        /// Text strings.
        TXT = 16, "TXT";

        /// An IPv6 host address.
        AAAA = 28, "AAAA";

        /// IPsec keying material, see RFC 4025.
        IPSECKEY = 45, "IPSECKEY";

        /// A signature over a record set.
        RRSIG = 46, "RRSIG";

        /// A zone key.
        DNSKEY = 48, "DNSKEY";

        /// All records of a name.
        ANY = 255, "ANY";
    }
}

registry_mnemonic!(Rtype(u16), "TYPE", RtypeFromStrError);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ipseckey() {
        assert_eq!(Rtype::IPSECKEY.to_int(), 45);
        assert_eq!("ipseckey".parse(), Ok(Rtype::IPSECKEY));
        assert_eq!("TYPE45".parse(), Ok(Rtype::IPSECKEY));
        assert_eq!(Rtype::from_mnemonic("IpSecKey"), Some(Rtype::IPSECKEY));
        assert!("TYPE45x".parse::<Rtype>().is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn display() {
        assert_eq!(format!("{}", Rtype::IPSECKEY), "IPSECKEY");
        assert_eq!(format!("{}", Rtype::from_int(65280)), "TYPE65280");
        assert!(!Rtype::from_int(65280).is_known());
    }
}
