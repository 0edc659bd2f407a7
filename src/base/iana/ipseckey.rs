//! IPSECKEY parameters.
//!
//! Neither registry defines mnemonics. The names used here only show up
//! in `Debug` output and in the comments of multi-line output. The
//! presentation format always uses the decimal value.

registry! {
    /// The algorithm of the public key in an [IPSECKEY] record.
    ///
    /// See the [IANA registry] for the assigned values.
    ///
    /// [IPSECKEY]: crate::rdata::Ipseckey
    /// [IANA registry]: https://www.iana.org/assignments/ipseckey-rr-parameters/ipseckey-rr-parameters.xhtml#ipseckey-rr-parameters-1
    IpseckeyAlgorithm(u8) {
        /// No key is present.
        NONE = 0, "NONE";

        DSA = 1, "DSA";

        RSA = 2, "RSA";

        ECDSA = 3, "ECDSA";

        EDDSA = 4, "EdDSA";
    }
}

registry_decimal!(IpseckeyAlgorithm(u8), "algorithm");

registry! {
    /// The kind of gateway in an [IPSECKEY] record.
    ///
    /// The set is closed: the length of the gateway field is only known
    /// for the four types listed here.
    ///
    /// [IPSECKEY]: crate::rdata::Ipseckey
    IpseckeyGatewayType(u8) {
        /// No gateway.
        NONE = 0, "NONE";

        /// A four octet IPv4 address.
        IPV4 = 1, "IPV4";

        /// A sixteen octet IPv6 address.
        IPV6 = 2, "IPV6";

        /// An uncompressed domain name.
        NAME = 3, "NAME";
    }
}

registry_decimal!(IpseckeyGatewayType(u8), "gateway type");

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn gateway_type_known() {
        assert!(IpseckeyGatewayType::NAME.is_known());
        assert!(!IpseckeyGatewayType::from_int(4).is_known());
        assert_eq!("3".parse(), Ok(IpseckeyGatewayType::NAME));
        assert!("NAME".parse::<IpseckeyGatewayType>().is_err());
        assert!("256".parse::<IpseckeyGatewayType>().is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn debug_and_display() {
        assert_eq!(
            format!("{:?}", IpseckeyAlgorithm::EDDSA),
            "IpseckeyAlgorithm::EdDSA"
        );
        assert_eq!(
            format!("{:?}", IpseckeyAlgorithm::from_int(7)),
            "IpseckeyAlgorithm(7)"
        );
        assert_eq!(format!("{}", IpseckeyAlgorithm::RSA), "2");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(&IpseckeyAlgorithm::RSA, &[Token::U8(2)]);
        assert_tokens(&IpseckeyGatewayType::from_int(9), &[Token::U8(9)]);
    }
}
