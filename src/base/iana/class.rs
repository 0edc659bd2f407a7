//! DNS classes.

registry! {
    /// The class of a resource record.
    ///
    /// Only IN is in real use. Values without a mnemonic are written as
    /// `CLASS` followed by the decimal value. The assigned values are kept
    /// in the [DNS CLASSes registry].
    ///
    /// [DNS CLASSes registry]: https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-2
    Class(u16) {
        /// Internet.
        IN = 1, "IN";

        /// Chaosnet.
        CH = 3, "CH";

        /// Hesiod.
        HS = 4, "HS";

        /// The query class NONE of RFC 2136.
        NONE = 0xFE, "NONE";

        /// The query class for any class.
        ANY = 0xFF, "*";
    }
}

registry_mnemonic!(Class(u16), "CLASS", ClassFromStrError);
