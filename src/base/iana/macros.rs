//! Macros for defining registry types.

/// Defines a registry type wrapping an integer.
///
/// The type gets associated constants for the listed values, conversions
/// from and to the integer, the wire format traits, and a `Debug` impl
/// that shows the mnemonic of a listed value. How the type is written in
/// presentation format is added by one of the other macros.
macro_rules! registry {
    (
        $(#[$attr:meta])*
        $name:ident($int:ty) {
            $(
                $(#[$value_attr:meta])*
                $value:ident = $number:expr, $mnemonic:expr;
            )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $name($int);

        impl $name {
            $(
                $(#[$value_attr])*
                pub const $value: $name = $name($number);
            )*

            #[must_use]
            pub const fn from_int(value: $int) -> Self {
                $name(value)
            }

            #[must_use]
            pub const fn to_int(self) -> $int {
                self.0
            }

            /// Returns the mnemonic of a listed value.
            #[must_use]
            pub const fn to_mnemonic(self) -> Option<&'static str> {
                match self {
                    $( $name::$value => Some($mnemonic), )*
                    _ => None,
                }
            }

            /// Returns the listed value for a mnemonic, ignoring case.
            #[must_use]
            pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
                $(
                    if mnemonic.eq_ignore_ascii_case($mnemonic) {
                        return Some($name::$value);
                    }
                )*
                None
            }

            /// Returns whether the value is one of the listed ones.
            #[must_use]
            pub const fn is_known(self) -> bool {
                self.to_mnemonic().is_some()
            }
        }

        impl From<$int> for $name {
            fn from(value: $int) -> Self {
                $name(value)
            }
        }

        impl From<$name> for $int {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl $crate::base::wire::Compose for $name {
            const COMPOSE_LEN: u16 =
                <$int as $crate::base::wire::Compose>::COMPOSE_LEN;

            fn compose<Target: octseq::builder::OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                $crate::base::wire::Compose::compose(&self.0, target)
            }
        }

        impl<'a, Octs: AsRef<[u8]> + ?Sized> $crate::base::wire::Parse<'a, Octs>
            for $name
        {
            fn parse(
                parser: &mut octseq::parse::Parser<'a, Octs>,
            ) -> Result<Self, $crate::base::wire::ParseError> {
                <$int as $crate::base::wire::Parse<'a, Octs>>::parse(parser)
                    .map($name)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self.to_mnemonic() {
                    Some(mnemonic) => {
                        write!(f, concat!(stringify!($name), "::{}"), mnemonic)
                    }
                    None => write!(f, concat!(stringify!($name), "({})"), self.0),
                }
            }
        }
    };
}

/// Makes a registry type use its decimal value in presentation format.
///
/// The second argument names the field the value appears in. Multi-line
/// output adds it as a comment after the value, together with the
/// mnemonic if there is one. With the `serde` feature, the value is
/// serialized as its integer.
macro_rules! registry_decimal {
    ($name:ident($int:ty), $field:expr) => {
        impl core::str::FromStr for $name {
            type Err = core::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$int as core::str::FromStr>::from_str(s).map($name)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl<S: $crate::base::scan::Scanner> $crate::base::scan::Scan<S>
            for $name
        {
            fn scan(scanner: &mut S) -> Result<Self, S::Error> {
                <$int as $crate::base::scan::Scan<S>>::scan(scanner).map($name)
            }
        }

        impl $crate::base::zonefile_fmt::ZonefileFmt for $name {
            fn fmt(
                &self,
                p: &mut impl $crate::base::zonefile_fmt::Formatter,
            ) -> $crate::base::zonefile_fmt::Result {
                p.write_token(self.0)?;
                match self.to_mnemonic() {
                    Some(mnemonic) => {
                        p.write_comment(format_args!("{}: {}", $field, mnemonic))
                    }
                    None => p.write_comment($field),
                }
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                <$int as serde::Deserialize<'de>>::deserialize(deserializer)
                    .map($name)
            }
        }
    };
}

/// Makes a registry type use its mnemonic in presentation format.
///
/// Values without a mnemonic are written as the prefix directly followed
/// by the decimal value, the generic form of RFC 3597. Both forms are
/// accepted when reading, ignoring case. Reading fails with `$error`.
macro_rules! registry_mnemonic {
    ($name:ident($int:ty), $prefix:expr, $error:ident) => {
        impl core::str::FromStr for $name {
            type Err = $error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Some(value) = $name::from_mnemonic(s) {
                    return Ok(value);
                }
                let split = $prefix.len();
                match (s.get(..split), s.get(split..)) {
                    (Some(head), Some(number))
                        if head.eq_ignore_ascii_case($prefix)
                            && !number.is_empty()
                            && number.bytes().all(|ch| ch.is_ascii_digit()) =>
                    {
                        number.parse().map($name).map_err(|_| $error(()))
                    }
                    _ => Err($error(())),
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self.to_mnemonic() {
                    Some(mnemonic) => f.write_str(mnemonic),
                    None => write!(f, "{}{}", $prefix, self.0),
                }
            }
        }

        impl $crate::base::zonefile_fmt::ZonefileFmt for $name {
            fn fmt(
                &self,
                p: &mut impl $crate::base::zonefile_fmt::Formatter,
            ) -> $crate::base::zonefile_fmt::Result {
                p.write_token(self)
            }
        }

        /// A string wasn’t a known mnemonic or the generic form.
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub struct $error(());

        impl core::fmt::Display for $error {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(concat!("unknown ", stringify!($name)))
            }
        }

        #[cfg(feature = "std")]
        impl std::error::Error for $error {}
    };
}
