/// A macro which defines a TLS wire enum.
///
/// Every listed variant maps to a fixed literal; any other value of the
/// underlying integer type is kept in the generated `Unknown` variant, so
/// conversion from the integer is total and round-trips.
///
/// `Unknown` can also be built directly with a listed value.  Equality,
/// hashing and naming therefore go through the integer, so such a value
/// behaves exactly like the variant it encodes.
macro_rules! enum_builder {
    (
        $(#[doc = $comment:literal])*
        #[repr($uint:ty)]
        $enum_vis:vis enum $enum_name:ident
        {
          $(
            $(#[doc = $var_comment:literal])*
            $enum_var:ident => $enum_val:literal
          ),* $(,)?
        }
    ) => {
        $(#[doc = $comment])*
        #[non_exhaustive]
        #[derive(Clone, Copy)]
        $enum_vis enum $enum_name {
            $(
                $(#[doc = $var_comment])*
                $enum_var,
            )*
            /// A value not listed above.
            Unknown($uint),
        }

        impl $enum_name {
            /// This value with any `Unknown` payload that names a listed
            /// variant replaced by that variant.
            // NOTE(allow) generated irrespective if there are callers
            #[allow(dead_code)]
            pub(crate) fn canonical(self) -> Self {
                Self::from(<$uint>::from(self))
            }

            /// The big-endian wire encoding of this value.
            // NOTE(allow) generated irrespective if there are callers
            #[allow(dead_code)]
            $enum_vis fn to_array(self) -> [u8; core::mem::size_of::<$uint>()] {
                <$uint>::from(self).to_be_bytes()
            }

            /// The variant name, or `None` for `Unknown` values.
            // NOTE(allow) generated irrespective if there are callers
            #[allow(dead_code)]
            $enum_vis fn as_str(&self) -> Option<&'static str> {
                match self.canonical() {
                    $( $enum_name::$enum_var => Some(stringify!($enum_var)), )*
                    $enum_name::Unknown(_) => None,
                }
            }
        }

        impl Codec<'_> for $enum_name {
            // NOTE(allow) fully qualified Vec is only needed in no-std mode
            #[allow(unused_qualifications)]
            fn encode(&self, bytes: &mut alloc::vec::Vec<u8>) {
                <$uint>::from(*self).encode(bytes);
            }

            fn read(r: &mut Reader<'_>) -> Result<Self, crate::error::InvalidMessage> {
                match <$uint>::read(r) {
                    Ok(x) => Ok($enum_name::from(x)),
                    Err(_) => Err(crate::error::InvalidMessage::MissingData(stringify!($enum_name))),
                }
            }
        }

        impl From<$uint> for $enum_name {
            fn from(x: $uint) -> Self {
                match x {
                    $( $enum_val => $enum_name::$enum_var, )*
                    x => $enum_name::Unknown(x),
                }
            }
        }

        impl From<$enum_name> for $uint {
            fn from(value: $enum_name) -> Self {
                match value {
                    $( $enum_name::$enum_var => $enum_val, )*
                    $enum_name::Unknown(x) => x,
                }
            }
        }

        impl PartialEq for $enum_name {
            fn eq(&self, other: &Self) -> bool {
                <$uint>::from(*self) == <$uint>::from(*other)
            }
        }

        impl Eq for $enum_name {}

        impl core::hash::Hash for $enum_name {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash(&<$uint>::from(*self), state);
            }
        }

        impl core::fmt::Debug for $enum_name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self.canonical() {
                    $( $enum_name::$enum_var => f.write_str(stringify!($enum_var)), )*
                    $enum_name::Unknown(x) => write!(f, "{}(0x{:x?})", stringify!($enum_name), x),
                }
            }
        }
    };
}
