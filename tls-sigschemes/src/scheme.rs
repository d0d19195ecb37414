#![expect(non_camel_case_types)]

use alloc::vec::Vec;
use core::fmt;
use core::ops::RangeInclusive;

use pki_types::{AlgorithmIdentifier, alg_id};

use crate::codec::{Codec, Reader};
use crate::enums::{HashAlgorithm, ProtocolVersion, SignatureAlgorithm};
use crate::sign::SigningKey;
use crate::x509;

enum_builder! {
    /// The `SignatureScheme` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    ///
    /// The TLS1.2 codes are the `(hash, signature)` pairs of RFC5246
    /// section 7.4.1.4.1; the 0x08xx codes are defined by RFC8446.
    #[repr(u16)]
    pub enum SignatureScheme {
        /// No scheme has been negotiated (yet).
        NONE => 0x0000,
        /// `rsa_pkcs1_sha1`: legacy, never offered or accepted.
        RSA_PKCS1_SHA1 => 0x0201,
        /// `dsa_sha1` (TLS1.2 and earlier only).
        DSA_SHA1 => 0x0202,
        /// `ecdsa_sha1`: legacy, never offered or accepted.
        ECDSA_SHA1_Legacy => 0x0203,
        /// `rsa_pkcs1_sha256`.
        RSA_PKCS1_SHA256 => 0x0401,
        /// `dsa_sha256` (TLS1.2 and earlier only).
        DSA_SHA256 => 0x0402,
        /// `ecdsa_secp256r1_sha256`.
        ECDSA_NISTP256_SHA256 => 0x0403,
        /// `rsa_pkcs1_sha384`.
        RSA_PKCS1_SHA384 => 0x0501,
        /// `dsa_sha384` (TLS1.2 and earlier only).
        DSA_SHA384 => 0x0502,
        /// `ecdsa_secp384r1_sha384`.
        ECDSA_NISTP384_SHA384 => 0x0503,
        /// `rsa_pkcs1_sha512`.
        RSA_PKCS1_SHA512 => 0x0601,
        /// `dsa_sha512` (TLS1.2 and earlier only).
        DSA_SHA512 => 0x0602,
        /// `ecdsa_secp521r1_sha512`.
        ECDSA_NISTP521_SHA512 => 0x0603,
        /// `rsa_pss_rsae_sha256`.
        RSA_PSS_SHA256 => 0x0804,
        /// `rsa_pss_rsae_sha384`.
        RSA_PSS_SHA384 => 0x0805,
        /// `rsa_pss_rsae_sha512`.
        RSA_PSS_SHA512 => 0x0806,
        /// `ed25519`.
        ED25519 => 0x0807,
        /// `ed448`.
        ED448 => 0x0808,
    }
}

/// The schemes this crate offers and accepts by default, most preferred
/// first.
///
/// SHA-1 and DSA schemes are recognised but never listed here.  EdDSA is
/// left out as well: certificate-based EdDSA authentication is not offered.
pub static AVAILABLE_SCHEMES: &[SignatureScheme] = &[
    SignatureScheme::RSA_PSS_SHA384,
    SignatureScheme::RSA_PSS_SHA256,
    SignatureScheme::RSA_PSS_SHA512,
    SignatureScheme::RSA_PKCS1_SHA384,
    SignatureScheme::RSA_PKCS1_SHA512,
    SignatureScheme::RSA_PKCS1_SHA256,
    SignatureScheme::ECDSA_NISTP384_SHA384,
    SignatureScheme::ECDSA_NISTP521_SHA512,
    SignatureScheme::ECDSA_NISTP256_SHA256,
];

/// What [`SignatureScheme::hash_function_name()`] reports for unknown schemes.
pub const UNKNOWN_HASH: &str = "Unknown hash function";

/// What [`SignatureScheme::padding_string()`] reports for unknown schemes.
pub const UNKNOWN_PADDING: &str = "Unknown padding";

/// What [`SignatureScheme::algorithm_name()`] reports for unknown schemes.
pub const UNKNOWN_ALGORITHM: &str = "Unknown algorithm";

/// Hash name of schemes that sign the message itself rather than a digest.
const PURE: &str = "Pure";

// Keys must be at least as strong as secp256r1: anything at or below this
// length is refused for every scheme.
const MIN_KEY_LENGTH: usize = 250;

// ECDSA key lengths accepted for each hash, pairing the curve with the hash
// output size.
const SECP256R1_KEY_LENGTHS: RangeInclusive<usize> = 250..=350;
const SECP384R1_KEY_LENGTHS: RangeInclusive<usize> = 350..=450;
const SECP521R1_KEY_LENGTHS: RangeInclusive<usize> = 450..=550;

/// How the raw bytes of a signature are laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignatureFormat {
    /// Fixed-width big-endian integers, concatenated (IEEE 1363 style).
    /// RSA signatures are a single such integer.
    Ieee1363,
    /// A DER `SEQUENCE` of `INTEGER`s.
    DerSequence,
}

impl SignatureScheme {
    /// The default offer, most preferred first.  Same as [`AVAILABLE_SCHEMES`].
    pub fn all_available() -> &'static [Self] {
        AVAILABLE_SCHEMES
    }

    /// Whether this scheme is one we offer and accept.
    ///
    /// This is stricter than [`Self::is_known()`]: `RSA_PKCS1_SHA1` is known,
    /// but never available.
    pub fn is_available(&self) -> bool {
        AVAILABLE_SCHEMES.contains(self)
    }

    /// `false` only for [`Self::NONE`].
    pub fn is_set(&self) -> bool {
        self.canonical() != Self::NONE
    }

    /// Whether this is one of the named schemes (not `NONE`, not `Unknown`).
    pub fn is_known(&self) -> bool {
        self.name().is_some()
    }

    /// The scheme's display name, or `None` if it is not known.
    ///
    /// The `Display` impl writes this, or a fallback naming the wire code.
    pub fn name(&self) -> Option<&'static str> {
        match self.canonical() {
            Self::NONE | Self::Unknown(_) => None,
            known => known.as_str(),
        }
    }

    /// The hash applied to the message before signing.
    ///
    /// `None` for EdDSA, which signs the message itself, and for unknown
    /// schemes.
    pub fn hash_algorithm(&self) -> Option<HashAlgorithm> {
        match self.canonical() {
            Self::RSA_PKCS1_SHA1 | Self::ECDSA_SHA1_Legacy | Self::DSA_SHA1 => {
                Some(HashAlgorithm::SHA1)
            }

            Self::RSA_PKCS1_SHA256
            | Self::ECDSA_NISTP256_SHA256
            | Self::RSA_PSS_SHA256
            | Self::DSA_SHA256 => Some(HashAlgorithm::SHA256),

            Self::RSA_PKCS1_SHA384
            | Self::ECDSA_NISTP384_SHA384
            | Self::RSA_PSS_SHA384
            | Self::DSA_SHA384 => Some(HashAlgorithm::SHA384),

            Self::RSA_PKCS1_SHA512
            | Self::ECDSA_NISTP521_SHA512
            | Self::RSA_PSS_SHA512
            | Self::DSA_SHA512 => Some(HashAlgorithm::SHA512),

            Self::ED25519 | Self::ED448 | Self::NONE | Self::Unknown(_) => None,
        }
    }

    /// Name of the hash function, `"Pure"` for EdDSA, or [`UNKNOWN_HASH`].
    pub fn hash_function_name(&self) -> &'static str {
        match self.canonical() {
            Self::ED25519 | Self::ED448 => PURE,
            _ => self
                .hash_algorithm()
                .and_then(|hash| hash.name())
                .unwrap_or(UNKNOWN_HASH),
        }
    }

    /// The padding/encoding descriptor handed to the signing engine, or
    /// [`UNKNOWN_PADDING`].
    ///
    /// RSA-PSS uses MGF1 with the scheme's hash and a salt as long as the
    /// hash output.
    pub fn padding_string(&self) -> &'static str {
        match self.canonical() {
            Self::RSA_PKCS1_SHA1 => "EMSA_PKCS1(SHA-1)",
            Self::RSA_PKCS1_SHA256 => "EMSA_PKCS1(SHA-256)",
            Self::RSA_PKCS1_SHA384 => "EMSA_PKCS1(SHA-384)",
            Self::RSA_PKCS1_SHA512 => "EMSA_PKCS1(SHA-512)",

            Self::ECDSA_SHA1_Legacy | Self::DSA_SHA1 => "EMSA1(SHA-1)",
            Self::ECDSA_NISTP256_SHA256 | Self::DSA_SHA256 => "EMSA1(SHA-256)",
            Self::ECDSA_NISTP384_SHA384 | Self::DSA_SHA384 => "EMSA1(SHA-384)",
            Self::ECDSA_NISTP521_SHA512 | Self::DSA_SHA512 => "EMSA1(SHA-512)",

            Self::RSA_PSS_SHA256 => "PSSR(SHA-256,MGF1,32)",
            Self::RSA_PSS_SHA384 => "PSSR(SHA-384,MGF1,48)",
            Self::RSA_PSS_SHA512 => "PSSR(SHA-512,MGF1,64)",

            Self::ED25519 | Self::ED448 => PURE,

            Self::NONE | Self::Unknown(_) => UNKNOWN_PADDING,
        }
    }

    /// The kind of key this scheme signs with.
    ///
    /// Both RSA-PKCS1 and RSA-PSS schemes report `RSA`.
    pub fn algorithm(&self) -> SignatureAlgorithm {
        match self.canonical() {
            Self::RSA_PKCS1_SHA1
            | Self::RSA_PKCS1_SHA256
            | Self::RSA_PKCS1_SHA384
            | Self::RSA_PKCS1_SHA512
            | Self::RSA_PSS_SHA256
            | Self::RSA_PSS_SHA384
            | Self::RSA_PSS_SHA512 => SignatureAlgorithm::RSA,

            Self::ECDSA_SHA1_Legacy
            | Self::ECDSA_NISTP256_SHA256
            | Self::ECDSA_NISTP384_SHA384
            | Self::ECDSA_NISTP521_SHA512 => SignatureAlgorithm::ECDSA,

            Self::ED25519 => SignatureAlgorithm::ED25519,
            Self::ED448 => SignatureAlgorithm::ED448,

            Self::DSA_SHA1 | Self::DSA_SHA256 | Self::DSA_SHA384 | Self::DSA_SHA512 => {
                SignatureAlgorithm::DSA
            }

            Self::NONE | Self::Unknown(_) => SignatureAlgorithm::Unknown(0),
        }
    }

    /// The key's algorithm family name (`"RSA"`, `"ECDSA"`, `"Ed25519"`,
    /// `"Ed448"` or `"DSA"`), or [`UNKNOWN_ALGORITHM`].
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm()
            .family_name()
            .unwrap_or(UNKNOWN_ALGORITHM)
    }

    /// The `AlgorithmIdentifier` of public keys used with this scheme, as
    /// embedded in a certificate's `SubjectPublicKeyInfo`.
    ///
    /// ECDSA schemes carry their named curve, RSA carries NULL parameters
    /// and EdDSA and DSA carry none.  `ECDSA_SHA1_Legacy` binds no curve, so
    /// its identifier has no parameters either.
    pub fn algorithm_identifier(&self) -> Option<AlgorithmIdentifier> {
        match self.canonical() {
            Self::ECDSA_SHA1_Legacy => Some(x509::ECDSA_ANY_CURVE),
            Self::ECDSA_NISTP256_SHA256 => Some(alg_id::ECDSA_P256),
            Self::ECDSA_NISTP384_SHA384 => Some(alg_id::ECDSA_P384),
            Self::ECDSA_NISTP521_SHA512 => Some(alg_id::ECDSA_P521),

            Self::ED25519 => Some(alg_id::ED25519),
            Self::ED448 => Some(x509::ED448),

            Self::RSA_PKCS1_SHA1
            | Self::RSA_PKCS1_SHA256
            | Self::RSA_PKCS1_SHA384
            | Self::RSA_PKCS1_SHA512
            | Self::RSA_PSS_SHA256
            | Self::RSA_PSS_SHA384
            | Self::RSA_PSS_SHA512 => Some(alg_id::RSA_ENCRYPTION),

            Self::DSA_SHA1 | Self::DSA_SHA256 | Self::DSA_SHA384 | Self::DSA_SHA512 => {
                Some(x509::DSA)
            }

            Self::NONE | Self::Unknown(_) => None,
        }
    }

    /// [`Self::algorithm_identifier()`] as a complete DER `SEQUENCE`.
    pub fn algorithm_identifier_der(&self) -> Option<Vec<u8>> {
        self.algorithm_identifier()
            .map(|id| x509::wrap_in_sequence(id.as_ref()))
    }

    /// How signatures made with this scheme are encoded, or `None` if the
    /// scheme is not known.
    pub fn format(&self) -> Option<SignatureFormat> {
        match self.canonical() {
            Self::RSA_PKCS1_SHA1
            | Self::RSA_PKCS1_SHA256
            | Self::RSA_PKCS1_SHA384
            | Self::RSA_PKCS1_SHA512
            | Self::RSA_PSS_SHA256
            | Self::RSA_PSS_SHA384
            | Self::RSA_PSS_SHA512 => Some(SignatureFormat::Ieee1363),

            Self::ECDSA_SHA1_Legacy
            | Self::ECDSA_NISTP256_SHA256
            | Self::ECDSA_NISTP384_SHA384
            | Self::ECDSA_NISTP521_SHA512
            | Self::ED25519
            | Self::ED448
            | Self::DSA_SHA1
            | Self::DSA_SHA256
            | Self::DSA_SHA384
            | Self::DSA_SHA512 => Some(SignatureFormat::DerSequence),

            Self::NONE | Self::Unknown(_) => None,
        }
    }

    /// Whether this scheme may be used for handshake signatures at `version`.
    ///
    /// SHA-1 schemes are refused at every version, including TLS1.2 where
    /// RFC5246 would still allow them.  RSA-PKCS1 schemes are refused from
    /// TLS1.3 onwards (RFC8446 section 4.4.3: "RSA signatures MUST use an
    /// RSASSA-PSS algorithm").  This does not consult
    /// [`Self::is_available()`].
    pub fn is_compatible_with(&self, version: ProtocolVersion) -> bool {
        if !self.is_set() {
            return false;
        }

        if self.hash_algorithm() == Some(HashAlgorithm::SHA1) {
            return false;
        }

        if !version.is_pre_tls13() && self.is_rsa_pkcs1() {
            return false;
        }

        true
    }

    /// Whether `key` can produce signatures under this scheme.
    ///
    /// The key's family must match [`Self::algorithm_name()`] and its length
    /// must exceed 250.  ECDSA keys must also match the curve implied by the
    /// hash: 250..=350 for SHA-256 (secp256r1), 350..=450 for SHA-384
    /// (secp384r1) and 450..=550 for SHA-512 (secp521r1).
    pub fn is_suitable_for<K: SigningKey + ?Sized>(&self, key: &K) -> bool {
        let Some(family) = self.algorithm().family_name() else {
            return false;
        };

        if family != key.algorithm_name() {
            return false;
        }

        let key_length = key.key_length();
        if key_length <= MIN_KEY_LENGTH {
            return false;
        }

        match self.ecdsa_key_lengths() {
            Some(lengths) => lengths.contains(&key_length),
            None => true,
        }
    }

    /// The schemes to put in our `signature_algorithms` for `version`:
    /// [`AVAILABLE_SCHEMES`] filtered by [`Self::is_compatible_with()`].
    pub fn offer(version: ProtocolVersion) -> Vec<Self> {
        AVAILABLE_SCHEMES
            .iter()
            .copied()
            .filter(|scheme| scheme.is_compatible_with(version))
            .collect()
    }

    fn is_rsa_pkcs1(&self) -> bool {
        matches!(
            self.canonical(),
            Self::RSA_PKCS1_SHA1
                | Self::RSA_PKCS1_SHA256
                | Self::RSA_PKCS1_SHA384
                | Self::RSA_PKCS1_SHA512
        )
    }

    fn ecdsa_key_lengths(&self) -> Option<RangeInclusive<usize>> {
        match self.canonical() {
            Self::ECDSA_NISTP256_SHA256 => Some(SECP256R1_KEY_LENGTHS),
            Self::ECDSA_NISTP384_SHA384 => Some(SECP384R1_KEY_LENGTHS),
            Self::ECDSA_NISTP521_SHA512 => Some(SECP521R1_KEY_LENGTHS),
            _ => None,
        }
    }
}

impl Default for SignatureScheme {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Unknown signature scheme: {}", u16::from(*self)),
        }
    }
}
