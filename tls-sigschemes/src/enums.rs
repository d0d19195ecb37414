#![expect(missing_docs)]
//! TLS wire enums consumed by the signature scheme table.

use crate::codec::{Codec, Reader};

enum_builder! {
    /// The `ProtocolVersion` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u16)]
    pub enum ProtocolVersion {
        SSLv2 => 0x0002,
        SSLv3 => 0x0300,
        TLSv1_0 => 0x0301,
        TLSv1_1 => 0x0302,
        TLSv1_2 => 0x0303,
        TLSv1_3 => 0x0304,
        DTLSv1_0 => 0xFEFF,
        DTLSv1_2 => 0xFEFD,
        DTLSv1_3 => 0xFEFC,
    }
}

impl ProtocolVersion {
    /// The major version byte: 3 for TLS and SSLv3, 0xfe for DTLS.
    pub fn major(self) -> u8 {
        self.to_array()[0]
    }

    /// The minor version byte.
    pub fn minor(self) -> u8 {
        self.to_array()[1]
    }

    /// Whether this is a DTLS version.
    pub fn is_datagram(self) -> bool {
        self.major() == DTLS_MAJOR
    }

    /// Whether this version predates TLS1.3 (or DTLS1.3).
    ///
    /// DTLS minor numbers count down from 0xff, so DTLS1.2 (0xfefd) is older
    /// than DTLS1.3 (0xfefc).  Unrecognised values are classified by the same
    /// arithmetic.
    pub fn is_pre_tls13(self) -> bool {
        match self.is_datagram() {
            true => self.minor() >= DTLS12_MINOR,
            false => u16::from(self) < u16::from(Self::TLSv1_3),
        }
    }
}

const DTLS_MAJOR: u8 = 0xfe;
const DTLS12_MINOR: u8 = 0xfd;

enum_builder! {
    /// The `HashAlgorithm` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u8)]
    pub enum HashAlgorithm {
        NONE => 0x00,
        MD5 => 0x01,
        SHA1 => 0x02,
        SHA224 => 0x03,
        SHA256 => 0x04,
        SHA384 => 0x05,
        SHA512 => 0x06,
    }
}

impl HashAlgorithm {
    /// The conventional name of this hash, or `None` if it has none here.
    pub fn name(&self) -> Option<&'static str> {
        match self.canonical() {
            Self::MD5 => Some("MD5"),
            Self::SHA1 => Some("SHA-1"),
            Self::SHA224 => Some("SHA-224"),
            Self::SHA256 => Some("SHA-256"),
            Self::SHA384 => Some("SHA-384"),
            Self::SHA512 => Some("SHA-512"),
            Self::NONE | Self::Unknown(_) => None,
        }
    }

    /// Digest length in bytes, which is also the RSA-PSS salt length used
    /// with this hash.
    pub fn output_len(&self) -> Option<usize> {
        match self.canonical() {
            Self::MD5 => Some(16),
            Self::SHA1 => Some(20),
            Self::SHA224 => Some(28),
            Self::SHA256 => Some(32),
            Self::SHA384 => Some(48),
            Self::SHA512 => Some(64),
            Self::NONE | Self::Unknown(_) => None,
        }
    }
}

enum_builder! {
    /// The `SignatureAlgorithm` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u8)]
    pub enum SignatureAlgorithm {
        Anonymous => 0x00,
        RSA => 0x01,
        DSA => 0x02,
        ECDSA => 0x03,
        ED25519 => 0x07,
        ED448 => 0x08,
    }
}

impl SignatureAlgorithm {
    /// The algorithm family name a private key of this type reports.
    pub fn family_name(&self) -> Option<&'static str> {
        match self.canonical() {
            Self::RSA => Some("RSA"),
            Self::DSA => Some("DSA"),
            Self::ECDSA => Some("ECDSA"),
            Self::ED25519 => Some("Ed25519"),
            Self::ED448 => Some("Ed448"),
            Self::Anonymous | Self::Unknown(_) => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    // These tests are intended to provide coverage and
    // check panic-safety of relatively unused values.

    use std::prelude::v1::*;

    use super::*;

    #[test]
    fn test_enums() {
        test_enum16::<ProtocolVersion>(ProtocolVersion::TLSv1_0, ProtocolVersion::TLSv1_3);
        test_enum8::<HashAlgorithm>(HashAlgorithm::NONE, HashAlgorithm::SHA512);
        test_enum8::<SignatureAlgorithm>(SignatureAlgorithm::Anonymous, SignatureAlgorithm::ED448);
    }

    #[test]
    fn pre_tls13_versions() {
        for version in [
            ProtocolVersion::SSLv2,
            ProtocolVersion::SSLv3,
            ProtocolVersion::TLSv1_0,
            ProtocolVersion::TLSv1_1,
            ProtocolVersion::TLSv1_2,
            ProtocolVersion::DTLSv1_0,
            ProtocolVersion::DTLSv1_2,
        ] {
            assert!(version.is_pre_tls13(), "{version:?}");
        }

        assert!(!ProtocolVersion::TLSv1_3.is_pre_tls13());
        assert!(!ProtocolVersion::DTLSv1_3.is_pre_tls13());
        // hypothetical successors
        assert!(!ProtocolVersion::from(0x0305).is_pre_tls13());
        assert!(!ProtocolVersion::from(0xfefb).is_pre_tls13());
    }

    #[test]
    fn version_bytes() {
        assert_eq!(ProtocolVersion::TLSv1_2.major(), 3);
        assert_eq!(ProtocolVersion::TLSv1_2.minor(), 3);
        assert!(!ProtocolVersion::TLSv1_3.is_datagram());
        assert!(ProtocolVersion::DTLSv1_2.is_datagram());
        assert_eq!(ProtocolVersion::DTLSv1_3.minor(), 0xfc);
    }

    #[test]
    fn hash_names() {
        assert_eq!(HashAlgorithm::SHA1.name(), Some("SHA-1"));
        assert_eq!(HashAlgorithm::SHA384.name(), Some("SHA-384"));
        assert_eq!(HashAlgorithm::NONE.name(), None);
        assert_eq!(HashAlgorithm::from(0x42).name(), None);
        assert_eq!(HashAlgorithm::Unknown(0x02).name(), Some("SHA-1"));
        assert_eq!(HashAlgorithm::Unknown(0x02), HashAlgorithm::SHA1);
        assert_eq!(HashAlgorithm::SHA512.output_len(), Some(64));
    }

    #[test]
    fn family_names() {
        assert_eq!(SignatureAlgorithm::ED25519.family_name(), Some("Ed25519"));
        assert_eq!(SignatureAlgorithm::Anonymous.family_name(), None);
        assert_eq!(SignatureAlgorithm::from(0x40).family_name(), None);
    }

    pub(crate) fn test_enum8<T: for<'a> Codec<'a>>(first: T, last: T) {
        let first_v = get8(&first);
        let last_v = get8(&last);

        for val in first_v..last_v + 1 {
            let mut buf = Vec::new();
            val.encode(&mut buf);
            assert_eq!(buf.len(), 1);

            let t = T::read_bytes(&buf).unwrap();
            assert_eq!(val, get8(&t));
        }
    }

    pub(crate) fn test_enum16<T: for<'a> Codec<'a>>(first: T, last: T) {
        let first_v = get16(&first);
        let last_v = get16(&last);

        for val in first_v..last_v + 1 {
            let mut buf = Vec::new();
            val.encode(&mut buf);
            assert_eq!(buf.len(), 2);

            let t = T::read_bytes(&buf).unwrap();
            assert_eq!(val, get16(&t));
        }
    }

    fn get8<T: for<'a> Codec<'a>>(enum_value: &T) -> u8 {
        let enc = enum_value.get_encoding();
        assert_eq!(enc.len(), 1);
        enc[0]
    }

    fn get16<T: for<'a> Codec<'a>>(enum_value: &T) -> u16 {
        let enc = enum_value.get_encoding();
        assert_eq!(enc.len(), 2);
        u16::from_be_bytes([enc[0], enc[1]])
    }
}
