// AlgorithmIdentifier values beyond those provided by pki-types, and the
// DER framing to embed one in a certificate or signature structure.

use alloc::vec::Vec;

use pki_types::AlgorithmIdentifier;

/// `id-dsa` (1.2.840.10040.4.1) with absent parameters.
pub(crate) const DSA: AlgorithmIdentifier =
    AlgorithmIdentifier::from_slice(&[0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x38, 0x04, 0x01]);

/// `id-ecPublicKey` (1.2.840.10045.2.1) with absent parameters.
///
/// Used where a scheme fixes no curve.
pub(crate) const ECDSA_ANY_CURVE: AlgorithmIdentifier =
    AlgorithmIdentifier::from_slice(&[0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01]);

/// `id-Ed448` (1.3.101.113), parameters absent per RFC8410.
pub(crate) const ED448: AlgorithmIdentifier =
    AlgorithmIdentifier::from_slice(&[0x06, 0x03, 0x2b, 0x65, 0x71]);

/// Prepend stuff to `bytes` to put it in a DER SEQUENCE.
pub(crate) fn wrap_in_sequence(bytes: &[u8]) -> Vec<u8> {
    asn1_wrap(DER_SEQUENCE_TAG, bytes)
}

fn asn1_wrap(tag: u8, bytes: &[u8]) -> Vec<u8> {
    let len = bytes.len();

    if len <= 0x7f {
        // Short form
        let mut ret = Vec::with_capacity(2 + len);
        ret.push(tag);
        ret.push(len as u8);
        ret.extend_from_slice(bytes);
        ret
    } else {
        // Long form
        let size = len.to_be_bytes();
        let leading_zero_bytes = size
            .iter()
            .position(|&x| x != 0)
            .unwrap_or(size.len());
        let encoded_bytes = size.len() - leading_zero_bytes;

        let mut ret = Vec::with_capacity(2 + encoded_bytes + len);
        ret.push(tag);
        ret.push(0x80 + encoded_bytes as u8);
        ret.extend_from_slice(&size[leading_zero_bytes..]);
        ret.extend_from_slice(bytes);
        ret
    }
}

const DER_SEQUENCE_TAG: u8 = 0x30;

#[cfg(test)]
mod tests {
    use std::vec;

    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(vec![0x30, 0x00], wrap_in_sequence(&[]));
    }

    #[test]
    fn test_small() {
        assert_eq!(
            vec![0x30, 0x04, 0x00, 0x11, 0x22, 0x33],
            wrap_in_sequence(&[0x00, 0x11, 0x22, 0x33])
        );
    }

    #[test]
    fn test_long_form() {
        let val = vec![0x12; 0x1234];
        let result = wrap_in_sequence(&val);
        assert_eq!(vec![0x30, 0x82, 0x12, 0x34, 0x12, 0x12], result[..6]);
        assert_eq!(result.len(), 0x1234 + 4);
    }

    #[test]
    fn test_local_identifiers() {
        assert_eq!(
            wrap_in_sequence(ED448.as_ref()),
            vec![0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x71]
        );
        // both share the 1.2.840 arc
        assert_eq!(DSA.as_ref()[..5], ECDSA_ANY_CURVE.as_ref()[..5]);
        assert_ne!(DSA.as_ref(), ECDSA_ANY_CURVE.as_ref());
    }
}
