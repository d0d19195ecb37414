use core::fmt::Debug;

use crate::enums::ProtocolVersion;
use crate::error::{Error, PeerIncompatible};
use crate::log::{debug, trace};
use crate::scheme::{AVAILABLE_SCHEMES, SignatureScheme};

/// What the scheme table needs to know about a private key.
///
/// The signing itself happens elsewhere; only the key's algorithm family
/// and its length are consulted.
pub trait SigningKey: Debug + Send + Sync {
    /// The key's algorithm family, as reported by
    /// [`SignatureScheme::algorithm_name()`]: `"RSA"`, `"ECDSA"`,
    /// `"Ed25519"`, `"Ed448"` or `"DSA"`.
    fn algorithm_name(&self) -> &str;

    /// The key's length in the key's own unit: the modulus size in bits for
    /// RSA and DSA, the group order size in bits for ECDSA, 255 or 448 for
    /// EdDSA.
    fn key_length(&self) -> usize;

    /// Choose a `SignatureScheme` from those `offered` by the peer.
    ///
    /// Our own preference order ([`AVAILABLE_SCHEMES`]) decides between
    /// candidates; see [`select_scheme()`].
    fn choose_scheme(
        &self,
        offered: &[SignatureScheme],
        version: ProtocolVersion,
    ) -> Result<SignatureScheme, Error> {
        select_scheme(AVAILABLE_SCHEMES, offered, self, version)
    }
}

/// Pick the first scheme in `preferences` that the peer `offered`, that is
/// known, usable at `version` and suitable for `key`.
///
/// `preferences` is expected to hold each scheme once, like
/// [`AVAILABLE_SCHEMES`]; a repeated entry is just checked again.
///
/// Fails with [`PeerIncompatible::SignatureAlgorithmsExtensionRequired`] if
/// `offered` is empty and [`PeerIncompatible::NoSignatureSchemesInCommon`] if
/// nothing qualifies.
pub fn select_scheme<K: SigningKey + ?Sized>(
    preferences: &[SignatureScheme],
    offered: &[SignatureScheme],
    key: &K,
    version: ProtocolVersion,
) -> Result<SignatureScheme, Error> {
    if offered.is_empty() {
        debug!("Peer offered no signature schemes");
        return Err(PeerIncompatible::SignatureAlgorithmsExtensionRequired.into());
    }

    for scheme in preferences {
        if !offered.contains(scheme) {
            continue;
        }

        if !scheme.is_known() {
            trace!("Skipping unrecognised {scheme:?}");
            continue;
        }

        if !scheme.is_compatible_with(version) {
            trace!("Skipping {scheme:?}: not permitted in {version:?}");
            continue;
        }

        if !scheme.is_suitable_for(key) {
            trace!(
                "Skipping {scheme:?}: unsuitable for {} key of length {}",
                key.algorithm_name(),
                key.key_length()
            );
            continue;
        }

        debug!("Chose {scheme:?} for {version:?}");
        return Ok(*scheme);
    }

    debug!(
        "No signature scheme in common for {} key of length {}: offered {offered:?}",
        key.algorithm_name(),
        key.key_length()
    );
    Err(Error::from(PeerIncompatible::NoSignatureSchemesInCommon))
}
