//! Error types used throughout this crate.
//!
//! Scheme derivations and predicates never fail; only decoding a wire
//! value and choosing a scheme for a peer can.

use core::fmt;

#[cfg(test)]
mod tests;

/// The errors this crate reports.
#[non_exhaustive]
#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    /// A wire value could not be decoded.
    InvalidMessage(InvalidMessage),

    /// The peer doesn't support something we require.
    /// The parameter says what.
    PeerIncompatible(PeerIncompatible),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMessage(typ) => {
                write!(f, "received corrupt message of type {typ:?}")
            }
            Self::PeerIncompatible(why) => write!(f, "peer is incompatible: {why:?}"),
        }
    }
}

impl From<InvalidMessage> for Error {
    #[inline]
    fn from(e: InvalidMessage) -> Self {
        Self::InvalidMessage(e)
    }
}

impl From<PeerIncompatible> for Error {
    #[inline]
    fn from(e: PeerIncompatible) -> Self {
        Self::PeerIncompatible(e)
    }
}

impl core::error::Error for Error {}

/// A corrupt wire value.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMessage {
    /// Missing data for the named value
    MissingData(&'static str),
    /// Trailing data found after the named value
    TrailingData(&'static str),
}

/// The peer's offer left nothing we could use.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeerIncompatible {
    /// None of the peer's `signature_algorithms` is acceptable for our key
    /// at the negotiated version.
    NoSignatureSchemesInCommon,
    /// The peer sent an empty `signature_algorithms` list.
    SignatureAlgorithmsExtensionRequired,
}
