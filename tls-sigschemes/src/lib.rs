//! # tls-sigschemes - the signature scheme table behind `signature_algorithms`
//!
//! This crate knows every signature scheme a TLS stack may see in the
//! `signature_algorithms` extension, and decides which of them are offered,
//! which are accepted, and which fit a given key and protocol version.
//!
//! For each [`SignatureScheme`] it derives:
//!
//! * the hash function name (`"Pure"` for EdDSA),
//! * the padding descriptor a signing engine understands,
//! * the public-key algorithm family,
//! * the X.509 `AlgorithmIdentifier` of keys used with it,
//! * the encoding of the raw signature bytes ([`SignatureFormat`]).
//!
//! Nothing here performs cryptography or parses handshake messages.  The
//! handshake layer owns the extension; this crate only answers questions
//! about the values inside it.
//!
//! ## Policy
//!
//! The default offer is [`AVAILABLE_SCHEMES`], in preference order.  SHA-1
//! based schemes are refused for *every* protocol version, including TLS1.2
//! where RFC5246 still permits them.  RSA-PKCS1 schemes are refused from
//! TLS1.3 onwards, following RFC8446 section 4.4.3.
//!
//! Derivations never fail: unrecognised wire codes report the
//! [`UNKNOWN_HASH`], [`UNKNOWN_PADDING`] and [`UNKNOWN_ALGORITHM`] sentinels
//! (or `None`).  Callers must check [`SignatureScheme::is_set()`] or
//! [`SignatureScheme::is_available()`] before trusting a value.
//!
//! ```
//! use tls_sigschemes::{ProtocolVersion, SignatureScheme};
//!
//! let scheme = SignatureScheme::from(0x0804);
//! assert_eq!(scheme, SignatureScheme::RSA_PSS_SHA256);
//! assert_eq!(scheme.padding_string(), "PSSR(SHA-256,MGF1,32)");
//! assert!(scheme.is_compatible_with(ProtocolVersion::TLSv1_3));
//! ```
//!
//! # Crate features
//!
//! - `logging`: this makes the crate depend on the `log` crate.  Scheme
//!   selection logs rejected candidates at `trace!` and its outcome at
//!   `debug!` level.  No key material is ever logged.  This feature is in the
//!   default set.
//!
//! - `std`: links the standard library.  Without it the crate is `no_std`
//!   and needs only `alloc`.  This feature is in the default set.

#![no_std]
#![forbid(unsafe_code, unused_must_use)]
#![warn(
    clippy::use_self,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_import_braces,
    unused_extern_crates,
    unused_qualifications
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

// log for logging (optional).
#[cfg(feature = "logging")]
#[allow(clippy::single_component_path_imports)]
use log;

#[cfg(not(feature = "logging"))]
mod log {
    macro_rules! trace    ( ($($tt:tt)*) => {{}} );
    macro_rules! debug    ( ($($tt:tt)*) => {{}} );
    pub(crate) use {debug, trace};
}

#[macro_use]
mod macros;

mod codec;
mod enums;
mod error;
mod scheme;
mod sign;
mod x509;

pub use crate::codec::{Codec, Reader};
pub use crate::enums::{HashAlgorithm, ProtocolVersion, SignatureAlgorithm};
pub use crate::error::{Error, InvalidMessage, PeerIncompatible};
pub use crate::scheme::{
    AVAILABLE_SCHEMES, SignatureFormat, SignatureScheme, UNKNOWN_ALGORITHM, UNKNOWN_HASH,
    UNKNOWN_PADDING,
};
pub use crate::sign::{SigningKey, select_scheme};
