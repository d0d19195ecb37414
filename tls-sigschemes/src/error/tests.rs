use std::{format, println, vec};

use super::{Error, InvalidMessage, PeerIncompatible};

#[test]
fn smoke() {
    let all = vec![
        Error::InvalidMessage(InvalidMessage::MissingData("SignatureScheme")),
        Error::InvalidMessage(InvalidMessage::TrailingData("SignatureScheme")),
        Error::PeerIncompatible(PeerIncompatible::NoSignatureSchemesInCommon),
        Error::PeerIncompatible(PeerIncompatible::SignatureAlgorithmsExtensionRequired),
    ];

    for err in all {
        println!("{err:?}:");
        println!("  fmt '{err}'");
    }
}

#[test]
fn conversions() {
    assert_eq!(
        Error::from(InvalidMessage::TrailingData("u16")),
        Error::InvalidMessage(InvalidMessage::TrailingData("u16"))
    );
    assert_eq!(
        Error::from(PeerIncompatible::NoSignatureSchemesInCommon),
        Error::PeerIncompatible(PeerIncompatible::NoSignatureSchemesInCommon)
    );
}

#[test]
fn display_names_the_reason() {
    let err = Error::from(PeerIncompatible::NoSignatureSchemesInCommon);
    assert_eq!(
        format!("{err}"),
        "peer is incompatible: NoSignatureSchemesInCommon"
    );

    let err = Error::from(InvalidMessage::MissingData("SignatureScheme"));
    assert_eq!(
        format!("{err}"),
        "received corrupt message of type MissingData(\"SignatureScheme\")"
    );
}
