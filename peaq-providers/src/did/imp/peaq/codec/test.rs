use super::{decode_document, encode_document};
use crate::did::imp::peaq::error::{DecodeError, DecodeErrorKind};
use crate::did::model::{Document, Service, Signature, VerificationMethod, VerificationType};

const DID: &str = "did:peaq:5Df42mkztLtkksgQuLy4YV6hmhzdjYvDknoxHv1QBkaY12Pg";

fn document() -> Document {
    Document {
        id: DID.to_owned(),
        controller: DID.to_owned(),
        verification_methods: vec![
            VerificationMethod {
                id: format!("{DID}#keys-1"),
                r#type: VerificationType::Sr25519VerificationKey2020,
                controller: DID.to_owned(),
                public_key_multibase: "z5Df42mkztLtkksgQuLy4YV6hmhzdjYvDknoxHv1QBkaY12Pg"
                    .to_owned(),
            },
            VerificationMethod {
                id: format!("{DID}#keys-2"),
                r#type: VerificationType::Ed25519VerificationKey2020,
                controller: DID.to_owned(),
                public_key_multibase: "z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK"
                    .to_owned(),
            },
        ],
        signature: Some(Signature {
            r#type: "Sr25519VerificationKey2020".to_owned(),
            issuer: "5Df42mkztLtkksgQuLy4YV6hmhzdjYvDknoxHv1QBkaY12Pg".to_owned(),
            hash: "0x1234".to_owned(),
        }),
        services: vec![Service {
            id: "#ipfs".to_owned(),
            r#type: "peaqStorage".to_owned(),
            service_endpoint: "https://ipfs.io/ipfs/".to_owned(),
            data: "QmHash".to_owned(),
        }],
        authentications: vec![format!("{DID}#keys-1")],
    }
}

fn error(offset: usize, kind: DecodeErrorKind) -> Result<Document, DecodeError> {
    Err(DecodeError::new(offset, kind))
}

#[test]
fn test_round_trip() {
    let document = document();

    assert_eq!(decode_document(&encode_document(&document)), Ok(document));
}

#[test]
fn test_empty_input_is_default_document() {
    assert_eq!(decode_document(&[]), Ok(Document::default()));
    assert!(encode_document(&Document::default()).is_empty());
}

#[test]
fn test_signature_encoding() {
    let document = Document {
        signature: Some(Signature {
            r#type: "a".to_owned(),
            ..Default::default()
        }),
        ..Default::default()
    };

    assert_eq!(
        encode_document(&document),
        vec![0x22, 0x03, 0x0a, 0x01, b'a']
    );
}

#[test]
fn test_empty_signature_is_present() {
    let document = Document {
        signature: Some(Signature::default()),
        ..Default::default()
    };

    let encoded = encode_document(&document);

    assert_eq!(encoded, vec![0x22, 0x00]);
    assert_eq!(decode_document(&encoded), Ok(document));
}

#[test]
fn test_empty_authentication_entries_are_kept() {
    let document = Document {
        authentications: vec![String::new(), "a".to_owned()],
        ..Default::default()
    };

    let encoded = encode_document(&document);

    assert_eq!(encoded, vec![0x32, 0x00, 0x32, 0x01, b'a']);
    assert_eq!(decode_document(&encoded), Ok(document));
}

#[test]
fn test_last_occurrence_wins() {
    let decoded = decode_document(&[0x0a, 0x01, b'a', 0x0a, 0x01, b'b']).unwrap();

    assert_eq!(decoded.id, "b");
}

#[test]
fn test_unknown_fields_are_skipped() {
    let bytes = [
        // field 15, varint 150
        0x78, 0x96, 0x01, //
        // field 9, 64-bit
        0x49, 1, 2, 3, 4, 5, 6, 7, 8, //
        // field 10, 32-bit
        0x55, 1, 2, 3, 4, //
        // field 11, length-delimited
        0x5a, 0x02, b'x', b'y', //
        // field 1 "a"
        0x0a, 0x01, b'a',
    ];

    let decoded = decode_document(&bytes).unwrap();

    assert_eq!(
        decoded,
        Document {
            id: "a".to_owned(),
            ..Default::default()
        }
    );
}

#[test]
fn test_unknown_fields_in_nested_messages_are_skipped() {
    // verification method { field 9 varint 1, id "k" }
    let bytes = [0x1a, 0x05, 0x48, 0x01, 0x0a, 0x01, b'k'];

    let decoded = decode_document(&bytes).unwrap();

    assert_eq!(decoded.verification_methods.len(), 1);
    assert_eq!(decoded.verification_methods[0].id, "k");
}

#[test]
fn test_unknown_verification_type_is_preserved() {
    let document = Document {
        verification_methods: vec![VerificationMethod {
            r#type: VerificationType::Other("JsonWebKey2020".to_owned()),
            ..Default::default()
        }],
        ..Default::default()
    };

    let decoded = decode_document(&encode_document(&document)).unwrap();

    assert_eq!(
        decoded.verification_methods[0].r#type,
        VerificationType::Other("JsonWebKey2020".to_owned())
    );
    assert_eq!(
        decoded.verification_methods[0].r#type.as_str(),
        "JsonWebKey2020"
    );
}

#[test]
fn test_wire_type_mismatch() {
    // field 1 "a", then field 1 as varint
    assert_eq!(
        decode_document(&[0x0a, 0x01, b'a', 0x08, 0x01]),
        error(
            3,
            DecodeErrorKind::WireTypeMismatch {
                tag: 1,
                expected: 2,
                found: 0
            }
        )
    );
}

#[test]
fn test_nested_error_offset_is_absolute() {
    // verification method whose id is sent as varint
    assert_eq!(
        decode_document(&[0x1a, 0x02, 0x08, 0x01]),
        error(
            2,
            DecodeErrorKind::WireTypeMismatch {
                tag: 1,
                expected: 2,
                found: 0
            }
        )
    );
}

#[test]
fn test_invalid_utf8() {
    assert_eq!(
        decode_document(&[0x0a, 0x02, b'a', 0xff]),
        error(3, DecodeErrorKind::InvalidUtf8)
    );
}

#[test]
fn test_group_wire_type_is_rejected() {
    // field 7, start group
    assert_eq!(
        decode_document(&[0x3b, 0x3c]),
        error(0, DecodeErrorKind::GroupWireType)
    );
}

#[test]
fn test_length_beyond_input() {
    assert_eq!(
        decode_document(&[0x0a, 0x05, b'a']),
        error(1, DecodeErrorKind::LengthOutOfBounds)
    );
    // nested length larger than its parent
    assert_eq!(
        decode_document(&[0x1a, 0x03, 0x0a, 0x05, b'a']),
        error(3, DecodeErrorKind::LengthOutOfBounds)
    );
}

#[test]
fn test_truncated_key_and_varint() {
    assert_eq!(
        decode_document(&[0x80]),
        error(0, DecodeErrorKind::InvalidKey)
    );
    assert_eq!(
        decode_document(&[0x0a]),
        error(1, DecodeErrorKind::TruncatedVarint)
    );
    assert_eq!(
        decode_document(&[0x78, 0x96]),
        error(1, DecodeErrorKind::TruncatedVarint)
    );
}

#[test]
fn test_truncation_inside_last_field_fails() {
    let encoded = encode_document(&document());
    // last field: authentication key byte, length byte and payload
    let last_field_length = 2 + format!("{DID}#keys-1").len();

    for cut in 1..last_field_length {
        let result = decode_document(&encoded[..encoded.len() - cut]);

        assert!(result.is_err(), "cut {cut} decoded to {result:?}");
    }
}

#[test]
fn test_truncation_at_field_boundary_decodes_shorter_document() {
    let full = document();
    let encoded = encode_document(&full);
    // last field: authentication key byte, length byte and payload
    let last_field_length = 2 + format!("{DID}#keys-1").len();

    let decoded = decode_document(&encoded[..encoded.len() - last_field_length]).unwrap();

    assert_eq!(
        decoded,
        Document {
            authentications: vec![],
            ..full
        }
    );
}

#[test]
fn test_missing_verification_type_is_empty() {
    // verification method { id "k" }
    let decoded = decode_document(&[0x1a, 0x03, 0x0a, 0x01, b'k']).unwrap();

    assert_eq!(
        decoded.verification_methods[0].r#type,
        VerificationType::Other(String::new())
    );
    assert_eq!(decoded.verification_methods[0].r#type.as_str(), "");
}

#[test]
fn test_empty_verification_type_round_trip() {
    let document = Document {
        verification_methods: vec![VerificationMethod {
            id: "k".to_owned(),
            r#type: VerificationType::Other(String::new()),
            ..Default::default()
        }],
        ..Default::default()
    };

    let encoded = encode_document(&document);

    assert_eq!(encoded, vec![0x1a, 0x03, 0x0a, 0x01, b'k']);
    assert_eq!(decode_document(&encoded), Ok(document));
}

#[test]
fn test_known_verification_type_name_equals_variant() {
    assert_eq!(
        VerificationType::Other("Ed25519VerificationKey2020".to_owned()),
        VerificationType::Ed25519VerificationKey2020
    );
    assert_ne!(
        VerificationType::Other(String::new()),
        VerificationType::Ed25519VerificationKey2020
    );
    assert_eq!(
        VerificationType::from("Sr25519VerificationKey2020".to_owned()),
        VerificationType::Sr25519VerificationKey2020
    );
}
