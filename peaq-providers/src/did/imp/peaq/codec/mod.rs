//! Binary codec for DID documents stored as attribute values.
//!
//! Documents use the protocol buffers wire format with proto3 semantics:
//!
//! ```text
//! Document            1 id  2 controller  3 verificationMethods*  4 signature?
//!                     5 services*  6 authentications*
//! VerificationMethod  1 id  2 type  3 controller  4 publicKeyMultibase
//! Service             1 id  2 type  3 serviceEndpoint  4 data
//! Signature           1 type  2 issuer  3 hash
//! ```
//!
//! Unknown fields are skipped. Decoding is all-or-nothing and every error
//! carries the absolute offset within the encoded document.

use prost::encoding::{decode_key, decode_varint, encode_key, encode_varint, WireType};

use super::error::{DecodeError, DecodeErrorKind};
use crate::did::model::{Document, Service, Signature, VerificationMethod};

#[cfg(test)]
mod test;

pub fn decode_document(bytes: &[u8]) -> Result<Document, DecodeError> {
    decode_message(FieldReader::new(bytes))
}

pub fn encode_document(document: &Document) -> Vec<u8> {
    let mut buf = Vec::new();
    document.encode_fields(&mut buf);
    buf
}

trait Message: Default {
    fn merge_field(
        &mut self,
        key: FieldKey,
        reader: &mut FieldReader<'_>,
    ) -> Result<(), DecodeError>;

    fn encode_fields(&self, buf: &mut Vec<u8>);
}

fn decode_message<M: Message>(reader: FieldReader<'_>) -> Result<M, DecodeError> {
    let mut message = M::default();
    merge_into(&mut message, reader)?;
    Ok(message)
}

fn merge_into<M: Message>(message: &mut M, mut reader: FieldReader<'_>) -> Result<(), DecodeError> {
    while !reader.is_empty() {
        let key = reader.read_key()?;
        message.merge_field(key, &mut reader)?;
    }
    Ok(())
}

impl Message for Document {
    fn merge_field(
        &mut self,
        key: FieldKey,
        reader: &mut FieldReader<'_>,
    ) -> Result<(), DecodeError> {
        match key.tag {
            1 => self.id = reader.read_string(key)?,
            2 => self.controller = reader.read_string(key)?,
            3 => self
                .verification_methods
                .push(decode_message(reader.read_nested(key)?)?),
            4 => {
                let nested = reader.read_nested(key)?;
                // repeated occurrences of a singular message are merged
                let mut signature = self.signature.take().unwrap_or_default();
                merge_into(&mut signature, nested)?;
                self.signature = Some(signature);
            }
            5 => self.services.push(decode_message(reader.read_nested(key)?)?),
            6 => self.authentications.push(reader.read_string(key)?),
            _ => reader.skip(key)?,
        }
        Ok(())
    }

    fn encode_fields(&self, buf: &mut Vec<u8>) {
        encode_string(1, &self.id, buf);
        encode_string(2, &self.controller, buf);
        for method in &self.verification_methods {
            encode_nested(3, method, buf);
        }
        if let Some(signature) = &self.signature {
            encode_nested(4, signature, buf);
        }
        for service in &self.services {
            encode_nested(5, service, buf);
        }
        for authentication in &self.authentications {
            encode_length_delimited(6, authentication.as_bytes(), buf);
        }
    }
}

impl Message for VerificationMethod {
    fn merge_field(
        &mut self,
        key: FieldKey,
        reader: &mut FieldReader<'_>,
    ) -> Result<(), DecodeError> {
        match key.tag {
            1 => self.id = reader.read_string(key)?,
            2 => self.r#type = reader.read_string(key)?.into(),
            3 => self.controller = reader.read_string(key)?,
            4 => self.public_key_multibase = reader.read_string(key)?,
            _ => reader.skip(key)?,
        }
        Ok(())
    }

    fn encode_fields(&self, buf: &mut Vec<u8>) {
        encode_string(1, &self.id, buf);
        encode_string(2, self.r#type.as_str(), buf);
        encode_string(3, &self.controller, buf);
        encode_string(4, &self.public_key_multibase, buf);
    }
}

impl Message for Service {
    fn merge_field(
        &mut self,
        key: FieldKey,
        reader: &mut FieldReader<'_>,
    ) -> Result<(), DecodeError> {
        match key.tag {
            1 => self.id = reader.read_string(key)?,
            2 => self.r#type = reader.read_string(key)?,
            3 => self.service_endpoint = reader.read_string(key)?,
            4 => self.data = reader.read_string(key)?,
            _ => reader.skip(key)?,
        }
        Ok(())
    }

    fn encode_fields(&self, buf: &mut Vec<u8>) {
        encode_string(1, &self.id, buf);
        encode_string(2, &self.r#type, buf);
        encode_string(3, &self.service_endpoint, buf);
        encode_string(4, &self.data, buf);
    }
}

impl Message for Signature {
    fn merge_field(
        &mut self,
        key: FieldKey,
        reader: &mut FieldReader<'_>,
    ) -> Result<(), DecodeError> {
        match key.tag {
            1 => self.r#type = reader.read_string(key)?,
            2 => self.issuer = reader.read_string(key)?,
            3 => self.hash = reader.read_string(key)?,
            _ => reader.skip(key)?,
        }
        Ok(())
    }

    fn encode_fields(&self, buf: &mut Vec<u8>) {
        encode_string(1, &self.r#type, buf);
        encode_string(2, &self.issuer, buf);
        encode_string(3, &self.hash, buf);
    }
}

fn encode_string(tag: u32, value: &str, buf: &mut Vec<u8>) {
    if !value.is_empty() {
        encode_length_delimited(tag, value.as_bytes(), buf);
    }
}

fn encode_nested<M: Message>(tag: u32, message: &M, buf: &mut Vec<u8>) {
    let mut nested = Vec::new();
    message.encode_fields(&mut nested);
    encode_length_delimited(tag, &nested, buf);
}

fn encode_length_delimited(tag: u32, value: &[u8], buf: &mut Vec<u8>) {
    encode_key(tag, WireType::LengthDelimited, buf);
    encode_varint(value.len() as u64, buf);
    buf.extend_from_slice(value);
}

#[derive(Clone, Copy, Debug)]
struct FieldKey {
    tag: u32,
    wire_type: WireType,
    /// Offset of the first byte of the key.
    offset: usize,
}

impl FieldKey {
    fn expect(self, wire_type: WireType) -> Result<(), DecodeError> {
        if self.wire_type == wire_type {
            return Ok(());
        }

        Err(DecodeError::new(
            self.offset,
            DecodeErrorKind::WireTypeMismatch {
                tag: self.tag,
                expected: wire_type as u8,
                found: self.wire_type as u8,
            },
        ))
    }
}

/// Cursor over one message within the top-level buffer.
///
/// Positions are absolute so nested messages report offsets relative to the
/// start of the whole document.
struct FieldReader<'a> {
    data: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> FieldReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            end: data.len(),
        }
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.end
    }

    fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..self.end]
    }

    fn read_key(&mut self) -> Result<FieldKey, DecodeError> {
        let offset = self.pos;
        let mut buf = self.remaining();
        let (tag, wire_type) = decode_key(&mut buf)
            .map_err(|_| DecodeError::new(offset, DecodeErrorKind::InvalidKey))?;
        self.pos = self.end - buf.len();

        Ok(FieldKey {
            tag,
            wire_type,
            offset,
        })
    }

    fn read_varint(&mut self) -> Result<u64, DecodeError> {
        let offset = self.pos;
        let mut buf = self.remaining();
        let value = decode_varint(&mut buf)
            .map_err(|_| DecodeError::new(offset, DecodeErrorKind::TruncatedVarint))?;
        self.pos = self.end - buf.len();

        Ok(value)
    }

    fn advance(&mut self, length: usize) -> Result<(), DecodeError> {
        if self.end - self.pos < length {
            return Err(DecodeError::new(
                self.pos,
                DecodeErrorKind::LengthOutOfBounds,
            ));
        }
        self.pos += length;
        Ok(())
    }

    /// Reads a length prefix and returns a reader limited to the payload.
    fn read_length_delimited(&mut self) -> Result<FieldReader<'a>, DecodeError> {
        let length_offset = self.pos;
        let length = self.read_varint()?;
        let start = self.pos;
        let length = usize::try_from(length)
            .ok()
            .filter(|length| *length <= self.end - start)
            .ok_or(DecodeError::new(
                length_offset,
                DecodeErrorKind::LengthOutOfBounds,
            ))?;
        self.pos += length;

        Ok(FieldReader {
            data: self.data,
            pos: start,
            end: start + length,
        })
    }

    fn read_nested(&mut self, key: FieldKey) -> Result<FieldReader<'a>, DecodeError> {
        key.expect(WireType::LengthDelimited)?;
        self.read_length_delimited()
    }

    fn read_string(&mut self, key: FieldKey) -> Result<String, DecodeError> {
        let field = self.read_nested(key)?;
        std::str::from_utf8(field.remaining())
            .map(str::to_owned)
            .map_err(|e| {
                DecodeError::new(field.pos + e.valid_up_to(), DecodeErrorKind::InvalidUtf8)
            })
    }

    fn skip(&mut self, key: FieldKey) -> Result<(), DecodeError> {
        match key.wire_type {
            WireType::Varint => self.read_varint().map(drop),
            WireType::SixtyFourBit => self.advance(8),
            WireType::LengthDelimited => self.read_length_delimited().map(drop),
            WireType::ThirtyTwoBit => self.advance(4),
            WireType::StartGroup | WireType::EndGroup => Err(DecodeError::new(
                key.offset,
                DecodeErrorKind::GroupWireType,
            )),
        }
    }
}
