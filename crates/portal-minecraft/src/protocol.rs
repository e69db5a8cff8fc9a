//! Server List Ping wire primitives.
//!
//! The protocol frames every packet as `varint length | varint packet id |
//! payload`. VarInts are LEB128 over the 32-bit two's complement bits, at
//! most 5 bytes.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Upper bound accepted for a single packet (status JSON included)
const MAX_PACKET_LEN: i32 = 1024 * 1024;

/// Wire-level protocol errors
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("VarInt wider than 32 bits")]
    VarIntTooLong,

    #[error("Packet length {0} out of range")]
    InvalidLength(i32),

    #[error("String payload is not valid UTF-8")]
    InvalidString,
}

/// Read a VarInt from the stream
pub async fn read_varint<R: AsyncRead + Unpin>(reader: &mut R) -> Result<i32, ProtocolError> {
    let mut value: i32 = 0;
    let mut position = 0;
    loop {
        let byte = reader.read_u8().await?;
        value |= i32::from(byte & 0x7f) << position;
        if byte & 0x80 == 0 {
            return Ok(value);
        }
        position += 7;
        if position >= 32 {
            return Err(ProtocolError::VarIntTooLong);
        }
    }
}

/// Append a VarInt to a buffer
pub fn write_varint(buf: &mut Vec<u8>, value: i32) {
    let mut raw = value as u32;
    loop {
        let mut byte = (raw & 0x7f) as u8;
        raw >>= 7;
        if raw != 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if raw == 0 {
            return;
        }
    }
}

/// Append a length-prefixed UTF-8 string to a buffer
pub fn write_string(buf: &mut Vec<u8>, value: &str) {
    write_varint(buf, value.len() as i32);
    buf.extend_from_slice(value.as_bytes());
}

/// Write one framed packet: `len | id | payload`
pub async fn write_packet<W: AsyncWrite + Unpin>(
    writer: &mut W,
    packet_id: i32,
    payload: &[u8],
) -> Result<(), ProtocolError> {
    let mut body = Vec::with_capacity(payload.len() + 5);
    write_varint(&mut body, packet_id);
    body.extend_from_slice(payload);

    let mut frame = Vec::with_capacity(body.len() + 5);
    write_varint(&mut frame, body.len() as i32);
    frame.extend_from_slice(&body);

    writer.write_all(&frame).await?;
    writer.flush().await?;
    Ok(())
}

/// Read one framed packet, returning `(packet id, payload)`
pub async fn read_packet<R: AsyncRead + Unpin>(
    reader: &mut R,
) -> Result<(i32, Vec<u8>), ProtocolError> {
    let length = read_varint(reader).await?;
    if length <= 0 || length > MAX_PACKET_LEN {
        return Err(ProtocolError::InvalidLength(length));
    }

    let mut body = vec![0u8; length as usize];
    reader.read_exact(&mut body).await?;

    let mut cursor = body.as_slice();
    let packet_id = read_varint(&mut cursor).await?;
    Ok((packet_id, cursor.to_vec()))
}

/// Decode a length-prefixed UTF-8 string from a payload slice
pub fn read_string(payload: &[u8]) -> Result<String, ProtocolError> {
    let mut cursor = payload;
    let length = read_varint_sync(&mut cursor)?;
    if length < 0 || length as usize > cursor.len() {
        return Err(ProtocolError::InvalidLength(length));
    }
    String::from_utf8(cursor[..length as usize].to_vec()).map_err(|_| ProtocolError::InvalidString)
}

fn read_varint_sync(cursor: &mut &[u8]) -> Result<i32, ProtocolError> {
    let mut value: i32 = 0;
    let mut position = 0;
    loop {
        let (&byte, rest) = cursor.split_first().ok_or(ProtocolError::VarIntTooLong)?;
        *cursor = rest;
        value |= i32::from(byte & 0x7f) << position;
        if byte & 0x80 == 0 {
            return Ok(value);
        }
        position += 7;
        if position >= 32 {
            return Err(ProtocolError::VarIntTooLong);
        }
    }
}
