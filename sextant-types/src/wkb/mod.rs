//! WKB (well-known binary) codec.
//!
//! Geometries are written as 2d OGC WKB in little-endian byte order. The reader accepts both byte orders, and every
//! nested geometry may use its own one. SRID is not a part of plain WKB and is never read or written here.

use bytes::{Buf, BufMut};

use crate::error::GeometryError;
use crate::geometry::MAX_NESTING_DEPTH;
use crate::geometry_type::GeometryType;
use crate::traits::{GeometryElement, GeometryValue};

const BIG_ENDIAN: u8 = 0;
const LITTLE_ENDIAN: u8 = 1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ByteOrder {
    BigEndian,
    LittleEndian,
}

/// Cursor over WKB bytes.
#[derive(Debug)]
pub struct WkbReader<'a> {
    buf: &'a [u8],
    byte_order: ByteOrder,
    depth: usize,
}

impl<'a> WkbReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            byte_order: ByteOrder::LittleEndian,
            depth: 0,
        }
    }

    fn ensure(&self, len: usize) -> Result<(), GeometryError> {
        if self.buf.remaining() < len {
            Err(GeometryError::MalformedWkb(format!(
                "unexpected end of input: {len} more byte(s) needed, {} left",
                self.buf.remaining()
            )))
        } else {
            Ok(())
        }
    }

    fn read_byte_order(&mut self) -> Result<ByteOrder, GeometryError> {
        self.ensure(1)?;
        match self.buf.get_u8() {
            BIG_ENDIAN => Ok(ByteOrder::BigEndian),
            LITTLE_ENDIAN => Ok(ByteOrder::LittleEndian),
            other => Err(GeometryError::MalformedWkb(format!(
                "invalid byte order marker {other}"
            ))),
        }
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32, GeometryError> {
        self.ensure(4)?;
        Ok(match self.byte_order {
            ByteOrder::BigEndian => self.buf.get_u32(),
            ByteOrder::LittleEndian => self.buf.get_u32_le(),
        })
    }

    pub(crate) fn read_f64(&mut self) -> Result<f64, GeometryError> {
        self.ensure(8)?;
        Ok(match self.byte_order {
            ByteOrder::BigEndian => self.buf.get_f64(),
            ByteOrder::LittleEndian => self.buf.get_f64_le(),
        })
    }

    /// Reads the number of items that follow.
    pub(crate) fn read_count(&mut self) -> Result<usize, GeometryError> {
        let count = self.read_u32()? as usize;
        // Every item takes at least four bytes.
        if count > self.buf.remaining() / 4 {
            return Err(GeometryError::MalformedWkb(format!(
                "{count} items declared, but only {} byte(s) left",
                self.buf.remaining()
            )));
        }

        Ok(count)
    }

    pub(crate) fn expect_type(
        &self,
        expected: GeometryType,
        found: GeometryType,
    ) -> Result<(), GeometryError> {
        if expected == found {
            Ok(())
        } else {
            Err(GeometryError::MalformedWkb(format!(
                "expected {expected}, got {found}"
            )))
        }
    }

    fn finish(&self) -> Result<(), GeometryError> {
        if self.buf.has_remaining() {
            Err(GeometryError::MalformedWkb(format!(
                "{} trailing byte(s)",
                self.buf.remaining()
            )))
        } else {
            Ok(())
        }
    }
}

pub(crate) fn write_geometry<G: GeometryValue>(geometry: &G, buf: &mut Vec<u8>) {
    buf.put_u8(LITTLE_ENDIAN);
    buf.put_u32_le(geometry.geometry_type().wkb_code());
    geometry.write_wkb_body(buf);
}

fn read_header_and_body<'a, T>(
    reader: &mut WkbReader<'a>,
    read_body: impl FnOnce(GeometryType, &mut WkbReader<'a>) -> Result<T, GeometryError>,
) -> Result<T, GeometryError> {
    let outer_byte_order = reader.byte_order;
    reader.byte_order = reader.read_byte_order()?;

    let code = reader.read_u32()?;
    let geometry_type = GeometryType::from_wkb_code(code).ok_or_else(|| {
        GeometryError::MalformedWkb(format!("unsupported geometry type code {code}"))
    })?;

    let geometry = read_body(geometry_type, reader);
    reader.byte_order = outer_byte_order;

    geometry
}

pub(crate) fn read_geometry<G: GeometryValue>(
    reader: &mut WkbReader<'_>,
) -> Result<G, GeometryError> {
    read_header_and_body(reader, G::read_wkb_body)
}

/// Reads a member of a multi geometry or a collection, one nesting level deeper than its parent.
pub(crate) fn read_member<G: GeometryElement>(
    reader: &mut WkbReader<'_>,
) -> Result<G, GeometryError> {
    if reader.depth >= MAX_NESTING_DEPTH {
        return Err(GeometryError::MalformedWkb(format!(
            "more than {MAX_NESTING_DEPTH} levels of nested geometries"
        )));
    }

    reader.depth += 1;
    let member = read_header_and_body(reader, G::read_wkb_member);
    reader.depth -= 1;

    member
}

pub(crate) fn to_wkb<G: GeometryValue>(geometry: &G) -> Vec<u8> {
    let mut buf = Vec::new();
    write_geometry(geometry, &mut buf);
    buf
}

pub(crate) fn from_wkb<G: GeometryValue>(wkb: &[u8]) -> Result<G, GeometryError> {
    let mut reader = WkbReader::new(wkb);
    let geometry = read_geometry(&mut reader)
        .and_then(|geometry| reader.finish().map(|()| geometry))
        .inspect_err(|err| log::debug!("Failed to read {} WKB bytes: {err}", wkb.len()))?;

    Ok(geometry)
}
