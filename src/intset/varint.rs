//! Беззнаковые целые переменной длины (LEB128).
//!
//! Экономит место для маленьких чисел:
//! - 0-127: 1 байт
//! - 128-16383: 2 байта
//! - до u64::MAX: 10 байт максимум

use std::io::{self, Read, Write};

use intsets_error::{FormatError, IntSetResult, ResultExt};

/// Максимальное кол-во байт для u64 в varint encoding.
pub const MAX_VARINT_LEN: usize = 10;

/// Записывает `value` в varint формате. Возвращает кол-во записанных байт.
///
/// # Формат
/// - Каждый байт: 7 бит данных + 1 бит continuation
/// - MSB=1: есть ещё байты
/// - MSB=0: последний байт
///
/// # Examples
/// ```
/// use intsets::intset::varint::write_uvarint;
///
/// let mut buf = Vec::new();
/// write_uvarint(&mut buf, 300).unwrap();
/// assert_eq!(buf, vec![0xAC, 0x02]);
/// ```
pub fn write_uvarint<W: Write>(
    w: &mut W,
    value: u64,
) -> IntSetResult<usize> {
    let mut buf = [0u8; MAX_VARINT_LEN];
    let n = put_uvarint(&mut buf, value);
    w.write_all(&buf[..n])
        .context("Failed to write varint")?;
    Ok(n)
}

/// Кодирует `value` в начало `buf`, возвращает длину.
pub fn put_uvarint(
    buf: &mut [u8; MAX_VARINT_LEN],
    mut value: u64,
) -> usize {
    let mut i = 0;
    while value >= 0x80 {
        buf[i] = (value as u8) | 0x80; // Continuation bit
        value >>= 7;
        i += 1;
    }
    buf[i] = value as u8;
    i + 1
}

/// Читает varint. Возвращает значение и кол-во прочитанных байт.
///
/// `offset` задаёт смещение первого байта от начала закодированных данных,
/// `what` описывает читаемое значение. Оба попадают в текст ошибки.
///
/// # Errors
/// - [`FormatError::UnexpectedEof`], если поток кончился посреди значения;
/// - [`FormatError::Malformed`], если varint длиннее 10 байт или не
///   помещается в `u64`;
/// - ошибки reader'а передаются как есть.
pub fn read_uvarint<R: Read>(
    r: &mut R,
    offset: u64,
    what: &str,
) -> IntSetResult<(u64, usize)> {
    let mut result: u64 = 0;
    let mut shift = 0u32;

    for i in 0..MAX_VARINT_LEN {
        let mut byte = [0u8; 1];
        if let Err(e) = r.read_exact(&mut byte) {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                return Err(FormatError::unexpected_eof(what, offset + i as u64).into());
            }
            return Err(e.into());
        }

        let byte = byte[0];
        if byte < 0x80 {
            // Десятый байт может нести только один старший бит u64.
            if i == MAX_VARINT_LEN - 1 && byte > 1 {
                return Err(FormatError::malformed(
                    format!("{what}: varint overflows u64"),
                    offset + i as u64,
                )
                .into());
            }
            return Ok((result | (u64::from(byte) << shift), i + 1));
        }
        result |= u64::from(byte & 0x7F) << shift;
        shift += 7;
    }

    Err(FormatError::malformed(
        format!("{what}: varint too long (>{MAX_VARINT_LEN} bytes)"),
        offset,
    )
    .into())
}

/// Размер varint для числа (без записи).
pub fn uvarint_size(value: u64) -> usize {
    let bits = u64::BITS - (value | 1).leading_zeros();
    bits.div_ceil(7) as usize
}
