//! Байтовое представление [`FastIntSet`].
//!
//! Два варианта раскладки, оба на unsigned varint:
//!
//! ```text
//! все элементы в [0, 64):  0x00 | uvarint(word)
//! иначе:                   uvarint(len) | uvarint(e1) | ... | uvarint(eN)   (e1 < e2 < ...)
//! ```
//!
//! Пустое множество кодируется первым вариантом (`00 00`). Отрицательные
//! элементы не кодируются.

use std::{
    hash::Hasher,
    io::{self, Read, Write},
};

use base64::{engine::general_purpose::STANDARD, write::EncoderStringWriter};
use intsets_error::{FormatError, IntSetResult};
use tracing::{debug, trace};

use super::{
    varint::{read_uvarint, write_uvarint},
    FastIntSet,
};

/// Ограничения декодера.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Максимальное заявленное кол-во элементов в списочной раскладке.
    pub max_elements: u64,
}

/// Writer, который дублирует записанные байты в хешер.
struct HashingWriter<'a, W, H> {
    inner: &'a mut W,
    hasher: &'a mut H,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl DecodeLimits {
    pub const fn new(max_elements: u64) -> Self {
        Self { max_elements }
    }
}

impl FastIntSet {
    /// Записывает множество в `w`.
    ///
    /// Результат детерминирован: равные множества дают одинаковые байты.
    ///
    /// # Errors
    /// - [`FormatError::NegativeMember`], если во множестве есть отрицательный
    ///   элемент (ничего не записывается);
    /// - ошибки `w` передаются без изменений.
    pub fn encode<W: Write>(
        &self,
        w: &mut W,
    ) -> IntSetResult<()> {
        if let Some(value) = self.first_negative() {
            debug!(value, "refusing to encode negative member");
            return Err(FormatError::NegativeMember { value }.into());
        }

        if self.overflow.is_empty() && self.dense.word(1) == 0 {
            trace!(layout = "bitmap", len = self.len(), "encoding set");
            write_uvarint(w, 0)?;
            write_uvarint(w, self.dense.word(0))?;
        } else {
            trace!(layout = "list", len = self.len(), "encoding set");
            write_uvarint(w, self.len() as u64)?;
            for v in self.iter() {
                write_uvarint(w, v as u64)?;
            }
        }
        Ok(())
    }

    /// Закодированные байты множества.
    pub fn to_bytes(&self) -> IntSetResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.encode(&mut buf)?;
        Ok(buf)
    }

    /// Кодирует множество через `enc` (обычно base64-writer) и одновременно
    /// передаёт те же сырые байты в `hasher`.
    pub fn encode_base64<W: Write, H: Hasher>(
        &self,
        enc: &mut W,
        hasher: &mut H,
    ) -> IntSetResult<()> {
        let mut tee = HashingWriter { inner: enc, hasher };
        self.encode(&mut tee)
    }

    /// Кодирует множество в base64 (стандартный алфавит, с паддингом).
    pub fn encode_base64_string<H: Hasher>(
        &self,
        hasher: &mut H,
    ) -> IntSetResult<String> {
        let mut enc = EncoderStringWriter::new(&STANDARD);
        self.encode_base64(&mut enc, hasher)?;
        Ok(enc.into_inner())
    }

    /// Заменяет содержимое множества данными из `r`.
    ///
    /// Использует [`DecodeLimits::default`].
    pub fn decode<R: Read>(
        &mut self,
        r: &mut R,
    ) -> IntSetResult<()> {
        self.decode_with_limits(r, &DecodeLimits::default())
    }

    /// Заменяет содержимое множества данными из `r` с заданными лимитами.
    ///
    /// При ошибке множество остаётся пустым.
    ///
    /// Декодер строже самого формата: списочная раскладка принимается только
    /// в том виде, в каком её пишет [`encode`](Self::encode), то есть строго по
    /// возрастанию. Список `02 05 03` или список с повтором отвергается, хотя
    /// как множество его можно было бы собрать.
    ///
    /// # Errors
    /// - [`FormatError::UnexpectedEof`]: поток кончился посреди значения;
    /// - [`FormatError::Malformed`]: неверный varint, элемент больше
    ///   `i64::MAX` или элементы не строго возрастают;
    /// - [`FormatError::SizeLimit`]: заявлено больше `max_elements` элементов;
    /// - прочие ошибки `r` передаются без изменений.
    pub fn decode_with_limits<R: Read>(
        &mut self,
        r: &mut R,
        limits: &DecodeLimits,
    ) -> IntSetResult<()> {
        self.clear();
        let result = self.decode_into(r, limits);
        if let Err(err) = &result {
            self.clear();
            debug!(
                error = %err,
                offset = ?err.downcast_ref::<FormatError>().and_then(FormatError::offset),
                "rejected set encoding"
            );
        }
        result
    }

    /// Декодирует новое множество из `r`.
    pub fn from_reader<R: Read>(r: &mut R) -> IntSetResult<Self> {
        let mut set = Self::new();
        set.decode(r)?;
        Ok(set)
    }

    fn decode_into<R: Read>(
        &mut self,
        r: &mut R,
        limits: &DecodeLimits,
    ) -> IntSetResult<()> {
        let (count, n) = read_uvarint(r, 0, "element count")?;
        let mut offset = n as u64;

        if count == 0 {
            let (word, _) = read_uvarint(r, offset, "membership word")?;
            self.dense.set_word(0, word);
            trace!(layout = "bitmap", len = self.len(), "decoded set");
            return Ok(());
        }

        if count > limits.max_elements {
            return Err(FormatError::SizeLimit {
                what: "element count".into(),
                size: count,
                limit: limits.max_elements,
            }
            .into());
        }

        let mut prev: Option<i64> = None;
        for _ in 0..count {
            let start = offset;
            let (raw, n) = read_uvarint(r, offset, "element")?;
            offset += n as u64;

            let v = i64::try_from(raw).map_err(|_| {
                FormatError::malformed(format!("element {raw} exceeds i64::MAX"), start)
            })?;
            if let Some(p) = prev.filter(|&p| v <= p) {
                return Err(FormatError::malformed(
                    format!("element {v} does not follow {p} in ascending order"),
                    start,
                )
                .into());
            }
            self.add(v);
            prev = Some(v);
        }

        trace!(layout = "list", len = count, bytes = offset, "decoded set");
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_elements: u32::MAX as u64,
        }
    }
}

impl<W: Write, H: Hasher> Write for HashingWriter<'_, W, H> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.write(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
