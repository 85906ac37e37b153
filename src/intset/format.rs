//! Каноническая текстовая форма: `(a,b,lo-hi,...)`.
//!
//! Серия из трёх и более подряд идущих неотрицательных элементов сжимается в
//! `lo-hi`. Отрицательные элементы всегда пишутся по одному, поэтому у серии
//! через ноль сжимается только неотрицательный хвост.

use std::fmt::{self, Write};

use super::FastIntSet;

/// Пишет токены через запятую.
struct TokenWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl TokenWriter<'_, '_> {
    fn sep(&mut self) -> fmt::Result {
        if self.first {
            self.first = false;
            Ok(())
        } else {
            self.f.write_char(',')
        }
    }

    fn single(
        &mut self,
        v: i64,
    ) -> fmt::Result {
        self.sep()?;
        write!(self.f, "{v}")
    }

    fn run(
        &mut self,
        lo: i64,
        hi: i64,
    ) -> fmt::Result {
        self.sep()?;
        write!(self.f, "{lo}-{hi}")
    }
}

impl fmt::Display for FastIntSet {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_char('(')?;
        {
            let mut tokens = TokenWriter { f, first: true };
            let mut it = self.iter().peekable();
            while let Some(lo) = it.next() {
                if lo < 0 {
                    tokens.single(lo)?;
                    continue;
                }
                let mut hi = lo;
                while let Some(next) = it.next_if(|&n| Some(n) == hi.checked_add(1)) {
                    hi = next;
                }
                if hi - lo >= 2 {
                    tokens.run(lo, hi)?;
                } else {
                    for v in lo..=hi {
                        tokens.single(v)?;
                    }
                }
            }
        }
        f.write_char(')')
    }
}

impl fmt::Debug for FastIntSet {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "FastIntSet{self}")
    }
}
