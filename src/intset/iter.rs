//! Обход по возрастанию, поиск следующего элемента и вставка отрезка.

use std::{collections::btree_set, iter::FusedIterator};

use super::{
    dense::{DenseIter, CUTOFF},
    FastIntSet,
};

/// Итератор по элементам [`FastIntSet`] в порядке возрастания.
///
/// Сначала отрицательные значения из переполнения, затем плотный блок, затем
/// значения `>= CUTOFF`.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    negatives: btree_set::Range<'a, i64>,
    dense: DenseIter,
    high: btree_set::Range<'a, i64>,
    remaining: usize,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl FastIntSet {
    /// Наименьший элемент `>= from`, либо `None`.
    ///
    /// `from` не обязан быть элементом и может быть любым `i64`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(
        &self,
        from: i64,
    ) -> Option<i64> {
        let in_overflow = self.overflow.range(from..).next().copied();
        let in_dense = if from < CUTOFF {
            self.dense.next_from(from.max(0) as u32).map(i64::from)
        } else {
            None
        };
        match (in_overflow, in_dense) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Итератор по элементам в порядке возрастания.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            negatives: self.overflow.range(..0),
            dense: self.dense.iter(),
            high: self.overflow.range(CUTOFF..),
            remaining: self.len(),
        }
    }

    /// Вызывает `visit` для каждого элемента по возрастанию.
    pub fn for_each<F>(
        &self,
        visit: F,
    ) where
        F: FnMut(i64),
    {
        self.iter().for_each(visit);
    }

    /// Все элементы по возрастанию.
    pub fn ordered(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Добавляет все числа отрезка `[from, to]`. При `from > to` ничего не
    /// делает.
    pub fn add_range(
        &mut self,
        from: i64,
        to: i64,
    ) {
        if from > to {
            return;
        }

        // Отрицательная часть.
        if from < 0 {
            self.overflow.extend(from..=to.min(-1));
        }

        // Часть внутри окна заполняется словами целиком.
        let lo = from.max(0);
        let hi = to.min(CUTOFF - 1);
        if lo <= hi {
            self.dense.insert_range(lo as u32, hi as u32);
        }

        // Часть за окном.
        if to >= CUTOFF {
            self.overflow.extend(from.max(CUTOFF)..=to);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl Iterator for Iter<'_> {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        let v = self
            .negatives
            .next()
            .copied()
            .or_else(|| self.dense.next().map(i64::from))
            .or_else(|| self.high.next().copied())?;
        self.remaining -= 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a FastIntSet {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<i64> for FastIntSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut set = FastIntSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<i64> for FastIntSet {
    fn extend<I: IntoIterator<Item = i64>>(
        &mut self,
        iter: I,
    ) {
        for v in iter {
            self.add(v);
        }
    }
}
