//! `FastIntSet`: множество целых чисел `i64` с быстрым плотным окном.
//!
//! Значения из `[0, CUTOFF)` хранятся битами во встроенном блоке, всё
//! остальное (отрицательные и большие значения) хранится в `BTreeSet`. Пока все
//! элементы попадают в окно, множество не выделяет память в куче.

use std::collections::BTreeSet;

use super::dense::{DenseBlock, CUTOFF};

/// Множество целых чисел с двойным представлением.
///
/// - Значения `0..CUTOFF` лежат в плотном блоке (битовая карта на стеке).
/// - Остальные значения лежат в упорядоченной коллекции переполнения.
/// - Каждое значение находится ровно в одном из двух мест, и место зависит
///   только от самого значения. Поэтому структурное равенство совпадает с
///   равенством множеств.
///
/// Обход всегда идёт по возрастанию, независимо от того, где лежат значения.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct FastIntSet {
    pub(super) dense: DenseBlock,
    pub(super) overflow: BTreeSet<i64>,
}

/// Куда попадает значение.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Slot {
    /// Номер бита в плотном блоке.
    Dense(u32),
    Overflow,
}

impl Slot {
    #[inline]
    pub(super) fn of(v: i64) -> Slot {
        if (0..CUTOFF).contains(&v) {
            Slot::Dense(v as u32)
        } else {
            Slot::Overflow
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl FastIntSet {
    /// Создаёт пустое множество.
    pub const fn new() -> Self {
        Self {
            dense: DenseBlock::new(),
            overflow: BTreeSet::new(),
        }
    }

    /// Создаёт множество из списка значений (дубликаты допустимы).
    pub fn from_values(values: &[i64]) -> Self {
        let mut set = Self::new();
        for &v in values {
            set.add(v);
        }
        set
    }

    /// Добавляет значение. Возвращает `true`, если его ещё не было.
    #[inline]
    pub fn add(
        &mut self,
        v: i64,
    ) -> bool {
        match Slot::of(v) {
            Slot::Dense(bit) => self.dense.insert(bit),
            Slot::Overflow => self.overflow.insert(v),
        }
    }

    /// Удаляет значение. Возвращает `true`, если оно было во множестве.
    #[inline]
    pub fn remove(
        &mut self,
        v: i64,
    ) -> bool {
        match Slot::of(v) {
            Slot::Dense(bit) => self.dense.remove(bit),
            Slot::Overflow => self.overflow.remove(&v),
        }
    }

    /// Проверяет, содержится ли значение во множестве.
    #[inline]
    pub fn contains(
        &self,
        v: i64,
    ) -> bool {
        match Slot::of(v) {
            Slot::Dense(bit) => self.dense.contains(bit),
            Slot::Overflow => self.overflow.contains(&v),
        }
    }

    /// Проверяет, пустое ли множество. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty() && self.overflow.is_empty()
    }

    /// Кол-во элементов.
    #[inline]
    pub fn len(&self) -> usize {
        self.dense.len() + self.overflow.len()
    }

    pub fn clear(&mut self) {
        self.dense.clear();
        self.overflow.clear();
    }

    /// Наименьший элемент.
    pub fn min(&self) -> Option<i64> {
        match self.overflow.first() {
            Some(&v) if v < 0 => Some(v),
            first => self.dense.next_from(0).map(i64::from).or(first.copied()),
        }
    }

    /// Наибольший элемент.
    pub fn max(&self) -> Option<i64> {
        match self.overflow.last() {
            Some(&v) if v >= CUTOFF => Some(v),
            last => self.dense.last().map(i64::from).or(last.copied()),
        }
    }

    /// `true`, если все элементы лежат в плотном окне `[0, CUTOFF)`.
    #[inline]
    pub fn is_dense_only(&self) -> bool {
        self.overflow.is_empty()
    }

    /// Независимая копия множества.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Заменяет содержимое копией `other`, переиспользуя память.
    pub fn copy_from(
        &mut self,
        other: &FastIntSet,
    ) {
        self.dense = other.dense;
        self.overflow.clone_from(&other.overflow);
    }

    /// Первый отрицательный элемент, если есть.
    pub(super) fn first_negative(&self) -> Option<i64> {
        self.overflow.first().copied().filter(|&v| v < 0)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl From<&[i64]> for FastIntSet {
    fn from(values: &[i64]) -> Self {
        Self::from_values(values)
    }
}

impl<const N: usize> From<[i64; N]> for FastIntSet {
    fn from(values: [i64; N]) -> Self {
        Self::from_values(&values)
    }
}

#[cfg(feature = "fuzz")]
impl<'a> arbitrary::Arbitrary<'a> for FastIntSet {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        // Больше малых значений, чтобы чаще попадать в плотное окно.
        let small: Vec<i16> = u.arbitrary()?;
        let large: Vec<i64> = u.arbitrary()?;
        Ok(small
            .into_iter()
            .map(i64::from)
            .chain(large)
            .collect())
    }
}
