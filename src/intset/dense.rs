//! Плотный блок: битовая карта фиксированного размера над `[0, CUTOFF)`.
//!
//! Лежит прямо внутри [`FastIntSet`](super::FastIntSet) и память в куче не
//! выделяет. Все операции работают целыми 64-битными словами.

/// Верхняя граница (не включая) плотного окна.
pub const CUTOFF: i64 = 128;

const WORD_BITS: u32 = u64::BITS;
const WORDS: usize = (CUTOFF as usize) / (WORD_BITS as usize);

/// Битовая карта значений `0..CUTOFF`. Бит `i % 64` слова `i / 64` означает значение `i`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) struct DenseBlock {
    words: [u64; WORDS],
}

/// Итератор по установленным битам [`DenseBlock`] по возрастанию.
///
/// Работает с копией слов и на каждом шаге снимает младший бит.
#[derive(Debug, Clone)]
pub(crate) struct DenseIter {
    words: [u64; WORDS],
    index: usize,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl DenseBlock {
    pub(crate) const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    #[inline]
    fn locate(bit: u32) -> (usize, u64) {
        debug_assert!((bit as i64) < CUTOFF);
        ((bit / WORD_BITS) as usize, 1u64 << (bit % WORD_BITS))
    }

    /// Ставит бит. Вернёт `true`, если раньше он не был установлен.
    #[inline]
    pub(crate) fn insert(
        &mut self,
        bit: u32,
    ) -> bool {
        let (w, mask) = Self::locate(bit);
        let was_set = self.words[w] & mask != 0;
        self.words[w] |= mask;
        !was_set
    }

    /// Снимает бит. Вернёт `true`, если он был установлен.
    #[inline]
    pub(crate) fn remove(
        &mut self,
        bit: u32,
    ) -> bool {
        let (w, mask) = Self::locate(bit);
        let was_set = self.words[w] & mask != 0;
        self.words[w] &= !mask;
        was_set
    }

    #[inline]
    pub(crate) fn contains(
        &self,
        bit: u32,
    ) -> bool {
        let (w, mask) = Self::locate(bit);
        self.words[w] & mask != 0
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Кол-во установленных битов.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub(crate) fn clear(&mut self) {
        self.words = [0; WORDS];
    }

    /// Сырое слово `index` (биты `64 * index ..`).
    #[inline]
    pub(crate) fn word(
        &self,
        index: usize,
    ) -> u64 {
        self.words[index]
    }

    #[inline]
    pub(crate) fn set_word(
        &mut self,
        index: usize,
        word: u64,
    ) {
        self.words[index] = word;
    }

    /// Наименьший установленный бит `>= bit`.
    pub(crate) fn next_from(
        &self,
        bit: u32,
    ) -> Option<u32> {
        let mut w = (bit / WORD_BITS) as usize;
        if w >= WORDS {
            return None;
        }
        let mut word = self.words[w] & (!0u64 << (bit % WORD_BITS));
        loop {
            if word != 0 {
                return Some(w as u32 * WORD_BITS + word.trailing_zeros());
            }
            w += 1;
            if w == WORDS {
                return None;
            }
            word = self.words[w];
        }
    }

    /// Наибольший установленный бит.
    pub(crate) fn last(&self) -> Option<u32> {
        self.words
            .iter()
            .enumerate()
            .rev()
            .find(|(_, &w)| w != 0)
            .map(|(i, w)| i as u32 * WORD_BITS + (WORD_BITS - 1 - w.leading_zeros()))
    }

    /// Ставит все биты `lo..=hi`. Оба конца должны лежать в окне.
    pub(crate) fn insert_range(
        &mut self,
        lo: u32,
        hi: u32,
    ) {
        debug_assert!(lo <= hi && (hi as i64) < CUTOFF);
        let first = (lo / WORD_BITS) as usize;
        let last = (hi / WORD_BITS) as usize;
        for w in first..=last {
            let start = if w == first { lo % WORD_BITS } else { 0 };
            let end = if w == last { hi % WORD_BITS } else { WORD_BITS - 1 };
            let mask = (!0u64 >> (WORD_BITS - 1 - (end - start))) << start;
            self.words[w] |= mask;
        }
    }

    pub(crate) fn union_with(
        &mut self,
        other: &Self,
    ) {
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a |= *b;
        }
    }

    pub(crate) fn intersect_with(
        &mut self,
        other: &Self,
    ) {
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a &= *b;
        }
    }

    pub(crate) fn difference_with(
        &mut self,
        other: &Self,
    ) {
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a &= !*b;
        }
    }

    pub(crate) fn intersects(
        &self,
        other: &Self,
    ) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| a & b != 0)
    }

    pub(crate) fn is_subset(
        &self,
        other: &Self,
    ) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| a & !b == 0)
    }

    pub(crate) fn iter(&self) -> DenseIter {
        DenseIter {
            words: self.words,
            index: 0,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl Iterator for DenseIter {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        while self.index < WORDS {
            let word = &mut self.words[self.index];
            if *word != 0 {
                let bit = word.trailing_zeros();
                *word &= *word - 1;
                return Some(self.index as u32 * WORD_BITS + bit);
            }
            self.index += 1;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.words[self.index.min(WORDS)..]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum();
        (n, Some(n))
    }
}
