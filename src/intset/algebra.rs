//! Алгебра множеств над [`FastIntSet`].
//!
//! Каждая операция делится на пословный шаг по плотным блокам и шаг по
//! `BTreeSet` переполнения. Место значения зависит только от самого значения,
//! поэтому половины друг на друга не влияют.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

use super::FastIntSet;

impl FastIntSet {
    /// Добавляет в `self` все элементы `other`.
    pub fn union_with(
        &mut self,
        other: &FastIntSet,
    ) {
        self.dense.union_with(&other.dense);
        if self.overflow.is_empty() {
            self.overflow.clone_from(&other.overflow);
        } else {
            self.overflow.extend(other.overflow.iter().copied());
        }
    }

    /// Оставляет только элементы, которые есть и в `other`.
    pub fn intersection_with(
        &mut self,
        other: &FastIntSet,
    ) {
        self.dense.intersect_with(&other.dense);
        if other.overflow.is_empty() {
            self.overflow.clear();
        } else {
            self.overflow.retain(|v| other.overflow.contains(v));
        }
    }

    /// Удаляет из `self` все элементы `other`.
    pub fn difference_with(
        &mut self,
        other: &FastIntSet,
    ) {
        self.dense.difference_with(&other.dense);
        if !other.overflow.is_empty() {
            self.overflow.retain(|v| !other.overflow.contains(v));
        }
    }

    /// Объединение: новое множество, исходные не меняются.
    pub fn union(
        &self,
        other: &FastIntSet,
    ) -> FastIntSet {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Пересечение: новое множество, исходные не меняются.
    pub fn intersection(
        &self,
        other: &FastIntSet,
    ) -> FastIntSet {
        let mut result = self.clone();
        result.intersection_with(other);
        result
    }

    /// Разность `self \ other`: новое множество, исходные не меняются.
    pub fn difference(
        &self,
        other: &FastIntSet,
    ) -> FastIntSet {
        let mut result = self.clone();
        result.difference_with(other);
        result
    }

    /// `true`, если у множеств есть общий элемент.
    ///
    /// Пересечение при этом не строится.
    pub fn intersects(
        &self,
        other: &FastIntSet,
    ) -> bool {
        self.dense.intersects(&other.dense) || !self.overflow.is_disjoint(&other.overflow)
    }

    /// `true`, если каждый элемент `self` есть в `other`.
    pub fn subset_of(
        &self,
        other: &FastIntSet,
    ) -> bool {
        self.dense.is_subset(&other.dense) && self.overflow.is_subset(&other.overflow)
    }

    /// `true`, если множества состоят из одних и тех же элементов.
    ///
    /// Совпадает с `subset_of` в обе стороны.
    pub fn equals(
        &self,
        other: &FastIntSet,
    ) -> bool {
        self.dense == other.dense && self.overflow == other.overflow
    }
}

////////////////////////////////////////////////////////////////////////////////
// Операторы
////////////////////////////////////////////////////////////////////////////////

impl BitOr for &FastIntSet {
    type Output = FastIntSet;

    fn bitor(
        self,
        rhs: Self,
    ) -> FastIntSet {
        self.union(rhs)
    }
}

impl BitAnd for &FastIntSet {
    type Output = FastIntSet;

    fn bitand(
        self,
        rhs: Self,
    ) -> FastIntSet {
        self.intersection(rhs)
    }
}

impl Sub for &FastIntSet {
    type Output = FastIntSet;

    fn sub(
        self,
        rhs: Self,
    ) -> FastIntSet {
        self.difference(rhs)
    }
}

impl BitOrAssign<&FastIntSet> for FastIntSet {
    fn bitor_assign(
        &mut self,
        rhs: &FastIntSet,
    ) {
        self.union_with(rhs);
    }
}

impl BitAndAssign<&FastIntSet> for FastIntSet {
    fn bitand_assign(
        &mut self,
        rhs: &FastIntSet,
    ) {
        self.intersection_with(rhs);
    }
}

impl SubAssign<&FastIntSet> for FastIntSet {
    fn sub_assign(
        &mut self,
        rhs: &FastIntSet,
    ) {
        self.difference_with(rhs);
    }
}
