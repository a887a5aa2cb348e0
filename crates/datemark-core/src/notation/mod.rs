//! Raw date notations.
//!
//! A [`DateNotation`] is the triple of integers written on a record line, in
//! textual order. It carries no calendar meaning of its own; the solver works
//! out per entity which [`Slot`] holds which component.

use std::fmt;

/// One of the three textual positions of a date notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    A,
    B,
    C,
}

impl Slot {
    /// All slots in textual order.
    pub const ALL: [Slot; 3] = [Slot::A, Slot::B, Slot::C];

    /// Index into a three-element slot array.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
            Slot::C => 2,
        }
    }

    /// The two other slots, in textual order.
    #[inline]
    pub const fn others(self) -> [Slot; 2] {
        match self {
            Slot::A => [Slot::B, Slot::C],
            Slot::B => [Slot::A, Slot::C],
            Slot::C => [Slot::A, Slot::B],
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::A => "A",
            Slot::B => "B",
            Slot::C => "C",
        };
        f.write_str(name)
    }
}

/// Three raw field values as parsed from one record line.
///
/// # Examples
///
/// ```
/// use datemark_core::{DateNotation, Slot};
///
/// let notation = DateNotation::new(5, 13, 99);
/// assert_eq!(notation.get(Slot::B), 13);
/// assert!(notation.contains_value(99));
/// assert!(!notation.contains_value(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateNotation {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl DateNotation {
    pub const fn new(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c }
    }

    /// Returns the raw value at `slot`.
    #[inline]
    pub const fn get(&self, slot: Slot) -> i32 {
        match slot {
            Slot::A => self.a,
            Slot::B => self.b,
            Slot::C => self.c,
        }
    }

    /// Returns true if any slot holds `value`.
    #[inline]
    pub const fn contains_value(&self, value: i32) -> bool {
        self.a == value || self.b == value || self.c == value
    }

    /// Raw values in textual order.
    #[inline]
    pub const fn values(&self) -> [i32; 3] {
        [self.a, self.b, self.c]
    }
}

impl fmt::Display for DateNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:02}", self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests;
