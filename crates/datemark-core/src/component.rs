//! Calendar components and candidate sets.
//!
//! A [`ComponentSet`] is a 3-bit set over {Day, Month, Year}. Every slot of an
//! entity profile holds one, and the solver only ever narrows it.

use std::fmt;

/// The calendar role a slot of a date notation can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Component {
    Day,
    Month,
    Year,
}

impl Component {
    /// All components in flag order.
    pub const ALL: [Component; 3] = [Component::Day, Component::Month, Component::Year];

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Component::Day => 1 << 0,
            Component::Month => 1 << 1,
            Component::Year => 1 << 2,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Day => "day",
            Component::Month => "month",
            Component::Year => "year",
        };
        f.write_str(name)
    }
}

/// A subset of {Day, Month, Year}.
///
/// # Examples
///
/// ```
/// use datemark_core::{Component, ComponentSet};
///
/// let mut set = ComponentSet::NON_YEAR;
/// assert!(set.contains(Component::Day));
/// assert!(!set.contains(Component::Year));
///
/// set.remove(Component::Day);
/// assert_eq!(set.single(), Some(Component::Month));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentSet {
    bits: u8,
}

impl ComponentSet {
    /// The empty set.
    pub const EMPTY: ComponentSet = ComponentSet { bits: 0 };

    /// {Day, Month, Year}.
    pub const ALL: ComponentSet = ComponentSet { bits: 0b111 };

    /// {Day, Month}. The middle slot never holds a year.
    pub const NON_YEAR: ComponentSet = ComponentSet { bits: 0b011 };

    /// Creates the singleton set {component}.
    #[inline]
    pub const fn only(component: Component) -> Self {
        ComponentSet {
            bits: component.bit(),
        }
    }

    #[inline]
    pub const fn contains(self, component: Component) -> bool {
        self.bits & component.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, component: Component) {
        self.bits |= component.bit();
    }

    /// Removes `component`, returning whether it was present.
    #[inline]
    pub fn remove(&mut self, component: Component) -> bool {
        let present = self.contains(component);
        self.bits &= !component.bit();
        present
    }

    #[inline]
    pub const fn intersection(self, other: ComponentSet) -> ComponentSet {
        ComponentSet {
            bits: self.bits & other.bits,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns the only member if this set is a singleton.
    pub fn single(self) -> Option<Component> {
        match self.bits {
            0b001 => Some(Component::Day),
            0b010 => Some(Component::Month),
            0b100 => Some(Component::Year),
            _ => None,
        }
    }

    /// Iterates members in flag order.
    pub fn iter(self) -> impl Iterator<Item = Component> {
        Component::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Component> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        let mut set = ComponentSet::EMPTY;
        for component in iter {
            set.insert(component);
        }
        set
    }
}

impl fmt::Debug for ComponentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for ComponentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, component) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{component}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(ComponentSet::ALL.len(), 3);
        assert_eq!(ComponentSet::NON_YEAR.len(), 2);
        assert!(ComponentSet::EMPTY.is_empty());
        assert!(!ComponentSet::NON_YEAR.contains(Component::Year));
    }

    #[test]
    fn test_single() {
        assert_eq!(ComponentSet::only(Component::Year).single(), Some(Component::Year));
        assert_eq!(ComponentSet::NON_YEAR.single(), None);
        assert_eq!(ComponentSet::EMPTY.single(), None);
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut set = ComponentSet::ALL;
        assert!(set.remove(Component::Month));
        assert!(!set.remove(Component::Month));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Component::Day, Component::Year]);
    }

    #[test]
    fn test_from_iter_and_intersection() {
        let set: ComponentSet = [Component::Day, Component::Year].into_iter().collect();
        assert_eq!(
            set.intersection(ComponentSet::NON_YEAR),
            ComponentSet::only(Component::Day)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ComponentSet::ALL.to_string(), "{day,month,year}");
        assert_eq!(ComponentSet::EMPTY.to_string(), "{}");
    }
}
