//! Small typed flag sets for held keys.
//!
//! Several directions can be held at once (up and left, say), so each
//! category is a set rather than a single value. Updates are insert on
//! key-down and remove on key-up.

use std::fmt;
use std::marker::PhantomData;

/// A member of a [`FlagSet`].
pub trait Flag: Copy + fmt::Debug + 'static {
    /// Every member, in bit order.
    const ALL: &'static [Self];

    /// Bit position of this member (below 8).
    fn bit(self) -> u8;
}

/// Fixed-size set of up to eight [`Flag`] members.
pub struct FlagSet<F> {
    bits: u8,
    _flag: PhantomData<F>,
}

impl<F: Flag> FlagSet<F> {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _flag: PhantomData,
        }
    }

    /// Add `flag` (OR).
    pub fn insert(&mut self, flag: F) {
        self.bits |= 1 << flag.bit();
    }

    /// Remove `flag` (AND-NOT).
    pub fn remove(&mut self, flag: F) {
        self.bits &= !(1 << flag.bit());
    }

    /// Insert or remove depending on `on`.
    pub fn set(&mut self, flag: F, on: bool) {
        if on {
            self.insert(flag);
        } else {
            self.remove(flag);
        }
    }

    /// Whether `flag` is held.
    #[must_use]
    pub fn contains(&self, flag: F) -> bool {
        self.bits & (1 << flag.bit()) != 0
    }

    /// Whether nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Drop every member.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Held members, in bit order.
    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        F::ALL.iter().copied().filter(|flag| self.contains(*flag))
    }
}

impl<F> Clone for FlagSet<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for FlagSet<F> {}

impl<F> PartialEq for FlagSet<F> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<F> Eq for FlagSet<F> {}

impl<F: Flag> Default for FlagSet<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Flag> fmt::Debug for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<F: Flag> FromIterator<F> for FlagSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut set = Self::empty();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

/// Held orbit direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    /// Orbit up.
    Up,
    /// Orbit down.
    Down,
    /// Orbit left.
    Left,
    /// Orbit right.
    Right,
}

impl Flag for RotateDirection {
    const ALL: &'static [Self] =
        &[Self::Up, Self::Down, Self::Left, Self::Right];

    fn bit(self) -> u8 {
        self as u8
    }
}

/// Held zoom direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Dolly in / narrow the fov.
    In,
    /// Dolly out / widen the fov.
    Out,
}

impl Flag for ZoomDirection {
    const ALL: &'static [Self] = &[Self::In, Self::Out];

    fn bit(self) -> u8 {
        self as u8
    }
}

/// Held spin (roll) direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpinDirection {
    /// Roll counter-clockwise.
    Left,
    /// Roll clockwise.
    Right,
}

impl Flag for SpinDirection {
    const ALL: &'static [Self] = &[Self::Left, Self::Right];

    fn bit(self) -> u8 {
        self as u8
    }
}

/// Held modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Alt.
    Alt,
    /// Ctrl.
    Ctrl,
    /// Shift.
    Shift,
    /// Caps lock (polled from key events, not tracked by down/up).
    CapsLock,
}

impl Flag for Modifier {
    const ALL: &'static [Self] =
        &[Self::Alt, Self::Ctrl, Self::Shift, Self::CapsLock];

    fn bit(self) -> u8 {
        self as u8
    }
}

/// Held orbit directions.
pub type RotateFlags = FlagSet<RotateDirection>;
/// Held zoom directions.
pub type ZoomFlags = FlagSet<ZoomDirection>;
/// Held spin directions.
pub type SpinFlags = FlagSet<SpinDirection>;
/// Held modifiers.
pub type Modifiers = FlagSet<Modifier>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_combine() {
        let mut rotate = RotateFlags::empty();
        rotate.insert(RotateDirection::Up);
        rotate.insert(RotateDirection::Left);
        assert!(rotate.contains(RotateDirection::Up));
        assert!(rotate.contains(RotateDirection::Left));
        assert!(!rotate.contains(RotateDirection::Down));
        assert_eq!(
            rotate.iter().collect::<Vec<_>>(),
            vec![RotateDirection::Up, RotateDirection::Left]
        );
    }

    #[test]
    fn remove_clears_only_that_bit() {
        let mut mods: Modifiers =
            [Modifier::Shift, Modifier::CapsLock].into_iter().collect();
        mods.remove(Modifier::Shift);
        assert!(!mods.contains(Modifier::Shift));
        assert!(mods.contains(Modifier::CapsLock));
        mods.remove(Modifier::Shift);
        assert!(mods.contains(Modifier::CapsLock));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut zoom = ZoomFlags::empty();
        zoom.insert(ZoomDirection::In);
        zoom.insert(ZoomDirection::In);
        zoom.remove(ZoomDirection::In);
        assert!(zoom.is_empty());
    }

    fn full_set<F: Flag>() -> FlagSet<F> {
        F::ALL.iter().copied().collect()
    }

    #[test]
    fn every_member_fits_a_distinct_bit() {
        let modifiers = full_set::<Modifier>();
        assert_eq!(modifiers.iter().count(), Modifier::ALL.len());
        let rotate = full_set::<RotateDirection>();
        assert_eq!(
            rotate.iter().collect::<Vec<_>>(),
            RotateDirection::ALL.to_vec()
        );
        assert!(Modifier::ALL.iter().all(|m| m.bit() < 8));
    }

    #[test]
    fn set_and_clear() {
        let mut spin = SpinFlags::default();
        spin.set(SpinDirection::Right, true);
        assert!(!spin.is_empty());
        spin.set(SpinDirection::Right, false);
        assert!(spin.is_empty());
        spin.insert(SpinDirection::Left);
        spin.clear();
        assert!(spin.is_empty());
    }
}
