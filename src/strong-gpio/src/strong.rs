//! Strong value types.
//!
//! A strong value wraps a single raw hardware parameter and gives it its own type, so that,
//! e.g., a pin number cannot be passed where a drive strength is expected even though both are
//! a `u32`. Strong values are immutable, compare structurally, and are only obtainable through
//! the constructors of their type, which enforce its invariant.

/// Common interface of strong value types.
pub trait StrongValue: Copy + Eq {
    /// Underlying raw representation.
    type Raw: Copy;

    /// Returns the wrapped raw value.
    fn get(&self) -> Self::Raw;

    /// Returns the wrapped raw value converted into another encoding.
    fn get_as<T: From<Self::Raw>>(&self) -> T {
        T::from(self.get())
    }
}

/// Defines a newtype around a raw value and implements [`StrongValue`] for it.
///
/// The wrapped field stays private to the module invoking the macro.
macro_rules! define_strong_value {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($raw:ty);) => {
        $(#[$attr])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        $vis struct $name($raw);

        impl $crate::strong::StrongValue for $name {
            type Raw = $raw;

            fn get(&self) -> $raw {
                self.0
            }
        }
    };
}

pub(crate) use define_strong_value;

#[cfg(test)]
mod tests {
    use super::*;

    define_strong_value! {
        struct Celsius(i16);
    }

    define_strong_value! {
        struct Kelvin(i16);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Celsius(21), Celsius(21));
        assert_ne!(Celsius(21), Celsius(22));
        assert_eq!(Kelvin(0).get(), 0);
    }

    #[test]
    fn test_get_as() {
        let widened: i64 = Celsius(-40).get_as();
        assert_eq!(widened, -40);
    }
}
