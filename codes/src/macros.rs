/// Declares a `u16` newtype over a closed table of named values.
///
/// Each row is `NAME [| ALIAS]* = value;`, rows sorted by value. Every name becomes an
/// associated constant; aliases share the value of the row they are written on and render
/// joined with `|`.
macro_rules! code_space {
    (
        $(#[$meta: meta])*
        pub struct $name: ident;

        $($konst: ident $(| $alias: ident)* = $value: literal;)*
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(pub u16);

        impl $name {
            $(
                pub const $konst: Self = Self($value);
                $(pub const $alias: Self = Self($value);)*
            )*

            const TABLE: &'static [(u16, &'static str)] = &[
                $(($value, concat!(stringify!($konst) $(, "|", stringify!($alias))*)),)*
            ];

            #[inline]
            pub const fn raw(self) -> u16 {
                self.0
            }

            /// Canonical name, aliases joined with `|`. `None` for values outside the table.
            pub fn name(self) -> Option<&'static str> {
                Self::TABLE
                    .binary_search_by_key(&self.0, |&(v, _)| v)
                    .ok()
                    .map(|i| Self::TABLE[i].1)
            }

            /// Looks up a single name (or an alias, or the joined form).
            pub fn from_name(name: &str) -> Option<Self> {
                Self::TABLE
                    .iter()
                    .find(|&&(_, joined)| joined == name || joined.split('|').any(|n| n == name))
                    .map(|&(v, _)| Self(v))
            }

            /// Every named value, in ascending numeric order.
            pub fn known() -> impl Iterator<Item = Self> + Clone {
                Self::TABLE.iter().map(|&(v, _)| Self(v))
            }
        }
        impl From<u16> for $name {
            fn from(v: u16) -> Self {
                Self(v)
            }
        }
        impl From<$name> for u16 {
            fn from(v: $name) -> u16 {
                v.0
            }
        }
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}(0x{:04x})", self.name().unwrap_or("UNKNOWN"), self.0)
            }
        }
        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }
    };
}
