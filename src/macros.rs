/// Declares a fieldless `#[repr(u8)]` enum whose discriminants are the
/// values stored in property records, together with its short UCD aliases.
macro_rules! u8_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal => $short:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Looks a value up by its discriminant.
            pub fn from_u8(value: u8) -> Option<Self> {
                match value {
                    $( $value => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// The discriminant, as stored in property records.
            #[inline]
            pub fn to_u8(self) -> u8 {
                self as u8
            }

            /// The short alias used by the Unicode Character Database.
            pub fn short_name(self) -> &'static str {
                match self {
                    $( $name::$variant => $short, )+
                }
            }
        }
    };
}
