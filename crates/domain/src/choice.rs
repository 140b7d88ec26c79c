//! Closed enumerations exchanged with the backend as plain strings.
//!
//! Every status, type and method field is one of a fixed set of wire strings
//! (`"In Progress"`, `"Bank Transfer"`, …). [`define_choice!`] generates an
//! enum whose serde form is the wire string, plus exhaustive string
//! conversions, so consumers match on variants instead of comparing text.

/// Error returned when a string does not name any variant of a choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownChoice {
    /// Human name of the enumeration (e.g. `"room type"`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Turn a wire label into a CSS-friendly key: lower-cased, spaces as dashes.
#[must_use]
pub fn badge_class(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

macro_rules! define_choice {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant),+
        }

        impl $name {
            /// Every variant, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The exact string used on the wire and in the UI.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            /// Style key for status badges.
            #[must_use]
            pub fn badge_class(self) -> String {
                $crate::choice::badge_class(self.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::choice::UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err($crate::choice::UnknownChoice {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use define_choice;

/// Serde helper for optional choice fields that may arrive as `""`.
///
/// Older rows written through free-text forms store blanks instead of `null`;
/// both decode to `None`.
pub mod optional {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, de};

    /// Deserialize `null`, `""`, or a known wire string.
    ///
    /// # Errors
    ///
    /// Fails when a non-blank string names no variant.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => text.parse().map(Some).map_err(de::Error::custom),
        }
    }
}
