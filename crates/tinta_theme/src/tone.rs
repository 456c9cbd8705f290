//! Token axes and the keyed maps built over them
//!
//! Every axis of the token tree (tone, interaction state, input state, button
//! mode, spot hue) is a closed enum. Each axis has a matching keyed map whose
//! fields are the axis variants, so lookups are exhaustive `match`es and the
//! serialized field order is fixed by the struct.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ThemeError;

macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Key used in the serialized tree
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

macro_rules! keyed_map {
    (
        $(#[$meta:meta])*
        pub struct $name:ident<$key:ident> {
            $($field:ident => $variant:ident),+ $(,)?
        }
        $(aliases { $($alias:ident => $target:ident),+ $(,)? })?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name<T> {
            $(pub $field: T,)+
        }

        impl<T> $name<T> {
            /// Keys in field order
            pub const KEYS: &'static [$key] = &[$($key::$variant),+];

            pub fn from_fn(mut f: impl FnMut($key) -> T) -> Self {
                Self {
                    $($field: f($key::$variant),)+
                }
            }

            pub fn try_from_fn<E>(
                mut f: impl FnMut($key) -> std::result::Result<T, E>,
            ) -> std::result::Result<Self, E> {
                Ok(Self {
                    $($field: f($key::$variant)?,)+
                })
            }

            pub fn get(&self, key: $key) -> &T {
                match key {
                    $($key::$variant => &self.$field,)+
                    $($($key::$alias => &self.$target,)+)?
                }
            }

            pub fn get_mut(&mut self, key: $key) -> &mut T {
                match key {
                    $($key::$variant => &mut self.$field,)+
                    $($($key::$alias => &mut self.$target,)+)?
                }
            }

            pub fn iter(&self) -> impl Iterator<Item = ($key, &T)> + '_ {
                [$(($key::$variant, &self.$field)),+].into_iter()
            }

            pub fn map<U>(&self, mut f: impl FnMut($key, &T) -> U) -> $name<U> {
                $name {
                    $($field: f($key::$variant, &self.$field),)+
                }
            }
        }
    };
}

keyed_enum! {
    /// Semantic tone of a surface
    pub enum ToneName {
        Default => "default",
        Transparent => "transparent",
        Primary => "primary",
        Positive => "positive",
        Caution => "caution",
        Critical => "critical",
    }
}

impl ToneName {
    /// `default` and `transparent` carry no semantic hue of their own
    pub fn is_neutral(self) -> bool {
        matches!(self, ToneName::Default | ToneName::Transparent)
    }
}

impl FromStr for ToneName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ThemeError::UnknownTone(s.to_string()))
    }
}

keyed_enum! {
    /// Flat accent hue
    pub enum SpotHue {
        Gray => "gray",
        Blue => "blue",
        Purple => "purple",
        Magenta => "magenta",
        Red => "red",
        Orange => "orange",
        Yellow => "yellow",
        Green => "green",
        Cyan => "cyan",
    }
}

keyed_enum! {
    /// Interaction state
    pub enum State {
        Enabled => "enabled",
        Hovered => "hovered",
        Pressed => "pressed",
        Selected => "selected",
        Disabled => "disabled",
    }
}

keyed_enum! {
    /// Interaction state of a text input
    pub enum InputState {
        Enabled => "enabled",
        Hovered => "hovered",
        Disabled => "disabled",
        ReadOnly => "readOnly",
    }
}

keyed_enum! {
    /// Validity mode of a text input
    pub enum InputMode {
        Default => "default",
        Invalid => "invalid",
    }
}

keyed_enum! {
    /// Visual weight of a button
    pub enum ButtonMode {
        /// Filled with the solid tone
        Default => "default",
        /// Muted until interacted with
        Ghost => "ghost",
        /// Muted with an invisible border
        Bleed => "bleed",
    }
}

keyed_enum! {
    /// Light or dark rendering
    pub enum ColorScheme {
        Light => "light",
        Dark => "dark",
    }
}

impl ColorScheme {
    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown color scheme `{s}`"))
    }
}

keyed_map! {
    /// One value per semantic tone
    pub struct Tones<ToneName> {
        default => Default,
        transparent => Transparent,
        primary => Primary,
        positive => Positive,
        caution => Caution,
        critical => Critical,
    }
}

keyed_map! {
    /// One value per actionable tone; `transparent` reads the `default` entry
    pub struct ActionTones<ToneName> {
        default => Default,
        primary => Primary,
        positive => Positive,
        caution => Caution,
        critical => Critical,
    }
    aliases {
        Transparent => default,
    }
}

keyed_map! {
    pub struct States<State> {
        enabled => Enabled,
        hovered => Hovered,
        pressed => Pressed,
        selected => Selected,
        disabled => Disabled,
    }
}

keyed_map! {
    pub struct InputStates<InputState> {
        enabled => Enabled,
        hovered => Hovered,
        disabled => Disabled,
        read_only => ReadOnly,
    }
}

keyed_map! {
    pub struct InputModes<InputMode> {
        default => Default,
        invalid => Invalid,
    }
}

keyed_map! {
    pub struct ButtonModes<ButtonMode> {
        default => Default,
        ghost => Ghost,
        bleed => Bleed,
    }
}

keyed_map! {
    pub struct Spots<SpotHue> {
        gray => Gray,
        blue => Blue,
        purple => Purple,
        magenta => Magenta,
        red => Red,
        orange => Orange,
        yellow => Yellow,
        green => Green,
        cyan => Cyan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &tone in ToneName::ALL {
            assert_eq!(tone.name().parse::<ToneName>(), Ok(tone));
        }
        assert_eq!(InputState::ReadOnly.name(), "readOnly");
        assert_eq!(SpotHue::from_name("magenta"), Some(SpotHue::Magenta));
        assert_eq!(
            "brand".parse::<ToneName>(),
            Err(ThemeError::UnknownTone("brand".into()))
        );
    }

    #[test]
    fn neutral_tones() {
        let neutral: Vec<_> = ToneName::ALL.iter().filter(|t| t.is_neutral()).collect();
        assert_eq!(neutral, [&ToneName::Default, &ToneName::Transparent]);
    }

    #[test]
    fn keyed_map_follows_key_order() {
        let tones = Tones::from_fn(|tone| tone.name().len());
        assert_eq!(*tones.get(ToneName::Transparent), "transparent".len());
        let keys: Vec<_> = tones.iter().map(|(tone, _)| tone).collect();
        assert_eq!(keys, Tones::<usize>::KEYS);
    }

    #[test]
    fn action_tones_alias_transparent_to_default() {
        let mut tones = ActionTones::from_fn(|tone| tone.name());
        assert_eq!(*tones.get(ToneName::Transparent), "default");
        *tones.get_mut(ToneName::Transparent) = "neutral";
        assert_eq!(tones.default, "neutral");
        assert_eq!(ActionTones::<()>::KEYS.len(), 5);
    }

    #[test]
    fn try_from_fn_stops_at_first_error() {
        let mut seen = Vec::new();
        let result: Result<States<()>, State> = States::try_from_fn(|state| {
            seen.push(state);
            if state == State::Pressed {
                Err(state)
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err(State::Pressed));
        assert_eq!(seen, [State::Enabled, State::Hovered, State::Pressed]);
    }

    #[test]
    fn read_only_serializes_camel_case() {
        let states = InputStates::from_fn(|state| state.name());
        let json = serde_json::to_value(&states).unwrap();
        assert_eq!(json["readOnly"], "readOnly");
    }
}
