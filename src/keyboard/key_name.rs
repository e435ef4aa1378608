//! Nombres semánticos de tecla y la tabla de códigos por defecto.
//!
//! La convención de códigos es la de los *key codes* clásicos de los
//! navegadores:
//!
//! - `48..=90` → carácter ASCII directo en minúscula (`0`-`9`, `:`-`@`, `a`-`z`);
//! - navegación, modificadores, funciones, bloqueos y puntuación → tabla fija;
//! - cualquier otro código → [`KeyName::UNKNOWN`].

use std::fmt;
use std::str::FromStr;

use crate::error::KeyboardError;
use crate::traits::KeyNameResolver;

/// Nombre semántico y estable de una tecla (`"left"`, `"a"`, `"f1"`...).
///
/// Es un `Copy` barato sobre un `&'static str`: los nombres integrados salen de
/// las tablas de este módulo y los resolvers propios pueden acuñar los suyos con
/// [`KeyName::from_static`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyName(&'static str);

impl KeyName {
    /// Centinela para códigos sin nombre.
    pub const UNKNOWN: KeyName = KeyName("unknown");

    pub const LEFT: KeyName = KeyName("left");
    pub const UP: KeyName = KeyName("up");
    pub const RIGHT: KeyName = KeyName("right");
    pub const DOWN: KeyName = KeyName("down");
    pub const ENTER: KeyName = KeyName("enter");
    pub const ESCAPE: KeyName = KeyName("escape");
    pub const SPACE: KeyName = KeyName("space");
    pub const SHIFT: KeyName = KeyName("shift");
    pub const CTRL: KeyName = KeyName("ctrl");
    pub const ALT: KeyName = KeyName("alt");
    pub const F1: KeyName = KeyName("f1");
    pub const F5: KeyName = KeyName("f5");
    pub const F12: KeyName = KeyName("f12");

    /// Crea un nombre arbitrario. Pensado para resolvers propios; los nombres
    /// creados así no son reconocidos por [`FromStr`].
    pub const fn from_static(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// `true` si es el centinela [`KeyName::UNKNOWN`].
    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

impl fmt::Debug for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyName({:?})", self.0)
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for KeyName {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Busca un nombre integrado. `"unknown"` también se acepta.
impl FromStr for KeyName {
    type Err = KeyboardError;

    fn from_str(s: &str) -> crate::Result<Self> {
        if s == Self::UNKNOWN.0 {
            return Ok(Self::UNKNOWN);
        }
        ASCII_NAMES
            .iter()
            .chain(NAMED_KEYS.iter().map(|(_, name)| name))
            .find(|name| **name == s)
            .map(|name| KeyName(*name))
            .ok_or_else(|| KeyboardError::UnknownKeyName(s.to_owned()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for KeyName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for KeyName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

const ASCII_FIRST: u32 = 48;
const ASCII_LAST: u32 = 90;

/// Códigos `48..=90` en minúscula, indexados por `code - 48`.
static ASCII_NAMES: [&str; (ASCII_LAST - ASCII_FIRST + 1) as usize] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ":", ";", "<", "=", ">", "?", "@", "a",
    "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z",
];

static NAMED_KEYS: [(u32, &str); 45] = [
    (8, "backspace"),
    (9, "tab"),
    (13, "enter"),
    (16, "shift"),
    (17, "ctrl"),
    (18, "alt"),
    (19, "pause"),
    (20, "capslock"),
    (27, "escape"),
    (32, "space"),
    (33, "pageup"),
    (34, "pagedown"),
    (35, "end"),
    (36, "home"),
    (37, "left"),
    (38, "up"),
    (39, "right"),
    (40, "down"),
    (45, "insert"),
    (46, "delete"),
    (112, "f1"),
    (113, "f2"),
    (114, "f3"),
    (115, "f4"),
    (116, "f5"),
    (117, "f6"),
    (118, "f7"),
    (119, "f8"),
    (120, "f9"),
    (121, "f10"),
    (122, "f11"),
    (123, "f12"),
    (144, "numlock"),
    (145, "scrolllock"),
    (186, "semicolon"),
    (187, "equal"),
    (188, "comma"),
    (189, "dash"),
    (190, "period"),
    (191, "slash"),
    (192, "graveaccent"),
    (219, "openbracket"),
    (220, "backslash"),
    (221, "closebracket"),
    (222, "singlequote"),
];

/// Resuelve `code` con la tabla por defecto. Puro y total.
pub fn key_name(code: u32) -> KeyName {
    if (ASCII_FIRST..=ASCII_LAST).contains(&code) {
        return KeyName(ASCII_NAMES[(code - ASCII_FIRST) as usize]);
    }
    NAMED_KEYS
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(KeyName::UNKNOWN, |(_, name)| KeyName(*name))
}

/// Resolver por defecto basado en la convención de *key codes* de navegador.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyCodeTable;

impl KeyCodeTable {
    /// Búsqueda inversa: el código que produce `key`, si lo hay.
    ///
    /// Útil para sintetizar ocurrencias a partir de nombres.
    pub fn code_of(key: KeyName) -> Option<u32> {
        if let Some(offset) = ASCII_NAMES.iter().position(|name| *name == key.0) {
            return Some(ASCII_FIRST + offset as u32);
        }
        NAMED_KEYS
            .iter()
            .find(|(_, name)| *name == key.0)
            .map(|(code, _)| *code)
    }

    /// Todos los pares `(código, nombre)` con nombre integrado.
    pub fn entries() -> impl Iterator<Item = (u32, KeyName)> {
        (ASCII_FIRST..=ASCII_LAST)
            .map(|code| (code, key_name(code)))
            .chain(
                NAMED_KEYS
                    .iter()
                    .map(|(code, name)| (*code, KeyName(*name))),
            )
    }
}

impl KeyNameResolver for KeyCodeTable {
    fn key_name(&self, code: u32) -> KeyName {
        key_name(code)
    }
}
