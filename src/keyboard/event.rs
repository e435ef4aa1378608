use std::fmt;
use std::str::FromStr;

use crate::error::KeyboardError;
use crate::keyboard::KeyName;

/// Las dos notificaciones que publica el controlador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum KeyEventKind {
    /// Transición UP → DOWN (`"keydown"`).
    KeyDown,
    /// Liberación de una tecla (`"keyup"`).
    KeyUp,
}

impl KeyEventKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            Self::KeyUp => "keyup",
        }
    }
}

impl fmt::Display for KeyEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyEventKind {
    type Err = KeyboardError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "keydown" => Ok(Self::KeyDown),
            "keyup" => Ok(Self::KeyUp),
            other => Err(KeyboardError::UnknownEventKind(other.to_owned())),
        }
    }
}

/// Registro entregado a los suscriptores de `keydown` / `keyup`.
///
/// Se construye uno nuevo por notificación y **toma prestada** la ocurrencia
/// cruda del host solo durante el turno de despacho: un manejador puede leer
/// `original`, pero no guardarlo. Para conservar algo, copia `key` (es `Copy`).
#[derive(Debug)]
pub struct KeyEvent<'a, E> {
    pub kind: KeyEventKind,
    pub key: KeyName,
    pub original: &'a E,
}

impl<'a, E> KeyEvent<'a, E> {
    pub fn new(kind: KeyEventKind, key: KeyName, original: &'a E) -> Self {
        Self {
            kind,
            key,
            original,
        }
    }
}
