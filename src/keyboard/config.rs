//! Configuración del controlador de teclado.
//!
//! Todos los valores son mutables en cualquier momento y se leen al procesar
//! cada ocurrencia: un cambio afecta a la **siguiente** ocurrencia, nunca a una
//! en curso.
//!
//! Con el feature `serde` (activo por defecto) la configuración se puede cargar
//! desde JSON, TOML o cualquier formato de `serde`:
//!
//! ```json
//! {
//!   "enabled": true,
//!   "suppress_default": true,
//!   "bypass_keys": ["f12", "f5", "ctrl", "alt", "shift"],
//!   "unknown_keys": "ignore"
//! }
//! ```

use crate::keyboard::KeyName;

/// Qué hacer con las ocurrencias cuyo código resuelve a [`KeyName::UNKNOWN`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnknownKeys {
    /// Descartar la ocurrencia: sin cambio de estado ni notificación.
    #[default]
    Ignore,
    /// Procesarla bajo el nombre único `"unknown"`.
    Track,
}

/// Conjunto **ordenado** de teclas exentas de la supresión de acciones por
/// defecto.
///
/// Mientras cualquiera de estas teclas esté abajo, ninguna ocurrencia se
/// suprime: así siguen funcionando recargar (`f5`), las herramientas de
/// desarrollo (`f12`) y las combinaciones con modificadores.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<KeyName>", into = "Vec<KeyName>"))]
pub struct BypassKeys(Vec<KeyName>);

impl BypassKeys {
    /// Conjunto vacío: nada queda exento.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Añade `key` al final. Retorna `false` si ya estaba.
    pub fn insert(&mut self, key: KeyName) -> bool {
        if self.contains(key) {
            return false;
        }
        self.0.push(key);
        true
    }

    /// Quita `key`. Retorna `false` si no estaba.
    pub fn remove(&mut self, key: KeyName) -> bool {
        let before = self.0.len();
        self.0.retain(|k| *k != key);
        self.0.len() != before
    }

    pub fn contains(&self, key: KeyName) -> bool {
        self.0.contains(&key)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Itera en orden de inserción.
    pub fn iter(&self) -> impl Iterator<Item = KeyName> + '_ {
        self.0.iter().copied()
    }
}

/// `f12`, `f5`, `ctrl`, `alt` y `shift`.
impl Default for BypassKeys {
    fn default() -> Self {
        Self(vec![
            KeyName::F12,
            KeyName::F5,
            KeyName::CTRL,
            KeyName::ALT,
            KeyName::SHIFT,
        ])
    }
}

impl From<Vec<KeyName>> for BypassKeys {
    fn from(keys: Vec<KeyName>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<BypassKeys> for Vec<KeyName> {
    fn from(keys: BypassKeys) -> Self {
        keys.0
    }
}

impl FromIterator<KeyName> for BypassKeys {
    fn from_iter<I: IntoIterator<Item = KeyName>>(iter: I) -> Self {
        let mut keys = Self::empty();
        for key in iter {
            keys.insert(key);
        }
        keys
    }
}

impl Extend<KeyName> for BypassKeys {
    fn extend<I: IntoIterator<Item = KeyName>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// Configuración mutable del [`KeyboardController`](crate::KeyboardController).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeyboardConfig {
    /// Si es `false`, todas las ocurrencias se descartan sin efecto alguno.
    pub enabled: bool,
    /// Activa el guardián de acciones por defecto.
    pub suppress_default: bool,
    /// Teclas que desactivan la supresión mientras están abajo.
    pub bypass_keys: BypassKeys,
    /// Política para códigos sin nombre.
    pub unknown_keys: UnknownKeys,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            suppress_default: true,
            bypass_keys: BypassKeys::default(),
            unknown_keys: UnknownKeys::default(),
        }
    }
}
