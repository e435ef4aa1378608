//! Este módulo define el contrato para **traducir códigos de tecla nativos**
//! del host a nombres semánticos ([`KeyName`]).
//!
//! El resolver por defecto es [`KeyCodeTable`](crate::keyboard::KeyCodeTable),
//! que sigue la convención clásica de *key codes* de los navegadores
//! (ASCII directo para letras y dígitos, tabla fija para el resto).
//!
//! # Ejemplo: resolver personalizado
//! ```rust
//! use orbit_keyboard::{KeyName, KeyNameResolver};
//!
//! /// Un mando arcade que solo reporta cuatro botones.
//! struct ArcadePanel;
//!
//! impl KeyNameResolver for ArcadePanel {
//!     fn key_name(&self, code: u32) -> KeyName {
//!         match code {
//!             1 => KeyName::from_static("left"),
//!             2 => KeyName::from_static("right"),
//!             3 => KeyName::from_static("space"),
//!             _ => KeyName::UNKNOWN,
//!         }
//!     }
//! }
//!
//! assert_eq!(ArcadePanel.key_name(3).as_str(), "space");
//! assert_eq!(ArcadePanel.key_name(9), KeyName::UNKNOWN);
//! ```

use crate::keyboard::KeyName;

/// El trait [`KeyNameResolver`] convierte un código numérico del backend en un
/// [`KeyName`].
///
/// # Reglas de implementación
/// - La conversión debe ser **pura y total**: mismo código, mismo nombre,
///   sin estado interno ni pánicos.
/// - Los códigos sin nombre deben devolver [`KeyName::UNKNOWN`]; es el
///   controlador quien decide qué hacer con ellos.
/// - No debe realizar asignaciones dinámicas.
///
/// Cualquier `Fn(u32) -> KeyName` implementa el trait, así que un host puede
/// pasar un cierre directamente a
/// [`KeyboardController::with_resolver`](crate::KeyboardController::with_resolver).
pub trait KeyNameResolver {
    /// Devuelve el nombre semántico para `code`, o [`KeyName::UNKNOWN`].
    fn key_name(&self, code: u32) -> KeyName;
}

impl<F> KeyNameResolver for F
where
    F: Fn(u32) -> KeyName,
{
    fn key_name(&self, code: u32) -> KeyName {
        self(code)
    }
}
