//! Errores del crate.
//!
//! El procesamiento de eventos de teclado **nunca falla**: códigos desconocidos,
//! teclas repetidas o un controlador deshabilitado se resuelven en silencio.
//! Los únicos caminos falibles son los de *parsing* (nombres de tecla, tipos de
//! evento y valores de configuración cargados desde fuera).

/// Error devuelto por las operaciones falibles de `orbit_keyboard`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyboardError {
    /// El texto no corresponde a ningún nombre de tecla conocido.
    #[error("unknown key name: `{0}`")]
    UnknownKeyName(String),

    /// El texto no es `keydown` ni `keyup`.
    #[error("unknown keyboard event kind: `{0}`")]
    UnknownEventKind(String),
}

/// Alias de `Result` con [`KeyboardError`] como error.
pub type Result<T> = std::result::Result<T, KeyboardError>;
