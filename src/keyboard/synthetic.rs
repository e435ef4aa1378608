use crate::keyboard::{KeyCodeTable, KeyName};
use crate::traits::KeyOccurrence;

/// Ocurrencia de teclado construida en memoria.
///
/// Sirve para hosts sin eventos nativos (teclados virtuales, reproducción de
/// partidas, servidores *headless*) y para tests. Registra si se pidió cancelar
/// el manejo por defecto o detener la propagación.
///
/// ```rust
/// use orbit_keyboard::{KeyName, KeyboardController, SyntheticKeyEvent};
///
/// let mut keyboard: KeyboardController<SyntheticKeyEvent> = KeyboardController::new();
/// let mut press = SyntheticKeyEvent::from_key(KeyName::SPACE);
/// keyboard.keydown(&mut press);
///
/// assert!(keyboard.is_pressed(KeyName::SPACE));
/// assert!(press.default_prevented());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyntheticKeyEvent {
    code: u32,
    meta: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl SyntheticKeyEvent {
    pub fn new(code: u32) -> Self {
        Self {
            code,
            ..Self::default()
        }
    }

    /// Construye la ocurrencia a partir de un nombre de la tabla por defecto.
    ///
    /// Los nombres sin código (incluido [`KeyName::UNKNOWN`]) producen el
    /// código `0`, que resuelve a `unknown`.
    pub fn from_key(key: KeyName) -> Self {
        Self::new(KeyCodeTable::code_of(key).unwrap_or(0))
    }

    pub fn with_meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

impl KeyOccurrence for SyntheticKeyEvent {
    fn code(&self) -> u32 {
        self.code
    }

    fn meta_key(&self) -> bool {
        self.meta
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::key_name;

    #[test]
    fn test_from_key_round_trips_through_the_table() {
        let event = SyntheticKeyEvent::from_key(KeyName::LEFT);
        assert_eq!(event.code(), 37);
        assert_eq!(key_name(event.code()), KeyName::LEFT);
        assert_eq!(SyntheticKeyEvent::from_key(KeyName::UNKNOWN).code(), 0);
    }

    #[test]
    fn test_records_suppression_requests() {
        let mut event = SyntheticKeyEvent::new(65).with_meta(true);
        assert!(event.meta_key());
        assert!(!event.default_prevented());

        event.prevent_default();
        event.stop_propagation();
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }
}
