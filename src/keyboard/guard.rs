use std::fmt;

use tracing::trace;

use crate::keyboard::{BypassKeys, KeyName};
use crate::traits::{FocusScope, KeyOccurrence, KeyStateExt, RootFocus};

/// Política que decide si se suprime el manejo por defecto del host para una
/// pulsación ya aceptada por el controlador.
///
/// # Reglas (en orden)
/// 1. Solo se suprime si la superficie raíz tiene el foco ([`FocusScope`]);
///    así no se rompe la escritura en campos de texto del documento host.
/// 2. Nunca se suprime con el modificador *meta* pulsado (atajos del sistema).
/// 3. Nunca se suprime si alguna tecla abajo está en las [`BypassKeys`],
///    incluida la propia tecla recién pulsada.
/// 4. En cualquier otro caso, se suprime.
///
/// `F` es el predicado de foco del host; por defecto [`RootFocus`].
pub struct DefaultActionGuard<F = RootFocus> {
    focus: F,
}

impl<F> DefaultActionGuard<F>
where
    F: FocusScope,
{
    pub fn new(focus: F) -> Self {
        Self { focus }
    }

    /// Decisión pura: no toca la ocurrencia.
    pub fn should_suppress<E, S>(
        &self,
        occurrence: &E,
        key: KeyName,
        keys: &S,
        bypass: &BypassKeys,
    ) -> bool
    where
        E: KeyOccurrence,
        S: KeyStateExt,
    {
        if !self.focus.root_has_focus() {
            trace!(%key, "root surface not focused, default action kept");
            return false;
        }
        if occurrence.meta_key() {
            trace!(%key, "meta modifier held, default action kept");
            return false;
        }
        if let Some(held) = bypass.iter().find(|k| keys.is_pressed(*k)) {
            trace!(%key, bypass = %held, "bypass key held, default action kept");
            return false;
        }
        true
    }

    /// Evalúa [`should_suppress`](Self::should_suppress) y, si procede, pide al
    /// host que cancele el manejo por defecto y detenga la propagación.
    ///
    /// Retorna `true` si la ocurrencia fue suprimida.
    pub fn apply<E, S>(&self, occurrence: &mut E, key: KeyName, keys: &S, bypass: &BypassKeys) -> bool
    where
        E: KeyOccurrence,
        S: KeyStateExt,
    {
        if !self.should_suppress(occurrence, key, keys, bypass) {
            return false;
        }
        occurrence.prevent_default();
        occurrence.stop_propagation();
        true
    }
}

impl Default for DefaultActionGuard {
    fn default() -> Self {
        Self::new(RootFocus)
    }
}

/// No consulta el foco: formatear nunca invoca al host.
impl<F> fmt::Debug for DefaultActionGuard<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultActionGuard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::keyboard::{KeyStateStore, SyntheticKeyEvent};

    fn held(keys: &[KeyName]) -> KeyStateStore {
        let mut store = KeyStateStore::new();
        for key in keys {
            store.set_pressed(*key, true);
        }
        store
    }

    #[test]
    fn test_suppresses_plain_gameplay_key() {
        let guard = DefaultActionGuard::new(RootFocus);
        let mut event = SyntheticKeyEvent::from_key(KeyName::F1);
        let keys = held(&[KeyName::F1]);

        assert!(guard.apply(&mut event, KeyName::F1, &keys, &BypassKeys::default()));
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }

    #[test]
    fn test_held_bypass_key_keeps_default() {
        let guard = DefaultActionGuard::new(RootFocus);
        let event = SyntheticKeyEvent::from_key(KeyName::F1);
        let keys = held(&[KeyName::SHIFT, KeyName::F1]);

        assert!(!guard.should_suppress(&event, KeyName::F1, &keys, &BypassKeys::default()));
    }

    #[test]
    fn test_bypass_key_itself_is_not_suppressed() {
        let guard = DefaultActionGuard::new(RootFocus);
        let event = SyntheticKeyEvent::from_key(KeyName::F5);
        let keys = held(&[KeyName::F5]);

        assert!(!guard.should_suppress(&event, KeyName::F5, &keys, &BypassKeys::default()));
    }

    #[test]
    fn test_released_bypass_key_does_not_count() {
        let guard = DefaultActionGuard::new(RootFocus);
        let event = SyntheticKeyEvent::from_key(KeyName::F1);
        let mut keys = held(&[KeyName::SHIFT, KeyName::F1]);
        keys.set_pressed(KeyName::SHIFT, false);

        assert!(guard.should_suppress(&event, KeyName::F1, &keys, &BypassKeys::default()));
    }

    #[test]
    fn test_meta_modifier_keeps_default() {
        let guard = DefaultActionGuard::new(RootFocus);
        let mut event = SyntheticKeyEvent::from_key(KeyName::F1).with_meta(true);
        let keys = held(&[KeyName::F1]);

        assert!(!guard.apply(&mut event, KeyName::F1, &keys, &BypassKeys::empty()));
        assert!(!event.default_prevented());
        assert!(!event.propagation_stopped());
    }

    #[test]
    fn test_unfocused_root_keeps_default() {
        let focused = Rc::new(Cell::new(false));
        let scope = Rc::clone(&focused);
        let guard = DefaultActionGuard::new(move || scope.get());
        let event = SyntheticKeyEvent::from_key(KeyName::SPACE);
        let keys = held(&[KeyName::SPACE]);

        assert!(!guard.should_suppress(&event, KeyName::SPACE, &keys, &BypassKeys::empty()));

        focused.set(true);
        assert!(guard.should_suppress(&event, KeyName::SPACE, &keys, &BypassKeys::empty()));
    }

    #[test]
    fn test_debug_does_not_query_focus() {
        let queries = Rc::new(Cell::new(0));
        let counter = Rc::clone(&queries);
        let guard = DefaultActionGuard::new(move || {
            counter.set(counter.get() + 1);
            true
        });

        assert_eq!(format!("{guard:?}"), "DefaultActionGuard { .. }");
        assert_eq!(queries.get(), 0);
    }
}
