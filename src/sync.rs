//! Controlador compartido entre hilos.
//!
//! El controlador en sí es de un solo hilo y reactivo. Cuando los callbacks del
//! host viven en otro hilo que el game loop, ambos pueden compartirlo a través
//! de un [`SharedKeyboard`].
//!
//! Compartir exige que **todos** los componentes sean `Send`: el bus (usa un
//! [`SendEmitter`], cuyos manejadores son `Send`), el resolver y el predicado
//! de foco. [`shared`] lo comprueba al compilar. Un host de un solo hilo (por
//! ejemplo, un navegador) no necesita este módulo: le basta con
//! `Rc<RefCell<KeyboardController<_>>>`.
//!
//! El mecanismo de bloqueo se elige por feature:
//! - `std_lock` (por defecto): `std::sync::Mutex`. Un lock envenenado se
//!   recupera, porque el estado del teclado sigue siendo coherente.
//! - `parking_lot`: `parking_lot::Mutex`. Tiene prioridad si ambos están
//!   activos.
//!
//! Sin ninguno de los dos, el módulo no existe.
//!
//! ```rust
//! use orbit_keyboard::sync::{shared, with_keyboard};
//! use orbit_keyboard::{KeyName, KeyboardController, SendEmitter, SyntheticKeyEvent};
//!
//! let keyboard = shared(KeyboardController::<SyntheticKeyEvent, _>::with_bus(
//!     SendEmitter::new(),
//! ));
//!
//! let host = keyboard.clone();
//! std::thread::spawn(move || {
//!     with_keyboard(&host, |k| k.keydown(&mut SyntheticKeyEvent::from_key(KeyName::UP)));
//! })
//! .join()
//! .unwrap();
//!
//! assert!(with_keyboard(&keyboard, |k| k.is_pressed(KeyName::UP)));
//! ```
//!
//! **Nunca** llames a [`with_keyboard`] desde un manejador de notificaciones del
//! mismo controlador: el lock ya está tomado y el hilo se bloquea.

use std::sync::Arc;

use crate::keyboard::{KeyCodeTable, KeyboardController, SendEmitter};
use crate::traits::RootFocus;

#[cfg(feature = "parking_lot")]
pub type Lock<T> = parking_lot::Mutex<T>;

#[cfg(all(feature = "std_lock", not(feature = "parking_lot")))]
pub type Lock<T> = std::sync::Mutex<T>;

/// Controlador compartido: `Arc<Lock<KeyboardController<E, B, R, F>>>`.
pub type SharedKeyboard<E, B = SendEmitter<E>, R = KeyCodeTable, F = RootFocus> =
    Arc<Lock<KeyboardController<E, B, R, F>>>;

/// Envuelve un controlador para compartirlo entre hilos.
pub fn shared<E, B, R, F>(keyboard: KeyboardController<E, B, R, F>) -> SharedKeyboard<E, B, R, F>
where
    B: Send,
    R: Send,
    F: Send,
{
    Arc::new(Lock::new(keyboard))
}

/// Ejecuta `f` con acceso exclusivo al controlador compartido.
#[cfg(all(feature = "std_lock", not(feature = "parking_lot")))]
pub fn with_keyboard<E, B, R, F, T>(
    keyboard: &SharedKeyboard<E, B, R, F>,
    f: impl FnOnce(&mut KeyboardController<E, B, R, F>) -> T,
) -> T {
    let mut guard = keyboard
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    f(&mut *guard)
}

/// Ejecuta `f` con acceso exclusivo al controlador compartido.
#[cfg(feature = "parking_lot")]
pub fn with_keyboard<E, B, R, F, T>(
    keyboard: &SharedKeyboard<E, B, R, F>,
    f: impl FnOnce(&mut KeyboardController<E, B, R, F>) -> T,
) -> T {
    f(&mut *keyboard.lock())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;

    use super::*;
    use crate::keyboard::{KeyEventKind, KeyName, SyntheticKeyEvent};
    use crate::traits::KeyStateExt;

    fn send_keyboard() -> KeyboardController<SyntheticKeyEvent, SendEmitter<SyntheticKeyEvent>> {
        KeyboardController::with_bus(SendEmitter::new())
    }

    #[test]
    fn test_shared_keyboard_across_threads() {
        let keyboard = shared(send_keyboard());
        let (tx, rx) = std::sync::mpsc::channel();
        with_keyboard(&keyboard, |k| {
            k.on(KeyEventKind::KeyDown, move |event| {
                let _ = tx.send(event.key);
            })
        });

        let handles: Vec<_> = [KeyName::LEFT, KeyName::RIGHT, KeyName::UP]
            .into_iter()
            .map(|key| {
                let host = Arc::clone(&keyboard);
                thread::spawn(move || {
                    with_keyboard(&host, |k| k.keydown(&mut SyntheticKeyEvent::from_key(key)));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut seen: Vec<KeyName> = rx.try_iter().collect();
        seen.sort();
        assert_eq!(seen, vec![KeyName::LEFT, KeyName::RIGHT, KeyName::UP]);
        assert_eq!(
            with_keyboard(&keyboard, |k| k.keys().pressed_keys()),
            vec![KeyName::LEFT, KeyName::RIGHT, KeyName::UP]
        );
    }

    #[cfg(all(feature = "std_lock", not(feature = "parking_lot")))]
    #[test]
    fn test_std_lock_selects_std_mutex() {
        let lock: std::sync::Mutex<u8> = Lock::new(7);
        assert_eq!(*lock.lock().unwrap(), 7);
    }

    #[test]
    fn test_shared_keyboard_with_send_focus() {
        let focused = Arc::new(AtomicBool::new(false));
        let scope = Arc::clone(&focused);
        let keyboard = shared(send_keyboard().with_focus(move || scope.load(Ordering::SeqCst)));

        let mut space = SyntheticKeyEvent::from_key(KeyName::SPACE);
        with_keyboard(&keyboard, |k| k.keydown(&mut space));
        assert!(!space.default_prevented());

        focused.store(true, Ordering::SeqCst);
        let mut up = SyntheticKeyEvent::from_key(KeyName::UP);
        with_keyboard(&keyboard, |k| k.keydown(&mut up));
        assert!(up.default_prevented());
    }
}
