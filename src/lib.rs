//! # Crate `orbit_keyboard`
//!
//! **Capa de teclado** para juegos de Orbit Engine que corren dentro de un
//! runtime de UI anfitrión (navegador, ventana nativa, editor embebido).
//!
//! El crate toma las ocurrencias crudas de teclado del host y las convierte en
//! algo con lo que un game loop puede trabajar:
//!
//! - **Nombres estables**: el código numérico `37` pasa a ser `"left"`, el `65`
//!   pasa a ser `"a"`.
//! - **Estado vivo**: `is_pressed("left")` responde en cualquier momento.
//! - **Notificaciones por flanco**: `keydown` se publica una sola vez por
//!   pulsación, aunque el sistema operativo repita la tecla.
//! - **Supresión selectiva**: las teclas de juego no hacen *scroll* ni disparan
//!   atajos del host, pero los atajos del sistema siguen funcionando.
//!
//! ---
//!
//! ## Flujo de datos
//!
//! ```text
//! ocurrencia cruda ──→ KeyNameResolver ──→ KeyboardController ──→ NotificationBus
//!                                            │        ↑               (keydown/keyup)
//!                                            ↓        │
//!                                        KeyStateStore │
//!                                                      └──→ DefaultActionGuard
//!                                                           (prevent_default)
//! ```
//!
//! ---
//!
//! ## Ejemplo: integración básica
//!
//! ```rust
//! use orbit_keyboard::{KeyEventKind, KeyName, KeyboardController, SyntheticKeyEvent};
//!
//! let mut keyboard: KeyboardController<SyntheticKeyEvent> = KeyboardController::new();
//!
//! // Estilo suscripción
//! keyboard.on(KeyEventKind::KeyDown, |event| {
//!     if event.key == KeyName::SPACE {
//!         println!("¡salto!");
//!     }
//! });
//!
//! // El host entrega sus eventos
//! let mut press = SyntheticKeyEvent::from_key(KeyName::SPACE);
//! keyboard.keydown(&mut press);
//!
//! // Estilo sondeo, desde el game loop
//! assert!(keyboard.is_pressed(KeyName::SPACE));
//!
//! // `space` no está en las teclas de bypass: el host no hará scroll
//! assert!(press.default_prevented());
//! ```
//!
//! ## Ejemplo: host web (conceptual)
//!
//! El navegador es de un solo hilo: el controlador vive en un
//! `Rc<RefCell<_>>` y los manejadores pueden capturar objetos de `web_sys`.
//!
//! ```rust,ignore
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use orbit_keyboard::{KeyOccurrence, KeyboardController};
//! use wasm_bindgen::prelude::*;
//!
//! /// Ocurrencia del DOM: es dueña del handle del evento.
//! struct DomKey(web_sys::KeyboardEvent);
//!
//! impl KeyOccurrence for DomKey {
//!     fn code(&self) -> u32 {
//!         self.0.which()
//!     }
//!     fn meta_key(&self) -> bool {
//!         self.0.meta_key()
//!     }
//!     fn prevent_default(&mut self) {
//!         self.0.prevent_default();
//!     }
//!     fn stop_propagation(&mut self) {
//!         self.0.stop_propagation();
//!     }
//! }
//!
//! let document = web_sys::window().unwrap().document().unwrap();
//! let focus_doc = document.clone();
//! let keyboard = Rc::new(RefCell::new(KeyboardController::<DomKey>::new().with_focus(
//!     move || focus_doc.active_element() == focus_doc.body().map(Into::into),
//! )));
//!
//! let on_keydown = {
//!     let keyboard = Rc::clone(&keyboard);
//!     Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |e| {
//!         keyboard.borrow_mut().keydown(&mut DomKey(e));
//!     })
//! };
//! document
//!     .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
//!     .unwrap();
//! on_keydown.forget();
//! // keyup y keypress se registran igual.
//! ```
//!
//! ---
//!
//! ## Contenido del crate
//!
//! ### Traits del protocolo ([`traits`])
//! - [`KeyNameResolver`]: código nativo → [`KeyName`]
//! - [`KeyStateExt`]: consulta y actualización del estado vivo
//! - [`KeyOccurrence`]: ocurrencia cruda del host
//! - [`FocusScope`]: ¿tiene el foco la superficie raíz?
//! - [`NotificationBus`]: publicación/suscripción de `keydown` / `keyup`
//!
//! ### Implementación ([`keyboard`])
//! - [`KeyboardController`]: orquestador
//! - [`KeyStateStore`], [`DefaultActionGuard`], [`Emitter`], [`KeyCodeTable`]
//! - [`KeyboardConfig`], [`BypassKeys`], [`UnknownKeys`]
//! - [`SyntheticKeyEvent`]
//!
//! ### Compartido (`sync`)
//! - `sync::SharedKeyboard`: `Arc<Lock<KeyboardController>>`, para
//!   componentes `Send` (bus [`SendEmitter`])
//!
//! ---
//!
//! ## Características
//!
//! - 🎯 **Edge-triggered**: la auto-repetición nunca genera pulsaciones fantasma
//! - 🔓 **Nunca atascado**: `keyup` siempre suelta la tecla, haya o no `keydown`
//! - 🛡️ **Atajos protegidos**: *meta*, foco fuera del juego y teclas de bypass
//! - 🔌 **Bus intercambiable**: usa el [`Emitter`] incluido o el bus de tu motor
//! - 🧵 **Un solo hilo sin ataduras**: manejadores, resolver y foco no necesitan `Send`
//! - 📝 **Trazas con `tracing`**: el host decide el *subscriber*
//!
//! ## Features
//!
//! - `std_lock` (por defecto): habilita `sync` con `std::sync::Mutex` como `Lock`
//! - `parking_lot`: habilita `sync` con `parking_lot::Mutex` como `Lock` (tiene
//!   prioridad sobre `std_lock`)
//!
//! Sin `std_lock` ni `parking_lot`, el módulo `sync` no se compila.
//! - `serde` (por defecto): (de)serialización de [`KeyboardConfig`] y [`KeyName`]

pub mod error;
pub mod keyboard;
#[cfg(any(feature = "std_lock", feature = "parking_lot"))]
pub mod sync;
pub mod traits;

pub use error::{KeyboardError, Result};
pub use keyboard::{
    BypassKeys, DefaultActionGuard, Emitter, KeyCodeTable, KeyEvent, KeyEventKind, KeyName,
    KeyStateStore, KeyboardConfig, KeyboardController, SendEmitter, SyntheticKeyEvent, UnknownKeys,
    key_name,
};
pub use traits::{
    FocusScope, Handler, HandlerSlot, IntoHandler, KeyNameResolver, KeyOccurrence, KeyStateExt,
    NotificationBus, RootFocus, SendHandler, SubscriptionId,
};
