//! Implementación concreta del teclado.
//!
//! - [`KeyName`], [`KeyCodeTable`], [`key_name`]: resolución de códigos.
//! - [`KeyStateStore`]: estado vivo de cada tecla.
//! - [`DefaultActionGuard`]: política de supresión de acciones por defecto.
//! - [`KeyboardController`]: orquestación, detección de flancos y publicación.
//! - [`Emitter`], [`SendEmitter`]: bus de notificaciones en proceso.
//! - [`KeyboardConfig`], [`BypassKeys`], [`UnknownKeys`]: configuración.
//! - [`SyntheticKeyEvent`]: ocurrencias construidas en memoria.

mod config;
mod controller;
mod emitter;
mod event;
mod guard;
mod key_name;
mod store;
mod synthetic;

pub use config::{BypassKeys, KeyboardConfig, UnknownKeys};
pub use controller::KeyboardController;
pub use emitter::{Emitter, SendEmitter};
pub use event::{KeyEvent, KeyEventKind};
pub use guard::DefaultActionGuard;
pub use key_name::{KeyCodeTable, KeyName, key_name};
pub use store::KeyStateStore;
pub use synthetic::SyntheticKeyEvent;
