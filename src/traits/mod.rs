//! Traits del protocolo de teclado.
//!
//! - [`keys`]: resolución de códigos nativos a nombres de tecla.
//! - [`state`]: consulta y actualización del estado vivo.
//! - [`host`]: ocurrencias crudas del host y ámbito de foco.
//! - [`events`]: bus de notificaciones `keydown` / `keyup`.

pub mod events;
pub mod host;
pub mod keys;
pub mod state;

pub use events::{
    Handler, HandlerSlot, IntoHandler, NotificationBus, SendHandler, SubscriptionId,
};
pub use host::{FocusScope, KeyOccurrence, RootFocus};
pub use keys::KeyNameResolver;
pub use state::KeyStateExt;
