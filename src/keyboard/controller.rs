use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::keyboard::{
    BypassKeys, DefaultActionGuard, Emitter, KeyCodeTable, KeyEvent, KeyEventKind, KeyName,
    KeyStateStore, KeyboardConfig, UnknownKeys,
};
use crate::traits::{
    FocusScope, IntoHandler, KeyNameResolver, KeyOccurrence, KeyStateExt, NotificationBus,
    RootFocus, SubscriptionId,
};

/// # `KeyboardController`
///
/// Orquesta el teclado: recibe las ocurrencias crudas del host, resuelve su
/// nombre, aplica la detección de flancos sobre el [`KeyStateStore`], publica
/// `keydown` / `keyup` en el bus y, para las pulsaciones, consulta al
/// [`DefaultActionGuard`].
///
/// ## Máquina de estados (por tecla)
///
/// ```text
///            keydown (publica)
///   ┌────┐ ─────────────────→ ┌──────┐ ── keydown (repetición, ignorada)
///   │ UP │                    │ DOWN │ ←┘
///   └────┘ ←───────────────── └──────┘
///     ↑ └─ keyup (publica)     keyup (publica)
///     └──┘
/// ```
///
/// - `keydown` es **edge-triggered**: solo la transición UP → DOWN publica, así
///   la auto-repetición del sistema operativo colapsa en una sola pulsación.
/// - `keyup` publica **siempre** y deja la tecla en UP, aunque no hubiera un
///   `keydown` previo: una liberación perdida nunca deja una tecla atascada.
///
/// Dentro de una ocurrencia el orden es siempre: mutación de estado →
/// publicación → decisión de supresión.
///
/// ## Parámetros genéricos
/// - `E`: ocurrencia cruda del host ([`KeyOccurrence`]).
/// - `B`: bus de notificaciones; por defecto [`Emitter<E>`].
/// - `R`: resolver de códigos; por defecto [`KeyCodeTable`].
/// - `F`: predicado de foco; por defecto [`RootFocus`].
///
/// Ninguno tiene que ser `Send`: un host de un solo hilo puede suscribir
/// cierres que capturen `Rc<RefCell<_>>`. El controlador es `Send` solo cuando
/// lo son sus componentes (ver [`sync`](crate::sync)).
///
/// ## Reentrada
/// Los manejadores reciben solo `&KeyEvent`; el controlador está prestado
/// mutablemente durante todo el despacho, por lo que un manejador **no puede**
/// volver a entrar en él. Si el controlador vive en un
/// [`SharedKeyboard`](crate::sync::SharedKeyboard), bloquearlo desde un
/// manejador es un *deadlock*.
///
/// ## Ejemplo
/// ```rust
/// use orbit_keyboard::{KeyEventKind, KeyName, KeyboardController, SyntheticKeyEvent};
///
/// let mut keyboard: KeyboardController<SyntheticKeyEvent> = KeyboardController::new();
/// keyboard.on(KeyEventKind::KeyDown, |event| {
///     println!("pulsada: {}", event.key);
/// });
///
/// let mut press = SyntheticKeyEvent::from_key(KeyName::LEFT);
/// keyboard.keydown(&mut press);
/// keyboard.keydown(&mut press); // auto-repetición: no publica
///
/// assert!(keyboard.is_pressed(KeyName::LEFT));
/// assert_eq!(keyboard.last_keydown(), Some(KeyName::LEFT));
/// ```
pub struct KeyboardController<E, B = Emitter<E>, R = KeyCodeTable, F = RootFocus> {
    config: KeyboardConfig,
    keys: KeyStateStore,
    guard: DefaultActionGuard<F>,
    resolver: R,
    bus: B,
    last_keydown: Option<KeyName>,
    last_keyup: Option<KeyName>,
    _occurrence: PhantomData<fn(&mut E)>,
}

impl<E> KeyboardController<E>
where
    E: KeyOccurrence,
{
    /// Controlador con la configuración por defecto, la tabla de códigos de
    /// navegador, foco siempre en la raíz y el [`Emitter`] como bus.
    pub fn new() -> Self {
        Self::with_bus(Emitter::new())
    }
}

impl<E> Default for KeyboardController<E>
where
    E: KeyOccurrence,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, B> KeyboardController<E, B>
where
    E: KeyOccurrence,
    B: NotificationBus<E>,
{
    /// Compone el controlador con un bus propio.
    pub fn with_bus(bus: B) -> Self {
        Self {
            config: KeyboardConfig::default(),
            keys: KeyStateStore::new(),
            guard: DefaultActionGuard::default(),
            resolver: KeyCodeTable,
            bus,
            last_keydown: None,
            last_keyup: None,
            _occurrence: PhantomData,
        }
    }
}

impl<E, B, R, F> KeyboardController<E, B, R, F>
where
    E: KeyOccurrence,
    B: NotificationBus<E>,
    R: KeyNameResolver,
    F: FocusScope,
{
    pub fn with_config(mut self, config: KeyboardConfig) -> Self {
        self.config = config;
        self
    }

    /// Sustituye la tabla de códigos por defecto.
    pub fn with_resolver<R2>(self, resolver: R2) -> KeyboardController<E, B, R2, F>
    where
        R2: KeyNameResolver,
    {
        KeyboardController {
            config: self.config,
            keys: self.keys,
            guard: self.guard,
            resolver,
            bus: self.bus,
            last_keydown: self.last_keydown,
            last_keyup: self.last_keyup,
            _occurrence: PhantomData,
        }
    }

    /// Predicado del host que indica si la superficie raíz tiene el foco.
    pub fn with_focus<F2>(self, focus: F2) -> KeyboardController<E, B, R, F2>
    where
        F2: FocusScope,
    {
        KeyboardController {
            config: self.config,
            keys: self.keys,
            guard: DefaultActionGuard::new(focus),
            resolver: self.resolver,
            bus: self.bus,
            last_keydown: self.last_keydown,
            last_keyup: self.last_keyup,
            _occurrence: PhantomData,
        }
    }

    // ==================== OCURRENCIAS ====================

    /// Procesa una pulsación cruda del host.
    pub fn keydown(&mut self, occurrence: &mut E) {
        if !self.config.enabled {
            trace!(code = occurrence.code(), "keyboard disabled, keydown dropped");
            return;
        }
        let Some(key) = self.resolve(occurrence.code()) else {
            return;
        };
        if self.keys.is_pressed(key) {
            trace!(%key, "key repeat ignored");
            return;
        }

        self.keys.set_pressed(key, true);
        self.last_keydown = Some(key);
        debug!(%key, "keydown");
        self.bus
            .trigger(&KeyEvent::new(KeyEventKind::KeyDown, key, &*occurrence));

        if self.config.suppress_default
            && self
                .guard
                .apply(occurrence, key, &self.keys, &self.config.bypass_keys)
        {
            debug!(%key, "default action suppressed");
        }
    }

    /// Procesa una liberación cruda del host.
    pub fn keyup(&mut self, occurrence: &mut E) {
        if !self.config.enabled {
            trace!(code = occurrence.code(), "keyboard disabled, keyup dropped");
            return;
        }
        let Some(key) = self.resolve(occurrence.code()) else {
            return;
        };

        self.keys.set_pressed(key, false);
        self.last_keyup = Some(key);
        debug!(%key, "keyup");
        self.bus
            .trigger(&KeyEvent::new(KeyEventKind::KeyUp, key, &*occurrence));
    }

    /// Acepta una ocurrencia `keypress` sin cambiar estado ni publicar nada.
    ///
    /// Reservado para entrada de texto.
    pub fn keypress(&mut self, occurrence: &mut E) {
        trace!(code = occurrence.code(), "keypress ignored");
    }

    fn resolve(&self, code: u32) -> Option<KeyName> {
        let key = self.resolver.key_name(code);
        if key.is_unknown() && self.config.unknown_keys == UnknownKeys::Ignore {
            debug!(code, "unmapped key code dropped");
            return None;
        }
        Some(key)
    }

    // ==================== SUSCRIPCIONES ====================

    /// Suscribe `handler` a `kind` en el bus compuesto.
    ///
    /// Con el [`Emitter`] por defecto vale cualquier cierre `'static`; con un
    /// [`SendEmitter`](crate::keyboard::SendEmitter) el cierre debe ser `Send`.
    pub fn on<H>(&mut self, kind: KeyEventKind, handler: H) -> SubscriptionId
    where
        H: FnMut(&KeyEvent<'_, E>) + IntoHandler<B::Handler>,
    {
        self.bus.on(kind, handler.into_handler())
    }

    pub fn off(&mut self, id: SubscriptionId) -> bool {
        self.bus.off(id)
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}

impl<E, B, R, F> KeyboardController<E, B, R, F> {
    // ==================== ESTADO ====================

    /// Vista de solo lectura del estado vivo, para consumidores que sondean.
    pub fn keys(&self) -> &KeyStateStore {
        &self.keys
    }

    pub fn is_pressed(&self, key: KeyName) -> bool {
        self.keys.is_pressed(key)
    }

    /// Suelta todas las teclas **sin publicar** `keyup`.
    ///
    /// Pensado para cuando el host pierde el foco a mitad de una pulsación.
    pub fn release_all(&mut self) {
        self.keys.release_all();
    }

    /// Nombre de la última tecla publicada en `keydown`.
    pub fn last_keydown(&self) -> Option<KeyName> {
        self.last_keydown
    }

    /// Nombre de la última tecla publicada en `keyup`.
    pub fn last_keyup(&self) -> Option<KeyName> {
        self.last_keyup
    }

    // ==================== CONFIGURACIÓN ====================

    pub fn config(&self) -> &KeyboardConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut KeyboardConfig {
        &mut self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn suppresses_default(&self) -> bool {
        self.config.suppress_default
    }

    pub fn set_suppress_default(&mut self, suppress: bool) {
        self.config.suppress_default = suppress;
    }

    pub fn bypass_keys(&self) -> &BypassKeys {
        &self.config.bypass_keys
    }

    pub fn bypass_keys_mut(&mut self) -> &mut BypassKeys {
        &mut self.config.bypass_keys
    }
}

impl<E, B: fmt::Debug, R, F> fmt::Debug for KeyboardController<E, B, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardController")
            .field("config", &self.config)
            .field("keys", &self.keys)
            .field("guard", &self.guard)
            .field("bus", &self.bus)
            .field("last_keydown", &self.last_keydown)
            .field("last_keyup", &self.last_keyup)
            .finish_non_exhaustive()
    }
}
