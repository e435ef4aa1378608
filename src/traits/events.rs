use crate::keyboard::{KeyEvent, KeyEventKind};

/// Manejador de notificaciones de teclado.
///
/// Recibe el registro del evento **por referencia** durante el turno de
/// despacho; el préstamo impide conservarlo más allá de ese turno.
///
/// No exige `Send`: un manejador puede capturar `Rc<RefCell<_>>` u objetos del
/// host que solo viven en su hilo.
pub type Handler<E> = Box<dyn FnMut(&KeyEvent<'_, E>)>;

/// Variante `Send` de [`Handler`], para buses que cruzan hilos
/// (ver [`sync`](crate::sync)).
pub type SendHandler<E> = Box<dyn FnMut(&KeyEvent<'_, E>) + Send>;

/// Forma almacenada de un manejador: algo que se puede invocar con un
/// [`KeyEvent`].
pub trait HandlerSlot<E> {
    fn call(&mut self, event: &KeyEvent<'_, E>);
}

impl<E> HandlerSlot<E> for Handler<E> {
    fn call(&mut self, event: &KeyEvent<'_, E>) {
        (self)(event)
    }
}

impl<E> HandlerSlot<E> for SendHandler<E> {
    fn call(&mut self, event: &KeyEvent<'_, E>) {
        (self)(event)
    }
}

/// Conversión de un cierre en la forma de manejador `H` que guarda un bus.
///
/// Está implementado para todo cierre `'static` hacia [`Handler`], y para los
/// cierres `Send` hacia [`SendHandler`].
pub trait IntoHandler<H> {
    fn into_handler(self) -> H;
}

impl<E, F> IntoHandler<Handler<E>> for F
where
    F: FnMut(&KeyEvent<'_, E>) + 'static,
{
    fn into_handler(self) -> Handler<E> {
        Box::new(self)
    }
}

impl<E, F> IntoHandler<SendHandler<E>> for F
where
    F: FnMut(&KeyEvent<'_, E>) + Send + 'static,
{
    fn into_handler(self) -> SendHandler<E> {
        Box::new(self)
    }
}

/// Identificador devuelto por [`NotificationBus::on`], usado para cancelar la
/// suscripción con [`NotificationBus::off`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Para buses propios: cada implementación decide cómo numera.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

/// # Trait `NotificationBus`
///
/// Capacidad genérica de publicación/suscripción que el
/// [`KeyboardController`](crate::KeyboardController) **compone** para publicar
/// `keydown` y `keyup`.
///
/// El crate trae una implementación en proceso,
/// [`Emitter`](crate::keyboard::Emitter), pero un motor puede enchufar su propio
/// bus (por ejemplo, uno que reenvíe a su sistema de eventos global) mediante
/// [`KeyboardController::with_bus`](crate::KeyboardController::with_bus).
///
/// ## Contrato
/// - `trigger` entrega el evento **de forma síncrona**, a todos los manejadores
///   suscritos a `event.kind`, en orden de suscripción.
/// - Un manejador no puede volver a entrar en el controlador: este está
///   prestado mutablemente mientras dura el despacho.
///
/// ## Parámetros genéricos
/// - `E`: tipo de la ocurrencia cruda del host (ver
///   [`KeyOccurrence`](crate::KeyOccurrence)).
/// - `Handler` (asociado): cómo guarda el bus sus manejadores. Normalmente
///   [`Handler<E>`]; un bus que deba ser `Send` usa [`SendHandler<E>`].
pub trait NotificationBus<E> {
    type Handler;

    /// Suscribe `handler` a las notificaciones de tipo `kind`.
    fn on(&mut self, kind: KeyEventKind, handler: Self::Handler) -> SubscriptionId;

    /// Cancela una suscripción. Retorna `false` si el id no existía.
    fn off(&mut self, id: SubscriptionId) -> bool;

    /// Publica `event` a los suscriptores de `event.kind`.
    fn trigger(&mut self, event: &KeyEvent<'_, E>);
}
