use std::fmt;
use std::marker::PhantomData;

use crate::keyboard::{KeyEvent, KeyEventKind};
use crate::traits::{Handler, HandlerSlot, NotificationBus, SendHandler, SubscriptionId};

struct Subscription<H> {
    id: SubscriptionId,
    kind: KeyEventKind,
    handler: H,
}

/// Bus de notificaciones en proceso, usado por defecto por el controlador.
///
/// Los manejadores se ejecutan de forma síncrona, en orden de suscripción.
/// `H` es la forma en que se guardan: [`Handler<E>`] por defecto (sin `Send`),
/// o [`SendHandler<E>`] en un [`SendEmitter`].
pub struct Emitter<E, H = Handler<E>> {
    subscriptions: Vec<Subscription<H>>,
    next_id: u64,
    _event: PhantomData<fn(&E)>,
}

/// Emitter cuyos manejadores son `Send`, para controladores compartidos entre
/// hilos.
pub type SendEmitter<E> = Emitter<E, SendHandler<E>>;

impl<E, H> Emitter<E, H> {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            next_id: 0,
            _event: PhantomData,
        }
    }

    /// Número de manejadores suscritos a `kind`.
    pub fn listener_count(&self, kind: KeyEventKind) -> usize {
        self.subscriptions.iter().filter(|s| s.kind == kind).count()
    }
}

impl<E, H> Default for Emitter<E, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, H> NotificationBus<E> for Emitter<E, H>
where
    H: HandlerSlot<E>,
{
    type Handler = H;

    fn on(&mut self, kind: KeyEventKind, handler: H) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, kind, handler });
        id
    }

    fn off(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    fn trigger(&mut self, event: &KeyEvent<'_, E>) {
        for subscription in self.subscriptions.iter_mut().filter(|s| s.kind == event.kind) {
            subscription.handler.call(event);
        }
    }
}

impl<E, H> fmt::Debug for Emitter<E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("keydown", &self.listener_count(KeyEventKind::KeyDown))
            .field("keyup", &self.listener_count(KeyEventKind::KeyUp))
            .finish()
    }
}
