/// # Trait `KeyOccurrence`
///
/// Representa **una ocurrencia cruda** de teclado entregada por el host
/// (navegador, ventana nativa, simulador...).
///
/// Es la frontera entre el runtime del host y este crate: el controlador solo
/// necesita leer el código numérico y el modificador *meta*, y poder pedir que
/// se cancele el manejo por defecto del host.
///
/// ## Diagrama conceptual
///
/// ```text
/// ┌──────────────┐   KeyOccurrence   ┌────────────────────┐
/// │  Host (DOM,  │ ────────────────→ │ KeyboardController │
/// │  winit, ...) │ ←──────────────── │                    │
/// └──────────────┘  prevent_default  └────────────────────┘
///                   stop_propagation
/// ```
///
/// ## Ciclo de vida
/// Conviene que el tipo sea dueño de su handle (sin lifetimes): así el
/// controlador puede vivir en un callback `'static` del host.
/// La ocurrencia se **presta** al controlador mientras dura el callback del
/// host. El controlador y los suscriptores la tratan como de solo lectura,
/// salvo las dos peticiones de supresión, y no la conservan después del turno.
///
/// ## Ejemplo de implementación (conceptual, `web_sys`)
///
/// ```rust,ignore
/// use orbit_keyboard::KeyOccurrence;
///
/// struct DomKey(web_sys::KeyboardEvent);
///
/// impl KeyOccurrence for DomKey {
///     fn code(&self) -> u32 {
///         self.0.which()
///     }
///
///     fn meta_key(&self) -> bool {
///         self.0.meta_key()
///     }
///
///     fn prevent_default(&mut self) {
///         self.0.prevent_default();
///     }
///
///     fn stop_propagation(&mut self) {
///         self.0.stop_propagation();
///     }
/// }
/// ```
pub trait KeyOccurrence {
    /// Código numérico crudo de la tecla.
    fn code(&self) -> u32;

    /// `true` si el modificador de sistema (*meta* / *command*) está pulsado.
    fn meta_key(&self) -> bool;

    /// Pide al host que cancele su reacción por defecto a esta ocurrencia.
    fn prevent_default(&mut self);

    /// Pide al host que no siga propagando esta ocurrencia.
    fn stop_propagation(&mut self);
}

/// Predicado del host que indica si la **superficie raíz** de la aplicación
/// tiene el foco.
///
/// La supresión de acciones por defecto solo se aplica cuando este predicado
/// es `true`, así un campo de texto del documento host sigue funcionando con
/// normalidad. Qué significa "foco" depende de la plataforma; en un navegador
/// suele ser `document.activeElement === document.body`.
///
/// Cualquier `Fn() -> bool` implementa el trait.
pub trait FocusScope {
    fn root_has_focus(&self) -> bool;
}

impl<F> FocusScope for F
where
    F: Fn() -> bool,
{
    fn root_has_focus(&self) -> bool {
        self()
    }
}

/// Ámbito de foco por defecto: la superficie raíz siempre tiene el foco.
///
/// Adecuado para hosts sin concepto de foco (ventanas nativas a pantalla
/// completa, tests, reproducción de partidas).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootFocus;

impl FocusScope for RootFocus {
    fn root_has_focus(&self) -> bool {
        true
    }
}
