use crate::keyboard::KeyName;

/// # Trait `KeyStateExt`
///
/// Define la interfaz para consultar y actualizar el **estado vivo del
/// teclado**: qué teclas están abajo en este instante.
///
/// Es la fuente de verdad que usan tanto el controlador (para la detección de
/// flancos) como el guardián de acciones por defecto (para las teclas de
/// *bypass*). Los consumidores que prefieren sondear en el game loop en vez de
/// suscribirse a eventos también leen a través de este trait.
///
/// ## Invariante
/// Una tecla **ausente** significa "nunca observada como presionada" y debe
/// leerse exactamente igual que `false`.
///
/// ## Ejemplo de uso
/// ```rust
/// use orbit_keyboard::{KeyName, KeyStateExt, KeyStateStore};
///
/// fn can_jump<S: KeyStateExt>(keys: &S) -> bool {
///     keys.is_pressed(KeyName::SPACE) && !keys.is_pressed(KeyName::SHIFT)
/// }
///
/// let mut keys = KeyStateStore::new();
/// assert!(!can_jump(&keys));
/// keys.set_pressed(KeyName::SPACE, true);
/// assert!(can_jump(&keys));
/// ```
pub trait KeyStateExt {
    /// Retorna `true` si la tecla está actualmente abajo.
    fn is_pressed(&self, key: KeyName) -> bool;

    /// Establece o actualiza el estado de una tecla.
    ///
    /// Normalmente llamado por el controlador al procesar una ocurrencia.
    fn set_pressed(&mut self, key: KeyName, pressed: bool);

    /// Retorna `true` si **cualquier tecla** se encuentra presionada.
    fn any_pressed(&self) -> bool;

    /// Todas las teclas actualmente presionadas, en orden alfabético.
    fn pressed_keys(&self) -> Vec<KeyName>;

    /// Marca todas las teclas como sueltas (por ejemplo, al perder el foco).
    fn release_all(&mut self);
}
