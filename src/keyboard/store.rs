use std::collections::HashMap;

use crate::keyboard::KeyName;
use crate::traits::KeyStateExt;

/// Mapa `KeyName → bool` con el estado vivo de cada tecla.
///
/// Las entradas se crean la primera vez que una tecla se observa y nunca se
/// borran; una tecla ausente se lee como suelta.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStateStore {
    keys: HashMap<KeyName, bool>,
}

impl KeyStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de teclas observadas alguna vez.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Itera sobre todas las teclas observadas y su estado, sin orden definido.
    pub fn iter(&self) -> impl Iterator<Item = (KeyName, bool)> + '_ {
        self.keys.iter().map(|(key, pressed)| (*key, *pressed))
    }
}

impl KeyStateExt for KeyStateStore {
    fn is_pressed(&self, key: KeyName) -> bool {
        self.keys.get(&key).copied().unwrap_or(false)
    }

    fn set_pressed(&mut self, key: KeyName, pressed: bool) {
        self.keys.insert(key, pressed);
    }

    fn any_pressed(&self) -> bool {
        self.keys.values().any(|pressed| *pressed)
    }

    fn pressed_keys(&self) -> Vec<KeyName> {
        let mut pressed: Vec<KeyName> = self
            .keys
            .iter()
            .filter(|(_, pressed)| **pressed)
            .map(|(key, _)| *key)
            .collect();
        pressed.sort_unstable();
        pressed
    }

    fn release_all(&mut self) {
        self.keys.values_mut().for_each(|pressed| *pressed = false);
    }
}
