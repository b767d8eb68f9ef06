use std::collections::HashMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::KeySlot;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "KeyTable")]
/// Remappable key table: named slots to physical key strings.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format (`"KeyW"`,
/// `"PageUp"`, `"ShiftLeft"`). A preset only needs the slots it changes;
/// the rest keep their defaults. An empty string unbinds a slot.
pub struct KeyBindings {
    /// Maps slot → key string (e.g. `RotateUp` → `"KeyW"`).
    pub bindings: HashMap<KeySlot, String>,
    /// Reverse lookup cache (key string → slots). Rebuilt on load.
    #[serde(skip)]
    key_to_slots: FxHashMap<String, Vec<KeySlot>>,
}

/// Wire form of [`KeyBindings`]; merged over the defaults on load.
#[derive(Deserialize, Default)]
#[serde(default)]
struct KeyTable {
    bindings: HashMap<KeySlot, String>,
}

impl From<KeyTable> for KeyBindings {
    fn from(table: KeyTable) -> Self {
        let mut merged = Self::default();
        merged.bindings.extend(table.bindings);
        merged.rebuild_reverse_map();
        merged
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeySlot::LockRotate, "AltRight".into()),
            (KeySlot::LockZoom, "LaunchApp2".into()),
            (KeySlot::LockPan, "BrowserRefresh".into()),
            (KeySlot::RotateUp, "KeyW".into()),
            (KeySlot::RotateDown, "KeyS".into()),
            (KeySlot::RotateLeft, "KeyA".into()),
            (KeySlot::RotateRight, "KeyD".into()),
            (KeySlot::ZoomIn, "KeyQ".into()),
            (KeySlot::ZoomOut, "KeyE".into()),
            (KeySlot::SpinLeft, "PageUp".into()),
            (KeySlot::SpinRight, "PageDown".into()),
            (KeySlot::ModifierAlt, "AltLeft".into()),
            (KeySlot::ModifierCtrl, "ControlLeft".into()),
            (KeySlot::ModifierShift, "ShiftLeft".into()),
            (KeySlot::Focus, "KeyF".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_slots: FxHashMap::default(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeyBindings {
    /// Rebuild the reverse lookup map (key string → slots).
    ///
    /// Call after editing [`bindings`](Self::bindings) directly.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_slots.clear();
        for slot in KeySlot::ALL {
            if let Some(key) = self.bindings.get(&slot) {
                if key.is_empty() {
                    continue;
                }
                self.key_to_slots.entry(key.clone()).or_default().push(slot);
            }
        }
    }

    /// Bind `slot` to `key`, replacing its previous key.
    pub fn bind(&mut self, slot: KeySlot, key: &str) {
        let _ = self.bindings.insert(slot, key.to_owned());
        self.rebuild_reverse_map();
    }

    /// Every slot bound to `key`, in table order. One key may fill several
    /// slots (e.g. a modifier that also locks a mode).
    #[must_use]
    pub fn slots_for(&self, key: &str) -> &[KeySlot] {
        match self.key_to_slots.get(key) {
            Some(slots) => slots,
            None => &[],
        }
    }

    /// Whether `key` is bound to `slot`.
    #[must_use]
    pub fn matches(&self, slot: KeySlot, key: &str) -> bool {
        self.slots_for(key).contains(&slot)
    }

    /// The key bound to `slot`, if any.
    #[must_use]
    pub fn key_for(&self, slot: KeySlot) -> Option<&str> {
        self.bindings
            .get(&slot)
            .map(String::as_str)
            .filter(|key| !key.is_empty())
    }
}
