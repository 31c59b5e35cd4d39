//! Once-initialized storage for a single built-in icon.

use std::sync::OnceLock;

use vecticon_graphics::VectorIcon;

use crate::logging::targets;

/// A slot that builds its icon on first access and keeps it for the life of
/// the process.
///
/// Concurrent first accesses construct the icon exactly once; every caller
/// gets a reference to the same instance.
///
/// # Example
///
/// ```
/// use vecticon_graphics::VectorIcon;
/// use vecticon_pack::IconSlot;
///
/// static DOT: IconSlot = IconSlot::new();
///
/// assert!(!DOT.is_initialized());
/// let first = DOT.get_or_build("Dot", || VectorIcon::builder("Dot", 24.0, 24.0, 24.0, 24.0).build());
/// let second = DOT.get_or_build("Dot", || unreachable!());
/// assert!(std::ptr::eq(first, second));
/// assert!(DOT.is_initialized());
/// ```
pub struct IconSlot {
    icon: OnceLock<VectorIcon>,
}

impl IconSlot {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self {
            icon: OnceLock::new(),
        }
    }

    /// Gets the icon, building it with `build` if the slot is empty.
    pub fn get_or_build(&self, name: &str, build: impl FnOnce() -> VectorIcon) -> &VectorIcon {
        self.icon.get_or_init(|| {
            let icon = build();
            tracing::debug!(
                target: targets::CATALOG,
                icon = name,
                paths = icon.path_count(),
                "built icon"
            );
            icon
        })
    }

    /// Gets the icon if it has been built.
    pub fn get(&self) -> Option<&VectorIcon> {
        self.icon.get()
    }

    /// Returns whether the icon has been built.
    pub fn is_initialized(&self) -> bool {
        self.icon.get().is_some()
    }
}

impl Default for IconSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IconSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconSlot")
            .field("icon", &self.icon.get().map(VectorIcon::name))
            .field("is_initialized", &self.is_initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    fn dot() -> VectorIcon {
        VectorIcon::builder("Dot", 24.0, 24.0, 24.0, 24.0).build()
    }

    #[test]
    fn test_slot_builds_once() {
        let slot = IconSlot::new();
        let builds = AtomicUsize::new(0);

        for _ in 0..10 {
            slot.get_or_build("Dot", || {
                builds.fetch_add(1, Ordering::SeqCst);
                dot()
            });
        }

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert_eq!(slot.get().map(VectorIcon::name), Some("Dot"));
    }

    #[test]
    fn test_slot_concurrent_first_access() {
        let slot = Arc::new(IconSlot::new());
        let builds = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let slot = Arc::clone(&slot);
                let builds = Arc::clone(&builds);
                thread::spawn(move || {
                    let icon = slot.get_or_build("Dot", || {
                        builds.fetch_add(1, Ordering::SeqCst);
                        dot()
                    });
                    icon as *const VectorIcon as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_debug_output() {
        let slot = IconSlot::new();
        assert!(format!("{slot:?}").contains("is_initialized: false"));
        slot.get_or_build("Dot", dot);
        assert!(format!("{slot:?}").contains("\"Dot\""));
    }
}
