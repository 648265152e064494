use std::time::Duration;

/// How long a "copied" indicator stays lit.
pub const COPIED_RESET: Duration = Duration::from_secs(2);

pub const MIN_EDITOR_HEIGHT: f32 = 200.0;
pub const MAX_EDITOR_HEIGHT: f32 = 600.0;
const RESIZE_THRESHOLD: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    PlainText,
    Base64,
}

/// "Just copied" indicator with a generation token.
///
/// An expiry only turns the flag off when it belongs to the latest copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopiedFlag {
    generation: u64,
    active: bool,
}

impl CopiedFlag {
    pub fn set(&mut self) -> u64 {
        self.generation += 1;
        self.active = true;
        self.generation
    }

    pub fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.active = false;
        }
    }

    pub fn reset(&mut self) {
        self.generation += 1;
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Height shared by both editors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorHeight(f32);

impl Default for EditorHeight {
    fn default() -> Self {
        Self(MIN_EDITOR_HEIGHT)
    }
}

impl EditorHeight {
    pub fn get(self) -> f32 {
        self.0
    }

    /// Returns whether the height changed. Requests are clamped to the
    /// allowed range; moves of 5 px or less are ignored.
    pub fn resize(&mut self, requested: f32) -> bool {
        if !requested.is_finite() {
            return false;
        }

        let clamped = requested.clamp(MIN_EDITOR_HEIGHT, MAX_EDITOR_HEIGHT);
        if (clamped - self.0).abs() <= RESIZE_THRESHOLD {
            return false;
        }

        self.0 = clamped;
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UiFlags {
    pub copied_plain: CopiedFlag,
    pub copied_base64: CopiedFlag,
    pub editor_height: EditorHeight,
}

impl UiFlags {
    pub fn copied(&self, target: CopyTarget) -> &CopiedFlag {
        match target {
            CopyTarget::PlainText => &self.copied_plain,
            CopyTarget::Base64 => &self.copied_base64,
        }
    }

    pub fn copied_mut(&mut self, target: CopyTarget) -> &mut CopiedFlag {
        match target {
            CopyTarget::PlainText => &mut self.copied_plain,
            CopyTarget::Base64 => &mut self.copied_base64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_expiry_keeps_newer_copy() {
        let mut flag = CopiedFlag::default();

        let first = flag.set();
        let second = flag.set();
        flag.expire(first);
        assert!(flag.is_active());

        flag.expire(second);
        assert!(!flag.is_active());
    }

    #[test]
    fn reset_invalidates_pending_expiry() {
        let mut flag = CopiedFlag::default();

        let generation = flag.set();
        flag.reset();
        assert!(!flag.is_active());

        let next = flag.set();
        flag.expire(generation);
        assert!(flag.is_active());
        assert_ne!(next, generation);
    }

    #[test]
    fn height_clamps_to_range() {
        let mut height = EditorHeight::default();

        assert!(height.resize(10_000.0));
        assert_eq!(height.get(), MAX_EDITOR_HEIGHT);

        assert!(height.resize(0.0));
        assert_eq!(height.get(), MIN_EDITOR_HEIGHT);

        assert!(!height.resize(f32::NAN));
        assert_eq!(height.get(), MIN_EDITOR_HEIGHT);
    }

    #[test]
    fn height_ignores_micro_adjustments() {
        let mut height = EditorHeight::default();

        assert!(!height.resize(MIN_EDITOR_HEIGHT + 5.0));
        assert_eq!(height.get(), MIN_EDITOR_HEIGHT);

        assert!(height.resize(MIN_EDITOR_HEIGHT + 6.0));
        assert_eq!(height.get(), MIN_EDITOR_HEIGHT + 6.0);
    }
}
