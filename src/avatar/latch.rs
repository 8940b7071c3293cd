/// Rising edge detector for a single key
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Latch {
    was_pressed: bool,
}

impl Latch {
    /// Returns true only when the key goes down since the previous call
    pub fn rising(&mut self, pressed: bool) -> bool {
        let fired = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::Latch;

    #[test]
    fn fires_once_per_press() {
        let mut latch = Latch::default();
        assert!(latch.rising(true));
        assert!(!latch.rising(true));
        assert!(!latch.rising(true));
        assert!(!latch.rising(false));
        assert!(latch.rising(true));
    }
}
