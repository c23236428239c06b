// Pure keyboard mapping, kept free of web-sys so host tests can include it.

use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleKey {
    Slomo,
    Dark,
    Heatmap,
}

#[inline]
pub fn arrow_for_key(key: &str) -> Option<Arrow> {
    match key {
        "ArrowLeft" => Some(Arrow::Left),
        "ArrowRight" => Some(Arrow::Right),
        "ArrowUp" => Some(Arrow::Up),
        "ArrowDown" => Some(Arrow::Down),
        _ => None,
    }
}

#[inline]
pub fn toggle_for_key(key: &str) -> Option<ToggleKey> {
    match key {
        "s" | "S" => Some(ToggleKey::Slomo),
        "d" | "D" => Some(ToggleKey::Dark),
        "m" | "M" => Some(ToggleKey::Heatmap),
        _ => None,
    }
}

/// Which arrow keys are currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldArrows {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

impl HeldArrows {
    fn slot(&mut self, arrow: Arrow) -> &mut bool {
        match arrow {
            Arrow::Left => &mut self.left,
            Arrow::Right => &mut self.right,
            Arrow::Up => &mut self.up,
            Arrow::Down => &mut self.down,
        }
    }

    /// Mark `arrow` held or released; returns whether anything changed.
    pub fn set(&mut self, arrow: Arrow, held: bool) -> bool {
        let slot = self.slot(arrow);
        let changed = *slot != held;
        *slot = held;
        changed
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Direction vector in screen axes (+y down). Opposite keys cancel.
    pub fn direction(&self) -> DVec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f64;
        DVec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}
