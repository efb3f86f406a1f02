//! Pointer events with propagation control.
//!
//! An event is offered to the innermost view first and then to each
//! ancestor, until a handler calls [`PointerEvent::stop_propagation`].

use bitflags::bitflags;

use crate::geometry::Point;

bitflags! {
    /// Keyboard modifiers held while the event occurred.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const CTRL  = 0b0000_0010;
        const ALT   = 0b0000_0100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Press,
    Release,
    Move,
    DoubleClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    None,
    Left,
    Right,
    Middle,
    WheelUp,
    WheelDown,
}

/// A pointer event travelling up the view tree.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub button: PointerButton,
    /// Position relative to the view receiving the event.
    pub position: Point,
    pub modifiers: Modifiers,
    propagating: bool,
}

impl PointerEvent {
    pub fn new(
        kind: PointerEventKind,
        button: PointerButton,
        position: Point,
        modifiers: Modifiers,
    ) -> Self {
        Self {
            kind,
            button,
            position,
            modifiers,
            propagating: true,
        }
    }

    /// A wheel notch, delivered as a press of a wheel button.
    pub fn wheel(button: PointerButton, modifiers: Modifiers) -> Self {
        Self::new(PointerEventKind::Press, button, Point::ORIGIN, modifiers)
    }

    pub fn wheel_down() -> Self {
        Self::wheel(PointerButton::WheelDown, Modifiers::empty())
    }

    pub fn wheel_up() -> Self {
        Self::wheel(PointerButton::WheelUp, Modifiers::empty())
    }

    pub fn shift_down(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Keep ancestors from seeing this event.
    pub fn stop_propagation(&mut self) {
        self.propagating = false;
    }

    /// Check if the event should continue to the parent view.
    pub fn is_propagating(&self) -> bool {
        self.propagating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_starts_propagating() {
        let mut event = PointerEvent::wheel_down();
        assert!(event.is_propagating());
        event.stop_propagation();
        assert!(!event.is_propagating());
    }

    #[test]
    fn test_shift_modifier() {
        let event = PointerEvent::wheel(PointerButton::WheelUp, Modifiers::SHIFT | Modifiers::CTRL);
        assert!(event.shift_down());
        assert!(!PointerEvent::wheel_up().shift_down());
        assert_eq!(event.kind, PointerEventKind::Press);
    }
}
