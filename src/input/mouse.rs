use glam::Vec2;

/// Which source currently holds the primary drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DragSource {
    Mouse,
    Touch,
}

/// Tracks pointer position and the active primary drag.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointerState {
    /// Last known pointer position in physical pixels.
    pub position: Option<Vec2>,
    /// Source of the drag in progress, if any.
    pub drag: Option<DragSource>,
}

impl PointerState {
    /// Begin a drag at `position`.
    pub fn press(&mut self, source: DragSource, position: Vec2) {
        self.position = Some(position);
        self.drag = Some(source);
    }

    /// Move to `position`, returning the delta if a drag from `source` is
    /// in progress and the pointer actually moved.
    pub fn move_to(
        &mut self,
        source: DragSource,
        position: Vec2,
    ) -> Option<Vec2> {
        let previous = self.position.replace(position);
        if self.drag != Some(source) {
            return None;
        }
        let delta = position - previous?;
        (delta != Vec2::ZERO).then_some(delta)
    }

    /// End a drag from `source`. Returns whether one was in progress.
    pub fn release(&mut self, source: DragSource) -> bool {
        if self.drag == Some(source) {
            self.drag = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_only_while_dragging() {
        let mut state = PointerState::default();
        assert_eq!(state.move_to(DragSource::Mouse, Vec2::new(1.0, 1.0)), None);
        state.press(DragSource::Mouse, Vec2::new(10.0, 10.0));
        assert_eq!(
            state.move_to(DragSource::Mouse, Vec2::new(13.0, 6.0)),
            Some(Vec2::new(3.0, -4.0))
        );
        assert_eq!(state.move_to(DragSource::Mouse, Vec2::new(13.0, 6.0)), None);
        assert!(state.release(DragSource::Mouse));
        assert!(!state.release(DragSource::Mouse));
    }

    #[test]
    fn sources_do_not_mix() {
        let mut state = PointerState::default();
        state.press(DragSource::Touch, Vec2::ZERO);
        assert_eq!(state.move_to(DragSource::Mouse, Vec2::ONE), None);
        assert!(!state.release(DragSource::Mouse));
    }
}
