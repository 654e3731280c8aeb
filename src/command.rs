// src/command.rs

use crate::star::Star;

/// Edits the UI layer may request on the star. Widgets never touch the
/// star directly; the host applies these to its single instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StarCommand {
    SetShape { point_count: u32, radius: f32 },
    SetPointCount(u32),
    SetOuterRadius(f32),
    SetInnerRadius(f32),
    Select(usize),
    ClearSelection,
    RoundToInteger,
}

impl StarCommand {
    /// True for commands that rebuild the whole ring and so re-derive the
    /// inner radius.
    pub fn regenerates(&self) -> bool {
        matches!(
            self,
            StarCommand::SetShape { .. }
                | StarCommand::SetPointCount(_)
                | StarCommand::SetOuterRadius(_)
        )
    }
}

impl Star {
    /// Applies `command` and reports whether the vertex ring changed.
    pub fn apply(&mut self, command: StarCommand) -> bool {
        let before = (self.point_count(), self.vertices().to_vec());
        match command {
            StarCommand::SetShape {
                point_count,
                radius,
            } => self.set_shape(point_count, radius),
            StarCommand::SetPointCount(count) => self.set_point_count(count),
            StarCommand::SetOuterRadius(radius) => self.set_outer_radius(radius),
            StarCommand::SetInnerRadius(radius) => self.set_inner_radius(radius),
            StarCommand::Select(index) => {
                self.set_selected_index(isize::try_from(index).unwrap_or(-1));
            }
            StarCommand::ClearSelection => self.clear_selection(),
            StarCommand::RoundToInteger => self.round_to_integer(),
        }
        before.0 != self.point_count() || before.1 != self.vertices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_does_not_change_ring() {
        let mut star = Star::new(5, 10.0);
        assert!(!star.apply(StarCommand::Select(2)));
        assert_eq!(star.selected_index(), Some(2));
        assert!(!star.apply(StarCommand::ClearSelection));
        assert_eq!(star.selected_index(), None);
    }

    #[test]
    fn shape_commands_report_changes() {
        let mut star = Star::new(5, 10.0);
        assert!(star.apply(StarCommand::SetPointCount(6)));
        assert!(!star.apply(StarCommand::SetPointCount(6)));
        assert!(star.apply(StarCommand::SetOuterRadius(4.0)));
        assert!(!star.apply(StarCommand::SetOuterRadius(-4.0)));
        assert!(star.apply(StarCommand::SetInnerRadius(1.0)));
        assert!(star.apply(StarCommand::SetShape {
            point_count: 9,
            radius: 2.0
        }));
        assert_eq!(star.point_count(), 9);
        assert_eq!(star.outer_radius(), 2.0);
    }

    #[test]
    fn rounding_reports_change_once() {
        let mut star = Star::new(5, 10.0);
        assert!(star.apply(StarCommand::RoundToInteger));
        assert!(!star.apply(StarCommand::RoundToInteger));
    }

    #[test]
    fn regenerating_commands() {
        assert!(StarCommand::SetPointCount(5).regenerates());
        assert!(StarCommand::SetOuterRadius(1.0).regenerates());
        assert!(!StarCommand::SetInnerRadius(1.0).regenerates());
        assert!(!StarCommand::Select(0).regenerates());
    }
}
