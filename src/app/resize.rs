//! Drag-to-resize for header cells.
//!
//! `Idle → Armed → Dragging → Idle`. The phase doubles as the drag lock:
//! while one column is `Dragging` no other gesture can start.

use edtable_domain::{ColumnKey, ColumnSizeMap, HeaderCell, SiblingKind};

use crate::effect::{CursorStyle, Effect};

/// Distance from a cell's right edge that arms a resize.
pub const EDGE_GRAB_ZONE: f64 = 16.0;
/// Narrower cells never arm.
pub const MIN_GRABBABLE_WIDTH: f64 = 12.0;
/// Minimum column width enforced while the proxy follows the pointer.
pub const LIVE_MIN_WIDTH: f64 = 30.0;
/// Absolute floor for the width read back on release.
pub const DROP_FLOOR_WIDTH: f64 = 80.0;
pub const DEFAULT_MIN_WIDTH: f64 = 60.0;
pub const DEFAULT_MAX_WIDTH: f64 = 100_000.0;

/// Positions are relative to the table's left edge, except `start_mouse_x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub start_mouse_x: f64,
    pub start_column_right: f64,
    pub start_column_left: f64,
    pub table_left: f64,
    pub proxy_left: f64,
}

impl DragState {
    fn min_proxy_left(&self) -> f64 {
        self.start_column_left + LIVE_MIN_WIDTH
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResizePhase {
    #[default]
    Idle,
    Armed {
        key: ColumnKey,
    },
    Dragging {
        key: ColumnKey,
        drag: DragState,
        next_sibling: SiblingKind,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResizeOutcome {
    Applied { key: ColumnKey, width: f64 },
    /// The column is followed by the resize handle itself.
    Rejected { key: ColumnKey },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResizeRelease {
    pub outcome: Option<ResizeOutcome>,
    pub effects: Vec<Effect>,
}

#[derive(Debug, Clone, Default)]
pub struct ResizeController {
    phase: ResizePhase,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ResizePhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, ResizePhase::Dragging { .. })
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.phase, ResizePhase::Armed { .. })
    }

    pub fn drag(&self) -> Option<&DragState> {
        match &self.phase {
            ResizePhase::Dragging { drag, .. } => Some(drag),
            _ => None,
        }
    }

    /// Pointer moved over the header row. `cell` is the cell under the pointer.
    pub fn hover(&mut self, cell: Option<&HeaderCell>, pointer_x: f64) -> Vec<Effect> {
        if self.is_dragging() {
            return vec![];
        }
        let Some(cell) = cell else {
            return vec![];
        };
        if !cell.resizeable {
            return vec![];
        }

        if cell.width() > MIN_GRABBABLE_WIDTH && cell.right - pointer_x < EDGE_GRAB_ZONE {
            let was_armed = self.is_armed();
            self.phase = ResizePhase::Armed {
                key: cell.key.clone(),
            };
            if was_armed {
                vec![]
            } else {
                vec![
                    Effect::SetCursor(CursorStyle::ColResize),
                    Effect::SetUserSelect(false),
                ]
            }
        } else {
            self.disarm()
        }
    }

    pub fn disarm(&mut self) -> Vec<Effect> {
        if !self.is_armed() {
            return vec![];
        }
        self.phase = ResizePhase::Idle;
        vec![
            Effect::SetCursor(CursorStyle::Default),
            Effect::SetUserSelect(true),
        ]
    }

    pub fn pointer_down(
        &mut self,
        cell: Option<&HeaderCell>,
        pointer_x: f64,
        table_left: f64,
    ) -> Vec<Effect> {
        let ResizePhase::Armed { key } = &self.phase else {
            return vec![];
        };
        let Some(cell) = cell.filter(|cell| cell.resizeable && &cell.key == key) else {
            return vec![];
        };

        let start_column_right = cell.right - table_left;
        let drag = DragState {
            start_mouse_x: pointer_x,
            start_column_right,
            start_column_left: cell.left - table_left,
            table_left,
            proxy_left: start_column_right,
        };
        self.phase = ResizePhase::Dragging {
            key: cell.key.clone(),
            drag,
            next_sibling: cell.next_sibling,
        };

        log::debug!("resize drag started on {} at x={}", cell.key, pointer_x);

        vec![
            Effect::ShowResizeProxy {
                left: start_column_right,
            },
            Effect::SetNativeSelection(false),
            Effect::InstallDragListeners,
        ]
    }

    pub fn drag_move(&mut self, pointer_x: f64) -> Vec<Effect> {
        let ResizePhase::Dragging { drag, .. } = &mut self.phase else {
            return vec![];
        };
        let delta = pointer_x - drag.start_mouse_x;
        drag.proxy_left = drag.min_proxy_left().max(drag.start_column_right + delta);
        vec![Effect::ShowResizeProxy {
            left: drag.proxy_left,
        }]
    }

    /// Ends the gesture. `table_width` is the table's measured width.
    pub fn pointer_up(&mut self, sizes: &mut ColumnSizeMap, table_width: f64) -> ResizeRelease {
        let ResizePhase::Dragging {
            key,
            drag,
            next_sibling,
        } = std::mem::take(&mut self.phase)
        else {
            return ResizeRelease::default();
        };

        let effects = vec![
            Effect::HideResizeProxy,
            Effect::SetCursor(CursorStyle::Default),
            Effect::SetUserSelect(true),
            Effect::SetNativeSelection(true),
            Effect::RemoveDragListeners,
        ];

        if next_sibling == SiblingKind::ResizeHandle {
            log::info!("resize of {key} rejected: column is followed by the resize handle");
            return ResizeRelease {
                outcome: Some(ResizeOutcome::Rejected { key }),
                effects,
            };
        }

        let Some(size) = sizes.get(&key).copied() else {
            return ResizeRelease {
                outcome: None,
                effects,
            };
        };

        let latest_width = (drag.proxy_left - drag.start_column_left)
            .max(DROP_FLOOR_WIDTH)
            .ceil();
        let min = size.min_width.unwrap_or(DEFAULT_MIN_WIDTH);
        let max = size.max_width.unwrap_or(DEFAULT_MAX_WIDTH);
        let clamped = min.max(latest_width.min(max));

        let others = sizes.total_except(&key);
        let width = if others + clamped < table_width {
            table_width - others
        } else {
            clamped
        };

        if let Some(entry) = sizes.get_mut(&key) {
            entry.render_width = width;
        }
        log::info!("resized {key} to {width}px (requested {latest_width}px)");

        ResizeRelease {
            outcome: Some(ResizeOutcome::Applied { key, width }),
            effects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edtable_domain::{ColumnSize, SizingMode};
    use rstest::rstest;

    const TABLE_LEFT: f64 = 20.0;

    fn key(s: &str) -> ColumnKey {
        ColumnKey::new(s).unwrap()
    }

    fn cell(name: &str, left: f64, right: f64) -> HeaderCell {
        HeaderCell {
            key: key(name),
            left,
            right,
            resizeable: true,
            pinned: None,
            next_sibling: SiblingKind::Column,
        }
    }

    fn sizes(entries: &[(&str, SizingMode, f64)]) -> ColumnSizeMap {
        let mut map = ColumnSizeMap::new();
        for (name, mode, width) in entries {
            map.insert(key(name), ColumnSize::declared(*mode, *width));
        }
        map
    }

    /// Arms on `target`'s right edge and presses.
    fn start_drag(controller: &mut ResizeController, target: &HeaderCell) {
        controller.hover(Some(target), target.right - 2.0);
        controller.pointer_down(Some(target), target.right - 2.0, TABLE_LEFT);
    }

    mod hover {
        use super::*;

        #[test]
        fn near_right_edge_arms_and_sets_cursor() {
            let mut controller = ResizeController::new();
            let target = cell("a", 20.0, 220.0);

            let effects = controller.hover(Some(&target), 210.0);

            assert!(controller.is_armed());
            assert_eq!(
                effects,
                vec![
                    Effect::SetCursor(CursorStyle::ColResize),
                    Effect::SetUserSelect(false)
                ]
            );
        }

        #[test]
        fn staying_armed_emits_nothing() {
            let mut controller = ResizeController::new();
            let target = cell("a", 20.0, 220.0);
            controller.hover(Some(&target), 210.0);

            let effects = controller.hover(Some(&target), 215.0);

            assert!(effects.is_empty());
            assert!(controller.is_armed());
        }

        #[test]
        fn leaving_edge_disarms_and_resets_cursor() {
            let mut controller = ResizeController::new();
            let target = cell("a", 20.0, 220.0);
            controller.hover(Some(&target), 210.0);

            let effects = controller.hover(Some(&target), 100.0);

            assert_eq!(*controller.phase(), ResizePhase::Idle);
            assert_eq!(
                effects,
                vec![
                    Effect::SetCursor(CursorStyle::Default),
                    Effect::SetUserSelect(true)
                ]
            );
        }

        #[rstest]
        #[case(20.0, 32.0, 30.0)] // 12px wide: too narrow
        #[case(20.0, 220.0, 204.0)] // exactly 16px from the edge
        fn does_not_arm(#[case] left: f64, #[case] right: f64, #[case] x: f64) {
            let mut controller = ResizeController::new();

            controller.hover(Some(&cell("a", left, right)), x);

            assert_eq!(*controller.phase(), ResizePhase::Idle);
        }

        #[test]
        fn non_resizeable_cell_is_ignored() {
            let mut controller = ResizeController::new();
            let mut target = cell("a", 20.0, 220.0);
            target.resizeable = false;

            let effects = controller.hover(Some(&target), 215.0);

            assert!(effects.is_empty());
            assert_eq!(*controller.phase(), ResizePhase::Idle);
        }

        #[test]
        fn no_cell_keeps_current_phase() {
            let mut controller = ResizeController::new();
            controller.hover(Some(&cell("a", 20.0, 220.0)), 210.0);

            let effects = controller.hover(None, 500.0);

            assert!(effects.is_empty());
            assert!(controller.is_armed());
        }
    }

    mod drag {
        use super::*;

        #[test]
        fn pointer_down_without_arming_is_ignored() {
            let mut controller = ResizeController::new();

            let effects = controller.pointer_down(Some(&cell("a", 20.0, 220.0)), 210.0, 20.0);

            assert!(effects.is_empty());
            assert!(!controller.is_dragging());
        }

        #[test]
        fn pointer_down_records_drag_state_relative_to_table() {
            let mut controller = ResizeController::new();
            let target = cell("a", 120.0, 320.0);

            controller.hover(Some(&target), 310.0);
            let effects = controller.pointer_down(Some(&target), 310.0, TABLE_LEFT);

            let drag = controller.drag().unwrap();
            assert_eq!(drag.start_mouse_x, 310.0);
            assert_eq!(drag.start_column_left, 100.0);
            assert_eq!(drag.start_column_right, 300.0);
            assert_eq!(drag.table_left, TABLE_LEFT);
            assert_eq!(
                effects,
                vec![
                    Effect::ShowResizeProxy { left: 300.0 },
                    Effect::SetNativeSelection(false),
                    Effect::InstallDragListeners,
                ]
            );
        }

        #[test]
        fn press_on_other_column_keeps_armed_edge() {
            let mut controller = ResizeController::new();
            let armed = cell("a", 20.0, 220.0);
            let mut fixed = cell("b", 220.0, 420.0);
            fixed.resizeable = false;

            controller.hover(Some(&armed), 215.0);
            controller.hover(Some(&fixed), 225.0);
            let effects = controller.pointer_down(Some(&fixed), 225.0, TABLE_LEFT);

            assert!(effects.is_empty());
            assert!(!controller.is_dragging());
            assert_eq!(controller.phase(), &ResizePhase::Armed { key: key("a") });
        }

        #[test]
        fn proxy_follows_pointer() {
            let mut controller = ResizeController::new();
            let target = cell("a", 20.0, 220.0);
            start_drag(&mut controller, &target);

            let effects = controller.drag_move(target.right - 2.0 + 40.0);

            assert_eq!(effects, vec![Effect::ShowResizeProxy { left: 240.0 }]);
        }

        #[test]
        fn proxy_never_narrows_column_below_live_minimum() {
            let mut controller = ResizeController::new();
            let target = cell("a", 20.0, 220.0);
            start_drag(&mut controller, &target);

            controller.drag_move(-500.0);

            assert_eq!(controller.drag().unwrap().proxy_left, LIVE_MIN_WIDTH);
        }

        #[test]
        fn hover_is_ignored_while_dragging() {
            let mut controller = ResizeController::new();
            let target = cell("a", 20.0, 220.0);
            start_drag(&mut controller, &target);

            let effects = controller.hover(Some(&cell("b", 220.0, 420.0)), 410.0);

            assert!(effects.is_empty());
            assert!(controller.is_dragging());
        }

        #[test]
        fn second_pointer_down_does_not_restart_drag() {
            let mut controller = ResizeController::new();
            let target = cell("a", 20.0, 220.0);
            start_drag(&mut controller, &target);

            let effects = controller.pointer_down(Some(&cell("b", 220.0, 420.0)), 410.0, 20.0);

            assert!(effects.is_empty());
            let ResizePhase::Dragging { key, .. } = controller.phase() else {
                panic!("expected dragging");
            };
            assert_eq!(key.as_str(), "a");
        }
    }

    mod release {
        use super::*;

        fn three_columns() -> ColumnSizeMap {
            sizes(&[
                ("a", SizingMode::Auto, 200.0),
                ("b", SizingMode::Auto, 200.0),
                ("c", SizingMode::Auto, 200.0),
            ])
        }

        #[test]
        fn applies_clamped_width_when_table_stays_filled() {
            let mut controller = ResizeController::new();
            let mut map = three_columns();
            let target = cell("a", 20.0, 220.0);
            start_drag(&mut controller, &target);
            controller.drag_move(target.right - 2.0 + 100.0);

            let release = controller.pointer_up(&mut map, 600.0);

            assert_eq!(
                release.outcome,
                Some(ResizeOutcome::Applied {
                    key: key("a"),
                    width: 300.0
                })
            );
            assert_eq!(map.render_width(&key("a")), 300.0);
            assert_eq!(*controller.phase(), ResizePhase::Idle);
        }

        #[test]
        fn shrinking_below_table_width_fills_remainder() {
            let mut controller = ResizeController::new();
            let mut map = three_columns();
            let target = cell("a", 20.0, 220.0);
            start_drag(&mut controller, &target);
            controller.drag_move(target.right - 2.0 - 100.0);

            let release = controller.pointer_up(&mut map, 600.0);

            // 400 + 100 < 600 → a takes the remaining 200
            assert_eq!(
                release.outcome,
                Some(ResizeOutcome::Applied {
                    key: key("a"),
                    width: 200.0
                })
            );
        }

        #[test]
        fn release_width_has_absolute_floor() {
            let mut controller = ResizeController::new();
            let mut map = three_columns();
            let target = cell("a", 20.0, 220.0);
            start_drag(&mut controller, &target);
            controller.drag_move(-1000.0);

            controller.pointer_up(&mut map, 300.0);

            assert_eq!(map.render_width(&key("a")), DROP_FLOOR_WIDTH);
        }

        #[test]
        fn declared_max_caps_width() {
            let mut controller = ResizeController::new();
            let mut map = sizes(&[
                ("a", SizingMode::MaxBound(250.0), 200.0),
                ("b", SizingMode::Auto, 400.0),
            ]);
            let target = cell("a", 20.0, 220.0);
            start_drag(&mut controller, &target);
            controller.drag_move(target.right - 2.0 + 300.0);

            controller.pointer_up(&mut map, 600.0);

            assert_eq!(map.render_width(&key("a")), 250.0);
        }

        #[test]
        fn declared_min_raises_width() {
            let mut controller = ResizeController::new();
            let mut map = sizes(&[
                ("a", SizingMode::MinBound(150.0), 200.0),
                ("b", SizingMode::Auto, 400.0),
            ]);
            let target = cell("a", 20.0, 220.0);
            start_drag(&mut controller, &target);
            controller.drag_move(target.right - 2.0 - 100.0);

            controller.pointer_up(&mut map, 500.0);

            assert_eq!(map.render_width(&key("a")), 150.0);
        }

        #[test]
        fn fractional_proxy_rounds_up() {
            let mut controller = ResizeController::new();
            let mut map = three_columns();
            let target = cell("a", 20.0, 220.0);
            start_drag(&mut controller, &target);
            controller.drag_move(target.right - 2.0 + 10.4);

            controller.pointer_up(&mut map, 100.0);

            assert_eq!(map.render_width(&key("a")), 211.0);
        }

        #[test]
        fn column_before_resize_handle_is_rejected() {
            let mut controller = ResizeController::new();
            let mut map = three_columns();
            let before = map.clone();
            let mut target = cell("c", 420.0, 620.0);
            target.next_sibling = SiblingKind::ResizeHandle;
            start_drag(&mut controller, &target);
            controller.drag_move(target.right + 100.0);

            let release = controller.pointer_up(&mut map, 600.0);

            assert_eq!(release.outcome, Some(ResizeOutcome::Rejected { key: key("c") }));
            assert_eq!(map, before);
            assert_eq!(*controller.phase(), ResizePhase::Idle);
            assert!(release.effects.contains(&Effect::RemoveDragListeners));
        }

        #[test]
        fn every_exit_restores_host_state() {
            let mut controller = ResizeController::new();
            let mut map = three_columns();
            start_drag(&mut controller, &cell("a", 20.0, 220.0));

            let release = controller.pointer_up(&mut map, 600.0);

            assert_eq!(
                release.effects,
                vec![
                    Effect::HideResizeProxy,
                    Effect::SetCursor(CursorStyle::Default),
                    Effect::SetUserSelect(true),
                    Effect::SetNativeSelection(true),
                    Effect::RemoveDragListeners,
                ]
            );
        }

        #[test]
        fn pointer_up_without_drag_does_nothing() {
            let mut controller = ResizeController::new();
            let mut map = three_columns();

            let release = controller.pointer_up(&mut map, 600.0);

            assert_eq!(release, ResizeRelease::default());
        }

        #[rstest]
        #[case(-300.0)]
        #[case(-60.0)]
        #[case(0.0)]
        #[case(35.5)]
        #[case(900.0)]
        #[case(250_000.0)]
        fn result_stays_within_bounds_or_fills(#[case] delta: f64) {
            let mut controller = ResizeController::new();
            let mut map = sizes(&[
                ("a", SizingMode::MinBound(90.0), 200.0),
                ("b", SizingMode::Auto, 200.0),
                ("c", SizingMode::Auto, 200.0),
            ]);
            let target = cell("a", 20.0, 220.0);
            start_drag(&mut controller, &target);
            controller.drag_move(target.right - 2.0 + delta);

            controller.pointer_up(&mut map, 600.0);

            let width = map.render_width(&key("a"));
            let others = map.total_except(&key("a"));
            let filled = width == 600.0 - others;
            assert!(filled || (90.0..=DEFAULT_MAX_WIDTH).contains(&width));
        }
    }
}
