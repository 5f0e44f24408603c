//! Tests for the layout store: ids, z-order, size floor, absent-id no-ops

mod common;

use std::collections::HashSet;

use common::{layout_msg, panel_config, test_model, test_model_with_panels, z_of};
use paneldock::commands::Cmd;
use paneldock::messages::LayoutMsg;
use paneldock::model::{
    LayoutSnapshot, LayoutState, PanelId, PanelPatch, PanelRect, WidgetKind,
};

// ============================================================================
// Id allocation
// ============================================================================

#[test]
fn test_two_adds_give_distinct_ids_and_increasing_z() {
    let mut layout = LayoutState::default();
    let a = layout.add_panel(panel_config(0.0, 0.0, 200.0, 200.0));
    let b = layout.add_panel(panel_config(100.0, 100.0, 200.0, 200.0));

    assert_eq!(layout.len(), 2);
    assert_ne!(a, b);
    let za = layout.panel(a).unwrap().z_index;
    let zb = layout.panel(b).unwrap().z_index;
    assert_eq!(zb, za + 1);
}

#[test]
fn test_first_panel_gets_z_one() {
    let mut layout = LayoutState::default();
    let id = layout.add_panel(panel_config(0.0, 0.0, 200.0, 200.0));
    assert_eq!(layout.panel(id).unwrap().z_index, 1);
}

#[test]
fn test_ids_unique_across_adds_and_removes() {
    let mut layout = LayoutState::default();
    let mut seen = HashSet::new();

    for round in 0..20 {
        let id = layout.add_panel(panel_config(round as f32, 0.0, 200.0, 200.0));
        assert!(seen.insert(id), "id {} was reused", id);
        if round % 3 == 0 {
            layout.remove_panel(id);
        }
    }

    let live: HashSet<PanelId> = layout.panel_ids().into_iter().collect();
    assert_eq!(live.len(), layout.len());
}

#[test]
fn test_removed_id_not_reused() {
    let mut layout = LayoutState::default();
    let a = layout.add_panel(panel_config(0.0, 0.0, 200.0, 200.0));
    layout.remove_panel(a);
    let b = layout.add_panel(panel_config(0.0, 0.0, 200.0, 200.0));
    assert_ne!(a, b);
}

// ============================================================================
// Z-order
// ============================================================================

#[test]
fn test_bring_to_front_makes_strict_maximum() {
    let (mut model, ids) = test_model_with_panels(&[
        (0.0, 0.0, 200.0, 200.0),
        (50.0, 50.0, 200.0, 200.0),
        (100.0, 100.0, 200.0, 200.0),
    ]);

    let cmd = layout_msg(&mut model, LayoutMsg::BringToFront(ids[0]));
    assert_eq!(cmd, Some(Cmd::Redraw));

    let z = z_of(&model, ids[0]);
    assert!(z > z_of(&model, ids[1]));
    assert!(z > z_of(&model, ids[2]));
    assert_eq!(model.layout.topmost().map(|p| p.id), Some(ids[0]));
}

#[test]
fn test_bring_to_front_on_topmost_is_noop() {
    let (mut model, ids) =
        test_model_with_panels(&[(0.0, 0.0, 200.0, 200.0), (50.0, 50.0, 200.0, 200.0)]);
    let before = z_of(&model, ids[1]);

    assert_eq!(layout_msg(&mut model, LayoutMsg::BringToFront(ids[1])), None);
    assert_eq!(z_of(&model, ids[1]), before);
}

#[test]
fn test_z_strictly_increases_over_repeated_promotions() {
    let (mut model, ids) =
        test_model_with_panels(&[(0.0, 0.0, 200.0, 200.0), (50.0, 50.0, 200.0, 200.0)]);

    let mut last_max = model.layout.max_z();
    for i in 0..10 {
        layout_msg(&mut model, LayoutMsg::BringToFront(ids[i % 2]));
        let max = model.layout.max_z();
        assert!(max > last_max);
        last_max = max;
    }
}

#[test]
fn test_paint_order_breaks_ties_by_insertion() {
    let mut layout = LayoutState::default();
    let a = layout.add_panel(panel_config(0.0, 0.0, 200.0, 200.0));
    let b = layout.add_panel(panel_config(0.0, 0.0, 200.0, 200.0));
    // Force equal z through a snapshot
    let mut snapshot = layout.snapshot();
    for panel in &mut snapshot.panels {
        panel.z_index = 5;
    }
    let layout = LayoutState::from_snapshot(snapshot);

    let order: Vec<PanelId> = layout.panels_in_paint_order().iter().map(|p| p.id).collect();
    assert_eq!(order, vec![a, b]);
    assert_eq!(layout.topmost().map(|p| p.id), Some(b));
}

// ============================================================================
// Size floor
// ============================================================================

#[test]
fn test_add_clamps_to_minimum() {
    let mut layout = LayoutState::default();
    let id = layout.add_panel(panel_config(0.0, 0.0, 10.0, 10.0));
    let rect = layout.panel(id).unwrap().rect;
    assert_eq!((rect.width, rect.height), (120.0, 80.0));
}

#[test]
fn test_update_clamps_to_minimum() {
    let (mut model, ids) = test_model_with_panels(&[(0.0, 0.0, 400.0, 300.0)]);
    layout_msg(
        &mut model,
        LayoutMsg::UpdatePanel {
            id: ids[0],
            patch: PanelPatch::size(50.0, -20.0),
        },
    );
    let rect = model.layout.panel(ids[0]).unwrap().rect;
    assert_eq!((rect.width, rect.height), (120.0, 80.0));
}

#[test]
fn test_negative_position_is_kept() {
    let (mut model, ids) = test_model_with_panels(&[(0.0, 0.0, 400.0, 300.0)]);
    layout_msg(
        &mut model,
        LayoutMsg::UpdatePanel {
            id: ids[0],
            patch: PanelPatch::position(-500.0, -40.0),
        },
    );
    let rect = model.layout.panel(ids[0]).unwrap().rect;
    assert_eq!((rect.x, rect.y), (-500.0, -40.0));
}

// ============================================================================
// Metadata updates
// ============================================================================

#[test]
fn test_update_title_and_props() {
    let (mut model, ids) = test_model_with_panels(&[(0.0, 0.0, 400.0, 300.0)]);
    layout_msg(
        &mut model,
        LayoutMsg::UpdatePanel {
            id: ids[0],
            patch: PanelPatch::title("Renamed"),
        },
    );
    layout_msg(
        &mut model,
        LayoutMsg::UpdatePanel {
            id: ids[0],
            patch: PanelPatch::props(serde_json::json!({ "rows": [[1, 2]] })),
        },
    );

    let panel = model.layout.panel(ids[0]).unwrap();
    assert_eq!(panel.title, "Renamed");
    assert_eq!(panel.props["rows"][0][1], 2);
    assert_eq!(panel.rect, PanelRect::new(0.0, 0.0, 400.0, 300.0));
}

#[test]
fn test_empty_patch_does_not_redraw() {
    let (mut model, ids) = test_model_with_panels(&[(0.0, 0.0, 400.0, 300.0)]);
    let cmd = layout_msg(
        &mut model,
        LayoutMsg::UpdatePanel {
            id: ids[0],
            patch: PanelPatch::default(),
        },
    );
    assert_eq!(cmd, None);
}

// ============================================================================
// Absent ids
// ============================================================================

#[test]
fn test_remove_twice_second_is_noop() {
    let (mut model, ids) =
        test_model_with_panels(&[(0.0, 0.0, 200.0, 200.0), (300.0, 0.0, 200.0, 200.0)]);

    assert_eq!(
        layout_msg(&mut model, LayoutMsg::RemovePanel(ids[0])),
        Some(Cmd::Redraw)
    );
    assert_eq!(layout_msg(&mut model, LayoutMsg::RemovePanel(ids[0])), None);
    assert_eq!(model.layout.panel_ids(), vec![ids[1]]);
}

#[test]
fn test_operations_on_unknown_id_change_nothing() {
    let (mut model, _) = test_model_with_panels(&[(0.0, 0.0, 200.0, 200.0)]);
    let before = model.layout.snapshot();
    let ghost = PanelId(999);

    layout_msg(
        &mut model,
        LayoutMsg::UpdatePanel {
            id: ghost,
            patch: PanelPatch::position(10.0, 10.0),
        },
    );
    layout_msg(&mut model, LayoutMsg::RemovePanel(ghost));
    layout_msg(&mut model, LayoutMsg::BringToFront(ghost));

    assert_eq!(model.layout.snapshot(), before);
}

// ============================================================================
// Grid settings
// ============================================================================

#[test]
fn test_zero_grid_size_is_ignored() {
    let mut model = test_model();
    assert_eq!(layout_msg(&mut model, LayoutMsg::SetGridSize(0)), None);
    assert_eq!(model.layout.grid_size(), 20);

    assert_eq!(
        layout_msg(&mut model, LayoutMsg::SetGridSize(25)),
        Some(Cmd::Redraw)
    );
    assert_eq!(model.layout.grid_size(), 25);
}

#[test]
fn test_grid_toggles() {
    let mut model = test_model();
    layout_msg(&mut model, LayoutMsg::SetSnapToGrid(false));
    assert!(!model.layout.snap_to_grid());
    layout_msg(&mut model, LayoutMsg::ToggleSnapToGrid);
    assert!(model.layout.snap_to_grid());

    layout_msg(&mut model, LayoutMsg::SetGridVisible(true));
    assert!(model.layout.is_grid_visible());
    layout_msg(&mut model, LayoutMsg::ToggleGridVisible);
    assert!(!model.layout.is_grid_visible());
}

// ============================================================================
// Palette
// ============================================================================

#[test]
fn test_add_from_palette_cascades_in_view() {
    let mut model = test_model();
    model.viewport.scroll_x = 1000.0;

    layout_msg(&mut model, LayoutMsg::AddFromPalette(WidgetKind::GeoMap));
    layout_msg(&mut model, LayoutMsg::AddFromPalette(WidgetKind::GeoMap));

    let panels = model.layout.panels();
    assert_eq!(panels.len(), 2);
    assert_eq!(panels[0].rect, PanelRect::new(1040.0, 40.0, 600.0, 400.0));
    assert_eq!(panels[1].rect.x, panels[0].rect.x + 30.0);
    assert_eq!(panels[0].title, "Map");
}

// ============================================================================
// Snapshots
// ============================================================================

#[test]
fn test_snapshot_json_restores_layout_and_counter() {
    let (model, ids) =
        test_model_with_panels(&[(0.0, 0.0, 200.0, 200.0), (300.0, 0.0, 200.0, 200.0)]);
    let json = model.layout.snapshot().to_json().unwrap();
    assert!(json.contains("\"p1\""));
    assert!(json.contains("\"data-table\""));

    let snapshot = LayoutSnapshot::from_json(&json).unwrap();
    let mut restored = LayoutState::from_snapshot(snapshot);
    assert_eq!(restored.panel_ids(), ids);

    let fresh = restored.add_panel(panel_config(0.0, 0.0, 200.0, 200.0));
    assert!(!ids.contains(&fresh));
}

#[test]
fn test_snapshot_with_out_of_range_id_drops_that_panel() {
    let (model, ids) =
        test_model_with_panels(&[(0.0, 0.0, 200.0, 200.0), (300.0, 0.0, 200.0, 200.0)]);
    let json = model
        .layout
        .snapshot()
        .to_json()
        .unwrap()
        .replace("\"p2\"", "\"p18446744073709551615\"");

    let mut restored = LayoutState::from_snapshot(LayoutSnapshot::from_json(&json).unwrap());
    assert_eq!(restored.panel_ids(), vec![ids[0]]);

    let fresh = restored.add_panel(panel_config(0.0, 0.0, 200.0, 200.0));
    assert_eq!(fresh, PanelId(2));
}

#[test]
fn test_snapshot_with_max_z_still_accepts_new_panels() {
    let (model, ids) =
        test_model_with_panels(&[(0.0, 0.0, 200.0, 200.0), (300.0, 0.0, 200.0, 200.0)]);
    let mut snapshot = model.layout.snapshot();
    snapshot.panels[1].z_index = u32::MAX;

    let mut restored = LayoutState::from_snapshot(snapshot);
    assert_eq!(restored.max_z(), 2);

    let fresh = restored.add_panel(panel_config(0.0, 0.0, 200.0, 200.0));
    let z = |id| restored.panel(id).map(|p| p.z_index).unwrap();
    assert!(z(fresh) > z(ids[1]));
    assert!(z(ids[1]) > z(ids[0]));
}
