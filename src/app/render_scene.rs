//! Builder für Render-Szenen aus dem AppState.

use crate::app::use_cases::drawing;
use crate::app::AppState;
use crate::shared::{DrawCommand, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Reihenfolge: Vorschau zuerst, danach alle Segmente in Einfügereihenfolge.
pub fn build(state: &AppState) -> RenderScene {
    let view_projection = state
        .view
        .camera
        .view_projection(&state.view.viewport.projection());
    let options = &state.options;

    let preview = drawing::preview(state);
    let preview_color = if preview.admission.is_admitted() {
        options.preview_color_admissible
    } else {
        options.preview_color_refused
    };

    let mut commands = Vec::with_capacity(state.network.len() + 1);
    commands.push(DrawCommand {
        transform: crate::core::segment_transform(preview.start, preview.end - preview.start)
            .then(&view_projection)
            .to_cols_array_2d(),
        color: preview_color,
    });

    commands.extend(state.network.iter().map(|segment| DrawCommand {
        transform: segment
            .model_transform()
            .then(&view_projection)
            .to_cols_array_2d(),
        color: options.saturation_color(segment.saturation()),
    }));

    RenderScene {
        clear_color: options.clear_color,
        commands,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::drawing::{commit_segment, reposition_anchor};
    use crate::core::Transform4;
    use glam::{Vec2, Vec4};

    fn clip_point(command: &DrawCommand, x: f32) -> Vec4 {
        Transform4(glam::Mat4::from_cols_array_2d(&command.transform))
            .mul_vec4(Vec4::new(x, 0.0, 0.0, 1.0))
    }

    #[test]
    fn preview_comes_first_and_segments_follow() {
        let mut state = AppState::new();
        state.view.viewport.size_px = [800.0, 800.0];
        commit_segment(&mut state, Vec2::new(10.0, 0.0));
        commit_segment(&mut state, Vec2::new(10.0, 10.0));

        let scene = build(&state);

        assert_eq!(scene.len(), 3);
        assert_eq!(scene.commands[0].color, state.options.preview_color_admissible);
        assert_eq!(scene.clear_color, state.options.clear_color);
    }

    #[test]
    fn segment_quad_maps_to_clip_space_endpoints() {
        let mut state = AppState::new();
        state.view.viewport.size_px = [800.0, 800.0];
        commit_segment(&mut state, Vec2::new(25.0, 0.0));

        let scene = build(&state);
        let start = clip_point(&scene.commands[1], 0.0);
        let end = clip_point(&scene.commands[1], 1.0);

        // sichtbare Breite 100 → Welt-x 25 liegt bei NDC 0.5
        assert!(start.x.abs() < 1e-5);
        assert!((end.x - 0.5).abs() < 1e-5);
        assert!(end.y.abs() < 1e-5);
    }

    #[test]
    fn refused_preview_uses_refused_color() {
        let mut state = AppState::new();
        for x in [2.0, 5.0, 8.0] {
            reposition_anchor(&mut state, Vec2::new(x, -5.0));
            commit_segment(&mut state, Vec2::new(x, 5.0));
        }
        reposition_anchor(&mut state, Vec2::ZERO);
        state.drawing.cursor_world = Vec2::new(10.0, 0.0);

        let scene = build(&state);

        assert_eq!(scene.commands[0].color, state.options.preview_color_refused);
        assert_ne!(scene.commands[0].color, state.options.preview_color_admissible);
    }

    #[test]
    fn singly_crossed_segments_use_mixed_color() {
        let mut state = AppState::new();
        reposition_anchor(&mut state, Vec2::new(0.0, -5.0));
        commit_segment(&mut state, Vec2::new(0.0, 5.0));
        reposition_anchor(&mut state, Vec2::new(-5.0, 0.0));
        commit_segment(&mut state, Vec2::new(5.0, 0.0));

        let scene = build(&state);

        // beide Segmente haben Sättigung 1 → Mischfarbe
        assert_eq!(scene.commands[1].color, state.options.saturation_color(1));
        assert_eq!(scene.commands[2].color, state.options.saturation_color(1));
    }

    #[test]
    fn doubly_crossed_segment_uses_saturated_color() {
        let mut state = AppState::new();
        reposition_anchor(&mut state, Vec2::new(0.0, 0.0));
        commit_segment(&mut state, Vec2::new(10.0, 0.0));
        for x in [2.0, 8.0] {
            reposition_anchor(&mut state, Vec2::new(x, -5.0));
            commit_segment(&mut state, Vec2::new(x, 5.0));
        }
        let saturations: Vec<u8> = state.network.iter().map(|s| s.saturation()).collect();
        assert_eq!(saturations, vec![2, 1, 1]);

        let scene = build(&state);

        let saturated = scene.commands[1].color;
        assert_eq!(saturated, state.options.saturation_color(2));
        for (actual, expected) in saturated.iter().zip(state.options.color_saturated) {
            assert!((actual - expected).abs() < 1e-6);
        }
        assert_ne!(saturated, scene.commands[2].color);
        assert_eq!(scene.commands[2].color, state.options.saturation_color(1));
    }
}
