use egui::{Color32, Pos2, pos2};
use scribble_pals::palette::{MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH, PALETTE};
use scribble_pals::{AppState, Command, Mode, Stroke};

fn line(start: f32, len: usize) -> Vec<Pos2> {
    (0..len).map(|i| pos2(start + i as f32, start)).collect()
}

fn draw(state: &mut AppState, points: &[Pos2]) {
    let (first, rest) = points.split_first().unwrap();
    state.apply(Command::BeginStroke(*first));
    for point in rest {
        state.apply(Command::ExtendStroke(*point));
    }
    state.apply(Command::CommitStroke);
}

#[test]
fn test_single_point_gesture_commits_nothing() {
    let mut state = AppState::new();
    draw(&mut state, &line(10.0, 1));
    assert!(state.strokes().is_empty());
    assert!(state.buffer().is_empty());
}

#[test]
fn test_multi_point_gesture_commits_one_stroke() {
    for len in [2, 3, 17] {
        let mut state = AppState::new();
        state.apply(Command::SelectColor(PALETTE[3]));
        state.apply(Command::SetBrushWidth(20.0));
        let points = line(0.0, len);
        draw(&mut state, &points);

        assert_eq!(state.strokes().len(), 1);
        assert_eq!(
            state.strokes()[0],
            Stroke::new(PALETTE[3], 20.0, points.clone())
        );
        assert!(state.buffer().is_empty());
    }
}

#[test]
fn test_buffer_is_never_committed_early() {
    let mut state = AppState::new();
    state.apply(Command::BeginStroke(pos2(0.0, 0.0)));
    state.apply(Command::ExtendStroke(pos2(1.0, 0.0)));
    state.apply(Command::ExtendStroke(pos2(2.0, 0.0)));
    assert!(state.strokes().is_empty());
    assert_eq!(state.buffer().len(), 3);
}

#[test]
fn test_undo_removes_only_the_last_stroke() {
    let mut state = AppState::new();
    let a = line(0.0, 2);
    let b = line(10.0, 3);
    let c = line(20.0, 4);
    draw(&mut state, &a);
    draw(&mut state, &b);
    draw(&mut state, &c);

    state.apply(Command::Undo);
    state.apply(Command::Undo);

    assert_eq!(state.strokes().len(), 1);
    assert_eq!(state.strokes()[0].points(), a.as_slice());
}

#[test]
fn test_undo_on_empty_is_noop() {
    let mut state = AppState::new();
    state.apply(Command::SetMode(Mode::Freehand));
    let before = state.clone();
    state.apply(Command::Undo);
    assert_eq!(state, before);
}

#[test]
fn test_clear_empties_strokes_and_buffer() {
    let mut state = AppState::new();
    draw(&mut state, &line(0.0, 3));
    draw(&mut state, &line(5.0, 3));
    state.apply(Command::BeginStroke(pos2(1.0, 1.0)));
    state.apply(Command::ExtendStroke(pos2(2.0, 2.0)));

    state.apply(Command::Clear);
    assert!(state.strokes().is_empty());
    assert!(state.buffer().is_empty());

    // clearing an already empty canvas is fine too
    state.apply(Command::Clear);
    assert!(state.strokes().is_empty());
}

#[test]
fn test_next_prompt_cycles_and_resets_canvas() {
    let mut state = AppState::new();
    for k in 1..=12 {
        draw(&mut state, &line(0.0, 4));
        state.apply(Command::BeginStroke(pos2(3.0, 3.0)));
        state.apply(Command::NextPrompt);

        assert_eq!(state.prompt_index(), k % 5);
        assert!(state.strokes().is_empty());
        assert!(state.buffer().is_empty());
    }
}

#[test]
fn test_brush_width_clamps_to_bounds() {
    let mut state = AppState::new();
    state.apply(Command::SetBrushWidth(1.0));
    assert_eq!(state.brush_width(), MIN_BRUSH_WIDTH);
    state.apply(Command::SetBrushWidth(-40.0));
    assert_eq!(state.brush_width(), MIN_BRUSH_WIDTH);
    state.apply(Command::SetBrushWidth(1000.0));
    assert_eq!(state.brush_width(), MAX_BRUSH_WIDTH);
    state.apply(Command::SetBrushWidth(12.0));
    assert_eq!(state.brush_width(), 12.0);
    state.apply(Command::SetBrushWidth(47.25));
    assert_eq!(state.brush_width(), 47.25);
}

#[test]
fn test_arbitrary_color_is_accepted() {
    let custom = Color32::from_rgb(12, 34, 56);
    let state = AppState::new().reduce(Command::SelectColor(custom));
    assert_eq!(state.brush_color(), custom);
}

#[test]
fn test_scenario_sunny_smiles_to_rocket() {
    let mut state = AppState::new();
    assert_eq!(state.prompt().title, "Sunny Smiles");

    draw(&mut state, &line(0.0, 5));
    assert_eq!(state.strokes()[0].len(), 5);

    state.apply(Command::NextPrompt);
    assert!(state.strokes().is_empty());
    assert_eq!(state.prompt_index(), 1);
    assert_eq!(state.prompt().title, "Rocket Adventure");
}

#[test]
fn test_mode_toggle_is_side_effect_free() {
    let mut state = AppState::new();
    draw(&mut state, &line(0.0, 3));
    state.apply(Command::NextPrompt);
    draw(&mut state, &line(0.0, 3));

    state.apply(Command::SetMode(Mode::Freehand));
    state.apply(Command::SetMode(Mode::Puzzle));
    assert_eq!(state.prompt_index(), 1);
    assert_eq!(state.strokes().len(), 1);
}
