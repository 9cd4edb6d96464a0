use stackfall::core::{Field, FigureCatalog, GameConfig, GameController};
use stackfall::term::{AnchorY, GameView, Viewport};

fn playing(seed: u64) -> GameController {
    let mut game = GameController::new(GameConfig::default(), seed);
    game.restart();
    game
}

#[test]
fn term_view_renders_border_corners() {
    let game = GameController::new(GameConfig::default(), 1);
    let view = GameView::default();

    // 10 cells * 2 columns + border = 22 wide, 20 rows + border = 22 high
    let fb = view.render(game.state(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let game = playing(1);
    let mut rows = vec![".........."; 19];
    rows.push("I.........");
    let state = game
        .state()
        .with_field(Field::from_rows(&rows).unwrap());

    let fb = GameView::default().render(&state, Viewport::new(22, 22));
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_ghost_below_current() {
    let game = playing(3);
    let fb = GameView::default().render(game.state(), Viewport::new(22, 22));
    let text = fb.to_text();

    assert!(text.contains('░'));
    let first_ghost = text.lines().position(|line| line.contains('░')).unwrap();
    let first_block = text.lines().position(|line| line.contains('█')).unwrap();
    assert!(first_block < first_ghost);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let game = playing(4);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(game.state(), Viewport::new(60, 22));
    let text = fb.to_text();

    assert!(text.contains("SCORE"));
    assert!(text.contains("PIECES"));
    assert!(text.contains("NEXT"));

    let next: Vec<char> = game.state().next_queue().iter().map(|id| id.as_char()).collect();
    // field frame is centered: (60 - 22) / 2 = 19, panel starts two columns after it
    let panel_x = 19 + 22 + 2;
    let lines: Vec<&str> = text.lines().collect();
    let next_row = lines.iter().position(|line| line.contains("NEXT")).unwrap();
    for (i, letter) in next.iter().enumerate() {
        assert_eq!(fb.get(panel_x, (next_row + 1 + i) as u16).unwrap().ch, *letter);
    }
}

#[test]
fn term_view_hides_side_panel_when_narrow() {
    let game = playing(5);
    let fb = GameView::default().render(game.state(), Viewport::new(22, 22));
    assert!(!fb.to_text().contains("SCORE"));
}

#[test]
fn term_view_overlays_follow_phase() {
    let mut game = GameController::new(GameConfig::default(), 6);
    let view = GameView::default();
    let vp = Viewport::new(40, 24);

    assert!(view.render(game.state(), vp).to_text().contains("PRESS R"));

    game.restart();
    let text = view.render(game.state(), vp).to_text();
    assert!(!text.contains("PAUSED"));
    assert!(!text.contains("PRESS R"));

    game.set_pause(true);
    assert!(view.render(game.state(), vp).to_text().contains("PAUSED"));

    game.set_pause(false);
    while game.state().in_game() {
        game.tick();
    }
    assert!(view.render(game.state(), vp).to_text().contains("GAME OVER"));
}

#[test]
fn term_view_clips_field_wider_than_terminal() {
    let config = GameConfig::new(40_000, 20, 3, FigureCatalog::standard()).unwrap();
    let mut game = GameController::new(config, 7);
    game.restart();

    let fb = GameView::default().render(game.state(), Viewport::new(80, 24));

    // frame is 22 rows high, centered in 24
    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(79, 1).unwrap().ch, '─');
    let first_row = fb.row_text(2);
    assert!(first_row.starts_with('│'));
    assert!(first_row.chars().skip(1).all(|ch| ch == '·'));
    assert!(!fb.to_text().contains("SCORE"));
}

#[test]
fn term_view_clips_field_taller_than_terminal() {
    let config = GameConfig::new(10, 40_000, 3, FigureCatalog::standard()).unwrap();
    let mut game = GameController::new(config, 8);
    game.restart();

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(game.state(), Viewport::new(40, 24));

    assert_eq!(fb.get(9, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(30, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(9, 23).unwrap().ch, '│');
    assert!(fb.to_text().contains('█'));
}
