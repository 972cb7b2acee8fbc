use crate::app::App;
use crate::input::InputAction;
use memoria_core::PairCount;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::CloseOverlay => app.show_help = false,
        InputAction::MoveLeft => app.move_cursor(-1, 0),
        InputAction::MoveRight => app.move_cursor(1, 0),
        InputAction::MoveUp => app.move_cursor(0, -1),
        InputAction::MoveDown => app.move_cursor(0, 1),
        InputAction::Flip => app.flip_at_cursor(),
        InputAction::StartOrPause => app.start_or_pause(),
        InputAction::Pause => app.pause(),
        InputAction::Reset => app.reset_current(),
        InputAction::PairsSix => app.reset_with_pairs(PairCount::Six),
        InputAction::PairsEight => app.reset_with_pairs(PairCount::Eight),
        InputAction::PairsTen => app.reset_with_pairs(PairCount::Ten),
    }
}
