/// Minimum terminal width required (columns)
pub(super) const MIN_TERMINAL_WIDTH: u16 = 60;
/// Minimum terminal height required (rows)
pub(super) const MIN_TERMINAL_HEIGHT: u16 = 12;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum InputMode {
    Edit,
    Help,
}
