/// Everything a key press can ask the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    StepDown,
    Rotate,
    ToggleFocus,
    SelectOption(usize),
    NextOption,
    PrevOption,
    Submit,
    Restart,
    Dismiss,
    Quit,
}

/// Which panel the arrow keys drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Board,
    Quiz,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Board => Focus::Quiz,
            Focus::Quiz => Focus::Board,
        }
    }
}
