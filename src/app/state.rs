/// Window-level state that is not part of the upload record.
#[derive(Debug, Default)]
pub struct UiState {
    pub is_dragging: bool,
    pub error_message: Option<String>,
}

impl UiState {
    pub fn clear(&mut self) {
        *self = UiState::default();
    }
}
