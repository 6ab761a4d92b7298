use crate::blocks::BlockType;

/// Hover affordances on a block row. Each variant is a thin dispatch into the
/// editor; the controls themselves own no document data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockControl {
    AddBelow,
    SetType(BlockType),
    Delete,
}

/// Hover and popover visibility, kept apart from the document so the block
/// sequence stays serializable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlsState {
    hovered: Option<String>,
    actions_open: Option<String>,
}

impl ControlsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover_enter(&mut self, block_id: &str) {
        self.hovered = Some(block_id.to_string());
    }

    pub fn hover_leave(&mut self, block_id: &str) {
        if self.hovered.as_deref() == Some(block_id) {
            self.hovered = None;
        }
        if self.actions_open.as_deref() == Some(block_id) {
            self.actions_open = None;
        }
    }

    pub fn toggle_actions(&mut self, block_id: &str) {
        if self.actions_open.as_deref() == Some(block_id) {
            self.actions_open = None;
        } else {
            self.actions_open = Some(block_id.to_string());
        }
    }

    pub fn is_visible(&self, block_id: &str) -> bool {
        self.hovered.as_deref() == Some(block_id)
            || self.actions_open.as_deref() == Some(block_id)
    }

    pub fn actions_open_for(&self, block_id: &str) -> bool {
        self.actions_open.as_deref() == Some(block_id)
    }

    pub fn clear(&mut self) {
        self.hovered = None;
        self.actions_open = None;
    }
}
