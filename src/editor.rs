use crate::blocks::BlockType;
use crate::controls::BlockControl;
use crate::document::{BlockPatch, Document};
use crate::slash::{Point, SlashMenuState};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn char(ch: char) -> Self {
        Self::plain(Key::Char(ch))
    }

    pub fn ctrl_alt(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            ctrl: true,
            alt: true,
            shift: false,
        }
    }

    pub fn ctrl_shift(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            ctrl: true,
            alt: false,
            shift: true,
        }
    }

    fn has_modifier(&self) -> bool {
        self.ctrl || self.alt || self.shift
    }
}

/// `Handled` tells the host to suppress its default text editing for the
/// keystroke; `PassThrough` lets it proceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    PassThrough,
}

/// Focus transfer signal, drained by the host after its next render commit
/// so the target text surface exists before it is focused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusRequest {
    pub block_id: String,
}

/// Owns the canonical block sequence and the keyboard state machine. The
/// editor is either editing or showing the slash menu; while the menu is
/// open it exclusively owns key handling.
#[derive(Clone, Debug, PartialEq)]
pub struct Editor {
    document: Document,
    slash_menu: SlashMenuState,
    pending_focus: Option<FocusRequest>,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            slash_menu: SlashMenuState::closed(),
            pending_focus: None,
        }
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            slash_menu: SlashMenuState::closed(),
            pending_focus: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn slash_menu(&self) -> &SlashMenuState {
        &self.slash_menu
    }

    pub fn take_focus_request(&mut self) -> Option<FocusRequest> {
        self.pending_focus.take()
    }

    pub fn set_content(&mut self, block_id: &str, text: impl Into<String>) {
        self.document.update(block_id, BlockPatch::content(text));
    }

    pub fn set_block_type(&mut self, block_id: &str, block_type: BlockType) {
        self.document.update(block_id, BlockPatch::block_type(block_type));
    }

    /// Per-keystroke state machine for the active block's text surface.
    /// `caret` anchors the slash menu when the trigger fires and is ignored
    /// otherwise.
    pub fn handle_key_down(&mut self, event: KeyEvent, block_id: &str, caret: Point) -> KeyOutcome {
        if self.slash_menu.open {
            return self.handle_menu_key(event);
        }

        match event.key {
            Key::Char('/') if !event.has_modifier() => {
                let is_empty = self
                    .document
                    .get(block_id)
                    .is_some_and(|block| block.content.is_empty());
                if !is_empty {
                    return KeyOutcome::PassThrough;
                }
                debug!(block = block_id, "open slash menu");
                self.slash_menu = SlashMenuState::open_at(block_id, caret);
                KeyOutcome::Handled
            }
            Key::Char(digit) if event.ctrl && event.alt && !event.shift => {
                let Some(block_type) = heading_shortcut(digit) else {
                    return KeyOutcome::PassThrough;
                };
                self.set_block_type(block_id, block_type);
                KeyOutcome::Handled
            }
            Key::Char(digit) if event.ctrl && event.shift && !event.alt => {
                let Some(block_type) = list_shortcut(digit) else {
                    return KeyOutcome::PassThrough;
                };
                self.set_block_type(block_id, block_type);
                KeyOutcome::Handled
            }
            Key::Enter if !event.has_modifier() => {
                let new_id = self.document.insert_after(block_id, BlockType::Paragraph);
                self.pending_focus = Some(FocusRequest { block_id: new_id });
                KeyOutcome::Handled
            }
            Key::Backspace if !event.has_modifier() => {
                let is_empty = self
                    .document
                    .get(block_id)
                    .is_some_and(|block| block.content.is_empty());
                if !is_empty || self.document.len() <= 1 {
                    return KeyOutcome::PassThrough;
                }
                let predecessor = self
                    .document
                    .predecessor_id(block_id)
                    .map(str::to_string);
                if !self.document.delete(block_id) {
                    return KeyOutcome::PassThrough;
                }
                if let Some(block_id) = predecessor {
                    self.pending_focus = Some(FocusRequest { block_id });
                }
                KeyOutcome::Handled
            }
            _ => KeyOutcome::PassThrough,
        }
    }

    fn handle_menu_key(&mut self, event: KeyEvent) -> KeyOutcome {
        match event.key {
            Key::Escape => {
                self.close_slash_menu();
                KeyOutcome::Handled
            }
            Key::Up => {
                self.slash_menu.move_selection(false);
                KeyOutcome::Handled
            }
            Key::Down => {
                self.slash_menu.move_selection(true);
                KeyOutcome::Handled
            }
            Key::Enter => {
                if let Some(command) = self.slash_menu.selected() {
                    self.handle_slash_select(command.block_type);
                }
                KeyOutcome::Handled
            }
            _ => KeyOutcome::PassThrough,
        }
    }

    /// Applies a menu selection to the block that triggered it. The block's
    /// content is cleared so the trigger `/` never persists.
    pub fn handle_slash_select(&mut self, block_type: BlockType) {
        let target = self.slash_menu.block_id.clone();
        self.slash_menu = SlashMenuState::closed();
        let Some(target) = target else {
            return;
        };
        debug!(block = %target, ?block_type, "slash select");
        self.document.update(
            &target,
            BlockPatch {
                block_type: Some(block_type),
                content: Some(String::new()),
            },
        );
        self.pending_focus = Some(FocusRequest { block_id: target });
    }

    /// Outside click / Escape path from the menu overlay.
    pub fn close_slash_menu(&mut self) {
        self.slash_menu = SlashMenuState::closed();
    }

    pub fn apply_control(&mut self, block_id: &str, control: BlockControl) {
        match control {
            BlockControl::AddBelow => {
                let new_id = self.document.insert_after(block_id, BlockType::Paragraph);
                self.pending_focus = Some(FocusRequest { block_id: new_id });
            }
            BlockControl::SetType(block_type) => {
                self.set_block_type(block_id, block_type);
            }
            BlockControl::Delete => {
                let predecessor = self
                    .document
                    .predecessor_id(block_id)
                    .map(str::to_string);
                if self.document.delete(block_id) {
                    if let Some(block_id) = predecessor {
                        self.pending_focus = Some(FocusRequest { block_id });
                    }
                }
            }
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

fn heading_shortcut(digit: char) -> Option<BlockType> {
    match digit {
        '0' => Some(BlockType::Paragraph),
        '1' => Some(BlockType::Heading1),
        '2' => Some(BlockType::Heading2),
        '3' => Some(BlockType::Heading3),
        _ => None,
    }
}

fn list_shortcut(digit: char) -> Option<BlockType> {
    match digit {
        '7' => Some(BlockType::NumberedList),
        '8' => Some(BlockType::BulletList),
        '9' => Some(BlockType::Todo),
        _ => None,
    }
}
