use crate::blocks::BlockType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlashCommandDef {
    pub block_type: BlockType,
    pub label: &'static str,
    pub hint: Option<&'static str>,
}

pub const SLASH_COMMANDS: &[SlashCommandDef] = &[
    SlashCommandDef {
        block_type: BlockType::Paragraph,
        label: "Text",
        hint: Some("ctrl-alt-0"),
    },
    SlashCommandDef {
        block_type: BlockType::Heading1,
        label: "Heading 1",
        hint: Some("ctrl-alt-1"),
    },
    SlashCommandDef {
        block_type: BlockType::Heading2,
        label: "Heading 2",
        hint: Some("ctrl-alt-2"),
    },
    SlashCommandDef {
        block_type: BlockType::Heading3,
        label: "Heading 3",
        hint: Some("ctrl-alt-3"),
    },
    SlashCommandDef {
        block_type: BlockType::BulletList,
        label: "Bulleted list",
        hint: Some("ctrl-shift-8"),
    },
    SlashCommandDef {
        block_type: BlockType::NumberedList,
        label: "Numbered list",
        hint: Some("ctrl-shift-7"),
    },
    SlashCommandDef {
        block_type: BlockType::Todo,
        label: "To-do",
        hint: Some("ctrl-shift-9"),
    },
    SlashCommandDef {
        block_type: BlockType::Code,
        label: "Code block",
        hint: None,
    },
    SlashCommandDef {
        block_type: BlockType::Quote,
        label: "Quote",
        hint: None,
    },
    SlashCommandDef {
        block_type: BlockType::Divider,
        label: "Divider",
        hint: None,
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Transient overlay state. The menu never reads or writes block content;
/// it only remembers which block the trigger came from.
#[derive(Clone, Debug, PartialEq)]
pub struct SlashMenuState {
    pub open: bool,
    pub block_id: Option<String>,
    pub position: Point,
    pub selected_index: usize,
}

impl SlashMenuState {
    pub fn closed() -> Self {
        Self {
            open: false,
            block_id: None,
            position: Point::default(),
            selected_index: 0,
        }
    }

    pub fn open_at(block_id: &str, position: Point) -> Self {
        Self {
            open: true,
            block_id: Some(block_id.to_string()),
            position,
            selected_index: 0,
        }
    }

    pub fn move_selection(&mut self, forward: bool) {
        self.selected_index = cycle_index(self.selected_index, SLASH_COMMANDS.len(), forward);
    }

    pub fn selected(&self) -> Option<&'static SlashCommandDef> {
        SLASH_COMMANDS.get(self.selected_index)
    }
}

fn cycle_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        current.checked_sub(1).unwrap_or(len.saturating_sub(1))
    }
}
