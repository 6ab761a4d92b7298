use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    #[default]
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    BulletList,
    NumberedList,
    Todo,
    Code,
    Quote,
    Divider,
}

impl BlockType {
    pub fn is_paragraph(&self) -> bool {
        matches!(self, BlockType::Paragraph)
    }

    /// Dividers are the only variant with no editable text surface.
    pub fn has_text_surface(&self) -> bool {
        !matches!(self, BlockType::Divider)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "Text",
            BlockType::Heading1 => "Heading 1",
            BlockType::Heading2 => "Heading 2",
            BlockType::Heading3 => "Heading 3",
            BlockType::BulletList => "Bulleted list",
            BlockType::NumberedList => "Numbered list",
            BlockType::Todo => "To-do",
            BlockType::Code => "Code block",
            BlockType::Quote => "Quote",
            BlockType::Divider => "Divider",
        }
    }

    /// Prompt shown by the text surface while `content` is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "Type '/' for commands",
            BlockType::Heading1 => "Heading 1",
            BlockType::Heading2 => "Heading 2",
            BlockType::Heading3 => "Heading 3",
            BlockType::BulletList => "List item",
            BlockType::NumberedList => "List item",
            BlockType::Todo => "To-do",
            BlockType::Code => "Code",
            BlockType::Quote => "Quote",
            BlockType::Divider => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub block_type: BlockType,
    pub content: String,
}

impl Block {
    pub fn new(block_type: BlockType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            block_type,
            content: String::new(),
        }
    }

    pub fn empty_paragraph() -> Self {
        Self::new(BlockType::Paragraph)
    }
}
