use crate::blocks::{Block, BlockType};
use crate::document::Document;

/// Glyph drawn beside the text surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockChrome {
    Plain,
    Bullet,
    Number(usize),
    Checkbox,
    Rule,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Body,
    Heading1,
    Heading2,
    Heading3,
    Code,
    Quote,
}

/// Per-block render descriptor handed to the host view. Borrowed from the
/// document; the renderer never caches or diverges from the editor's copy.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderBlock<'a> {
    pub id: &'a str,
    pub chrome: BlockChrome,
    pub style: TextStyle,
    pub placeholder: &'static str,
    pub content: &'a str,
    pub has_text_surface: bool,
}

pub fn render_blocks(document: &Document) -> Vec<RenderBlock<'_>> {
    let mut rendered = Vec::with_capacity(document.len());
    let mut ordinal = 0usize;
    for block in document.blocks() {
        if block.block_type == BlockType::NumberedList {
            ordinal += 1;
        } else {
            ordinal = 0;
        }
        rendered.push(render_block(block, ordinal));
    }
    rendered
}

fn render_block(block: &Block, ordinal: usize) -> RenderBlock<'_> {
    let (chrome, style) = match block.block_type {
        BlockType::Paragraph => (BlockChrome::Plain, TextStyle::Body),
        BlockType::Heading1 => (BlockChrome::Plain, TextStyle::Heading1),
        BlockType::Heading2 => (BlockChrome::Plain, TextStyle::Heading2),
        BlockType::Heading3 => (BlockChrome::Plain, TextStyle::Heading3),
        BlockType::BulletList => (BlockChrome::Bullet, TextStyle::Body),
        BlockType::NumberedList => (BlockChrome::Number(ordinal), TextStyle::Body),
        BlockType::Todo => (BlockChrome::Checkbox, TextStyle::Body),
        BlockType::Code => (BlockChrome::Plain, TextStyle::Code),
        BlockType::Quote => (BlockChrome::Plain, TextStyle::Quote),
        BlockType::Divider => (BlockChrome::Rule, TextStyle::Body),
    };
    RenderBlock {
        id: &block.id,
        chrome,
        style,
        placeholder: block.block_type.placeholder(),
        content: &block.content,
        has_text_surface: block.block_type.has_text_surface(),
    }
}

#[cfg(test)]
mod tests {
    use super::{render_blocks, BlockChrome, TextStyle};
    use crate::blocks::{Block, BlockType};
    use crate::document::Document;

    fn block(id: &str, block_type: BlockType, content: &str) -> Block {
        Block {
            id: id.to_string(),
            block_type,
            content: content.to_string(),
        }
    }

    #[test]
    fn divider_renders_rule_without_text_surface() {
        let document = Document::from_blocks(vec![
            block("a", BlockType::Paragraph, "hello"),
            block("b", BlockType::Divider, ""),
        ]);
        let rendered = render_blocks(&document);
        assert_eq!(rendered[1].chrome, BlockChrome::Rule);
        assert!(!rendered[1].has_text_surface);
        assert!(rendered[0].has_text_surface);
    }

    #[test]
    fn numbered_runs_count_up_and_restart() {
        let document = Document::from_blocks(vec![
            block("a", BlockType::NumberedList, "one"),
            block("b", BlockType::NumberedList, "two"),
            block("c", BlockType::Paragraph, "break"),
            block("d", BlockType::NumberedList, "one again"),
        ]);
        let rendered = render_blocks(&document);
        assert_eq!(rendered[0].chrome, BlockChrome::Number(1));
        assert_eq!(rendered[1].chrome, BlockChrome::Number(2));
        assert_eq!(rendered[3].chrome, BlockChrome::Number(1));
    }

    #[test]
    fn styles_follow_block_type() {
        let document = Document::from_blocks(vec![
            block("a", BlockType::Heading2, "title"),
            block("b", BlockType::Quote, "said"),
            block("c", BlockType::Todo, "do it"),
        ]);
        let rendered = render_blocks(&document);
        assert_eq!(rendered[0].style, TextStyle::Heading2);
        assert_eq!(rendered[1].style, TextStyle::Quote);
        assert_eq!(rendered[2].chrome, BlockChrome::Checkbox);
        assert_eq!(rendered[2].style, TextStyle::Body);
    }

    #[test]
    fn empty_paragraph_surfaces_slash_prompt() {
        let rendered_doc = Document::new();
        let rendered = render_blocks(&rendered_doc);
        assert_eq!(rendered[0].placeholder, "Type '/' for commands");
        assert_eq!(rendered[0].content, "");
    }
}
