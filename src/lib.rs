pub mod blocks;
pub mod controls;
pub mod document;
pub mod editor;
pub mod render;
pub mod slash;

pub use blocks::{Block, BlockType};
pub use controls::{BlockControl, ControlsState};
pub use document::{BlockPatch, Document};
pub use editor::{Editor, FocusRequest, Key, KeyEvent, KeyOutcome};
pub use render::{render_blocks, BlockChrome, RenderBlock, TextStyle};
pub use slash::{Point, SlashCommandDef, SlashMenuState, SLASH_COMMANDS};
