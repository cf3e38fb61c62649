pub mod draft_pick;
pub mod draft_settings;
pub mod player;
pub mod position;

pub use position::Position;
