/// Environment-driven settings (channel and role ids, bot token)
pub mod settings;

pub use settings::{Settings, load_token, parse_id};
