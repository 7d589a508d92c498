use ratatui::style::Color;
use std::time::Duration;

// ========== Timing ==========
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);
pub const CTRL_C_WINDOW: Duration = Duration::from_secs(2);

// ========== Palette ==========
pub const BRAND_BLUE: (u8, u8, u8) = (0, 0, 255);
pub const BUTTON_BG: Color = Color::Blue;
pub const BUTTON_FG: Color = Color::White;
pub const TITLE_FG: Color = Color::White;
pub const DESCRIPTION_FG: Color = Color::Gray;
pub const INDICATOR_FG: Color = Color::DarkGray;
pub const INDICATOR_ACTIVE_FG: Color = Color::Blue;
pub const HINT_FG: Color = Color::DarkGray;

// ========== Layout ==========
pub const PRIMARY_BUTTON_WIDTH_PERCENT: u16 = 70;
pub const BACK_BUTTON_WIDTH: u16 = 7;
pub const SKIP_BUTTON_WIDTH: u16 = 8;
pub const BUTTON_HEIGHT: u16 = 3;

pub const APP_NAME: &str = "SmartTasks";
