pub(crate) const MIN_WINDOW_WIDTH: f32 = 480.0;
pub(crate) const MAX_WINDOW_WIDTH: f32 = 3840.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 360.0;
pub(crate) const MAX_WINDOW_HEIGHT: f32 = 2160.0;

pub(crate) fn default_window_width() -> f32 {
    900.0
}

pub(crate) fn default_window_height() -> f32 {
    700.0
}

pub(crate) fn default_seed_defaults() -> bool {
    true
}

pub(crate) fn default_newest_first() -> bool {
    true
}

pub(crate) fn default_confirm_delete() -> bool {
    true
}

pub(crate) fn default_confirm_clear() -> bool {
    true
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
