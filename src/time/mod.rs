pub mod clock;
pub mod format;
pub mod local;
pub mod system_clock;
