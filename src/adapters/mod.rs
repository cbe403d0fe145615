mod console_notice;

pub use console_notice::ConsoleNotice;
