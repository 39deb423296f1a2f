pub mod config;
pub mod contact;
pub mod content;
pub mod counter;
pub mod filter;
pub mod notify;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod tabs;
pub mod telemetry;
pub mod theme;
pub mod timeline;
pub mod typewriter;
