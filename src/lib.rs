// Library interface for vitrine
// This allows integration tests to access internal modules

pub mod config;
pub mod contact;
pub mod cursor;
pub mod errors;
pub mod preloader;
pub mod projects;
pub mod schedule;
pub mod tools;

// Re-export commonly used types
pub use config::AppConfig;
pub use contact::{ContactForm, ContactMessage, FormStatus, MailTransport};
pub use cursor::{CursorTrail, PositionHistory, Sample, TrailConfig, TrailSegment};
pub use errors::VitrineError;
pub use preloader::{LoadPhase, Preloader, PreloaderConfig, PreloaderState};
pub use projects::{Catalogue, Gallery, Project, TagFilter};
pub use schedule::{Deadline, FrameLoop, FrameScheduler, IntervalTimer};
pub use tools::{Joke, JokeBox, TOOLS, Tool};
