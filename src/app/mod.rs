// App module structure for better organization

pub mod types;
pub mod core;
pub mod selection;
pub mod navigation;
pub mod search;
pub mod submit;
pub mod input;

// Re-export the main App struct and key types
pub use self::core::App;
pub use selection::Selection;
pub use submit::{SubmitOutcome, SubmitRequest};
pub use types::Mode;
