pub mod favorites;
pub mod translate;

pub use favorites::{delete_favorite, load_favorite, save_favorite};
pub use translate::{run_translation, TranslationOutcome};
