//! Page rendering for the short-term indicator viewer.
//!
//! [`render_page`] is the whole per-interaction pipeline: it takes the loaded observation table
//! and the current selection and drives a [`DisplaySurface`]. It keeps no state between calls,
//! so a display layer can simply call it again whenever a dropdown changes (see [`Session`]).

pub mod cli;
mod html;
mod output;
mod page;
pub mod plotly;
mod session;
mod settings;
mod surface;
mod text;

pub use html::HtmlSurface;
pub use output::{write_output, OutputError};
pub use page::{render_page, PageOutcome};
pub use session::{Session, SessionCommand};
pub use settings::{SettingsError, ViewerSettings};
pub use surface::{DisplayCommand, DisplaySurface, RecordingSurface};
pub use text::TextSurface;
