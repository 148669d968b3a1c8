//! Entity structs for the canonical project graph.
//!
//! Every extractor populates these same shapes. Field names follow the Lair
//! document vocabulary so a serialized `Project` can be handed to the
//! datastore as-is. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema`, and each has a constructor returning a fresh default record.

mod command;
mod host;
mod note;
mod os;
mod port;
mod project;
mod web_path;

pub use command::Command;
pub use host::Host;
pub use note::Note;
pub use os::Os;
pub use port::Port;
pub use project::Project;
pub use web_path::WebPath;
