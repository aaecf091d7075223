pub mod fingerprint;
pub mod library;
pub mod matches;
pub mod record;
pub mod submodule;

pub use fingerprint::*;
pub use library::*;
pub use matches::*;
pub use record::*;
pub use submodule::*;
