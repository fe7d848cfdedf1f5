pub mod links;
pub mod platform;
pub mod release;

pub use links::LinkSet;
pub use platform::Platform;
pub use release::{Origin, Release, ReleaseType};
