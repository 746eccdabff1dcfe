//! Build-time secrets for the hooyeah webhook device.
//!
//! Credentials are compiled in as constants. `secrets.sample.rs` at the
//! crate root is the committed template; copy it to `secrets.rs` and fill
//! in real values before flashing. `secrets.rs` is excluded from git, and
//! when it is absent the build falls back to the template's placeholders
//! (with webhook authentication disabled).

pub mod secrets;

pub use secrets::Secrets;
