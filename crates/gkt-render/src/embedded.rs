//! Built-in templates, compiled into the binary.
//!
//! Templates live under `templates/` next to this crate's manifest and are
//! pulled in with [`include_str!`], so a path typo fails the build.

/// Default hexdump template. Renders a [`HexdumpContext`](crate::HexdumpContext):
/// the include-guarded declarations when `header` is set, otherwise the
/// array definition.
pub const HEXDUMP: &str = include_str!("../templates/hexdump.hbs");
