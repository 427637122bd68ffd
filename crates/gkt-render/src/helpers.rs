//! # Template Helpers
//!
//! Named functions callable from inside templates. A [`HelperSet`] is handed
//! to [`TemplateRenderer::new`](crate::TemplateRenderer::new) and registered
//! on that renderer's private registry only, so two renderers never share
//! helper state.
//!
//! Standard set:
//!
//! | helper                       | example                                   |
//! |------------------------------|-------------------------------------------|
//! | `generate_chunks`            | `{{#each (generate_chunks data size=8)}}` |
//! | `hex_byte`                   | `{{hex_byte 255}}` → `0xff`               |
//! | `hex_offset`                 | `{{hex_offset offset}}` → `00000010`      |
//! | `sanitize_for_cpp`           | `{{sanitize_for_cpp name}}`               |
//! | `snake_to_camel_case`        | `{{snake_to_camel_case name}}`            |
//! | `snake_to_lower_camel_case`  | `{{snake_to_lower_camel_case name}}`      |
//! | `upper` / `lower`            | `{{upper array_name}}`                    |

use handlebars::{
    Context, Handlebars, Helper, HelperDef, JsonValue, PathAndJson, RenderContext, RenderError,
    RenderErrorReason, ScopedJson,
};

use gkt_core::{chunks, hex_byte, hex_offset, ChunkError, DEFAULT_CHUNK_SIZE};

/// A helper that can be registered on a renderer.
pub type BoxedHelper = Box<dyn HelperDef + Send + Sync>;

/// The helpers a renderer exposes, by name.
#[derive(Default)]
pub struct HelperSet {
    helpers: Vec<(String, BoxedHelper)>,
}

impl std::fmt::Debug for HelperSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelperSet")
            .field("names", &self.names())
            .finish()
    }
}

impl HelperSet {
    /// No helpers at all; templates only get Handlebars built-ins.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The helpers both generators ship with.
    pub fn standard() -> Self {
        Self::empty()
            .with("generate_chunks", Box::new(GenerateChunks))
            .with("hex_byte", Box::new(HexByte))
            .with("hex_offset", Box::new(HexOffset))
            .with_fn("sanitize_for_cpp", gkt_core::sanitize_identifier)
            .with_fn("snake_to_camel_case", gkt_core::snake_to_camel_case)
            .with_fn("snake_to_lower_camel_case", gkt_core::snake_to_lower_camel_case)
            .with_fn("upper", str::to_uppercase)
            .with_fn("lower", str::to_lowercase)
    }

    /// Add a helper. A later helper with the same name replaces the earlier.
    pub fn with(mut self, name: impl Into<String>, helper: BoxedHelper) -> Self {
        let name = name.into();
        self.helpers.retain(|(existing, _)| *existing != name);
        self.helpers.push((name, helper));
        self
    }

    /// Add a string-to-string transform as a one-argument helper.
    pub fn with_fn(self, name: &'static str, transform: fn(&str) -> String) -> Self {
        self.with(name, Box::new(StringTransform { name, transform }))
    }

    /// Registered helper names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.helpers.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub(crate) fn into_inner(self) -> Vec<(String, BoxedHelper)> {
        self.helpers
    }
}

// ---------------------------------------------------------------------------
// Parameter access
// ---------------------------------------------------------------------------

fn param<'a, 'rc>(
    h: &'a Helper<'rc>,
    helper: &'static str,
    index: usize,
) -> Result<&'a PathAndJson<'rc>, RenderError> {
    h.param(index)
        .ok_or_else(|| RenderErrorReason::ParamNotFoundForIndex(helper, index).into())
}

fn as_usize(value: &JsonValue, helper: &'static str) -> Result<usize, RenderError> {
    value
        .as_u64()
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| invalid(helper, "a non-negative integer", value))
}

fn invalid(helper: &str, expected: &str, got: &JsonValue) -> RenderError {
    RenderErrorReason::Other(format!("{helper}: expected {expected}, got {got}")).into()
}

fn byte_of(index: usize, value: &JsonValue) -> Result<u8, ChunkError> {
    value
        .as_u64()
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| ChunkError::NotAByte {
            index,
            value: value.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `generate_chunks data [size=N]`: rows of `{offset, bytes}` for `#each`.
///
/// `data` is an array of byte values or a string (its UTF-8 bytes).
pub struct GenerateChunks;

impl HelperDef for GenerateChunks {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        const NAME: &str = "generate_chunks";

        let data = param(h, NAME, 0)?.value();
        let bytes: Vec<u8> = match data {
            JsonValue::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| byte_of(i, v))
                .collect::<Result<_, _>>()
                .map_err(|e| RenderErrorReason::Other(format!("{NAME}: {e}")))?,
            JsonValue::String(s) => s.as_bytes().to_vec(),
            other => return Err(invalid(NAME, "an array of bytes", other)),
        };

        let size = match h.hash_get("size").or_else(|| h.param(1)) {
            Some(v) => as_usize(v.value(), NAME)?,
            None => DEFAULT_CHUNK_SIZE,
        };

        let rows = chunks(&bytes, size)
            .map_err(|e| RenderErrorReason::Other(format!("{NAME}: {e}")))?
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RenderErrorReason::Other(format!("{NAME}: {e}")))?;

        Ok(ScopedJson::Derived(JsonValue::Array(rows)))
    }
}

/// `hex_byte N` → `0xNN`.
pub struct HexByte;

impl HelperDef for HexByte {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let value = param(h, "hex_byte", 0)?.value();
        let byte = byte_of(0, value).map_err(|_| invalid("hex_byte", "a byte", value))?;
        Ok(ScopedJson::Derived(JsonValue::String(hex_byte(byte))))
    }
}

/// `hex_offset N` → eight lowercase hex digits.
pub struct HexOffset;

impl HelperDef for HexOffset {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let offset = as_usize(param(h, "hex_offset", 0)?.value(), "hex_offset")?;
        Ok(ScopedJson::Derived(JsonValue::String(hex_offset(offset))))
    }
}

/// Adapts a plain `fn(&str) -> String` into a one-argument helper.
pub struct StringTransform {
    name: &'static str,
    transform: fn(&str) -> String,
}

impl HelperDef for StringTransform {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let value = param(h, self.name, 0)?.value();
        let text = value
            .as_str()
            .ok_or_else(|| invalid(self.name, "a string", value))?;
        Ok(ScopedJson::Derived(JsonValue::String((self.transform)(
            text,
        ))))
    }
}
