//! # Render Contexts
//!
//! The values a template sees. Both contexts are built fresh for one
//! invocation and serialized straight into the renderer.
//!
//! File names are stored as base names only, so "Generated from" comments in
//! the output stay the same when the build tree moves.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use gkt_core::{require_identifier, Identifier, TimestampPolicy};
use gkt_schema::Source;

use crate::error::RenderError;

/// `output_file` value when output goes to standard output.
pub const STDOUT_NAME: &str = "<stdout>";

/// Context for the codegen command.
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    /// `None` when timestamps are disabled.
    pub timestamp: Option<String>,
    pub input_files: Vec<String>,
    pub output_file: String,
    pub template_file: String,
    /// Sanitized stem of the output file, e.g. `json_serializers`.
    pub name: Identifier,
    /// Union of every source's includes and the extra includes, sorted.
    pub includes: Vec<String>,
    pub sources: Vec<Source>,
}

/// A validated descriptor together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub path: PathBuf,
    pub source: Source,
}

/// Everything [`build_context`] needs besides the sources.
#[derive(Debug, Clone)]
pub struct ContextOptions<'a> {
    pub template_file: &'a Path,
    pub output_file: Option<&'a Path>,
    pub extra_includes: &'a [String],
    pub timestamp: TimestampPolicy,
}

/// Base name of `path`, falling back to the whole path.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Base name up to the first `.`: `json_serializers.gen.h` → `json_serializers`.
fn stem(path: &Path) -> String {
    let name = base_name(path);
    match name.split_once('.') {
        Some((head, _)) => head.to_string(),
        None => name,
    }
}

/// Merge validated sources and invocation metadata into one [`Context`].
///
/// The context name comes from the output file, or from the first input
/// when writing to stdout.
pub fn build_context(
    sources: Vec<LoadedSource>,
    options: &ContextOptions<'_>,
) -> Result<Context, RenderError> {
    let name_from = options
        .output_file
        .or_else(|| sources.first().map(|s| s.path.as_path()))
        .map(stem)
        .unwrap_or_default();
    let name = require_identifier(&name_from)?;

    let includes: BTreeSet<String> = sources
        .iter()
        .flat_map(|s| s.source.includes.iter().cloned())
        .chain(options.extra_includes.iter().cloned())
        .collect();

    let input_files = sources.iter().map(|s| base_name(&s.path)).collect();
    let output_file = options
        .output_file
        .map(base_name)
        .unwrap_or_else(|| STDOUT_NAME.to_string());

    tracing::debug!(
        name = %name,
        sources = sources.len(),
        includes = includes.len(),
        "built codegen context"
    );

    Ok(Context {
        timestamp: options.timestamp.render(),
        input_files,
        output_file,
        template_file: base_name(options.template_file),
        name,
        includes: includes.into_iter().collect(),
        sources: sources.into_iter().map(|s| s.source).collect(),
    })
}

/// Context for the hexdump command.
#[derive(Debug, Clone, Serialize)]
pub struct HexdumpContext {
    /// Base name of the embedded file.
    pub input_file: String,
    pub array_name: Identifier,
    /// Declaration (header) form instead of the definition.
    pub header: bool,
    pub timestamp: Option<String>,
    pub data: Vec<u8>,
    pub data_len: usize,
}

impl HexdumpContext {
    pub fn new(
        input_file: &Path,
        array_name: Identifier,
        header: bool,
        timestamp: TimestampPolicy,
        data: Vec<u8>,
    ) -> Self {
        Self {
            input_file: base_name(input_file),
            array_name,
            header,
            timestamp: timestamp.render(),
            data_len: data.len(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str, includes: &[&str]) -> Source {
        Source {
            name: name.to_string(),
            includes: includes.iter().map(|s| s.to_string()).collect(),
            namespace: None,
            types: None,
            enums: None,
        }
    }

    fn loaded(path: &str, src: Source) -> LoadedSource {
        LoadedSource {
            path: PathBuf::from(path),
            source: src,
        }
    }

    fn options<'a>(output: Option<&'a Path>, extra: &'a [String]) -> ContextOptions<'a> {
        ContextOptions {
            template_file: Path::new("/repo/tools/templates/json_header.hbs"),
            output_file: output,
            extra_includes: extra,
            timestamp: TimestampPolicy::Omit,
        }
    }

    #[test]
    fn includes_are_deduplicated() {
        let sources = vec![
            loaded("a.yaml", source("a", &["a.h", "b.h"])),
            loaded("b.yaml", source("b", &["b.h", "c.h"])),
        ];
        let ctx = build_context(sources, &options(Some(Path::new("out.h")), &[])).unwrap();
        assert_eq!(ctx.includes, vec!["a.h", "b.h", "c.h"]);
    }

    #[test]
    fn extra_includes_join_the_union() {
        let extra = vec!["c.h".to_string(), "z.h".to_string()];
        let sources = vec![loaded("a.yaml", source("a", &["a.h", "c.h"]))];
        let ctx = build_context(sources, &options(Some(Path::new("out.h")), &extra)).unwrap();
        assert_eq!(ctx.includes, vec!["a.h", "c.h", "z.h"]);
    }

    #[test]
    fn paths_are_reduced_to_base_names() {
        let sources = vec![loaded("/repo/desc/mesh_desc.gen.yaml", source("mesh_desc", &[]))];
        let out = Path::new("/build/generated/json_serializers.gen.h");
        let ctx = build_context(sources, &options(Some(out), &[])).unwrap();

        assert_eq!(ctx.input_files, vec!["mesh_desc.gen.yaml"]);
        assert_eq!(ctx.output_file, "json_serializers.gen.h");
        assert_eq!(ctx.template_file, "json_header.hbs");
        assert_eq!(ctx.name.as_str(), "json_serializers");
        assert!(ctx.timestamp.is_none());
    }

    #[test]
    fn name_is_sanitized() {
        let sources = vec![loaded("x.yaml", source("x", &[]))];
        let ctx = build_context(sources, &options(Some(Path::new("2d-shapes.h")), &[])).unwrap();
        assert_eq!(ctx.name.as_str(), "_2d_shapes");
    }

    #[test]
    fn stdout_output_uses_first_input_for_name() {
        let sources = vec![loaded("dir/scene_desc.gen.yaml", source("scene", &[]))];
        let ctx = build_context(sources, &options(None, &[])).unwrap();
        assert_eq!(ctx.output_file, STDOUT_NAME);
        assert_eq!(ctx.name.as_str(), "scene_desc");
    }

    #[test]
    fn unnameable_output_is_rejected() {
        let sources = vec![loaded("x.yaml", source("x", &[]))];
        let err = build_context(sources, &options(Some(Path::new(".hidden")), &[])).unwrap_err();
        assert!(matches!(err, RenderError::Ident(_)));
    }

    #[test]
    fn pinned_timestamp_is_used() {
        let mut opts = options(Some(Path::new("out.h")), &[]);
        opts.timestamp = TimestampPolicy::resolve(false, Some("0")).unwrap();
        let ctx = build_context(vec![], &opts).unwrap();
        assert_eq!(ctx.timestamp.as_deref(), Some("1970-01-01 00:00:00"));
    }

    #[test]
    fn absent_types_or_enums_render_as_empty() {
        use gkt_schema::{Enum, EnumElement, Type};

        let mut types_only = source("mesh_desc", &[]);
        types_only.types = Some(vec![Type {
            name: "mesh".to_string(),
            fields: Vec::new(),
            comment: String::new(),
        }]);
        let mut enums_only = source("format_desc", &[]);
        enums_only.enums = Some(vec![Enum {
            name: "format".to_string(),
            elems: vec![EnumElement {
                name: "RGBA8".to_string(),
                value: 0,
                comment: String::new(),
            }],
        }]);

        let sources = vec![
            loaded("mesh_desc.yaml", types_only),
            loaded("format_desc.yaml", enums_only),
        ];
        let ctx = build_context(sources, &options(Some(Path::new("out.h")), &[])).unwrap();

        let template = "{{#each sources}}{{name}}:{{#each types}}T={{name}} {{/each}}{{#each enums}}E={{name}} {{/each}};{{/each}}";
        let out = crate::TemplateRenderer::standard().render(template, &ctx).unwrap();
        assert_eq!(out, "mesh_desc:T=mesh ;format_desc:E=format ;");
    }

    #[test]
    fn hexdump_context_counts_bytes() {
        let name = require_identifier("logo.png").unwrap();
        let ctx = HexdumpContext::new(
            Path::new("/assets/logo.png"),
            name,
            false,
            TimestampPolicy::Omit,
            vec![1, 2, 3],
        );
        assert_eq!(ctx.input_file, "logo.png");
        assert_eq!(ctx.array_name.as_str(), "logo_png");
        assert_eq!(ctx.data_len, 3);

        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["timestamp"], serde_json::Value::Null);
    }
}
