//! Conversion Pipeline
//!
//! metadata -> parse three locales -> cross-locale checks -> build -> validate
//!
//! Metadata, parsing and cross-locale checks all run even when an earlier one
//! logged errors. The JSON validator only runs on a spec built from clean
//! sources; otherwise it would repeat every parse error as a path error.
//! Output is only rendered and written by the caller once `convert` returns
//! `Ok`.

use std::fs;
use std::path::Path;

use crate::compass::{parse_locales, Spec, SpecBuilder};
use crate::config::ConvertConfig;
use crate::error::{ConvertError, ErrorLog};
use crate::validate::validate_spec;

/// Run the full pipeline. Returns every accumulated message on failure.
pub fn convert(config: &ConvertConfig) -> Result<Spec, ConvertError> {
    let mut errors = ErrorLog::new();

    config.meta.validate(&mut errors);
    let docs = parse_locales(&config.sources, &mut errors);
    let spec = SpecBuilder::new(config.meta.clone()).build(&docs);

    if errors.is_empty() {
        let value = serde_json::to_value(&spec)?;
        validate_spec(&value, &config.output.display().to_string(), &mut errors);
    } else {
        tracing::debug!("Skipping spec validation after {} source error(s)", errors.len());
    }

    if errors.is_empty() {
        tracing::info!("Spec {} passed validation", spec.test_id);
    } else {
        tracing::warn!("Conversion found {} error(s)", errors.len());
    }
    errors.into_result(spec)
}

/// Pretty JSON (2-space indent) with a trailing newline. Non-ASCII text is
/// written as-is.
pub fn render_spec(spec: &Spec) -> Result<String, ConvertError> {
    let mut json = serde_json::to_string_pretty(spec)?;
    json.push('\n');
    Ok(json)
}

/// Render and write the spec, creating parent directories as needed.
pub fn write_spec(spec: &Spec, path: &Path) -> Result<(), ConvertError> {
    let json = render_spec(spec)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConvertError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, json).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compass::Localized;
    use crate::config::SpecMeta;
    use std::path::PathBuf;

    fn empty_spec() -> Spec {
        let meta = SpecMeta::new("test-values-compass", "values-compass", "values", 1);
        SpecBuilder::new(meta).build(&Localized::default())
    }

    #[test]
    fn test_render_keeps_non_ascii_and_trailing_newline() {
        let mut spec = empty_spec();
        spec.locales.pt_br.title = "Bússola de Valores".to_string();
        let json = render_spec(&spec).unwrap();
        assert!(json.contains("\"title\": \"Bússola de Valores\""));
        assert!(json.ends_with("}\n"));
        assert!(json.starts_with("{\n  \"test_id\""));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/specs/values-compass.json");
        write_spec(&empty_spec(), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_spec(&empty_spec()).unwrap());
    }

    #[test]
    fn test_missing_sources_and_bad_meta_are_all_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConvertConfig {
            meta: SpecMeta::new("test-values", "values-compass", "values", 1),
            sources: Localized::from_fn(|locale| dir.path().join(format!("{}.md", locale))),
            output: PathBuf::from("spec.json"),
        };
        let err = convert(&config).unwrap_err();
        let messages = err.messages();
        assert_eq!(messages[0], "test_id must align with slug");
        for locale in ["en", "es", "pt-BR"] {
            assert!(
                messages
                    .iter()
                    .any(|m| m.starts_with(locale) && m.ends_with("source file not found")),
                "no missing-file error for {}",
                locale
            );
        }
        assert!(messages.iter().all(|m| !m.starts_with("spec.json.")));
    }
}
