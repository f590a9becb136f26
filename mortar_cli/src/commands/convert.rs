use super::{load_host, write_json};
use crate::args::ConvertArgs;
use crate::errors::{CliError, CliResult};
use mortar_engine::config::ConversionPreferences;
use mortar_engine::logging::{self, codes};
use mortar_engine::{
    log_error, log_info, log_success, try_convert, Document, MortarValueConverter,
    ResolutionContext,
};
use mortar_host::InMemoryHost;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub files: usize,
    pub converted: usize,
    pub empty: usize,
    pub failed: usize,
}

#[derive(Serialize)]
struct ConvertedFile<'a> {
    path: String,
    document: Option<&'a Document>,
}

pub fn run(
    args: &ConvertArgs,
    preferences: &ConversionPreferences,
    out: &mut dyn Write,
) -> CliResult<ConvertSummary> {
    let converter = MortarValueConverter::with_preferences(load_host(&args.host)?, preferences.clone());
    let ctx = context(&converter, args);

    if args.path.is_file() {
        let mut summary = ConvertSummary::default();
        let document = convert_file(&args.path, &ctx, &mut summary)?;
        write_json(out, &document, args.compact)?;
        return Ok(summary);
    }

    if !args.path.is_dir() {
        return Err(CliError::MissingInput(args.path.clone()));
    }

    let files = discover_stored_values(&args.path, &args.host.fixture)?;
    log_info!("Discovered stored values",
        "count" => files.len(),
        "directory" => args.path.display());

    let mut summary = ConvertSummary::default();
    let mut documents = Vec::with_capacity(files.len());
    for file in &files {
        documents.push((file, convert_file(file, &ctx, &mut summary)?));
    }

    let report: Vec<ConvertedFile<'_>> = documents
        .iter()
        .map(|(path, document)| ConvertedFile {
            path: path.display().to_string(),
            document: document.as_ref(),
        })
        .collect();
    write_json(out, &report, args.compact)?;

    log_success!(codes::success::DOCUMENT_CONVERTED, "Batch conversion completed",
        "files" => summary.files,
        "converted" => summary.converted,
        "empty" => summary.empty,
        "failed" => summary.failed);

    Ok(summary)
}

fn context<'a>(converter: &'a MortarValueConverter<InMemoryHost>, args: &ConvertArgs) -> ResolutionContext<'a> {
    match args.page_id {
        Some(page_id) => ResolutionContext::from_host(converter.host(), page_id, args.preview)
            .with_miss_reporting(converter.preferences().log_resolution_misses),
        None => converter.context(args.preview),
    }
}

/// A failed conversion renders as `null`; only I/O problems are errors
fn convert_file(
    path: &Path,
    ctx: &ResolutionContext<'_>,
    summary: &mut ConvertSummary,
) -> CliResult<Option<Document>> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    summary.files += 1;

    let result = logging::with_document_context(path.display().to_string(), || {
        try_convert(Some(&raw), ctx)
    });

    match result {
        Ok(Some(document)) => {
            summary.converted += 1;
            Ok(Some(document))
        }
        Ok(None) => {
            summary.empty += 1;
            Ok(None)
        }
        Err(source) => {
            summary.failed += 1;
            let err = CliError::Conversion {
                path: path.to_path_buf(),
                source,
            };
            log_error!(err.code(), "Stored value could not be converted",
                "file" => path.display(),
                "error" => &err);
            Ok(None)
        }
    }
}

/// Every `*.json` file under `dir` in name order, except the host fixture
fn discover_stored_values(dir: &Path, fixture: &Path) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| CliError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == "json")
            && path != fixture
        {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::HostArgs;
    use crate::commands::tests::write_fixture;
    use assert_matches::assert_matches;
    use serde_json::{json, Value as JsonValue};
    use tempfile::TempDir;

    fn args(path: PathBuf, fixture: PathBuf) -> ConvertArgs {
        ConvertArgs {
            path,
            host: HostArgs { fixture },
            page_id: None,
            preview: false,
            compact: true,
        }
    }

    fn run_to_json(args: &ConvertArgs) -> (ConvertSummary, JsonValue) {
        let mut out = Vec::new();
        let summary = run(args, &ConversionPreferences::default(), &mut out).unwrap();
        (summary, serde_json::from_slice(&out).unwrap())
    }

    #[test]
    fn test_convert_single_file() {
        let dir = TempDir::new().unwrap();
        let fixture = write_fixture(dir.path());
        let grid = dir.path().join("grid.json");
        fs::write(
            &grid,
            r#"{"main":[{"items":[
                {"type":"link","value":"42"},
                {"type":"doctype","value":{"title":"Hello","name":"My Node"},"additionalInfo":{"docType":"article"}}
            ]}]}"#,
        )
        .unwrap();

        let (summary, output) = run_to_json(&args(grid, fixture));

        assert_eq!(summary.converted, 1);
        let items = &output["main"][0]["items"];
        assert_eq!(items[0]["resolved"]["kind"], "contentReference");
        assert_eq!(items[0]["resolved"]["name"], "About");
        assert_eq!(items[1]["resolved"]["kind"], "nestedDocument");
        assert_eq!(items[1]["resolved"]["name"], "My Node");
        assert_eq!(items[1]["resolved"]["ownerContextId"], 1200);
    }

    #[test]
    fn test_page_id_overrides_fixture() {
        let dir = TempDir::new().unwrap();
        let fixture = write_fixture(dir.path());
        let grid = dir.path().join("grid.json");
        fs::write(&grid, r#"{"main":[{"items":[{"type":"richtext","value":"<p>hi</p>"}]}]}"#).unwrap();

        let mut args = args(grid, fixture);
        args.page_id = Some(77);
        let (_, output) = run_to_json(&args);

        assert_eq!(output["main"][0]["items"][0]["resolved"]["ownerContextId"], 77);
    }

    #[test]
    fn test_convert_directory() {
        let dir = TempDir::new().unwrap();
        let fixture = write_fixture(dir.path());
        let values = dir.path().join("values");
        fs::create_dir_all(values.join("nested")).unwrap();
        fs::write(values.join("a.json"), r#"{"main":[{"items":[{"type":"link","value":"42"}]}]}"#).unwrap();
        fs::write(values.join("b.json"), "{}").unwrap();
        fs::write(values.join("nested/c.json"), "{ not json").unwrap();
        fs::write(values.join("notes.txt"), "ignored").unwrap();

        let (summary, output) = run_to_json(&args(values, fixture));

        assert_eq!(
            summary,
            ConvertSummary {
                files: 3,
                converted: 1,
                empty: 1,
                failed: 1,
            }
        );
        let report = output.as_array().unwrap();
        assert_eq!(report.len(), 3);
        assert!(report[0]["path"].as_str().unwrap().ends_with("a.json"));
        assert_eq!(report[0]["document"]["main"][0]["items"][0]["resolved"]["id"], 42);
        assert_eq!(report[1]["document"], JsonValue::Null);
        assert_eq!(report[2]["document"], json!(null));
    }

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let fixture = write_fixture(dir.path());
        let mut out = Vec::new();

        assert_matches!(
            run(&args(dir.path().join("nope.json"), fixture), &ConversionPreferences::default(), &mut out),
            Err(CliError::MissingInput(_))
        );
    }
}
