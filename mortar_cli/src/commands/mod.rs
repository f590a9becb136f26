pub mod content_types;
pub mod convert;
pub mod pre_values;

use crate::args::{Commands, HostArgs};
use crate::errors::CliResult;
use mortar_engine::config::RuntimeConfig;
use mortar_host::InMemoryHost;
use serde::Serialize;
use std::io::Write;

pub fn run(command: &Commands, config: &RuntimeConfig, out: &mut dyn Write) -> CliResult<()> {
    match command {
        Commands::Convert(args) => convert::run(args, &config.conversion, out).map(|_| ()),
        Commands::ContentTypes(args) => content_types::run(args, out),
        Commands::PreValues(args) => pre_values::run(args, out),
    }
}

pub(crate) fn load_host(args: &HostArgs) -> CliResult<InMemoryHost> {
    Ok(InMemoryHost::load(&args.fixture)?)
}

pub(crate) fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T, compact: bool) -> CliResult<()> {
    if compact {
        serde_json::to_writer(&mut *out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    pub const FIXTURE: &str = r#"{
        "schemas": [
            { "id": 9, "alias": "article", "properties": [ { "alias": "title", "kind": "textstring" } ] }
        ],
        "content": [ { "id": 42, "name": "About", "schemaAlias": "page", "url": "/about/" } ],
        "contentTypes": [
            { "id": 1, "guid": "6f1c3a52-2c1d-4c7b-9a51-0f4b1a9c1e01", "name": "News Article",
              "alias": "newsArticle", "icon": "icon-article", "sortOrder": 2 },
            { "id": 2, "guid": "6f1c3a52-2c1d-4c7b-9a51-0f4b1a9c1e02", "name": "Grid Banner",
              "alias": "gridBanner", "icon": "icon-banner", "sortOrder": 1 }
        ],
        "dataTypes": [
            { "id": 1040, "guid": "0cc0eba1-9960-42c9-bf9b-60e150b429ae", "name": "Textstring",
              "propertyEditorAlias": "Umbraco.Textbox", "preValues": { "maxChars": "80" } }
        ],
        "propertyEditors": [
            { "alias": "Umbraco.Textbox", "defaultPreValues": { "maxChars": 0, "placeholder": "" } }
        ],
        "currentPageId": 1200
    }"#;

    /// Write the shared host fixture into `dir`
    pub fn write_fixture(dir: &Path) -> PathBuf {
        let path = dir.join("host.json");
        fs::write(&path, FIXTURE).unwrap();
        path
    }
}
