use super::{load_host, write_json};
use crate::args::PreValuesArgs;
use crate::errors::CliResult;
use mortar_host::api::{AuthenticatedUserGuard, BackofficeUser, MortarApi};
use std::io::Write;

/// Prints the editor configuration, or `null` for an unknown data type
pub fn run(args: &PreValuesArgs, out: &mut dyn Write) -> CliResult<()> {
    let host = load_host(&args.host)?;
    let api = MortarApi::new(&host, &AuthenticatedUserGuard);
    let operator = BackofficeUser::local_operator();

    let config = api.get_data_type_pre_values(Some(&operator), &args.dtd_id)?;
    write_json(out, &config, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::HostArgs;
    use crate::commands::tests::write_fixture;
    use serde_json::{json, Value as JsonValue};
    use tempfile::TempDir;

    fn pre_values(dtd_id: &str) -> JsonValue {
        let dir = TempDir::new().unwrap();
        let args = PreValuesArgs {
            host: HostArgs {
                fixture: write_fixture(dir.path()),
            },
            dtd_id: dtd_id.to_string(),
        };

        let mut out = Vec::new();
        run(&args, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_pre_values_by_id_and_guid() {
        let expected = json!({"maxChars": "80", "placeholder": ""});

        assert_eq!(pre_values("1040"), expected);
        assert_eq!(pre_values("0cc0eba1-9960-42c9-bf9b-60e150b429ae"), expected);
    }

    #[test]
    fn test_unknown_data_type_prints_null() {
        assert_eq!(pre_values("textstring"), JsonValue::Null);
        assert_eq!(pre_values("9999"), JsonValue::Null);
    }
}
