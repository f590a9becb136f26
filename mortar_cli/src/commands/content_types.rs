use super::{load_host, write_json};
use crate::args::ContentTypesArgs;
use crate::errors::CliResult;
use mortar_host::api::{AuthenticatedUserGuard, BackofficeUser, MortarApi};
use std::io::Write;

pub fn run(args: &ContentTypesArgs, out: &mut dyn Write) -> CliResult<()> {
    let host = load_host(&args.host)?;
    let api = MortarApi::new(&host, &AuthenticatedUserGuard);
    let operator = BackofficeUser::local_operator();

    let listed = api.get_content_types(Some(&operator), &args.allow)?;
    write_json(out, &listed, false)
}
