//! Command line surface
//!
//! The subcommand tree is generated from the operation registry: one
//! subcommand per operation, one typed flag per parameter, plus `--select`
//! and, for mutating operations, `--force`.

use std::io::{self, BufRead, Write};

use clap::{Arg, ArgAction, ArgMatches, Args, Command, FromArgMatches};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};
use crate::operation::{
    find_operation, operations, InvocationContext, OperationDescriptor, ParamKind, ParamSpec,
    ParamValue,
};

const SELECT: &str = "select";
const FORCE: &str = "force";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Flags shared by every operation
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// AWS profile to use
    #[arg(long, env = "AWS_PROFILE", default_value = "default", global = true)]
    pub profile: String,

    /// AWS region (defaults to the profile's region)
    #[arg(long, env = "AWS_REGION", global = true)]
    pub region: Option<String>,

    /// Custom endpoint URL (LocalStack, VPC endpoints)
    #[arg(long, env = "AWS_ENDPOINT_URL", global = true)]
    pub endpoint_url: Option<String>,

    /// Log filter, e.g. `debug` or `voicectl=trace` (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

/// A fully parsed command line
#[derive(Debug)]
pub struct Invocation<'a> {
    pub global: GlobalArgs,
    pub context: InvocationContext<'a>,
    pub select: Option<String>,
    pub force: bool,
}

impl Invocation<'_> {
    pub fn descriptor(&self) -> &OperationDescriptor {
        self.context.descriptor()
    }
}

/// Build the full command tree
pub fn build_cli() -> Command {
    let cli = Command::new("voicectl")
        .about("Command-line client for the Amazon Chime SDK Voice API")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true);

    operations()
        .iter()
        .fold(GlobalArgs::augment_args(cli), |cli, op| {
            cli.subcommand(operation_command(op))
        })
}

fn operation_command(op: &OperationDescriptor) -> Command {
    let mut cmd = Command::new(op.command_name()).about(op.summary);

    for spec in op.params {
        cmd = cmd.arg(param_arg(spec));
    }

    let select_help = match op.default_select {
        Some(field) => format!(
            "What to return: a response field, '*' for the whole response or '^Param' for an input [default: {}]",
            field
        ),
        None => "What to return: a response field, '*' for the whole response or '^Param' for an input [default: *]"
            .to_string(),
    };
    cmd = cmd.arg(
        Arg::new(SELECT)
            .long(SELECT)
            .value_name("SELECT")
            .allow_hyphen_values(true)
            .help(select_help),
    );

    if op.mutating {
        cmd = cmd.arg(
            Arg::new(FORCE)
                .long(FORCE)
                .action(ArgAction::SetTrue)
                .help("Skip the confirmation prompt"),
        );
    }

    match op.deprecated {
        Some(advisory) => cmd.long_about(format!("{}\n\nDeprecated: {}", op.summary, advisory)),
        None => cmd,
    }
}

fn param_arg(spec: &ParamSpec) -> Arg {
    let required = if spec.required { " (required)" } else { "" };
    let arg = Arg::new(spec.name).long(spec.flag_name());

    match spec.kind {
        ParamKind::String => arg
            .value_name("STRING")
            .allow_hyphen_values(true)
            .help(format!("{}{}", spec.name, required)),
        ParamKind::Integer => arg
            .value_name("INT")
            .allow_negative_numbers(true)
            .help(format!("{}{}", spec.name, required)),
        ParamKind::Boolean => arg
            .value_name("BOOL")
            .value_parser(["true", "false"])
            .help(format!("{}{}", spec.name, required)),
        ParamKind::StringList => arg
            .value_name("STRING")
            .num_args(1..)
            .action(ArgAction::Append)
            .help(format!("{}{}, repeatable", spec.name, required)),
        ParamKind::Map => arg
            .value_name("KEY=VALUE")
            .num_args(1..)
            .action(ArgAction::Append)
            .help(format!("{}{}, repeatable", spec.name, required)),
        ParamKind::Json => arg
            .value_name("JSON")
            .help(format!("{}{} as a JSON document", spec.name, required)),
    }
}

/// Parse arguments into an [`Invocation`]
pub fn parse_invocation<I, T>(args: I) -> std::result::Result<Invocation<'static>, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_cli().try_get_matches_from(args)?;
    let global = GlobalArgs::from_arg_matches(&matches)?;

    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| CliError::Invocation(Error::UnknownOperation { name: String::new() }))?;
    let descriptor = find_operation(name).ok_or_else(|| {
        CliError::Invocation(Error::UnknownOperation {
            name: name.to_string(),
        })
    })?;

    let context = bind_context(descriptor, sub)?;

    Ok(Invocation {
        global,
        context,
        select: sub.get_one::<String>(SELECT).cloned(),
        force: descriptor.mutating && sub.get_flag(FORCE),
    })
}

/// Bind every flag present on the command line into a fresh context
pub fn bind_context<'a>(
    descriptor: &'a OperationDescriptor,
    matches: &ArgMatches,
) -> Result<InvocationContext<'a>> {
    let mut ctx = InvocationContext::new(descriptor);

    for spec in descriptor.params {
        let Some(raw) = matches.get_many::<String>(spec.name) else {
            continue;
        };
        let raw: Vec<&str> = raw.map(String::as_str).collect();

        let value = match spec.kind {
            ParamKind::StringList => {
                ParamValue::StringList(raw.iter().map(|s| s.to_string()).collect())
            }
            ParamKind::Map => ParamValue::parse_map(spec.name, raw.iter().copied())?,
            kind => {
                let single = raw.last().copied().unwrap_or_default();
                ParamValue::parse(spec.name, kind, single)?
            }
        };
        ctx.bind(spec.name, value)?;
    }

    Ok(ctx)
}

/// Ask the user to confirm a mutating operation on stdin
pub fn confirm(descriptor: &OperationDescriptor) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(
        stderr,
        "Are you sure you want to perform {}? [y/N] ",
        descriptor.name
    )?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Render a projected value for stdout; `None` means print nothing
pub fn render(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string())),
    }
}

/// Log filter from `--log-level`, else RUST_LOG, else `warn`
pub fn log_filter(level: Option<&str>) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    select_log_filter(level, from_env.as_deref())
}

/// First directive string that parses wins
fn select_log_filter(level: Option<&str>, from_env: Option<&str>) -> EnvFilter {
    [level, from_env]
        .into_iter()
        .flatten()
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Failure while turning arguments into an invocation
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Usage errors, `--help` and `--version`
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error(transparent)]
    Invocation(#[from] Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::build_request;
    use serde_json::json;

    fn parse(args: &[&str]) -> Invocation<'static> {
        let mut argv = vec!["voicectl"];
        argv.extend_from_slice(args);
        parse_invocation(argv).expect("valid command line")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_every_operation_has_a_subcommand() {
        let cli = build_cli();
        for op in operations() {
            assert!(
                cli.find_subcommand(op.command_name()).is_some(),
                "missing subcommand for {}",
                op.name
            );
        }
    }

    #[test]
    fn test_parse_list_with_select() {
        let inv = parse(&["list-phone-numbers", "--status", "Assigned", "--max-results", "10", "--select", "*"]);
        assert_eq!(inv.descriptor().name, "ListPhoneNumbers");
        assert_eq!(inv.select.as_deref(), Some("*"));
        assert_eq!(
            inv.context.get("Status"),
            Some(&ParamValue::String("Assigned".into()))
        );
        assert_eq!(inv.context.get("MaxResults"), Some(&ParamValue::Integer(10)));
        assert!(!inv.force);
    }

    #[test]
    fn test_unset_flags_are_not_bound() {
        let inv = parse(&["list-phone-numbers"]);
        assert!(inv.context.is_empty());
        assert!(inv.select.is_none());
    }

    #[test]
    fn test_list_and_map_flags() {
        let inv = parse(&[
            "create-sip-media-application-call",
            "--sip-media-application-id",
            "sma-1",
            "--from-phone-number",
            "+15550100",
            "--to-phone-number",
            "+15550199",
            "--sip-headers",
            "X-Trace=1",
            "--sip-headers",
            "X-Tenant=acme",
            "--force",
        ]);
        assert!(inv.force);
        assert_eq!(
            inv.context.get("SipHeaders").map(ParamValue::to_json),
            Some(json!({"X-Trace": "1", "X-Tenant": "acme"}))
        );

        let inv = parse(&["untag-resource", "--resource-arn", "arn:1", "--tag-keys", "env", "team"]);
        assert_eq!(
            inv.context.get("TagKeys"),
            Some(&ParamValue::StringList(vec!["env".into(), "team".into()]))
        );
    }

    #[test]
    fn test_boolean_and_json_flags_build_body() {
        let inv = parse(&[
            "create-sip-rule",
            "--name",
            "inbound",
            "--trigger-type",
            "ToPhoneNumber",
            "--trigger-value",
            "+15550100",
            "--disabled",
            "false",
            "--target-applications",
            r#"[{"SipMediaApplicationId": "sma-1", "Priority": 1}]"#,
        ]);
        let request = build_request(&inv.context).unwrap();
        assert_eq!(
            request.body,
            Some(json!({
                "Name": "inbound",
                "TriggerType": "ToPhoneNumber",
                "TriggerValue": "+15550100",
                "Disabled": false,
                "TargetApplications": [{"SipMediaApplicationId": "sma-1", "Priority": 1}]
            }))
        );
    }

    #[test]
    fn test_bad_integer_is_rejected() {
        let err = parse_invocation(["voicectl", "list-voice-connectors", "--max-results", "many"])
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Invocation(Error::InvalidParameterValue { ref name, .. }) if name == "MaxResults"
        ));
    }

    #[test]
    fn test_force_only_on_mutating_operations() {
        let err = parse_invocation(["voicectl", "get-sip-rule", "--sip-rule-id", "r", "--force"])
            .unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let inv = parse(&["list-sip-rules", "--region", "eu-central-1", "--profile", "voice"]);
        assert_eq!(inv.global.region.as_deref(), Some("eu-central-1"));
        assert_eq!(inv.global.profile, "voice");
    }

    #[test]
    fn test_log_filter_precedence() {
        let filter = |level, env| select_log_filter(level, env).to_string().to_ascii_lowercase();

        assert_eq!(filter(Some("debug"), Some("trace")), "debug");
        assert_eq!(filter(None, Some("trace")), "trace");
        assert_eq!(filter(None, None), "warn");
        // unparsable directives fall through to the next source
        assert_eq!(filter(Some("voicectl=loud"), Some("info")), "info");
        assert_eq!(filter(Some("voicectl=loud"), None), "warn");
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&Value::Null), None);
        assert_eq!(render(&json!("sma-1")).as_deref(), Some("sma-1"));
        assert_eq!(render(&json!({"a": 1})).as_deref(), Some("{\n  \"a\": 1\n}"));
    }
}
