//! Clean the `PATH` of one or both scopes and report the result.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::{Args, ValueEnum};
use pathtidy::path::{ProcessEnv, RealFileSystem};
use pathtidy::processor::read_entries;
use pathtidy::{
    Disposition, EnvironmentStore, Logger, PathListProcessor, PlaceholderRegistry, Scope,
    ScopeReport,
};
use serde::Serialize;
use std::path::PathBuf;

/// Marker line around the cleaned list.
const BANNER: &str = "#####";

/// Clean PATH values.
#[derive(Args, Debug)]
pub struct CleanCommand {
    /// Which PATH to clean
    #[arg(long, value_enum, default_value = "all")]
    pub scope: ScopeArg,

    /// Read PATH values from a YAML snapshot instead of the registry
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Scope selection on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    User,
    Machine,
    All,
}

impl ScopeArg {
    /// Scopes to process, in order.
    pub fn scopes(self) -> Vec<Scope> {
        match self {
            ScopeArg::User => vec![Scope::User],
            ScopeArg::Machine => vec![Scope::Machine],
            ScopeArg::All => Scope::ALL.to_vec(),
        }
    }
}

/// How results are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Log lines on stderr only
    Text,
    /// Log lines on stderr plus a JSON document on stdout
    Json,
}

/// Cleaned lists keyed by scope, for JSON output.
#[derive(Debug, Default, Serialize)]
struct CleanedOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    machine: Option<Vec<String>>,
}

impl CleanedOutput {
    fn from_reports(reports: &[ScopeReport]) -> Self {
        let mut output = Self::default();
        for report in reports {
            let cleaned = Some(report.cleaned.clone());
            match report.scope {
                Scope::User => output.user = cleaned,
                Scope::Machine => output.machine = cleaned,
            }
        }
        output
    }
}

impl CleanCommand {
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        // 1. Load configuration and build the placeholder registry
        let config = load_configuration(global)?;
        let env = ProcessEnv;
        let registry = PlaceholderRegistry::from_config(&config, &env)?;

        // 2. Pick the environment store
        let store = open_store(self.snapshot.as_deref())?;

        // 3. Clean each scope, reporting as we go
        let processor = PathListProcessor::new(&registry, &env, &RealFileSystem)
            .with_max_depth(config.max_expansion_depth());
        let mut reports = Vec::new();
        for scope in self.scope.scopes() {
            let report = clean_scope(&processor, store.as_ref(), scope, logger)
                .map_err(|source| CliError::Scope { scope, source })?;
            render_report(&report, logger);
            reports.push(report);
        }

        // 4. Machine-readable output
        if self.format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(&CleanedOutput::from_reports(&reports))
                .map_err(|e| CliError::Io(e.into()))?;
            println!("{json}");
        }

        Ok(())
    }
}

fn clean_scope(
    processor: &PathListProcessor<'_, ProcessEnv, RealFileSystem>,
    store: &dyn EnvironmentStore,
    scope: Scope,
    logger: &Logger,
) -> pathtidy::Result<ScopeReport> {
    let entries = read_entries(store, scope)?;

    logger.debug(&format!("----- {scope} path entries -----"));
    for entry in &entries {
        logger.debug(entry);
    }

    processor.process_entries(scope, &entries)
}

fn render_report(report: &ScopeReport, logger: &Logger) {
    for entry in &report.entries {
        match entry.disposition {
            Disposition::Missing => logger.warn_with(
                "no longer exists",
                &[
                    ("path", entry.raw.as_str()),
                    ("true_path", entry.expanded.as_str()),
                ],
            ),
            Disposition::Accepted {
                ref display,
                replaced_prefix: Some(ref prefix),
            } => logger.info_with(
                "replaced",
                &[
                    ("path", entry.raw.as_str()),
                    ("prefix", prefix.as_str()),
                    ("replaced", display.as_str()),
                ],
            ),
            Disposition::Accepted { .. } | Disposition::Duplicate { .. } => {}
        }
    }

    logger.info(BANNER);
    logger.info(&report.joined());
    logger.info(BANNER);
}
