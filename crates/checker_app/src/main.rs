//! Command-line URL indexing checker for Google Search Console.

mod progress;
mod report_file;
mod table;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use dialoguer::Input;

use check_logging::{check_error, check_info, LogDestination};
use checker_core::{parse_url_block, parse_url_csv, render_csv, validate_property};
use checker_engine::{
    run_checks, CredentialProvider, FixedDelayPacer, InspectorSettings, ServiceAccountKey,
    ServiceAccountProvider,
    UrlInspectionClient, MAX_DELAY_SECS, MIN_DELAY_SECS,
};

use crate::progress::IndicatifProgressSink;
use crate::report_file::write_report;
use crate::table::render_table;

const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";
const DEFAULT_PROPERTY: &str = "sc-domain:cable.ru";
const DEFAULT_DELAY_SECS: u64 = 2;

/// Checks the Google indexing status of a list of URLs.
#[derive(Debug, Parser)]
#[command(name = "index-checker", version, about)]
struct Args {
    /// URL list: a text file with one URL per line, a CSV file with a
    /// `URL` column, or `-` for stdin.
    input: PathBuf,

    /// Search Console property (`https://...` or `sc-domain:...`).
    /// Prompted for interactively when omitted.
    #[arg(long)]
    property: Option<String>,

    /// Delay between requests in seconds (1-5).
    /// Prompted for interactively when omitted.
    #[arg(long)]
    delay: Option<u64>,

    /// Where to write the CSV report.
    #[arg(long, default_value = "google_indexing_results.csv")]
    output: PathBuf,

    /// Service-account key file; falls back to $GOOGLE_APPLICATION_CREDENTIALS.
    #[arg(long)]
    credentials: Option<PathBuf>,

    /// Log destination.
    #[arg(long, value_enum, default_value = "file")]
    log: LogTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    check_logging::initialize(args.log.into());

    let urls = load_urls(&args.input)?;
    if urls.is_empty() {
        bail!("во входных данных не найдено ни одного URL (строки должны начинаться с http)");
    }
    println!("Найдено {} URL для проверки.", urls.len());

    let property = resolve_property(args.property)?;
    let delay = resolve_delay(args.delay)?;

    let provider = connect(args.credentials).await?;
    let client = UrlInspectionClient::new(InspectorSettings::default(), provider)
        .context("не удалось создать HTTP-клиент")?;

    let pacer = FixedDelayPacer::from_secs(delay);
    let sink = IndicatifProgressSink::new(urls.len() as u64);
    let report = run_checks(&client, &urls, &property, &pacer, &sink).await;
    sink.finish();

    println!("\n✅ Проверка завершена!");
    println!("Проиндексировано: {}", report.summary().metric_text());
    println!();
    print!("{}", render_table(&report));

    let written = write_report(&args.output, &render_csv(&report))
        .context("не удалось сохранить отчёт")?;
    println!("\n📥 Отчёт сохранён: {}", written.display());
    Ok(())
}

/// Read the URL list from a file or stdin; CSV files go through the
/// `URL`-column parser, everything else is treated as a line block.
fn load_urls(input: &Path) -> anyhow::Result<Vec<String>> {
    let content = if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("не удалось прочитать stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("не удалось прочитать файл {}", input.display()))?
    };

    let is_csv = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let urls = if is_csv {
        parse_url_csv(&content)?
    } else {
        parse_url_block(&content)
    };
    check_info!("Parsed {} URLs from {}", urls.len(), input.display());
    Ok(urls)
}

fn resolve_property(from_args: Option<String>) -> anyhow::Result<String> {
    let raw = match from_args {
        Some(value) => value,
        None => Input::new()
            .with_prompt("URL собственности в Search Console")
            .default(DEFAULT_PROPERTY.to_string())
            .interact_text()
            .context("не удалось прочитать ввод")?,
    };
    Ok(validate_property(&raw)?)
}

fn resolve_delay(from_args: Option<u64>) -> anyhow::Result<u64> {
    let delay = match from_args {
        Some(value) => value,
        None => Input::new()
            .with_prompt(format!(
                "Задержка между запросами, сек ({MIN_DELAY_SECS}-{MAX_DELAY_SECS})"
            ))
            .default(DEFAULT_DELAY_SECS)
            .interact_text()
            .context("не удалось прочитать ввод")?,
    };
    if !(MIN_DELAY_SECS..=MAX_DELAY_SECS).contains(&delay) {
        bail!("задержка должна быть в диапазоне {MIN_DELAY_SECS}-{MAX_DELAY_SECS} секунд");
    }
    Ok(delay)
}

/// Load the service-account key and verify it by fetching a first token.
/// Any failure here is fatal: the run must not start without credentials.
async fn connect(
    from_args: Option<PathBuf>,
) -> anyhow::Result<Arc<ServiceAccountProvider>> {
    let path = from_args
        .or_else(|| std::env::var_os(CREDENTIALS_ENV).map(PathBuf::from))
        .with_context(|| {
            format!(
                "❌ Учётные данные не заданы: укажите --credentials или переменную {CREDENTIALS_ENV}"
            )
        })?;

    let startup = async {
        let key = ServiceAccountKey::from_file(&path)?;
        let provider = ServiceAccountProvider::new(key)?;
        provider.access_token().await?;
        Ok::<_, checker_engine::CredentialError>(provider)
    };

    match startup.await {
        Ok(provider) => Ok(Arc::new(provider)),
        Err(err) => {
            check_error!("Credential startup failed: {}", err);
            Err(err).context(
                "❌ Не удалось подключиться к Google Search Console API. Проверьте учётные данные",
            )
        }
    }
}
