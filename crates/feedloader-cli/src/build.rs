use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use feedloader_core::{Method, UploaderConfig};
use feedloader_uploader::{BatchCreator, BatchOutput, SourceRow};

#[derive(Debug, Args)]
pub(crate) struct BuildArgs {
    /// JSON file holding an array of row objects.
    #[arg(long)]
    pub(crate) input: PathBuf,

    /// Operation applied to every row.
    #[arg(long, default_value = "insert")]
    pub(crate) method: Method,

    /// Where to write the payloads; stdout when omitted.
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run(config: &UploaderConfig, args: &BuildArgs) -> anyhow::Result<()> {
    let rows = read_rows(&args.input)?;
    tracing::info!(
        rows = rows.len(),
        batch_size = config.batch_size,
        method = %args.method,
        is_mca = config.is_mca,
        "building batches"
    );

    let outputs = BatchCreator::new(config)
        .create_batches(&rows, args.method)
        .context("failed to build batch")?;
    for (batch_number, output) in outputs.iter().enumerate() {
        log_summary(batch_number, output);
    }

    let json = serde_json::to_string_pretty(&outputs)?;
    match &args.output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn read_rows(path: &Path) -> anyhow::Result<Vec<SourceRow>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse rows in {}", path.display()))
}

fn log_summary(batch_number: usize, output: &BatchOutput) {
    let entries = output.batch.entries.len();
    let skipped = output.skipped_item_ids.len();
    if skipped > 0 {
        tracing::warn!(
            batch_number,
            entries,
            skipped,
            skipped_item_ids = ?output.skipped_item_ids,
            "batch built with skipped items"
        );
    } else {
        tracing::info!(batch_number, entries, "batch built");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("feedloader-cli-{}-{name}", std::process::id()))
    }

    #[test]
    fn run_writes_batches_to_output_file() {
        let input = temp_path("rows.json");
        let output = temp_path("out.json");
        std::fs::write(
            &input,
            r#"[{"item_id": "A1", "price": "100"}, {"item_id": "A2"}, {"item_id": "A3"}]"#,
        )
        .unwrap();

        let mut config = UploaderConfig::new("1234567", "US", "en", "USD");
        config.batch_size = 2;
        let args = BuildArgs {
            input: input.clone(),
            method: Method::Delete,
            output: Some(output.clone()),
        };
        run(&config, &args).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written.as_array().unwrap().len(), 2);
        assert_eq!(
            written[1]["batch"]["entries"][0]["productId"],
            "online:en:US:A3"
        );
        assert_eq!(written[1]["batch_id_to_item_id"]["0"], "A3");

        std::fs::remove_file(input).ok();
        std::fs::remove_file(output).ok();
    }

    #[test]
    fn run_reports_unparseable_input() {
        let input = temp_path("bad.json");
        std::fs::write(&input, "{not json").unwrap();
        let config = UploaderConfig::new("1234567", "US", "en", "USD");
        let args = BuildArgs {
            input: input.clone(),
            method: Method::Insert,
            output: None,
        };
        let err = run(&config, &args).unwrap_err();
        assert!(err.to_string().contains("failed to parse rows"));
        std::fs::remove_file(input).ok();
    }
}
