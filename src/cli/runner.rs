//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::SynthesisOptions;
use crate::constraints::mine_declared_parameter;
use crate::corpus::{load_bodies, project};
use crate::error::{Result, ResultExt};
use crate::infer::{Synthesized, Synthesizer};
use crate::spec::load_fields;
use crate::types::Dialect;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Infer {
                fields,
                samples,
                dialect,
                data_path,
            } => {
                self.infer(fields, samples, *dialect, data_path.as_deref())
                    .await
            }
            Commands::Params {
                doc_type,
                help_text,
            } => self.params(doc_type, help_text),
        }
    }

    /// Load options; command-line flags win over the file
    fn load_options(
        &self,
        dialect: Option<Dialect>,
        data_path: Option<&str>,
    ) -> Result<SynthesisOptions> {
        let mut options = match &self.cli.options {
            Some(path) => SynthesisOptions::from_file(path)?,
            None => SynthesisOptions::default(),
        };

        if let Some(dialect) = dialect {
            options.dialect = dialect;
        }
        if let Some(data_path) = data_path {
            options.data_path = data_path.to_string();
        }

        options.validate()?;
        Ok(options)
    }

    /// Synthesize an endpoint's output schema
    async fn infer(
        &self,
        fields_path: &Path,
        samples: &[PathBuf],
        dialect: Option<Dialect>,
        data_path: Option<&str>,
    ) -> Result<()> {
        let options = self.load_options(dialect, data_path)?;
        let fields = load_fields(fields_path)
            .with_context(|| format!("Loading fields from '{}'", fields_path.display()))?;
        let bodies = load_bodies(samples).await?;
        let data = project(&bodies, &options.data_path);

        tracing::info!(
            fields = fields.len(),
            bodies = bodies.len(),
            samples = data.len(),
            dialect = %options.dialect,
            "synthesizing output schema"
        );

        let synthesized = Synthesizer::new(options).synthesize_output(&fields, &data)?;

        // Diagnostics already reached stderr through `tracing` as they were raised
        self.output_message(&schema_message(&synthesized));

        Ok(())
    }

    /// Mine a parameter's constraints
    fn params(&self, doc_type: &str, help_text: &str) -> Result<()> {
        let mined = mine_declared_parameter(help_text, doc_type)?;

        self.output_message(&json!({
            "type": "PARAMETER",
            "schema": mined.schema,
        }));

        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// The `SCHEMA` message printed by `infer`
fn schema_message(synthesized: &Synthesized) -> Value {
    json!({
        "type": "SCHEMA",
        "schema": synthesized.schema,
        "diagnostics": synthesized.diagnostics,
    })
}
