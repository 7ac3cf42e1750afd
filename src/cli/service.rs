use std::path::Path;

use serde_json::Value;
use tracing::instrument;

use crate::{
    compose::PreviewMode,
    editor::{ConfigBackend, EditorSession, JsonFileBackend},
    layout::Viewport,
    model::{AppConfig, FieldKey, StoreInfo},
    settings::Settings,
};

use super::{
    CliError, CommandResult, Commands, OutputFormat, SourceArgs,
    formatting::{format_field, format_issues, format_json_value, format_screen, format_values},
};

/// Label used for sessions opened from a payload file.
const INPUT_STORE_ID: &str = "input";

/// Runs CLI commands against the configured store backend.
///
/// Every command works through an [`EditorSession`], the same path the
/// interactive editor uses.
pub struct CliService {
    backend: Box<dyn ConfigBackend>,
    store: StoreInfo,
    viewport: Viewport,
}

impl CliService {
    /// Service using the data directory, store values and viewport from the
    /// settings.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be determined.
    pub fn new(settings: &Settings) -> Result<Self, CliError> {
        let backend = JsonFileBackend::new(settings.storage.resolved_data_dir()?);
        Ok(Self::with_backend(Box::new(backend), settings))
    }

    /// Service over an explicit backend.
    pub fn with_backend(backend: Box<dyn ConfigBackend>, settings: &Settings) -> Self {
        Self {
            backend,
            store: settings.store.store_info(),
            viewport: settings.preview.viewport(),
        }
    }

    /// Executes one command and returns its output.
    ///
    /// # Errors
    /// Returns a `CliError` describing why the command failed.
    pub async fn execute(&self, command: Commands) -> CommandResult {
        match command {
            Commands::Preview {
                source,
                mode,
                format,
            } => self.preview(&source, mode, format).await,
            Commands::Resolve { source, format } => self.resolve(&source, format).await,
            Commands::Get { field, store } => self.get(&store, &field).await,
            Commands::Set {
                field,
                value,
                store,
            } => self.set(&store, &field, &value).await,
            Commands::Schema => schema(),
        }
    }

    #[instrument(skip(self))]
    async fn preview(
        &self,
        source: &SourceArgs,
        mode: PreviewMode,
        format: OutputFormat,
    ) -> CommandResult {
        let mut session = self.open(source).await?;
        session.set_viewport(self.viewport);
        if mode == PreviewMode::App {
            session.finish_splash();
        }

        let screen = session.screen();
        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(screen)?,
            OutputFormat::Text => format_screen(screen),
        })
    }

    #[instrument(skip(self))]
    async fn resolve(&self, source: &SourceArgs, format: OutputFormat) -> CommandResult {
        let session = self.open(source).await?;

        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(session.effective())?,
            OutputFormat::Text => {
                let values = session.form_values();
                let mut output = format_values(&values);
                let issues = session.issues();
                if !issues.is_empty() {
                    output.push('\n');
                    output.push_str(&format_issues(&issues));
                }
                output
            }
        })
    }

    #[instrument(skip(self))]
    async fn get(&self, store_id: &str, field: &str) -> CommandResult {
        let session = EditorSession::load(store_id, self.backend.as_ref(), &self.store).await?;

        let stored = session.get_field(field)?.unwrap_or(Value::Null);
        if FieldKey::is_read_only(field) {
            return Ok(format!("{} = {}", format_field(field), format_json_value(&stored)));
        }

        let effective = session.effective_field(field)?;
        Ok(format!(
            "{} = {} (effective: {})",
            format_field(field),
            format_json_value(&stored),
            format_json_value(&effective)
        ))
    }

    #[instrument(skip(self))]
    async fn set(&self, store_id: &str, field: &str, raw: &str) -> CommandResult {
        let mut session = EditorSession::load(store_id, self.backend.as_ref(), &self.store).await?;

        let value = parse_value(raw);
        session.update_field(field, value.clone())?;
        session.save(self.backend.as_ref()).await?;

        Ok(format!("{} = {}", format_field(field), format_json_value(&value)))
    }

    async fn open(&self, source: &SourceArgs) -> Result<EditorSession, CliError> {
        match (&source.store, &source.input) {
            (Some(store_id), _) => {
                Ok(EditorSession::load(store_id, self.backend.as_ref(), &self.store).await?)
            }
            (None, Some(path)) => {
                let payload = read_payload(path).await?;
                Ok(EditorSession::from_payload(
                    INPUT_STORE_ID,
                    payload,
                    self.store.clone(),
                )?)
            }
            (None, None) => Err(CliError::InvalidArguments(
                "either --store or --input is required".to_string(),
            )),
        }
    }
}

/// Parses a command-line value as JSON, treating bare words as strings.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

async fn read_payload(path: &Path) -> Result<Value, CliError> {
    let content = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&content).map_err(|e| {
        CliError::InvalidArguments(format!("{} is not valid JSON: {e}", path.display()))
    })
}

fn schema() -> CommandResult {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
