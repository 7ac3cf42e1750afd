use futures::Stream;
use serde_json::{Map, Value};
use tokio::sync::broadcast;
use tracing::{debug, info, instrument, warn};

use crate::{
    compose::{PreviewMode, Screen, compose_in},
    layout::Viewport,
    model::{AppConfig, FieldIssue, FieldKey, READ_ONLY_FIELDS, StoreInfo},
    resolve::{EffectiveConfig, resolve, resolve_all, resolve_field},
};

use super::{
    ConfigBackend, ConfigChange, EditorError, StoreInfoSource, changes::field_matches,
};

const CHANGE_CAPACITY: usize = 256;

/// The authoritative in-memory configuration of one store, with its preview.
///
/// The stored payload is kept as the JSON object the backend returned, so a
/// load followed by a save writes back exactly what was read. Every edit goes
/// through [`EditorSession::update_field`], which re-resolves and recomposes
/// the preview before returning.
#[derive(Debug)]
pub struct EditorSession {
    store_id: String,
    store: StoreInfo,
    payload: Map<String, Value>,
    config: AppConfig,
    effective: EffectiveConfig,
    screen: Screen,
    mode: PreviewMode,
    viewport: Viewport,
    dirty: bool,
    changes: broadcast::Sender<ConfigChange>,
}

impl EditorSession {
    /// Session for a store opening the configurator for the first time.
    pub fn new(store_id: impl Into<String>, store: StoreInfo) -> Self {
        let payload = match serde_json::to_value(AppConfig::initial()) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Self::build(store_id.into(), store, payload, AppConfig::initial())
    }

    /// Session over an already fetched payload.
    ///
    /// Store-supplied fields found in the payload are ignored; the `store`
    /// values win. Values of the wrong JSON type are read as unset and
    /// reported by [`EditorSession::issues`].
    ///
    /// # Errors
    /// Returns `EditorError::Serialization` if the payload is not a JSON
    /// object.
    pub fn from_payload(
        store_id: impl Into<String>,
        payload: Value,
        store: StoreInfo,
    ) -> Result<Self, EditorError> {
        let Value::Object(mut payload) = payload else {
            return Err(EditorError::Serialization {
                details: format!("expected a JSON object, got {payload}"),
            });
        };

        for key in READ_ONLY_FIELDS {
            if payload.remove(key).is_some() {
                debug!(field = key, "ignoring store-supplied field in stored payload");
            }
        }

        let mistyped = AppConfig::payload_issues(&payload);
        if !mistyped.is_empty() {
            warn!(count = mistyped.len(), "stored payload has values of the wrong type");
        }

        let config = config_from(&payload)?;
        Ok(Self::build(store_id.into(), store, payload, config))
    }

    /// Fetches a store's configuration and opens a session over it.
    ///
    /// A store without a stored payload starts from the first-visit defaults.
    ///
    /// # Errors
    /// Returns `EditorError::LoadFailed` when the backend fails or returns an
    /// unusable payload. No session is created in that case.
    #[instrument(skip(backend, stores))]
    pub async fn load(
        store_id: &str,
        backend: &dyn ConfigBackend,
        stores: &dyn StoreInfoSource,
    ) -> Result<Self, EditorError> {
        let load_failed = |details: String| EditorError::LoadFailed {
            store_id: store_id.to_string(),
            details,
        };

        let stored = backend
            .load(store_id)
            .await
            .map_err(|e| load_failed(e.to_string()))?;
        let store = stores.store_info(store_id);

        let session = match stored {
            Some(payload) => Self::from_payload(store_id, payload, store)
                .map_err(|e| load_failed(e.to_string()))?,
            None => {
                info!(store_id, "first visit, starting from defaults");
                Self::new(store_id, store)
            }
        };

        info!(
            store_id,
            fields = session.payload.len(),
            "configuration loaded"
        );
        Ok(session)
    }

    fn build(store_id: String, store: StoreInfo, payload: Map<String, Value>, mut config: AppConfig) -> Self {
        config.apply_store_info(&store);
        let effective = resolve(&config);
        let mode = PreviewMode::default();
        let viewport = Viewport::default();
        let screen = compose_in(&effective, mode, viewport);
        let (changes, _) = broadcast::channel(CHANGE_CAPACITY);

        Self {
            store_id,
            store,
            payload,
            config,
            effective,
            screen,
            mode,
            viewport,
            dirty: false,
            changes,
        }
    }

    /// Store this session edits.
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    /// Current configuration, with store values applied.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current resolved configuration.
    pub fn effective(&self) -> &EffectiveConfig {
        &self.effective
    }

    /// Current preview.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Current preview phase.
    pub fn mode(&self) -> PreviewMode {
        self.mode
    }

    /// Whether there are edits that have not been saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Stored values with the wrong shape for their field.
    pub fn issues(&self) -> Vec<FieldIssue> {
        let mut issues = AppConfig::payload_issues(&self.payload);
        issues.extend(self.config.validate());
        issues.sort_by_key(|issue| issue.field);
        issues
    }

    /// Every field's effective value, for populating the editor form.
    pub fn form_values(&self) -> Map<String, Value> {
        resolve_all(&self.config)
    }

    /// Moves the preview from the splash screen to the running app.
    pub fn finish_splash(&mut self) -> &Screen {
        self.mode = self.mode.advance();
        self.recompose();
        &self.screen
    }

    /// Lays the preview out on a different screen size.
    pub fn set_viewport(&mut self, viewport: Viewport) -> &Screen {
        self.viewport = viewport;
        self.recompose();
        &self.screen
    }

    /// Sets one field and refreshes the preview.
    ///
    /// `null` unsets the field so it falls back to its default.
    ///
    /// # Errors
    /// * `EditorError::ReadOnlyField` for store-supplied fields
    /// * `EditorError::UnknownField` for names outside the payload
    /// * `EditorError::TypeMismatch` when the value has the wrong type
    #[instrument(skip(self, value), fields(store_id = %self.store_id))]
    pub fn update_field(&mut self, name: &str, value: Value) -> Result<&Screen, EditorError> {
        let key = field_key(name)?;
        check_type(key, &value)?;

        let old_value = self.payload.get(name).cloned();
        let mut payload = self.payload.clone();
        if value.is_null() {
            payload.remove(name);
        } else {
            payload.insert(name.to_string(), value.clone());
        }

        let mut config = config_from(&payload)?;
        config.apply_store_info(&self.store);

        self.payload = payload;
        self.config = config;
        self.recompose();

        let changed = old_value.as_ref().unwrap_or(&Value::Null) != &value;
        if changed {
            debug!(field = name, new_value = %value, "field updated");
            self.dirty = true;
            let _ = self
                .changes
                .send(ConfigChange::new(key, old_value, value));
        }

        Ok(&self.screen)
    }

    /// Explicitly stored value of a field, `None` when unset.
    ///
    /// Store-supplied fields return the store's value.
    ///
    /// # Errors
    /// Returns `EditorError::UnknownField` for names that are not fields.
    pub fn get_field(&self, name: &str) -> Result<Option<Value>, EditorError> {
        match name {
            "default_logo_url" => return Ok(self.store.default_logo_url.clone().map(Value::from)),
            "storefront_url" => return Ok(self.store.storefront_url.clone().map(Value::from)),
            _ => {}
        }

        let key = field_key(name)?;
        Ok(self.payload.get(key.as_str()).cloned())
    }

    /// Effective value of a field after fallback.
    ///
    /// # Errors
    /// Returns `EditorError::UnknownField` for names that are not fields.
    pub fn effective_field(&self, name: &str) -> Result<Value, EditorError> {
        let key = field_key(name)?;
        Ok(resolve_field(key, &self.config))
    }

    /// The payload a save would write.
    ///
    /// Only explicitly set fields are included and store-supplied fields never
    /// are; defaults are not injected.
    pub fn save_payload(&self) -> Value {
        Value::Object(self.payload.clone())
    }

    /// Persists the configuration.
    ///
    /// Takes `&mut self`, so a session cannot run two saves at once; across
    /// sessions the last save wins.
    ///
    /// # Errors
    /// Returns `EditorError::SaveFailed` when the backend rejects the payload.
    /// The session keeps its edits and stays dirty so the save can be retried.
    #[instrument(skip(self, backend), fields(store_id = %self.store_id))]
    pub async fn save(&mut self, backend: &dyn ConfigBackend) -> Result<(), EditorError> {
        let payload = self.save_payload();

        if let Err(e) = backend.save(&self.store_id, &payload).await {
            warn!(error = %e, "save failed, keeping local edits");
            return Err(EditorError::SaveFailed {
                store_id: self.store_id.clone(),
                details: e.to_string(),
            });
        }

        self.dirty = false;
        info!(fields = self.payload.len(), "configuration saved");
        Ok(())
    }

    /// Stream of edits to fields matching `pattern`.
    ///
    /// Patterns are `"*"`, an exact field name, or a prefix such as `"fab_*"`.
    pub fn subscribe(&self, pattern: &str) -> impl Stream<Item = ConfigChange> + use<> {
        let pattern = pattern.to_string();
        let receiver = self.changes.subscribe();

        futures::stream::unfold(receiver, move |mut receiver| {
            let pattern = pattern.clone();
            async move {
                loop {
                    match receiver.recv().await {
                        Ok(change) => {
                            if field_matches(change.field.as_str(), &pattern) {
                                return Some((change, receiver));
                            }
                        }
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            warn!(skipped, "change subscriber lagged");
                        }
                        Err(broadcast::error::RecvError::Closed) => return None,
                    }
                }
            }
        })
    }

    fn recompose(&mut self) {
        self.effective = resolve(&self.config);
        self.screen = compose_in(&self.effective, self.mode, self.viewport);
    }
}

fn field_key(name: &str) -> Result<FieldKey, EditorError> {
    if FieldKey::is_read_only(name) {
        return Err(EditorError::ReadOnlyField(name.to_string()));
    }
    name.parse()
        .map_err(|_| EditorError::UnknownField(name.to_string()))
}

fn check_type(key: FieldKey, value: &Value) -> Result<(), EditorError> {
    let ok = key.kind().accepts(value);

    if ok {
        Ok(())
    } else {
        Err(EditorError::TypeMismatch {
            field: key,
            expected: key.kind().expected_type(),
            actual: value.clone(),
        })
    }
}

fn config_from(payload: &Map<String, Value>) -> Result<AppConfig, EditorError> {
    serde_json::from_value(Value::Object(payload.clone())).map_err(|e| EditorError::Serialization {
        details: e.to_string(),
    })
}
