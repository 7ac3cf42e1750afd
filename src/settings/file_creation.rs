use std::{fs, path::Path};

use crate::{AppwrapError, Result};

const SKELETON: &str = r#"# appwrap settings

[general]
# error | warn | info | debug | trace
log_level = "info"

[storage]
# Directory holding one <store_id>.json per store.
# data_dir = "/home/me/.appwrap/stores"

[store]
# Values the store platform would supply.
default_logo_url = ""
storefront_url = ""

[preview]
viewport_width = 276
viewport_height = 576
"#;

/// Writes a commented settings file if none exists yet.
pub fn create_default_settings_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AppwrapError::io_at(e, parent))?;
    }

    fs::write(path, SKELETON).map_err(|e| AppwrapError::io_at(e, path))?;

    Ok(())
}
