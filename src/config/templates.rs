use crate::error::Result;
use std::path::Path;

/// Generate default cafe-data.toml template with comments
pub fn generate_default_config_template() -> String {
    r#"# cafe-data configuration

[api]
# API root; relative resource paths are joined beneath it
base_url = "http://localhost:8000/api/"
# Request timeout in seconds
timeout_seconds = 30
# Language used when no locale is supplied (two-letter code)
default_locale = "en"
# user_agent = "cafe-data/0.1"

[messages]
# Toast shown when the server fails or cannot be reached
server_error = "Something went wrong on our side. Please try again in a moment."
# Inline text for a rejected request that carries no message of its own
generic_error = "We couldn't load this right now."

[controller]
# discard_stale: only the most recent request may update state
# last_resolved_wins: whichever request finishes last updates state
stale_policy = "discard_stale"
"#
    .to_string()
}

/// Write the default template if `path` does not exist yet.
///
/// Returns `true` when a file was created.
pub fn ensure_config_file_exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, generate_default_config_template())?;
    tracing::info!(path = %path.display(), "wrote default configuration");
    Ok(true)
}
