use crate::error::QuillResult;
use once_cell::sync::Lazy;
use std::{env, fs};
use structs::Settings;

pub mod structs;

static CONFIG_FILE: &str = "config/config.hjson";

#[allow(clippy::expect_used)]
pub static SETTINGS: Lazy<Settings> =
  Lazy::new(|| Settings::init().expect("Failed to load settings file"));

impl Settings {
  /// Reads config from the hjson config file, falling back to defaults for anything the file
  /// leaves out. A missing file means a full default config, which is enough for local
  /// development and tests.
  fn init() -> QuillResult<Self> {
    let config = match fs::read_to_string(Self::get_config_location()) {
      Ok(file) => deser_hjson::from_str::<Settings>(&file)?,
      Err(_) => Settings::default(),
    };
    Ok(config)
  }

  pub fn get_config_location() -> String {
    env::var("QUILL_CONFIG_LOCATION").unwrap_or_else(|_| CONFIG_FILE.to_string())
  }

  /// The env var `QUILL_DATABASE_URL` beats whatever the config file says, mainly so tests and
  /// containers can point at a throwaway database.
  pub fn get_database_url(&self) -> String {
    env::var("QUILL_DATABASE_URL").unwrap_or_else(|_| self.database.uri.clone())
  }

  /// Returns either "http" or "https", depending on tls_enabled setting
  pub fn get_protocol_string(&self) -> &'static str {
    if self.tls_enabled {
      "https"
    } else {
      "http"
    }
  }

  /// Returns something like `http://localhost` or `https://quill.example`,
  /// with the correct protocol and hostname.
  pub fn get_protocol_and_hostname(&self) -> String {
    format!("{}://{}", self.get_protocol_string(), self.hostname)
  }
}

#[cfg(test)]
mod tests {
  use super::structs::Settings;
  use crate::error::QuillResult;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(10, settings.listing.page_size);
    assert_eq!(20, settings.listing.cache_seconds);
    assert_eq!("http://localhost", settings.get_protocol_and_hostname());
  }

  #[test]
  fn test_parse_config_overrides() -> QuillResult<()> {
    let hjson = r#"
    {
      hostname: quill.example
      tls_enabled: true
      listing: {
        page_size: 25
      }
    }
    "#;
    let settings = deser_hjson::from_str::<Settings>(hjson)?;
    assert_eq!("quill.example", settings.hostname);
    assert_eq!(25, settings.listing.page_size);
    // anything not mentioned keeps its default
    assert_eq!(20, settings.listing.cache_seconds);
    assert_eq!("https://quill.example", settings.get_protocol_and_hostname());

    Ok(())
  }
}
