//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{validate_duration, KEY_INITIAL_WAIT, KEY_MESSAGE, KEY_TICK_INTERVAL};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let mut config = store.load().await?;

    match key {
        KEY_MESSAGE => config.message = Some(value.to_string()),
        KEY_INITIAL_WAIT => {
            validate_duration(key, value)?;
            config.initial_wait = Some(value.trim().to_string());
        }
        KEY_TICK_INTERVAL => {
            validate_duration(key, value)?;
            config.tick_interval = Some(value.trim().to_string());
        }
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.load().await?;

    let value = match key {
        KEY_MESSAGE => config.message,
        KEY_INITIAL_WAIT => config.initial_wait,
        KEY_TICK_INTERVAL => config.tick_interval,
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or("(not set)"));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(KEY_MESSAGE, config.message.as_deref());
    presenter.key_value(KEY_INITIAL_WAIT, config.initial_wait.as_deref());
    presenter.key_value(KEY_TICK_INTERVAL, config.tick_interval.as_deref());

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().display().to_string());
    Ok(())
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::infrastructure::XdgConfigStore;

    fn temp_store() -> (TempDir, XdgConfigStore) {
        let dir = TempDir::new().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        (dir, store)
    }

    async fn set(store: &XdgConfigStore, key: &str, value: &str) -> Result<(), ConfigError> {
        let action = ConfigAction::Set {
            key: key.to_string(),
            value: value.to_string(),
        };
        handle_config_command(action, store, &Presenter::new()).await
    }

    #[tokio::test]
    async fn set_persists_values() {
        let (_dir, store) = temp_store();

        set(&store, "message", "Linking").await.unwrap();
        set(&store, "tick_interval", " 250ms ").await.unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.message, Some("Linking".to_string()));
        assert_eq!(config.tick_interval, Some("250ms".to_string()));
        assert!(config.initial_wait.is_none());
    }

    #[tokio::test]
    async fn set_rejects_unknown_key() {
        let (_dir, store) = temp_store();
        let err = set(&store, "colour", "blue").await.unwrap_err();
        assert!(err.to_string().contains("Valid keys"));
        assert!(!store.exists());
    }

    #[tokio::test]
    async fn set_rejects_invalid_duration() {
        let (_dir, store) = temp_store();
        assert!(set(&store, "initial_wait", "later").await.is_err());
        assert!(set(&store, "tick_interval", "0s").await.is_err());
        assert!(!store.exists());
    }

    #[tokio::test]
    async fn get_rejects_unknown_key() {
        let (_dir, store) = temp_store();
        let action = ConfigAction::Get {
            key: "colour".to_string(),
        };
        assert!(handle_config_command(action, &store, &Presenter::new())
            .await
            .is_err());
    }

    #[tokio::test]
    async fn init_then_list() {
        let (_dir, store) = temp_store();
        handle_config_command(ConfigAction::Init, &store, &Presenter::new())
            .await
            .unwrap();
        handle_config_command(ConfigAction::List, &store, &Presenter::new())
            .await
            .unwrap();
        assert!(store.exists());
    }
}
