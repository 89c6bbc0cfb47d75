use keyring::Entry;

const SERVICE: &str = "sinergia_portal";
const KEY: &str = "accessToken";

fn fallback_path() -> std::path::PathBuf {
    std::path::Path::new("data").join("access_token.txt")
}

fn fallback_enabled() -> bool {
    std::env::var("KEYRING_FALLBACK").unwrap_or_default() == "true"
}

pub fn save_access_token(token: &str) -> anyhow::Result<()> {
    let entry = Entry::new(SERVICE, KEY);
    match entry.set_password(token) {
        Ok(()) => Ok(()),
        Err(_e) => {
            // Keyring failed. Optionally fall back to a local file when explicitly allowed
            if fallback_enabled() {
                let path = fallback_path();
                if let Some(parent) = path.parent() {
                    let _ = std::fs::create_dir_all(parent);
                }
                std::fs::write(&path, token)?;
                // warn in logs but do not print token
                log::warn!("[SESSION_STORE] keyring unavailable, persisted token to fallback file");
                Ok(())
            } else {
                Err(anyhow::anyhow!("keyring unavailable and file fallback disabled"))
            }
        }
    }
}

/// Stored access token, if any. A blank value counts as "no token".
pub fn load_access_token() -> Option<String> {
    let entry = Entry::new(SERVICE, KEY);
    match entry.get_password() {
        Ok(t) => {
            if t.trim().is_empty() {
                None
            } else {
                Some(t)
            }
        }
        Err(_e) => {
            if fallback_enabled() {
                let path = fallback_path();
                if path.exists() {
                    if let Ok(s) = std::fs::read_to_string(&path) {
                        let t = s.trim().to_string();
                        if !t.is_empty() {
                            return Some(t);
                        }
                    }
                }
            }
            None
        }
    }
}

/// Drops the stored token. Only ever called when the user acknowledges the
/// session-expired prompt; a rejected token is never cleared automatically.
pub fn clear_access_token() -> anyhow::Result<()> {
    let entry = Entry::new(SERVICE, KEY);
    let _ = entry.delete_password();
    if fallback_enabled() {
        let path = fallback_path();
        if path.exists() {
            let _ = std::fs::remove_file(&path);
        }
    }
    Ok(())
}
