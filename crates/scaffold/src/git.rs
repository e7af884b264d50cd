use {tokio::process::Command, tracing::debug};

/// Author identity read from the user's git configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitIdentity {
    pub name: String,
    pub email: String,
}

impl GitIdentity {
    /// Read `user.name` and `user.email`. Missing values are empty strings.
    pub async fn detect() -> Self {
        Self {
            name: git_config("user.name").await,
            email: git_config("user.email").await,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

/// Run `git config --get <key>` and return the trimmed value.
///
/// Never fails: a missing git binary, an unset key or any other error all
/// yield an empty string.
pub async fn git_config(key: &str) -> String {
    let output = match Command::new("git")
        .args(["config", "--get", key])
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            debug!(key, error = %e, "failed to run git config");
            return String::new();
        },
    };

    if !output.status.success() {
        debug!(key, status = ?output.status, "git config returned no value");
        return String::new();
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
