//! Data transfer objects for web requests.

use serde::Deserialize;

/// Slack slash-command payload.
///
/// Slack posts many more fields; only the ones used here are read.
#[derive(Debug, Deserialize)]
pub struct SlashCommandRequest {
    /// Text typed after the slash command, e.g. `rr dev-30`
    #[serde(default)]
    pub text: String,

    /// Invoking user, for logs
    pub user_name: Option<String>,

    /// Channel the command came from, for logs
    pub channel_name: Option<String>,
}
