//! Test fixtures and constants.

use std::path::Path;

/// Aliases bundle as the store returns it, including its metadata keys.
pub const ALIASES_JSON: &str = r#"{
  "DOPPLER_CONFIG": "aliases_desk",
  "DOPPLER_ENVIRONMENT": "aliases",
  "DOPPLER_PROJECT": "device-configs",
  "GS": "git status",
  "LL": "ls -la",
  "K": "kubectl"
}"#;

/// Expected aliases.sh for `ALIASES_JSON`.
pub const ALIASES_SH: &str = "alias gs='git status'\nalias ll='ls -la'\nalias k='kubectl'\n";

/// Secrets bundle in env format.
pub const SECRETS_ENV: &str = "DOPPLER_CONFIG=\"secrets_desk\"\nDOPPLER_ENVIRONMENT=\"secrets\"\nDOPPLER_PROJECT=\"device-configs\"\nGITHUB_TOKEN=\"ghp_test123\"\nNPM_TOKEN=\"npm_test456\"\n";

/// Expected secrets.env for `SECRETS_ENV`.
pub const SECRETS_ENV_OUT: &str = "GITHUB_TOKEN=\"ghp_test123\"\nNPM_TOKEN=\"npm_test456\"\n";

/// Secrets bundle in JSON format.
pub const SECRETS_JSON: &str =
    r#"{"DOPPLER_CONFIG": "secrets_desk", "GITHUB_TOKEN": "ghp_test123", "Editor": "nvim"}"#;

/// Expected variables.sh for `SECRETS_JSON`.
pub const VARIABLES_SH: &str = "GITHUB_TOKEN='ghp_test123'\nEditor='nvim'\n";

/// Script that logs its arguments and prints the canned bundle for them.
pub fn responding_tool(home: &Path) -> String {
    let home = home.display();
    format!(
        r#"#!/bin/sh
echo "$*" >> "{home}/calls.log"
case "$*" in
  *"-c aliases_"*) cat "{home}/aliases.json" ;;
  *"--format env"*) cat "{home}/secrets.env.out" ;;
  *) cat "{home}/secrets.json" ;;
esac
"#
    )
}

/// Script that serves aliases but fails the secrets download.
pub fn failing_secrets_tool(home: &Path) -> String {
    let home = home.display();
    format!(
        r#"#!/bin/sh
echo "$*" >> "{home}/calls.log"
case "$*" in
  *"-c aliases_"*) cat "{home}/aliases.json" ;;
  *) echo "Doppler Error: Could not find requested config" >&2; exit 1 ;;
esac
"#
    )
}

/// Script that serves aliases but emits a secrets bundle with a stray 0xFF byte.
pub fn mangled_secrets_tool(home: &Path) -> String {
    let home = home.display();
    format!(
        r#"#!/bin/sh
echo "$*" >> "{home}/calls.log"
case "$*" in
  *"-c aliases_"*) cat "{home}/aliases.json" ;;
  *) printf 'TOKEN="ab\377cd"\n' ;;
esac
"#
    )
}
