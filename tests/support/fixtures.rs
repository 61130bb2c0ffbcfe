//! Test fixtures and constants.

/// A config touching every category.
pub const FULL_CONFIG: &str = r#"
[secret_strings]
DB_PASSWORD = "prod/db/password"
API_KEY = "prod/api"

[secret_binaries]
TLS_KEY = "prod/tls"

[secret_binary_strings]
MOTD = "prod/motd"

[secret_json_key_strings]
DB_USER = { secret_id = "prod/db", json_key = "username" }
DB_PORT = { secret_id = "prod/db", json_key = "port" }

[secret_json_keys]
DB_USER_JSON = { secret_id = "prod/db", json_key = "username" }
DB_PORT_JSON = { secret_id = "prod/db", json_key = "port" }
"#;

/// Store seed matching `FULL_CONFIG`.
///
/// `prod/tls` is the bytes `de ad be ef`; `prod/motd` is `hello` in base64.
pub const FULL_STORE: &str = r#"{
  "prod/db/password": { "string": "hunter2" },
  "prod/api": { "string": "sk-test-12345" },
  "prod/tls": { "binary": "3q2+7w==" },
  "prod/motd": { "binary": "aGVsbG8=" },
  "prod/db": { "string": "{\"username\": \"app\", \"port\": 5432}" }
}"#;

/// Expected output for `FULL_CONFIG` against `FULL_STORE`.
pub const FULL_OUTPUT: &[&str] = &[
    "DB_PASSWORD=hunter2",
    "API_KEY=sk-test-12345",
    "TLS_KEY=3q2+7w==",
    "MOTD=hello",
    "DB_USER=app",
    "DB_PORT=5432",
    "DB_USER_JSON=\"app\"",
    "DB_PORT_JSON=5432",
];
