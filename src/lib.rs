//! smenv - Resolve secrets into environment variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Terminal output helpers
//! │   └── run           # Run a command with injected secrets
//! └── core/             # Core library components
//!     ├── config        # .smenv.toml loading and flag merging
//!     ├── domain/       # References, values, assignments
//!     ├── resolver      # Config + store -> NAME=VALUE assignments
//!     ├── store/        # Secret store backends
//!     │   ├── mod       # SecretStore trait
//!     │   ├── aws       # AWS Secrets Manager
//!     │   └── memory    # In-memory store
//!     └── validation    # Name and field checks
//! ```
//!
//! # Example
//!
//! ```
//! use smenv::core::config::Config;
//! use smenv::core::domain::Category;
//! use smenv::core::resolver::resolve;
//! use smenv::core::store::MemoryStore;
//!
//! let store = MemoryStore::new().with_string("prod/db", r#"{"user": "app"}"#);
//! let mut config = Config::new();
//! config.add_assignment(Category::JsonKeyString, "DB_USER=prod/db#user").unwrap();
//!
//! let resolution = resolve(&config, &store);
//! assert_eq!(resolution.env(), vec!["DB_USER=app"]);
//! ```

pub mod cli;
pub mod core;
pub mod error;
