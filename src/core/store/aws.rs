//! AWS Secrets Manager backend.
//!
//! Fetches secrets with `GetSecretValue`. Enable with `--features aws`
//! (on by default).
//!
//! Credentials come from the default provider chain: environment
//! variables, the shared credentials file (honoring `profile`), then
//! container and instance roles.

use aws_sdk_secretsmanager::config::Region;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_sdk_secretsmanager::Client;
use tracing::{debug, trace};

use super::SecretStore;
use crate::core::domain::SecretValue;
use crate::error::StoreError;

/// Error codes worth retrying later; reported as `Transient`.
const TRANSIENT_CODES: &[&str] = &[
    "ThrottlingException",
    "TooManyRequestsException",
    "RequestLimitExceeded",
    "ServiceUnavailable",
];

/// AWS Secrets Manager client.
///
/// The SDK is async; this store owns a current-thread runtime and blocks
/// on each request.
pub struct AwsSecretsManager {
    runtime: tokio::runtime::Runtime,
    client: Client,
}

impl AwsSecretsManager {
    /// Build a client from the default credential chain.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connect` if the runtime cannot start, or if no
    /// region or credentials provider can be determined.
    pub fn connect(profile: Option<&str>, region: Option<&str>) -> Result<Self, StoreError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Connect(format!("failed to create runtime: {}", e)))?;

        let sdk_config = runtime.block_on(async {
            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
            if let Some(profile) = profile {
                loader = loader.profile_name(profile);
            }
            if let Some(region) = region {
                loader = loader.region(Region::new(region.to_string()));
            }
            loader.load().await
        });

        let resolved_region = sdk_config.region().ok_or_else(|| {
            StoreError::Connect(
                "no AWS region configured (use --region, AWS_REGION, or a profile region)".into(),
            )
        })?;
        if sdk_config.credentials_provider().is_none() {
            return Err(StoreError::Connect("no AWS credentials provider available".into()));
        }

        debug!(region = %resolved_region, "AWS Secrets Manager client ready");
        let client = Client::new(&sdk_config);

        Ok(Self { runtime, client })
    }
}

impl SecretStore for AwsSecretsManager {
    fn get_secret(&self, secret_id: &str) -> Result<SecretValue, StoreError> {
        trace!(secret_id, "GetSecretValue");

        let output = self
            .runtime
            .block_on(self.client.get_secret_value().secret_id(secret_id).send())
            .map_err(|e| classify(secret_id, e))?;

        let value = SecretValue::new(
            output.secret_string().map(str::to_string),
            output.secret_binary().map(|b| b.as_ref().to_vec()),
        );
        trace!(
            secret_id,
            has_string = value.string().is_some(),
            has_binary = value.binary().is_some(),
            "GetSecretValue ok"
        );
        Ok(value)
    }

    fn name(&self) -> &'static str {
        "aws-secretsmanager"
    }
}

/// Map an SDK failure onto the store error kinds.
fn classify<R>(secret_id: &str, err: SdkError<GetSecretValueError, R>) -> StoreError
where
    R: std::fmt::Debug + 'static,
{
    let secret_id = secret_id.to_string();
    let message = DisplayErrorContext(&err).to_string();

    match &err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => {
            StoreError::Transient { secret_id, message }
        }
        SdkError::ServiceError(service) => {
            let e = service.err();
            let message = e.message().map(str::to_string).unwrap_or(message);
            if e.is_resource_not_found_exception() {
                StoreError::NotFound(secret_id)
            } else if e.is_internal_service_error() {
                StoreError::Transient { secret_id, message }
            } else {
                match e.code() {
                    Some("AccessDeniedException") => StoreError::AccessDenied { secret_id, message },
                    Some(code) if TRANSIENT_CODES.contains(&code) => {
                        StoreError::Transient { secret_id, message }
                    }
                    _ => StoreError::Rejected { secret_id, message },
                }
            }
        }
        _ => StoreError::Rejected { secret_id, message },
    }
}
