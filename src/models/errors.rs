use std::error::Error;

use derive_more::Display;
use serde_json::Value;
use thiserror::Error as ThisError;

pub type BoxedErr = Box<dyn Error + Send + Sync>;

/// Failures raised while booting the stores layer (config, logging), outside
/// of any action's completion.
#[derive(Debug, Display)]
#[display("InternalError: {} {} {} {}", temp, err, msg, path)]
pub struct InternalError {
  pub temp: bool,
  pub err: BoxedErr,
  pub msg: String,
  pub path: String,
}

impl Error for InternalError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    Some(&*self.err)
  }
}

/// Transport level errors, surfaced verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum NetworkError {
  #[error("the request timed out")]
  Timeout,
  #[error("resource not found (status {code})")]
  NotFound { code: u16 },
  #[error("unacceptable status code {code}")]
  UnacceptableStatusCode { code: u16 },
  #[error("invalid request url")]
  InvalidUrl,
  #[error("the network is not reachable")]
  NotConnected,
}

impl NetworkError {
  pub fn from_status(code: u16) -> Option<Self> {
    match code {
      200..=299 => None,
      404 => Some(NetworkError::NotFound { code }),
      _ => Some(NetworkError::UnacceptableStatusCode { code }),
    }
  }
}

/// Generic backend error envelope: `{"error": "<code>", "message": "<msg>"}`.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum DotcomError {
  #[error("empty backend error")]
  Empty,
  #[error("unauthorized")]
  Unauthorized,
  #[error("invalid token")]
  InvalidToken,
  #[error("request failed")]
  RequestFailed,
  #[error("no route was found matching the request")]
  NoRestRoute,
  #[error("the stats module is disabled")]
  StatsModuleDisabled,
  #[error("the user cannot view stats")]
  NoStatsPermission,
  #[error("the requested resource does not exist")]
  ResourceDoesNotExist,
  #[error("{code}: {}", .message.as_deref().unwrap_or(""))]
  Unknown { code: String, message: Option<String> },
}

impl DotcomError {
  const STATS_MODULE_DISABLED: &'static str = "This blog does not have the Stats module enabled";
  const NO_STATS_PERMISSION: &'static str = "user cannot view stats";

  pub fn new(code: &str, message: Option<&str>) -> Self {
    match (code, message) {
      ("", _) => DotcomError::Empty,
      ("unauthorized", Some(Self::NO_STATS_PERMISSION)) => DotcomError::NoStatsPermission,
      ("unauthorized", _) => DotcomError::Unauthorized,
      ("invalid_token", _) => DotcomError::InvalidToken,
      ("http_request_failed", _) => DotcomError::RequestFailed,
      ("rest_no_route", _) => DotcomError::NoRestRoute,
      ("invalid_blog", Some(Self::STATS_MODULE_DISABLED)) => DotcomError::StatsModuleDisabled,
      ("woocommerce_rest_term_invalid", _) | ("rest_term_invalid", _) => {
        DotcomError::ResourceDoesNotExist
      }
      _ => DotcomError::Unknown { code: code.to_string(), message: message.map(str::to_string) },
    }
  }

  /// Returns the backend error carried by a decoded response document, if any.
  pub fn from_document(document: &Value) -> Option<Self> {
    let code = document.as_object()?.get("error")?.as_str()?;
    let message = document.get("message").and_then(Value::as_str);
    Some(DotcomError::new(code, message))
  }

  pub fn code(&self) -> Option<&str> {
    match self {
      DotcomError::Unknown { code, .. } => Some(code),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum CreateAccountError {
  #[error("an account already exists for this email")]
  EmailExists,
  #[error("invalid username")]
  InvalidUsername,
  #[error("invalid email")]
  InvalidEmail,
  #[error("invalid password")]
  InvalidPassword { message: Option<String> },
}

impl CreateAccountError {
  pub fn from_dotcom(error: &DotcomError) -> Option<Self> {
    let DotcomError::Unknown { code, message } = error else {
      return None;
    };

    match code.as_str() {
      "email_exists" => Some(CreateAccountError::EmailExists),
      "email_invalid" => Some(CreateAccountError::InvalidEmail),
      "password_invalid" => Some(CreateAccountError::InvalidPassword { message: message.clone() }),
      "username_invalid" | "username_exists" => Some(CreateAccountError::InvalidUsername),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SiteCreationError {
  #[error("the site address is already taken")]
  DomainExists,
  #[error("the site address is invalid")]
  InvalidDomain,
  #[error("the site address is reserved")]
  ReservedDomain,
  #[error("the backend answered without creating the site")]
  NotCreated,
}

impl SiteCreationError {
  pub fn from_dotcom(error: &DotcomError) -> Option<Self> {
    match error.code()? {
      "blog_name_exists" => Some(SiteCreationError::DomainExists),
      "blog_name_invalid" | "blog_name_only_lowercase_letters_and_numbers" => {
        Some(SiteCreationError::InvalidDomain)
      }
      "blog_name_reserved" => Some(SiteCreationError::ReservedDomain),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ProductUpdateError {
  #[error("the SKU is invalid or duplicated")]
  InvalidSku,
}

impl ProductUpdateError {
  pub fn from_dotcom(error: &DotcomError) -> Option<Self> {
    match error.code()? {
      "product_invalid_sku" | "woocommerce_rest_product_invalid_sku" => {
        Some(ProductUpdateError::InvalidSku)
      }
      _ => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SiteStatsError {
  #[error("the stats module is disabled for this site")]
  StatsModuleDisabled,
  #[error("the user has no permission to view stats")]
  NoPermission,
}

impl SiteStatsError {
  pub fn from_dotcom(error: &DotcomError) -> Option<Self> {
    match error {
      DotcomError::StatsModuleDisabled => Some(SiteStatsError::StatsModuleDisabled),
      DotcomError::NoStatsPermission => Some(SiteStatsError::NoPermission),
      _ => None,
    }
  }
}

/// Every action completes with either its value or one of these.
#[derive(Debug, ThisError)]
pub enum StoreError {
  #[error(transparent)]
  Network(#[from] NetworkError),
  #[error(transparent)]
  Dotcom(#[from] DotcomError),
  #[error(transparent)]
  CreateAccount(#[from] CreateAccountError),
  #[error(transparent)]
  SiteCreation(#[from] SiteCreationError),
  #[error(transparent)]
  ProductUpdate(#[from] ProductUpdateError),
  #[error(transparent)]
  SiteStats(#[from] SiteStatsError),
  #[error("failed to decode the response: {0}")]
  Decoding(#[from] serde_json::Error),
  #[error("the response was empty")]
  EmptyResponse,
  #[error("no domain suggestions were returned")]
  EmptySuggestions,
  #[error("the backend deleted a different coupon than requested")]
  UnexpectedCouponDeleted,
  #[error("the site is not known to this account")]
  UnknownSite,
  #[error("failed to synchronize page {page_number}")]
  PageSynchronization {
    page_number: u32,
    #[source]
    source: Box<StoreError>,
  },
  #[error("the action was dropped before completing")]
  CompletionDropped,
}

impl StoreError {
  /// Translates a backend error through `map`, passing it through unchanged
  /// when the lookup has no entry for it.
  pub fn map_dotcom<E>(self, map: impl FnOnce(&DotcomError) -> Option<E>) -> StoreError
  where
    E: Into<StoreError>,
  {
    match self {
      StoreError::Dotcom(err) => match map(&err) {
        Some(mapped) => mapped.into(),
        None => StoreError::Dotcom(err),
      },
      other => other,
    }
  }

  pub fn as_network(&self) -> Option<&NetworkError> {
    match self {
      StoreError::Network(err) => Some(err),
      StoreError::PageSynchronization { source, .. } => source.as_network(),
      _ => None,
    }
  }
}
