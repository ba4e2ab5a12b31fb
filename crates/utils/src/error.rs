use serde::{Deserialize, Serialize};
use std::{backtrace::Backtrace, fmt, fmt::Debug};
use strum::{Display, EnumIter};

pub type QuillResult<T> = Result<T, QuillError>;

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, EnumIter, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum QuillErrorType {
  NotFound,
  NotLoggedIn,
  IncorrectLogin,
  NotAnAdmin,
  CantFollowYourself,
  NotFollowingPerson,
  NoPostEditAllowed,
  CouldntCreatePost,
  CouldntUpdatePost,
  CouldntCreateComment,
  CouldntCreateGroup,
  CouldntCreateFollow,
  CouldntCreateUser,
  PasswordsDoNotMatch,
  UsernameAlreadyExists,
  GroupSlugAlreadyExists,
  InvalidName,
  InvalidSlug,
  InvalidBodyField,
  InvalidUrl,
  /// Password must be between 10 and 60 characters
  InvalidPassword,
  Unknown(String),
}

pub struct QuillError {
  pub error_type: QuillErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl<T> From<T> for QuillError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    let error_type = match cause.downcast_ref::<diesel::result::Error>() {
      Some(&diesel::NotFound) => QuillErrorType::NotFound,
      _ => QuillErrorType::Unknown(format!("{}", &cause)),
    };
    QuillError {
      error_type,
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for QuillError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("QuillError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl fmt::Display for QuillError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

impl actix_web::error::ResponseError for QuillError {
  fn status_code(&self) -> actix_web::http::StatusCode {
    match self.error_type {
      QuillErrorType::IncorrectLogin | QuillErrorType::NotLoggedIn => {
        actix_web::http::StatusCode::UNAUTHORIZED
      }
      QuillErrorType::NotFound | QuillErrorType::NotFollowingPerson => {
        actix_web::http::StatusCode::NOT_FOUND
      }
      _ => actix_web::http::StatusCode::BAD_REQUEST,
    }
  }

  fn error_response(&self) -> actix_web::HttpResponse {
    actix_web::HttpResponse::build(self.status_code()).json(&self.error_type)
  }
}

impl From<QuillErrorType> for QuillError {
  fn from(error_type: QuillErrorType) -> Self {
    let inner = anyhow::anyhow!("{}", error_type);
    QuillError {
      error_type,
      inner,
      context: Backtrace::capture(),
    }
  }
}

pub trait QuillErrorExt<T, E: Into<anyhow::Error>> {
  fn with_quill_type(self, error_type: QuillErrorType) -> QuillResult<T>;
}

impl<T, E: Into<anyhow::Error>> QuillErrorExt<T, E> for Result<T, E> {
  fn with_quill_type(self, error_type: QuillErrorType) -> QuillResult<T> {
    self.map_err(|error| QuillError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::indexing_slicing)]
  use super::*;
  use actix_web::{body::MessageBody, ResponseError};
  use pretty_assertions::assert_eq;

  #[test]
  fn deserializes_no_message() -> QuillResult<()> {
    let err = QuillError::from(QuillErrorType::NotLoggedIn).error_response();
    let json = String::from_utf8(err.into_body().try_into_bytes().unwrap_or_default().to_vec())?;
    assert_eq!(&json, "{\"error\":\"not_logged_in\"}");

    Ok(())
  }

  #[test]
  fn deserializes_with_message() -> QuillResult<()> {
    let unknown = QuillErrorType::Unknown(String::from("reason"));
    let err = QuillError::from(unknown).error_response();
    let json = String::from_utf8(err.into_body().try_into_bytes().unwrap_or_default().to_vec())?;
    assert_eq!(&json, "{\"error\":\"unknown\",\"message\":\"reason\"}");

    Ok(())
  }

  #[test]
  fn test_convert_diesel_errors() {
    let not_found_error = QuillError::from(diesel::NotFound);
    assert_eq!(QuillErrorType::NotFound, not_found_error.error_type);
    assert_eq!(404, not_found_error.status_code());

    let other_error = QuillError::from(diesel::result::Error::NotInTransaction);
    assert!(matches!(other_error.error_type, QuillErrorType::Unknown { .. }));
    assert_eq!(400, other_error.status_code());
  }
}
