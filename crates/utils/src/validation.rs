use crate::error::{QuillErrorType, QuillResult};
use once_cell::sync::Lazy;
use regex::Regex;

const POST_BODY_MAX_LENGTH: usize = 50000;
const COMMENT_BODY_MAX_LENGTH: usize = 10000;
const ACTOR_NAME_MAX_LENGTH: usize = 30;
const GROUP_TITLE_MAX_LENGTH: usize = 200;
const SLUG_MAX_LENGTH: usize = 50;
const PASSWORD_MIN_LENGTH: usize = 10;
const PASSWORD_MAX_LENGTH: usize = 60;

#[allow(clippy::expect_used)]
static VALID_ACTOR_NAME_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("compile regex"));

#[allow(clippy::expect_used)]
static VALID_SLUG_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("compile regex"));

fn min_length_check(item: &str, min_length: usize, error_type: QuillErrorType) -> QuillResult<()> {
  if item.chars().count() < min_length {
    Err(error_type.into())
  } else {
    Ok(())
  }
}

fn max_length_check(item: &str, max_length: usize, error_type: QuillErrorType) -> QuillResult<()> {
  if item.chars().count() > max_length {
    Err(error_type.into())
  } else {
    Ok(())
  }
}

pub fn is_valid_actor_name(name: &str) -> QuillResult<()> {
  min_length_check(name, 3, QuillErrorType::InvalidName)?;
  max_length_check(name, ACTOR_NAME_MAX_LENGTH, QuillErrorType::InvalidName)?;
  if VALID_ACTOR_NAME_REGEX.is_match(name) {
    Ok(())
  } else {
    Err(QuillErrorType::InvalidName.into())
  }
}

pub fn is_valid_group_slug(slug: &str) -> QuillResult<()> {
  min_length_check(slug, 2, QuillErrorType::InvalidSlug)?;
  max_length_check(slug, SLUG_MAX_LENGTH, QuillErrorType::InvalidSlug)?;
  if VALID_SLUG_REGEX.is_match(slug) {
    Ok(())
  } else {
    Err(QuillErrorType::InvalidSlug.into())
  }
}

pub fn is_valid_group_title(title: &str) -> QuillResult<()> {
  min_length_check(title.trim(), 1, QuillErrorType::InvalidBodyField)?;
  max_length_check(title, GROUP_TITLE_MAX_LENGTH, QuillErrorType::InvalidBodyField)
}

/// Post and comment bodies must not be empty after trimming, and are capped to avoid unbounded
/// rows.
pub fn is_valid_body_field(body: &str, post: bool) -> QuillResult<()> {
  min_length_check(body.trim(), 1, QuillErrorType::InvalidBodyField)?;
  if post {
    max_length_check(body, POST_BODY_MAX_LENGTH, QuillErrorType::InvalidBodyField)
  } else {
    max_length_check(body, COMMENT_BODY_MAX_LENGTH, QuillErrorType::InvalidBodyField)
  }
}

pub fn is_valid_password(password: &str) -> QuillResult<()> {
  min_length_check(password, PASSWORD_MIN_LENGTH, QuillErrorType::InvalidPassword)?;
  max_length_check(password, PASSWORD_MAX_LENGTH, QuillErrorType::InvalidPassword)
}
