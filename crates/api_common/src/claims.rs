use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use quill_db_schema::newtypes::LocalUserId;
use quill_utils::{error::QuillResult, settings::SETTINGS};
use serde::{Deserialize, Serialize};

type Jwt = String;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  /// local_user_id, standard claim by RFC 7519.
  pub sub: i32,
  pub iss: String,
  /// Time when this token was issued as UNIX-timestamp in seconds
  pub iat: i64,
}

impl Claims {
  pub fn decode(jwt: &str) -> QuillResult<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    let key = DecodingKey::from_secret(SETTINGS.jwt_secret.as_bytes());
    Ok(decode::<Claims>(jwt, &key, &validation)?.claims)
  }

  pub fn jwt(local_user_id: LocalUserId) -> QuillResult<Jwt> {
    let my_claims = Claims {
      sub: local_user_id.0,
      iss: SETTINGS.hostname.clone(),
      iat: Utc::now().timestamp(),
    };
    let key = EncodingKey::from_secret(SETTINGS.jwt_secret.as_bytes());
    Ok(encode(&Header::default(), &my_claims, &key)?)
  }
}

#[cfg(test)]
mod tests {
  use super::Claims;
  use pretty_assertions::assert_eq;
  use quill_db_schema::newtypes::LocalUserId;
  use quill_utils::error::QuillResult;

  #[test]
  fn test_roundtrip() -> QuillResult<()> {
    let jwt = Claims::jwt(LocalUserId(17))?;
    let decoded = Claims::decode(&jwt)?;
    assert_eq!(17, decoded.sub);
    Ok(())
  }

  #[test]
  fn test_rejects_garbage() {
    assert!(Claims::decode("definitely-not-a-jwt").is_err());
  }
}
