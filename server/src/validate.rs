use std::borrow::Cow;

use actix_web::web::Json;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use errors::Error;

fn collect_errors(errors: ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|err| {
            let default_error = format!("{} is required", err.0);
            err.1[0]
                .message
                .as_ref()
                .unwrap_or(&Cow::Owned(default_error))
                .to_string()
        })
        .collect();
    messages.sort();
    messages
}

pub fn validate<T>(params: &Json<T>) -> Result<(), Error>
where
    T: Validate,
{
    match params.validate() {
        Ok(_) => Ok(()),
        Err(err) => Err(Error::ValidationError(collect_errors(err))),
    }
}

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(error_with_message("blank", "text must not be blank"));
    }
    Ok(())
}

pub fn validate_uuid(user_id: &str) -> Result<(), ValidationError> {
    Uuid::parse_str(user_id)
        .map(|_| ())
        .map_err(|_| error_with_message("uuid", "user_id must be a valid UUID"))
}
