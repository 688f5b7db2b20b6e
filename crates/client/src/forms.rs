use moodmeet_shared::user::{LoginRequest, RegisterRequest};

use crate::{ClientError, Result};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match!";

fn required(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!("{field} is required")));
    }

    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn submit(&self) -> Result<LoginRequest> {
        required(&self.email, "Email")?;
        required(&self.password, "Password")?;

        Ok(LoginRequest {
            email: self.email.trim().to_owned(),
            password: self.password.to_owned(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Fails without producing a request when the two passwords differ.
    pub fn submit(&self) -> Result<RegisterRequest> {
        required(&self.name, "Name")?;
        required(&self.email, "Email")?;
        required(&self.password, "Password")?;

        if self.password != self.confirm_password {
            return Err(ClientError::Validation(PASSWORD_MISMATCH.to_owned()));
        }

        Ok(RegisterRequest {
            email: self.email.trim().to_owned(),
            password: self.password.to_owned(),
            name: self.name.trim().to_owned(),
        })
    }
}
