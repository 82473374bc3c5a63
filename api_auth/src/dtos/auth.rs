use db::models::user::User;
use serde::{Deserialize, Serialize};

use common::error::{AppError, Res};

#[derive(Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub phone_number: String,
    pub password: String,
    pub email: Option<String>,
}

impl SignupRequest {
    pub fn validate(&self) -> Res<()> {
        if self.full_name.trim().len() < 2 {
            return Err(AppError::Validation(
                "Full name must be at least 2 characters".to_string(),
            ));
        }
        if self.phone_number.trim().len() < 10 {
            return Err(AppError::Validation(
                "Phone number must be at least 10 characters".to_string(),
            ));
        }
        if self.password.len() < 6 {
            return Err(AppError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone_number: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddressRequest {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub additional_info: Option<String>,
}

impl AddressRequest {
    pub fn validate(&self) -> Res<()> {
        let required = [
            (&self.street, "Street address is required"),
            (&self.city, "City is required"),
            (&self.state, "State is required"),
            (&self.zip_code, "Zip code is required"),
            (&self.country, "Country is required"),
        ];
        for (value, message) in required {
            if value.trim().is_empty() {
                return Err(AppError::Validation(message.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_rejects_short_password_and_phone() {
        let mut req = SignupRequest {
            full_name: "Jane Doe".into(),
            phone_number: "0812345678".into(),
            password: "secret".into(),
            email: None,
        };
        assert!(req.validate().is_ok());

        req.password = "short".into();
        assert!(req.validate().is_err());

        req.password = "secret".into();
        req.phone_number = "12345".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn address_requires_every_field() {
        let req = AddressRequest {
            street: "1 Main St".into(),
            city: "Lagos".into(),
            state: "LA".into(),
            zip_code: "100001".into(),
            country: "NG".into(),
            additional_info: None,
        };
        assert!(req.validate().is_ok());

        let mut missing_city = AddressRequest {
            city: " ".into(),
            ..req
        };
        assert!(missing_city.validate().is_err());
        missing_city.city = "Lagos".into();
        assert!(missing_city.validate().is_ok());
    }
}
