use uuid::Uuid;

pub struct UserCreateRequest {
    pub full_name: String,
    pub phone_number: String,
    pub email: Option<String>,
}

pub struct DeliveryAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub additional_info: Option<String>,
}

pub struct AddressUpdateRequest {
    pub user_id: Uuid,
    pub address: DeliveryAddress,
    /// Onboarding marks the user as onboarded; profile updates leave the
    /// flag untouched.
    pub complete_onboarding: bool,
}
