use lightsout_data::PlayerProfile;

use crate::error::GameError;

pub const MIN_CAR_NUMBER: u8 = 1;
pub const MAX_CAR_NUMBER: u8 = 99;

/// Reject a profile before any round is played.
pub fn validate_profile(profile: &PlayerProfile) -> Result<(), GameError> {
    if profile.name.trim().is_empty() {
        return Err(GameError::new("E1001", "driver name is required").with_field("name"));
    }
    if !(MIN_CAR_NUMBER..=MAX_CAR_NUMBER).contains(&profile.number) {
        return Err(GameError::new(
            "E1002",
            format!(
                "car number must be between {MIN_CAR_NUMBER}-{MAX_CAR_NUMBER} (got {})",
                profile.number
            ),
        )
        .with_field("number"));
    }
    if profile.phone.trim().is_empty() {
        return Err(GameError::new("E1003", "phone number is required").with_field("phone"));
    }
    Ok(())
}
