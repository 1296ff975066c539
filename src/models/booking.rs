use serde::{Deserialize, Serialize};

use crate::validation::Field;

/// The in-progress form state. Every field is plain text, exactly as typed;
/// nothing is normalized until validation looks at it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle_brand: String,
    pub vehicle_model: String,
    pub vehicle_year: String,
    pub service_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub message: String,
}

impl BookingDraft {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::VehicleBrand => &self.vehicle_brand,
            Field::VehicleModel => &self.vehicle_model,
            Field::VehicleYear => &self.vehicle_year,
            Field::ServiceType => &self.service_type,
            Field::PreferredDate => &self.preferred_date,
            Field::PreferredTime => &self.preferred_time,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::VehicleBrand => &mut self.vehicle_brand,
            Field::VehicleModel => &mut self.vehicle_model,
            Field::VehicleYear => &mut self.vehicle_year,
            Field::ServiceType => &mut self.service_type,
            Field::PreferredDate => &mut self.preferred_date,
            Field::PreferredTime => &mut self.preferred_time,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Wire payload for a draft that already passed validation. The caller
    /// is responsible for validating first; see `SubmissionController`.
    pub fn to_request(&self) -> BookingRequest {
        BookingRequest {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            vehicle_brand: self.vehicle_brand.clone(),
            vehicle_model: self.vehicle_model.clone(),
            vehicle_year: self.vehicle_year.clone(),
            service_type: self.service_type.clone(),
            preferred_date: self.preferred_date.clone(),
            preferred_time: self.preferred_time.clone(),
            message: self.message.clone(),
        }
    }
}

/// The exact JSON body posted to `/api/bookings`: ten text fields, dates and
/// times as plain strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle_brand: String,
    pub vehicle_model: String,
    pub vehicle_year: String,
    pub service_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub message: String,
}
