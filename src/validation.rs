use std::collections::BTreeMap;

use crate::models::catalog;
use crate::models::BookingDraft;

/// Closed set of form field identifiers. Wire names come from `as_str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    VehicleBrand,
    VehicleModel,
    VehicleYear,
    ServiceType,
    PreferredDate,
    PreferredTime,
    Message,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::VehicleBrand,
        Field::VehicleModel,
        Field::VehicleYear,
        Field::ServiceType,
        Field::PreferredDate,
        Field::PreferredTime,
        Field::Message,
    ];

    /// Every field except the free-text message.
    pub const REQUIRED: [Field; 9] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::VehicleBrand,
        Field::VehicleModel,
        Field::VehicleYear,
        Field::ServiceType,
        Field::PreferredDate,
        Field::PreferredTime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::VehicleBrand => "vehicle_brand",
            Field::VehicleModel => "vehicle_model",
            Field::VehicleYear => "vehicle_year",
            Field::ServiceType => "service_type",
            Field::PreferredDate => "preferred_date",
            Field::PreferredTime => "preferred_time",
            Field::Message => "message",
        }
    }

    /// Form label shown to the customer.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome Completo",
            Field::Phone => "Telefone",
            Field::Email => "Email",
            Field::VehicleBrand => "Marca",
            Field::VehicleModel => "Modelo",
            Field::VehicleYear => "Ano",
            Field::ServiceType => "Tipo de Serviço",
            Field::PreferredDate => "Data Preferida",
            Field::PreferredTime => "Horário Preferido",
            Field::Message => "Observações",
        }
    }
}

/// Per-field validation messages. Empty means the draft is submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Checks a draft against every rule independently and collects all
/// failures. Pure: no draft mutation, no I/O, no short-circuit.
pub fn validate(draft: &BookingDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, "Nome é obrigatório");
    }

    if draft.phone.trim().is_empty() {
        errors.insert(Field::Phone, "Telefone é obrigatório");
    } else if !matches!(digits(&draft.phone).len(), 10 | 11) {
        errors.insert(Field::Phone, "Telefone inválido");
    }

    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, "Email é obrigatório");
    } else if !is_valid_email(&draft.email) {
        errors.insert(Field::Email, "Email inválido");
    }

    if draft.vehicle_brand.trim().is_empty() {
        errors.insert(Field::VehicleBrand, "Marca é obrigatória");
    }

    if draft.vehicle_model.trim().is_empty() {
        errors.insert(Field::VehicleModel, "Modelo é obrigatório");
    }

    if draft.vehicle_year.trim().is_empty() {
        errors.insert(Field::VehicleYear, "Ano é obrigatório");
    }

    if !catalog::is_service(&draft.service_type) {
        errors.insert(Field::ServiceType, "Selecione um serviço");
    }

    if draft.preferred_date.is_empty() {
        errors.insert(Field::PreferredDate, "Selecione uma data");
    }

    if !catalog::is_time_slot(&draft.preferred_time) {
        errors.insert(Field::PreferredTime, "Selecione um horário");
    }

    errors
}

/// Digits-only projection used for phone length checks. A Brazilian number
/// is 10 digits (landline) or 11 (mobile with the leading 9).
pub fn digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Permissive `local@domain.tld` shape: no whitespace, exactly one `@` with
/// a non-empty local part, and a dot in the domain with text on both sides.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
