//! The two closed catalogs the booking form selects from. The strings are
//! the wire contract: the backend stores them verbatim.

pub const SERVICES: [&str; 12] = [
    "Mecânica Geral",
    "Injeção Eletrônica",
    "Suspensão e Freios",
    "Alinhamento e Balanceamento",
    "Ar Condicionado Automotivo",
    "Elétrica Automotiva",
    "Troca de Óleo e Filtros",
    "Funilaria e Pintura",
    "Revisão Completa",
    "Embreagem e Câmbio",
    "Direção Hidráulica",
    "GNV - Gás Natural",
];

pub const TIME_SLOTS: [&str; 8] = [
    "08:00", "09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00",
];

pub fn is_service(value: &str) -> bool {
    SERVICES.contains(&value)
}

pub fn is_time_slot(value: &str) -> bool {
    TIME_SLOTS.contains(&value)
}
