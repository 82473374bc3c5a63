use uuid::Uuid;

pub struct CategoryWrite {
    pub name: String,
    pub description: Option<String>,
}

pub struct PeriodWrite {
    pub period_number: i32,
    pub period_unit: String,
}

pub struct ServiceWrite {
    pub period_id: Uuid,
    pub category_id: Uuid,
    pub wash_frequency: i32,
    pub washing_folding: i64,
    pub ironing: String,
    pub maximum_kg: i32,
    pub total: i64,
    pub description: Option<String>,
}
