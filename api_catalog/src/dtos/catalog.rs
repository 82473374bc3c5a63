use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::error::{AppError, Res};
use common::misc::validate_period_unit;
use db::dtos::catalog::{CategoryWrite, PeriodWrite, ServiceWrite};

fn default_ironing() -> String {
    "N/A".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

impl CategoryRequest {
    pub fn validate(&self) -> Res<()> {
        if self.name.trim().len() < 2 {
            return Err(AppError::Validation(
                "Category name must be at least 2 characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_write(self) -> CategoryWrite {
        CategoryWrite {
            name: self.name.trim().to_string(),
            description: self.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PeriodRequest {
    pub period_number: i32,
    pub period_unit: String,
}

impl PeriodRequest {
    pub fn validate(&self) -> Res<()> {
        if self.period_number < 1 {
            return Err(AppError::Validation(
                "Period number must be at least 1".to_string(),
            ));
        }
        validate_period_unit(&self.period_unit)
    }

    pub fn into_write(self) -> PeriodWrite {
        PeriodWrite {
            period_number: self.period_number,
            period_unit: self.period_unit,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub period_id: Uuid,
    pub category_id: Uuid,
    pub wash_frequency: i32,
    pub washing_folding: i64,
    #[serde(default = "default_ironing")]
    pub ironing: String,
    pub maximum_kg: i32,
    pub total: i64,
    pub description: Option<String>,
}

impl ServiceRequest {
    pub fn validate(&self) -> Res<()> {
        if self.wash_frequency < 1 {
            return Err(AppError::Validation(
                "Wash frequency must be at least 1".to_string(),
            ));
        }
        if self.washing_folding < 0 {
            return Err(AppError::Validation(
                "Washing and folding price must be a positive number".to_string(),
            ));
        }
        if self.maximum_kg < 1 {
            return Err(AppError::Validation(
                "Maximum kg must be at least 1".to_string(),
            ));
        }
        if self.total < 0 {
            return Err(AppError::Validation(
                "Total must be a positive number".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_write(self) -> ServiceWrite {
        ServiceWrite {
            period_id: self.period_id,
            category_id: self.category_id,
            wash_frequency: self.wash_frequency,
            washing_folding: self.washing_folding,
            ironing: self.ironing,
            maximum_kg: self.maximum_kg,
            total: self.total,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_request() -> ServiceRequest {
        ServiceRequest {
            period_id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            wash_frequency: 4,
            washing_folding: 1500,
            ironing: default_ironing(),
            maximum_kg: 10,
            total: 6000,
            description: None,
        }
    }

    #[test]
    fn period_request_rejects_zero_count_and_unknown_unit() {
        let valid = PeriodRequest {
            period_number: 1,
            period_unit: "month".into(),
        };
        assert!(valid.validate().is_ok());

        let zero = PeriodRequest {
            period_number: 0,
            period_unit: "month".into(),
        };
        assert!(zero.validate().is_err());

        let unknown = PeriodRequest {
            period_number: 1,
            period_unit: "decade".into(),
        };
        assert!(unknown.validate().is_err());
    }

    #[test]
    fn service_request_enforces_minimums() {
        assert!(service_request().validate().is_ok());

        let mut bad = service_request();
        bad.wash_frequency = 0;
        assert!(bad.validate().is_err());

        let mut bad = service_request();
        bad.maximum_kg = 0;
        assert!(bad.validate().is_err());

        let mut bad = service_request();
        bad.total = -1;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn ironing_defaults_when_omitted() {
        let json = serde_json::json!({
            "period_id": Uuid::new_v4(),
            "category_id": Uuid::new_v4(),
            "wash_frequency": 2,
            "washing_folding": 1000,
            "maximum_kg": 8,
            "total": 4500
        });
        let req: ServiceRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.ironing, "N/A");
    }
}
