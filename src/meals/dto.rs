use serde::{Deserialize, Serialize};

use crate::meals::repo::{Meal, MealMetrics};

/// Request body for creating a meal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealBody {
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
}

/// Request body for a full-field replace of a meal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMealBody {
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
}

#[derive(Debug, Serialize)]
pub struct MealsResponse {
    pub meals: Vec<Meal>,
}

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub meal: Meal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub total_meals: i64,
    pub total_meals_on_diet: i64,
    pub total_meals_off_diet: i64,
}

impl From<MealMetrics> for MetricsResponse {
    fn from(m: MealMetrics) -> Self {
        Self {
            total_meals: m.total,
            total_meals_on_diet: m.on_diet,
            total_meals_off_diet: m.off_diet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_uses_camel_case_diet_flag() {
        let body: CreateMealBody = serde_json::from_str(
            r#"{"name": "Eggs in the morning", "description": "Breakfast super huge", "isOnDiet": false}"#,
        )
        .unwrap();
        assert_eq!(body.name, "Eggs in the morning");
        assert!(!body.is_on_diet);
    }

    #[test]
    fn body_rejects_snake_case_diet_flag() {
        let result = serde_json::from_str::<CreateMealBody>(
            r#"{"name": "x", "description": "y", "is_on_diet": true}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn metrics_serialize_with_camel_case_keys() {
        let json = serde_json::to_value(MetricsResponse {
            total_meals: 3,
            total_meals_on_diet: 2,
            total_meals_off_diet: 1,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "totalMeals": 3,
                "totalMealsOnDiet": 2,
                "totalMealsOffDiet": 1,
            })
        );
    }
}
