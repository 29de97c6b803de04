//! Fitness and diet plan records.

use serde::{Deserialize, Serialize};

/// A training plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessPlan {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub plan_type: String,
    #[serde(default)]
    pub level: Option<String>,
    /// Minutes.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

/// A diet plan with its macro-nutrient counts and recipes in serving order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub diet_type: String,
    /// kcal
    #[serde(default)]
    pub calories: Option<f64>,
    /// Grams.
    #[serde(default)]
    pub protein: Option<f64>,
    /// Grams.
    #[serde(default)]
    pub carbs: Option<f64>,
    /// Grams.
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub recipes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitness_plan_type_field() {
        let plan: FitnessPlan = serde_json::from_str(
            r#"{"id": 1, "name": "Couch to 5k", "type": "cardio", "level": "beginner",
                "duration": 30, "videoUrl": "https://cdn.example.com/c25k.mp4"}"#,
        )
        .unwrap();
        assert_eq!(plan.plan_type, "cardio");
        assert_eq!(plan.duration, Some(30));
        assert_eq!(plan.description, None);
        assert_eq!(plan.video_url.as_deref(), Some("https://cdn.example.com/c25k.mp4"));
    }

    #[test]
    fn test_diet_plan_keeps_recipe_order() {
        let plan: DietPlan = serde_json::from_str(
            r#"{"id": 3, "name": "Lean week", "type": "cutting", "calories": 1800,
                "protein": 140, "carbs": 150, "fat": 60,
                "recipes": ["Oats", "Chicken salad", "Salmon"]}"#,
        )
        .unwrap();
        assert_eq!(plan.recipes, vec!["Oats", "Chicken salad", "Salmon"]);
        assert_eq!(plan.calories, Some(1800.0));

        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["type"], "cutting");
    }

    #[test]
    fn test_diet_plan_without_recipes() {
        let plan: DietPlan =
            serde_json::from_str(r#"{"id": 4, "name": "Maintain", "type": "balanced"}"#).unwrap();
        assert!(plan.recipes.is_empty());
    }
}
