use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of positional ingredient/measure pairs in a MealDB record.
pub const MAX_INGREDIENTS: usize = 20;

/// A single meal as returned by the MealDB API.
///
/// The upstream object is kept as-is so that fields we never read
/// (tags, youtube links, sources...) round-trip untouched. Values may be
/// strings, `null`, or missing altogether.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MealRecord(Map<String, Value>);

impl MealRecord {
    /// String value for `key`, or `None` when absent, `null`, or not a string.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.field("idMeal")
    }

    pub fn name(&self) -> Option<&str> {
        self.field("strMeal")
    }

    pub fn category(&self) -> Option<&str> {
        self.field("strCategory")
    }

    pub fn area(&self) -> Option<&str> {
        self.field("strArea")
    }

    pub fn instructions(&self) -> Option<&str> {
        self.field("strInstructions")
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.field("strMealThumb").filter(|url| !url.trim().is_empty())
    }

    /// Ingredient/measure pairs in index order (1..=20).
    ///
    /// A pair is skipped when its ingredient is absent or blank after
    /// trimming. The measure is kept verbatim; a missing measure becomes "".
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|i| {
                let name = self.field(&format!("strIngredient{}", i))?;
                if name.trim().is_empty() {
                    return None;
                }
                let measure = self.field(&format!("strMeasure{}", i)).unwrap_or_default();
                Some(Ingredient {
                    name: name.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }
}

impl From<Map<String, Value>> for MealRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// One line of the ingredients section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// Verbatim measure text, possibly empty.
    pub measure: String,
}

/// Body of `search.php`, `random.php`, `lookup.php` and `filter.php`.
///
/// The API sends `"meals": null` when nothing matched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MealsResponse {
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}

impl MealsResponse {
    /// First meal in the response, if any.
    pub fn first(&self) -> Option<&MealRecord> {
        self.meals.as_deref().and_then(<[MealRecord]>::first)
    }

    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }
}

/// Entry of `list.php?c=list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryEntry {
    #[serde(rename = "strCategory")]
    pub name: Option<String>,
}

/// Body of `list.php?c=list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryListResponse {
    #[serde(default)]
    pub meals: Option<Vec<CategoryEntry>>,
}

impl CategoryListResponse {
    /// Distinct category names in response order; `null` entries are skipped.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for entry in self.meals.iter().flatten() {
            let Some(name) = entry.name.as_deref() else {
                continue;
            };
            if names.iter().any(|n| n == name) {
                continue;
            }
            names.push(name.to_string());
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> MealRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_ingredients_skip_blank_and_null() {
        let meal = record(
            r#"{
                "strIngredient1": "Water", "strMeasure1": "1 cup",
                "strIngredient2": "", "strMeasure2": "2 tbsp",
                "strIngredient3": null, "strMeasure3": null,
                "strIngredient4": "   ", "strMeasure4": "pinch",
                "strIngredient5": "Sugar", "strMeasure5": " "
            }"#,
        );
        let ingredients = meal.ingredients();
        assert_eq!(
            ingredients,
            vec![
                Ingredient { name: "Water".into(), measure: "1 cup".into() },
                Ingredient { name: "Sugar".into(), measure: " ".into() },
            ]
        );
    }

    #[test]
    fn test_ingredients_keep_index_order_and_bound() {
        let mut map = Map::new();
        for i in (1..=25).rev() {
            map.insert(format!("strIngredient{}", i), Value::from(format!("ing{}", i)));
        }
        let meal = MealRecord::from(map);
        let names: Vec<String> = meal.ingredients().into_iter().map(|i| i.name).collect();
        let expected: Vec<String> = (1..=20).map(|i| format!("ing{}", i)).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_missing_measure_is_empty() {
        let meal = record(r#"{"strIngredient1": "Salt"}"#);
        assert_eq!(meal.ingredients()[0].measure, "");
    }

    #[test]
    fn test_null_meals_is_empty() {
        let resp: MealsResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(resp.is_empty());
        let resp: MealsResponse = serde_json::from_str(r#"{"meals": []}"#).unwrap();
        assert!(resp.is_empty());
        let resp: MealsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.is_empty());
    }

    #[test]
    fn test_unknown_fields_survive() {
        let meal = record(r#"{"strMeal": "Tea", "strTags": "Hot,Drink"}"#);
        assert_eq!(meal.field("strTags"), Some("Hot,Drink"));
        assert_eq!(meal.name(), Some("Tea"));
        assert_eq!(meal.area(), None);
    }

    #[test]
    fn test_blank_thumbnail_is_none() {
        let meal = record(r#"{"strMealThumb": " "}"#);
        assert_eq!(meal.thumbnail_url(), None);
    }

    #[test]
    fn test_category_names_distinct_in_order() {
        let resp: CategoryListResponse = serde_json::from_str(
            r#"{"meals": [
                {"strCategory": "Beef"},
                {"strCategory": "Chicken"},
                {"strCategory": "Beef"},
                {"strCategory": null},
                {"strCategory": ""},
                {"strCategory": "Dessert"},
                {"strCategory": ""}
            ]}"#,
        )
        .unwrap();
        assert_eq!(resp.names(), vec!["Beef", "Chicken", "", "Dessert"]);
    }

    #[test]
    fn test_category_names_null_meals() {
        let resp: CategoryListResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(resp.names().is_empty());
    }
}
