//! Keyword matching: fuzzy name search and the global cross-field search.

use tableside_core::Restaurant;

/// Similarity a non-substring match must clear to count as a hit.
const FUZZY_THRESHOLD: f64 = 0.6;

/// Restaurants whose name matches `keyword`, typo-tolerantly.
///
/// A name matches when it contains the keyword, starts with it, or sits
/// within Levenshtein similarity `1 − distance / max_len` above 0.6.
/// Starts-with matches come first, alphabetically; the remaining matches
/// follow, also alphabetically. Matching is case-insensitive and inactive
/// restaurants never appear.
///
/// # Examples
/// ```
/// use tableside_core::{CuisineType, Restaurant};
/// use tableside_search::fuzzy_name_matches;
///
/// let catalog = vec![
///     Restaurant::new("r1", "Sushiro", CuisineType::Japanese),
///     Restaurant::new("r2", "Sushi Express", CuisineType::Japanese),
/// ];
/// let hits = fuzzy_name_matches(&catalog, "sushi");
/// assert_eq!(hits.len(), 2);
/// // Both start with the keyword, so alphabetical order decides.
/// assert_eq!(hits[0].name, "Sushi Express");
/// ```
#[must_use]
pub fn fuzzy_name_matches(restaurants: &[Restaurant], keyword: &str) -> Vec<Restaurant> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut prefix_hits = Vec::new();
    let mut other_hits = Vec::new();
    for restaurant in restaurants.iter().filter(|r| r.active) {
        let name = restaurant.name.to_lowercase();
        if name.starts_with(&needle) {
            prefix_hits.push(restaurant.clone());
        } else if name.contains(&needle)
            || strsim::normalized_levenshtein(&name, &needle) > FUZZY_THRESHOLD
        {
            other_hits.push(restaurant.clone());
        }
    }

    sort_by_name(&mut prefix_hits);
    sort_by_name(&mut other_hits);
    prefix_hits.extend(other_hits);
    prefix_hits
}

/// Restaurants matching `keyword` in any descriptive field.
///
/// Case-insensitive substring match over name, description, cuisine
/// display name, city and address. Name matches lead the result; within
/// each group the catalog order is preserved.
#[must_use]
pub fn global_matches(restaurants: &[Restaurant], keyword: &str) -> Vec<Restaurant> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut name_hits = Vec::new();
    let mut field_hits = Vec::new();
    for restaurant in restaurants.iter().filter(|r| r.active) {
        if restaurant.name.to_lowercase().contains(&needle) {
            name_hits.push(restaurant.clone());
        } else if matches_other_field(restaurant, &needle) {
            field_hits.push(restaurant.clone());
        }
    }

    name_hits.extend(field_hits);
    name_hits
}

fn matches_other_field(restaurant: &Restaurant, needle: &str) -> bool {
    if restaurant.description.to_lowercase().contains(needle) {
        return true;
    }
    if restaurant
        .cuisine
        .display_name()
        .to_lowercase()
        .contains(needle)
    {
        return true;
    }
    restaurant.location.as_ref().is_some_and(|location| {
        location.city.to_lowercase().contains(needle)
            || location.address.to_lowercase().contains(needle)
    })
}

fn sort_by_name(restaurants: &mut [Restaurant]) {
    restaurants.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tableside_core::{CuisineType, Location, Restaurant};

    fn named(id: &str, name: &str) -> Restaurant {
        Restaurant::new(id, name, CuisineType::Other)
    }

    #[test]
    fn prefix_matches_lead_the_result() {
        let catalog = vec![
            named("r1", "Taipei Noodle House"),
            named("r2", "Noodle Bar"),
            named("r3", "Noodle Alley"),
        ];
        let hits = fuzzy_name_matches(&catalog, "noodle");
        let names: Vec<&str> = hits.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Noodle Alley", "Noodle Bar", "Taipei Noodle House"]);
    }

    #[test]
    fn near_miss_spelling_still_matches() {
        let catalog = vec![named("r1", "RAW")];
        // One edit away on a three-letter name: similarity 2/3.
        let hits = fuzzy_name_matches(&catalog, "ram");
        assert_eq!(hits.len(), 1);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_keywords_match_nothing(#[case] keyword: &str) {
        let catalog = vec![named("r1", "RAW")];
        assert!(fuzzy_name_matches(&catalog, keyword).is_empty());
        assert!(global_matches(&catalog, keyword).is_empty());
    }

    #[test]
    fn distant_names_do_not_match() {
        let catalog = vec![named("r1", "RAW")];
        assert!(fuzzy_name_matches(&catalog, "noodle").is_empty());
    }

    #[test]
    fn inactive_restaurants_never_match() {
        let catalog = vec![named("r1", "Noodle Bar").with_active(false)];
        assert!(fuzzy_name_matches(&catalog, "noodle").is_empty());
        assert!(global_matches(&catalog, "noodle").is_empty());
    }

    #[test]
    fn global_match_reaches_every_field() {
        let by_description = named("r1", "Plain Name").with_description("hand-pulled noodles");
        let by_cuisine = Restaurant::new("r2", "Another Name", CuisineType::HotPot);
        let by_city = named("r3", "Third Name").with_location(Location::new(
            25.0, 121.5, "Lane 13", "Taipei", "Zhongshan",
        ));
        let catalog = vec![by_description, by_cuisine, by_city];

        assert_eq!(global_matches(&catalog, "noodles").len(), 1);
        assert_eq!(global_matches(&catalog, "hot pot").len(), 1);
        assert_eq!(global_matches(&catalog, "taipei").len(), 1);
        assert_eq!(global_matches(&catalog, "lane 13").len(), 1);
    }

    #[test]
    fn global_name_hits_come_first() {
        let by_description = named("r1", "Alley Eatery").with_description("famous dumplings");
        let by_name = named("r2", "Dumpling House");
        let catalog = vec![by_description, by_name];
        let hits = global_matches(&catalog, "dumpling");
        let names: Vec<&str> = hits.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Dumpling House", "Alley Eatery"]);
    }
}
