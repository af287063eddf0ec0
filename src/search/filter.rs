//! Search filter predicate over property name and category.

/// Category filter parsed from a comma-separated list.
///
/// A single term matches by case-insensitive substring, so "villa" finds
/// "Beach Villa". Multiple terms switch to case-insensitive exact
/// membership, so "Villa,Hotel" matches only categories named exactly
/// "Villa" or "Hotel". The asymmetry keeps single-term search forgiving
/// while multi-term search stays unambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    Single(String),
    Many(Vec<String>),
}

impl CategoryFilter {
    /// Parses a raw comma-separated list; empty tokens are dropped.
    /// Returns `None` when no usable token remains.
    pub fn parse(raw: &str) -> Option<CategoryFilter> {
        let mut tokens: Vec<String> = raw
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        match tokens.len() {
            0 => None,
            1 => tokens.pop().map(CategoryFilter::Single),
            _ => Some(CategoryFilter::Many(tokens)),
        }
    }

    pub fn matches(&self, category_name: &str) -> bool {
        let name = category_name.to_lowercase();
        match self {
            CategoryFilter::Single(term) => name.contains(term),
            CategoryFilter::Many(terms) => terms.iter().any(|t| *t == name),
        }
    }
}

/// Optional name and category predicate applied to city-matched candidates.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    /// Case-insensitive substring on the property name.
    pub name: Option<String>,
    pub categories: Option<CategoryFilter>,
}

impl PropertyFilter {
    pub fn matches(&self, property_name: &str, category_name: Option<&str>) -> bool {
        if let Some(needle) = &self.name {
            if !property_name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }

        if let Some(categories) = &self.categories {
            // A property without a category never matches a category filter.
            match category_name {
                Some(name) => {
                    if !categories.matches(name) {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_term_matches_by_substring() {
        let filter = CategoryFilter::parse("Villa").unwrap();
        assert!(filter.matches("Villa"));
        assert!(filter.matches("Beach Villa"));
        assert!(filter.matches("VILLA DELUXE"));
        assert!(!filter.matches("Hotel"));
    }

    #[test]
    fn test_multiple_terms_match_by_exact_membership() {
        let filter = CategoryFilter::parse("Villa,Hotel").unwrap();
        assert!(filter.matches("Villa"));
        assert!(filter.matches("hotel"));
        assert!(!filter.matches("Beach Villa"));
        assert!(!filter.matches("Hotels"));
    }

    #[test]
    fn test_parse_trims_and_drops_empty_tokens() {
        let filter = CategoryFilter::parse(" Villa , ,Hotel ").unwrap();
        assert_eq!(
            filter,
            CategoryFilter::Many(vec!["villa".to_string(), "hotel".to_string()])
        );

        assert_eq!(CategoryFilter::parse(" , ,"), None);
        assert_eq!(CategoryFilter::parse(""), None);
    }

    #[test]
    fn test_single_token_after_trim_stays_substring() {
        let filter = CategoryFilter::parse("Villa,").unwrap();
        assert_eq!(filter, CategoryFilter::Single("villa".to_string()));
        assert!(filter.matches("Beach Villa"));
    }

    #[test]
    fn test_property_filter_name_substring() {
        let filter = PropertyFilter {
            name: Some("sunrise".to_string()),
            categories: None,
        };
        assert!(filter.matches("Sunrise Bungalows", None));
        assert!(!filter.matches("Sunset Lodge", None));
    }

    #[test]
    fn test_property_without_category_fails_category_filter() {
        let filter = PropertyFilter {
            name: None,
            categories: CategoryFilter::parse("Villa"),
        };
        assert!(!filter.matches("Sunrise Bungalows", None));
        assert!(filter.matches("Sunrise Bungalows", Some("Villa")));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PropertyFilter::default();
        assert!(filter.matches("Anything", None));
        assert!(filter.matches("Anything", Some("Hostel")));
    }
}
