use std::fmt;

/// Fixed page size for every search request
pub const PAGE_SIZE: u32 = 25;

/// At most this many zip codes may be selected; additions beyond the cap
/// are silently ignored
pub const MAX_ZIP_CODES: usize = 6;

/// Accepted age bounds, inclusive
pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 25;

/// Sortable dog attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Breed,
    Name,
    Age,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Breed => "breed",
            SortField::Name => "name",
            SortField::Age => "age",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "breed" => Some(SortField::Breed),
            "name" => Some(SortField::Name),
            "age" => Some(SortField::Age),
            _ => None,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-editable search filters
///
/// Mutated by input events, consumed only when a search is triggered,
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    breeds: Vec<String>,
    age_min: Option<u8>,
    age_max: Option<u8>,
    zip_codes: Vec<String>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn breeds(&self) -> &[String] {
        &self.breeds
    }

    pub fn zip_codes(&self) -> &[String] {
        &self.zip_codes
    }

    pub fn age_min(&self) -> Option<u8> {
        self.age_min
    }

    pub fn age_max(&self) -> Option<u8> {
        self.age_max
    }

    /// Add a breed to the selection; duplicates are ignored
    pub fn add_breed(&mut self, breed: impl Into<String>) {
        let breed = breed.into();
        if !self.breeds.contains(&breed) {
            self.breeds.push(breed);
        }
    }

    pub fn remove_breed(&mut self, breed: &str) {
        self.breeds.retain(|b| b != breed);
    }

    pub fn clear_breeds(&mut self) {
        self.breeds.clear();
    }

    /// Set the minimum age bound
    ///
    /// Out-of-range values are rejected and leave the state unchanged,
    /// not clamped. Returns whether the value was accepted.
    pub fn set_age_min(&mut self, age: u8) -> bool {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return false;
        }
        self.age_min = Some(age);
        true
    }

    /// Set the maximum age bound, with the same rejection rule
    pub fn set_age_max(&mut self, age: u8) -> bool {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return false;
        }
        self.age_max = Some(age);
        true
    }

    /// Drop a bound entirely; absence means "no bound" server-side
    pub fn clear_age_min(&mut self) {
        self.age_min = None;
    }

    pub fn clear_age_max(&mut self) {
        self.age_max = None;
    }

    /// Add a zip code to the selection
    ///
    /// Duplicates and additions beyond the cap are silently ignored.
    /// Returns whether the zip was actually added.
    pub fn add_zip_code(&mut self, zip: impl Into<String>) -> bool {
        let zip = zip.into();
        if self.zip_codes.len() >= MAX_ZIP_CODES || self.zip_codes.contains(&zip) {
            return false;
        }
        self.zip_codes.push(zip);
        true
    }

    pub fn remove_zip_code(&mut self, zip: &str) {
        self.zip_codes.retain(|z| z != zip);
    }

    /// Serialize the filters into the search query string
    ///
    /// Array-valued filters become repeated parameters; age bounds appear
    /// only when set; `sort` is always present; page size and starting
    /// offset are fixed.
    pub fn to_query(&self) -> String {
        let mut params: Vec<String> = Vec::new();

        for breed in &self.breeds {
            params.push(format!("breeds={}", urlencoding::encode(breed)));
        }

        for zip in &self.zip_codes {
            params.push(format!("zipCodes={}", urlencoding::encode(zip)));
        }

        if let Some(min) = self.age_min {
            params.push(format!("ageMin={}", min));
        }
        if let Some(max) = self.age_max {
            params.push(format!("ageMax={}", max));
        }

        params.push(format!("sort={}:{}", self.sort_field, self.sort_direction));
        params.push(format!("size={}", PAGE_SIZE));
        params.push("from=0".to_string());

        params.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_has_fixed_tail() {
        let filters = FilterState::new();
        assert_eq!(filters.to_query(), "sort=breed:asc&size=25&from=0");
    }

    #[test]
    fn test_query_repeats_array_params() {
        let mut filters = FilterState::new();
        filters.add_breed("Beagle");
        filters.add_breed("Shiba Inu");
        filters.add_zip_code("10001");
        filters.add_zip_code("90210");

        let query = filters.to_query();
        assert_eq!(
            query,
            "breeds=Beagle&breeds=Shiba%20Inu&zipCodes=10001&zipCodes=90210\
             &sort=breed:asc&size=25&from=0"
        );
    }

    #[test]
    fn test_query_includes_age_bounds_only_when_set() {
        let mut filters = FilterState::new();
        assert!(!filters.to_query().contains("ageMin"));
        assert!(!filters.to_query().contains("ageMax"));

        assert!(filters.set_age_min(2));
        assert!(filters.set_age_max(10));
        let query = filters.to_query();
        assert!(query.contains("ageMin=2"));
        assert!(query.contains("ageMax=10"));
    }

    #[test]
    fn test_sort_param_reflects_selection() {
        let mut filters = FilterState::new();
        filters.sort_field = SortField::Age;
        filters.sort_direction = SortDirection::Descending;
        assert!(filters.to_query().contains("sort=age:desc"));
    }

    #[test]
    fn test_age_out_of_range_rejected_unchanged() {
        let mut filters = FilterState::new();
        assert!(filters.set_age_min(3));

        assert!(!filters.set_age_min(0));
        assert!(!filters.set_age_min(26));
        assert_eq!(filters.age_min(), Some(3));

        assert!(!filters.set_age_max(0));
        assert_eq!(filters.age_max(), None);
    }

    #[test]
    fn test_zip_cap_silently_ignores_overflow() {
        let mut filters = FilterState::new();
        for i in 0..MAX_ZIP_CODES {
            assert!(filters.add_zip_code(format!("1000{}", i)));
        }
        assert!(!filters.add_zip_code("99999"));
        assert_eq!(filters.zip_codes().len(), MAX_ZIP_CODES);
    }

    #[test]
    fn test_zip_duplicates_ignored() {
        let mut filters = FilterState::new();
        assert!(filters.add_zip_code("10001"));
        assert!(!filters.add_zip_code("10001"));
        assert_eq!(filters.zip_codes(), ["10001"]);
    }

    #[test]
    fn test_breed_dedupe_and_removal() {
        let mut filters = FilterState::new();
        filters.add_breed("Beagle");
        filters.add_breed("Beagle");
        assert_eq!(filters.breeds().len(), 1);

        filters.remove_breed("Beagle");
        assert!(filters.breeds().is_empty());
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!(SortField::parse("age"), Some(SortField::Age));
        assert_eq!(SortField::parse("weight"), None);
        assert_eq!(SortDirection::parse("desc"), Some(SortDirection::Descending));
        assert_eq!(SortDirection::parse("down"), None);
    }
}
