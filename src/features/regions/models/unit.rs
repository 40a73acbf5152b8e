use crate::features::regions::models::{Province, Ward};

/// Behaviour shared by every level of the administrative hierarchy.
///
/// The query engine is written once against this trait so provinces and
/// wards are searched, filtered and ordered by exactly the same rules.
pub trait AdministrativeUnit: Clone {
    fn code(&self) -> &str;

    fn name(&self) -> &str;

    fn unit_type(&self) -> &str;

    /// Fields a free-text search is matched against.
    fn searchable_fields(&self) -> Vec<&str>;

    /// Code of the owning unit, if this level has one.
    fn parent_code(&self) -> Option<&str> {
        None
    }

    /// Case-insensitive substring match against any searchable field.
    ///
    /// `needle` must already be lower-cased. Diacritics are not folded, so
    /// "phuc" does not match "Phúc".
    fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .searchable_fields()
                .into_iter()
                .any(|field| field.to_lowercase().contains(needle))
    }

    fn matches_type(&self, type_filter: &str) -> bool {
        type_filter.is_empty() || self.unit_type() == type_filter
    }

    fn matches_parent(&self, parent_filter: &str) -> bool {
        parent_filter.is_empty() || self.parent_code() == Some(parent_filter)
    }
}

impl AdministrativeUnit for Province {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn unit_type(&self) -> &str {
        &self.unit_type
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.slug.as_str(),
            self.name_with_type.as_str(),
        ]
    }
}

impl AdministrativeUnit for Ward {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn unit_type(&self) -> &str {
        &self.unit_type
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.slug.as_str(),
            self.name_with_type.as_str(),
            self.path.as_str(),
            self.path_with_type.as_str(),
        ]
    }

    fn parent_code(&self) -> Option<&str> {
        Some(self.parent_code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{sample_province, sample_ward};

    #[test]
    fn test_matches_query_is_case_insensitive() {
        let ward = sample_ward("00001", "Phúc Xá", "Phường", "01");
        assert!(ward.matches_query("phúc"));
        assert!(ward.matches_query(&"PHÚC XÁ".to_lowercase()));
        assert!(ward.matches_query("hà nội")); // via path
    }

    #[test]
    fn test_matches_query_does_not_fold_diacritics() {
        let ward = sample_ward("00001", "Phúc Xá", "Phường", "01");
        assert!(!ward.matches_query("phuc xa"));
    }

    #[test]
    fn test_province_does_not_match_parent_filter() {
        let province = sample_province("01", "Hà Nội", "Thành phố");
        assert!(province.matches_parent(""));
        assert!(!province.matches_parent("01"));
    }

    #[test]
    fn test_type_filter_is_exact() {
        let province = sample_province("01", "Hà Nội", "Thành phố");
        assert!(province.matches_type("Thành phố"));
        assert!(!province.matches_type("thành phố"));
        assert!(province.matches_type(""));
    }
}
