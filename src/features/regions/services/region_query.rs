//! Pure query functions over a [`Snapshot`].
//!
//! Nothing here takes a lock or touches I/O. Callers hold the snapshot's
//! read guard for as long as a query runs.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use crate::features::regions::models::{AdministrativeUnit, Province, Ward};
use crate::features::regions::services::region_store::Snapshot;

/// Free-text and exact-match criteria for a list query.
///
/// Empty strings mean "no constraint".
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFilter<'a> {
    pub query: &'a str,
    pub unit_type: &'a str,
    pub parent_code: &'a str,
}

/// One page of a sorted result set
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Size of the full matched set, before paging
    pub total: usize,
}

/// Which entity kinds a global search covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    #[default]
    All,
    Province,
    Ward,
}

impl SearchScope {
    pub fn includes_provinces(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Province)
    }

    pub fn includes_wards(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Ward)
    }
}

impl FromStr for SearchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(SearchScope::All),
            "province" => Ok(SearchScope::Province),
            "ward" => Ok(SearchScope::Ward),
            other => Err(format!(
                "Invalid entity '{}': expected one of all, province, ward",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalSearchResult {
    pub provinces: Vec<Province>,
    pub wards: Vec<Ward>,
}

/// Filter `units` and sort the matches by name, then code
pub fn filter_sorted<'a, T, I>(units: I, filter: &SearchFilter<'_>) -> Vec<T>
where
    T: AdministrativeUnit + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let needle = filter.query.to_lowercase();
    let mut matched: Vec<T> = units
        .into_iter()
        .filter(|unit| {
            unit.matches_query(&needle)
                && unit.matches_type(filter.unit_type)
                && unit.matches_parent(filter.parent_code)
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.code().cmp(b.code())));
    matched
}

/// Cut `[offset, offset + limit)` out of an already sorted set.
///
/// An offset past the end yields an empty page with the true total.
pub fn paginate<T>(items: Vec<T>, limit: usize, offset: usize) -> Page<T> {
    let total = items.len();
    let items = items.into_iter().skip(offset).take(limit).collect();
    Page { items, total }
}

pub fn search<'a, T, I>(
    units: I,
    filter: &SearchFilter<'_>,
    limit: usize,
    offset: usize,
) -> Page<T>
where
    T: AdministrativeUnit + 'a,
    I: IntoIterator<Item = &'a T>,
{
    paginate(filter_sorted(units, filter), limit, offset)
}

/// Distinct type tags, sorted
pub fn list_types<'a, T, I>(units: I) -> Vec<String>
where
    T: AdministrativeUnit + 'a,
    I: IntoIterator<Item = &'a T>,
{
    units
        .into_iter()
        .map(|unit| unit.unit_type().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn count_by_type<'a, T, I>(units: I) -> BTreeMap<String, usize>
where
    T: AdministrativeUnit + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut counts = BTreeMap::new();
    for unit in units {
        *counts.entry(unit.unit_type().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Search provinces and wards independently, each capped at `limit`
pub fn global_search(
    snapshot: &Snapshot,
    query: &str,
    scope: SearchScope,
    limit: usize,
) -> GlobalSearchResult {
    let filter = SearchFilter {
        query,
        ..Default::default()
    };
    let mut result = GlobalSearchResult::default();

    if scope.includes_provinces() {
        result.provinces = search(snapshot.provinces.values(), &filter, limit, 0).items;
    }
    if scope.includes_wards() {
        result.wards = search(snapshot.wards.values(), &filter, limit, 0).items;
    }

    result
}

/// The ward, if both codes resolve and the ward belongs to the province
pub fn validate_address(snapshot: &Snapshot, province_code: &str, ward_code: &str) -> Option<Ward> {
    if !snapshot.provinces.contains_key(province_code) {
        return None;
    }

    snapshot
        .wards
        .get(ward_code)
        .filter(|ward| ward.parent_code == province_code)
        .cloned()
}

/// The ward and its province; a dangling parent code yields `None` for the province
pub fn ward_with_province(snapshot: &Snapshot, ward_code: &str) -> Option<(Ward, Option<Province>)> {
    let ward = snapshot.wards.get(ward_code)?;
    let province = snapshot.provinces.get(&ward.parent_code).cloned();
    Some((ward.clone(), province))
}
