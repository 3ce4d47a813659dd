// Filter engine - Narrow the catalog down to the records matching the criteria
use crate::domain::catalog::Catalog;
use crate::domain::dashboard::DashboardRecord;
use crate::domain::filter::FilterCriteria;

/// Records matching every active criterion, in catalog order.
///
/// Search is a case-insensitive substring match over title, description,
/// category, platform and tags. Category and platform selections are facet
/// ids; a selected id that names no facet matches nothing. Tags are not
/// applied.
pub fn apply_filters<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a DashboardRecord> {
    let search = criteria.search.to_lowercase();
    let category = selected_name(&criteria.category, |id| catalog.category_name(id));
    let platform = selected_name(&criteria.platform, |id| catalog.platform_name(id));

    catalog
        .records
        .iter()
        .filter(|record| search.is_empty() || record.searchable_text().contains(&search))
        .filter(|record| category.is_none_or(|name| record.category == name))
        .filter(|record| platform.is_none_or(|name| record.platform == name))
        .collect()
}

/// `None` when nothing is selected; an unknown id resolves to the empty name.
fn selected_name<'a>(id: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> Option<&'a str> {
    if id.is_empty() {
        None
    } else {
        Some(lookup(id).unwrap_or(""))
    }
}
