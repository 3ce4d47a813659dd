// Catalog domain model - Loaded dashboards plus the facets derived from them
use super::dashboard::DashboardRecord;
use super::facet::{FacetDefinition, FacetStyles};

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub records: Vec<DashboardRecord>,
    pub categories: Vec<FacetDefinition>,
    pub platforms: Vec<FacetDefinition>,
    category_fallback: FacetDefinition,
    platform_fallback: FacetDefinition,
}

impl Catalog {
    /// Derive category and platform facets in first-seen order, one per
    /// distinct display name, styled from the given tables.
    pub fn from_records(
        records: Vec<DashboardRecord>,
        category_styles: &FacetStyles,
        platform_styles: &FacetStyles,
    ) -> Self {
        let mut categories: Vec<FacetDefinition> = Vec::new();
        let mut platforms: Vec<FacetDefinition> = Vec::new();

        for record in &records {
            if !record.category.is_empty() && !categories.iter().any(|c| c.name == record.category)
            {
                categories.push(FacetDefinition::new(
                    &record.category,
                    category_styles.lookup(&record.category),
                ));
            }
            if !record.platform.is_empty() && !platforms.iter().any(|p| p.name == record.platform)
            {
                platforms.push(FacetDefinition::new(
                    &record.platform,
                    platform_styles.lookup(&record.platform),
                ));
            }
        }

        Self {
            records,
            categories,
            platforms,
            category_fallback: category_styles.fallback_definition(),
            platform_fallback: platform_styles.fallback_definition(),
        }
    }

    pub fn empty(category_styles: &FacetStyles, platform_styles: &FacetStyles) -> Self {
        Self::from_records(Vec::new(), category_styles, platform_styles)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&DashboardRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Display name for a selected category id, if any facet has that id.
    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    pub fn platform_name(&self, id: &str) -> Option<&str> {
        self.platforms
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
    }

    /// The facet a record's category name belongs to, or the "General" fallback.
    pub fn resolve_category(&self, name: &str) -> &FacetDefinition {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .unwrap_or(&self.category_fallback)
    }

    /// The facet a record's platform name belongs to, or the "Unknown" fallback.
    pub fn resolve_platform(&self, name: &str) -> &FacetDefinition {
        self.platforms
            .iter()
            .find(|p| p.name == name)
            .unwrap_or(&self.platform_fallback)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn record(id: &str, title: &str, category: &str, platform: &str) -> DashboardRecord {
        DashboardRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            url: format!("https://bi.example.com/{}", id),
            platform: platform.to_string(),
            category: category.to_string(),
            tags: Vec::new(),
            image: None,
            last_updated: "2024-05-17".to_string(),
            is_active: true,
        }
    }

    pub fn catalog(records: Vec<DashboardRecord>) -> Catalog {
        Catalog::from_records(records, &FacetStyles::categories(), &FacetStyles::platforms())
    }

    pub fn sample() -> Catalog {
        let mut revenue = record("revenue", "Revenue Report", "Sales", "Power BI");
        revenue.description = "Monthly revenue by region".to_string();
        revenue.tags = vec!["KPI".to_string()];
        let mut budget = record("budget", "Budget Tracker", "Finance", "Tableau");
        budget.tags = vec!["planning".to_string(), "quarterly".to_string()];
        let pipeline = record("pipeline", "Pipeline", "Sales", "Tableau");
        let headcount = record("headcount", "Headcount", "Human Resources", "SharePoint");
        catalog(vec![revenue, budget, pipeline, headcount])
    }
}
