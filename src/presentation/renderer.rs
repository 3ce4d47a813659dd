// View renderer - Filter chips and dashboard tiles as HTML markup
use crate::domain::catalog::Catalog;
use crate::domain::dashboard::DashboardRecord;
use crate::domain::facet::{FacetDefinition, FacetKind};
use crate::domain::favorites::FavoritesSet;
use crate::domain::filter::FilterCriteria;
use crate::infrastructure::config::FeatureFlags;

/// Backgrounds that need dark text to stay readable.
const LIGHT_COLORS: [&str; 6] = ["F4D06F", "E6C45A", "F2C811", "FFDD44", "FFF8DC", "FFEB3B"];

/// Projection of hub state into markup. Output depends only on the inputs.
pub trait ViewRenderer: Send + Sync {
    fn render_filters(&self, catalog: &Catalog, criteria: &FilterCriteria) -> String;

    fn render_tiles(
        &self,
        catalog: &Catalog,
        visible: &[DashboardRecord],
        favorites: &FavoritesSet,
    ) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    features: FeatureFlags,
    fallback_image: Option<String>,
}

impl HtmlRenderer {
    pub fn new(features: FeatureFlags, fallback_image: Option<String>) -> Self {
        Self {
            features,
            fallback_image,
        }
    }

    fn render_chip(&self, kind: FacetKind, facet: &FacetDefinition, active: bool) -> String {
        let color = escape(&facet.color);
        let style = if active {
            format!(
                "--filter-color: {c}; background: linear-gradient(135deg, {c}, {c}dd); border-color: {c}; color: {};",
                contrast_color(&facet.color),
                c = color
            )
        } else {
            format!("--filter-color: {c}; border-color: {c}40; color: {c};", c = color)
        };
        let label = match (kind, &facet.icon) {
            (FacetKind::Category, Some(icon)) => format!("{} {}", escape(icon), escape(&facet.name)),
            _ => escape(&facet.name),
        };

        format!(
            r#"<button class="filter-chip{}" data-type="{}" data-value="{}" style="{}">{}</button>"#,
            if active { " active" } else { "" },
            kind.as_str(),
            escape(&facet.id),
            style,
            label
        )
    }

    fn render_tile(&self, catalog: &Catalog, record: &DashboardRecord, favorite: bool) -> String {
        let category = catalog.resolve_category(&record.category);
        let platform = catalog.resolve_platform(&record.platform);
        let url = escape(&record.url);

        let image = record
            .image
            .as_deref()
            .or(self.fallback_image.as_deref())
            .map(|src| format!(r#" style="background-image: url('{}')""#, escape(src)))
            .unwrap_or_default();

        let tags: String = record
            .tags
            .iter()
            .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape(tag)))
            .collect();

        let category_label = match &category.icon {
            Some(icon) => format!("{} {}", escape(icon), escape(&record.category)),
            None => escape(&record.category),
        };

        let favorite_button = format!(
            r#"<button class="btn btn-favorite{}" title="{}">{}</button>"#,
            if favorite { " active" } else { "" },
            if favorite { "Remove from favorites" } else { "Add to favorites" },
            if favorite { "⭐" } else { "☆" }
        );

        let copy_button = if self.features.copy_short_url {
            format!(
                r#"<button class="btn btn-copy-url" data-url="{}" title="Copy shortened URL">📋 Copy URL</button>"#,
                url
            )
        } else {
            String::new()
        };

        format!(
            concat!(
                r#"<div class="dashboard-tile" data-dashboard-id="{id}">"#,
                r#"<div class="dashboard-image"{image}></div>"#,
                r#"<div class="dashboard-content">"#,
                r#"<h3 class="dashboard-title">{title}</h3>"#,
                r#"<p class="dashboard-description">{description}</p>"#,
                r#"<div class="dashboard-meta">"#,
                r#"<span class="platform-badge" style="background-color: {pc}20; color: {pc}; font-weight: 600;">{platform}</span>"#,
                r#"<span class="category-badge" style="background-color: {cc}; color: {ct}; font-weight: 600;">{category}</span>"#,
                r#"</div>"#,
                r#"<div class="dashboard-tags">{tags}</div>"#,
                r#"<div class="dashboard-actions">{favorite}{copy}"#,
                r#"<a href="{url}" target="_blank" rel="noopener noreferrer" class="btn btn-primary">Open Dashboard</a>"#,
                r#"</div></div></div>"#
            ),
            id = escape(&record.id),
            image = image,
            title = escape(&record.title),
            description = escape(&record.description),
            pc = escape(&platform.color),
            platform = escape(&record.platform),
            cc = escape(&category.color),
            ct = contrast_color(&category.color),
            category = category_label,
            tags = tags,
            favorite = favorite_button,
            copy = copy_button,
            url = url,
        )
    }
}

impl ViewRenderer for HtmlRenderer {
    fn render_filters(&self, catalog: &Catalog, criteria: &FilterCriteria) -> String {
        let mut chips: Vec<String> = Vec::new();
        chips.extend(catalog.categories.iter().map(|category| {
            self.render_chip(FacetKind::Category, category, criteria.category == category.id)
        }));
        chips.extend(catalog.platforms.iter().map(|platform| {
            self.render_chip(FacetKind::Platform, platform, criteria.platform == platform.id)
        }));
        chips.push(r#"<button class="filter-chip" data-type="clear">🗑️ Clear All</button>"#.to_string());
        if self.features.share_favorites {
            chips.push(
                r#"<button class="filter-chip" data-type="share">📤 Share Favorites</button>"#
                    .to_string(),
            );
        }
        chips.join("")
    }

    fn render_tiles(
        &self,
        catalog: &Catalog,
        visible: &[DashboardRecord],
        favorites: &FavoritesSet,
    ) -> String {
        visible
            .iter()
            .map(|record| self.render_tile(catalog, record, favorites.contains(&record.id)))
            .collect()
    }
}

/// Dark text for known light/yellow backgrounds, white otherwise.
pub fn contrast_color(background: &str) -> &'static str {
    let normalized = background.to_uppercase();
    if LIGHT_COLORS.iter().any(|light| normalized.contains(light)) {
        "#2c2c2c"
    } else {
        "#ffffff"
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
