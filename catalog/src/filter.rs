use crate::item::MenuItem;

/// User-selected predicates. Absent (or empty-string) predicates always
/// match, so the default value is the identity filter.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub park: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub ddp_only: bool,
    pub query: Option<String>,
}

impl Filters {
    pub fn matches(&self, item: &MenuItem) -> bool {
        if let Some(park) = selected(&self.park) {
            if item.park != park {
                return false;
            }
        }

        if let Some(category) = selected(&self.category) {
            if item.category != category {
                return false;
            }
        }

        if let Some(area) = selected(&self.area) {
            if item.area != area {
                return false;
            }
        }

        if self.ddp_only && !item.ddp_eligible {
            return false;
        }

        if let Some(query) = selected(&self.query) {
            let query = query.to_lowercase();
            if !item.name.to_lowercase().contains(&query)
                && !item.restaurant.to_lowercase().contains(&query)
            {
                return false;
            }
        }

        true
    }
}

fn selected(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Applies the predicates, keeping input order. Ranking runs afterwards,
/// never here.
pub fn filter(items: &[MenuItem], filters: &Filters) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| filters.matches(item))
        .cloned()
        .collect()
}
