use super::model::Catalog;

/// Ordering applied to the filtered results before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep the order the filter produced.
    #[default]
    Catalog,
    /// Best (lowest) ranking first.
    Ranking,
    /// Cheapest local tuition first.
    Fees,
    /// Highest rating first.
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Catalog, SortKey::Ranking, SortKey::Fees, SortKey::Rating];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Catalog => "Catalog order",
            SortKey::Ranking => "Ranking",
            SortKey::Fees => "Fees (Low to High)",
            SortKey::Rating => "Rating",
        }
    }
}

/// Stable in-place sort of catalog indices. Ties keep their relative order.
pub fn sort_indices(catalog: &Catalog, indices: &mut [usize], key: SortKey) {
    let unis = &catalog.universities;
    match key {
        SortKey::Catalog => {}
        SortKey::Ranking => indices.sort_by_key(|&i| unis[i].ranking),
        SortKey::Fees => indices.sort_by_key(|&i| unis[i].tuition_fee.local),
        SortKey::Rating => {
            indices.sort_by(|&a, &b| unis[b].rating.total_cmp(&unis[a].rating))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::university;
    use crate::data::model::LocationCategory;

    fn catalog() -> Catalog {
        let mut a = university("a", "A", LocationCategory::Local, 300, vec![]);
        a.ranking = 2;
        a.rating = 4.0;
        let mut b = university("b", "B", LocationCategory::Local, 100, vec![]);
        b.ranking = 1;
        b.rating = 4.9;
        let mut c = university("c", "C", LocationCategory::International, 200, vec![]);
        c.ranking = 1;
        c.rating = 4.0;
        Catalog::from_universities(vec![a, b, c]).unwrap()
    }

    fn sorted(key: SortKey) -> Vec<usize> {
        let catalog = catalog();
        let mut idx = vec![0, 1, 2];
        sort_indices(&catalog, &mut idx, key);
        idx
    }

    #[test]
    fn catalog_key_keeps_order() {
        assert_eq!(sorted(SortKey::Catalog), vec![0, 1, 2]);
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        assert_eq!(sorted(SortKey::Ranking), vec![1, 2, 0]);
    }

    #[test]
    fn fees_ascending() {
        assert_eq!(sorted(SortKey::Fees), vec![1, 2, 0]);
    }

    #[test]
    fn rating_descending_keeps_tie_order() {
        assert_eq!(sorted(SortKey::Rating), vec![1, 0, 2]);
    }
}
