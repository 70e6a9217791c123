use crate::filter::ANY;
use crate::formats::LookupTable;
use crate::render::SelectOption;

pub const ALL_GENRES: &str = "All Genres";
pub const ALL_AUTHORS: &str = "All Authors";

/// Dropdown entries: the permissive `any` choice, then the table in
/// declaration order.
pub fn select_options(table: &LookupTable, any_label: &str) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: ANY.to_owned(),
        label: any_label.to_owned(),
    })
    .chain(table.iter().map(|(id, name)| SelectOption {
        value: id.clone(),
        label: name.clone(),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::tests::table;

    #[test]
    fn any_comes_first_then_table_order() {
        let options = select_options(&table(&[("g2", "Poetry"), ("g1", "Horror")]), ALL_GENRES);
        let pairs: Vec<(&str, &str)> = options
            .iter()
            .map(|o| (o.value.as_str(), o.label.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [("any", "All Genres"), ("g2", "Poetry"), ("g1", "Horror")]
        );
    }

    #[test]
    fn empty_table_still_offers_any() {
        let options = select_options(&LookupTable::new(), ALL_AUTHORS);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "All Authors");
    }
}
