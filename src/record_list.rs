/// In-memory record list backing a word or website list widget

use crate::operations::{export_text, filter_items, import_text, sort_items};
use crate::record::{ColumnOrder, Record, RejectionReason};
use crate::settings::ListConfig;

/// Canonical list of records plus the settings that govern edits
#[derive(Debug, Clone, PartialEq)]
pub struct RecordList {
    records: Vec<Record>,
    config: ListConfig,
}

fn value(record: &Record) -> &str {
    &record.value
}

impl RecordList {
    pub fn new(config: ListConfig) -> Self {
        RecordList {
            records: Vec::new(),
            config,
        }
    }

    pub fn from_values<S: AsRef<str>>(values: &[S], config: ListConfig) -> Self {
        let mut list = Self::new(config);
        list.set_list(values);
        list
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Plain values in list order, as handed back to the settings store
    pub fn values(&self) -> Vec<String> {
        self.records.iter().map(|r| r.value.clone()).collect()
    }

    /// Replace the whole list; ids are reassigned from 1 in list order
    pub fn set_list<S: AsRef<str>>(&mut self, values: &[S]) {
        self.records = values
            .iter()
            .zip(1..)
            .map(|(value, id)| Record::new(id, value.as_ref()))
            .collect();
    }

    fn next_id(&self) -> u32 {
        u32::try_from(self.records.len()).map_or(u32::MAX, |len| len.saturating_add(1))
    }

    /// Add a value, returning the new record
    pub fn add(&mut self, value: &str) -> Result<Record, RejectionReason> {
        log::debug!("add to list: {}", value);
        self.config.kind.validate(value)?;
        if self.records.iter().any(|r| r.value == value) {
            return Err(RejectionReason::Duplicate);
        }

        let record = Record::new(self.next_id(), value);
        if self.config.add_new_items_on_top {
            self.records.insert(0, record.clone());
        } else {
            self.records.push(record.clone());
        }
        Ok(record)
    }

    /// Replace the value of record `id`, keeping its id
    ///
    /// An unknown id changes nothing but is not an error. Ids can repeat after
    /// a delete followed by an add; every record carrying `id` is rewritten.
    pub fn edit(&mut self, id: u32, value: &str) -> Result<(), RejectionReason> {
        log::debug!("edit: id={} value={}", id, value);
        self.config.kind.validate(value)?;
        if self.records.iter().any(|r| r.value == value && r.id != id) {
            return Err(RejectionReason::Duplicate);
        }

        for record in self.records.iter_mut().filter(|r| r.id == id) {
            record.value = value.to_string();
        }
        Ok(())
    }

    /// Remove record `id`; returns whether anything was removed
    pub fn delete(&mut self, id: u32) -> bool {
        log::debug!("delete: id={}", id);
        let original_len = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() < original_len
    }

    pub fn get(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records as displayed: ordered first, then filtered by `query`
    pub fn view(&self, ordering: ColumnOrder, query: &str) -> Vec<Record> {
        let sorted = sort_items(&self.records, ordering.direction, value);
        filter_items(&sorted, query, value)
    }

    pub fn export_text(&self) -> String {
        export_text(&self.records, value)
    }

    /// Load a newline-separated file; an import with no values is ignored
    pub fn import(&mut self, content: &str) -> bool {
        let values = import_text(content);
        if values.is_empty() {
            return false;
        }
        self.set_list(&values);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Order;

    fn create_test_list(values: &[&str]) -> RecordList {
        RecordList::from_values(values, ListConfig::default())
    }

    fn ids(list: &RecordList) -> Vec<u32> {
        list.records().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_set_list_assigns_positional_ids() {
        let mut list = create_test_list(&["apple", "banana"]);
        assert_eq!(ids(&list), vec![1, 2]);

        list.set_list(&["x", "y", "z"]);

        assert_eq!(ids(&list), vec![1, 2, 3]);
        assert_eq!(list.values(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_add_appends_with_next_id() {
        let mut list = create_test_list(&["apple", "banana"]);

        let added = list.add("cherry").unwrap();

        assert_eq!(added, Record::new(3, "cherry"));
        assert_eq!(list.values(), vec!["apple", "banana", "cherry"]);
        assert_eq!(ids(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_add_on_top() {
        let config = ListConfig {
            add_new_items_on_top: true,
            ..ListConfig::default()
        };
        let mut list = RecordList::from_values(&["apple"], config);

        list.add("banana").unwrap();

        assert_eq!(list.values(), vec!["banana", "apple"]);
        assert_eq!(ids(&list), vec![2, 1]);
    }

    #[test]
    fn test_add_rejections() {
        let mut list = create_test_list(&["apple"]);

        assert_eq!(list.add(""), Err(RejectionReason::Empty));
        assert_eq!(list.add("apple"), Err(RejectionReason::Duplicate));
        assert_eq!(list.len(), 1);
        // Matching is exact
        assert!(list.add("Apple").is_ok());
    }

    #[test]
    fn test_website_list_requires_urls() {
        let mut list = RecordList::from_values(&["website.com"], ListConfig::websites());

        assert_eq!(list.add("not a url"), Err(RejectionReason::InvalidUrl));
        assert_eq!(list.add(""), Err(RejectionReason::Empty));
        assert_eq!(list.add("website.com"), Err(RejectionReason::Duplicate));
        assert!(list.add("*.example.org/*").is_ok());
        assert_eq!(list.edit(1, "nope"), Err(RejectionReason::InvalidUrl));
    }

    #[test]
    fn test_edit_keeps_id() {
        let mut list = create_test_list(&["apple", "banana"]);

        list.edit(2, "blueberry").unwrap();

        assert_eq!(list.get(2), Some(&Record::new(2, "blueberry")));
        assert_eq!(list.values(), vec!["apple", "blueberry"]);
    }

    #[test]
    fn test_edit_rejections() {
        let mut list = create_test_list(&["apple", "banana"]);

        assert_eq!(list.edit(1, ""), Err(RejectionReason::Empty));
        assert_eq!(list.edit(1, "banana"), Err(RejectionReason::Duplicate));
        // Re-saving a record's own value is fine
        assert_eq!(list.edit(1, "apple"), Ok(()));
        assert_eq!(list.values(), vec!["apple", "banana"]);
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut list = create_test_list(&["apple"]);

        assert_eq!(list.edit(42, "pear"), Ok(()));
        assert_eq!(list.values(), vec!["apple"]);
    }

    #[test]
    fn test_delete_does_not_renumber() {
        let mut list = create_test_list(&["apple", "banana", "cherry"]);

        assert!(list.delete(2));
        assert!(!list.delete(2));

        assert_eq!(list.values(), vec!["apple", "cherry"]);
        assert_eq!(ids(&list), vec![1, 3]);
    }

    #[test]
    fn test_edit_and_delete_after_id_collision() {
        let mut list = create_test_list(&["apple", "banana", "cherry"]);

        list.delete(2);
        let added = list.add("date").unwrap();
        assert_eq!(added.id, 3);
        assert_eq!(ids(&list), vec![1, 3, 3]);

        list.edit(3, "elder").unwrap();
        assert_eq!(list.values(), vec!["apple", "elder", "elder"]);
        assert_eq!(ids(&list), vec![1, 3, 3]);

        assert!(list.delete(3));
        assert_eq!(list.records(), &[Record::new(1, "apple")]);
    }

    #[test]
    fn test_add_then_delete_restores_list() {
        let mut list = create_test_list(&["apple", "banana"]);
        let original = list.clone();

        let added = list.add("cherry").unwrap();
        list.delete(added.id);

        assert_eq!(list, original);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut list = create_test_list(&["apple", "banana"]);

        list.add("cherry").unwrap();
        assert_eq!(list.values(), vec!["apple", "banana", "cherry"]);
        assert_eq!(ids(&list), vec![1, 2, 3]);

        assert_eq!(list.add("apple"), Err(RejectionReason::Duplicate));

        list.delete(2);
        assert_eq!(list.values(), vec!["apple", "cherry"]);
        assert_eq!(ids(&list), vec![1, 3]);
    }

    #[test]
    fn test_view_sorts_then_filters() {
        let list = create_test_list(&["banana", "apple", "cherry", "apricot"]);

        let unchanged = list.view(ColumnOrder::default(), "");
        assert_eq!(unchanged, list.records());

        let ordering = ColumnOrder {
            column: 1,
            direction: Order::Desc,
        };
        let view = list.view(ordering, "ap");
        let values: Vec<&str> = view.iter().map(|r| r.value.as_str()).collect();

        assert_eq!(values, vec!["apricot", "apple"]);
        // The canonical list is untouched
        assert_eq!(list.values(), vec!["banana", "apple", "cherry", "apricot"]);
    }

    #[test]
    fn test_export_and_import() {
        let mut list = create_test_list(&["apple", "banana"]);
        assert_eq!(list.export_text(), "apple\nbanana");

        assert!(list.import("x\n\ny\n"));
        assert_eq!(list.values(), vec!["x", "y"]);
        assert_eq!(ids(&list), vec![1, 2]);

        assert!(!list.import("\n\n"));
        assert_eq!(list.values(), vec!["x", "y"]);
    }
}
